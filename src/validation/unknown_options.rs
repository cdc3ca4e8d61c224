use crate::config::RawConfig;
use crate::config::UnknownKeyPolicy;
use crate::constants::KNOWN_SECTIONS;
use crate::error::ConfigurationError;
use log::warn;

fn known_options(section: &str) -> Option<&'static [&'static str]> {
    KNOWN_SECTIONS
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, options)| *options)
}

pub(crate) fn check_unknown_options(
    raw: &RawConfig,
    policy: UnknownKeyPolicy,
) -> Result<(), ConfigurationError> {
    for (section, entries) in raw.sections() {
        let Some(known) = known_options(section) else {
            match policy {
                UnknownKeyPolicy::Reject => {
                    return Err(ConfigurationError::UnknownSection(section.to_string()));
                }
                UnknownKeyPolicy::Warn => {
                    warn!("Ignoring unknown section [{section}]");
                    continue;
                }
            }
        };

        for key in entries.keys() {
            if known.contains(&key.as_str()) {
                continue;
            }
            match policy {
                UnknownKeyPolicy::Reject => {
                    return Err(ConfigurationError::UnknownKey {
                        section: section.to_string(),
                        key: key.clone(),
                    });
                }
                UnknownKeyPolicy::Warn => {
                    warn!("Ignoring unknown option '{key}' in section [{section}]");
                }
            }
        }
    }
    Ok(())
}
