use crate::config::ini_document::{IniDocument, SyntaxError};
use crate::error::ConfigurationError;
use ordermap::OrderMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

/// Options of one section, in file order.
pub type RawSection = OrderMap<String, String>;

/// The untyped view of a configuration: section name to option name to raw string value.
///
/// Every value is kept exactly as written (after trimming). Coercion into integers,
/// toggles and lists happens in [`crate::config::AnnotationDbConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConfig {
    sections: OrderMap<String, RawSection>,
}

impl RawConfig {
    pub(crate) fn from_sections(sections: OrderMap<String, RawSection>) -> Self {
        Self { sections }
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn section(&self, name: &str) -> Option<&RawSection> {
        self.sections.get(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &RawSection)> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Flattened `section_option` view, e.g. `db_name`, in the order the options were declared.
    pub fn params(&self) -> OrderMap<String, String> {
        self.sections
            .iter()
            .flat_map(|(section, entries)| {
                entries
                    .iter()
                    .map(move |(key, value)| (format!("{section}_{key}"), value.clone()))
            })
            .collect()
    }

    pub fn to_ini_string(&self) -> String {
        self.to_string()
    }

    pub(crate) fn insert(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Expands `$VAR` and `${VAR}` references in every value from the process environment.
    pub(crate) fn expand_env(self) -> Result<Self, ConfigurationError> {
        let mut sections = OrderMap::new();
        for (section, entries) in self.sections {
            let mut expanded = RawSection::new();
            for (key, value) in entries {
                let value = shellexpand::env(&value)
                    .map_err(|err| ConfigurationError::EnvExpansion {
                        section: section.clone(),
                        key: key.clone(),
                        var_name: err.var_name,
                    })?
                    .into_owned();
                expanded.insert(key, value);
            }
            sections.insert(section, expanded);
        }
        Ok(Self { sections })
    }
}

impl FromStr for RawConfig {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(IniDocument::parse(s)?.into_content())
    }
}

impl Display for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (section, entries)) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{section}]")?;
            for (key, value) in entries {
                writeln!(f, "{key}={value}")?;
            }
        }
        Ok(())
    }
}
