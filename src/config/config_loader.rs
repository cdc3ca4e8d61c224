use crate::config::annotation_db_config::AnnotationDbConfig;
use crate::config::ini_document::IniDocument;
use crate::config::raw_config::RawConfig;
use crate::config::unknown_key_policy::UnknownKeyPolicy;
use crate::constants::{ENV_PREFIX, ENV_SEPARATOR};
use crate::error::ConfigurationError;
use crate::utils::default_search_paths;
use config::{Config, ConfigError, Environment, Source};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Reads configuration files into a validated [`AnnotationDbConfig`].
///
/// Several files can be stacked as layers: options in later files override the same
/// options in earlier ones. With environment overrides enabled,
/// `ANNOTATIONDB_<SECTION>__<OPTION>` variables are applied on top of all files.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: UnknownKeyPolicy,
    env_overrides: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: UnknownKeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_env_overrides(mut self, enabled: bool) -> Self {
        self.env_overrides = enabled;
        self
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<AnnotationDbConfig, ConfigurationError> {
        let raw = self.load_raw(path)?;
        self.build(&raw)
    }

    /// Loads a single file without coercing it, but with layering, env overrides and
    /// `$VAR` expansion applied.
    pub fn load_raw(&self, path: impl AsRef<Path>) -> Result<RawConfig, ConfigurationError> {
        let layer = IniDocument::from_file(path.as_ref())?;
        self.merge(vec![layer])
    }

    /// Loads every existing file of `paths` in order. Missing files are skipped, but at
    /// least one must exist.
    pub fn load_layered<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<AnnotationDbConfig, ConfigurationError> {
        let raw = self.load_layered_raw(paths)?;
        self.build(&raw)
    }

    pub fn load_layered_raw<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<RawConfig, ConfigurationError> {
        let mut layers = Vec::new();
        for path in paths.iter().map(AsRef::as_ref) {
            if path.is_file() {
                debug!("Adding config layer {}", path.display());
                layers.push(IniDocument::from_file(path)?);
            } else {
                debug!("Skipping missing config layer {}", path.display());
            }
        }

        if layers.is_empty() {
            return Err(ConfigurationError::NoLayerFound {
                searched: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            });
        }
        self.merge(layers)
    }

    /// Layered load over the per-user config file, `../pipeline.ini` and `./pipeline.ini`.
    pub fn discover(&self) -> Result<AnnotationDbConfig, ConfigurationError> {
        let paths: Vec<PathBuf> = default_search_paths();
        self.load_layered(&paths)
    }

    pub fn build(&self, raw: &RawConfig) -> Result<AnnotationDbConfig, ConfigurationError> {
        let config = AnnotationDbConfig::from_raw(raw, self.policy)?;
        info!(
            "Loaded configuration for database '{}' (taxonomy id {})",
            config.db.name, config.entrez.host
        );
        Ok(config)
    }

    fn merge(&self, layers: Vec<IniDocument>) -> Result<RawConfig, ConfigurationError> {
        let mut builder = Config::builder();
        for layer in layers {
            builder = builder.add_source(layer);
        }
        if self.env_overrides {
            for (key, value) in env_overrides()? {
                builder = builder.set_override(key, value)?;
            }
        }

        let merged: RawConfig = builder.build()?.try_deserialize()?;
        merged.expand_env()
    }
}

/// Collects `ANNOTATIONDB_<SECTION>__<OPTION>` variables as `section.option` keys.
///
/// Variables sharing the prefix but not naming exactly one section and one option are
/// skipped with a warning.
fn env_overrides() -> Result<Vec<(String, String)>, ConfigError> {
    let variables = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator(ENV_SEPARATOR)
        .collect()?;

    let mut overrides = Vec::new();
    for (key, value) in variables {
        if is_section_option_key(&key) {
            debug!("Overriding '{key}' from the environment");
            overrides.push((key, value.into_string()?));
        } else {
            warn!(
                "Ignoring environment variable for '{key}', expected {ENV_PREFIX}_<SECTION>{ENV_SEPARATOR}<OPTION>"
            );
        }
    }
    Ok(overrides)
}

fn is_section_option_key(key: &str) -> bool {
    let is_name = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    };
    key.split_once('.')
        .is_some_and(|(section, option)| is_name(section) && is_name(option))
}
