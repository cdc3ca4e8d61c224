use crate::config::ini_document::SyntaxError;
use config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Could not find config file at '{0}'")]
    NotFound(PathBuf),
    #[error("None of the config layers {searched:?} exist")]
    NoLayerFound { searched: Vec<PathBuf> },
    #[error("Could not read config file at '{path}'. {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("Missing required option '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },
    #[error("Invalid value '{value}' for option '{key}' in section [{section}]: {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
    #[error("Unknown section [{0}]")]
    UnknownSection(String),
    #[error("Unknown option '{key}' in section [{section}]")]
    UnknownKey { section: String, key: String },
    #[error(
        "Could not expand environment variable '{var_name}' in option '{key}' of section [{section}]"
    )]
    EnvExpansion {
        section: String,
        key: String,
        var_name: String,
    },
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ConfigurationError {
    pub(crate) fn missing_key(section: impl Into<String>, key: impl Into<String>) -> Self {
        ConfigurationError::MissingKey {
            section: section.into(),
            key: key.into(),
        }
    }

    pub(crate) fn invalid_value(
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigurationError::InvalidValue {
            section: section.into(),
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
