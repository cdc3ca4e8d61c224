use serde::{Deserialize, Serialize};

/// What to do with sections and options the schema does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeyPolicy {
    /// Fail on the first unknown section or option.
    #[default]
    Reject,
    /// Log a warning and ignore it.
    Warn,
}
