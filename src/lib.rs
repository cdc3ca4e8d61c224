pub mod config;
mod constants;
pub mod error;
#[cfg(test)]
mod test_suite;
pub(crate) mod utils;
mod validation;

pub use config::{AnnotationDbConfig, ConfigLoader, RawConfig};
pub use utils::{default_search_paths, split_list};
