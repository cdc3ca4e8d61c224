pub mod annotation_db_config;
pub use self::annotation_db_config::AnnotationDbConfig;
mod config_loader;
pub use self::config_loader::ConfigLoader;
pub mod db_config;
pub use self::db_config::DbConfig;
pub mod entrez_config;
pub use self::entrez_config::EntrezConfig;
pub mod homologues_config;
pub use self::homologues_config::HomologuesConfig;
pub mod ini_document;
pub mod my_gene_info_config;
pub use self::my_gene_info_config::MyGeneInfoConfig;
pub mod option_values;
pub mod raw_config;
pub use self::raw_config::{RawConfig, RawSection};
mod section_reader;
pub mod unknown_key_policy;
pub use self::unknown_key_policy::UnknownKeyPolicy;
