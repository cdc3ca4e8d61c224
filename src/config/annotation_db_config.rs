use crate::config::ConfigLoader;
use crate::config::db_config::DbConfig;
use crate::config::entrez_config::EntrezConfig;
use crate::config::homologues_config::HomologuesConfig;
use crate::config::my_gene_info_config::MyGeneInfoConfig;
use crate::config::raw_config::RawConfig;
use crate::config::section_reader::SectionReader;
use crate::config::unknown_key_policy::UnknownKeyPolicy;
use crate::constants::{db, entrez, homologues, my_gene_info};
use crate::error::ConfigurationError;
use crate::validation::unknown_options::check_unknown_options;
use serde::Serialize;
use std::path::PathBuf;
use validator::Validate;

/// Represents all settings of the gene annotation database pipeline.
///
/// Built once at startup and handed by reference to every stage that needs it.
/// Construction coerces and validates every option, so a value of this type is
/// always complete and consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct AnnotationDbConfig {
    #[validate(nested)]
    pub db: DbConfig,
    #[validate(nested)]
    pub entrez: EntrezConfig,
    #[validate(nested)]
    pub my_gene_info: MyGeneInfoConfig,
    #[validate(nested)]
    pub homologues: HomologuesConfig,
}

impl AnnotationDbConfig {
    pub fn from_raw(raw: &RawConfig, policy: UnknownKeyPolicy) -> Result<Self, ConfigurationError> {
        check_unknown_options(raw, policy)?;

        let config = Self {
            db: DbConfig::from_section(&SectionReader::new(raw, db::SECTION))?,
            entrez: EntrezConfig::from_section(&SectionReader::new(raw, entrez::SECTION))?,
            my_gene_info: MyGeneInfoConfig::from_section(&SectionReader::new(
                raw,
                my_gene_info::SECTION,
            ))?,
            homologues: HomologuesConfig::from_section(&SectionReader::new(
                raw,
                homologues::SECTION,
            ))?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Canonical raw form: every option written out, defaults included.
    pub fn to_raw(&self) -> RawConfig {
        let mut raw = RawConfig::default();
        self.db.write_to(&mut raw);
        self.entrez.write_to(&mut raw);
        self.my_gene_info.write_to(&mut raw);
        self.homologues.write_to(&mut raw);
        raw
    }
}

impl TryFrom<RawConfig> for AnnotationDbConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        AnnotationDbConfig::from_raw(&raw, UnknownKeyPolicy::default())
    }
}

impl TryFrom<PathBuf> for AnnotationDbConfig {
    type Error = ConfigurationError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        ConfigLoader::new().load(path)
    }
}
