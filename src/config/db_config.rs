use crate::config::option_values::SubsetType;
use crate::config::raw_config::RawConfig;
use crate::config::section_reader::SectionReader;
use crate::constants::db::{HOSTNAME, NAME, SECTION, SUBSET, SUBSET_TYPE};
use crate::error::ConfigurationError;
use serde::Serialize;
use std::str::FromStr;
use validator::Validate;

/// The `[db]` section: what database is built and whether per-gene-list subsets are made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct DbConfig {
    /// Identifier of the output database artifact.
    #[validate(length(min = 1, message = "Database name must not be empty"))]
    pub name: String,
    /// Common name of the host organism, used for labeling.
    pub hostname: Option<String>,
    /// Build additional databases filtered to gene lists.
    pub subset: bool,
    /// Identifier namespace of those gene lists.
    pub subset_type: SubsetType,
}

impl DbConfig {
    pub(crate) fn from_section(section: &SectionReader) -> Result<Self, ConfigurationError> {
        let name = section.required(NAME)?.to_string();
        let subset = section.toggle(SUBSET, false)?;
        let subset_type = match section.optional(SUBSET_TYPE) {
            Some(value) => section.parse_value(SUBSET_TYPE, value, SubsetType::from_str)?,
            None if subset => return Err(ConfigurationError::missing_key(SECTION, SUBSET_TYPE)),
            None => SubsetType::default(),
        };

        Ok(Self {
            name,
            hostname: section.optional_string(HOSTNAME),
            subset,
            subset_type,
        })
    }

    pub(crate) fn write_to(&self, raw: &mut RawConfig) {
        raw.insert(SECTION, NAME, &self.name);
        if let Some(hostname) = &self.hostname {
            raw.insert(SECTION, HOSTNAME, hostname);
        }
        raw.insert(SECTION, SUBSET, if self.subset { "1" } else { "0" });
        raw.insert(SECTION, SUBSET_TYPE, self.subset_type.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn db_config(text: &str) -> Result<DbConfig, ConfigurationError> {
        let raw = RawConfig::from_str(text).unwrap();
        DbConfig::from_section(&SectionReader::new(&raw, SECTION))
    }

    #[rstest]
    fn test_from_section() {
        let config = db_config(
            "[db]\nname=kidneydb\nhostname=human\nsubset=1\nsubsettype=symbol_Homo_sapiens\n",
        )
        .unwrap();

        assert_eq!(
            config,
            DbConfig {
                name: "kidneydb".to_string(),
                hostname: Some("human".to_string()),
                subset: true,
                subset_type: SubsetType::Symbol("Homo_sapiens".to_string()),
            }
        );
    }

    #[rstest]
    fn test_defaults() {
        let config = db_config("[db]\nname=kidneydb\n").unwrap();

        assert_eq!(config.hostname, None);
        assert!(!config.subset);
        assert_eq!(config.subset_type, SubsetType::EnsemblGene);
    }

    #[rstest]
    fn test_missing_name() {
        let err = db_config("[db]\nhostname=human\n").unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingKey { key, .. } if key == NAME));
    }

    #[rstest]
    fn test_subset_requires_subset_type() {
        let err = db_config("[db]\nname=kidneydb\nsubset=1\n").unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingKey { key, .. } if key == SUBSET_TYPE));
    }

    #[rstest]
    #[case("ensembl")]
    #[case("gene_symbol")]
    #[case("ENTREZ")]
    fn test_invalid_subset_type(#[case] subset_type: &str) {
        let err = db_config(&format!("[db]\nname=kidneydb\nsubsettype={subset_type}\n")).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { key, .. } if key == SUBSET_TYPE));
    }

    #[rstest]
    fn test_subset_type_is_checked_when_subset_disabled() {
        let err = db_config("[db]\nname=kidneydb\nsubset=0\nsubsettype=refseq\n").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { .. }));
    }

    #[rstest]
    #[case("yes")]
    #[case("true")]
    #[case("2")]
    fn test_subset_rejects_non_toggle_values(#[case] subset: &str) {
        let err = db_config(&format!("[db]\nname=kidneydb\nsubset={subset}\n")).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidValue { key, value, .. } if key == SUBSET && value == subset
        ));
    }

    #[rstest]
    fn test_empty_name_fails_validation() {
        let config = db_config("[db]\nname=\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[rstest]
    fn test_write_to() {
        let config = db_config("[db]\nname=kidneydb\n").unwrap();
        let mut raw = RawConfig::default();
        config.write_to(&mut raw);

        assert_eq!(
            raw.to_string(),
            "[db]\nname=kidneydb\nsubset=0\nsubsettype=ensemblg\n"
        );
    }
}
