use crate::config::option_values::TaxonomyId;
use crate::config::raw_config::RawConfig;
use crate::config::section_reader::SectionReader;
use crate::constants::entrez::{EMAIL, HOST, SCINAME, SECTION};
use crate::error::ConfigurationError;
use serde::Serialize;
use std::str::FromStr;
use validator::Validate;

/// The `[entrez]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct EntrezConfig {
    /// Organism queried in Entrez.
    pub host: TaxonomyId,
    pub sciname: Option<String>,
    /// Contact address sent with every Entrez request, as NCBI's usage policy requires.
    #[validate(email(message = "Entrez requires a valid contact e-mail address"))]
    pub email: String,
}

impl EntrezConfig {
    pub(crate) fn from_section(section: &SectionReader) -> Result<Self, ConfigurationError> {
        Ok(Self {
            host: section.required_value(HOST, TaxonomyId::from_str)?,
            sciname: section.optional_string(SCINAME),
            email: section.required(EMAIL)?.to_string(),
        })
    }

    pub(crate) fn write_to(&self, raw: &mut RawConfig) {
        raw.insert(SECTION, HOST, self.host.to_string());
        if let Some(sciname) = &self.sciname {
            raw.insert(SECTION, SCINAME, sciname);
        }
        raw.insert(SECTION, EMAIL, &self.email);
    }
}
