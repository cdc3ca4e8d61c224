use crate::config::raw_config::RawConfig;
use crate::config::section_reader::SectionReader;
use crate::constants::homologues::{
    DEFAULT_HPO_ONTOLOGY, DEFAULT_HUMANMINE, DEFAULT_MOUSEMINE, HPO, HPO_ONTOLOGY, HUMANMINE, MGI,
    MOUSE_PATHWAY, MOUSEMINE, SECTION,
};
use crate::error::ConfigurationError;
use serde::Serialize;
use validator::Validate;

/// The `[homologues]` section: model-organism services and the optional annotations
/// pulled through them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct HomologuesConfig {
    #[validate(url(message = "Mousemine endpoint must be a URL"))]
    pub mousemine: String,
    #[validate(url(message = "Humanmine endpoint must be a URL"))]
    pub humanmine: String,
    /// Fetch MGI mouse phenotype annotations.
    pub mgi: bool,
    /// Fetch mouse pathway annotations.
    pub mouse_pathway: bool,
    /// Fetch Human Phenotype Ontology annotations.
    pub hpo: bool,
    #[validate(url(message = "HPO ontology source must be a URL"))]
    pub hpo_ontology: String,
}

impl HomologuesConfig {
    pub(crate) fn from_section(section: &SectionReader) -> Result<Self, ConfigurationError> {
        Ok(Self {
            mousemine: section.string_or(MOUSEMINE, DEFAULT_MOUSEMINE),
            humanmine: section.string_or(HUMANMINE, DEFAULT_HUMANMINE),
            mgi: section.toggle(MGI, false)?,
            mouse_pathway: section.toggle(MOUSE_PATHWAY, false)?,
            hpo: section.toggle(HPO, false)?,
            hpo_ontology: section.string_or(HPO_ONTOLOGY, DEFAULT_HPO_ONTOLOGY),
        })
    }

    pub(crate) fn write_to(&self, raw: &mut RawConfig) {
        let toggle = |enabled: bool| if enabled { "1" } else { "0" };

        raw.insert(SECTION, MOUSEMINE, &self.mousemine);
        raw.insert(SECTION, HUMANMINE, &self.humanmine);
        raw.insert(SECTION, MGI, toggle(self.mgi));
        raw.insert(SECTION, MOUSE_PATHWAY, toggle(self.mouse_pathway));
        raw.insert(SECTION, HPO, toggle(self.hpo));
        raw.insert(SECTION, HPO_ONTOLOGY, &self.hpo_ontology);
    }
}
