use crate::config::option_values::{
    AnnotationCategory, EnsemblFeature, GoAspect, PathwayDatabase, Selection, TaxonomyId,
    join_values, parse_variant,
};
use crate::config::raw_config::RawConfig;
use crate::config::section_reader::SectionReader;
use crate::constants::my_gene_info::{
    ANNOTATIONS, DEFAULT_GO_ONTOLOGY, DEFAULT_SOURCE, ENSEMBL, GO, GO_ONTOLOGY, HOMOLOGENE,
    PATHWAY, SECTION, SOURCE,
};
use crate::error::ConfigurationError;
use crate::validation::my_gene_info_validation::validate_homologene_targets;
use crate::validation::validation_utils::{validate_unique_entries, validate_unique_selection};
use serde::Serialize;
use std::str::FromStr;
use validator::Validate;

/// The `[my_gene_info]` section: which annotations are fetched from MyGene.info.
///
/// Each category in `annotations` has a matching sub-selection (`go`, `ensembl`,
/// `homologene`, `pathway`) that narrows what is kept for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[validate(schema(function = "validate_homologene_targets"))]
pub struct MyGeneInfoConfig {
    /// Base URL of the MyGene.info API.
    #[validate(url(message = "MyGene.info source must be a URL"))]
    pub source: String,
    #[validate(custom(function = "validate_unique_entries"))]
    pub annotations: Vec<AnnotationCategory>,
    #[validate(custom(function = "validate_unique_selection"))]
    pub go: Selection<GoAspect>,
    /// Where the GO ontology file is downloaded from.
    #[validate(url(message = "GO ontology source must be a URL"))]
    pub go_ontology: String,
    #[validate(custom(function = "validate_unique_selection"))]
    pub ensembl: Selection<EnsemblFeature>,
    /// Target organisms for homology lookups.
    #[validate(custom(function = "validate_unique_entries"))]
    pub homologene: Vec<TaxonomyId>,
    #[validate(custom(function = "validate_unique_selection"))]
    pub pathway: Selection<PathwayDatabase>,
}

impl MyGeneInfoConfig {
    pub fn requests(&self, category: AnnotationCategory) -> bool {
        self.annotations.contains(&category)
    }

    pub(crate) fn from_section(section: &SectionReader) -> Result<Self, ConfigurationError> {
        Ok(Self {
            source: section.string_or(SOURCE, DEFAULT_SOURCE),
            annotations: section.list(ANNOTATIONS, parse_variant)?,
            go: section.selection(GO, parse_variant)?,
            go_ontology: section.string_or(GO_ONTOLOGY, DEFAULT_GO_ONTOLOGY),
            ensembl: section.selection(ENSEMBL, parse_variant)?,
            homologene: section.list(HOMOLOGENE, TaxonomyId::from_str)?,
            pathway: section.selection(PATHWAY, parse_variant)?,
        })
    }

    pub(crate) fn write_to(&self, raw: &mut RawConfig) {
        raw.insert(SECTION, SOURCE, &self.source);
        raw.insert(SECTION, ANNOTATIONS, join_values(&self.annotations));
        raw.insert(SECTION, GO, self.go.to_string());
        raw.insert(SECTION, GO_ONTOLOGY, &self.go_ontology);
        raw.insert(SECTION, ENSEMBL, self.ensembl.to_string());
        raw.insert(SECTION, HOMOLOGENE, join_values(&self.homologene));
        raw.insert(SECTION, PATHWAY, self.pathway.to_string());
    }
}

impl Default for MyGeneInfoConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            annotations: Vec::new(),
            go: Selection::All,
            go_ontology: DEFAULT_GO_ONTOLOGY.to_string(),
            ensembl: Selection::All,
            homologene: Vec::new(),
            pathway: Selection::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn my_gene_info_config(text: &str) -> Result<MyGeneInfoConfig, ConfigurationError> {
        let raw = RawConfig::from_str(text).unwrap();
        MyGeneInfoConfig::from_section(&SectionReader::new(&raw, SECTION))
    }

    #[rstest]
    fn test_from_section() {
        let config = my_gene_info_config(
            "[my_gene_info]
source=http://mygene.info/v3
annotations=ensembl,go,homologene,pathway
go=BP,MF
goont=http://purl.obolibrary.org/obo/go/go-basic.obo
ensembl=transcript
homologene=10090
pathway=kegg,reactome
",
        )
        .unwrap();

        assert_eq!(
            config,
            MyGeneInfoConfig {
                source: "http://mygene.info/v3".to_string(),
                annotations: vec![
                    AnnotationCategory::Ensembl,
                    AnnotationCategory::Go,
                    AnnotationCategory::Homologene,
                    AnnotationCategory::Pathway,
                ],
                go: Selection::Only(vec![GoAspect::Bp, GoAspect::Mf]),
                go_ontology: "http://purl.obolibrary.org/obo/go/go-basic.obo".to_string(),
                ensembl: Selection::Only(vec![EnsemblFeature::Transcript]),
                homologene: vec![TaxonomyId::MOUSE],
                pathway: Selection::Only(vec![PathwayDatabase::Kegg, PathwayDatabase::Reactome]),
            }
        );
        assert!(config.validate().is_ok());
        assert!(config.requests(AnnotationCategory::Pathway));
        assert!(!config.requests(AnnotationCategory::Uniprot));
    }

    #[rstest]
    fn test_missing_section_uses_defaults() {
        let config = my_gene_info_config("[db]\nname=kidneydb\n").unwrap();
        assert_eq!(config, MyGeneInfoConfig::default());
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case("annotations=ensembl,genes")]
    #[case("go=BP,XY")]
    #[case("ensembl=gene")]
    #[case("pathway=all,kegg")]
    #[case("homologene=mouse")]
    fn test_invalid_values(#[case] line: &str) {
        let err = my_gene_info_config(&format!("[my_gene_info]\n{line}\n")).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { .. }));
    }

    #[rstest]
    #[case("annotations=go,ensembl,go")]
    #[case("go=BP,BP")]
    #[case("homologene=10090,10090")]
    #[case("pathway=kegg,reactome,kegg")]
    fn test_duplicates_fail_validation(#[case] line: &str) {
        let config = my_gene_info_config(&format!("[my_gene_info]\n{line}\n")).unwrap();
        assert!(config.validate().is_err());
    }

    #[rstest]
    fn test_homologene_annotations_need_targets() {
        let config = my_gene_info_config("[my_gene_info]\nannotations=homologene\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[rstest]
    fn test_invalid_source_url_fails_validation() {
        let config = my_gene_info_config("[my_gene_info]\nsource=mygene info\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[rstest]
    fn test_write_to_round_trip() {
        let config = my_gene_info_config(
            "[my_gene_info]\nannotations=go,pathway\ngo=CC\npathway=wikipathways\n",
        )
        .unwrap();
        let mut raw = RawConfig::default();
        config.write_to(&mut raw);

        let reloaded = MyGeneInfoConfig::from_section(&SectionReader::new(&raw, SECTION)).unwrap();
        assert_eq!(reloaded, config);
    }
}
