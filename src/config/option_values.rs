use crate::constants::SELECTION_ALL;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;
use strum::VariantNames;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, VariantNames};

/// Identifier namespace of the gene lists used to build subset databases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SubsetType {
    /// Ensembl gene ids, written `ensemblg`.
    #[default]
    EnsemblGene,
    /// Entrez gene ids.
    Entrez,
    /// Gene symbols of the named species, written `symbol_<Species_name>`.
    Symbol(String),
}

impl SubsetType {
    const SYMBOL_PREFIX: &'static str = "symbol_";

    /// Species of a symbol subset with underscores turned into spaces, e.g. `Homo sapiens`.
    pub fn species_name(&self) -> Option<String> {
        match self {
            SubsetType::Symbol(species) => Some(species.replace('_', " ")),
            _ => None,
        }
    }
}

impl FromStr for SubsetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ensemblg" => Ok(SubsetType::EnsemblGene),
            "entrez" => Ok(SubsetType::Entrez),
            _ => s
                .strip_prefix(Self::SYMBOL_PREFIX)
                .map(|species| SubsetType::Symbol(species.to_string()))
                .ok_or_else(|| {
                    "expected one of 'ensemblg', 'entrez' or 'symbol_<Species_name>'".to_string()
                }),
        }
    }
}

impl Display for SubsetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubsetType::EnsemblGene => write!(f, "ensemblg"),
            SubsetType::Entrez => write!(f, "entrez"),
            SubsetType::Symbol(species) => write!(f, "{}{species}", Self::SYMBOL_PREFIX),
        }
    }
}

impl Serialize for SubsetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An NCBI taxonomy id, e.g. `9606` for *Homo sapiens*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaxonomyId(u32);

impl TaxonomyId {
    pub const HUMAN: TaxonomyId = TaxonomyId(9606);
    pub const MOUSE: TaxonomyId = TaxonomyId(10090);

    pub fn new(id: u32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl FromStr for TaxonomyId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `u32::from_str` accepts a leading '+', which would not survive a round trip.
        Some(s)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(TaxonomyId::new)
            .ok_or_else(|| "expected a positive NCBI taxonomy id".to_string())
    }
}

impl Display for TaxonomyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Annotation categories that can be requested from MyGene.info.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    Display,
    AsRefStr,
    VariantNames,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnnotationCategory {
    Ensembl,
    Go,
    Homologene,
    Pathway,
    Interpro,
    Uniprot,
    Refseq,
    Summary,
    Generif,
}

/// The three Gene Ontology aspects.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    Display,
    AsRefStr,
    VariantNames,
    EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum GoAspect {
    /// Biological process
    Bp,
    /// Molecular function
    Mf,
    /// Cellular component
    Cc,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    Display,
    AsRefStr,
    VariantNames,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EnsemblFeature {
    Transcript,
    Protein,
}

/// Pathway databases aggregated by MyGene.info.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    Display,
    AsRefStr,
    VariantNames,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PathwayDatabase {
    Biocarta,
    Humancyc,
    Kegg,
    Mousecyc,
    Netpath,
    Pharmgkb,
    Pid,
    Reactome,
    Smpdb,
    Wikipathways,
    Yeastcyc,
}

/// Either every member of an option's value set, or an explicit ordered subset of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    All,
    Only(Vec<T>),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn includes(&self, item: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(items) => items.contains(item),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: Display> Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{SELECTION_ALL}"),
            Selection::Only(items) => write!(f, "{}", join_values(items)),
        }
    }
}

/// Parses a single token into one of a strum enum's variants.
pub(crate) fn parse_variant<T: FromStr + VariantNames>(token: &str) -> Result<T, String> {
    token
        .parse()
        .map_err(|_| format!("expected one of: {}", T::VARIANTS.join(", ")))
}

pub(crate) fn join_values<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("ensemblg", SubsetType::EnsemblGene)]
    #[case("entrez", SubsetType::Entrez)]
    #[case("symbol_Homo_sapiens", SubsetType::Symbol("Homo_sapiens".to_string()))]
    #[case("symbol_Mus_musculus", SubsetType::Symbol("Mus_musculus".to_string()))]
    #[case("symbol_", SubsetType::Symbol(String::new()))]
    fn test_subset_type_accepts(#[case] value: &str, #[case] expected: SubsetType) {
        let parsed = SubsetType::from_str(value).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), value);
    }

    #[rstest]
    #[case("ensembl")]
    #[case("Entrez")]
    #[case("symbol")]
    #[case("symbolHomo_sapiens")]
    #[case("")]
    #[case("refseq")]
    fn test_subset_type_rejects(#[case] value: &str) {
        assert!(SubsetType::from_str(value).is_err());
    }

    #[rstest]
    fn test_subset_type_species_name() {
        let subset_type = SubsetType::Symbol("Homo_sapiens".to_string());
        assert_eq!(subset_type.species_name(), Some("Homo sapiens".to_string()));
        assert_eq!(SubsetType::Entrez.species_name(), None);
    }

    #[rstest]
    #[case("9606", Ok(TaxonomyId::HUMAN))]
    #[case("10090", Ok(TaxonomyId::MOUSE))]
    #[case("0", Err(()))]
    #[case("-9606", Err(()))]
    #[case("+9606", Err(()))]
    #[case("96 06", Err(()))]
    #[case("human", Err(()))]
    #[case("", Err(()))]
    fn test_taxonomy_id_from_str(#[case] value: &str, #[case] expected: Result<TaxonomyId, ()>) {
        assert_eq!(TaxonomyId::from_str(value).map_err(|_| ()), expected);
    }

    #[rstest]
    fn test_go_aspect_is_case_insensitive() {
        assert_eq!(GoAspect::from_str("bp").unwrap(), GoAspect::Bp);
        assert_eq!(GoAspect::from_str("Mf").unwrap(), GoAspect::Mf);
        assert_eq!(GoAspect::Cc.to_string(), "CC");
    }

    #[rstest]
    fn test_annotation_category_names_round_trip() {
        for category in AnnotationCategory::iter() {
            let parsed: AnnotationCategory = parse_variant(category.as_ref()).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[rstest]
    fn test_parse_variant_lists_allowed_values() {
        let err = parse_variant::<EnsemblFeature>("gene").unwrap_err();
        assert_eq!(err, "expected one of: transcript, protein");
    }

    #[rstest]
    fn test_selection_includes() {
        let only = Selection::Only(vec![PathwayDatabase::Kegg, PathwayDatabase::Reactome]);
        assert!(only.includes(&PathwayDatabase::Kegg));
        assert!(!only.includes(&PathwayDatabase::Wikipathways));
        assert!(Selection::<PathwayDatabase>::All.includes(&PathwayDatabase::Wikipathways));
    }

    #[rstest]
    fn test_selection_display() {
        assert_eq!(Selection::<GoAspect>::All.to_string(), "all");
        assert_eq!(
            Selection::Only(vec![GoAspect::Bp, GoAspect::Cc]).to_string(),
            "BP,CC"
        );
    }
}
