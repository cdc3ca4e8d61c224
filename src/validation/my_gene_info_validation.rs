use crate::config::MyGeneInfoConfig;
use crate::config::option_values::AnnotationCategory;
use std::borrow::Cow;
use validator::ValidationError;

/// Homology annotations are useless without at least one target organism.
pub(crate) fn validate_homologene_targets(
    config: &MyGeneInfoConfig,
) -> Result<(), ValidationError> {
    if config.requests(AnnotationCategory::Homologene) && config.homologene.is_empty() {
        let mut error = ValidationError::new("homologene_targets");
        error.add_param(Cow::from("annotations"), &config.annotations);
        return Err(error.with_message(Cow::Owned(
            "'homologene' annotations require at least one target taxonomy id in my_gene_info.homologene"
                .to_string(),
        )));
    }
    Ok(())
}
