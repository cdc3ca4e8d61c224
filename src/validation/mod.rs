pub(crate) mod my_gene_info_validation;
pub(crate) mod unknown_options;
pub(crate) mod validation_utils;
