/// File name looked up in every layer of the default search path.
pub(crate) const DEFAULT_CONFIG_FILE_NAME: &str = "pipeline.ini";
/// Prefix of environment variables overriding options, e.g. `ANNOTATIONDB_DB__NAME`.
pub(crate) const ENV_PREFIX: &str = "ANNOTATIONDB";
pub(crate) const ENV_SEPARATOR: &str = "__";

pub(crate) const SELECTION_ALL: &str = "all";

pub(crate) mod db {
    pub(crate) const SECTION: &str = "db";
    pub(crate) const NAME: &str = "name";
    pub(crate) const HOSTNAME: &str = "hostname";
    pub(crate) const SUBSET: &str = "subset";
    pub(crate) const SUBSET_TYPE: &str = "subsettype";

    pub(crate) const OPTIONS: &[&str] = &[NAME, HOSTNAME, SUBSET, SUBSET_TYPE];
}

pub(crate) mod entrez {
    pub(crate) const SECTION: &str = "entrez";
    pub(crate) const HOST: &str = "host";
    pub(crate) const SCINAME: &str = "sciname";
    pub(crate) const EMAIL: &str = "email";

    pub(crate) const OPTIONS: &[&str] = &[HOST, SCINAME, EMAIL];
}

pub(crate) mod my_gene_info {
    pub(crate) const SECTION: &str = "my_gene_info";
    pub(crate) const SOURCE: &str = "source";
    pub(crate) const ANNOTATIONS: &str = "annotations";
    pub(crate) const GO: &str = "go";
    pub(crate) const GO_ONTOLOGY: &str = "goont";
    pub(crate) const ENSEMBL: &str = "ensembl";
    pub(crate) const HOMOLOGENE: &str = "homologene";
    pub(crate) const PATHWAY: &str = "pathway";

    pub(crate) const OPTIONS: &[&str] = &[
        SOURCE,
        ANNOTATIONS,
        GO,
        GO_ONTOLOGY,
        ENSEMBL,
        HOMOLOGENE,
        PATHWAY,
    ];

    pub(crate) const DEFAULT_SOURCE: &str = "http://mygene.info/v3";
    pub(crate) const DEFAULT_GO_ONTOLOGY: &str =
        "http://purl.obolibrary.org/obo/go/go-basic.obo";
}

pub(crate) mod homologues {
    pub(crate) const SECTION: &str = "homologues";
    pub(crate) const MOUSEMINE: &str = "mousemine";
    pub(crate) const HUMANMINE: &str = "humanmine";
    pub(crate) const MGI: &str = "mgi";
    pub(crate) const MOUSE_PATHWAY: &str = "mousepathway";
    pub(crate) const HPO: &str = "hpo";
    pub(crate) const HPO_ONTOLOGY: &str = "hpoont";

    pub(crate) const OPTIONS: &[&str] = &[
        MOUSEMINE,
        HUMANMINE,
        MGI,
        MOUSE_PATHWAY,
        HPO,
        HPO_ONTOLOGY,
    ];

    pub(crate) const DEFAULT_MOUSEMINE: &str = "http://www.mousemine.org/mousemine/service";
    pub(crate) const DEFAULT_HUMANMINE: &str = "http://www.humanmine.org/humanmine/service";
    pub(crate) const DEFAULT_HPO_ONTOLOGY: &str = "http://purl.obolibrary.org/obo/hp.obo";
}

/// Every section this crate understands, with the options it accepts.
pub(crate) const KNOWN_SECTIONS: &[(&str, &[&str])] = &[
    (db::SECTION, db::OPTIONS),
    (entrez::SECTION, entrez::OPTIONS),
    (my_gene_info::SECTION, my_gene_info::OPTIONS),
    (homologues::SECTION, homologues::OPTIONS),
];
