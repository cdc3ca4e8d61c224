use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub(crate) static SAMPLE_CONFIG: &str = r#"# Settings for building the kidney gene annotation database
[db]
# name of the output database
name=kidneydb
# common name of the host organism
hostname=human
# also build databases restricted to the gene lists in the working directory (0/1)
subset=0
# identifier type used in those gene lists: ensemblg, entrez or symbol_<Species_name>
subsettype=ensemblg

[entrez]
# NCBI taxonomy id of the host organism
host=9606
sciname=Homo sapiens
# Entrez needs a contact address
email=kidneydb@example.org

[my_gene_info]
source=http://mygene.info/v3
# annotation categories to fetch
annotations=ensembl,go,homologene,pathway
# GO aspects: BP, MF, CC or all
go=all
goont=http://purl.obolibrary.org/obo/go/go-basic.obo
# Ensembl features: transcript, protein or all
ensembl=all
# taxonomy ids of the organisms to find homologues in
homologene=10090
pathway=all

[homologues]
mousemine=http://www.mousemine.org/mousemine/service
humanmine=http://www.humanmine.org/humanmine/service
mgi=1
mousepathway=1
hpo=1
hpoont=http://purl.obolibrary.org/obo/hp.obo
"#;

/// The sample config with one option line removed.
pub(crate) fn sample_config_without(section: &str, key: &str) -> String {
    let mut current_section = String::new();
    SAMPLE_CONFIG
        .lines()
        .filter(|line| {
            let line = line.trim();
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = name.to_string();
                return true;
            }
            !(current_section == section && line.starts_with(&format!("{key}=")))
        })
        .map(|line| format!("{line}\n"))
        .collect()
}

pub(crate) fn write_config(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write config file");
    path
}
