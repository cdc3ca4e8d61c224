use crate::constants::DEFAULT_CONFIG_FILE_NAME;
use directories::ProjectDirs;
use log::warn;
use std::env::home_dir;
use std::path::PathBuf;

/// Splits a comma-delimited option value into its tokens.
///
/// Tokens are trimmed and keep their order. Empty tokens, e.g. from a trailing comma,
/// are dropped.
pub fn split_list(value: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for token in value.split(',').map(str::trim) {
        if token.is_empty() {
            if !value.trim().is_empty() {
                warn!("Dropping empty entry in list '{value}'");
            }
            continue;
        }
        tokens.push(token.to_string());
    }
    tokens
}

/// Per-user location of the configuration file, e.g. `~/.config/annotationdb/pipeline.ini`.
pub(crate) fn user_config_file() -> Option<PathBuf> {
    let pkg_name = env!("CARGO_PKG_NAME");

    let config_dir = if let Some(project_dir) = ProjectDirs::from("", "", pkg_name) {
        project_dir.config_dir().to_path_buf()
    } else {
        home_dir()?.join(format!(".{pkg_name}"))
    };
    Some(config_dir.join(DEFAULT_CONFIG_FILE_NAME))
}

/// Config layers in increasing priority: the per-user file, `../pipeline.ini`, `./pipeline.ini`.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = user_config_file().into_iter().collect();
    paths.push(PathBuf::from("..").join(DEFAULT_CONFIG_FILE_NAME));
    paths.push(PathBuf::from(DEFAULT_CONFIG_FILE_NAME));
    paths
}
