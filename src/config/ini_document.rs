use crate::config::raw_config::{RawConfig, RawSection};
use crate::error::ConfigurationError;
use config::{ConfigError, Map, Source, Value, ValueKind};
use log::debug;
use ordermap::OrderMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Characters the layer merge would read as path separators or subscripts.
const RESERVED_SECTION_CHARS: [char; 3] = ['.', '[', ']'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("malformed line '{0}', expected '[section]' or 'key=value'")]
    MalformedLine(String),
    #[error("section header '{0}' is missing its closing ']'")]
    UnterminatedSection(String),
    #[error("section header has an empty name")]
    EmptySectionName,
    #[error("section name '{0}' contains a reserved character ('.', '[' or ']')")]
    InvalidSectionName(String),
    #[error("section [{0}] is declared more than once")]
    DuplicateSection(String),
    #[error("option '{key}' is declared more than once in section [{section}]")]
    DuplicateKey { section: String, key: String },
    #[error("option '{0}' appears before any section header")]
    OrphanKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Syntax error in {} at line {line}: {kind}",
    .path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "config".to_string())
)]
pub struct SyntaxError {
    pub path: Option<PathBuf>,
    pub line: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    fn new(line: usize, kind: SyntaxErrorKind) -> Self {
        Self {
            path: None,
            line,
            kind,
        }
    }

    fn in_file(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

/// A single parsed configuration file.
///
/// The document keeps sections and options in file order and remembers where it
/// was read from, so it can be handed to a [`config::ConfigBuilder`] as one layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    origin: Option<PathBuf>,
    content: RawConfig,
}

impl IniDocument {
    /// Parses the section/key-value text format.
    ///
    /// Blank lines and lines starting with `#` or `;` are skipped. A `#` after the
    /// `=` belongs to the value. Section names may not contain `.`, `[` or `]`.
    pub fn parse(text: &str) -> Result<Self, SyntaxError> {
        let mut sections: OrderMap<String, RawSection> = OrderMap::new();
        let mut current: Option<(String, RawSection)> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let Some(end) = header.find(']') else {
                    return Err(SyntaxError::new(
                        line_number,
                        SyntaxErrorKind::UnterminatedSection(line.to_string()),
                    ));
                };
                if !header[end + 1..].trim().is_empty() {
                    return Err(SyntaxError::new(
                        line_number,
                        SyntaxErrorKind::MalformedLine(line.to_string()),
                    ));
                }
                let name = header[..end].trim();
                if name.is_empty() {
                    return Err(SyntaxError::new(
                        line_number,
                        SyntaxErrorKind::EmptySectionName,
                    ));
                }
                if name.contains(RESERVED_SECTION_CHARS) {
                    return Err(SyntaxError::new(
                        line_number,
                        SyntaxErrorKind::InvalidSectionName(name.to_string()),
                    ));
                }

                if let Some((finished_name, finished_entries)) = current.take() {
                    sections.insert(finished_name, finished_entries);
                }
                if sections.contains_key(name) {
                    return Err(SyntaxError::new(
                        line_number,
                        SyntaxErrorKind::DuplicateSection(name.to_string()),
                    ));
                }
                current = Some((name.to_string(), RawSection::new()));
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(SyntaxError::new(
                    line_number,
                    SyntaxErrorKind::MalformedLine(line.to_string()),
                ));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(SyntaxError::new(
                    line_number,
                    SyntaxErrorKind::MalformedLine(line.to_string()),
                ));
            }

            let Some((section_name, entries)) = current.as_mut() else {
                return Err(SyntaxError::new(
                    line_number,
                    SyntaxErrorKind::OrphanKey(key.to_string()),
                ));
            };
            if entries.contains_key(key) {
                return Err(SyntaxError::new(
                    line_number,
                    SyntaxErrorKind::DuplicateKey {
                        section: section_name.clone(),
                        key: key.to_string(),
                    },
                ));
            }
            entries.insert(key.to_string(), value.trim().to_string());
        }

        if let Some((name, entries)) = current {
            sections.insert(name, entries);
        }

        Ok(Self {
            origin: None,
            content: RawConfig::from_sections(sections),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let text = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ConfigurationError::NotFound(path.to_path_buf()),
            _ => ConfigurationError::Unreadable {
                path: path.to_path_buf(),
                source: err,
            },
        })?;

        let mut document = Self::parse(&text).map_err(|err| err.in_file(path))?;
        debug!(
            "Parsed {} section(s) from {}",
            document.content.len(),
            path.display()
        );
        document.origin = Some(path.to_path_buf());
        Ok(document)
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn content(&self) -> &RawConfig {
        &self.content
    }

    pub fn into_content(self) -> RawConfig {
        self.content
    }
}

impl Source for IniDocument {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        let origin = self.origin.as_ref().map(|p| p.display().to_string());
        let mut root = Map::new();

        for (section, entries) in self.content.sections() {
            let mut table = Map::new();
            for (key, value) in entries {
                table.insert(
                    key.clone(),
                    Value::new(origin.as_ref(), ValueKind::String(value.clone())),
                );
            }
            root.insert(
                section.to_string(),
                Value::new(origin.as_ref(), ValueKind::Table(table)),
            );
        }

        Ok(root)
    }
}
