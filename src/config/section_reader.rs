use crate::config::option_values::Selection;
use crate::config::raw_config::{RawConfig, RawSection};
use crate::constants::SELECTION_ALL;
use crate::error::ConfigurationError;
use crate::utils::split_list;

/// Typed access to the options of one section, turning coercion failures into
/// [`ConfigurationError`]s that name the section and option.
pub(crate) struct SectionReader<'a> {
    name: &'static str,
    entries: Option<&'a RawSection>,
}

impl<'a> SectionReader<'a> {
    pub(crate) fn new(raw: &'a RawConfig, name: &'static str) -> Self {
        Self {
            name,
            entries: raw.section(name),
        }
    }

    pub(crate) fn optional(&self, key: &str) -> Option<&'a str> {
        self.entries
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub(crate) fn required(&self, key: &str) -> Result<&'a str, ConfigurationError> {
        self.optional(key)
            .ok_or_else(|| ConfigurationError::missing_key(self.name, key))
    }

    pub(crate) fn optional_string(&self, key: &str) -> Option<String> {
        self.optional(key).map(str::to_string)
    }

    pub(crate) fn string_or(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or(default).to_string()
    }

    pub(crate) fn parse_value<T>(
        &self,
        key: &str,
        value: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, ConfigurationError> {
        parse(value)
            .map_err(|reason| ConfigurationError::invalid_value(self.name, key, value, reason))
    }

    pub(crate) fn required_value<T>(
        &self,
        key: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T, ConfigurationError> {
        let value = self.required(key)?;
        self.parse_value(key, value, parse)
    }

    /// A `0`/`1` switch. Anything else, including `true` or `yes`, is rejected.
    pub(crate) fn toggle(&self, key: &str, default: bool) -> Result<bool, ConfigurationError> {
        match self.optional(key) {
            None => Ok(default),
            Some(value) => self.parse_value(key, value, |v| match v {
                "0" => Ok(false),
                "1" => Ok(true),
                _ => Err("expected 0 or 1".to_string()),
            }),
        }
    }

    pub(crate) fn list<T>(
        &self,
        key: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<Vec<T>, ConfigurationError> {
        let Some(value) = self.optional(key) else {
            return Ok(Vec::new());
        };
        split_list(value)
            .iter()
            .map(|token| self.parse_value(key, value, |_| parse(token.as_str())))
            .collect()
    }

    /// `all`, or a comma-delimited subset. An absent option selects everything.
    pub(crate) fn selection<T>(
        &self,
        key: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<Selection<T>, ConfigurationError> {
        let Some(value) = self.optional(key) else {
            return Ok(Selection::All);
        };
        let tokens = split_list(value);

        if tokens.is_empty() {
            return Err(ConfigurationError::invalid_value(
                self.name,
                key,
                value,
                format!("expected '{SELECTION_ALL}' or a comma-separated list"),
            ));
        }
        if tokens
            .iter()
            .any(|token| token.eq_ignore_ascii_case(SELECTION_ALL))
        {
            if tokens.len() > 1 {
                return Err(ConfigurationError::invalid_value(
                    self.name,
                    key,
                    value,
                    format!("'{SELECTION_ALL}' cannot be combined with other entries"),
                ));
            }
            return Ok(Selection::All);
        }

        tokens
            .iter()
            .map(|token| self.parse_value(key, value, |_| parse(token.as_str())))
            .collect::<Result<Vec<T>, ConfigurationError>>()
            .map(Selection::Only)
    }
}
