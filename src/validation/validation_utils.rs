use crate::config::option_values::Selection;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt::Display;
use validator::ValidationError;

pub(crate) fn fail_validation_on_duplicates<T: Serialize>(
    duplicates: &[T],
    error_id: &'static str,
    reason: &str,
) -> Result<(), ValidationError> {
    if duplicates.is_empty() {
        Ok(())
    } else {
        let mut error = ValidationError::new(error_id);
        error.add_param(Cow::from("duplicates"), &duplicates);
        Err(error.with_message(Cow::Owned(reason.to_string())))
    }
}

fn find_duplicates<T: Display>(entries: &[T]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(ToString::to_string)
        .filter(|entry| !seen.insert(entry.clone()))
        .collect()
}

pub(crate) fn validate_unique_entries<T: Display>(entries: &[T]) -> Result<(), ValidationError> {
    fail_validation_on_duplicates(
        &find_duplicates(entries),
        "duplicates",
        "Found duplicate entries in list",
    )
}

pub(crate) fn validate_unique_selection<T: Display>(
    selection: &Selection<T>,
) -> Result<(), ValidationError> {
    match selection {
        Selection::All => Ok(()),
        Selection::Only(entries) => fail_validation_on_duplicates(
            &find_duplicates(entries),
            "duplicates",
            "Found duplicate entries in selection",
        ),
    }
}
