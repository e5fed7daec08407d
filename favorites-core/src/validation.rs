//! Per-entry validation
//!
//! Validation state is never stored. It is recomputed from the current
//! [`EntryList`] whenever someone asks, and keyed by [`EntryId`] so an error
//! follows its entry through reorders.

use std::fmt;

use crate::entry::{EntryId, EntryList};

/// Message shown next to an empty entry
pub const REQUIRED_MESSAGE: &str = "Please enter a favorite";

/// Why a single entry is invalid
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => REQUIRED_MESSAGE,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

/// The single rule of the form: a favorite must not be empty
pub fn validate_value(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// Result of validating a whole list
///
/// Errors are kept in list order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    errors: Vec<(EntryId, FieldError)>,
}

impl Validation {
    /// `true` when every entry passed; vacuously true for an empty list
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, id: EntryId) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, error)| error)
    }

    pub fn invalid_ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.errors.iter().map(|(id, _)| *id)
    }

    /// Number of invalid entries
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every entry of the list
pub fn validate(list: &EntryList) -> Validation {
    let errors = list
        .iter()
        .filter_map(|entry| {
            validate_value(entry.value())
                .err()
                .map(|error| (entry.id(), error))
        })
        .collect();
    Validation { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_required() {
        assert_eq!(validate_value(""), Err(FieldError::Required));
        assert_eq!(validate_value("ramen"), Ok(()));
    }

    #[test]
    fn test_whitespace_counts_as_a_value() {
        assert_eq!(validate_value(" "), Ok(()));
    }

    #[test]
    fn test_error_only_on_empty_entry() {
        let list = EntryList::from_values(["ramen", "", "sushi"]);
        let ids = list.ids();
        let validation = validate(&list);

        assert!(!validation.is_valid());
        assert_eq!(validation.len(), 1);
        assert_eq!(validation.error_for(ids[0]), None);
        assert_eq!(validation.error_for(ids[1]), Some(&FieldError::Required));
        assert_eq!(validation.error_for(ids[2]), None);
    }

    #[test]
    fn test_error_follows_entry_after_move() {
        let mut list = EntryList::from_values(["ramen", "", "sushi"]);
        let ids = list.ids();
        list.move_entry(ids[1], ids[0]);

        let validation = validate(&list);
        assert_eq!(validation.invalid_ids().collect::<Vec<_>>(), vec![ids[1]]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate(&EntryList::empty()).is_valid());
    }

    #[test]
    fn test_message() {
        assert_eq!(FieldError::Required.to_string(), "Please enter a favorite");
    }
}
