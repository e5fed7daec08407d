//! Core model of the favorites form
//!
//! This crate holds everything about the form that is not terminal UI:
//!
//! - **Entry list**: ordered entries with stable ids ([`EntryList`])
//! - **Validation**: the "must not be empty" rule, derived on demand ([`validate`])
//! - **Submission**: value-only snapshot with its JSON dump ([`Submission`])
//! - **Form**: the editing / reviewing state machine tying them together ([`Form`])
//!
//! # Example
//!
//! ```
//! use favorites_core::{EntryList, Form, SubmitOutcome};
//!
//! let mut form = Form::with_entries(EntryList::from_values(["ramen", ""]));
//! assert!(matches!(form.submit(), SubmitOutcome::Rejected(_)));
//!
//! let empty = form.entries().ids()[1];
//! form.set_value(empty, "sushi");
//! assert_eq!(form.submit(), SubmitOutcome::Accepted);
//!
//! let names: Vec<_> = form.submission().unwrap().names().collect();
//! assert_eq!(names, ["ramen", "sushi"]);
//! ```

pub mod entry;
pub mod form;
pub mod submission;
pub mod validation;

pub use entry::{Entry, EntryId, EntryList};
pub use form::{Form, Phase, SubmitOutcome};
pub use submission::{Favorite, Submission};
pub use validation::{validate, validate_value, FieldError, Validation, REQUIRED_MESSAGE};
