//! Form state machine: editing the list, or reviewing a submission
//!
//! ```text
//!   Editing --submit (all valid)--> ReviewingSubmission(snapshot)
//!      ^                                   |
//!      +------------- close ---------------+
//! ```
//!
//! The snapshot lives inside the `ReviewingSubmission` phase, so closing the
//! review drops it and no stale copy can be shown again.

use tracing::{debug, info};

use crate::entry::{EntryId, EntryList};
use crate::submission::Submission;
use crate::validation::{validate, validate_value, FieldError, Validation};

/// Which surface the user is interacting with
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    ReviewingSubmission(Submission),
}

/// What a submit attempt did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All entries valid; the form is now reviewing this snapshot
    Accepted,
    /// At least one entry invalid; nothing was captured
    Rejected(Validation),
    /// A review is already open
    Ignored,
}

/// The favorites form: entry list, phase, and error visibility
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Form {
    entries: EntryList,
    phase: Phase,
    submit_attempted: bool,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// A form with a single empty entry
    pub fn new() -> Self {
        Self::with_entries(EntryList::new())
    }

    pub fn with_entries(entries: EntryList) -> Self {
        Self {
            entries,
            phase: Phase::Editing,
            submit_attempted: false,
        }
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }

    pub fn is_reviewing(&self) -> bool {
        matches!(self.phase, Phase::ReviewingSubmission(_))
    }

    /// Snapshot under review, if any
    pub fn submission(&self) -> Option<&Submission> {
        match &self.phase {
            Phase::ReviewingSubmission(submission) => Some(submission),
            Phase::Editing => None,
        }
    }

    /// Whether inline errors are shown (after the first submit attempt)
    pub fn errors_visible(&self) -> bool {
        self.submit_attempted
    }

    pub fn validation(&self) -> Validation {
        validate(&self.entries)
    }

    /// Error to display next to an entry right now
    pub fn visible_error(&self, id: EntryId) -> Option<FieldError> {
        if !self.submit_attempted {
            return None;
        }
        let entry = self.entries.get(id)?;
        validate_value(entry.value()).err()
    }

    fn editable(&self, op: &'static str) -> bool {
        if self.is_editing() {
            true
        } else {
            debug!(op, "ignored while reviewing submission");
            false
        }
    }

    /// Append an empty entry; `None` while reviewing
    pub fn append(&mut self) -> Option<EntryId> {
        if !self.editable("append") {
            return None;
        }
        Some(self.entries.append())
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        self.editable("remove") && self.entries.remove(id)
    }

    pub fn move_entry(&mut self, from: EntryId, to: EntryId) -> bool {
        self.editable("move") && self.entries.move_entry(from, to)
    }

    pub fn set_value(&mut self, id: EntryId, value: impl Into<String>) -> bool {
        self.editable("set_value") && self.entries.set_value(id, value)
    }

    /// Validate everything and, if all entries pass, open the review
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_editing() {
            return SubmitOutcome::Ignored;
        }
        self.submit_attempted = true;

        let validation = self.validation();
        if !validation.is_valid() {
            info!(invalid = validation.len(), "submit rejected");
            return SubmitOutcome::Rejected(validation);
        }

        let submission = Submission::capture(&self.entries);
        info!(favorites = submission.favorites().len(), "submit accepted");
        self.phase = Phase::ReviewingSubmission(submission);
        SubmitOutcome::Accepted
    }

    /// Close the review and drop its snapshot
    pub fn close_review(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.phase = Phase::Editing;
        info!("review closed");
        true
    }
}
