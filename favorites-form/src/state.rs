//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use favorites_core::{EntryId, EntryList, Form};

pub const DEFAULT_TITLE: &str = "Draggable Form Example";

/// Which control receives keyboard input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Focus {
    Entry(EntryId),
    AppendButton,
    SubmitButton,
}

/// An in-flight drag of one entry's handle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState {
    pub source: EntryId,
    /// Entry currently under the pointer
    pub target: Option<EntryId>,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub title: String,

    pub form: Form,

    pub focus: Focus,

    pub drag: Option<DragState>,

    /// First visible line of the submitted dump
    pub review_scroll: u16,

    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(title: impl Into<String>, entries: EntryList) -> Self {
        let focus = entries
            .first_id()
            .map(Focus::Entry)
            .unwrap_or(Focus::AppendButton);
        Self {
            title: title.into(),
            form: Form::with_entries(entries),
            focus,
            drag: None,
            review_scroll: 0,
            terminal_size: (80, 24),
        }
    }

    pub fn entries(&self) -> &EntryList {
        self.form.entries()
    }

    /// Controls in tab order: every entry, then the two buttons
    pub fn focus_ring(&self) -> Vec<Focus> {
        self.entries()
            .iter()
            .map(|entry| Focus::Entry(entry.id()))
            .chain([Focus::AppendButton, Focus::SubmitButton])
            .collect()
    }

    pub fn focused_entry(&self) -> Option<EntryId> {
        match self.focus {
            Focus::Entry(id) => Some(id),
            _ => None,
        }
    }

    /// Whether a focus target still exists
    pub fn can_focus(&self, focus: Focus) -> bool {
        match focus {
            Focus::Entry(id) => self.entries().contains(id),
            Focus::AppendButton | Focus::SubmitButton => true,
        }
    }

    /// Number of lines in the submitted dump, 0 when not reviewing
    pub fn review_line_count(&self) -> usize {
        self.form
            .submission()
            .map(|submission| submission.to_pretty_json().lines().count())
            .unwrap_or(0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, EntryList::new())
    }
}
