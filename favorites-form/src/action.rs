//! Actions: everything that can happen to the form
//!
//! Category is inferred from the prefix: `EntryAdd`, `EntryMove` -> "entry",
//! `DragStart`, `DragEnd` -> "drag", and so on.

use favorites_core::EntryId;

use crate::state::Focus;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Entry category =====
    /// Append an empty entry and focus it
    EntryAdd,

    EntryRemove(EntryId),

    /// Relocate `from` onto the slot currently held by `to`
    EntryMove { from: EntryId, to: EntryId },

    /// New text for one entry
    EntryUpdate { id: EntryId, value: String },

    // ===== Form category =====
    /// Validate and, if everything passes, open the review dialog
    FormSubmit,

    // ===== Review category =====
    ReviewClose,

    /// Scroll the submitted dump by a number of lines
    ReviewScroll(i16),

    // ===== Drag category =====
    /// Handle pressed on an entry
    DragStart(EntryId),

    /// Pointer is now over this entry (or over nothing)
    DragUpdate(Option<EntryId>),

    /// Handle released over this entry (or over nothing)
    DragEnd(Option<EntryId>),

    DragCancel,

    // ===== UI category =====
    UiFocusNext,
    UiFocusPrev,
    UiFocusSet(Focus),
    UiTerminalResize(u16, u16),

    // ===== Uncategorized =====
    Quit,
}
