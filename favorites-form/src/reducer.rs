//! Reducer - pure function: (state, action) -> bool
//!
//! Returns `true` when the state changed and the UI should re-render.
//! Form rules (locking while reviewing, unknown-id no-ops) live in
//! `favorites_core::Form`; this layer adds focus and drag bookkeeping.

use favorites_core::{EntryId, SubmitOutcome};
use tracing::{debug, info};

use crate::action::Action;
use crate::state::{AppState, DragState, Focus};

pub fn reducer(state: &mut AppState, action: Action) -> bool {
    match action {
        // ===== Entry actions =====
        Action::EntryAdd => match state.form.append() {
            Some(id) => {
                state.focus = Focus::Entry(id);
                true
            }
            None => false,
        },

        Action::EntryRemove(id) => {
            let index = state.entries().position(id);
            if !state.form.remove(id) {
                return false;
            }
            if state.focus == Focus::Entry(id) {
                state.focus = focus_after_removal(state, index.unwrap_or(0));
            }
            if state
                .drag
                .is_some_and(|drag| drag.source == id || drag.target == Some(id))
            {
                state.drag = None;
            }
            true
        }

        Action::EntryMove { from, to } => state.form.move_entry(from, to),

        Action::EntryUpdate { id, value } => state.form.set_value(id, value),

        // ===== Form actions =====
        Action::FormSubmit => match state.form.submit() {
            SubmitOutcome::Accepted => {
                state.drag = None;
                state.review_scroll = 0;
                true
            }
            SubmitOutcome::Rejected(validation) => {
                // Jump to the first field that needs attention
                if let Some(id) = validation.invalid_ids().next() {
                    state.focus = Focus::Entry(id);
                }
                true
            }
            SubmitOutcome::Ignored => false,
        },

        // ===== Review actions =====
        Action::ReviewClose => {
            if !state.form.close_review() {
                return false;
            }
            state.review_scroll = 0;
            state.focus = focus_list(state);
            true
        }

        Action::ReviewScroll(delta) => {
            if !state.form.is_reviewing() {
                return false;
            }
            let max = state.review_line_count().saturating_sub(1) as u16;
            let next = state
                .review_scroll
                .saturating_add_signed(delta)
                .min(max);
            if next == state.review_scroll {
                false
            } else {
                state.review_scroll = next;
                true
            }
        }

        // ===== Drag actions =====
        Action::DragStart(source) => {
            if !state.form.is_editing() || !state.entries().contains(source) {
                return false;
            }
            debug!(%source, "drag started");
            state.drag = Some(DragState {
                source,
                target: None,
            });
            state.focus = Focus::Entry(source);
            true
        }

        Action::DragUpdate(target) => match state.drag.as_mut() {
            Some(drag) if drag.target != target => {
                drag.target = target;
                true
            }
            _ => false,
        },

        Action::DragEnd(target) => {
            let Some(drag) = state.drag.take() else {
                return false;
            };
            match target {
                Some(target) => {
                    if state.form.move_entry(drag.source, target) {
                        info!(source = %drag.source, %target, "entry dropped");
                    }
                }
                None => debug!(source = %drag.source, "drag released outside the list"),
            }
            true
        }

        Action::DragCancel => state.drag.take().is_some(),

        // ===== UI actions =====
        Action::UiFocusNext => cycle_focus(state, 1),

        Action::UiFocusPrev => cycle_focus(state, -1),

        Action::UiFocusSet(focus) => {
            if !state.form.is_editing() || !state.can_focus(focus) || state.focus == focus {
                return false;
            }
            state.focus = focus;
            true
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                true
            } else {
                false
            }
        }

        // ===== Global actions =====
        Action::Quit => {
            // Quit is handled in main loop, not here
            false
        }
    }
}

fn cycle_focus(state: &mut AppState, step: isize) -> bool {
    if !state.form.is_editing() {
        return false;
    }
    let ring = state.focus_ring();
    let len = ring.len() as isize;
    let current = ring
        .iter()
        .position(|focus| *focus == state.focus)
        .map(|index| index as isize)
        .unwrap_or(if step > 0 { -1 } else { 0 });
    let next = (current + step).rem_euclid(len) as usize;
    state.focus = ring[next];
    true
}

/// Entry now at `index`, else the one above it, else the append button
fn focus_after_removal(state: &AppState, index: usize) -> Focus {
    let entries = state.entries();
    entries
        .at(index)
        .or_else(|| index.checked_sub(1).and_then(|above| entries.at(above)))
        .map(|entry| Focus::Entry(entry.id()))
        .unwrap_or(Focus::AppendButton)
}

/// Focus back on the list: the previous entry if it survived, else the first
fn focus_list(state: &AppState) -> Focus {
    let kept: Option<EntryId> = state
        .focused_entry()
        .filter(|id| state.entries().contains(*id));
    kept.or_else(|| state.entries().first_id())
        .map(Focus::Entry)
        .unwrap_or(Focus::AppendButton)
}

#[cfg(test)]
mod tests {
    use super::*;
    use favorites_core::EntryList;

    fn state_with(values: &[&str]) -> AppState {
        AppState::new("Test", EntryList::from_values(values.iter().copied()))
    }

    fn ids(state: &AppState) -> Vec<EntryId> {
        state.entries().ids()
    }

    #[test]
    fn test_initial_state_focuses_first_entry() {
        let state = AppState::default();
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.focus, Focus::Entry(ids(&state)[0]));
    }

    #[test]
    fn test_add_focuses_new_entry() {
        let mut state = AppState::default();

        let changed = reducer(&mut state, Action::EntryAdd);

        assert!(changed);
        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.focus, Focus::Entry(ids(&state)[1]));
    }

    #[test]
    fn test_update_value() {
        let mut state = AppState::default();
        let id = ids(&state)[0];

        assert!(reducer(
            &mut state,
            Action::EntryUpdate {
                id,
                value: "ramen".into()
            }
        ));
        assert_eq!(state.entries().values(), vec!["ramen"]);
    }

    #[test]
    fn test_remove_moves_focus_to_next_entry() {
        let mut state = state_with(&["a", "b", "c"]);
        let ids = ids(&state);
        state.focus = Focus::Entry(ids[1]);

        reducer(&mut state, Action::EntryRemove(ids[1]));

        assert_eq!(state.focus, Focus::Entry(ids[2]));
    }

    #[test]
    fn test_remove_last_row_moves_focus_up() {
        let mut state = state_with(&["a", "b"]);
        let ids = ids(&state);
        state.focus = Focus::Entry(ids[1]);

        reducer(&mut state, Action::EntryRemove(ids[1]));

        assert_eq!(state.focus, Focus::Entry(ids[0]));
    }

    #[test]
    fn test_remove_only_entry_focuses_append() {
        let mut state = AppState::default();
        let id = ids(&state)[0];

        assert!(reducer(&mut state, Action::EntryRemove(id)));
        assert!(state.entries().is_empty());
        assert_eq!(state.focus, Focus::AppendButton);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut state = AppState::default();
        let id = ids(&state)[0];
        reducer(&mut state, Action::EntryRemove(id));

        assert!(!reducer(&mut state, Action::EntryRemove(id)));
    }

    #[test]
    fn test_remove_other_entry_keeps_focus() {
        let mut state = state_with(&["a", "b"]);
        let ids = ids(&state);
        state.focus = Focus::Entry(ids[0]);

        reducer(&mut state, Action::EntryRemove(ids[1]));

        assert_eq!(state.focus, Focus::Entry(ids[0]));
    }

    #[test]
    fn test_failed_submit_focuses_first_invalid_entry() {
        let mut state = state_with(&["ramen", "", "sushi"]);
        let ids = ids(&state);

        assert!(reducer(&mut state, Action::FormSubmit));

        assert!(state.form.is_editing());
        assert_eq!(state.focus, Focus::Entry(ids[1]));
        assert!(state.form.visible_error(ids[1]).is_some());
        assert!(state.form.visible_error(ids[0]).is_none());
        assert!(state.form.visible_error(ids[2]).is_none());
    }

    #[test]
    fn test_submit_and_close() {
        let mut state = state_with(&["ramen", "sushi"]);
        let ids = ids(&state);
        state.focus = Focus::SubmitButton;

        assert!(reducer(&mut state, Action::FormSubmit));
        assert!(state.form.is_reviewing());

        assert!(reducer(&mut state, Action::ReviewClose));
        assert!(state.form.is_editing());
        assert!(state.form.submission().is_none());
        assert_eq!(state.entries().values(), vec!["ramen", "sushi"]);
        assert_eq!(state.focus, Focus::Entry(ids[0]));
    }

    #[test]
    fn test_close_restores_focused_entry() {
        let mut state = state_with(&["ramen", "sushi"]);
        let ids = ids(&state);
        state.focus = Focus::Entry(ids[1]);

        reducer(&mut state, Action::FormSubmit);
        reducer(&mut state, Action::ReviewClose);

        assert_eq!(state.focus, Focus::Entry(ids[1]));
    }

    #[test]
    fn test_list_actions_ignored_while_reviewing() {
        let mut state = state_with(&["a", "b"]);
        let ids = ids(&state);
        reducer(&mut state, Action::FormSubmit);

        assert!(!reducer(&mut state, Action::EntryAdd));
        assert!(!reducer(&mut state, Action::EntryRemove(ids[0])));
        assert!(!reducer(
            &mut state,
            Action::EntryMove {
                from: ids[0],
                to: ids[1]
            }
        ));
        assert!(!reducer(&mut state, Action::DragStart(ids[0])));
        assert!(!reducer(&mut state, Action::UiFocusNext));
        assert!(!reducer(&mut state, Action::FormSubmit));
        assert!(state.form.is_reviewing());
    }

    #[test]
    fn test_review_scroll_clamps() {
        let mut state = state_with(&["ramen"]);
        assert!(!reducer(&mut state, Action::ReviewScroll(1)));

        reducer(&mut state, Action::FormSubmit);
        let lines = state.review_line_count() as u16;

        assert!(!reducer(&mut state, Action::ReviewScroll(-1)));
        assert!(reducer(&mut state, Action::ReviewScroll(100)));
        assert_eq!(state.review_scroll, lines - 1);
        assert!(reducer(&mut state, Action::ReviewScroll(-100)));
        assert_eq!(state.review_scroll, 0);
    }

    #[test]
    fn test_drag_drop_moves_entry() {
        let mut state = state_with(&["a", "b", "c"]);
        let ids = ids(&state);

        assert!(reducer(&mut state, Action::DragStart(ids[0])));
        assert!(reducer(&mut state, Action::DragUpdate(Some(ids[2]))));
        assert!(!reducer(&mut state, Action::DragUpdate(Some(ids[2]))));
        assert!(reducer(&mut state, Action::DragEnd(Some(ids[2]))));

        assert_eq!(state.entries().values(), vec!["b", "c", "a"]);
        assert_eq!(state.drag, None);
    }

    #[test]
    fn test_drag_released_outside_does_not_move() {
        let mut state = state_with(&["a", "b"]);
        let ids = ids(&state);

        reducer(&mut state, Action::DragStart(ids[0]));
        reducer(&mut state, Action::DragUpdate(Some(ids[1])));
        assert!(reducer(&mut state, Action::DragEnd(None)));

        assert_eq!(state.entries().values(), vec!["a", "b"]);
        assert_eq!(state.drag, None);
    }

    #[test]
    fn test_drag_end_without_drag_is_noop() {
        let mut state = state_with(&["a", "b"]);
        let ids = ids(&state);

        assert!(!reducer(&mut state, Action::DragEnd(Some(ids[1]))));
        assert_eq!(state.entries().values(), vec!["a", "b"]);
    }

    #[test]
    fn test_drag_cancel() {
        let mut state = state_with(&["a", "b"]);
        let ids = ids(&state);
        reducer(&mut state, Action::DragStart(ids[1]));

        assert!(reducer(&mut state, Action::DragCancel));
        assert!(!reducer(&mut state, Action::DragCancel));
        assert_eq!(state.entries().values(), vec!["a", "b"]);
    }

    #[test]
    fn test_removing_dragged_entry_cancels_drag() {
        let mut state = state_with(&["a", "b"]);
        let ids = ids(&state);
        reducer(&mut state, Action::DragStart(ids[0]));

        reducer(&mut state, Action::EntryRemove(ids[0]));
        assert_eq!(state.drag, None);
    }

    #[test]
    fn test_error_follows_entry_through_move() {
        let mut state = state_with(&["ramen", ""]);
        let ids = ids(&state);
        reducer(&mut state, Action::FormSubmit);

        reducer(
            &mut state,
            Action::EntryMove {
                from: ids[1],
                to: ids[0],
            },
        );

        assert_eq!(state.entries().position(ids[1]), Some(0));
        assert!(state.form.visible_error(ids[1]).is_some());
        assert!(state.form.visible_error(ids[0]).is_none());
    }

    #[test]
    fn test_focus_cycles_through_ring() {
        let mut state = state_with(&["a"]);
        let id = ids(&state)[0];

        reducer(&mut state, Action::UiFocusNext);
        assert_eq!(state.focus, Focus::AppendButton);
        reducer(&mut state, Action::UiFocusNext);
        assert_eq!(state.focus, Focus::SubmitButton);
        reducer(&mut state, Action::UiFocusNext);
        assert_eq!(state.focus, Focus::Entry(id));
        reducer(&mut state, Action::UiFocusPrev);
        assert_eq!(state.focus, Focus::SubmitButton);
    }

    #[test]
    fn test_focus_set_rejects_missing_entry() {
        let mut state = state_with(&["a", "b"]);
        let ids = ids(&state);
        reducer(&mut state, Action::EntryRemove(ids[1]));

        assert!(!reducer(&mut state, Action::UiFocusSet(Focus::Entry(ids[1]))));
        assert!(reducer(&mut state, Action::UiFocusSet(Focus::SubmitButton)));
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, Action::UiTerminalResize(100, 40)));
        assert!(!reducer(&mut state, Action::UiTerminalResize(100, 40)));
    }

    #[test]
    fn test_quit_does_not_change_state() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Quit));
    }
}
