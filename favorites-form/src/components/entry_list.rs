//! The reorderable list of entries
//!
//! Keyboard input goes to the focused entry. Mouse input is hit-tested
//! against the row layouts from the last render:
//!
//! - press on `⠿` starts a drag, dragging emits `DragUpdate` only when the
//!   row under the pointer changes, release emits `DragEnd` with that row
//! - press on `✕` removes the entry
//! - press anywhere else on a row focuses it
//!
//! Scroll position is internal UI state; it follows the focused row.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use favorites_core::EntryId;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::{Component, EventKind};

use super::entry_input::{EntryInput, EntryInputProps};
use super::entry_row::{EntryRow, EntryRowProps, RowDrag, RowLayout, ROW_HEIGHT};
use super::modal::contains;
use crate::action::Action;
use crate::state::{AppState, Focus};

pub const PLACEHOLDER: &str = "Type a favorite...";

pub struct EntryListProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct EntryListView {
    input: EntryInput,
    row: EntryRow,
    /// Index of the first visible row
    scroll: usize,
    /// Rows drawn by the last render, for hit testing
    rows: Vec<(EntryId, RowLayout)>,
}

impl EntryListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row under a terminal cell
    pub fn row_at(&self, column: u16, row: u16) -> Option<EntryId> {
        self.rows
            .iter()
            .find(|(_, layout)| contains(layout.area, column, row))
            .map(|(id, _)| *id)
    }

    fn layout_of(&self, id: EntryId) -> Option<&RowLayout> {
        self.rows
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, layout)| layout)
    }

    fn handle_key(&mut self, event: &EventKind, props: &EntryListProps<'_>) -> Vec<Action> {
        let EventKind::Key(key) = event else {
            return vec![];
        };
        let Some(id) = props.state.focused_entry() else {
            return vec![];
        };
        let Some(entry) = props.state.entries().get(id) else {
            return vec![];
        };

        if key.modifiers.contains(KeyModifiers::ALT) {
            let offset = match key.code {
                KeyCode::Up => -1,
                KeyCode::Down => 1,
                _ => return vec![],
            };
            return props
                .state
                .entries()
                .neighbor(id, offset)
                .map(|to| Action::EntryMove { from: id, to })
                .into_iter()
                .collect();
        }

        match key.code {
            KeyCode::Enter => vec![Action::FormSubmit],
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                vec![Action::EntryRemove(id)]
            }
            _ => self.input.handle_event(
                event,
                EntryInputProps {
                    id,
                    value: entry.value(),
                    placeholder: PLACEHOLDER,
                    is_focused: true,
                },
            ),
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, props: &EntryListProps<'_>) -> Vec<Action> {
        let hovered = self.row_at(mouse.column, mouse.row);

        if let Some(drag) = props.state.drag {
            return match mouse.kind {
                MouseEventKind::Drag(MouseButton::Left) if drag.target != hovered => {
                    vec![Action::DragUpdate(hovered)]
                }
                MouseEventKind::Up(MouseButton::Left) => vec![Action::DragEnd(hovered)],
                _ => vec![],
            };
        }

        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return vec![];
        };
        let Some(id) = hovered else {
            return vec![];
        };
        let Some(layout) = self.layout_of(id) else {
            return vec![];
        };

        if contains(layout.handle, mouse.column, mouse.row) {
            vec![Action::DragStart(id)]
        } else if contains(layout.remove, mouse.column, mouse.row) {
            vec![Action::EntryRemove(id)]
        } else if props.state.focus != Focus::Entry(id) {
            vec![Action::UiFocusSet(Focus::Entry(id))]
        } else {
            vec![]
        }
    }

    /// Keep the focused row inside the `visible` window
    fn follow_focus(&mut self, props: &EntryListProps<'_>, visible: usize) {
        let entries = props.state.entries();
        let len = entries.len();
        self.scroll = self.scroll.min(len.saturating_sub(visible));

        let focused = props
            .state
            .focused_entry()
            .and_then(|id| entries.position(id));
        if let Some(index) = focused {
            if index < self.scroll {
                self.scroll = index;
            } else if index >= self.scroll + visible {
                self.scroll = index + 1 - visible;
            }
        }
    }
}

impl Component<Action> for EntryListView {
    type Props<'a> = EntryListProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(_) => self.handle_key(event, &props),
            EventKind::Mouse(mouse) => self.handle_mouse(mouse, &props),
            // The view follows focus, so the wheel walks focus along the rows
            EventKind::Scroll { column, row, delta } => {
                if self.row_at(*column, *row).is_none() {
                    return vec![];
                }
                let entries = props.state.entries();
                let from = props.state.focused_entry().or(entries.first_id());
                from.and_then(|id| entries.neighbor(id, delta.signum()))
                    .map(|id| Action::UiFocusSet(Focus::Entry(id)))
                    .into_iter()
                    .collect()
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.rows.clear();
        let state = props.state;
        let entries = state.entries();

        if entries.is_empty() {
            let hint = Paragraph::new("No favorites yet. Append one below.")
                .centered()
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
            return;
        }

        let visible = usize::from(area.height / ROW_HEIGHT).max(1);
        self.follow_focus(&props, visible);

        for (slot, (index, entry)) in entries
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(visible)
            .enumerate()
        {
            let row_area = Rect {
                y: area.y + slot as u16 * ROW_HEIGHT,
                height: ROW_HEIGHT.min(area.height),
                ..area
            };
            let id = entry.id();
            let error = state.form.visible_error(id);
            let is_focused = props.is_focused && state.focus == Focus::Entry(id);
            let drag = match state.drag {
                Some(drag) if drag.source == id => RowDrag::Source,
                Some(drag) if drag.target == Some(id) => RowDrag::Target,
                _ => RowDrag::Idle,
            };

            self.row.render(
                frame,
                row_area,
                EntryRowProps {
                    index,
                    error: error.as_ref(),
                    is_focused,
                    drag,
                },
            );

            let layout = RowLayout::new(row_area);
            self.input.render(
                frame,
                layout.input,
                EntryInputProps {
                    id,
                    value: entry.value(),
                    placeholder: PLACEHOLDER,
                    is_focused,
                },
            );
            self.rows.push((id, layout));
        }

        // Overflow markers
        let hidden_below = entries.len().saturating_sub(self.scroll + visible);
        if self.scroll > 0 || hidden_below > 0 {
            let marker = format!(" ↑{} ↓{} ", self.scroll, hidden_below);
            let marker_area = Rect {
                x: area.right().saturating_sub(marker.chars().count() as u16 + 2),
                y: area.y,
                width: (marker.chars().count() as u16).min(area.width),
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(marker).style(Style::default().fg(Color::DarkGray)),
                marker_area,
            );
        }
    }
}
