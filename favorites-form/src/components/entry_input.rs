//! Single-line editor for the focused entry's value

use crossterm::event::{KeyCode, KeyModifiers};
use favorites_core::EntryId;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::{Component, EventKind};

use crate::action::Action;

pub struct EntryInputProps<'a> {
    pub id: EntryId,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_focused: bool,
}

/// Cursor-aware text editing that emits `EntryUpdate` for every change
///
/// Only the cursor lives here. It is tied to the entry being edited and
/// jumps to the end of the value whenever another entry takes focus.
#[derive(Default)]
pub struct EntryInput {
    /// Byte index into the value
    cursor: usize,
    editing: Option<EntryId>,
}

impl EntryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach to `id` and keep the cursor on a char boundary of `value`
    fn sync(&mut self, id: EntryId, value: &str) {
        if self.editing != Some(id) {
            self.editing = Some(id);
            self.cursor = value.len();
        }
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn move_cursor_left(&mut self, value: &str) {
        if let Some((index, _)) = value[..self.cursor].char_indices().next_back() {
            self.cursor = index;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if let Some(c) = value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    /// Backspace
    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        let (start, _) = value[..self.cursor].char_indices().next_back()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(new_value)
    }

    /// Delete
    fn delete_char_at(&self, value: &str) -> Option<String> {
        let c = value[self.cursor..].chars().next()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        Some(new_value)
    }
}

impl Component<Action> for EntryInput {
    type Props<'a> = EntryInputProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }
        let EventKind::Key(key) = event else {
            return vec![];
        };

        self.sync(props.id, props.value);
        let value = props.value;
        let update = |value: String| Action::EntryUpdate {
            id: props.id,
            value,
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    vec![]
                }
                KeyCode::Char('e') => {
                    self.cursor = value.len();
                    vec![]
                }
                KeyCode::Char('u') if !value.is_empty() => {
                    self.cursor = 0;
                    vec![update(String::new())]
                }
                _ => vec![],
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return vec![];
        }

        match key.code {
            KeyCode::Char(c) => vec![update(self.insert_char(value, c))],
            KeyCode::Backspace => self.delete_char_before(value).map(update).into_iter().collect(),
            KeyCode::Delete => self.delete_char_at(value).map(update).into_iter().collect(),
            KeyCode::Left => {
                self.move_cursor_left(value);
                vec![]
            }
            KeyCode::Right => {
                self.move_cursor_right(value);
                vec![]
            }
            KeyCode::Home => {
                self.cursor = 0;
                vec![]
            }
            KeyCode::End => {
                self.cursor = value.len();
                vec![]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if props.value.is_empty() {
            let placeholder = Span::styled(props.placeholder, Style::default().fg(Color::DarkGray));
            frame.render_widget(Paragraph::new(Line::from(placeholder)), area);
            if props.is_focused {
                self.sync(props.id, props.value);
                frame.set_cursor_position((area.x, area.y));
            }
            return;
        }

        if !props.is_focused {
            frame.render_widget(Paragraph::new(props.value), area);
            return;
        }

        self.sync(props.id, props.value);

        // Scroll horizontally so the cursor stays inside the field
        let cursor_col = Span::raw(&props.value[..self.cursor]).width() as u16;
        let offset = cursor_col.saturating_sub(area.width.saturating_sub(1));
        frame.render_widget(Paragraph::new(props.value).scroll((0, offset)), area);
        frame.set_cursor_position((area.x + cursor_col - offset, area.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use favorites_core::EntryList;
    use tui_dispatch::testing::key;

    fn entry_id() -> EntryId {
        EntryList::new().first_id().unwrap()
    }

    fn press(input: &mut EntryInput, id: EntryId, value: &str, k: &str) -> Vec<Action> {
        input.handle_event(
            &EventKind::Key(key(k)),
            EntryInputProps {
                id,
                value,
                placeholder: "",
                is_focused: true,
            },
        )
    }

    #[test]
    fn test_typing_appends_at_end() {
        let id = entry_id();
        let mut input = EntryInput::new();

        let actions = press(&mut input, id, "ramen", "!");

        assert_eq!(
            actions,
            vec![Action::EntryUpdate {
                id,
                value: "ramen!".into()
            }]
        );
    }

    #[test]
    fn test_insert_after_cursor_movement() {
        let id = entry_id();
        let mut input = EntryInput::new();

        press(&mut input, id, "ramn", "left");
        let actions = press(&mut input, id, "ramn", "e");

        assert_eq!(
            actions,
            vec![Action::EntryUpdate {
                id,
                value: "ramen".into()
            }]
        );
    }

    #[test]
    fn test_backspace_multibyte() {
        let id = entry_id();
        let mut input = EntryInput::new();

        let actions = press(&mut input, id, "すし", "backspace");

        assert_eq!(
            actions,
            vec![Action::EntryUpdate {
                id,
                value: "す".into()
            }]
        );
        assert_eq!(input.cursor, "す".len());
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let id = entry_id();
        let mut input = EntryInput::new();

        press(&mut input, id, "ramen", "home");
        assert!(press(&mut input, id, "ramen", "backspace").is_empty());
    }

    #[test]
    fn test_delete_at_cursor() {
        let id = entry_id();
        let mut input = EntryInput::new();

        press(&mut input, id, "ramen", "home");
        let actions = press(&mut input, id, "ramen", "delete");

        assert_eq!(
            actions,
            vec![Action::EntryUpdate {
                id,
                value: "amen".into()
            }]
        );
    }

    #[test]
    fn test_ctrl_u_clears() {
        let id = entry_id();
        let mut input = EntryInput::new();

        let actions = press(&mut input, id, "ramen", "ctrl+u");

        assert_eq!(
            actions,
            vec![Action::EntryUpdate {
                id,
                value: String::new()
            }]
        );
    }

    #[test]
    fn test_cursor_resets_when_entry_changes() {
        let ids = EntryList::from_values(["ab", "xyz"]).ids();
        let mut input = EntryInput::new();

        press(&mut input, ids[0], "ab", "home");
        let actions = press(&mut input, ids[1], "xyz", "!");

        assert_eq!(
            actions,
            vec![Action::EntryUpdate {
                id: ids[1],
                value: "xyz!".into()
            }]
        );
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let id = entry_id();
        let mut input = EntryInput::new();

        let actions = input.handle_event(
            &EventKind::Key(key("a")),
            EntryInputProps {
                id,
                value: "",
                placeholder: "",
                is_focused: false,
            },
        );

        assert!(actions.is_empty());
    }
}
