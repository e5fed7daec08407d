use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::{Component, EventKind};

use super::modal::contains;
use crate::action::Action;
use crate::state::Focus;

pub const APPEND_LABEL: &str = "[ Append ]";
pub const SUBMIT_LABEL: &str = "[ Submit ]";

pub struct ButtonBarProps {
    pub focus: Focus,
    pub is_focused: bool,
}

/// The `Append` and `Submit` buttons under the list
#[derive(Default)]
pub struct ButtonBar {
    append_area: Rect,
    submit_area: Rect,
}

impl ButtonBar {
    fn activate(focus: Focus) -> Option<Action> {
        match focus {
            Focus::AppendButton => Some(Action::EntryAdd),
            Focus::SubmitButton => Some(Action::FormSubmit),
            Focus::Entry(_) => None,
        }
    }
}

impl Component<Action> for ButtonBar {
    type Props<'a> = ButtonBarProps;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    Self::activate(props.focus).into_iter().collect()
                }
                _ => vec![],
            },
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if contains(self.append_area, mouse.column, mouse.row) {
                    vec![Action::EntryAdd]
                } else if contains(self.submit_area, mouse.column, mouse.row) {
                    vec![Action::FormSubmit]
                } else {
                    vec![]
                }
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [append_area, submit_area] = Layout::horizontal([
            Constraint::Length(APPEND_LABEL.len() as u16),
            Constraint::Length(SUBMIT_LABEL.len() as u16),
        ])
        .flex(Flex::Center)
        .spacing(3)
        .areas(area);
        self.append_area = append_area;
        self.submit_area = submit_area;

        let style = |focus: Focus, base: Color| {
            if props.is_focused && props.focus == focus {
                Style::default()
                    .fg(Color::Black)
                    .bg(base)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(base)
            }
        };

        frame.render_widget(
            Paragraph::new(APPEND_LABEL).style(style(Focus::AppendButton, Color::Gray)),
            append_area,
        );
        frame.render_widget(
            Paragraph::new(SUBMIT_LABEL).style(style(Focus::SubmitButton, Color::Blue)),
            submit_area,
        );
    }
}
