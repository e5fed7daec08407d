//! Review surface: read-only dump of the last successful submission
//!
//! Only the explicit `[ Close ]` control dismisses it. Esc and clicks
//! outside the dialog are swallowed.

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use favorites_core::Submission;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_dispatch::{Component, EventKind};

use super::modal::{centered_rect, contains, render_modal};
use crate::action::Action;

pub const HEADING: &str = "Submitted Value";
pub const CLOSE_LABEL: &str = "[ Close ]";

const DIALOG_BG: Color = Color::Rgb(35, 35, 45);
const DUMP_BG: Color = Color::Rgb(50, 50, 60);

pub struct ReviewDialogProps<'a> {
    pub submission: &'a Submission,
    pub scroll: u16,
}

#[derive(Default)]
pub struct ReviewDialog {
    close_area: Rect,
}

impl Component<Action> for ReviewDialog {
    type Props<'a> = ReviewDialogProps<'a>;

    fn handle_event(&mut self, event: &EventKind, _props: Self::Props<'_>) -> Vec<Action> {
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => vec![Action::ReviewClose],
                KeyCode::Up | KeyCode::Char('k') => vec![Action::ReviewScroll(-1)],
                KeyCode::Down | KeyCode::Char('j') => vec![Action::ReviewScroll(1)],
                KeyCode::PageUp => vec![Action::ReviewScroll(-10)],
                KeyCode::PageDown => vec![Action::ReviewScroll(10)],
                _ => vec![],
            },
            EventKind::Mouse(mouse)
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && contains(self.close_area, mouse.column, mouse.row) =>
            {
                vec![Action::ReviewClose]
            }
            EventKind::Scroll { delta, .. } => {
                let lines = (*delta).clamp(i16::MIN as isize, i16::MAX as isize) as i16;
                vec![Action::ReviewScroll(lines)]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let dump = props.submission.to_pretty_json();
        let dump_lines = dump.lines().count() as u16;

        // Borders (2) + heading (1) + gap (1) + dump + gap (1) + button (1)
        let height = dump_lines.clamp(3, 14) + 6;
        let dialog_area = centered_rect(46, height, area);
        render_modal(frame, dialog_area, DIALOG_BG);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .style(Style::default().bg(DIALOG_BG));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let [heading_area, _, dump_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::from(HEADING).bold().fg(Color::White)),
            heading_area,
        );

        let dump_area = Rect {
            x: dump_area.x + 1,
            width: dump_area.width.saturating_sub(2),
            ..dump_area
        };
        frame.render_widget(
            Paragraph::new(dump)
                .scroll((props.scroll, 0))
                .style(Style::default().fg(Color::Gray).bg(DUMP_BG)),
            dump_area,
        );

        let close_width = CLOSE_LABEL.len() as u16;
        self.close_area = Rect {
            x: button_area.right().saturating_sub(close_width),
            width: close_width.min(button_area.width),
            ..button_area
        };
        frame.render_widget(
            Paragraph::new(CLOSE_LABEL).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            self.close_area,
        );
    }
}
