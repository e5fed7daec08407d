//! Chrome of one entry row: label, drag handle, remove button, inline error
//!
//! ```text
//! ╭ Favorite #2 ───────────────────╮
//! │⠿ sushi                        ✕│
//! ╰ Please enter a favorite ───────╯
//! ```
//!
//! The value itself is drawn by `EntryInput` into [`RowLayout::input`].

use favorites_core::FieldError;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_dispatch::Component;

use crate::action::Action;

pub const ROW_HEIGHT: u16 = 3;
pub const HANDLE: &str = "⠿";
pub const REMOVE: &str = "✕";

/// Hit areas of a row, shared by rendering and mouse handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowLayout {
    pub area: Rect,
    pub handle: Rect,
    pub input: Rect,
    pub remove: Rect,
}

impl RowLayout {
    pub fn new(area: Rect) -> Self {
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2).min(1),
        };
        let handle = Rect { width: inner.width.min(2), ..inner };
        let remove_width = inner.width.saturating_sub(handle.width).min(2);
        let remove = Rect {
            x: inner.right().saturating_sub(remove_width),
            width: remove_width,
            ..inner
        };
        let input = Rect {
            x: handle.right(),
            width: remove.x.saturating_sub(handle.right()),
            ..inner
        };
        Self {
            area,
            handle,
            input,
            remove,
        }
    }
}

/// Role of a row in an in-flight drag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RowDrag {
    #[default]
    Idle,
    Source,
    Target,
}

pub struct EntryRowProps<'a> {
    /// Zero-based position, shown one-based in the label
    pub index: usize,
    pub error: Option<&'a FieldError>,
    pub is_focused: bool,
    pub drag: RowDrag,
}

pub fn label(index: usize) -> String {
    format!("Favorite #{}", index + 1)
}

#[derive(Default)]
pub struct EntryRow;

impl Component<Action> for EntryRow {
    type Props<'a> = EntryRowProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let layout = RowLayout::new(area);

        let border_color = match (props.drag, props.error, props.is_focused) {
            (RowDrag::Target, _, _) => Color::Yellow,
            (RowDrag::Source, _, _) => Color::Magenta,
            (_, Some(_), _) => Color::Red,
            (_, None, true) => Color::Cyan,
            (_, None, false) => Color::DarkGray,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(format!(" {} ", label(props.index))).fg(Color::Gray));
        if let Some(error) = props.error {
            block = block.title_bottom(Line::from(format!(" {} ", error)).fg(Color::Red));
        }
        frame.render_widget(block, area);

        let handle_style = if props.drag == RowDrag::Source {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(HANDLE).style(handle_style), layout.handle);
        frame.render_widget(
            Paragraph::new(REMOVE)
                .right_aligned()
                .style(Style::default().fg(Color::DarkGray)),
            layout.remove,
        );
    }
}
