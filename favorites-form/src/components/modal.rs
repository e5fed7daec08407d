//! Overlay helpers: dimmed background and centered boxes

use ratatui::{
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Block, Clear},
    Frame,
};
use tui_dispatch::debug::dim_buffer;

/// How far the background fades behind an overlay
const DIM_FACTOR: f32 = 0.5;

/// Render an overlay frame on top of whatever was drawn so far
///
/// Call this AFTER rendering the background. Everything drawn so far is
/// dimmed; `area` is cleared and filled with `bg`.
pub fn render_modal(frame: &mut Frame, area: Rect, bg: Color) {
    dim_buffer(frame.buffer_mut(), DIM_FACTOR);
    frame.render_widget(Clear, area);
    frame.render_widget(Block::new().style(Style::default().bg(bg)), area);
}

/// A `width` x `height` rectangle centered in `area`, keeping a 1-cell margin
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let inner = area.inner(Margin::new(1, 1));
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(inner);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    centered
}

/// Whether a terminal cell lies inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
