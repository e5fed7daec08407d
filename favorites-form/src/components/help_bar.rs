use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::Component;

use crate::action::Action;

/// Which hints to show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HelpMode {
    Editing,
    Dragging,
    Reviewing,
}

pub struct HelpBarProps {
    pub mode: HelpMode,
}

/// One line of key hints for the current mode
#[derive(Default)]
pub struct HelpBar;

impl HelpBar {
    fn hints(mode: HelpMode) -> &'static [(&'static str, &'static str)] {
        match mode {
            HelpMode::Editing => &[
                ("tab", "next"),
                ("enter", "submit"),
                ("^n", "add"),
                ("^d", "del"),
                ("alt+↑↓", "move"),
                ("^q", "quit"),
            ],
            HelpMode::Dragging => &[("release", "drop here"), ("esc", "cancel")],
            HelpMode::Reviewing => &[
                ("enter", "close"),
                ("↑↓/jk", "scroll"),
                ("pgup/pgdn", "page"),
                ("^q", "quit"),
            ],
        }
    }
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let spans: Vec<Span> = Self::hints(props.mode)
            .iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan).bold()),
                    Span::styled(format!(" {desc} "), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
