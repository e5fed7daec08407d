//! Root component: heading, entry list, buttons, help bar, review overlay
//!
//! Events are routed by phase. While a submission is under review only the
//! dialog sees input; otherwise global shortcuts are checked first and the
//! rest goes to whichever part of the form holds focus.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};
use tui_dispatch::{Component, EventKind};

use super::button_bar::{ButtonBar, ButtonBarProps};
use super::entry_list::{EntryListProps, EntryListView};
use super::help_bar::{HelpBar, HelpBarProps, HelpMode};
use super::review_dialog::{ReviewDialog, ReviewDialogProps};
use crate::action::Action;
use crate::state::{AppState, Focus};

pub const INTRO: &str =
    "A demonstration of a reorderable form: edit, append, remove and drag favorites, then submit.";

/// Widest the form column gets
const FORM_WIDTH: u16 = 60;

pub struct FavoritesFormProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct FavoritesForm {
    list: EntryListView,
    buttons: ButtonBar,
    dialog: ReviewDialog,
    help: HelpBar,
}

impl FavoritesForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle_editing(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let EventKind::Key(key) = event {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            let alt = key.modifiers.contains(KeyModifiers::ALT);
            match key.code {
                KeyCode::Esc if state.drag.is_some() => return vec![Action::DragCancel],
                KeyCode::Tab => return vec![Action::UiFocusNext],
                KeyCode::BackTab => return vec![Action::UiFocusPrev],
                KeyCode::Down if !alt => return vec![Action::UiFocusNext],
                KeyCode::Up if !alt => return vec![Action::UiFocusPrev],
                KeyCode::Char('n') if ctrl => return vec![Action::EntryAdd],
                KeyCode::Char('s') if ctrl => return vec![Action::FormSubmit],
                _ => {}
            }

            return match state.focus {
                Focus::Entry(_) => self.list.handle_event(
                    event,
                    EntryListProps {
                        state,
                        is_focused: true,
                    },
                ),
                Focus::AppendButton | Focus::SubmitButton => self.buttons.handle_event(
                    event,
                    ButtonBarProps {
                        focus: state.focus,
                        is_focused: true,
                    },
                ),
            };
        }

        // Pointer events: the list first (it owns drags), then the buttons
        let actions = self.list.handle_event(
            event,
            EntryListProps {
                state,
                is_focused: true,
            },
        );
        if !actions.is_empty() || state.drag.is_some() {
            return actions;
        }
        self.buttons.handle_event(
            event,
            ButtonBarProps {
                focus: state.focus,
                is_focused: true,
            },
        )
    }
}

impl Component<Action> for FavoritesForm {
    type Props<'a> = FavoritesFormProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        let state = props.state;

        if let EventKind::Key(key) = event {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            {
                return vec![Action::Quit];
            }
        }

        match state.form.submission() {
            Some(submission) => self.dialog.handle_event(
                event,
                ReviewDialogProps {
                    submission,
                    scroll: state.review_scroll,
                },
            ),
            None => self.handle_editing(event, state),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let editing = state.form.is_editing();

        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(FORM_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(area);

        let [title_area, intro_area, _, list_area, _, buttons_area, help_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(column);

        frame.render_widget(
            Paragraph::new(Line::from(state.title.as_str()).bold().fg(Color::Cyan)).centered(),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(INTRO)
                .centered()
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::DarkGray)),
            intro_area,
        );

        self.list.render(
            frame,
            list_area,
            EntryListProps {
                state,
                is_focused: editing,
            },
        );
        self.buttons.render(
            frame,
            buttons_area,
            ButtonBarProps {
                focus: state.focus,
                is_focused: editing,
            },
        );

        let mode = match (state.form.is_reviewing(), state.drag.is_some()) {
            (true, _) => HelpMode::Reviewing,
            (false, true) => HelpMode::Dragging,
            (false, false) => HelpMode::Editing,
        };
        let help_area = Rect {
            x: area.x,
            width: area.width,
            ..help_area
        };
        self.help.render(frame, help_area, HelpBarProps { mode });

        if let Some(submission) = state.form.submission() {
            self.dialog.render(
                frame,
                area,
                ReviewDialogProps {
                    submission,
                    scroll: state.review_scroll,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use favorites_core::EntryList;
    use tui_dispatch::testing::key;

    fn press(state: &AppState, k: &str) -> Vec<Action> {
        FavoritesForm::new().handle_event(&EventKind::Key(key(k)), FavoritesFormProps { state })
    }

    #[test]
    fn test_global_shortcuts_while_editing() {
        let state = AppState::new("Test", EntryList::from_values(["ramen"]));

        assert_eq!(press(&state, "tab"), vec![Action::UiFocusNext]);
        assert_eq!(press(&state, "shift+tab"), vec![Action::UiFocusPrev]);
        assert_eq!(press(&state, "ctrl+n"), vec![Action::EntryAdd]);
        assert_eq!(press(&state, "ctrl+s"), vec![Action::FormSubmit]);
        assert_eq!(press(&state, "ctrl+q"), vec![Action::Quit]);
    }

    #[test]
    fn test_escape_without_drag_does_nothing() {
        let state = AppState::new("Test", EntryList::from_values(["ramen"]));

        assert!(press(&state, "esc").is_empty());
    }

    #[test]
    fn test_review_captures_keys() {
        let mut state = AppState::new("Test", EntryList::from_values(["ramen"]));
        crate::reducer::reducer(&mut state, Action::FormSubmit);

        assert!(press(&state, "tab").is_empty());
        assert!(press(&state, "ctrl+n").is_empty());
        assert_eq!(press(&state, "enter"), vec![Action::ReviewClose]);
        assert_eq!(press(&state, "ctrl+c"), vec![Action::Quit]);
    }
}
