//! One step of the event loop
//!
//! Every action a terminal event produces is reduced before the next event
//! is looked at, so components always see the state their previous actions
//! left behind.

use tui_dispatch::{EventKind, Middleware, StoreWithMiddleware};

use crate::action::Action;
use crate::components::{Component, FavoritesForm, FavoritesFormProps};
use crate::state::AppState;

pub type FormStore<M> = StoreWithMiddleware<AppState, Action, M>;

/// What the loop does after an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue { render: bool },
    Quit,
}

/// Route `event` through the form and dispatch the resulting actions in order
pub fn handle_event<M: Middleware<Action>>(
    ui: &mut FavoritesForm,
    store: &mut FormStore<M>,
    event: &EventKind,
) -> Step {
    if let EventKind::Resize(width, height) = event {
        let render = store.dispatch(Action::UiTerminalResize(*width, *height));
        return Step::Continue { render };
    }

    let actions = ui.handle_event(
        event,
        FavoritesFormProps {
            state: store.state(),
        },
    );

    // Cursor moves live in the component, not the store
    let mut render = matches!(event, EventKind::Key(_));
    for action in actions {
        if action == Action::Quit {
            return Step::Quit;
        }
        render |= store.dispatch(action);
    }
    Step::Continue { render }
}
