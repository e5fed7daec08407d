//! Terminal front end for the favorites form
//!
//! The binary in `main.rs` wires these pieces into a store and an event
//! loop; the library split lets integration tests drive the same
//! components and reducer without a real terminal.

pub mod action;
pub mod components;
pub mod logging;
pub mod reducer;
pub mod runtime;
pub mod state;

pub use action::Action;
pub use components::FavoritesForm;
pub use reducer::reducer;
pub use state::{AppState, DragState, Focus};
