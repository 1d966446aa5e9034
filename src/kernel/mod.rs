//! Headless workspace core (state/action/effect).

pub mod action;
pub mod console;
pub mod effect;
pub mod layout;
pub mod store;
pub mod workspace;

pub use action::Action;
pub use console::{ConsoleLine, ConsoleSession, LineKind, Submission};
pub use effect::Effect;
pub use layout::{LayoutState, Panel};
pub use store::{AppState, DispatchResult, Notice, Store};
pub use workspace::{Cursor, WorkspaceSession};
