mod action;
mod effect;
mod handler;
mod handlers;
mod runtime;
mod state;

pub use action::Action;
pub use effect::Effect;
pub use runtime::{run_tui, Source};
pub use state::{AppState, LoginField, Lookup, Mode, ReaderState, SessionSummary, Submission};
