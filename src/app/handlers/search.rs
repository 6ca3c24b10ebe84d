use crate::app::{Action, AppState, Effect, Lookup, Mode, Submission};
use tracing::debug;

use super::browsing;

pub fn handle(state: &mut AppState, action: Action) -> Vec<Effect> {
    if state.mode != Mode::Searching {
        return Vec::new();
    }
    let search = &mut state.search;

    match action {
        Action::InputChar(c) => search.push_char(c),
        Action::InputBackspace => search.backspace(),
        Action::MoveUp => search.move_up(),
        Action::MoveDown => search.move_down(),
        Action::NextField => {
            return match search.cycle_mode() {
                Some(Lookup::Categories) => vec![Effect::FetchCategories],
                Some(Lookup::Feeds) => vec![Effect::FetchFeeds],
                None => Vec::new(),
            };
        }
        Action::Submit => return submit(state),
        Action::ExitMode => state.mode = Mode::Browsing,
        _ => {}
    }
    Vec::new()
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    let submission = state.search.submission();
    if submission == Submission::NoSelection {
        // Stay put until something from the list is highlighted
        state.search.rejected = true;
        return Vec::new();
    }

    debug!(?submission, mode = state.search.mode.name(), "search submitted");
    state.filter.apply(&submission);
    state.mode = Mode::Browsing;
    browsing::reload(state)
}
