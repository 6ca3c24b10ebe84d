use crate::app::{Action, AppState, Effect, Mode};
use tracing::debug;

pub fn handle(state: &mut AppState, action: Action) -> Vec<Effect> {
    if state.mode != Mode::Browsing {
        return Vec::new();
    }
    let rows = state.list_rows();

    match action {
        Action::EnterSearch => {
            state.search.open();
            state.mode = Mode::Searching;
        }
        Action::MoveUp => state.list.move_up(),
        Action::MoveDown => {
            if let Some(offset) = state.list.move_down(rows) {
                debug!(offset, "fetching next page");
                return vec![Effect::FetchEntries {
                    generation: state.list.generation,
                    query: state.filter.query(offset),
                }];
            }
        }
        Action::JumpToStart => state.list.jump_to_start(),
        Action::JumpToEnd => state.list.jump_to_end(rows),
        Action::OpenSelected => return open_selected(state),
        Action::ToggleVideoFilter => {
            state.filter.video_only = !state.filter.video_only;
            return reload(state);
        }
        Action::MarkSelectedRead => {
            if let Some(entry) = state.list.selected().filter(|_| state.remote_connected) {
                return vec![Effect::MarkRead(entry.id)];
            }
        }
        _ => {}
    }
    Vec::new()
}

/// Fetch the first page of the active filter, replacing what is loaded.
pub fn reload(state: &mut AppState) -> Vec<Effect> {
    state.loading = true;
    let generation = state.list.begin_reload();
    vec![Effect::FetchEntries {
        generation,
        query: state.filter.query(0),
    }]
}

fn open_selected(state: &mut AppState) -> Vec<Effect> {
    let Some(entry) = state.list.selected().cloned() else {
        return Vec::new();
    };

    if entry.is_video() {
        state.opening = None;
        state.loading = false;
        state.selected_entry = Some(entry);
        state.mode = Mode::VideoLink;
        return Vec::new();
    }

    state.loading = true;
    let effect = Effect::ExtractContent {
        entry_id: entry.id,
        markup: entry.content.clone(),
    };
    state.opening = Some(entry);
    vec![effect]
}
