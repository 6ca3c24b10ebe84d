use crate::app::{Action, AppState, Effect, Mode};
use crate::feed::FeedError;
use tracing::{debug, info, warn};

/// Merge the outcome of background work into the state.
pub fn handle(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::EntriesLoaded {
            generation,
            offset,
            result,
        } => match result {
            Ok(page) => {
                let count = page.entries.len();
                if state.list.apply_page(generation, offset, page.entries, page.total) {
                    debug!(offset, count, total = page.total, "entries merged");
                    if offset == 0 {
                        state.loading = false;
                    }
                } else {
                    debug!(generation, "dropped page from an older load");
                }
            }
            Err(err) => {
                if generation == state.list.generation {
                    state.loading = false;
                    transport_error(state, "fetch entries", &err);
                }
                state.list.fetch_failed(generation);
            }
        },

        Action::CategoriesLoaded(result) => match result {
            Ok(categories) => state.search.set_categories(categories),
            Err(err) => {
                state.search.categories_in_flight = false;
                transport_error(state, "fetch categories", &err);
            }
        },
        Action::FeedsLoaded(result) => match result {
            Ok(feeds) => state.search.set_feeds(feeds),
            Err(err) => {
                state.search.feeds_in_flight = false;
                transport_error(state, "fetch feeds", &err);
            }
        },

        Action::ContentReady { entry_id, words } => content_ready(state, entry_id, words),

        Action::MarkedRead { id, result } => match result {
            Ok(()) => {
                state.list.remove(id);
                let rows = state.list_rows();
                state.list.clamp_viewport(rows);
            }
            Err(err) => transport_error(state, "mark read", &err),
        },
        Action::StarToggled { id, result } => match result {
            Ok(()) => {
                state.list.toggle_starred(id);
                if let Some(entry) = state.selected_entry.as_mut().filter(|e| e.id == id) {
                    entry.starred = !entry.starred;
                }
            }
            Err(err) => transport_error(state, "toggle star", &err),
        },

        Action::ConnectFailed(err) => {
            warn!(error = %err, "could not create feed client");
            state.remote_connected = false;
            state.loading = false;
            state.list.abandon();
            state.set_error(err.to_string());
            state.start_login();
        }
        Action::BackgroundError(message) => state.set_error(message),
        _ => {}
    }
    Vec::new()
}

fn transport_error(state: &mut AppState, what: &str, err: &FeedError) {
    warn!(error = %err, "{what} failed");
    state.set_error(err.to_string());
}

fn content_ready(state: &mut AppState, entry_id: i64, words: Vec<String>) {
    if state.opening.as_ref().map(|e| e.id) != Some(entry_id) {
        debug!(entry_id, "dropped content for an entry no longer being opened");
        return;
    }
    state.loading = false;
    let Some(entry) = state.opening.take() else {
        return;
    };
    if state.mode != Mode::Browsing {
        return;
    }
    if words.is_empty() {
        state.set_error(format!("\"{}\" has no readable text", entry.display_title()));
        return;
    }

    info!(entry_id, words = words.len(), "opening article");
    state.last_error = None;
    state.reader.load(words);
    state.selected_entry = Some(entry);
    state.mode = Mode::Reading;
}
