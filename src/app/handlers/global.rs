use crate::app::{Action, AppState, Effect, Mode};
use crate::feed;
use tracing::debug;

/// Keys that work on every screen except the ones with a text field.
pub fn handle(state: &mut AppState, action: Action) -> Vec<Effect> {
    if matches!(state.mode, Mode::Searching | Mode::Login) {
        return Vec::new();
    }

    match action {
        Action::EnterHelp => toggle_help(state),
        Action::ExitMode => exit_mode(state),
        Action::CycleTheme => {
            state.cycle_theme();
            Vec::new()
        }
        Action::OpenInBrowser => open_in_browser(state),
        Action::ToggleStar => toggle_star(state),
        _ => Vec::new(),
    }
}

fn toggle_help(state: &mut AppState) -> Vec<Effect> {
    if state.mode == Mode::Help {
        state.mode = state.help_return;
    } else {
        state.reader.pause();
        state.help_return = state.mode;
        state.mode = Mode::Help;
    }
    Vec::new()
}

fn exit_mode(state: &mut AppState) -> Vec<Effect> {
    match state.mode {
        Mode::Help => state.mode = state.help_return,
        Mode::Reading | Mode::VideoLink if state.remote_connected => {
            state.reader.pause();
            state.selected_entry = None;
            state.mode = Mode::Browsing;
        }
        _ => state.should_quit = true,
    }
    Vec::new()
}

fn open_in_browser(state: &mut AppState) -> Vec<Effect> {
    let Some(entry) = state.target_entry() else {
        return Vec::new();
    };
    if entry.url.is_empty() {
        return Vec::new();
    }

    debug!(entry_id = entry.id, url = %entry.url, "opening in browser");
    let mut effects = vec![Effect::OpenUrl(entry.url.clone())];
    if state.remote_connected && feed::is_video_url(&entry.url) {
        effects.push(Effect::MarkRead(entry.id));
    }
    effects
}

fn toggle_star(state: &mut AppState) -> Vec<Effect> {
    if !state.remote_connected {
        return Vec::new();
    }
    state
        .target_entry()
        .map(|entry| vec![Effect::ToggleStarred(entry.id)])
        .unwrap_or_default()
}
