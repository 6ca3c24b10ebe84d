use crate::app::{Action, AppState, Effect, Mode};

use super::handlers::{browsing, global, login, reading, results, search};

/// Apply one action to the state and return the work it asks for.
///
/// Nothing here touches the network, the disk or the terminal.
pub fn process_action(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            Vec::new()
        }
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            Vec::new()
        }
        Action::Resize(w, h) => {
            state.terminal_size = (w, h);
            let rows = state.list_rows();
            state.list.clamp_viewport(rows);
            Vec::new()
        }

        // Esc belongs to whichever screen owns the keyboard
        Action::ExitMode => match state.mode {
            Mode::Searching => search::handle(state, action),
            Mode::Login => login::handle(state, action),
            _ => global::handle(state, action),
        },

        Action::EnterHelp
        | Action::CycleTheme
        | Action::OpenInBrowser
        | Action::ToggleStar => global::handle(state, action),

        Action::TogglePause
        | Action::Faster
        | Action::Slower
        | Action::SeekForward
        | Action::SeekBack
        | Action::ToggleLargeGlyphs
        | Action::ToggleRamp
        | Action::ToggleZen
        | Action::ReadingTick(_) => reading::handle(state, action),

        Action::MoveUp | Action::MoveDown | Action::JumpToStart | Action::JumpToEnd => {
            match state.mode {
                Mode::Reading => reading::handle(state, action),
                Mode::Browsing => browsing::handle(state, action),
                Mode::Searching => search::handle(state, action),
                _ => Vec::new(),
            }
        }

        Action::EnterSearch
        | Action::OpenSelected
        | Action::ToggleVideoFilter
        | Action::MarkSelectedRead => browsing::handle(state, action),

        Action::InputChar(_) | Action::InputBackspace | Action::NextField | Action::Submit => {
            match state.mode {
                Mode::Searching => search::handle(state, action),
                Mode::Login => login::handle(state, action),
                _ => Vec::new(),
            }
        }

        Action::EntriesLoaded { .. }
        | Action::CategoriesLoaded(_)
        | Action::FeedsLoaded(_)
        | Action::ContentReady { .. }
        | Action::MarkedRead { .. }
        | Action::StarToggled { .. }
        | Action::ConnectFailed(_)
        | Action::BackgroundError(_) => results::handle(state, action),
    }
}
