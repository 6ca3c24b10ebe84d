use crate::app::{Action, AppState, Effect, Mode, ReaderState};
use tracing::info;

pub fn handle(state: &mut AppState, action: Action) -> Vec<Effect> {
    if let Action::ReadingTick(seq) = action {
        return on_tick(state, seq);
    }
    if state.mode != Mode::Reading {
        return Vec::new();
    }

    let reader = &mut state.reader;
    match action {
        Action::TogglePause => {
            if reader.toggle_pause().is_some() {
                return vec![next_tick(reader)];
            }
        }
        Action::Faster => reader.faster(),
        Action::Slower => reader.slower(),
        Action::SeekForward => reader.seek_forward(),
        Action::SeekBack => reader.seek_back(),
        Action::JumpToStart => reader.jump_to_start(),
        Action::JumpToEnd => reader.jump_to_end(),
        Action::ToggleLargeGlyphs => reader.large_glyphs = !reader.large_glyphs,
        Action::ToggleRamp => reader.ramp = !reader.ramp,
        Action::ToggleZen => reader.zen = !reader.zen,
        _ => {}
    }
    Vec::new()
}

fn next_tick(reader: &ReaderState) -> Effect {
    Effect::ScheduleTick {
        seq: reader.tick_seq,
        after: reader.current_delay(),
    }
}

fn on_tick(state: &mut AppState, seq: u64) -> Vec<Effect> {
    let reader = &mut state.reader;
    if state.mode != Mode::Reading || reader.paused || seq != reader.tick_seq {
        return Vec::new();
    }
    if reader.advance() {
        return vec![next_tick(reader)];
    }

    // Last word has had its time on screen
    reader.pause();
    let words = reader.words.len() as u64;
    state.session_articles += 1;
    state.session_words += words;
    info!(words, "finished article");

    match &state.selected_entry {
        Some(entry) if state.remote_connected => vec![Effect::MarkRead(entry.id)],
        _ => Vec::new(),
    }
}
