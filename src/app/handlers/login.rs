use crate::app::{Action, AppState, Effect, LoginField, Mode};
use tracing::info;

pub fn handle(state: &mut AppState, action: Action) -> Vec<Effect> {
    if state.mode != Mode::Login {
        return Vec::new();
    }

    match action {
        Action::InputChar(c) => state.login.focused_mut().push(c),
        Action::InputBackspace => {
            state.login.focused_mut().pop();
        }
        Action::NextField => state.login.focus = state.login.focus.toggle(),
        Action::Submit => match state.login.focus {
            LoginField::Url => state.login.focus = LoginField::Token,
            LoginField::Token => return submit(state),
        },
        Action::ExitMode => state.should_quit = true,
        _ => {}
    }
    Vec::new()
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    let url = state.login.url.trim().to_string();
    let token = state.login.token.trim().to_string();
    let mut effects = Vec::new();

    if !url.is_empty() {
        state.config.miniflux_url = url.clone();
        effects.push(Effect::SaveConfig(state.snapshot_config()));
    }
    if !token.is_empty() {
        effects.push(Effect::StoreToken(token.clone()));
    }

    if url.is_empty() || token.is_empty() {
        state.set_error("Miniflux URL and token are required");
        state.login.focus = LoginField::Url;
        return effects;
    }

    info!(url = %url, "connecting to feed service");
    state.last_error = None;
    effects.push(Effect::Connect { url, token });
    let generation = state.start_remote();
    effects.push(Effect::FetchEntries {
        generation,
        query: state.filter.query(0),
    });
    effects
}
