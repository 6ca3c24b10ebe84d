use crate::app::{AppState, LoginField};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let login = &state.login;
    let mut lines = vec![Line::styled("Miniflux Login", theme.heading), Line::default()];

    if let Some(err) = &state.last_error {
        lines.push(Line::styled(err.as_str(), theme.error));
        lines.push(Line::default());
    }

    let masked = "*".repeat(login.token.chars().count());
    let token_shown = if login.focus == LoginField::Token {
        login.token.as_str()
    } else {
        masked.as_str()
    };

    lines.push(Line::from("Miniflux URL:"));
    lines.push(field(&login.url, login.focus == LoginField::Url, theme));
    lines.push(Line::default());
    lines.push(Line::from("API Token:"));
    lines.push(field(token_shown, login.focus == LoginField::Token, theme));
    lines.push(Line::default());
    lines.push(Line::styled(
        "(Enter to switch fields, or submit. Tab to switch. Esc to quit)",
        theme.hud,
    ));

    frame.render_widget(Paragraph::new(lines).style(theme.base), area);
}

fn field<'a>(value: &str, focused: bool, theme: &Theme) -> Line<'a> {
    let (marker, cursor) = if focused { ("> ", "█") } else { ("  ", "") };
    Line::from(vec![
        Span::styled(marker, theme.focus),
        Span::styled(value.to_string(), theme.base),
        Span::styled(cursor, theme.hud),
    ])
}
