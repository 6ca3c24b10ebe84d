use crate::app::{AppState, Mode};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (label, hint) = match state.mode {
        Mode::Browsing => ("LIST", "/: Search, y: YouTube Filter, m: Mark Read, ?: Help"),
        Mode::Searching => ("SEARCH", "Enter to search/select, Tab to change mode, Esc to cancel"),
        Mode::Help => ("HELP", "Press Esc, ? or q to close"),
        _ => ("", ""),
    };

    let mut spans = vec![Span::styled(
        format!(" {label} "),
        theme.focus.add_modifier(Modifier::REVERSED),
    )];
    if state.loading {
        let frame_idx = (state.tick_count as usize / 2) % SPINNER.len();
        spans.push(Span::styled(format!(" {} ", SPINNER[frame_idx]), theme.hud));
    }
    match &state.last_error {
        Some(err) if state.mode == Mode::Browsing && !state.list.is_empty() => {
            spans.push(Span::styled(format!(" Error: {err}"), theme.error));
        }
        _ => spans.push(Span::styled(format!(" {hint}"), theme.hud)),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.base), area);
}
