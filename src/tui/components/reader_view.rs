use crate::app::AppState;
use crate::pacing;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PROGRESS_CELLS: usize = 40;
/// Below this height the separators around the word are dropped
const SEPARATOR_MIN_HEIGHT: u16 = 11;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let reader = &state.reader;
    let hud = if reader.zen { Vec::new() } else { hud_lines(state, theme) };
    let [main, hud_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(hud.len() as u16),
    ])
    .areas(area);

    let word_line = match reader.current_word() {
        Some(word) => pivot_line(word, reader.large_glyphs, main.width, theme),
        None => Line::styled("Nothing to read.", theme.base).alignment(Alignment::Center),
    };

    let framed = !reader.zen && area.height >= SEPARATOR_MIN_HEIGHT;
    let mut block = Vec::new();
    if framed {
        let separator = Line::styled("─".repeat(main.width as usize), theme.line);
        block.extend([separator.clone(), Line::default(), word_line, Line::default(), separator]);
    } else {
        block.push(word_line);
    }

    let top = main.height.saturating_sub(block.len() as u16) / 2;
    let [_, content, _] = Layout::vertical([
        Constraint::Length(top),
        Constraint::Length(block.len() as u16),
        Constraint::Min(0),
    ])
    .areas(main);

    frame.render_widget(Paragraph::new(block).style(theme.base), content);
    if !hud.is_empty() {
        frame.render_widget(Paragraph::new(hud).style(theme.hud), hud_area);
    }
}

/// The word with its pivot letter pinned to the middle column.
fn pivot_line<'a>(word: &str, large: bool, width: u16, theme: &Theme) -> Line<'a> {
    let (mut lead, mut pivot, mut trail) = pacing::split(word);
    if large {
        lead = pacing::to_full_width(&lead);
        pivot = pacing::to_full_width(&pivot);
        trail = pacing::to_full_width(&trail);
    }

    let pad = (width as usize / 2).saturating_sub(lead.width());
    Line::from(vec![
        Span::styled(" ".repeat(pad), theme.base),
        Span::styled(lead, theme.base),
        Span::styled(pivot, theme.focus),
        Span::styled(trail, theme.base),
    ])
}

fn hud_lines<'a>(state: &'a AppState, theme: &Theme) -> Vec<Line<'a>> {
    let reader = &state.reader;
    let (min, sec) = pacing::time_remaining(reader.words_left(), reader.wpm);
    let play = if reader.paused {
        "PAUSED (Press Space)"
    } else {
        "PLAYING"
    };
    let ramp = if reader.ramp { "ON" } else { "OFF" };

    let mut controls = format!("{play} | Size: s | Color: c | Ramp: r ({ramp}) | Zen: z");
    if state.remote_connected {
        controls.push_str(" | Esc: Back | o: Open | f: Star");
    }

    let mut lines = vec![
        Line::from(format!("WPM: {} | Time Remaining: {min:02}:{sec:02}", reader.wpm)),
        Line::from(progress_bar(reader.progress())),
        Line::from(controls),
    ];
    if let Some(title) = state.reading_title() {
        lines.push(Line::from(format!("Title: {title}")));
    }
    if let Some(err) = &state.last_error {
        lines.push(Line::styled(format!("Error: {err}"), theme.error));
    }
    lines
}

fn progress_bar(fraction: f64) -> String {
    let filled = ((fraction * PROGRESS_CELLS as f64) as usize).min(PROGRESS_CELLS);
    format!(
        "[{}{}] {}%",
        "=".repeat(filled),
        "-".repeat(PROGRESS_CELLS - filled),
        (fraction * 100.0) as u32
    )
}
