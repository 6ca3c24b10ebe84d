use crate::app::AppState;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Lines above the candidate list: header, gap, input, gap
const HEADER_ROWS: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let search = &state.search;
    let [header_area, list_area] =
        Layout::vertical([Constraint::Length(HEADER_ROWS), Constraint::Min(0)]).areas(area);

    let header = vec![
        Line::styled(format!("Search Articles ({})", search.mode.name()), theme.heading),
        Line::default(),
        Line::from(vec![
            Span::styled("> ", theme.focus),
            Span::styled(search.query.as_str(), theme.base),
            Span::styled("█", theme.hud),
        ]),
    ];
    frame.render_widget(Paragraph::new(header).style(theme.base), header_area);

    if !search.mode.selects_id() {
        return;
    }

    let mut lines = Vec::new();
    if search.rejected {
        lines.push(Line::styled("Pick an entry from the list first.", theme.error));
    }
    let loading = search.categories_in_flight || search.feeds_in_flight;
    if search.candidates.is_empty() {
        let text = if loading { "Loading..." } else { "No matches." };
        lines.push(Line::styled(text, theme.hud));
    }

    let rows = candidate_rows(list_area.height, lines.len());
    let (start, end) = visible_range(search.cursor, search.candidates.len(), rows);
    for (i, title) in search.candidates[start..end].iter().enumerate() {
        let (marker, style) = if start + i == search.cursor {
            (">", theme.selected)
        } else {
            (" ", theme.base)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), theme.base),
            Span::styled(title.as_str(), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(theme.base), list_area);
}

/// Rows left for candidates once notices are drawn, bounded by the area.
///
/// At least one row so the slice below stays valid; a zero-height area draws nothing anyway.
fn candidate_rows(height: u16, notices: usize) -> usize {
    (height as usize).saturating_sub(notices).max(1)
}

/// Slice of the candidate list that keeps the cursor on screen.
fn visible_range(cursor: usize, len: usize, rows: usize) -> (usize, usize) {
    let start = if cursor >= rows { cursor + 1 - rows } else { 0 };
    (start, (start + rows).min(len))
}
