use crate::app::AppState;
use crate::tui::theme::Theme;
use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cursor(1) + space + date(10) + space + star(2)
const PREFIX_WIDTH: usize = 15;
const DATE_WIDTH: usize = 10;
const MIN_TITLE_WIDTH: usize = 10;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [header_area, _, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let mut header = String::from("Miniflux Unread Entries");
    if state.filter.video_only {
        header.push_str(" (YouTube Only)");
    }
    frame.render_widget(Paragraph::new(header).style(theme.heading), header_area);

    let list = &state.list;
    let message = if state.loading && list.is_empty() {
        Some(Line::styled("Loading...", theme.base))
    } else if list.is_empty() {
        match &state.last_error {
            Some(err) => Some(Line::styled(format!("Error: {err}"), theme.error)),
            None => Some(Line::styled("No entries found.", theme.base)),
        }
    } else {
        None
    };
    if let Some(message) = message {
        frame.render_widget(Paragraph::new(message).style(theme.base), list_area);
        return;
    }

    let window = list.window(state.list_rows());
    let indent = " ".repeat(PREFIX_WIDTH);
    let title_width = (area.width as usize)
        .saturating_sub(PREFIX_WIDTH + 1)
        .max(MIN_TITLE_WIDTH);
    let now = Local::now();

    let mut lines = Vec::with_capacity(window.end - window.start + 2);
    if window.more_above {
        lines.push(Line::styled(format!("{indent}▲ (more above)"), theme.base));
    }
    for (i, entry) in list.entries[window.start..window.end].iter().enumerate() {
        let selected = window.start + i == list.cursor;
        let (marker, title_style) = if selected {
            (">", theme.selected)
        } else {
            (" ", theme.base)
        };
        let star = if entry.starred { "★ " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), theme.base),
            Span::styled(
                format!("{:<DATE_WIDTH$} ", entry.short_date(now)),
                theme.line,
            ),
            Span::styled(star, theme.star),
            Span::styled(truncate(&entry.display_title(), title_width), title_style),
        ]));
    }
    if window.more_below {
        let text = if list.fetch_in_flight {
            "... loading more ..."
        } else {
            "▼ (more below)"
        };
        lines.push(Line::styled(format!("{indent}{text}"), theme.base));
    }

    frame.render_widget(Paragraph::new(lines).style(theme.base), list_area);
}

/// Cut `text` to `width` display columns, ending in an ellipsis when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let target = width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
