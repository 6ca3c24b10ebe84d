use crate::app::AppState;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let lines = match &state.selected_entry {
        Some(entry) => vec![
            Line::styled("YouTube Video Link", theme.heading),
            Line::default(),
            Line::from(format!("Title: {}", entry.display_title())),
            Line::default(),
            Line::from(format!("URL: {}", entry.url)),
            Line::default(),
            Line::styled("(o: open in browser and mark read, Esc: back to list)", theme.hud),
        ],
        None => vec![Line::from("No video link selected. (Esc to go back)")],
    };

    frame.render_widget(
        Paragraph::new(lines)
            .style(theme.base)
            .wrap(Wrap { trim: false }),
        area,
    );
}
