use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEYS: &[(&str, &str)] = &[
    ("Space", "Pause / Resume Reading"),
    ("k / j", "Increase / Decrease WPM"),
    ("Left / Right", "Rewind / Fast Forward (10 words)"),
    ("g / G", "Jump to Start / End"),
    ("s", "Toggle Large Text Size"),
    ("r", "Toggle Speed Ramping"),
    ("z", "Toggle Zen Mode"),
    ("c", "Cycle Themes"),
    ("/", "Search Articles (Tab changes mode)"),
    ("j / k", "Navigate Article List"),
    ("Enter", "Select Article"),
    ("o", "Open Article in Browser"),
    ("f", "Toggle Starred"),
    ("m", "Mark as Read"),
    ("y", "Filter YouTube Videos"),
    ("Esc", "Back / Quit"),
    ("?", "Show this Help"),
    ("q", "Quit Application (closes this Help)"),
];

/// Keys that close the popup
const CLOSE_KEYS: [&str; 3] = ["Esc", "?", "q"];

pub fn render(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let key_width = KEYS.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 2;
    let mut lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<key_width$}"), theme.focus),
                Span::styled(*desc, theme.base),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        format!("  Press {} to close.", CLOSE_KEYS.join(", ")),
        theme.hud,
    ));

    let block = Block::default()
        .title(" Help & Keybindings ")
        .borders(Borders::ALL)
        .border_style(theme.line)
        .style(theme.base);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Action, Mode};
    use crate::tui::event::map_key;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_close_keys_close_help() {
        for key in CLOSE_KEYS {
            let code = match key {
                "Esc" => KeyCode::Esc,
                other => KeyCode::Char(other.chars().next().unwrap_or(' ')),
            };
            let action = map_key(KeyEvent::new(code, KeyModifiers::NONE), Mode::Help);
            assert!(matches!(action, Action::ExitMode), "{key} should close help");
        }
    }
}
