use crate::app::{AppState, Mode};
use crate::tui::components::{
    entry_list, help_popup, login_view, reader_view, search_view, status_bar, video_link,
};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

pub fn draw(frame: &mut Frame, state: &AppState) {
    let theme = Theme::from_index(state.theme_index);
    frame.render_widget(Block::default().style(theme.base), frame.area());

    let screen = if state.mode == Mode::Help {
        state.help_return
    } else {
        state.mode
    };
    draw_screen(frame, screen, state, &theme);

    if state.mode == Mode::Help {
        help_popup::render(frame, &theme);
    }
}

fn draw_screen(frame: &mut Frame, screen: Mode, state: &AppState, theme: &Theme) {
    let area = frame.area();
    match screen {
        Mode::Reading => reader_view::render(frame, area, state, theme),
        Mode::VideoLink => video_link::render(frame, padded(area), state, theme),
        Mode::Login => login_view::render(frame, padded(area), state, theme),
        Mode::Browsing | Mode::Searching | Mode::Help => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Main content
                    Constraint::Length(1), // Status bar
                ])
                .split(area);

            if screen == Mode::Searching {
                search_view::render(frame, chunks[0], state, theme);
            } else {
                entry_list::render(frame, chunks[0], state, theme);
            }
            status_bar::render(frame, chunks[1], state, theme);
        }
    }
}

/// One column of breathing room on the text screens
fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}
