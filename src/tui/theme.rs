//! Background palettes cycled with `c`.

use ratatui::style::{Color, Modifier, Style};

pub const THEME_COUNT: usize = 6;

/// Background for each palette; `None` keeps the terminal's own.
const BACKGROUNDS: [Option<Color>; THEME_COUNT] = [
    None,
    Some(Color::Rgb(0x00, 0x00, 0x00)),
    Some(Color::Rgb(0x1e, 0x1e, 0x2e)),
    Some(Color::Rgb(0x28, 0x2c, 0x34)),
    Some(Color::Rgb(0xfb, 0xf1, 0xc7)),
    Some(Color::Rgb(0xff, 0xff, 0xff)),
];

const FOCUS: Color = Color::Indexed(196);
const DIM: Color = Color::Indexed(238);
const STAR: Color = Color::Indexed(220);

/// Styles every component draws with
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub base: Style,
    pub focus: Style,
    pub hud: Style,
    pub line: Style,
    pub selected: Style,
    pub star: Style,
    pub error: Style,
    pub heading: Style,
}

impl Theme {
    pub fn from_index(index: usize) -> Self {
        let bg = BACKGROUNDS[index % THEME_COUNT];
        let light = matches!(
            bg,
            Some(Color::Rgb(0xfb, 0xf1, 0xc7)) | Some(Color::Rgb(0xff, 0xff, 0xff))
        );
        let (fg, hud) = if light {
            (Color::Black, DIM)
        } else {
            (Color::White, Color::Indexed(241))
        };

        let base = match bg {
            Some(bg) => Style::default().bg(bg).fg(fg),
            None => Style::default().fg(fg),
        };

        Self {
            base,
            focus: base.fg(FOCUS).add_modifier(Modifier::BOLD),
            hud: base.fg(hud),
            line: base.fg(DIM),
            selected: base.fg(FOCUS).add_modifier(Modifier::BOLD),
            star: base.fg(STAR),
            error: base.fg(Color::Indexed(9)),
            heading: base.add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_keeps_terminal_background() {
        assert_eq!(Theme::from_index(0).base.bg, None);
    }

    #[test]
    fn test_light_themes_use_dark_text() {
        assert_eq!(Theme::from_index(4).base.fg, Some(Color::Black));
        assert_eq!(Theme::from_index(5).base.fg, Some(Color::Black));
        assert_eq!(Theme::from_index(2).base.fg, Some(Color::White));
    }
}
