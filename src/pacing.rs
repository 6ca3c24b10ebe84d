//! Per-word timing and eye-guide alignment for the reading view.

use std::time::Duration;

/// Split a word around its pivot character.
///
/// The pivot index comes from a fixed table keyed on the rune count and is
/// clamped to the last rune. An empty word yields three empty strings.
pub fn split(word: &str) -> (String, String, String) {
    let runes: Vec<char> = word.chars().collect();
    let n = runes.len();
    if n == 0 {
        return (String::new(), String::new(), String::new());
    }

    let pivot = pivot_index(n).min(n - 1);

    let lead: String = runes[..pivot].iter().collect();
    let focus = runes[pivot].to_string();
    let trail: String = runes[pivot + 1..].iter().collect();

    (lead, focus, trail)
}

fn pivot_index(len: usize) -> usize {
    match len {
        0 | 1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// How long a word stays on screen at the given speed.
pub fn delay(word: &str, wpm: u32, ramp: bool) -> Duration {
    let mut secs = 60.0 / f64::from(wpm.max(1));

    if ramp {
        let len = word.chars().count();
        if len > 12 {
            secs *= 1.5;
        } else if len > 8 {
            secs *= 1.2;
        }
    }

    if word.ends_with(['.', '!', '?']) {
        secs *= 2.0;
    } else if word.ends_with([',', ';']) {
        secs *= 1.5;
    }

    Duration::from_secs_f64(secs)
}

/// Map printable ASCII to its full-width form for the large-glyph mode.
pub fn to_full_width(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ' ' => '\u{3000}',
            '!'..='~' => char::from_u32(c as u32 + 0xFEE0).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Remaining reading time as (minutes, seconds).
pub fn time_remaining(words_left: usize, wpm: u32) -> (u64, u64) {
    let minutes = words_left as f64 / f64::from(wpm.max(1));
    let seconds = (minutes * 60.0) as u64;
    (seconds / 60, seconds % 60)
}
