use crate::pacing;
use std::time::Duration;

pub const WPM_STEP: u32 = 50;
pub const MIN_WPM: u32 = 50;
pub const SEEK_WORDS: usize = 10;

/// Word-at-a-time reading session
pub struct ReaderState {
    pub words: Vec<String>,
    pub index: usize,
    pub paused: bool,
    pub wpm: u32,
    pub ramp: bool,
    pub large_glyphs: bool,
    pub zen: bool,
    /// Identifies the live tick chain; ticks carrying an older value are dropped
    pub tick_seq: u64,
}

impl ReaderState {
    pub fn new(wpm: u32, ramp: bool, zen: bool) -> Self {
        Self {
            words: Vec::new(),
            index: 0,
            paused: true,
            wpm: wpm.max(1),
            ramp,
            large_glyphs: false,
            zen,
            tick_seq: 0,
        }
    }

    /// Replace the word sequence and rewind, paused.
    pub fn load(&mut self, words: Vec<String>) {
        self.words = words;
        self.index = 0;
        self.pause();
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.words.len()
    }

    /// Display time of the current word
    pub fn current_delay(&self) -> Duration {
        pacing::delay(self.current_word().unwrap_or(""), self.wpm, self.ramp)
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.tick_seq += 1;
        }
    }

    /// Returns the tick sequence to schedule when reading resumed.
    pub fn toggle_pause(&mut self) -> Option<u64> {
        if self.paused {
            if self.words.is_empty() {
                return None;
            }
            self.paused = false;
            self.tick_seq += 1;
            Some(self.tick_seq)
        } else {
            self.pause();
            None
        }
    }

    /// Step to the next word. Returns false when already on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn faster(&mut self) {
        self.wpm += WPM_STEP;
    }

    pub fn slower(&mut self) {
        if self.wpm > MIN_WPM {
            self.wpm = self.wpm.saturating_sub(WPM_STEP).max(MIN_WPM);
        }
    }

    pub fn seek_forward(&mut self) {
        if !self.words.is_empty() {
            self.index = (self.index + SEEK_WORDS).min(self.words.len() - 1);
        }
    }

    pub fn seek_back(&mut self) {
        self.index = self.index.saturating_sub(SEEK_WORDS);
    }

    pub fn jump_to_start(&mut self) {
        self.index = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.index = self.words.len().saturating_sub(1);
    }

    /// Fraction of the article already shown
    pub fn progress(&self) -> f64 {
        if self.words.is_empty() {
            0.0
        } else {
            self.index as f64 / self.words.len() as f64
        }
    }

    pub fn words_left(&self) -> usize {
        self.words.len().saturating_sub(self.index)
    }
}
