//! Cursor, viewport and infinite scroll over the loaded unread entries.

use crate::feed::Entry;

/// Rows kept between the cursor and the bottom edge while scrolling down
pub const SCROLL_MARGIN: usize = 2;
/// Request the next page once the cursor is this close to the end of the loaded window
pub const PREFETCH_DISTANCE: usize = 10;

/// The loaded prefix of the unread listing plus its viewport
#[derive(Debug, Default)]
pub struct EntryList {
    pub entries: Vec<Entry>,
    /// Server-reported total for the active filter
    pub total: usize,
    pub cursor: usize,
    pub offset: usize,
    pub fetch_in_flight: bool,
    /// Bumped on every fresh load so late pages from an older filter are dropped
    pub generation: u64,
}

/// What the renderer should draw for a given height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    pub more_above: bool,
    pub more_below: bool,
}

impl EntryList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    pub fn has_unloaded(&self) -> bool {
        self.entries.len() < self.total
    }

    fn more_below(&self, offset: usize, visible: usize) -> bool {
        offset + visible < self.entries.len() || self.has_unloaded()
    }

    /// Rows left for entries once the scroll indicators take their share.
    pub fn effective_rows(&self, offset: usize, rows: usize) -> usize {
        let mut visible = rows;
        if offset > 0 {
            visible = visible.saturating_sub(1);
        }
        if self.more_below(offset, visible) {
            visible = visible.saturating_sub(1);
        }
        visible.max(SCROLL_MARGIN + 1)
    }

    /// Push the viewport down until the cursor sits `margin` rows above the bottom edge.
    fn reveal_cursor(&mut self, rows: usize, margin: usize) {
        let needed = self.cursor + margin + 1;
        // Stepping keeps the offset minimal as the indicators come and go.
        while needed > self.offset + self.effective_rows(self.offset, rows) {
            self.offset += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
    }

    /// Move down one row. Returns the offset of the next page when it should be fetched.
    pub fn move_down(&mut self, rows: usize) -> Option<usize> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }

        let next_page = self.claim_next_page();
        self.reveal_cursor(rows, SCROLL_MARGIN);
        next_page
    }

    /// Marks a page fetch as in flight when the cursor is near the end of what is loaded.
    fn claim_next_page(&mut self) -> Option<usize> {
        let near_end = self.cursor + PREFETCH_DISTANCE >= self.entries.len();
        if self.fetch_in_flight || !self.has_unloaded() || !near_end {
            return None;
        }
        self.fetch_in_flight = true;
        Some(self.entries.len())
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn jump_to_end(&mut self, rows: usize) {
        if self.entries.is_empty() {
            return;
        }
        self.cursor = self.entries.len() - 1;

        let mut visible = rows;
        if self.cursor >= rows {
            visible = visible.saturating_sub(1); // top indicator once we land
        }
        if self.has_unloaded() {
            visible = visible.saturating_sub(1);
        }
        let visible = visible.max(SCROLL_MARGIN + 1);

        self.offset = (self.cursor + SCROLL_MARGIN + 1).saturating_sub(visible);
        self.reveal_cursor(rows, 0);
    }

    /// Start a fresh load. Returns the generation the result must carry.
    pub fn begin_reload(&mut self) -> u64 {
        self.generation += 1;
        self.fetch_in_flight = true;
        self.generation
    }

    /// Forget any outstanding fetch so its result is treated as stale.
    pub fn abandon(&mut self) {
        self.generation += 1;
        self.fetch_in_flight = false;
    }

    /// Merge a page of results. Offset 0 replaces the window, anything else appends.
    ///
    /// Returns false when the page belongs to an older load and was ignored.
    pub fn apply_page(&mut self, generation: u64, offset: usize, entries: Vec<Entry>, total: usize) -> bool {
        if generation != self.generation {
            return false;
        }
        self.fetch_in_flight = false;

        if offset == 0 {
            self.entries = entries;
            self.cursor = 0;
            self.offset = 0;
        } else {
            for entry in entries {
                if !self.entries.iter().any(|e| e.id == entry.id) {
                    self.entries.push(entry);
                }
            }
        }
        self.total = total;
        true
    }

    /// Clear the in-flight guard after a failed fetch of the current generation.
    pub fn fetch_failed(&mut self, generation: u64) {
        if generation == self.generation {
            self.fetch_in_flight = false;
        }
    }

    /// Drop an entry that was marked read.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return false;
        }
        self.total = self.total.saturating_sub(1);
        if self.cursor >= self.entries.len() {
            self.cursor = self.entries.len().saturating_sub(1);
        }
        true
    }

    pub fn toggle_starred(&mut self, id: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.starred = !entry.starred;
        }
    }

    /// Pull the viewport back when the list got shorter than it, keeping the cursor visible.
    pub fn clamp_viewport(&mut self, rows: usize) {
        let len = self.entries.len();
        if self.offset + rows > len {
            self.offset = len.saturating_sub(rows);
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        self.reveal_cursor(rows, 0);
    }

    /// Rows to draw for a viewport of `rows` lines.
    pub fn window(&self, rows: usize) -> Window {
        let more_above = self.offset > 0;
        let below_from = if more_above { rows.saturating_sub(1) } else { rows };
        let more_below = self.more_below(self.offset, below_from);
        let visible = self.effective_rows(self.offset, rows);
        let start = self.offset.min(self.entries.len());
        let end = (self.offset + visible).min(self.entries.len());
        Window {
            start,
            end,
            more_above,
            more_below,
        }
    }
}
