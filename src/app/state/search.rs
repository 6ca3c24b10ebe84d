//! Search box state and the filters applied to the unread listing.

use super::types::SearchMode;
use crate::feed::{self, Category, EntryQuery, Feed};

/// Lookup collection that has to be fetched before candidates can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Categories,
    Feeds,
}

/// Outcome of pressing enter in the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Text(String),
    Category(i64),
    Feed(i64),
    /// An id-selection mode with nothing highlighted
    NoSelection,
}

#[derive(Debug, Default)]
pub struct SearchState {
    pub mode: SearchMode,
    pub query: String,
    /// Fetched once per run, reused afterwards
    pub categories: Option<Vec<Category>>,
    pub feeds: Option<Vec<Feed>>,
    pub categories_in_flight: bool,
    pub feeds_in_flight: bool,
    pub candidates: Vec<String>,
    pub candidate_ids: Vec<i64>,
    pub cursor: usize,
    /// Last submit had nothing selected
    pub rejected: bool,
}

impl SearchState {
    /// Fresh text for a new visit to the search box; cached lookups are kept.
    pub fn open(&mut self) {
        self.query.clear();
        self.rejected = false;
        self.refilter();
    }

    /// Advance to the next mode. Returns a lookup that still needs fetching.
    pub fn cycle_mode(&mut self) -> Option<Lookup> {
        self.mode = self.mode.next();
        self.query.clear();
        self.rejected = false;
        self.cursor = 0;
        self.candidates.clear();
        self.candidate_ids.clear();

        let needed = self.missing_lookup();
        if needed.is_none() {
            self.refilter();
        }
        needed
    }

    /// Lookup the active mode needs that is neither cached nor being fetched.
    /// Marks it in flight.
    fn missing_lookup(&mut self) -> Option<Lookup> {
        match self.mode {
            SearchMode::Category if self.categories.is_none() => {
                if self.categories_in_flight {
                    return None;
                }
                self.categories_in_flight = true;
                Some(Lookup::Categories)
            }
            SearchMode::FeedTitle if self.feeds.is_none() => {
                if self.feeds_in_flight {
                    return None;
                }
                self.feeds_in_flight = true;
                Some(Lookup::Feeds)
            }
            _ => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.rejected = false;
        self.refilter();
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.rejected = false;
        self.refilter();
    }

    /// Recompute the candidate list for id-selection modes.
    pub fn refilter(&mut self) {
        if !self.mode.selects_id() {
            return;
        }
        let term = self.query.to_lowercase();
        let matches = |title: &str| term.is_empty() || title.to_lowercase().contains(&term);

        let items: Vec<(i64, &str)> = match self.mode {
            SearchMode::Category => self
                .categories
                .iter()
                .flatten()
                .map(|c| (c.id, c.title.as_str()))
                .collect(),
            SearchMode::FeedTitle => self
                .feeds
                .iter()
                .flatten()
                .map(|f| (f.id, f.title.as_str()))
                .collect(),
            _ => Vec::new(),
        };

        let (ids, titles): (Vec<i64>, Vec<String>) = items
            .into_iter()
            .filter(|(_, title)| matches(title))
            .map(|(id, title)| (id, title.to_string()))
            .unzip();
        self.candidate_ids = ids;
        self.candidates = titles;

        if self.cursor >= self.candidates.len() {
            self.cursor = 0;
        }
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories_in_flight = false;
        self.categories = Some(categories);
        if self.mode == SearchMode::Category {
            self.refilter();
        }
    }

    pub fn set_feeds(&mut self, feeds: Vec<Feed>) {
        self.feeds_in_flight = false;
        self.feeds = Some(feeds);
        if self.mode == SearchMode::FeedTitle {
            self.refilter();
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.candidates.len() {
            self.cursor += 1;
        }
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.candidate_ids.get(self.cursor).copied()
    }

    pub fn submission(&self) -> Submission {
        match self.mode {
            SearchMode::Category => self
                .selected_id()
                .map_or(Submission::NoSelection, Submission::Category),
            SearchMode::FeedTitle => self
                .selected_id()
                .map_or(Submission::NoSelection, Submission::Feed),
            _ => Submission::Text(self.query.clone()),
        }
    }
}

/// Filters applied to the remote listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilter {
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub feed_id: Option<i64>,
    pub video_only: bool,
}

impl ActiveFilter {
    /// Apply a search submission. Selecting an id clears the text term and vice versa,
    /// and any submission turns the video-only narrowing off.
    pub fn apply(&mut self, submission: &Submission) {
        if *submission != Submission::NoSelection {
            self.video_only = false;
        }
        match submission {
            Submission::Text(text) => {
                self.search = Some(text.clone()).filter(|t| !t.is_empty());
                self.category_id = None;
                self.feed_id = None;
            }
            Submission::Category(id) => {
                self.search = None;
                self.category_id = Some(*id);
                self.feed_id = None;
            }
            Submission::Feed(id) => {
                self.search = None;
                self.category_id = None;
                self.feed_id = Some(*id);
            }
            Submission::NoSelection => {}
        }
    }

    pub fn query(&self, offset: usize) -> EntryQuery {
        let search = if self.video_only {
            Some(feed::video_search_term())
        } else {
            self.search.clone()
        };
        EntryQuery {
            search,
            category_id: self.category_id,
            feed_id: self.feed_id,
            offset,
        }
    }
}
