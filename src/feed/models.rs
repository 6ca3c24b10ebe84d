use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries requested per page
pub const PAGE_SIZE: usize = 50;

const VIDEO_URL_PATTERNS: [&str; 2] = ["youtube.com/watch?v=", "youtu.be/"];

/// Feed an entry belongs to, as embedded in entry responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeedRef {
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub author: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub feed: Option<FeedRef>,
}

impl Entry {
    pub fn is_video(&self) -> bool {
        is_video_url(&self.url)
    }

    /// Title on a single line
    pub fn display_title(&self) -> String {
        self.title.replace('\n', " ").replace('\r', "")
    }

    /// Compact publish date: time for today, day for this year, full date otherwise.
    pub fn short_date(&self, now: DateTime<Local>) -> String {
        let local = self.published_at.with_timezone(&Local);
        if local.year() != now.year() {
            local.format("%b %d '%y").to_string()
        } else if local.ordinal() != now.ordinal() {
            local.format("%b %d").to_string()
        } else {
            local.format("%H:%M").to_string()
        }
    }
}

pub fn is_video_url(url: &str) -> bool {
    VIDEO_URL_PATTERNS.iter().any(|p| url.contains(p))
}

/// Search term that narrows the entry listing to video links
pub fn video_search_term() -> String {
    VIDEO_URL_PATTERNS.join("|")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: Option<Category>,
}

/// One page of the unread listing plus the server-side total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EntryPage {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Filter for the unread listing. Always unread, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryQuery {
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub feed_id: Option<i64>,
    pub offset: usize,
}

impl EntryQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("status", "unread".to_string()),
            ("limit", PAGE_SIZE.to_string()),
            ("offset", self.offset.to_string()),
            ("order", "published_at".to_string()),
            ("direction", "desc".to_string()),
        ];
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            params.push(("search", search.clone()));
        }
        if let Some(id) = self.category_id {
            params.push(("category_id", id.to_string()));
        }
        if let Some(id) = self.feed_id {
            params.push(("feed_id", id.to_string()));
        }
        params
    }
}
