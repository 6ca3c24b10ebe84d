use crate::feed::EntryQuery;
use crate::persistence::Config;
use std::time::Duration;

/// Work requested by the reducer. The runtime runs each one off the event loop
/// and reports back with an `Action`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchEntries { generation: u64, query: EntryQuery },
    FetchCategories,
    FetchFeeds,
    ExtractContent { entry_id: i64, markup: String },
    MarkRead(i64),
    ToggleStarred(i64),
    ScheduleTick { seq: u64, after: Duration },
    OpenUrl(String),
    /// Replace the feed client
    Connect { url: String, token: String },
    StoreToken(String),
    SaveConfig(Config),
}
