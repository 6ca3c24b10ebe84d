use crate::feed::{Category, EntryPage, Feed, FeedError};

#[derive(Debug, Clone)]
pub enum Action {
    // Terminal
    Tick,
    Resize(u16, u16),
    Quit,

    // Global
    EnterHelp,
    ExitMode,
    CycleTheme,
    OpenInBrowser,
    ToggleStar,

    // Reading
    TogglePause,
    Faster,
    Slower,
    SeekForward,
    SeekBack,
    ToggleLargeGlyphs,
    ToggleRamp,
    ToggleZen,
    ReadingTick(u64), // Carries the tick chain it was scheduled for

    // Lists (browsing entries, search candidates)
    MoveUp,
    MoveDown,
    JumpToStart,
    JumpToEnd,

    // Browsing
    EnterSearch,
    OpenSelected,
    ToggleVideoFilter,
    MarkSelectedRead,

    // Text input (search box, login form)
    InputChar(char),
    InputBackspace,
    NextField,
    Submit,

    // Background results
    EntriesLoaded {
        generation: u64,
        offset: usize,
        result: Result<EntryPage, FeedError>,
    },
    CategoriesLoaded(Result<Vec<Category>, FeedError>),
    FeedsLoaded(Result<Vec<Feed>, FeedError>),
    ContentReady {
        entry_id: i64,
        words: Vec<String>,
    },
    MarkedRead {
        id: i64,
        result: Result<(), FeedError>,
    },
    StarToggled {
        id: i64,
        result: Result<(), FeedError>,
    },
    ConnectFailed(FeedError),
    BackgroundError(String),
}
