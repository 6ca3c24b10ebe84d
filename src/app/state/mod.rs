mod list;
mod reader;
mod search;
mod types;

pub use list::EntryList;
pub use reader::ReaderState;
pub use search::{ActiveFilter, Lookup, SearchState, Submission};
pub use types::*;

use crate::feed::Entry;
use crate::persistence::Config;
use crate::tui::theme;

/// Rows taken by the list header and status line
const LIST_CHROME_ROWS: u16 = 3;

/// Text typed on the login screen
#[derive(Debug, Default)]
pub struct LoginForm {
    pub url: String,
    pub token: String,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Url => &mut self.url,
            LoginField::Token => &mut self.token,
        }
    }
}

/// Counters and settings handed back to the caller once the loop ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub articles: u64,
    pub words: u64,
    pub config: Config,
}

pub struct AppState {
    pub mode: Mode,
    /// Mode to go back to when help closes
    pub help_return: Mode,

    pub reader: ReaderState,
    pub list: EntryList,
    pub search: SearchState,
    pub filter: ActiveFilter,
    pub login: LoginForm,

    /// Entry open in Reading or VideoLink
    pub selected_entry: Option<Entry>,
    /// Entry whose content is being extracted
    pub opening: Option<Entry>,
    /// Title shown in the HUD for a file session
    pub source_title: Option<String>,
    pub remote_connected: bool,
    pub loading: bool,
    pub last_error: Option<String>,

    pub session_articles: u64,
    pub session_words: u64,
    pub theme_index: usize,

    pub terminal_size: (u16, u16),
    pub tick_count: u64,
    pub should_quit: bool,

    /// Persisted record as loaded at startup; settings are folded back by `snapshot_config`
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let theme_index = if config.theme_index < theme::THEME_COUNT {
            config.theme_index
        } else {
            0
        };
        Self {
            mode: Mode::Browsing,
            help_return: Mode::Browsing,
            reader: ReaderState::new(config.wpm, config.ramp_speed, config.zen_mode),
            list: EntryList::default(),
            search: SearchState::default(),
            filter: ActiveFilter::default(),
            login: LoginForm {
                url: config.miniflux_url.clone(),
                ..Default::default()
            },
            selected_entry: None,
            opening: None,
            source_title: None,
            remote_connected: false,
            loading: false,
            last_error: None,
            session_articles: 0,
            session_words: 0,
            theme_index,
            terminal_size: (80, 24),
            tick_count: 0,
            should_quit: false,
            config,
        }
    }

    /// Start straight in Reading with words from a local file.
    /// Reading needs at least one word, so an empty file lands on Login instead.
    pub fn open_file(&mut self, title: String, words: Vec<String>) {
        if words.is_empty() {
            self.set_error(format!("{title} has no readable text"));
            self.start_login();
            return;
        }
        self.source_title = Some(title);
        self.reader.load(words);
        self.mode = Mode::Reading;
    }

    /// Start in Browsing with the first page requested. Returns the fetch generation.
    pub fn start_remote(&mut self) -> u64 {
        self.remote_connected = true;
        self.mode = Mode::Browsing;
        self.loading = true;
        self.list.begin_reload()
    }

    pub fn start_login(&mut self) {
        self.mode = Mode::Login;
        self.login.focus = LoginField::Url;
    }

    /// Rows available to the entry list
    pub fn list_rows(&self) -> usize {
        self.terminal_size.1.saturating_sub(LIST_CHROME_ROWS) as usize
    }

    /// Entry that browser and star commands act on: the open one, else the highlighted one.
    pub fn target_entry(&self) -> Option<&Entry> {
        self.selected_entry.as_ref().or_else(|| match self.mode {
            Mode::Browsing => self.list.selected(),
            _ => None,
        })
    }

    /// Title for the reading HUD
    pub fn reading_title(&self) -> Option<&str> {
        self.selected_entry
            .as_ref()
            .map(|e| e.title.as_str())
            .or(self.source_title.as_deref())
    }

    pub fn cycle_theme(&mut self) {
        self.theme_index = (self.theme_index + 1) % theme::THEME_COUNT;
    }

    /// Persisted record with the current settings applied; lifetime counters untouched.
    pub fn snapshot_config(&self) -> Config {
        Config {
            wpm: self.reader.wpm,
            theme_index: self.theme_index,
            ramp_speed: self.reader.ramp,
            zen_mode: self.reader.zen,
            ..self.config.clone()
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            articles: self.session_articles,
            words: self.session_words,
            config: self.snapshot_config(),
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
