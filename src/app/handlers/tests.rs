//! Reducer scenarios driven with synthetic actions.
//!
//! No network or terminal: background work shows up only as returned effects,
//! and its results are fed back in as actions.

use crate::app::handler::process_action;
use crate::app::state::SearchMode;
use crate::app::{Action, AppState, Effect, LoginField, Mode};
use crate::feed::{Category, Entry, EntryPage, FeedError};
use chrono::{TimeZone, Utc};
use std::time::Duration;

fn entry(id: i64, url: &str) -> Entry {
    Entry {
        id,
        title: format!("Entry {id}"),
        url: url.to_string(),
        author: String::new(),
        published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        starred: false,
        content: format!("<p>body of entry {id}</p>"),
        feed: None,
    }
}

fn article(id: i64) -> Entry {
    entry(id, &format!("https://blog.example.org/{id}"))
}

/// Connected state in Browsing with `n` of `total` entries loaded and 20 list rows
fn browsing_state(n: usize, total: usize) -> AppState {
    let mut state = AppState::default();
    state.terminal_size = (80, 23);
    let generation = state.start_remote();
    let page = EntryPage {
        total,
        entries: (1..=n as i64).map(article).collect(),
    };
    process_action(
        &mut state,
        Action::EntriesLoaded {
            generation,
            offset: 0,
            result: Ok(page),
        },
    );
    state
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Browsing state with entry 1 open in Reading
fn reading_state(text: &str) -> AppState {
    let mut state = browsing_state(3, 3);
    process_action(&mut state, Action::OpenSelected);
    process_action(
        &mut state,
        Action::ContentReady {
            entry_id: 1,
            words: words(text),
        },
    );
    state
}

fn tick_seq(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::ScheduleTick { seq, .. }] => *seq,
        other => panic!("expected one scheduled tick, got {other:?}"),
    }
}

// ==================== Opening entries ====================

#[test]
fn test_open_article_extracts_then_reads() {
    let mut state = browsing_state(3, 3);
    let effects = process_action(&mut state, Action::OpenSelected);
    assert_eq!(
        effects,
        vec![Effect::ExtractContent {
            entry_id: 1,
            markup: "<p>body of entry 1</p>".to_string(),
        }]
    );
    assert!(state.loading);
    assert_eq!(state.mode, Mode::Browsing);

    process_action(
        &mut state,
        Action::ContentReady {
            entry_id: 1,
            words: words("body of entry 1"),
        },
    );
    assert_eq!(state.mode, Mode::Reading);
    assert!(!state.loading);
    assert!(state.reader.paused);
    assert_eq!(state.reader.words.len(), 4);
    assert_eq!(state.selected_entry.as_ref().map(|e| e.id), Some(1));
}

#[test]
fn test_open_video_skips_extraction() {
    let mut state = browsing_state(0, 0);
    let generation = state.list.begin_reload();
    process_action(
        &mut state,
        Action::EntriesLoaded {
            generation,
            offset: 0,
            result: Ok(EntryPage {
                total: 1,
                entries: vec![entry(9, "https://www.youtube.com/watch?v=abc")],
            }),
        },
    );
    let effects = process_action(&mut state, Action::OpenSelected);
    assert!(effects.is_empty());
    assert_eq!(state.mode, Mode::VideoLink);
    assert_eq!(state.selected_entry.as_ref().map(|e| e.id), Some(9));
}

#[test]
fn test_stale_content_is_dropped() {
    let mut state = browsing_state(3, 3);
    process_action(&mut state, Action::OpenSelected);
    process_action(&mut state, Action::MoveDown);
    process_action(&mut state, Action::OpenSelected);

    process_action(
        &mut state,
        Action::ContentReady {
            entry_id: 1,
            words: words("late words"),
        },
    );
    assert_eq!(state.mode, Mode::Browsing);
    assert!(state.reader.is_empty());

    process_action(
        &mut state,
        Action::ContentReady {
            entry_id: 2,
            words: words("fresh words"),
        },
    );
    assert_eq!(state.mode, Mode::Reading);
    assert_eq!(state.reader.current_word(), Some("fresh"));
}

#[test]
fn test_empty_content_stays_browsing() {
    let mut state = browsing_state(3, 3);
    process_action(&mut state, Action::OpenSelected);
    process_action(
        &mut state,
        Action::ContentReady {
            entry_id: 1,
            words: Vec::new(),
        },
    );
    assert_eq!(state.mode, Mode::Browsing);
    assert!(state.last_error.is_some());
    assert!(!state.loading);
}

// ==================== Reading ====================

#[test]
fn test_resume_schedules_tick_for_current_word() {
    let mut state = reading_state("alpha beta");
    let effects = process_action(&mut state, Action::TogglePause);
    assert_eq!(
        effects,
        vec![Effect::ScheduleTick {
            seq: state.reader.tick_seq,
            after: Duration::from_millis(200),
        }]
    );
    assert!(!state.reader.paused);
}

#[test]
fn test_tick_advances_and_rearms() {
    let mut state = reading_state("one two three");
    let seq = tick_seq(&process_action(&mut state, Action::TogglePause));
    let next = tick_seq(&process_action(&mut state, Action::ReadingTick(seq)));
    assert_eq!(state.reader.index, 1);
    assert_eq!(next, seq);
}

#[test]
fn test_stale_tick_is_ignored() {
    let mut state = reading_state("one two three");
    let old = tick_seq(&process_action(&mut state, Action::TogglePause));
    process_action(&mut state, Action::TogglePause);
    let new = tick_seq(&process_action(&mut state, Action::TogglePause));
    assert_ne!(old, new);

    assert!(process_action(&mut state, Action::ReadingTick(old)).is_empty());
    assert_eq!(state.reader.index, 0);
}

#[test]
fn test_tick_while_paused_does_nothing() {
    let mut state = reading_state("one two");
    let seq = state.reader.tick_seq;
    assert!(process_action(&mut state, Action::ReadingTick(seq)).is_empty());
    assert_eq!(state.reader.index, 0);
}

#[test]
fn test_finishing_article_counts_and_marks_read() {
    let mut state = reading_state("one two");
    let seq = tick_seq(&process_action(&mut state, Action::TogglePause));
    process_action(&mut state, Action::ReadingTick(seq));
    let effects = process_action(&mut state, Action::ReadingTick(seq));

    assert_eq!(effects, vec![Effect::MarkRead(1)]);
    assert!(state.reader.paused);
    assert_eq!(state.session_articles, 1);
    assert_eq!(state.session_words, 2);

    // The chain is dead once paused
    assert!(process_action(&mut state, Action::ReadingTick(seq)).is_empty());
}

#[test]
fn test_file_session_finishes_without_remote() {
    let mut state = AppState::default();
    state.open_file("notes.txt".to_string(), words("just one"));
    let seq = tick_seq(&process_action(&mut state, Action::TogglePause));
    process_action(&mut state, Action::ReadingTick(seq));
    let effects = process_action(&mut state, Action::ReadingTick(seq));
    assert!(effects.is_empty());
    assert_eq!(state.session_articles, 1);
    assert_eq!(state.session_words, 2);
}

#[test]
fn test_reading_controls() {
    let mut state = reading_state(&"w ".repeat(30));
    process_action(&mut state, Action::Faster);
    assert_eq!(state.reader.wpm, 350);
    process_action(&mut state, Action::Slower);
    process_action(&mut state, Action::Slower);
    assert_eq!(state.reader.wpm, 250);

    process_action(&mut state, Action::SeekForward);
    assert_eq!(state.reader.index, 10);
    process_action(&mut state, Action::JumpToEnd);
    assert_eq!(state.reader.index, 29);
    process_action(&mut state, Action::SeekBack);
    assert_eq!(state.reader.index, 19);
    process_action(&mut state, Action::JumpToStart);
    assert_eq!(state.reader.index, 0);

    process_action(&mut state, Action::ToggleLargeGlyphs);
    process_action(&mut state, Action::ToggleRamp);
    process_action(&mut state, Action::ToggleZen);
    assert!(state.reader.large_glyphs);
    assert!(state.reader.ramp);
    assert!(state.reader.zen);

    // List cursor is untouched by reading jumps
    assert_eq!(state.list.cursor, 0);
}

// ==================== Help and Esc ====================

#[test]
fn test_help_pauses_and_returns_to_prior_mode() {
    let mut state = reading_state("one two three");
    process_action(&mut state, Action::TogglePause);
    process_action(&mut state, Action::EnterHelp);
    assert_eq!(state.mode, Mode::Help);
    assert!(state.reader.paused);

    process_action(&mut state, Action::ExitMode);
    assert_eq!(state.mode, Mode::Reading);

    process_action(&mut state, Action::EnterHelp);
    process_action(&mut state, Action::EnterHelp);
    assert_eq!(state.mode, Mode::Reading);
}

#[test]
fn test_esc_from_reading_returns_to_list() {
    let mut state = reading_state("one two");
    process_action(&mut state, Action::TogglePause);
    process_action(&mut state, Action::ExitMode);
    assert_eq!(state.mode, Mode::Browsing);
    assert!(state.reader.paused);
    assert!(state.selected_entry.is_none());
    assert!(!state.should_quit);
}

#[test]
fn test_esc_quits_file_session_and_browsing() {
    let mut state = AppState::default();
    state.open_file("notes.txt".to_string(), words("a b"));
    process_action(&mut state, Action::ExitMode);
    assert!(state.should_quit);

    let mut state = browsing_state(1, 1);
    process_action(&mut state, Action::ExitMode);
    assert!(state.should_quit);
}

// ==================== Browsing ====================

#[test]
fn test_infinite_scroll_requests_one_page() {
    let mut state = browsing_state(50, 120);
    let mut fetches = Vec::new();
    for _ in 0..45 {
        fetches.extend(process_action(&mut state, Action::MoveDown));
    }
    assert_eq!(fetches.len(), 1);
    match &fetches[0] {
        Effect::FetchEntries { generation, query } => {
            assert_eq!(*generation, state.list.generation);
            assert_eq!(query.offset, 50);
            assert_eq!(query.search, None);
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert!(state.list.fetch_in_flight);

    let generation = state.list.generation;
    process_action(
        &mut state,
        Action::EntriesLoaded {
            generation,
            offset: 50,
            result: Ok(EntryPage {
                total: 120,
                entries: (51..=100).map(article).collect(),
            }),
        },
    );
    assert!(!state.list.fetch_in_flight);
    assert_eq!(state.list.len(), 100);
    assert_eq!(state.list.cursor, 45);
}

#[test]
fn test_failed_page_clears_guard() {
    let mut state = browsing_state(50, 120);
    let mut effects = Vec::new();
    for _ in 0..45 {
        effects.extend(process_action(&mut state, Action::MoveDown));
    }
    assert_eq!(effects.len(), 1);

    let generation = state.list.generation;
    process_action(
        &mut state,
        Action::EntriesLoaded {
            generation,
            offset: 50,
            result: Err(FeedError::Transport("connection reset".to_string())),
        },
    );
    assert!(!state.list.fetch_in_flight);
    assert!(state.last_error.as_deref().unwrap_or("").contains("connection reset"));

    // Moving again retries
    assert_eq!(process_action(&mut state, Action::MoveDown).len(), 1);
}

#[test]
fn test_video_filter_reloads_and_drops_old_pages() {
    let mut state = browsing_state(50, 120);
    let old_generation = state.list.generation;

    let effects = process_action(&mut state, Action::ToggleVideoFilter);
    let Effect::FetchEntries { generation, query } = &effects[0] else {
        panic!("expected a fetch, got {effects:?}");
    };
    assert_eq!(query.offset, 0);
    assert_eq!(query.search.as_deref(), Some("youtube.com/watch?v=|youtu.be/"));
    assert!(*generation > old_generation);
    assert!(state.loading);

    process_action(
        &mut state,
        Action::EntriesLoaded {
            generation: old_generation,
            offset: 0,
            result: Ok(EntryPage {
                total: 1,
                entries: vec![article(999)],
            }),
        },
    );
    assert_eq!(state.list.len(), 50);
    assert!(state.list.fetch_in_flight);
}

#[test]
fn test_mark_read_updates_on_result_only() {
    let mut state = browsing_state(3, 3);
    process_action(&mut state, Action::JumpToEnd);
    assert_eq!(state.list.cursor, 2);

    let effects = process_action(&mut state, Action::MarkSelectedRead);
    assert_eq!(effects, vec![Effect::MarkRead(3)]);
    assert_eq!(state.list.len(), 3);

    process_action(&mut state, Action::MarkedRead { id: 3, result: Ok(()) });
    let ids: Vec<i64> = state.list.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(state.list.cursor, 1);
    assert_eq!(state.list.total, 2);
}

#[test]
fn test_mark_read_failure_keeps_entry() {
    let mut state = browsing_state(3, 3);
    process_action(
        &mut state,
        Action::MarkedRead {
            id: 1,
            result: Err(FeedError::Status {
                code: 500,
                message: "boom".to_string(),
            }),
        },
    );
    assert_eq!(state.list.len(), 3);
    assert!(state.last_error.is_some());
}

#[test]
fn test_star_toggle_flips_list_and_open_entry() {
    let mut state = reading_state("a b");
    let effects = process_action(&mut state, Action::ToggleStar);
    assert_eq!(effects, vec![Effect::ToggleStarred(1)]);

    process_action(&mut state, Action::StarToggled { id: 1, result: Ok(()) });
    assert!(state.list.entries[0].starred);
    assert!(state.selected_entry.as_ref().is_some_and(|e| e.starred));
}

#[test]
fn test_open_video_in_browser_marks_read() {
    let mut state = browsing_state(0, 0);
    let generation = state.list.begin_reload();
    process_action(
        &mut state,
        Action::EntriesLoaded {
            generation,
            offset: 0,
            result: Ok(EntryPage {
                total: 1,
                entries: vec![entry(4, "https://youtu.be/xyz")],
            }),
        },
    );
    let effects = process_action(&mut state, Action::OpenInBrowser);
    assert_eq!(
        effects,
        vec![
            Effect::OpenUrl("https://youtu.be/xyz".to_string()),
            Effect::MarkRead(4),
        ]
    );

    let mut state = browsing_state(1, 1);
    let effects = process_action(&mut state, Action::OpenInBrowser);
    assert_eq!(
        effects,
        vec![Effect::OpenUrl("https://blog.example.org/1".to_string())]
    );
}

// ==================== Searching ====================

#[test]
fn test_category_search_flow() {
    let mut state = browsing_state(5, 5);
    process_action(&mut state, Action::EnterSearch);
    assert_eq!(state.mode, Mode::Searching);

    assert_eq!(
        process_action(&mut state, Action::NextField),
        vec![Effect::FetchFeeds]
    );
    assert!(process_action(&mut state, Action::NextField).is_empty());
    assert_eq!(
        process_action(&mut state, Action::NextField),
        vec![Effect::FetchCategories]
    );
    assert_eq!(state.search.mode, SearchMode::Category);

    process_action(
        &mut state,
        Action::CategoriesLoaded(Ok(vec![
            Category { id: 1, title: "Technology".to_string() },
            Category { id: 2, title: "Sports".to_string() },
        ])),
    );
    assert_eq!(state.search.candidates.len(), 2);

    for c in "tech".chars() {
        process_action(&mut state, Action::InputChar(c));
    }
    assert_eq!(state.search.candidates, vec!["Technology"]);
    assert_eq!(state.search.candidate_ids, vec![1]);

    let effects = process_action(&mut state, Action::Submit);
    assert_eq!(state.mode, Mode::Browsing);
    let [Effect::FetchEntries { query, .. }] = effects.as_slice() else {
        panic!("expected a fetch, got {effects:?}");
    };
    assert_eq!(query.category_id, Some(1));
    assert_eq!(query.feed_id, None);
    assert_eq!(query.search, None);
    assert_eq!(query.offset, 0);
}

#[test]
fn test_submit_without_selection_stays_in_search() {
    let mut state = browsing_state(5, 5);
    process_action(&mut state, Action::EnterSearch);
    process_action(&mut state, Action::NextField); // feeds, not loaded yet
    let effects = process_action(&mut state, Action::Submit);
    assert!(effects.is_empty());
    assert_eq!(state.mode, Mode::Searching);
    assert!(state.search.rejected);
    assert!(state.last_error.is_none());
}

#[test]
fn test_text_search_clears_id_filters() {
    let mut state = browsing_state(5, 5);
    state.filter.feed_id = Some(8);
    process_action(&mut state, Action::EnterSearch);
    for c in "rust".chars() {
        process_action(&mut state, Action::InputChar(c));
    }
    let effects = process_action(&mut state, Action::Submit);
    let [Effect::FetchEntries { query, .. }] = effects.as_slice() else {
        panic!("expected a fetch, got {effects:?}");
    };
    assert_eq!(query.search.as_deref(), Some("rust"));
    assert_eq!(query.feed_id, None);
    assert_eq!(query.category_id, None);
}

#[test]
fn test_search_owns_keys() {
    let mut state = browsing_state(5, 5);
    process_action(&mut state, Action::EnterSearch);
    let theme = state.theme_index;
    assert!(process_action(&mut state, Action::CycleTheme).is_empty());
    assert!(process_action(&mut state, Action::ToggleStar).is_empty());
    assert_eq!(state.theme_index, theme);

    process_action(&mut state, Action::ExitMode);
    assert_eq!(state.mode, Mode::Browsing);
    assert!(!state.should_quit);
}

#[test]
fn test_lookup_failure_clears_guard() {
    let mut state = browsing_state(5, 5);
    process_action(&mut state, Action::EnterSearch);
    process_action(&mut state, Action::NextField);
    assert!(state.search.feeds_in_flight);
    process_action(
        &mut state,
        Action::FeedsLoaded(Err(FeedError::Decode("bad json".to_string()))),
    );
    assert!(!state.search.feeds_in_flight);
    assert!(state.last_error.is_some());
}

// ==================== Login ====================

fn login_state() -> AppState {
    let mut state = AppState::default();
    state.start_login();
    state
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        process_action(state, Action::InputChar(c));
    }
}

#[test]
fn test_login_requires_both_fields() {
    let mut state = login_state();
    type_text(&mut state, "https://rss.example.org");
    process_action(&mut state, Action::Submit);
    assert_eq!(state.login.focus, LoginField::Token);

    let effects = process_action(&mut state, Action::Submit);
    assert_eq!(state.mode, Mode::Login);
    assert_eq!(state.login.focus, LoginField::Url);
    assert!(state.last_error.is_some());
    assert!(matches!(effects.as_slice(), [Effect::SaveConfig(c)] if c.miniflux_url == "https://rss.example.org"));
}

#[test]
fn test_login_connects_and_fetches() {
    let mut state = login_state();
    type_text(&mut state, "https://rss.example.org");
    process_action(&mut state, Action::NextField);
    type_text(&mut state, "secret");

    let effects = process_action(&mut state, Action::Submit);
    assert_eq!(state.mode, Mode::Browsing);
    assert!(state.remote_connected);
    assert!(state.loading);
    assert!(effects.contains(&Effect::StoreToken("secret".to_string())));
    assert!(effects.contains(&Effect::Connect {
        url: "https://rss.example.org".to_string(),
        token: "secret".to_string(),
    }));
    assert!(matches!(
        effects.last(),
        Some(Effect::FetchEntries { query, .. }) if query.offset == 0
    ));
}

#[test]
fn test_login_editing_and_escape() {
    let mut state = login_state();
    type_text(&mut state, "ab");
    process_action(&mut state, Action::InputBackspace);
    assert_eq!(state.login.url, "a");
    process_action(&mut state, Action::CycleTheme);
    assert_eq!(state.theme_index, 0);
    process_action(&mut state, Action::ExitMode);
    assert!(state.should_quit);
}

#[test]
fn test_connect_failure_returns_to_login() {
    let mut state = browsing_state(0, 0);
    process_action(
        &mut state,
        Action::ConnectFailed(FeedError::Transport("bad url".to_string())),
    );
    assert_eq!(state.mode, Mode::Login);
    assert!(!state.remote_connected);
    assert!(state.last_error.is_some());
}

#[test]
fn test_connect_failure_keeps_its_error_over_queued_fetch() {
    let mut state = login_state();
    type_text(&mut state, "https://rss.example.com");
    process_action(&mut state, Action::Submit);
    type_text(&mut state, "secret");
    let effects = process_action(&mut state, Action::Submit);
    let generation = effects
        .iter()
        .find_map(|e| match e {
            Effect::FetchEntries { generation, .. } => Some(*generation),
            _ => None,
        })
        .unwrap();

    process_action(
        &mut state,
        Action::ConnectFailed(FeedError::Transport("builder error".to_string())),
    );
    process_action(
        &mut state,
        Action::EntriesLoaded {
            generation,
            offset: 0,
            result: Err(FeedError::NotConnected),
        },
    );
    assert_eq!(state.mode, Mode::Login);
    assert_eq!(state.last_error.as_deref(), Some("request failed: builder error"));
    assert!(!state.list.fetch_in_flight);
}

// ==================== Terminal ====================

#[test]
fn test_resize_keeps_cursor_visible() {
    let mut state = browsing_state(40, 40);
    for _ in 0..30 {
        process_action(&mut state, Action::MoveDown);
    }
    process_action(&mut state, Action::Resize(80, 10));
    let rows = state.list_rows();
    let window = state.list.window(rows);
    assert!(window.start <= state.list.cursor && state.list.cursor < window.end);
}
