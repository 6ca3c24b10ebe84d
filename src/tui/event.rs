use crate::app::{Action, Mode};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Internal event type for terminal events
enum TerminalEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Serializes terminal input and background results into one stream of actions.
pub struct EventHandler {
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    terminal_rx: mpsc::UnboundedReceiver<TerminalEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (terminal_tx, terminal_rx) = mpsc::unbounded_channel();

        // Spawn dedicated thread for terminal events
        std::thread::spawn(move || {
            let poll_timeout = Duration::from_millis(50);
            loop {
                let event = if event::poll(poll_timeout).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => TerminalEvent::Key(key),
                        Ok(Event::Resize(w, h)) => TerminalEvent::Resize(w, h),
                        _ => TerminalEvent::Tick,
                    }
                } else {
                    TerminalEvent::Tick
                };

                if terminal_tx.send(event).is_err() {
                    break; // Channel closed, exit thread
                }
            }
        });

        Self {
            action_tx,
            action_rx,
            terminal_rx,
        }
    }

    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub async fn next(&mut self, mode: Mode) -> Result<Action> {
        // Keyboard input first so it is never starved by background results
        if let Ok(event) = self.terminal_rx.try_recv() {
            return Ok(Self::translate(event, mode));
        }

        tokio::select! {
            biased;

            Some(event) = self.terminal_rx.recv() => Ok(Self::translate(event, mode)),
            Some(action) = self.action_rx.recv() => Ok(action),
            else => Ok(Action::Quit),
        }
    }

    fn translate(event: TerminalEvent, mode: Mode) -> Action {
        match event {
            TerminalEvent::Key(key) => map_key(key, mode),
            TerminalEvent::Resize(w, h) => Action::Resize(w, h),
            TerminalEvent::Tick => Action::Tick,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a key press for the screen that currently owns the keyboard.
pub fn map_key(key: KeyEvent, mode: Mode) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Tick;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match mode {
        Mode::Searching => search_key(key),
        Mode::Login => login_key(key),
        Mode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Action::ExitMode,
            _ => Action::Tick,
        },
        Mode::Reading => global_key(key).unwrap_or_else(|| reading_key(key)),
        Mode::Browsing => global_key(key).unwrap_or_else(|| browsing_key(key)),
        Mode::VideoLink => global_key(key).unwrap_or(Action::Tick),
    }
}

fn global_key(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::EnterHelp,
        KeyCode::Esc => Action::ExitMode,
        KeyCode::Char('c') => Action::CycleTheme,
        KeyCode::Char('o') => Action::OpenInBrowser,
        KeyCode::Char('f') => Action::ToggleStar,
        _ => return None,
    };
    Some(action)
}

fn reading_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char(' ') => Action::TogglePause,
        KeyCode::Char('k') | KeyCode::Up => Action::Faster,
        KeyCode::Char('j') | KeyCode::Down => Action::Slower,
        KeyCode::Right => Action::SeekForward,
        KeyCode::Left => Action::SeekBack,
        KeyCode::Char('g') => Action::JumpToStart,
        KeyCode::Char('G') => Action::JumpToEnd,
        KeyCode::Char('s') => Action::ToggleLargeGlyphs,
        KeyCode::Char('r') => Action::ToggleRamp,
        KeyCode::Char('z') => Action::ToggleZen,
        _ => Action::Tick,
    }
}

fn browsing_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('/') => Action::EnterSearch,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('g') => Action::JumpToStart,
        KeyCode::Char('G') => Action::JumpToEnd,
        KeyCode::Enter => Action::OpenSelected,
        KeyCode::Char('y') => Action::ToggleVideoFilter,
        KeyCode::Char('m') => Action::MarkSelectedRead,
        _ => Action::Tick,
    }
}

fn search_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::ExitMode,
        KeyCode::Enter => Action::Submit,
        KeyCode::Tab => Action::NextField,
        KeyCode::Up => Action::MoveUp,
        KeyCode::Down => Action::MoveDown,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::Tick,
    }
}

fn login_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::ExitMode,
        KeyCode::Enter => Action::Submit,
        KeyCode::Tab | KeyCode::BackTab => Action::NextField,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::Tick,
    }
}
