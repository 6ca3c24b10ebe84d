use crate::app::{Action, AppState, Effect, SessionSummary};
use crate::content;
use crate::feed::{FeedError, MinifluxClient};
use crate::persistence::{self, Config, CredentialStore};
use crate::tui;
use crate::tui::event::EventHandler;
use anyhow::Result;
use std::future::Future;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::handler::process_action;

/// Where the session starts
pub enum Source {
    /// Words read from a local file, no remote service
    File { title: String, words: Vec<String> },
    Remote(MinifluxClient),
    /// No usable credentials yet
    Login,
}

pub async fn run_tui(source: Source, config: Config) -> Result<SessionSummary> {
    let mut state = AppState::new(config);
    let mut initial = Vec::new();
    let mut client = None;

    match source {
        Source::File { title, words } => state.open_file(title, words),
        Source::Remote(remote) => {
            info!(url = remote.base_url(), "starting with saved credentials");
            client = Some(remote);
            let generation = state.start_remote();
            initial.push(Effect::FetchEntries {
                generation,
                query: state.filter.query(0),
            });
        }
        Source::Login => state.start_login(),
    }

    // Initialize terminal
    let mut terminal = tui::init()?;
    let size = terminal.size()?;
    state.terminal_size = (size.width, size.height);

    let mut events = EventHandler::new();
    let mut executor = Executor::new(client, events.action_sender());
    for effect in initial {
        executor.run(effect);
    }

    // Main loop
    let result = run_main_loop(&mut terminal, &mut state, &mut events, &mut executor).await;

    // Restore terminal
    tui::restore()?;

    result.map(|()| state.summary())
}

async fn run_main_loop(
    terminal: &mut tui::Terminal,
    state: &mut AppState,
    events: &mut EventHandler,
    executor: &mut Executor,
) -> Result<()> {
    loop {
        terminal.draw(|frame| tui::ui::draw(frame, state))?;

        let action = events.next(state.mode).await?;
        for effect in process_action(state, action) {
            executor.run(effect);
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

/// Runs reducer effects off the event loop and reports back on the action channel.
struct Executor {
    client: Option<MinifluxClient>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Executor {
    fn new(client: Option<MinifluxClient>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { client, action_tx }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::FetchEntries { generation, query } => {
                let offset = query.offset;
                let client = self.client.clone();
                self.spawn(async move {
                    let result = with_client(client, |c| async move { c.entries(&query).await }).await;
                    Action::EntriesLoaded {
                        generation,
                        offset,
                        result,
                    }
                });
            }
            Effect::FetchCategories => {
                let client = self.client.clone();
                self.spawn(async move {
                    Action::CategoriesLoaded(with_client(client, |c| async move { c.categories().await }).await)
                });
            }
            Effect::FetchFeeds => {
                let client = self.client.clone();
                self.spawn(async move {
                    Action::FeedsLoaded(with_client(client, |c| async move { c.feeds().await }).await)
                });
            }
            Effect::MarkRead(id) => {
                let client = self.client.clone();
                self.spawn(async move {
                    let result = with_client(client, |c| async move { c.mark_read(id).await }).await;
                    Action::MarkedRead { id, result }
                });
            }
            Effect::ToggleStarred(id) => {
                let client = self.client.clone();
                self.spawn(async move {
                    let result = with_client(client, |c| async move { c.toggle_starred(id).await }).await;
                    Action::StarToggled { id, result }
                });
            }
            Effect::ScheduleTick { seq, after } => {
                self.spawn(async move {
                    tokio::time::sleep(after).await;
                    Action::ReadingTick(seq)
                });
            }
            Effect::ExtractContent { entry_id, markup } => {
                let tx = self.action_tx.clone();
                tokio::task::spawn_blocking(move || {
                    let words = content::words(&content::to_plain_text(&markup));
                    debug!(entry_id, words = words.len(), "content extracted");
                    let _ = tx.send(Action::ContentReady { entry_id, words });
                });
            }
            Effect::OpenUrl(url) => {
                let tx = self.action_tx.clone();
                tokio::task::spawn_blocking(move || match webbrowser::open(&url) {
                    Ok(()) => debug!(url = %url, "opened in browser"),
                    Err(e) => {
                        warn!(error = %e, url = %url, "could not launch browser");
                        let _ = tx.send(Action::BackgroundError(format!("failed to open browser: {e}")));
                    }
                });
            }
            Effect::Connect { url, token } => match MinifluxClient::new(&url, &token) {
                Ok(client) => {
                    info!(url = client.base_url(), "feed client ready");
                    self.client = Some(client);
                }
                Err(e) => {
                    self.client = None;
                    let _ = self.action_tx.send(Action::ConnectFailed(e));
                }
            },
            Effect::StoreToken(token) => {
                let tx = self.action_tx.clone();
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = CredentialStore::default().set(&token) {
                        warn!(error = %e, "could not store API token");
                        let _ = tx.send(Action::BackgroundError(format!("failed to save token: {e}")));
                    }
                });
            }
            Effect::SaveConfig(config) => {
                let tx = self.action_tx.clone();
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = persistence::save_config(&config) {
                        warn!(error = %e, "could not save config");
                        let _ = tx.send(Action::BackgroundError(format!("failed to save config: {e}")));
                    }
                });
            }
        }
    }

    fn spawn<F>(&self, work: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(work.await);
        });
    }
}

async fn with_client<T, F, Fut>(client: Option<MinifluxClient>, call: F) -> Result<T, FeedError>
where
    F: FnOnce(MinifluxClient) -> Fut,
    Fut: Future<Output = Result<T, FeedError>>,
{
    match client {
        Some(client) => call(client).await,
        None => Err(FeedError::NotConnected),
    }
}
