mod app;
mod content;
mod feed;
mod logging;
mod pacing;
mod persistence;
mod tui;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use app::{run_tui, SessionSummary, Source};
use feed::MinifluxClient;
use persistence::{Config, CredentialStore};

#[derive(Parser)]
#[command(name = "speedfeed")]
#[command(version = "0.1.0")]
#[command(about = "Speed-read unread Miniflux entries one word at a time")]
struct Cli {
    /// Read a local text file instead of the Miniflux feed
    file: Option<PathBuf>,

    /// Miniflux server URL
    #[arg(long, env = "MINIFLUX_URL")]
    url: Option<String>,

    /// Miniflux API token
    #[arg(long, env = "MINIFLUX_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Starting words per minute for this run
    #[arg(long)]
    wpm: Option<u32>,

    /// Do not write a log file
    #[arg(long)]
    no_log: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = if cli.no_log {
        None
    } else {
        match logging::init() {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: logging disabled: {e}");
                None
            }
        }
    };

    let mut config = persistence::load_config();
    if let Some(wpm) = cli.wpm.filter(|w| *w > 0) {
        config.wpm = wpm;
    }

    // An unreadable file is fatal before the terminal is touched
    let file = match &cli.file {
        Some(path) => file_source(path)?,
        None => None,
    };
    let source = match file {
        Some(source) => source,
        None => remote_source(&cli, &config),
    };

    let summary = run_tui(source, config).await?;
    finish(summary);
    Ok(())
}

/// Reading session for a local file, or `None` when it holds no words.
fn file_source(path: &Path) -> Result<Option<Source>> {
    let words = content::load_file(path)?;
    if words.is_empty() {
        warn!(path = %path.display(), "file has no words, using the feed instead");
        return Ok(None);
    }
    Ok(Some(Source::File {
        title: file_title(path),
        words,
    }))
}

fn file_title(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Pick the starting screen from CLI/env credentials, then the keyring.
fn remote_source(cli: &Cli, config: &Config) -> Source {
    let url = cli
        .url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| config.miniflux_url.clone());
    if url.trim().is_empty() {
        return Source::Login;
    }

    let token = match cli.token.clone().filter(|t| !t.trim().is_empty()) {
        Some(token) => token,
        None => match CredentialStore::default().get() {
            Ok(Some(token)) => token,
            Ok(None) => return Source::Login,
            Err(e) => {
                warn!(error = %e, "keyring lookup failed");
                return Source::Login;
            }
        },
    };

    match MinifluxClient::new(url.trim(), token.trim()) {
        Ok(client) => Source::Remote(client),
        Err(e) => {
            warn!(error = %e, "could not create feed client");
            Source::Login
        }
    }
}

/// Fold the session into the lifetime totals, save, and report.
fn finish(summary: SessionSummary) {
    let mut config = summary.config;
    config.record_session(summary.articles, summary.words);
    if let Err(e) = persistence::save_config(&config) {
        warn!(error = %e, "could not save config");
        eprintln!("Warning: Could not save config: {e}");
    }
    info!(
        articles = summary.articles,
        words = summary.words,
        "session finished"
    );

    println!("Session Summary");
    println!("  Articles read: {}", summary.articles);
    println!("  Words read:    {}", summary.words);
    println!("Lifetime");
    println!("  Articles read: {}", config.total_articles);
    println!("  Words read:    {}", config.total_words);
}
