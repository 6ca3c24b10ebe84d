use thiserror::Error;

/// Failure talking to the feed service.
///
/// Cloneable so it can travel inside an [`Action`](crate::app::Action).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not connected to a Miniflux server")]
    NotConnected,
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FeedError::Decode(err.to_string())
        } else {
            FeedError::Transport(err.to_string())
        }
    }
}
