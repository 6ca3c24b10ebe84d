use super::error::FeedError;
use super::models::{Category, EntryPage, EntryQuery, Feed};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Deserialize)]
struct ErrorBody {
    error_message: String,
}

/// Thin async client for the Miniflux v1 REST API
#[derive(Clone)]
pub struct MinifluxClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl MinifluxClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn entries(&self, query: &EntryQuery) -> Result<EntryPage, FeedError> {
        debug!(offset = query.offset, search = ?query.search, category = ?query.category_id, feed = ?query.feed_id, "listing entries");
        let resp = self
            .http
            .get(self.endpoint("/entries"))
            .header("X-Auth-Token", &self.token)
            .query(&query.params())
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn categories(&self) -> Result<Vec<Category>, FeedError> {
        let resp = self
            .http
            .get(self.endpoint("/categories"))
            .header("X-Auth-Token", &self.token)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn feeds(&self) -> Result<Vec<Feed>, FeedError> {
        let resp = self
            .http
            .get(self.endpoint("/feeds"))
            .header("X-Auth-Token", &self.token)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn mark_read(&self, entry_id: i64) -> Result<(), FeedError> {
        let resp = self
            .http
            .put(self.endpoint("/entries"))
            .header("X-Auth-Token", &self.token)
            .json(&json!({ "entry_ids": [entry_id], "status": "read" }))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    pub async fn toggle_starred(&self, entry_id: i64) -> Result<(), FeedError> {
        let resp = self
            .http
            .put(self.endpoint(&format!("/entries/{entry_id}/bookmark")))
            .header("X-Auth-Token", &self.token)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1{}", self.base_url, path)
    }
}

/// Turn non-2xx responses into `FeedError::Status`, preferring the server's message.
async fn check(resp: Response) -> Result<Response, FeedError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

fn status_error(status: StatusCode, body: &str) -> FeedError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error_message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
    FeedError::Status {
        code: status.as_u16(),
        message,
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    trimmed.strip_suffix("/v1").unwrap_or(trimmed).to_string()
}
