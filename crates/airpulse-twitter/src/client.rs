//! HTTP client for the Twitter/X API v2.
//!
//! Wraps `reqwest` with app-only bearer authentication and typed response
//! deserialization. Only the recent-search endpoint is used: mentions come
//! from the configured query and replies from a `conversation_id:` query.
//! Exactly one page is requested per call.

use std::time::Duration;

use airpulse_core::{clamp_page_size, Post, DEFAULT_TWITTER_BASE_URL};
use reqwest::{Client, StatusCode, Url};

use crate::error::TwitterError;
use crate::source::MentionSource;
use crate::types::{ApiProblem, SearchResponse};

const SEARCH_RECENT_PATH: &str = "2/tweets/search/recent";
const TWEET_FIELDS: &str = "author_id,created_at,conversation_id";

/// Build the search query that selects replies in a conversation while
/// leaving out posts by the mention's own author.
#[must_use]
pub fn reply_query(conversation_id: &str, exclude_author_id: &str) -> String {
    format!("conversation_id:{conversation_id} -from:{exclude_author_id}")
}

/// Client for the Twitter API v2.
///
/// Use [`TwitterClient::new`] for production or [`TwitterClient::with_base_url`]
/// to point at a mock server in tests.
pub struct TwitterClient {
    client: Client,
    bearer_token: String,
    base_url: Url,
}

impl TwitterClient {
    /// Creates a new client pointed at the production Twitter API.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(bearer_token: &str, timeout_secs: u64) -> Result<Self, TwitterError> {
        Self::with_base_url(bearer_token, timeout_secs, DEFAULT_TWITTER_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TwitterError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        bearer_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, TwitterError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("airpulse/0.1 (mention-sentiment)")
            .build()?;

        // Exactly one trailing slash so `join` appends to the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TwitterError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            bearer_token: bearer_token.to_owned(),
            base_url,
        })
    }

    /// Builds the recent-search URL with percent-encoded query parameters.
    fn build_search_url(&self, query: &str, max_results: u32) -> Result<Url, TwitterError> {
        let mut url =
            self.base_url
                .join(SEARCH_RECENT_PATH)
                .map_err(|e| TwitterError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                    reason: e.to_string(),
                })?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("max_results", &clamp_page_size(max_results).to_string())
            .append_pair("tweet.fields", TWEET_FIELDS);
        Ok(url)
    }

    /// Sends a recent-search request and returns the page of posts.
    ///
    /// # Errors
    ///
    /// - [`TwitterError::Http`] on network failure.
    /// - [`TwitterError::Api`] on a non-2xx status, or a 2xx payload that
    ///   carries only `errors`.
    /// - [`TwitterError::Deserialize`] if the body does not match the expected
    ///   shape.
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<Post>, TwitterError> {
        let url = self.build_search_url(query, max_results)?;
        tracing::debug!(query, max_results, "twitter recent search");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| TwitterError::Deserialize {
                context: format!("search/recent(query={query})"),
                source: e,
            })?;

        match parsed.data {
            Some(posts) => {
                if !parsed.errors.is_empty() {
                    tracing::warn!(
                        query,
                        errors = parsed.errors.len(),
                        "twitter search returned partial errors"
                    );
                }
                Ok(posts)
            }
            None if !parsed.errors.is_empty() => Err(TwitterError::Api {
                status: status.as_u16(),
                message: parsed.errors[0].describe(),
            }),
            None => {
                let count = parsed.meta.map_or(0, |m| m.result_count);
                tracing::debug!(query, result_count = count, "twitter search matched nothing");
                Ok(Vec::new())
            }
        }
    }

    /// Turns a non-2xx response into [`TwitterError::Api`], using the
    /// problem-details body when it parses.
    fn api_error(status: StatusCode, body: &str) -> TwitterError {
        let message = serde_json::from_str::<ApiProblem>(body).map_or_else(
            |_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    trimmed.chars().take(200).collect()
                }
            },
            |problem| problem.describe(),
        );
        TwitterError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl MentionSource for TwitterClient {
    async fn search_recent(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<Post>, TwitterError> {
        self.search(query, max_results).await
    }

    async fn conversation_replies(
        &self,
        conversation_id: &str,
        exclude_author_id: &str,
        max_results: u32,
    ) -> Result<Vec<Post>, TwitterError> {
        let query = reply_query(conversation_id, exclude_author_id);
        self.search(&query, max_results).await
    }
}
