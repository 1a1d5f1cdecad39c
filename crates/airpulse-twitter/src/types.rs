//! Twitter API v2 response types.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! payload (`edit_history_tweet_ids`, `includes`, ...) is ignored.

use airpulse_core::Post;
use serde::Deserialize;

/// Envelope for `GET /2/tweets/search/recent`.
///
/// `data` is absent (not an empty array) when the search matched nothing.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<Post>>,
    #[serde(default)]
    pub meta: Option<SearchMeta>,
    #[serde(default)]
    pub errors: Vec<ApiProblem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub result_count: u32,
}

/// A problem object, used both for top-level error responses and for the
/// entries of an `errors` array.
#[derive(Debug, Deserialize)]
pub struct ApiProblem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiProblem {
    /// Best human-readable description available in the problem object.
    #[must_use]
    pub fn describe(&self) -> String {
        match (&self.title, &self.detail, &self.message) {
            (Some(title), Some(detail), _) if title != detail => format!("{title}: {detail}"),
            (_, Some(detail), _) => detail.clone(),
            (_, _, Some(message)) => message.clone(),
            (Some(title), None, None) => title.clone(),
            (None, None, None) => "unknown error".to_string(),
        }
    }
}
