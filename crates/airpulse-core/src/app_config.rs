use std::path::PathBuf;

/// Smallest `max_results` the Twitter recent-search endpoint accepts.
pub const MIN_PAGE_SIZE: u32 = 10;

/// Largest `max_results` the Twitter recent-search endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

pub const DEFAULT_QUERY: &str = "@GulfAir -is:retweet";
pub const DEFAULT_OUTPUT_PATH: &str = "data/bahrain_airport_comment_sentiments.csv";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TWITTER_BASE_URL: &str = "https://api.twitter.com/";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/";

/// Clamp a requested page size into the range the upstream API accepts.
#[must_use]
pub fn clamp_page_size(requested: u32) -> u32 {
    requested.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

#[derive(Clone)]
pub struct AppConfig {
    pub twitter_bearer_token: String,
    pub gemini_api_key: String,
    pub twitter_query: String,
    pub max_mentions: u32,
    pub max_comments_per_mention: u32,
    pub gemini_model: String,
    pub output_path: PathBuf,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub twitter_base_url: String,
    pub gemini_base_url: String,
}

impl AppConfig {
    /// Apply command-line overrides on top of the env-derived values.
    ///
    /// Page sizes go through [`clamp_page_size`] again so a CLI flag cannot
    /// bypass the API floor.
    #[must_use]
    pub fn with_overrides(
        mut self,
        query: Option<String>,
        max_mentions: Option<u32>,
        max_comments: Option<u32>,
        output: Option<PathBuf>,
    ) -> Self {
        if let Some(query) = query {
            self.twitter_query = query;
        }
        if let Some(n) = max_mentions {
            self.max_mentions = clamp_page_size(n);
        }
        if let Some(n) = max_comments {
            self.max_comments_per_mention = clamp_page_size(n);
        }
        if let Some(path) = output {
            self.output_path = path;
        }
        self
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("twitter_bearer_token", &"[redacted]")
            .field("gemini_api_key", &"[redacted]")
            .field("twitter_query", &self.twitter_query)
            .field("max_mentions", &self.max_mentions)
            .field("max_comments_per_mention", &self.max_comments_per_mention)
            .field("gemini_model", &self.gemini_model)
            .field("output_path", &self.output_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .field("twitter_base_url", &self.twitter_base_url)
            .field("gemini_base_url", &self.gemini_base_url)
            .finish()
    }
}
