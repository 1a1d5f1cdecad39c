//! Shared domain types and configuration for airpulse.

pub mod app_config;
pub mod config;
pub mod post;
pub mod sentiment;

use thiserror::Error;

pub use app_config::{
    clamp_page_size, AppConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_TWITTER_BASE_URL, MAX_PAGE_SIZE,
    MIN_PAGE_SIZE,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use post::{AnalyzedRow, Post};
pub use sentiment::SentimentLabel;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
