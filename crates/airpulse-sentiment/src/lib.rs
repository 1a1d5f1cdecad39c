//! Sentiment classification for airpulse.
//!
//! Sends each comment to Gemini with a three-label prompt and reduces the
//! model's free-text answer to a [`SentimentLabel`](airpulse_core::SentimentLabel)
//! through a conservative keyword normalizer.

pub mod classifier;
pub mod error;
pub mod gemini;
pub mod normalize;

mod types;

pub use classifier::{classify_comment, SentimentClassifier};
pub use error::ClassifierError;
pub use gemini::{build_prompt, GeminiClient};
pub use normalize::{normalize_sentiment, Normalized};
