//! Twitter/X API v2 mention source for airpulse.
//!
//! Provides [`TwitterClient`] (recent search with bearer auth), the
//! [`MentionSource`] trait the pipeline is written against, and the
//! [`filter_replies`] heuristic that decides which conversation posts count
//! as comments on a mention.

pub mod client;
pub mod error;
pub mod filter;
pub mod source;
pub mod types;

pub use client::{reply_query, TwitterClient};
pub use error::TwitterError;
pub use filter::filter_replies;
pub use source::MentionSource;
