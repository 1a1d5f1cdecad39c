//! Classifier seam and per-comment classification.

use airpulse_core::SentimentLabel;

use crate::error::ClassifierError;
use crate::normalize::normalize_sentiment;

/// Something that turns free text into a free-text sentiment description.
///
/// [`crate::GeminiClient`] is the production implementation.
#[allow(async_fn_in_trait)]
pub trait SentimentClassifier {
    /// Return the model's raw answer for `text`.
    async fn classify(&self, text: &str) -> Result<String, ClassifierError>;
}

/// Classify one comment and reduce the answer to a [`SentimentLabel`].
///
/// A failed classifier call yields [`SentimentLabel::Error`] without
/// consulting the normalizer. An answer the normalizer does not recognise
/// yields [`SentimentLabel::Neutral`] and a warning carrying the raw text.
pub async fn classify_comment<C>(classifier: &C, comment_id: &str, text: &str) -> SentimentLabel
where
    C: SentimentClassifier,
{
    let raw = match classifier.classify(text).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(comment_id, error = %e, "sentiment classification failed");
            return SentimentLabel::Error;
        }
    };

    let normalized = normalize_sentiment(&raw);
    if !normalized.recognized {
        tracing::warn!(
            comment_id,
            raw_output = %raw.trim(),
            "unexpected classifier output, defaulting to neutral"
        );
    }
    normalized.label
}
