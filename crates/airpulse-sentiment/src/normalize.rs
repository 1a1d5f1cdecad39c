//! Mapping of free-text classifier output onto a fixed label set.

use airpulse_core::SentimentLabel;

/// Result of interpreting one raw classifier answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub label: SentimentLabel,
    /// `false` when no rule matched and `label` is the neutral fallback.
    pub recognized: bool,
}

/// Interpret a raw classifier answer as `positive`, `negative` or `neutral`.
///
/// Rules, first match wins, on the lowercased and trimmed text:
///
/// 1. mentions "positive" but not "negative" → positive
/// 2. mentions "negative" but not "positive" → negative
/// 3. mentions "neutral" → neutral
/// 4. is exactly one of the three words → that word
/// 5. anything else → neutral, with `recognized = false`
///
/// An answer mentioning both "positive" and "negative" is ambiguous and
/// falls through to the neutral rules. Never returns [`SentimentLabel::Error`];
/// that label is reserved for failed classifier calls.
#[must_use]
pub fn normalize_sentiment(raw: &str) -> Normalized {
    let text = raw.trim().to_lowercase();
    let has_positive = text.contains("positive");
    let has_negative = text.contains("negative");

    let label = if has_positive && !has_negative {
        Some(SentimentLabel::Positive)
    } else if has_negative && !has_positive {
        Some(SentimentLabel::Negative)
    } else if text.contains("neutral") {
        Some(SentimentLabel::Neutral)
    } else {
        exact_label(&text)
    };

    match label {
        Some(label) => Normalized {
            label,
            recognized: true,
        },
        None => Normalized {
            label: SentimentLabel::Neutral,
            recognized: false,
        },
    }
}

// Rule 4. The substring rules already catch these words.
fn exact_label(text: &str) -> Option<SentimentLabel> {
    match text {
        "positive" => Some(SentimentLabel::Positive),
        "negative" => Some(SentimentLabel::Negative),
        "neutral" => Some(SentimentLabel::Neutral),
        _ => None,
    }
}
