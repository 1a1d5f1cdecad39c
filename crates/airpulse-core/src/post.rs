use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SentimentLabel;

/// A post as returned by the mention source.
///
/// Mentions and comments share this shape. `author_id` and `conversation_id`
/// are optional because the upstream API leaves them out when unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One output row: a comment joined with its parent mention and sentiment.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedRow {
    pub mention_tweet_id: String,
    pub mention_tweet_text: String,
    pub comment_id: String,
    pub comment_text: String,
    pub comment_author_id: Option<String>,
    pub comment_created_at: Option<DateTime<Utc>>,
    pub sentiment: SentimentLabel,
}

impl AnalyzedRow {
    /// Column names in output order.
    pub const COLUMNS: [&'static str; 7] = [
        "mention_tweet_id",
        "mention_tweet_text",
        "comment_id",
        "comment_text",
        "comment_author_id",
        "comment_created_at",
        "sentiment",
    ];

    #[must_use]
    pub fn new(mention: &Post, comment: Post, sentiment: SentimentLabel) -> Self {
        Self {
            mention_tweet_id: mention.id.clone(),
            mention_tweet_text: mention.text.clone(),
            comment_id: comment.id,
            comment_text: comment.text,
            comment_author_id: comment.author_id,
            comment_created_at: comment.created_at,
            sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_twitter_post_with_all_fields() {
        let json = r#"{
            "id": "1790000000000000001",
            "text": "Landed at BAH, smooth immigration",
            "author_id": "42",
            "conversation_id": "1790000000000000001",
            "created_at": "2024-05-13T08:15:30.000Z",
            "edit_history_tweet_ids": ["1790000000000000001"]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "1790000000000000001");
        assert_eq!(post.author_id.as_deref(), Some("42"));
        assert_eq!(
            post.created_at.unwrap().to_rfc3339(),
            "2024-05-13T08:15:30+00:00"
        );
    }

    #[test]
    fn deserialize_post_missing_optional_fields() {
        let post: Post = serde_json::from_str(r#"{"id": "1", "text": "hi"}"#).unwrap();
        assert!(post.author_id.is_none());
        assert!(post.conversation_id.is_none());
        assert!(post.created_at.is_none());
    }

    #[test]
    fn analyzed_row_joins_mention_and_comment() {
        let mention = Post {
            id: "T1".to_string(),
            text: "@GulfAir lounge".to_string(),
            author_id: Some("A1".to_string()),
            conversation_id: Some("C1".to_string()),
            created_at: None,
        };
        let comment = Post {
            id: "R1".to_string(),
            text: "agreed".to_string(),
            author_id: Some("B2".to_string()),
            conversation_id: Some("C1".to_string()),
            created_at: None,
        };
        let row = AnalyzedRow::new(&mention, comment, SentimentLabel::Positive);
        assert_eq!(row.mention_tweet_id, "T1");
        assert_eq!(row.mention_tweet_text, "@GulfAir lounge");
        assert_eq!(row.comment_id, "R1");
        assert_eq!(row.comment_author_id.as_deref(), Some("B2"));
        assert_eq!(row.sentiment, SentimentLabel::Positive);
    }
}
