//! Mention → comments → sentiment → CSV run.
//!
//! Every mention on the search page has its conversation fetched and
//! classified. Requests are issued one at a time, in order. Source and
//! classifier failures are logged and absorbed; only configuration errors,
//! handled before this module is reached, stop a run.

use std::io::Write;

use airpulse_core::{AnalyzedRow, AppConfig, Post, SentimentLabel};
use airpulse_sentiment::{classify_comment, SentimentClassifier};
use airpulse_twitter::{filter_replies, MentionSource};

use crate::output::{persist_rows, Persisted};

/// Per-label row counts for the run summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub error: usize,
}

impl SentimentTally {
    fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Error => self.error += 1,
        }
    }
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PipelineReport {
    pub mentions_found: usize,
    /// Mentions whose conversation was fetched successfully.
    pub mentions_processed: usize,
    /// Mentions skipped for missing ids or a failed reply fetch.
    pub mentions_skipped: usize,
    pub rows: usize,
    pub sentiments: SentimentTally,
    pub persisted: Persisted,
}

impl PipelineReport {
    fn no_mentions() -> Self {
        Self {
            mentions_found: 0,
            mentions_processed: 0,
            mentions_skipped: 0,
            rows: 0,
            sentiments: SentimentTally::default(),
            persisted: Persisted::Nothing,
        }
    }

    /// One-line summary for the console.
    pub(crate) fn summary(&self) -> String {
        let destination = match &self.persisted {
            Persisted::File(path) => format!("saved to {}", path.display()),
            Persisted::Console => "printed to console (file write failed)".to_string(),
            Persisted::Nothing => "nothing saved".to_string(),
        };
        format!(
            "analysis complete: {} mentions found, {} processed, {} skipped; {} comments \
             (positive {}, negative {}, neutral {}, error {}); {destination}",
            self.mentions_found,
            self.mentions_processed,
            self.mentions_skipped,
            self.rows,
            self.sentiments.positive,
            self.sentiments.negative,
            self.sentiments.neutral,
            self.sentiments.error,
        )
    }
}

/// Run the whole pipeline and persist its rows to `config.output_path`.
///
/// `console` receives the preview after a successful save, or every row when
/// the file cannot be written.
pub(crate) async fn run_pipeline<S, C, W>(
    source: &S,
    classifier: &C,
    config: &AppConfig,
    console: W,
) -> PipelineReport
where
    S: MentionSource,
    C: SentimentClassifier,
    W: Write,
{
    tracing::info!(
        query = %config.twitter_query,
        max_mentions = config.max_mentions,
        "fetching mentions"
    );

    let mentions = match source
        .search_recent(&config.twitter_query, config.max_mentions)
        .await
    {
        Ok(mentions) => mentions,
        Err(e) => {
            tracing::warn!(error = %e, "mention search failed; treating as no mentions");
            Vec::new()
        }
    };

    if mentions.is_empty() {
        tracing::info!("no mentions found");
        return PipelineReport::no_mentions();
    }

    let mut report = PipelineReport {
        mentions_found: mentions.len(),
        ..PipelineReport::no_mentions()
    };
    let mut rows: Vec<AnalyzedRow> = Vec::new();
    let total = mentions.len();

    for (index, mention) in mentions.iter().enumerate() {
        tracing::info!(
            mention = index + 1,
            total,
            mention_id = %mention.id,
            text = %mention.text,
            "processing mention"
        );

        let Some(comments) = fetch_comments(source, mention, config.max_comments_per_mention).await
        else {
            report.mentions_skipped += 1;
            continue;
        };
        report.mentions_processed += 1;

        if comments.is_empty() {
            tracing::info!(mention_id = %mention.id, "no comments found for mention");
            continue;
        }

        let comment_total = comments.len();
        for (comment_index, comment) in comments.into_iter().enumerate() {
            tracing::info!(
                comment = comment_index + 1,
                total = comment_total,
                comment_id = %comment.id,
                text = %comment.text,
                "analyzing comment"
            );
            let sentiment = classify_comment(classifier, &comment.id, &comment.text).await;
            tracing::info!(comment_id = %comment.id, %sentiment, "sentiment");

            report.sentiments.record(sentiment);
            rows.push(AnalyzedRow::new(mention, comment, sentiment));
        }
    }

    report.rows = rows.len();
    report.persisted = persist_rows(&rows, &config.output_path, console);
    report
}

/// Fetch and filter the comments for one mention.
///
/// Returns `None` when the mention cannot be processed: it lacks an author
/// or conversation id, or the reply fetch failed.
async fn fetch_comments<S: MentionSource>(
    source: &S,
    mention: &Post,
    max_comments: u32,
) -> Option<Vec<Post>> {
    let (Some(author_id), Some(conversation_id)) =
        (mention.author_id.as_deref(), mention.conversation_id.as_deref())
    else {
        tracing::warn!(
            mention_id = %mention.id,
            "skipping comment retrieval: mention has no author_id or conversation_id"
        );
        return None;
    };

    match source
        .conversation_replies(conversation_id, author_id, max_comments)
        .await
    {
        Ok(candidates) => {
            let fetched = candidates.len();
            let comments = filter_replies(mention, candidates);
            tracing::info!(
                mention_id = %mention.id,
                fetched,
                kept = comments.len(),
                "fetched conversation replies"
            );
            Some(comments)
        }
        Err(e) => {
            tracing::warn!(
                mention_id = %mention.id,
                conversation_id,
                error = %e,
                "reply fetch failed; skipping mention"
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
