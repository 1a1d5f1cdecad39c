use airpulse_core::Post;

use crate::TwitterError;

/// Where mentions and their conversation replies come from.
///
/// [`crate::TwitterClient`] is the production implementation; the pipeline is
/// generic over this trait so it can run against in-memory fixtures.
#[allow(async_fn_in_trait)]
pub trait MentionSource {
    /// Fetch one page of posts matching `query`.
    async fn search_recent(&self, query: &str, max_results: u32)
        -> Result<Vec<Post>, TwitterError>;

    /// Fetch one page of posts in `conversation_id` not written by
    /// `exclude_author_id`.
    async fn conversation_replies(
        &self,
        conversation_id: &str,
        exclude_author_id: &str,
        max_results: u32,
    ) -> Result<Vec<Post>, TwitterError>;
}
