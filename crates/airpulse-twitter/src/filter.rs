//! Reply selection for a mention's conversation.
//!
//! The API only groups posts by `conversation_id`; it exposes no parent
//! pointer we request here. A candidate that survives [`filter_replies`] is
//! therefore "some other person's post in the same conversation", which may be
//! a reply to a different post in the thread rather than to the mention
//! itself. Callers must treat the result as best-effort.

use airpulse_core::Post;

/// Select the candidates that count as comments on `target`.
///
/// Drops the target itself (the API can echo it back) and anything written by
/// the target's author (the query excludes them, but near-matches slip
/// through). Source order is preserved and nothing else is deduplicated.
#[must_use]
pub fn filter_replies(target: &Post, candidates: Vec<Post>) -> Vec<Post> {
    let excluded_author = target.author_id.as_deref();

    candidates
        .into_iter()
        .filter(|candidate| {
            if candidate.id == target.id {
                tracing::debug!(
                    mention_id = %target.id,
                    "dropping candidate: it is the mention itself"
                );
                return false;
            }
            if excluded_author.is_some() && candidate.author_id.as_deref() == excluded_author {
                tracing::debug!(
                    mention_id = %target.id,
                    comment_id = %candidate.id,
                    "dropping candidate: authored by the mention's author"
                );
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, author: Option<&str>) -> Post {
        Post {
            id: id.to_string(),
            text: format!("text of {id}"),
            author_id: author.map(ToString::to_string),
            conversation_id: Some("C1".to_string()),
            created_at: None,
        }
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn drops_echoed_target() {
        let target = post("T1", Some("A1"));
        let kept = filter_replies(&target, vec![post("R1", Some("B1")), post("T1", Some("A1"))]);
        assert_eq!(ids(&kept), ["R1"]);
    }

    #[test]
    fn drops_target_even_with_different_author() {
        let target = post("T1", Some("A1"));
        let kept = filter_replies(&target, vec![post("T1", Some("Z9"))]);
        assert!(kept.is_empty());
    }

    #[test]
    fn drops_posts_by_mention_author() {
        let target = post("T1", Some("A1"));
        let kept = filter_replies(
            &target,
            vec![post("R1", Some("A1")), post("R2", Some("B2"))],
        );
        assert_eq!(ids(&kept), ["R2"]);
    }

    #[test]
    fn keeps_candidates_without_author() {
        let target = post("T1", Some("A1"));
        let kept = filter_replies(&target, vec![post("R1", None)]);
        assert_eq!(ids(&kept), ["R1"]);
    }

    #[test]
    fn target_without_author_only_drops_itself() {
        let target = post("T1", None);
        let kept = filter_replies(&target, vec![post("R1", None), post("T1", None)]);
        assert_eq!(ids(&kept), ["R1"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let target = post("T1", Some("A1"));
        let kept = filter_replies(
            &target,
            vec![
                post("R3", Some("B1")),
                post("R1", Some("B2")),
                post("R3", Some("B1")),
                post("R2", Some("B3")),
            ],
        );
        assert_eq!(ids(&kept), ["R3", "R1", "R3", "R2"]);
    }

    #[test]
    fn empty_page_yields_nothing() {
        let target = post("T1", Some("A1"));
        assert!(filter_replies(&target, Vec::new()).is_empty());
    }

    #[test]
    fn never_returns_target_id_for_mixed_pages() {
        let target = post("T1", Some("A1"));
        for n in 0..6 {
            let candidates: Vec<Post> = (0..n)
                .map(|i| {
                    if i % 2 == 0 {
                        post("T1", Some("X"))
                    } else {
                        post(&format!("R{i}"), Some("X"))
                    }
                })
                .collect();
            let kept = filter_replies(&target, candidates);
            assert!(kept.iter().all(|p| p.id != "T1"));
        }
    }
}
