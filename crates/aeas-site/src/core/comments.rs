//! One-level comment threads.

use std::collections::HashSet;

use aeas_models::Comment;

/// Top-level comment with its direct replies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentThread {
    /// Top-level comment.
    pub root: Comment,
    /// Replies in arrival order.
    pub replies: Vec<Comment>,
}

/// Group a flat list into threads. Replies whose parent is missing (or is
/// itself a reply) are promoted to top-level so nothing is hidden.
#[must_use]
pub fn build_threads(comments: &[Comment]) -> Vec<CommentThread> {
    let roots: HashSet<&str> = comments
        .iter()
        .filter(|comment| comment.parent_id.is_none())
        .map(|comment| comment.id.as_str())
        .collect();

    let mut threads: Vec<CommentThread> = Vec::new();
    for comment in comments {
        let parent = comment
            .parent_id
            .as_deref()
            .filter(|parent| roots.contains(parent));
        match parent {
            Some(parent) => {
                if let Some(thread) = threads.iter_mut().find(|thread| thread.root.id == parent) {
                    thread.replies.push(comment.clone());
                } else if let Some(root) = comments.iter().find(|candidate| candidate.id == parent) {
                    threads.push(CommentThread {
                        root: root.clone(),
                        replies: vec![comment.clone()],
                    });
                }
            }
            None => {
                if !threads.iter().any(|thread| thread.root.id == comment.id) {
                    threads.push(CommentThread {
                        root: comment.clone(),
                        replies: Vec::new(),
                    });
                }
            }
        }
    }
    threads
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, parent: Option<&str>) -> Comment {
        Comment {
            id: id.to_string(),
            parent_id: parent.map(ToString::to_string),
            author_name: format!("autor {id}"),
            content: format!("comentário {id}"),
            created_at: None,
        }
    }

    #[test]
    fn replies_attach_to_their_parent() {
        let threads = build_threads(&[
            comment("1", None),
            comment("2", None),
            comment("3", Some("1")),
            comment("4", Some("1")),
        ]);
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].root.id, "1");
        let reply_ids: Vec<_> = threads[0].replies.iter().map(|reply| reply.id.as_str()).collect();
        assert_eq!(reply_ids, vec!["3", "4"]);
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn replies_arriving_before_parent_still_attach() {
        let threads = build_threads(&[comment("5", Some("1")), comment("1", None)]);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].root.id, "1");
        assert_eq!(threads[0].replies.len(), 1);
    }

    #[test]
    fn orphans_and_nested_replies_become_top_level() {
        let threads = build_threads(&[
            comment("1", None),
            comment("2", Some("1")),
            comment("3", Some("2")),
            comment("4", Some("missing")),
        ]);
        let roots: Vec<_> = threads.iter().map(|thread| thread.root.id.as_str()).collect();
        assert_eq!(roots, vec!["1", "3", "4"]);
    }
}
