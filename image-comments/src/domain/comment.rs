//! Image comment data model.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Author attached to an image comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentAuthor {
    /// Public username of the author.
    pub username: String,
}

impl CommentAuthor {
    /// Create an author from a username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// One comment left on a feed image.
///
/// Values are immutable once decoded. Identifier uniqueness is owned by the
/// comments service; nothing in this crate deduplicates comments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageComment {
    /// Server-assigned comment identifier.
    pub id: Uuid,
    /// Comment body.
    pub message: String,
    /// Creation instant, normalised to UTC.
    pub created_at: DateTime<Utc>,
    /// Comment author.
    pub author: CommentAuthor,
}

impl ImageComment {
    /// Create a comment value.
    pub fn new(
        id: Uuid,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
        author: CommentAuthor,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            created_at,
            author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use std::collections::HashSet;

    fn comment(message: &str) -> ImageComment {
        let created_at = Utc
            .with_ymd_and_hms(2021, 3, 19, 10, 0, 0)
            .single()
            .expect("valid time");
        ImageComment::new(
            Uuid::nil(),
            message,
            created_at,
            CommentAuthor::new("a username"),
        )
    }

    #[rstest]
    fn comments_compare_by_every_field() {
        assert_eq!(comment("a message"), comment("a message"));
        assert_ne!(comment("a message"), comment("another message"));

        let mut renamed = comment("a message");
        renamed.author = CommentAuthor::new("another username");
        assert_ne!(comment("a message"), renamed);
    }

    #[rstest]
    fn equal_comments_hash_to_one_entry() {
        let set: HashSet<_> = [comment("a message"), comment("a message")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }
}
