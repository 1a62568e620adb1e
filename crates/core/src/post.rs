use serde::{Deserialize, Serialize};

use crate::user::User;

/// A post authored by exactly one user.
///
/// The author is embedded as a non-owning snapshot resolved at creation
/// time; the post does not manage the user's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: User,
}

impl Post {
    /// Build a post. The caller is responsible for having resolved `author`
    /// from the canonical user collection.
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>, author: User) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_embeds_the_author() {
        let author = User::new(2, "Adam", 27).unwrap();
        let post = Post::new(4, "T", "B", author.clone());
        assert_eq!(post.id, 4);
        assert_eq!(post.title, "T");
        assert_eq!(post.body, "B");
        assert_eq!(post.author, author);
    }
}
