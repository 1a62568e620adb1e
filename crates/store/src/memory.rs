use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::{Post, User};

use crate::entity_store::{EntityStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    posts: Vec<Post>,
}

/// In-memory entity store: two ordered vectors behind one lock.
///
/// Ids are dense: the next id is the current collection length + 1. With no
/// delete operation the scheme cannot produce duplicates.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the fixture data: users 1-3 and posts 1-3,
    /// post `n` authored by user `n`.
    pub fn seeded() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "Petro".to_string(),
                age: 32,
            },
            User {
                id: 2,
                name: "Adam".to_string(),
                age: 27,
            },
            User {
                id: 3,
                name: "Nick".to_string(),
                age: 25,
            },
        ];

        let posts = users
            .iter()
            .enumerate()
            .map(|(i, author)| {
                let n = i as i64 + 1;
                Post::new(n, format!("New {n}"), format!("Body {n}"), author.clone())
            })
            .collect();

        Self {
            inner: RwLock::new(Collections { users, posts }),
        }
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn get_user(&self, id: i64) -> StoreResult<Option<User>> {
        let guard = self.inner.read().await;
        Ok(guard.users.iter().find(|u| u.id == id).cloned())
    }

    async fn add_user(&self, name: &str, age: i64) -> StoreResult<User> {
        let mut guard = self.inner.write().await;
        let user = User::new(guard.users.len() as i64 + 1, name, age)?;
        guard.users.push(user.clone());
        Ok(user)
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        Ok(self.inner.read().await.posts.clone())
    }

    async fn get_post(&self, id: i64) -> StoreResult<Option<Post>> {
        let guard = self.inner.read().await;
        Ok(guard.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn add_post(&self, title: &str, body: &str, author_id: i64) -> StoreResult<Post> {
        let mut guard = self.inner.write().await;

        let author = guard
            .users
            .iter()
            .find(|u| u.id == author_id)
            .cloned()
            .ok_or(StoreError::UserNotFound)?;

        let post = Post::new(guard.posts.len() as i64 + 1, title, body, author);
        guard.posts.push(post.clone());
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::DomainError;

    #[tokio::test]
    async fn seeded_store_holds_fixture_rows() {
        let store = InMemoryStore::seeded();

        let users = store.list_users().await.unwrap();
        assert_eq!(
            users.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
            vec!["Petro", "Adam", "Nick"]
        );

        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].title, "New 1");
        assert_eq!(posts[2].author.id, 3);
    }

    #[tokio::test]
    async fn add_user_assigns_next_id_and_appends() {
        let store = InMemoryStore::seeded();

        let user = store.add_user("Olena", 29).await.unwrap();
        assert_eq!(user.id, 4);

        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 4);
        assert_eq!(users.last().unwrap(), &user);
    }

    #[tokio::test]
    async fn add_user_rejects_out_of_range_fields() {
        let store = InMemoryStore::new();

        let err = store.add_user("A", 30).await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(DomainError::Validation(_))));

        let err = store.add_user("Olena", 0).await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(DomainError::Validation(_))));

        assert!(store.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_post_embeds_the_resolved_author() {
        let store = InMemoryStore::seeded();

        let post = store.add_post("T", "B", 2).await.unwrap();
        assert_eq!(post.id, 4);
        assert_eq!(post.author.id, 2);
        assert_eq!(post.author.name, "Adam");

        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts.last().unwrap(), &post);
    }

    #[tokio::test]
    async fn add_post_with_unknown_author_mutates_nothing() {
        let store = InMemoryStore::seeded();

        let err = store.add_post("T", "B", 42).await.unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound));

        assert_eq!(store.list_posts().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn get_post_scans_by_id() {
        let store = InMemoryStore::seeded();

        let post = store.get_post(2).await.unwrap().unwrap();
        assert_eq!(post.title, "New 2");

        assert!(store.get_post(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_posts_preserves_insertion_order() {
        let store = InMemoryStore::seeded();
        store.add_post("Fourth", "B", 1).await.unwrap();
        store.add_post("Fifth", "B", 1).await.unwrap();

        let ids: Vec<i64> = store
            .list_posts()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
