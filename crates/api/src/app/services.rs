use std::sync::Arc;

use postboard_core::{Post, User};
use postboard_store::{EntityStore, InMemoryStore, PostgresStore, StoreResult};

use crate::app::AppConfig;

/// Service wiring shared by all handlers: the entity store behind a trait
/// object so the persistence backend is swappable without touching routes.
pub struct AppServices {
    store: Arc<dyn EntityStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn add_user(&self, name: &str, age: i64) -> StoreResult<User> {
        self.store.add_user(name, age).await
    }

    pub async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        self.store.list_posts().await
    }

    pub async fn get_post(&self, id: i64) -> StoreResult<Option<Post>> {
        self.store.get_post(id).await
    }

    pub async fn add_post(&self, title: &str, body: &str, author_id: i64) -> StoreResult<Post> {
        self.store.add_post(title, body, author_id).await
    }
}

/// Pick the store backend from configuration.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresStore::connect(url).await?;
            store.seed().await?;
            tracing::info!("using postgres entity store");
            Ok(AppServices::new(Arc::new(store)))
        }
        None => {
            tracing::info!("using seeded in-memory entity store");
            Ok(AppServices::new(Arc::new(InMemoryStore::seeded())))
        }
    }
}
