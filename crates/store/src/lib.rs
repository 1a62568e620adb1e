//! `postboard-store` — the entity store: canonical User/Post collections.
//!
//! Handlers talk to the [`EntityStore`] trait; the backend is either the
//! seeded in-memory store or Postgres, chosen at wiring time.

pub mod entity_store;
pub mod memory;
pub mod postgres;

pub use entity_store::{EntityStore, StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
