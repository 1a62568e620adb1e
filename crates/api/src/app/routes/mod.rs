use axum::Router;

pub mod posts;
pub mod system;
pub mod users;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new().merge(posts::router()).merge(users::router())
}
