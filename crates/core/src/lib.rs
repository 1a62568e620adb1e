//! `postboard-core` — domain records and validation rules.
//!
//! This crate contains **pure domain** types (no HTTP or storage concerns).

pub mod error;
pub mod post;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use post::Post;
pub use user::User;
