//! Declarative field checks evaluated before a handler body touches the
//! store. A non-empty violation list short-circuits the request with a
//! structured 422 payload.

use serde::Serialize;

use postboard_core::user;

/// One violated constraint: the field path plus a message.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| (*s).to_string()).collect(),
            msg: msg.into(),
        }
    }
}

/// Path `id` bound for single-post lookup.
pub const PATH_ID_MIN: i64 = 1;
pub const PATH_ID_MAX: i64 = 100;

/// Query `post_id` bound for search.
pub const SEARCH_ID_MIN: i64 = 1;
pub const SEARCH_ID_MAX: i64 = 50;

/// Constraints on a create-user body: name length in [2, 20], age in [1, 110].
pub fn check_user(name: &str, age: i64) -> Vec<FieldError> {
    let mut violations = Vec::new();
    if let Err(e) = user::validate_name(name) {
        violations.push(FieldError::new(&["body", "name"], e.to_string()));
    }
    if let Err(e) = user::validate_age(age) {
        violations.push(FieldError::new(&["body", "age"], e.to_string()));
    }
    violations
}

/// Constraint on the `/items/{id}` path parameter.
pub fn check_path_id(id: i64) -> Vec<FieldError> {
    check_range(&["path", "id"], id, PATH_ID_MIN, PATH_ID_MAX)
}

/// Constraint on the `/search` `post_id` query parameter (when present).
pub fn check_search_post_id(post_id: i64) -> Vec<FieldError> {
    check_range(&["query", "post_id"], post_id, SEARCH_ID_MIN, SEARCH_ID_MAX)
}

fn check_range(loc: &[&str], value: i64, min: i64, max: i64) -> Vec<FieldError> {
    if value < min || value > max {
        return vec![FieldError::new(
            loc,
            format!("value must be between {min} and {max}"),
        )];
    }
    Vec::new()
}
