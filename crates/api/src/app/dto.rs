use serde::Deserialize;

use postboard_core::{Post, User};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub author_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub post_id: Option<i64>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id,
        "name": user.name,
        "age": user.age,
    })
}

pub fn post_to_json(post: &Post) -> serde_json::Value {
    serde_json::json!({
        "id": post.id,
        "title": post.title,
        "body": post.body,
        "author": user_to_json(&post.author),
    })
}
