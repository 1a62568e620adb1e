use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors, validation};

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_posts))
        .route("/items/add", post(create_post))
        .route("/items/:id", get(get_post))
        .route("/search", get(search_post))
        // Alternate paths used by relational deployments.
        .route("/posts/", get(list_posts).post(create_post))
}

pub async fn list_posts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_posts().await {
        Ok(posts) => {
            let items = posts.iter().map(dto::post_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_post(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    let violations = validation::check_path_id(id);
    if !violations.is_empty() {
        return errors::validation_error(violations);
    }

    match services.get_post(id).await {
        Ok(Some(post)) => (StatusCode::OK, Json(dto::post_to_json(&post))).into_response(),
        Ok(None) => errors::not_found("Post not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn search_post(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let Some(post_id) = params.post_id else {
        return (StatusCode::OK, Json(serde_json::json!({ "data": null }))).into_response();
    };

    let violations = validation::check_search_post_id(post_id);
    if !violations.is_empty() {
        return errors::validation_error(violations);
    }

    match services.get_post(post_id).await {
        Ok(Some(post)) => (
            StatusCode::OK,
            Json(serde_json::json!({ "data": dto::post_to_json(&post) })),
        )
            .into_response(),
        Ok(None) => errors::not_found("Post not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_post(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreatePostRequest>,
) -> axum::response::Response {
    match services.add_post(&body.title, &body.body, body.author_id).await {
        Ok(post) => (StatusCode::OK, Json(dto::post_to_json(&post))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
