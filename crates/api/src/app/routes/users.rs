use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors, validation};

pub fn router() -> Router {
    Router::new()
        .route("/user/add", post(create_user))
        // Alternate path used by relational deployments; served against
        // the same store either way.
        .route("/users/", post(create_user))
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    let violations = validation::check_user(&body.name, body.age);
    if !violations.is_empty() {
        return errors::validation_error(violations);
    }

    match services.add_user(&body.name, body.age).await {
        Ok(user) => (StatusCode::OK, Json(dto::user_to_json(&user))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
