use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use postboard_store::StoreError;

use crate::app::validation::FieldError;

/// Map a store failure to its HTTP response.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::UserNotFound => not_found("User not found"),
        StoreError::Invalid(e) => {
            validation_error(vec![FieldError::new(&["body"], e.to_string())])
        }
        StoreError::Backend(e) => {
            tracing::error!(error = %e, "entity store backend failure");
            json_detail(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

/// `404 {"detail": ...}` for a well-formed id with no matching entity.
pub fn not_found(detail: &'static str) -> axum::response::Response {
    json_detail(StatusCode::NOT_FOUND, detail)
}

/// `422` with the structured per-field violation list; the handler body is
/// never reached when this fires.
pub fn validation_error(errors: Vec<FieldError>) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({ "detail": errors })),
    )
        .into_response()
}

pub fn json_detail(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({ "detail": detail.into() })),
    )
        .into_response()
}
