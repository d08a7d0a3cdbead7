use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use farmwise_core::AdvisoryError;

/// Both advisory failures are caller mistakes, so both map to 400.
pub fn advisory_error_to_response(err: AdvisoryError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        AdvisoryError::InvalidInput(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_input", message)
        }
        AdvisoryError::UnknownCommodity { available, .. } => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "unknown_commodity",
                "message": message,
                "available": available,
            })),
        )
            .into_response(),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
