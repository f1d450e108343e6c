use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Gateway-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders the JSON envelope existing clients parse; the
/// shapes are contractual and intentionally uneven across variants.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required request body missing, unparseable, or empty.
    #[error("No data provided")]
    NoData,

    /// The engine was never constructed (missing credentials at startup).
    #[error("Gemini AI Engine not initialized. Check API keys in environment variables.")]
    EngineUnavailable,

    /// An engine call failed; the message is the engine error's string form.
    #[error("{0}")]
    Engine(String),

    /// Same as `Engine`, but the envelope also points callers at the
    /// server logs. Only the resume endpoint uses this shape.
    #[error("{0}")]
    EngineDetailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NoData => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": self.to_string() }),
            ),
            AppError::EngineUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "error": self.to_string() }),
            ),
            AppError::Engine(msg) => {
                tracing::error!("Engine error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "error": msg }),
                )
            }
            AppError::EngineDetailed(msg) => {
                tracing::error!("Engine error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "error": msg,
                        "details": "Check server logs for more information"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn no_data_renders_400_envelope() {
        let response = AppError::NoData.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "No data provided");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn engine_unavailable_renders_500_with_explanation() {
        let response = AppError::EngineUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Gemini AI Engine not initialized. Check API keys in environment variables."
        );
    }

    #[tokio::test]
    async fn detailed_engine_error_carries_log_pointer() {
        let response = AppError::EngineDetailed("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "boom");
        assert_eq!(body["details"], "Check server logs for more information");
    }

    #[tokio::test]
    async fn plain_engine_error_has_no_details_field() {
        let response = AppError::Engine("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "boom");
        assert!(body.get("details").is_none());
    }
}
