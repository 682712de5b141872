use {
    crate::domain::error::IngestError,
    axum::{
        Json,
        http::StatusCode,
        response::{IntoResponse, Response},
    },
    chrono::Utc,
};

/// Newtype over the domain error so the HTTP mapping lives in the
/// adapters layer, not in the domain.
pub struct ApiError(pub IngestError);

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        Self(err)
    }
}

/// Every failure surfaces as the same 500 envelope. The calling gateway
/// treats any non-200 as "retry the delivery", and retries are safe
/// because persistence is upsert-keyed by external_id.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = match &self.0 {
            IngestError::Validation(msg) => msg.clone(),
            IngestError::Database(err) => {
                tracing::error!("database error: {err}");
                err.to_string()
            }
            IngestError::Serialization(err) => {
                tracing::error!("serialization error: {err}");
                err.to_string()
            }
        };

        let body = serde_json::json!({
            "error": "Internal server error",
            "details": details,
            "timestamp": Utc::now().to_rfc3339(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
