use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::error::IngestError,
        services::ingest::{IngestReport, ingest_webhook},
    },
    axum::{
        Json,
        extract::State,
        http::{Method, StatusCode},
        response::{IntoResponse, Response},
    },
};

/// Single entry point for the webhook route, dispatching on method the
/// way the original edge function did: OPTIONS gets an empty 200 for
/// CORS preflight, POST is the real path, everything else is a 405.
#[tracing::instrument(name = "webhook", skip_all, fields(external_id = tracing::field::Empty))]
pub async fn webhook_entry(
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> Response {
    match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => match handle_post(&state, &body).await {
            Ok(response) => response.into_response(),
            Err(err) => err.into_response(),
        },
        other => {
            tracing::warn!(method = %other, "non-POST webhook delivery");
            (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(serde_json::json!({"error": "Method not allowed"})),
            )
                .into_response()
        }
    }
}

async fn handle_post(state: &AppState, body: &str) -> Result<Json<serde_json::Value>, ApiError> {
    let payload: serde_json::Value =
        serde_json::from_str(body).map_err(IngestError::Serialization)?;

    let report = ingest_webhook(&state.pool, &state.changes, payload).await?;

    tracing::Span::current().record(
        "external_id",
        tracing::field::display(&report.order.external_id),
    );
    tracing::info!(
        order_id = %report.order_id,
        action = report.action,
        "order persisted"
    );

    Ok(Json(success_envelope(&report)))
}

/// Reconciliation envelope: echoes back what the extractors made of the
/// payload so the sender can detect mis-mapped fields.
fn success_envelope(report: &IngestReport) -> serde_json::Value {
    let order = &report.order;
    let mut envelope = serde_json::json!({
        "success": true,
        "message": format!("Order {} successfully", report.action),
        "order_id": report.order_id,
        "external_id": order.external_id,
        "action": report.action,
        "extracted_data": {
            "amount": order.amount,
            "customer_name": order.customer_name,
            "customer_email": order.customer_email,
            "payment_method": order.payment_method,
            "status": order.status,
            "products": order.items,
        },
    });

    if let Some(previous) = &report.previous_status {
        envelope["previous_status"] = serde_json::json!(previous);
        envelope["new_status"] = serde_json::json!(order.status);
    }

    envelope
}
