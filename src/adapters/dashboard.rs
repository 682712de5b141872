//! Read-side routes the dashboard consumes: cost settings and the
//! order-metrics / ROI summary.

use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        infra::postgres::{
            cost_settings_repo::{self, CostSettings, CostSettingsInput},
            metrics_repo,
        },
        services::roi::{self, CostRates, OrderMetrics, RoiMetrics},
    },
    axum::{
        Json,
        extract::{Path, Query, State},
    },
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    uuid::Uuid,
};

pub async fn get_cost_settings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Option<CostSettings>>, ApiError> {
    let settings = cost_settings_repo::get_cost_settings(&state.pool, user_id).await?;
    Ok(Json(settings))
}

pub async fn put_cost_settings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(input): Json<CostSettingsInput>,
) -> Result<Json<CostSettings>, ApiError> {
    let settings = cost_settings_repo::save_cost_settings(&state.pool, user_id, &input).await?;
    tracing::info!(user_id = %user_id, "cost settings saved");
    Ok(Json(settings))
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    /// Start of the reporting period; omit for all-time.
    pub since: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: OrderMetrics,
    pub roi: RoiMetrics,
}

/// Order aggregates for the period plus ROI computed against the user's
/// cost settings (zeroed settings when the user never saved any).
pub async fn get_metrics(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let totals = metrics_repo::order_totals(&state.pool, query.since).await?;
    let metrics = OrderMetrics::from(totals);

    let rates = cost_settings_repo::get_cost_settings(&state.pool, user_id)
        .await?
        .as_ref()
        .map(CostRates::from)
        .unwrap_or_default();
    let roi = roi::roi_metrics(&metrics, &rates);

    Ok(Json(MetricsResponse { metrics, roi }))
}
