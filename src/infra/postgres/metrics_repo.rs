use {
    crate::domain::error::IngestError,
    chrono::{DateTime, Utc},
    sqlx::PgPool,
};

/// Raw aggregates over the orders table for one period. Buckets come from
/// the status_class column assigned at ingestion — no reader-side
/// re-classification.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct OrderTotals {
    pub total_orders: i64,
    pub total_revenue: f64,
    pub paid_orders: i64,
    pub pending_orders: i64,
    pub cancelled_orders: i64,
    pub paid_revenue: f64,
}

pub async fn order_totals(
    pool: &PgPool,
    since: Option<DateTime<Utc>>,
) -> Result<OrderTotals, IngestError> {
    let totals = sqlx::query_as::<_, OrderTotals>(
        r#"
        SELECT
            COUNT(*) AS total_orders,
            COALESCE(SUM(amount), 0) AS total_revenue,
            COUNT(*) FILTER (WHERE status_class = 'paid') AS paid_orders,
            COUNT(*) FILTER (WHERE status_class = 'pending') AS pending_orders,
            COUNT(*) FILTER (WHERE status_class = 'cancelled') AS cancelled_orders,
            COALESCE(SUM(paid_amount) FILTER (WHERE status_class = 'paid'), 0) AS paid_revenue
        FROM orders
        WHERE $1::timestamptz IS NULL OR created_at >= $1
        "#,
    )
    .bind(since)
    .fetch_one(pool)
    .await?;

    Ok(totals)
}
