use {
    super::{change_feed::ChangeFeed, order_builder::build_order},
    crate::domain::{error::IngestError, order::NewOrder},
    crate::infra::postgres::order_repo::{self, UpsertOutcome},
    chrono::Utc,
    sqlx::PgPool,
    uuid::Uuid,
};

/// What one webhook delivery produced, for the response envelope.
#[derive(Debug)]
pub struct IngestReport {
    pub order_id: Uuid,
    pub action: &'static str,
    pub previous_status: Option<String>,
    pub order: NewOrder,
}

/// Build the canonical record from the payload and upsert it, then tick
/// the change feed so dashboards re-fetch. One delivery, one atomic row
/// write, one notification.
pub async fn ingest_webhook(
    pool: &PgPool,
    changes: &ChangeFeed,
    body: serde_json::Value,
) -> Result<IngestReport, IngestError> {
    let order = build_order(&body, Utc::now());

    tracing::info!(
        external_id = %order.external_id,
        amount = order.amount,
        payment_method = %order.payment_method,
        status = %order.status,
        items = order.items.len(),
        "order extracted"
    );

    let outcome = order_repo::upsert_order(pool, &order).await?;
    changes.publish();

    let (action, order_id, previous_status) = match outcome {
        UpsertOutcome::Created(id) => ("created", id, None),
        UpsertOutcome::Updated {
            id,
            previous_status,
        } => ("updated", id, Some(previous_status)),
    };

    Ok(IngestReport {
        order_id,
        action,
        previous_status,
        order,
    })
}
