mod common;

use pedido_sync::infra::postgres::cost_settings_repo::{
    CostSettingsInput, get_cost_settings, save_cost_settings,
};
use pedido_sync::services::change_feed::ChangeFeed;
use pedido_sync::services::ingest::ingest_webhook;
use serde_json::json;

#[tokio::test]
async fn snapshot_then_refund_end_to_end() {
    let Some(pool) = common::try_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let changes = ChangeFeed::new();
    let eid = common::unique_external_id("flow-ab");

    // Scenario A: first snapshot, integer amount taken as centavos.
    let body = json!({
        "external_id": eid,
        "amount": 10000,
        "customer": {"name": "Ana", "email": "ana@x.com"},
        "payment_method": "pix",
        "status": "paid",
    });
    let report = ingest_webhook(&pool, &changes, body).await.unwrap();
    assert_eq!(report.action, "created");
    assert!(report.previous_status.is_none());

    let row = common::get_order(&pool, &eid).await.unwrap();
    assert_eq!(row.amount, 100.0);
    assert_eq!(row.payment_method, "pix");
    assert_eq!(row.status_class, "paid");

    // Scenario B: the gateway resends the full snapshot as refunded.
    let body = json!({
        "external_id": eid,
        "amount": 10000,
        "customer": {"name": "Ana", "email": "ana@x.com"},
        "payment_method": "pix",
        "status": "refunded",
    });
    let report = ingest_webhook(&pool, &changes, body).await.unwrap();
    assert_eq!(report.action, "updated");
    assert_eq!(report.previous_status.as_deref(), Some("paid"));
    assert_eq!(report.order.status, "refunded");
    assert_eq!(common::count_orders(&pool, &eid).await, 1);
}

#[tokio::test]
async fn unrecognizable_payload_still_creates_a_row() {
    let Some(pool) = common::try_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let changes = ChangeFeed::new();

    // Scenario C: nothing usable at all. Extraction degrades, never aborts.
    let report = ingest_webhook(&pool, &changes, json!({"unrelated": true}))
        .await
        .unwrap();
    assert_eq!(report.action, "created");
    let eid = report.order.external_id.clone();
    assert!(eid.starts_with("WH-"));

    let row = common::get_order(&pool, &eid).await.unwrap();
    assert!(row.customer_name.starts_with("Cliente "));
    assert!(row.customer_email.contains('@'));
    assert_eq!(row.status, "pending");
    let items = row.items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0]["name"].as_str().unwrap().starts_with("Produto "));
}

#[tokio::test]
async fn successful_ingest_ticks_the_change_feed() {
    let Some(pool) = common::try_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let changes = ChangeFeed::new();
    let mut rx = changes.subscribe();
    let before = *rx.borrow();

    let eid = common::unique_external_id("flow-feed");
    ingest_webhook(&pool, &changes, common::payload(&eid, 100, "paid"))
        .await
        .unwrap();

    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow(), before + 1);
}

#[tokio::test]
async fn cost_settings_create_lazily_then_update() {
    let Some(pool) = common::try_pool().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let user_id = uuid::Uuid::now_v7();

    assert!(get_cost_settings(&pool, user_id).await.unwrap().is_none());

    let input = CostSettingsInput {
        advertising_cost: 500.0,
        checkout_fee_percentage: 5.0,
        pix_gateway_fee_percentage: 1.0,
        ..Default::default()
    };
    let saved = save_cost_settings(&pool, user_id, &input).await.unwrap();
    assert_eq!(saved.advertising_cost, 500.0);

    let input = CostSettingsInput {
        advertising_cost: 750.0,
        ..input
    };
    let saved = save_cost_settings(&pool, user_id, &input).await.unwrap();
    assert_eq!(saved.advertising_cost, 750.0);
    assert_eq!(saved.checkout_fee_percentage, 5.0);

    // Still one row per user.
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM cost_settings WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}
