use {
    crate::domain::error::IngestError,
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    sqlx::PgPool,
    uuid::Uuid,
};

/// Per-user payment-cost configuration consumed by the ROI computation.
/// One row per user, created lazily on first save.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CostSettings {
    pub id: Uuid,
    pub user_id: Uuid,
    pub advertising_cost: f64,
    pub checkout_fee_percentage: f64,
    pub pix_gateway_fee_percentage: f64,
    pub credit_card_fee_1x: f64,
    pub credit_card_fee_2x: f64,
    pub credit_card_fee_3x: f64,
    pub credit_card_fee_4x: f64,
    pub credit_card_fee_5x: f64,
    pub credit_card_fee_6x: f64,
    pub credit_card_fee_7x: f64,
    pub credit_card_fee_8x: f64,
    pub credit_card_fee_9x: f64,
    pub credit_card_fee_10x: f64,
    pub credit_card_fee_11x: f64,
    pub credit_card_fee_12x: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What the configuration screen submits. Absent fields default to zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostSettingsInput {
    #[serde(default)]
    pub advertising_cost: f64,
    #[serde(default)]
    pub checkout_fee_percentage: f64,
    #[serde(default)]
    pub pix_gateway_fee_percentage: f64,
    #[serde(default)]
    pub credit_card_fee_1x: f64,
    #[serde(default)]
    pub credit_card_fee_2x: f64,
    #[serde(default)]
    pub credit_card_fee_3x: f64,
    #[serde(default)]
    pub credit_card_fee_4x: f64,
    #[serde(default)]
    pub credit_card_fee_5x: f64,
    #[serde(default)]
    pub credit_card_fee_6x: f64,
    #[serde(default)]
    pub credit_card_fee_7x: f64,
    #[serde(default)]
    pub credit_card_fee_8x: f64,
    #[serde(default)]
    pub credit_card_fee_9x: f64,
    #[serde(default)]
    pub credit_card_fee_10x: f64,
    #[serde(default)]
    pub credit_card_fee_11x: f64,
    #[serde(default)]
    pub credit_card_fee_12x: f64,
}

pub async fn get_cost_settings(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<CostSettings>, IngestError> {
    let settings = sqlx::query_as::<_, CostSettings>(
        "SELECT * FROM cost_settings WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(settings)
}

/// Create-on-first-save, update thereafter, keyed by the unique user_id.
pub async fn save_cost_settings(
    pool: &PgPool,
    user_id: Uuid,
    input: &CostSettingsInput,
) -> Result<CostSettings, IngestError> {
    let settings = sqlx::query_as::<_, CostSettings>(
        r#"
        INSERT INTO cost_settings (
            id, user_id,
            advertising_cost, checkout_fee_percentage, pix_gateway_fee_percentage,
            credit_card_fee_1x, credit_card_fee_2x, credit_card_fee_3x,
            credit_card_fee_4x, credit_card_fee_5x, credit_card_fee_6x,
            credit_card_fee_7x, credit_card_fee_8x, credit_card_fee_9x,
            credit_card_fee_10x, credit_card_fee_11x, credit_card_fee_12x
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
        ON CONFLICT (user_id) DO UPDATE SET
            advertising_cost = EXCLUDED.advertising_cost,
            checkout_fee_percentage = EXCLUDED.checkout_fee_percentage,
            pix_gateway_fee_percentage = EXCLUDED.pix_gateway_fee_percentage,
            credit_card_fee_1x = EXCLUDED.credit_card_fee_1x,
            credit_card_fee_2x = EXCLUDED.credit_card_fee_2x,
            credit_card_fee_3x = EXCLUDED.credit_card_fee_3x,
            credit_card_fee_4x = EXCLUDED.credit_card_fee_4x,
            credit_card_fee_5x = EXCLUDED.credit_card_fee_5x,
            credit_card_fee_6x = EXCLUDED.credit_card_fee_6x,
            credit_card_fee_7x = EXCLUDED.credit_card_fee_7x,
            credit_card_fee_8x = EXCLUDED.credit_card_fee_8x,
            credit_card_fee_9x = EXCLUDED.credit_card_fee_9x,
            credit_card_fee_10x = EXCLUDED.credit_card_fee_10x,
            credit_card_fee_11x = EXCLUDED.credit_card_fee_11x,
            credit_card_fee_12x = EXCLUDED.credit_card_fee_12x,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(user_id)
    .bind(input.advertising_cost)
    .bind(input.checkout_fee_percentage)
    .bind(input.pix_gateway_fee_percentage)
    .bind(input.credit_card_fee_1x)
    .bind(input.credit_card_fee_2x)
    .bind(input.credit_card_fee_3x)
    .bind(input.credit_card_fee_4x)
    .bind(input.credit_card_fee_5x)
    .bind(input.credit_card_fee_6x)
    .bind(input.credit_card_fee_7x)
    .bind(input.credit_card_fee_8x)
    .bind(input.credit_card_fee_9x)
    .bind(input.credit_card_fee_10x)
    .bind(input.credit_card_fee_11x)
    .bind(input.credit_card_fee_12x)
    .fetch_one(pool)
    .await?;

    Ok(settings)
}
