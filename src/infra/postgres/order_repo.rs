use {
    crate::domain::{error::IngestError, order::NewOrder},
    sqlx::PgPool,
    uuid::Uuid,
};

#[derive(Debug)]
pub enum UpsertOutcome {
    /// New order row inserted.
    Created(Uuid),
    /// Existing row for this external_id overwritten with the new
    /// snapshot; carries the status it had before, for transition
    /// reporting.
    Updated { id: Uuid, previous_status: String },
}

impl UpsertOutcome {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Created(id) => *id,
            Self::Updated { id, .. } => *id,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated { .. } => "updated",
        }
    }
}

/// Insert-or-update keyed on the unique external_id constraint.
///
/// The prior-status read and the write share one transaction, but the
/// write itself is `ON CONFLICT DO UPDATE`: two concurrent deliveries for
/// the same new external_id cannot both insert — the loser's INSERT turns
/// into the update arm. Gateways resend full snapshots, so last write
/// winning is correct. `created_at` is set once by the insert default;
/// `updated_at` is refreshed on every update.
pub async fn upsert_order(pool: &PgPool, order: &NewOrder) -> Result<UpsertOutcome, IngestError> {
    let mut tx = pool.begin().await?;

    let existing: Option<(Uuid, String)> =
        sqlx::query_as("SELECT id, status FROM orders WHERE external_id = $1")
            .bind(&order.external_id)
            .fetch_optional(&mut *tx)
            .await?;

    let items = serde_json::to_value(&order.items)?;

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO orders (
            id, external_id,
            customer_name, customer_email, customer_phone, customer_document,
            customer_birth_date, customer_gender,
            amount, paid_amount, discount_amount, tax_amount,
            shipping_amount, refund_amount,
            payment_method, payment_gateway, transaction_id, installments,
            status, status_class, paid_at, due_date,
            cancelled_at, cancelled_reason, expired_at, refund_reason,
            address_street, address_number, address_complement, address_neighborhood,
            address_city, address_state, address_zip_code, address_country,
            billing_address_street, billing_address_number, billing_address_complement,
            billing_address_neighborhood, billing_address_city, billing_address_state,
            billing_address_zip_code, billing_address_country,
            pix_key, barcode, payment_link, secure_url, qr_code,
            items, metadata, notes, tags,
            webhook_source, webhook_event
        )
        VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
            $11, $12, $13, $14, $15, $16, $17, $18, $19, $20,
            $21, $22, $23, $24, $25, $26, $27, $28, $29, $30,
            $31, $32, $33, $34, $35, $36, $37, $38, $39, $40,
            $41, $42, $43, $44, $45, $46, $47, $48, $49, $50,
            $51, $52, $53
        )
        ON CONFLICT (external_id) DO UPDATE SET
            customer_name = EXCLUDED.customer_name,
            customer_email = EXCLUDED.customer_email,
            customer_phone = EXCLUDED.customer_phone,
            customer_document = EXCLUDED.customer_document,
            customer_birth_date = EXCLUDED.customer_birth_date,
            customer_gender = EXCLUDED.customer_gender,
            amount = EXCLUDED.amount,
            paid_amount = EXCLUDED.paid_amount,
            discount_amount = EXCLUDED.discount_amount,
            tax_amount = EXCLUDED.tax_amount,
            shipping_amount = EXCLUDED.shipping_amount,
            refund_amount = EXCLUDED.refund_amount,
            payment_method = EXCLUDED.payment_method,
            payment_gateway = EXCLUDED.payment_gateway,
            transaction_id = EXCLUDED.transaction_id,
            installments = EXCLUDED.installments,
            status = EXCLUDED.status,
            status_class = EXCLUDED.status_class,
            paid_at = EXCLUDED.paid_at,
            due_date = EXCLUDED.due_date,
            cancelled_at = EXCLUDED.cancelled_at,
            cancelled_reason = EXCLUDED.cancelled_reason,
            expired_at = EXCLUDED.expired_at,
            refund_reason = EXCLUDED.refund_reason,
            address_street = EXCLUDED.address_street,
            address_number = EXCLUDED.address_number,
            address_complement = EXCLUDED.address_complement,
            address_neighborhood = EXCLUDED.address_neighborhood,
            address_city = EXCLUDED.address_city,
            address_state = EXCLUDED.address_state,
            address_zip_code = EXCLUDED.address_zip_code,
            address_country = EXCLUDED.address_country,
            billing_address_street = EXCLUDED.billing_address_street,
            billing_address_number = EXCLUDED.billing_address_number,
            billing_address_complement = EXCLUDED.billing_address_complement,
            billing_address_neighborhood = EXCLUDED.billing_address_neighborhood,
            billing_address_city = EXCLUDED.billing_address_city,
            billing_address_state = EXCLUDED.billing_address_state,
            billing_address_zip_code = EXCLUDED.billing_address_zip_code,
            billing_address_country = EXCLUDED.billing_address_country,
            pix_key = EXCLUDED.pix_key,
            barcode = EXCLUDED.barcode,
            payment_link = EXCLUDED.payment_link,
            secure_url = EXCLUDED.secure_url,
            qr_code = EXCLUDED.qr_code,
            items = EXCLUDED.items,
            metadata = EXCLUDED.metadata,
            notes = EXCLUDED.notes,
            tags = EXCLUDED.tags,
            webhook_source = EXCLUDED.webhook_source,
            webhook_event = EXCLUDED.webhook_event,
            updated_at = now()
        RETURNING id
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(&order.external_id)
    .bind(&order.customer_name)
    .bind(&order.customer_email)
    .bind(&order.customer_phone)
    .bind(&order.customer_document)
    .bind(&order.customer_birth_date)
    .bind(&order.customer_gender)
    .bind(order.amount)
    .bind(order.paid_amount)
    .bind(order.discount_amount)
    .bind(order.tax_amount)
    .bind(order.shipping_amount)
    .bind(order.refund_amount)
    .bind(&order.payment_method)
    .bind(&order.payment_gateway)
    .bind(&order.transaction_id)
    .bind(order.installments)
    .bind(&order.status)
    .bind(order.status_class.as_str())
    .bind(order.paid_at)
    .bind(order.due_date)
    .bind(order.cancelled_at)
    .bind(&order.cancelled_reason)
    .bind(order.expired_at)
    .bind(&order.refund_reason)
    .bind(&order.shipping_address.street)
    .bind(&order.shipping_address.number)
    .bind(&order.shipping_address.complement)
    .bind(&order.shipping_address.neighborhood)
    .bind(&order.shipping_address.city)
    .bind(&order.shipping_address.state)
    .bind(&order.shipping_address.zip_code)
    .bind(&order.shipping_address.country)
    .bind(&order.billing_address.street)
    .bind(&order.billing_address.number)
    .bind(&order.billing_address.complement)
    .bind(&order.billing_address.neighborhood)
    .bind(&order.billing_address.city)
    .bind(&order.billing_address.state)
    .bind(&order.billing_address.zip_code)
    .bind(&order.billing_address.country)
    .bind(&order.pix_key)
    .bind(&order.barcode)
    .bind(&order.payment_link)
    .bind(&order.secure_url)
    .bind(&order.qr_code)
    .bind(items)
    .bind(&order.metadata)
    .bind(&order.notes)
    .bind(&order.tags)
    .bind(&order.webhook_source)
    .bind(&order.webhook_event)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    match existing {
        Some((_, previous_status)) => Ok(UpsertOutcome::Updated {
            id,
            previous_status,
        }),
        None => Ok(UpsertOutcome::Created(id)),
    }
}
