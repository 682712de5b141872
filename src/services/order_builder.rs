//! Folds one raw gateway payload into the canonical order record.
//!
//! Pure: takes the parsed body and the processing timestamp, performs no
//! I/O, and never fails — every extraction miss degrades to a default so
//! a webhook is never dropped for being incomplete.

use {
    crate::domain::{
        order::{Address, NewOrder},
        status::StatusClass,
    },
    crate::extract::{fields, items, method, paths, value::coerce_amount},
    chrono::{DateTime, Utc},
    serde_json::Value,
    uuid::Uuid,
};

pub fn build_order(body: &Value, now: DateTime<Utc>) -> NewOrder {
    // external_id first: it seeds the synthesized customer name/email and
    // the placeholder product when the payload gives us nothing usable.
    let external_id = fields::first_text(body, paths::EXTERNAL_ID)
        .unwrap_or_else(|| synthesize_external_id(now));
    let suffix = fields::id_suffix(&external_id);

    tracing::debug!(external_id = %external_id, "building order from payload");

    let amount = extract_amount(body);

    let customer_name = fields::first_text_where(body, paths::CUSTOMER_NAME, |t| {
        t != "Cliente Webhook" && t.chars().count() > 2
    })
    .unwrap_or_else(|| format!("Cliente {suffix}"));

    let customer_email = fields::first_text_where(body, paths::CUSTOMER_EMAIL, |t| {
        t.contains('@') && t != "webhook@exemplo.com"
    })
    .unwrap_or_else(|| format!("cliente.{}@exemplo.com", suffix.to_lowercase()));

    let status = extract_status(body, amount);
    let status_class = StatusClass::classify(&status);

    // Explicit timestamp wins; otherwise a textually-paid status is
    // stamped with the processing time. Content-based default, same as
    // the status fallback above.
    let paid_at = fields::first_datetime(body, paths::PAID_AT).or_else(|| {
        status.to_lowercase().contains("paid").then_some(now)
    });

    let line_items = items::extract_line_items(body, &external_id, amount);

    let paid_amount = match coerce_amount(fields::first_value(body, paths::PAID_AMOUNT)) {
        v if v > 0.0 => v,
        _ => amount,
    };

    let installments =
        (coerce_amount(fields::first_value(body, paths::INSTALLMENTS)).floor() as i32).max(1);

    NewOrder {
        customer_name,
        customer_email,
        customer_phone: fields::first_text(body, paths::CUSTOMER_PHONE),
        customer_document: fields::first_text(body, paths::CUSTOMER_DOCUMENT),
        customer_birth_date: fields::first_text(body, paths::CUSTOMER_BIRTH_DATE),
        customer_gender: fields::first_text(body, paths::CUSTOMER_GENDER),

        amount,
        paid_amount,
        discount_amount: coerce_amount(fields::first_value(body, paths::DISCOUNT_AMOUNT)),
        tax_amount: coerce_amount(fields::first_value(body, paths::TAX_AMOUNT)),
        shipping_amount: coerce_amount(fields::first_value(body, paths::SHIPPING_AMOUNT)),
        refund_amount: coerce_amount(fields::first_value(body, paths::REFUND_AMOUNT)),

        payment_method: method::normalize_payment_method(body),
        payment_gateway: fields::first_text(body, paths::PAYMENT_GATEWAY),
        transaction_id: fields::first_text(body, paths::TRANSACTION_ID),
        installments,

        status_class,
        paid_at,
        due_date: fields::first_datetime(body, paths::DUE_DATE),
        cancelled_at: fields::first_datetime(body, paths::CANCELLED_AT),
        cancelled_reason: fields::first_text(body, paths::CANCELLED_REASON),
        expired_at: fields::first_datetime(body, paths::EXPIRED_AT),
        refund_reason: fields::first_text(body, paths::REFUND_REASON),
        status,

        shipping_address: extract_address(body, paths::SHIPPING_ADDRESS_BASES, Some("Brasil")),
        billing_address: extract_address(body, paths::BILLING_ADDRESS_BASES, None),

        pix_key: fields::first_text(body, paths::PIX_KEY),
        barcode: fields::first_text(body, paths::BARCODE),
        payment_link: fields::first_text(body, paths::PAYMENT_LINK),
        secure_url: fields::first_text(body, paths::SECURE_URL),
        qr_code: fields::first_text(body, paths::QR_CODE),

        items: line_items,
        // Full-fidelity fallback: when the gateway sends no metadata we
        // keep the entire raw payload for forensics.
        metadata: body
            .get("metadata")
            .cloned()
            .unwrap_or_else(|| body.clone()),
        notes: fields::first_text(body, paths::NOTES),
        tags: body.get("tags").filter(|t| !t.is_null()).cloned(),

        webhook_source: fields::first_text(body, paths::WEBHOOK_SOURCE)
            .unwrap_or_else(|| "unknown".to_string()),
        webhook_event: fields::first_text(body, paths::WEBHOOK_EVENT)
            .unwrap_or_else(|| "order_update".to_string()),

        external_id,
    }
}

/// First amount candidate that coerces to something positive. Presence is
/// not enough: `{"amount": 0, "total": 49.9}` should resolve to 49.9.
fn extract_amount(body: &Value) -> f64 {
    paths::AMOUNT
        .iter()
        .filter_map(|p| fields::lookup(body, p))
        .map(|v| coerce_amount(Some(v)))
        .find(|v| *v > 0.0)
        .unwrap_or(0.0)
}

/// First status candidate that is not the idle default "pending"; when no
/// gateway-asserted status exists, a positive amount is read as paid.
fn extract_status(body: &Value, amount: f64) -> String {
    fields::first_text_where(body, paths::STATUS, |t| t != "pending").unwrap_or_else(|| {
        if amount > 0.0 {
            "paid".to_string()
        } else {
            "pending".to_string()
        }
    })
}

fn extract_address(body: &Value, bases: &[&str], default_country: Option<&str>) -> Address {
    Address {
        street: fields::address_field(body, bases, "street"),
        number: fields::address_field(body, bases, "number"),
        complement: fields::address_field(body, bases, "complement"),
        neighborhood: fields::address_field(body, bases, "neighborhood"),
        city: fields::address_field(body, bases, "city"),
        state: fields::address_field(body, bases, "state"),
        zip_code: fields::address_field(body, bases, "zip_code"),
        country: fields::address_field(body, bases, "country")
            .or_else(|| default_country.map(str::to_string)),
    }
}

/// `WH-<millis>-<9 alnum>`: synthesized natural key for payloads carrying
/// no id at all. Stable for the lifetime of one delivery, so the upsert
/// lookup and the fallback seeds all agree.
fn synthesize_external_id(now: DateTime<Utc>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("WH-{}-{}", now.timestamp_millis(), &random[..9])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        "2024-06-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn full_payload_extracts_every_field() {
        let body = json!({
            "external_id": "X1",
            "amount": 10000,
            "customer": {"name": "Ana", "email": "ana@x.com", "phone": "+5511999"},
            "payment_method": "pix",
            "status": "paid",
            "gateway": "pagarme",
            "installments": 3,
            "address": {"street": "Rua A", "city": "São Paulo"}
        });
        let order = build_order(&body, now());
        assert_eq!(order.external_id, "X1");
        assert_eq!(order.amount, 100.0); // minor-unit heuristic
        assert_eq!(order.customer_name, "Ana");
        assert_eq!(order.customer_email, "ana@x.com");
        assert_eq!(order.customer_phone.as_deref(), Some("+5511999"));
        assert_eq!(order.payment_method, "pix");
        assert_eq!(order.status, "paid");
        assert_eq!(order.status_class, StatusClass::Paid);
        assert_eq!(order.payment_gateway.as_deref(), Some("pagarme"));
        assert_eq!(order.installments, 3);
        assert_eq!(order.shipping_address.street.as_deref(), Some("Rua A"));
        assert_eq!(order.shipping_address.country.as_deref(), Some("Brasil"));
        assert!(order.paid_at.is_some());
    }

    #[test]
    fn empty_payload_degrades_to_displayable_record() {
        let order = build_order(&json!({}), now());
        assert!(order.external_id.starts_with("WH-"));
        let suffix = fields::id_suffix(&order.external_id);
        assert_eq!(order.customer_name, format!("Cliente {suffix}"));
        assert_eq!(
            order.customer_email,
            format!("cliente.{}@exemplo.com", suffix.to_lowercase())
        );
        assert!(order.customer_email.contains('@'));
        assert_eq!(order.amount, 0.0);
        assert_eq!(order.status, "pending");
        assert_eq!(order.status_class, StatusClass::Pending);
        assert_eq!(order.payment_method, "outros");
        assert_eq!(order.installments, 1);
        assert_eq!(order.items.len(), 1);
        assert!(order.paid_at.is_none());
        assert_eq!(order.webhook_source, "unknown");
        assert_eq!(order.webhook_event, "order_update");
    }

    #[test]
    fn synthesized_id_matches_expected_shape() {
        let order = build_order(&json!({}), now());
        let mut parts = order.external_id.splitn(3, '-');
        assert_eq!(parts.next(), Some("WH"));
        let millis = parts.next().unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        let rand = parts.next().unwrap();
        assert_eq!(rand.len(), 9);
        assert!(rand.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn status_defaults_to_paid_when_amount_present() {
        let order = build_order(&json!({"amount": 50.0}), now());
        assert_eq!(order.status, "paid");
        // Content-based paid status still stamps paid_at.
        assert_eq!(order.paid_at, Some(now()));
    }

    #[test]
    fn explicit_non_pending_status_wins() {
        let body = json!({"status": "pending", "data": {"payment_status": "refunded"}});
        let order = build_order(&body, now());
        assert_eq!(order.status, "refunded");
        assert_eq!(order.status_class, StatusClass::Cancelled);
        assert!(order.paid_at.is_none());
    }

    #[test]
    fn paid_amount_defaults_to_amount() {
        let order = build_order(&json!({"amount": 200.0}), now());
        assert_eq!(order.paid_amount, 200.0);

        let order = build_order(&json!({"amount": 200.0, "paid_amount": 180.0}), now());
        assert_eq!(order.paid_amount, 180.0);
    }

    #[test]
    fn metadata_falls_back_to_whole_payload() {
        let body = json!({"amount": 10, "metadata": {"utm": "x"}});
        assert_eq!(build_order(&body, now()).metadata, json!({"utm": "x"}));

        let body = json!({"amount": 10});
        assert_eq!(build_order(&body, now()).metadata, body);
    }

    #[test]
    fn short_and_sentinel_names_are_rejected() {
        let body = json!({"external_id": "PED-42", "name": "ab", "customer_name": "Cliente Webhook"});
        let order = build_order(&body, now());
        assert_eq!(order.customer_name, "Cliente PED-42");
    }

    #[test]
    fn billing_address_has_no_country_default() {
        let order = build_order(&json!({}), now());
        assert_eq!(order.billing_address.country, None);

        let body = json!({"billing": {"city": "Recife", "country": "Brasil"}});
        let order = build_order(&body, now());
        assert_eq!(order.billing_address.city.as_deref(), Some("Recife"));
        assert_eq!(order.billing_address.country.as_deref(), Some("Brasil"));
    }
}
