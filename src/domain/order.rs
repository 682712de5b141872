use {
    super::status::StatusClass,
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
};

/// One product/quantity/price entry within an order. The extractor
/// guarantees every order carries at least one of these, so the
/// top-products aggregation downstream never sees an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub sku: String,
    pub category: String,
}

/// Street-level address block, used for both delivery and billing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

/// Canonical order record produced by the builder, ready for upsert.
/// Every field is already normalized: amounts coerced (cents heuristic
/// applied exactly once, here), payment method mapped onto the closed
/// vocabulary, status classified, line items guaranteed non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub external_id: String,

    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub customer_document: Option<String>,
    pub customer_birth_date: Option<String>,
    pub customer_gender: Option<String>,

    pub amount: f64,
    pub paid_amount: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub refund_amount: f64,

    pub payment_method: String,
    pub payment_gateway: Option<String>,
    pub transaction_id: Option<String>,
    pub installments: i32,

    pub status: String,
    pub status_class: StatusClass,
    pub paid_at: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancelled_reason: Option<String>,
    pub expired_at: Option<DateTime<Utc>>,
    pub refund_reason: Option<String>,

    pub shipping_address: Address,
    pub billing_address: Address,

    pub pix_key: Option<String>,
    pub barcode: Option<String>,
    pub payment_link: Option<String>,
    pub secure_url: Option<String>,
    pub qr_code: Option<String>,

    pub items: Vec<LineItem>,
    pub metadata: serde_json::Value,
    pub notes: Option<String>,
    pub tags: Option<serde_json::Value>,

    pub webhook_source: String,
    pub webhook_event: String,
}
