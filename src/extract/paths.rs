//! Candidate key-path tables for every logical order field.
//!
//! Payment gateways disagree wildly on payload shape, so each field is
//! resolved by walking a fixed, hand-ordered list of dotted paths and
//! taking the first usable hit. Keeping the lists declarative (one table
//! per field, consumed by the generic resolver in `fields`) is what keeps
//! the dozens of lookups consistent with each other.

pub const EXTERNAL_ID: &[&str] = &[
    "external_id",
    "id",
    "order_id",
    "transaction_id",
    "payment_id",
    "reference_id",
];

pub const AMOUNT: &[&str] = &[
    "data.amount",
    "data.value",
    "data.total",
    "amount",
    "value",
    "total",
    "price",
    "total_amount",
    "order_value",
    "transaction_amount",
];

pub const CUSTOMER_NAME: &[&str] = &[
    "data.customer.name",
    "data.customer_name",
    "data.payer.name",
    "customer.name",
    "customer_name",
    "payer.name",
    "buyer.name",
    "user.name",
    "name",
    "customer.full_name",
    "full_name",
];

pub const CUSTOMER_EMAIL: &[&str] = &[
    "data.customer.email",
    "data.customer_email",
    "data.payer.email",
    "customer.email",
    "customer_email",
    "payer.email",
    "buyer.email",
    "user.email",
    "email",
];

pub const CUSTOMER_PHONE: &[&str] = &[
    "data.customer.phone",
    "data.customer_phone",
    "customer.phone",
    "customer_phone",
    "payer.phone",
    "phone",
];

pub const CUSTOMER_DOCUMENT: &[&str] = &[
    "data.customer.document",
    "data.customer_document",
    "customer.document",
    "customer_document",
    "payer.document",
    "document",
];

pub const CUSTOMER_BIRTH_DATE: &[&str] = &[
    "data.customer.birth_date",
    "customer.birth_date",
    "customer_birth_date",
    "payer.birth_date",
];

pub const CUSTOMER_GENDER: &[&str] = &[
    "data.customer.gender",
    "customer.gender",
    "customer_gender",
    "payer.gender",
];

pub const PAID_AMOUNT: &[&str] = &["data.paid_amount", "paid_amount"];
pub const DISCOUNT_AMOUNT: &[&str] = &["data.discount_amount", "discount_amount", "discount"];
pub const TAX_AMOUNT: &[&str] = &["data.tax_amount", "tax_amount", "tax"];
pub const SHIPPING_AMOUNT: &[&str] = &["data.shipping_amount", "shipping_amount", "shipping"];
pub const REFUND_AMOUNT: &[&str] = &["data.refund_amount", "refund_amount", "refund"];

pub const PAYMENT_METHOD: &[&str] = &[
    "data.payment_method",
    "data.paymentMethod",
    "data.method",
    "payment_method",
    "paymentMethod",
    "method",
    "payment_type",
    "type",
    "payment.method",
    "payment.type",
];

pub const PAYMENT_GATEWAY: &[&str] =
    &["data.payment_gateway", "payment_gateway", "gateway", "provider"];

pub const TRANSACTION_ID: &[&str] = &[
    "data.transaction_id",
    "transaction_id",
    "gateway_transaction_id",
    "tid",
];

pub const INSTALLMENTS: &[&str] = &["data.installments", "installments", "parcelas"];

pub const STATUS: &[&str] = &[
    "data.status",
    "data.payment_status",
    "status",
    "payment_status",
    "order_status",
    "state",
    "payment.status",
];

pub const PAID_AT: &[&str] = &["data.paid_at", "paid_at"];
pub const DUE_DATE: &[&str] = &["data.due_date", "due_date"];
pub const CANCELLED_AT: &[&str] = &["data.cancelled_at", "cancelled_at"];
pub const CANCELLED_REASON: &[&str] =
    &["data.cancelled_reason", "cancelled_reason", "cancel_reason"];
pub const EXPIRED_AT: &[&str] = &["data.expired_at", "expired_at"];
pub const REFUND_REASON: &[&str] = &["data.refund_reason", "refund_reason"];

pub const PIX_KEY: &[&str] = &["data.pix_key", "pix_key", "pix.key", "qr_code_key"];
pub const BARCODE: &[&str] = &["data.barcode", "barcode", "boleto.barcode", "payment_code"];
pub const PAYMENT_LINK: &[&str] = &[
    "data.payment_link",
    "payment_link",
    "checkout_url",
    "payment_url",
];
pub const SECURE_URL: &[&str] = &["data.secure_url", "secure_url", "checkout_url", "payment_url"];
pub const QR_CODE: &[&str] = &["data.qr_code", "qr_code", "pix_qr_code", "qr_code_base64"];

pub const NOTES: &[&str] = &["data.notes", "notes", "description", "comments"];

pub const WEBHOOK_SOURCE: &[&str] = &["source", "webhook_source"];
pub const WEBHOOK_EVENT: &[&str] = &["event", "webhook_event"];

/// Base objects under which a delivery address may live; the field name
/// (`street`, `city`, ...) is appended by the resolver.
pub const SHIPPING_ADDRESS_BASES: &[&str] = &["address", "customer.address", "payer.address"];
pub const BILLING_ADDRESS_BASES: &[&str] = &["billing_address", "billing"];

/// Places a structured line-items array may hide.
pub const ITEM_ARRAYS: &[&str] = &[
    "items",
    "products",
    "data.items",
    "data.products",
    "order.items",
    "order.products",
    "cart.items",
    "line_items",
    "order_items",
];

/// Top-level product-name fields used when no array is present.
pub const PRODUCT_NAME: &[&str] = &[
    "product_name",
    "data.product_name",
    "item_name",
    "data.item_name",
    "title",
    "data.title",
    "description",
    "data.description",
];
