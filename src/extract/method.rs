use {
    super::{fields, paths},
    serde_json::Value,
};

/// Map the payload's free-text payment method onto the closed vocabulary
/// `pix` / `cartao_credito` / `cartao_debito` / `boleto`, passing anything
/// unrecognized through as-is (`outros` when nothing was found at all).
///
/// The credit-card check runs before the debit check on purpose: a string
/// carrying both markers ("credit_debit_card") resolves to credit.
pub fn normalize_payment_method(body: &Value) -> String {
    let raw = fields::first_text_where(body, paths::PAYMENT_METHOD, |t| {
        t != "webhook" && t != "transaction"
    })
    .or_else(|| fields::first_text(body, &["type"]))
    .unwrap_or_default();

    let lower = raw.to_lowercase();
    if lower.contains("pix") {
        "pix".to_string()
    } else if ["card", "cartao", "credit", "credito"]
        .iter()
        .any(|m| lower.contains(m))
    {
        "cartao_credito".to_string()
    } else if lower.contains("debit") || lower.contains("debito") {
        "cartao_debito".to_string()
    } else if lower.contains("boleto") {
        "boleto".to_string()
    } else if raw.is_empty() {
        tracing::debug!("no payment method in payload, defaulting to outros");
        "outros".to_string()
    } else {
        tracing::debug!(raw = %raw, "unrecognized payment method, passing through");
        raw
    }
}
