use serde_json::Value;

/// Coerce an arbitrary incoming value into a non-negative amount.
///
/// Numbers pass through; numeric strings are cleaned of currency symbols
/// and locale punctuation first (`"R$ 45,90"` → 45.90). Integer values of
/// 1000 or more are assumed to be minor-unit (cents) encodings from
/// gateways that report centavos, and are divided by 100.
///
/// Known-lossy edge: a genuine integer R$ 1000 order is indistinguishable
/// from 100000 centavos and gets divided. This is the documented heuristic
/// limitation; it is applied here, at ingestion, and nowhere else.
pub fn coerce_amount(raw: Option<&Value>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    match raw {
        Value::Number(n) => minor_unit_heuristic(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
                .collect();
            let normalized = cleaned.replace(',', ".");
            match normalized.parse::<f64>() {
                Ok(parsed) => minor_unit_heuristic(parsed),
                Err(_) => 0.0,
            }
        }
        _ => 0.0,
    }
}

fn minor_unit_heuristic(value: f64) -> f64 {
    if value >= 1000.0 && value.fract() == 0.0 {
        tracing::debug!(value, converted = value / 100.0, "amount taken as minor units");
        (value / 100.0).max(0.0)
    } else {
        value.max(0.0)
    }
}
