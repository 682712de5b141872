//! Generic first-match-wins resolution over dotted key-paths.
//!
//! Every helper here is total: a missing key, a null, or a wrong-shaped
//! value degrades to `None` (or the caller's fallback), never to an error.
//! Strict validation would drop webhooks, and a dropped webhook is a lost
//! sale record.

use {
    chrono::{DateTime, NaiveDate, NaiveDateTime, Utc},
    serde_json::Value,
};

/// Walk a dotted path (`"data.customer.name"`) into a JSON tree.
pub fn lookup<'a>(body: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(body, |node, seg| node.get(seg))
}

/// Render a scalar JSON value as trimmed text. Objects and arrays are not
/// text; null and empty strings resolve to nothing.
pub fn text_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// First candidate path holding usable text.
pub fn first_text(body: &Value, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|p| lookup(body, p).and_then(text_value))
}

/// First candidate path whose text also passes `accept`. Used by fields
/// with known placeholder sentinels (customer name, email, method).
pub fn first_text_where(
    body: &Value,
    paths: &[&str],
    accept: impl Fn(&str) -> bool,
) -> Option<String> {
    paths
        .iter()
        .filter_map(|p| lookup(body, p).and_then(text_value))
        .find(|t| accept(t))
}

/// First candidate path present at all (any value shape).
pub fn first_value<'a>(body: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|p| lookup(body, p))
}

/// Address field under any of several base objects
/// (e.g. `address.street`, then `customer.address.street`).
pub fn address_field(body: &Value, bases: &[&str], field: &str) -> Option<String> {
    bases
        .iter()
        .find_map(|base| lookup(body, &format!("{base}.{field}")).and_then(text_value))
}

/// First candidate path holding a parseable timestamp. Gateways send
/// RFC 3339, naive datetimes, and bare dates; anything else is dropped.
pub fn first_datetime(body: &Value, paths: &[&str]) -> Option<DateTime<Utc>> {
    paths
        .iter()
        .filter_map(|p| lookup(body, p).and_then(text_value))
        .find_map(|t| parse_datetime(&t))
}

/// Last six characters of an id, used to seed synthesized customer and
/// product placeholders.
pub fn id_suffix(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    chars[chars.len().saturating_sub(6)..].iter().collect()
}

pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_walks_nested_objects() {
        let body = json!({"data": {"customer": {"name": "Ana"}}});
        assert_eq!(
            lookup(&body, "data.customer.name"),
            Some(&json!("Ana"))
        );
        assert_eq!(lookup(&body, "data.customer.email"), None);
        assert_eq!(lookup(&body, "missing.path"), None);
    }

    #[test]
    fn first_text_takes_priority_order() {
        let body = json!({"customer_name": "Fallback", "customer": {"name": "Primary"}});
        let got = first_text(&body, &["customer.name", "customer_name"]);
        assert_eq!(got.as_deref(), Some("Primary"));
    }

    #[test]
    fn blank_and_null_candidates_fall_through() {
        let body = json!({"a": null, "b": "   ", "c": "ok"});
        assert_eq!(first_text(&body, &["a", "b", "c"]).as_deref(), Some("ok"));
    }

    #[test]
    fn numbers_render_as_text() {
        let body = json!({"id": 12345});
        assert_eq!(first_text(&body, &["id"]).as_deref(), Some("12345"));
    }

    #[test]
    fn first_text_where_rejects_sentinels() {
        let body = json!({"a": "Cliente Webhook", "b": "Maria"});
        let got = first_text_where(&body, &["a", "b"], |t| t != "Cliente Webhook");
        assert_eq!(got.as_deref(), Some("Maria"));
    }

    #[test]
    fn datetime_formats() {
        assert!(parse_datetime("2024-06-01T10:30:00Z").is_some());
        assert!(parse_datetime("2024-06-01T10:30:00.123").is_some());
        assert!(parse_datetime("2024-06-01 10:30:00").is_some());
        assert!(parse_datetime("2024-06-01").is_some());
        assert!(parse_datetime("yesterday").is_none());
    }
}
