use {
    super::{fields, paths, value::coerce_amount},
    crate::domain::order::LineItem,
    serde_json::Value,
};

const ITEM_NAME: &[&str] = &[
    "name",
    "product_name",
    "title",
    "description",
    "item_name",
    "product.name",
    "product.title",
];
const ITEM_QUANTITY: &[&str] = &["quantity", "qty", "amount"];
const ITEM_PRICE: &[&str] = &["price", "unit_price", "value", "amount", "product.price"];
const ITEM_SKU: &[&str] = &["sku", "product_id", "id", "product.sku"];
const ITEM_CATEGORY: &[&str] = &["category", "product.category"];

/// Locate the order's line items. Three strategies, first success wins:
/// a structured array anywhere a gateway plausibly puts one, then a single
/// item synthesized from a top-level product name, then a generic
/// placeholder keyed by the order id. The result is never empty.
pub fn extract_line_items(body: &Value, external_id: &str, order_amount: f64) -> Vec<LineItem> {
    for path in paths::ITEM_ARRAYS {
        if let Some(Value::Array(raw_items)) = fields::lookup(body, path) {
            if !raw_items.is_empty() {
                tracing::debug!(path, count = raw_items.len(), "line items found");
                return raw_items.iter().map(map_item).collect();
            }
        }
    }

    // No structured array: a bare product name plus the order total still
    // makes a usable single-line order.
    let name = fields::first_text_where(body, paths::PRODUCT_NAME, |t| t != "Produto Webhook");
    if let Some(name) = name {
        tracing::debug!(name = %name, "single item synthesized from product name");
        return vec![LineItem {
            name,
            quantity: 1,
            price: order_amount,
            sku: fields::first_text(body, &["sku", "data.sku"]).unwrap_or_default(),
            category: fields::first_text(body, &["category", "data.category"]).unwrap_or_default(),
        }];
    }

    let suffix = fields::id_suffix(external_id);
    vec![LineItem {
        name: format!("Produto {suffix}"),
        quantity: 1,
        price: order_amount,
        sku: external_id.to_string(),
        category: "Geral".to_string(),
    }]
}

fn map_item(raw: &Value) -> LineItem {
    let quantity = ITEM_QUANTITY
        .iter()
        .map(|p| coerce_amount(fields::lookup(raw, p)))
        .find(|q| *q > 0.0)
        .unwrap_or(1.0);

    let price = ITEM_PRICE
        .iter()
        .map(|p| coerce_amount(fields::lookup(raw, p)))
        .find(|v| *v > 0.0)
        .unwrap_or(0.0);

    LineItem {
        name: fields::first_text(raw, ITEM_NAME).unwrap_or_else(|| "Produto sem nome".to_string()),
        quantity: (quantity.floor() as i32).max(1),
        price,
        sku: fields::first_text(raw, ITEM_SKU).unwrap_or_default(),
        category: fields::first_text(raw, ITEM_CATEGORY).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_array_maps_each_element() {
        let body = json!({
            "order": {"items": [
                {"name": "Curso A", "quantity": 2, "price": 197.0, "sku": "CA-1"},
                {"title": "Bônus", "unit_price": 47.0}
            ]}
        });
        let items = extract_line_items(&body, "PED-123456", 441.0);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Curso A");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].price, 197.0);
        assert_eq!(items[0].sku, "CA-1");
        assert_eq!(items[1].name, "Bônus");
        assert_eq!(items[1].quantity, 1);
        assert_eq!(items[1].price, 47.0);
    }

    #[test]
    fn nameless_element_gets_placeholder_name() {
        let body = json!({"items": [{"price": 10.0}]});
        let items = extract_line_items(&body, "X", 10.0);
        assert_eq!(items[0].name, "Produto sem nome");
    }

    #[test]
    fn top_level_product_name_synthesizes_one_item() {
        let body = json!({"product_name": "Mentoria", "amount": 997.0});
        let items = extract_line_items(&body, "PED-1", 997.0);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Mentoria");
        assert_eq!(items[0].price, 997.0);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn empty_payload_yields_generic_placeholder() {
        let items = extract_line_items(&json!({}), "WH-1717171717-a1b2c3d4e", 0.0);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Produto 2c3d4e");
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].category, "Geral");
        assert_eq!(items[0].sku, "WH-1717171717-a1b2c3d4e");
    }

    #[test]
    fn empty_array_falls_through() {
        let body = json!({"items": [], "product_name": "Plano Anual"});
        let items = extract_line_items(&body, "PED-1", 120.0);
        assert_eq!(items[0].name, "Plano Anual");
    }

    #[test]
    fn sentinel_product_name_is_rejected() {
        let body = json!({"product_name": "Produto Webhook"});
        let items = extract_line_items(&body, "ABCDEF", 0.0);
        assert_eq!(items[0].name, "Produto ABCDEF");
    }
}
