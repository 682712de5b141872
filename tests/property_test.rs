use pedido_sync::domain::status::StatusClass;
use pedido_sync::extract::method::normalize_payment_method;
use pedido_sync::extract::value::coerce_amount;
use pedido_sync::services::order_builder::build_order;
use proptest::prelude::*;
use serde_json::json;

/// Arbitrary scalar-ish JSON values, the kind gateways actually send.
fn arb_scalar() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        (-1e12f64..1e12).prop_map(serde_json::Value::from),
        ".{0,40}".prop_map(serde_json::Value::from),
    ]
}

/// Shallow payload objects with random keys and scalar values.
fn arb_payload() -> impl Strategy<Value = serde_json::Value> {
    prop::collection::hash_map("[a-z_.]{1,20}", arb_scalar(), 0..12)
        .prop_map(|m| serde_json::Value::Object(m.into_iter().collect()))
}

proptest! {
    /// Coercion is total and never yields a negative or non-finite amount.
    #[test]
    fn coerced_amounts_are_non_negative_and_finite(value in arb_scalar()) {
        let amount = coerce_amount(Some(&value));
        prop_assert!(amount >= 0.0, "got {amount} for {value}");
        prop_assert!(amount.is_finite());
    }

    /// Integer minor-unit inputs always land on the divided value.
    #[test]
    fn integer_minor_units_divide_by_100(cents in 1000i64..10_000_000) {
        let amount = coerce_amount(Some(&json!(cents)));
        prop_assert_eq!(amount, cents as f64 / 100.0);
    }

    /// as_str → classify is stable: a stored class re-reads as itself.
    #[test]
    fn status_class_roundtrips_through_storage(raw in ".{0,30}") {
        let class = StatusClass::classify(&raw);
        prop_assert_eq!(StatusClass::try_from(class.as_str()).unwrap(), class);
    }

    /// The normalizer emits the closed vocabulary or passes raw text through,
    /// never an empty string.
    #[test]
    fn payment_method_is_never_empty(payload in arb_payload()) {
        let method = normalize_payment_method(&payload);
        prop_assert!(!method.is_empty());
    }

    /// The builder is total: any shallow payload yields a displayable,
    /// persistable record with the hard invariants intact.
    #[test]
    fn builder_invariants_hold_for_arbitrary_payloads(payload in arb_payload()) {
        let order = build_order(&payload, chrono::Utc::now());
        prop_assert!(!order.external_id.is_empty());
        prop_assert!(!order.customer_name.is_empty());
        prop_assert!(order.customer_email.contains('@'));
        prop_assert!(order.amount >= 0.0);
        prop_assert!(order.paid_amount >= 0.0);
        prop_assert!(order.installments >= 1);
        prop_assert!(!order.items.is_empty());
        for item in &order.items {
            prop_assert!(item.quantity >= 1);
            prop_assert!(item.price >= 0.0);
            prop_assert!(!item.name.is_empty());
        }
    }
}
