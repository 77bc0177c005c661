//! Integration tests for field resolution
//!
//! These tests verify that:
//! - Required keys missing from a record fail the record
//! - Optional keys missing from a record resolve to null
//! - Deprecated fields never read the record
//! - Currency and timestamp transforms are exact
//! - Declaration errors surface when the field is built

use serde_json::{Value, json};
use std::str::FromStr;
use stripe_fields::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn field(name: &str, kind: FieldKind, options: FieldOptions) -> FieldDescriptor {
    FieldDescriptor::new(name, kind, options).expect("valid field")
}

const ALL_KINDS: [FieldKind; 10] = [
    FieldKind::Currency,
    FieldKind::Boolean,
    FieldKind::NullBoolean,
    FieldKind::Char,
    FieldKind::Text,
    FieldKind::Id,
    FieldKind::DateTime,
    FieldKind::Integer,
    FieldKind::PositiveInteger,
    FieldKind::Json,
];

// =============================================================================
// Required / optional / deprecated
// =============================================================================

mod presence_tests {
    use super::*;

    #[test]
    fn test_required_fields_fail_on_missing_key() {
        init_tracing();
        for kind in ALL_KINDS {
            let direct = field("target", kind, FieldOptions::new().stripe_name("target"));
            let err = direct.resolve(&json!({"other": 1})).unwrap_err();
            assert!(
                matches!(err, FieldError::MissingRequiredField { .. }),
                "{kind} should fail on missing key"
            );

            let nested = field("target", kind, FieldOptions::new().stripe_name("data.target"));
            let err = nested.resolve(&json!({"data": {}})).unwrap_err();
            assert!(
                matches!(err, FieldError::MissingRequiredField { .. }),
                "{kind} should fail on missing nested key"
            );
        }
    }

    #[test]
    fn test_nested_name_missing_group_fails() {
        let f = field("exp_month", FieldKind::Integer, FieldOptions::new().nested_name("card"));
        let err = f.resolve(&json!({"id": "ch_1"})).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_REQUIRED_FIELD");
        assert!(err.to_string().contains("card.exp_month"));
    }

    #[test]
    fn test_optional_fields_resolve_to_null() {
        for kind in ALL_KINDS.into_iter().filter(|kind| *kind != FieldKind::Id) {
            let f = field(
                "target",
                kind,
                FieldOptions::new().stripe_name("data.target").optional(),
            );
            assert_eq!(f.resolve(&json!({})).unwrap(), FieldValue::Null, "{kind}");
        }
    }

    #[test]
    fn test_deprecated_fields_always_null() {
        let sources = [
            json!({}),
            json!({"target": 1050}),
            json!({"target": "value", "data": {"target": true}}),
        ];
        for kind in ALL_KINDS
            .into_iter()
            .filter(|kind| !matches!(kind, FieldKind::Boolean | FieldKind::Id))
        {
            let f = field("target", kind, FieldOptions::new().deprecated());
            for source in &sources {
                assert_eq!(f.resolve(source).unwrap(), FieldValue::Null, "{kind}");
            }
        }
    }
}

// =============================================================================
// Transforms
// =============================================================================

mod transform_tests {
    use super::*;

    #[test]
    fn test_currency_is_exact_decimal() {
        let f = field("amount", FieldKind::Currency, FieldOptions::new());
        let value = f.resolve(&json!({"amount": 1050})).unwrap();
        assert_eq!(value, FieldValue::Decimal(Decimal::from_str("10.50").unwrap()));
        assert_eq!(value.as_decimal().unwrap().scale(), 2);
    }

    #[test]
    fn test_datetime_epoch_and_round_trip() {
        let f = field("created", FieldKind::DateTime, FieldOptions::new());
        let epoch = f.resolve(&json!({"created": 0})).unwrap();
        assert_eq!(epoch.as_datetime().unwrap(), DateTime::<Utc>::default());

        for ts in [1, 1_483_228_800_i64, 2_000_000_000] {
            let value = f.resolve(&json!({ "created": ts })).unwrap();
            assert_eq!(value.as_datetime().unwrap().timestamp(), ts);
        }
    }

    #[test]
    fn test_nested_stripe_name() {
        let f = field("stripe_id", FieldKind::Id, FieldOptions::new().stripe_name("data.id"));
        let value = f.resolve(&json!({"data": {"id": "abc"}})).unwrap();
        assert_eq!(value.as_string(), Some("abc"));
    }

    #[test]
    fn test_json_without_stripe_name_is_identity() {
        let f = field("stripe_data", FieldKind::Json, FieldOptions::new());
        let source: Value = json!({
            "id": "sub_1",
            "items": {"object": "list", "data": [{"id": "si_1"}]},
            "metadata": {}
        });
        assert_eq!(f.resolve(&source).unwrap(), FieldValue::Json(source.clone()));
    }

    #[test]
    fn test_booleans() {
        let paid = field("paid", FieldKind::Boolean, FieldOptions::new());
        assert_eq!(paid.resolve(&json!({"paid": true})).unwrap(), FieldValue::Boolean(true));

        let refunded = field("refunded", FieldKind::NullBoolean, FieldOptions::new().optional());
        assert_eq!(refunded.resolve(&json!({})).unwrap(), FieldValue::Null);
    }

    #[test]
    fn test_free_function_matches_method() {
        let f = field("quantity", FieldKind::PositiveInteger, FieldOptions::new());
        let source = json!({"quantity": 3});
        assert_eq!(resolve(&f, &source).unwrap(), f.resolve(&source).unwrap());
    }
}

// =============================================================================
// Declaration errors
// =============================================================================

mod declaration_tests {
    use super::*;

    #[test]
    fn test_deprecated_required_boolean_fails_at_construction() {
        let err = FieldDescriptor::new("closed", FieldKind::Boolean, FieldOptions::new().deprecated())
            .unwrap_err();
        assert!(matches!(err, ConfigError::DeprecatedBoolean { .. }));
        assert_eq!(err.error_code(), "DEPRECATED_BOOLEAN_FIELD");
    }

    #[test]
    fn test_config_error_converts_to_field_error() {
        fn declare() -> FieldResult<FieldDescriptor> {
            Ok(FieldDescriptor::new(
                "stripe_id",
                FieldKind::Id,
                FieldOptions::new().optional(),
            )?)
        }

        let err = declare().unwrap_err();
        assert!(matches!(
            err,
            FieldError::Config(ConfigError::NullableIdentifier { .. })
        ));
    }
}

// =============================================================================
// Whole records
// =============================================================================

mod record_tests {
    use super::*;

    fn customer_schema() -> ModelSchema {
        ModelSchema::new(
            "customer",
            [
                field("stripe_id", FieldKind::Id, FieldOptions::new().stripe_name("id")),
                field("livemode", FieldKind::Boolean, FieldOptions::new()),
                field("created", FieldKind::DateTime, FieldOptions::new()),
                field(
                    "account_balance",
                    FieldKind::Currency,
                    FieldOptions::new().optional(),
                ),
                field(
                    "card_fingerprint",
                    FieldKind::Char,
                    FieldOptions::new()
                        .stripe_name("default_source.fingerprint")
                        .max_length(16)
                        .optional(),
                ),
                field("delinquent", FieldKind::NullBoolean, FieldOptions::new().deprecated()),
                field("stripe_data", FieldKind::Json, FieldOptions::new()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_clean_record() {
        init_tracing();
        let source = json!({
            "id": "cus_9s6XKzkNRiz8i3",
            "livemode": false,
            "created": 1_483_228_800,
            "account_balance": -2500,
            "delinquent": true
        });

        let record = customer_schema().clean_record(&source).unwrap();

        assert_eq!(record["stripe_id"].as_string(), Some("cus_9s6XKzkNRiz8i3"));
        assert_eq!(record["livemode"], FieldValue::Boolean(false));
        assert_eq!(record["created"].as_datetime().unwrap().timestamp(), 1_483_228_800);
        assert_eq!(record["account_balance"].as_decimal().unwrap().to_string(), "-25.00");
        assert_eq!(record["card_fingerprint"], FieldValue::Null);
        assert_eq!(record["delinquent"], FieldValue::Null);
        assert_eq!(record["stripe_data"], FieldValue::Json(source.clone()));
    }

    #[test]
    fn test_record_serializes_for_persistence() {
        let source = json!({"id": "cus_1", "livemode": true, "created": 0});
        let record = customer_schema().resolve_record(&source).unwrap();
        let serialized = serde_json::to_value(&record).unwrap();

        assert_eq!(serialized["stripe_id"], json!("cus_1"));
        assert_eq!(serialized["livemode"], json!(true));
        assert_eq!(serialized["account_balance"], Value::Null);
        assert_eq!(serialized["stripe_data"], source);
    }

    #[test]
    fn test_blank_identifier_fails_cleaning() {
        let source = json!({"id": "", "livemode": true, "created": 0});
        let err = customer_schema().clean_record(&source).unwrap_err();
        assert!(matches!(err, FieldError::Validation { ref field, .. } if field == "stripe_id"));
    }
}
