//! Property-based (fuzz) tests: the definition compiler, the schema loader
//! and the validator never panic on arbitrary JSON input.

use docmock::prelude::*;
use proptest::prelude::*;
use serde_json::Value;

// -----------------------------------------------------------------------
// Helpers: arbitrary JSON value generators
// -----------------------------------------------------------------------

fn arb_json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| serde_json::json!(f)),
        any::<i64>().prop_map(|i| serde_json::json!(i)),
        ".*".prop_map(Value::String),
        prop_oneof![
            Just("String"),
            Just("Number"),
            Just("Date"),
            Just("Boolean"),
            Just("Mixed"),
            Just("ObjectId")
        ]
        .prop_map(|s| Value::String(s.to_string())),
    ];
    leaf.prop_recursive(
        3,  // max depth
        64, // max nodes
        8,  // items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                prop::collection::vec(
                    (
                        prop_oneof![
                            Just("type".to_string()),
                            Just("required".to_string()),
                            Just("min".to_string()),
                            Just("maxLength".to_string()),
                            Just("enum".to_string()),
                            "[a-z_.]{1,8}"
                        ],
                        inner
                    ),
                    0..6
                )
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
            ]
        },
    )
}

fn user() -> Schema {
    Schema::builder()
        .field("email", docmock::string().required().max_length(40))
        .field("age", docmock::number().min(0).max(150))
        .field("role", docmock::string().enumeration(["admin", "user"]))
        .field("born", docmock::date().min(0))
        .field("address", docmock::embedded(Schema::builder().field("city", docmock::string())))
        .field("tags", docmock::array(docmock::string()))
        .field("meta.id", docmock::object_id())
}

// -----------------------------------------------------------------------
// Compiler / loader
// -----------------------------------------------------------------------

proptest! {
    #[test]
    fn definition_compiler_never_panics(val in arb_json_value()) {
        let _ = Schema::from_definition(&val);
    }

    #[test]
    fn schema_input_never_panics(val in arb_json_value()) {
        let _ = val.to_schema();
        let _ = val.to_string().to_schema();
    }

    #[test]
    fn compiled_schemas_reload(val in arb_json_value()) {
        if let Ok(schema) = Schema::from_definition(&val) {
            let text = serde_json::to_string(&schema).unwrap();
            let back = text.to_schema();
            prop_assert!(back.is_ok(), "{:?}", back.err());
            prop_assert_eq!(back.unwrap().len(), schema.len());
        }
    }
}

// -----------------------------------------------------------------------
// Validator
// -----------------------------------------------------------------------

proptest! {
    #[test]
    fn validator_never_panics(val in arb_json_value()) {
        let _ = user().validate(&MockValue::from(&val));
    }

    #[test]
    fn issues_always_carry_a_path(val in arb_json_value()) {
        if let (Value::Object(_), Err(err)) = (&val, user().validate(&MockValue::from(&val))) {
            for issue in &err.issues {
                prop_assert!(!issue.path.is_empty(), "{}", issue.message);
            }
        }
    }
}
