use chrono::{TimeZone, Utc};
use docmock::prelude::*;
use serde_json::json;

fn user() -> Schema {
    let address = Schema::builder()
        .field("city", docmock::string())
        .field("zipCode", docmock::string().required().min_length(5).max_length(5));
    let hobby = Schema::builder()
        .field("name", docmock::string().required())
        .field("years", docmock::number().enumeration([1995, 2000]));
    Schema::builder()
        .field("email", docmock::string().required())
        .field("age", docmock::number().min_with_message(10.0, "Become an adult").max(100))
        .field("address", docmock::embedded(address).required())
        .field("hobbies", docmock::array_of(hobby))
        .field("tags", docmock::array(docmock::string().max_length(3)))
        .field("meta.score", docmock::decimal128().min(0).max(1))
}

fn doc(value: serde_json::Value) -> MockValue {
    MockValue::from(value)
}

#[test]
fn valid_document() {
    let value = doc(json!({
        "email": "ada@example.com",
        "age": 36,
        "address": { "city": "London", "zipCode": "12345" },
        "hobbies": [{ "name": "chess", "years": 2000.0 }],
        "tags": ["a", "bc"],
        "meta": { "score": 0.5 }
    }));
    user().validate(&value).unwrap();
}

#[test]
fn optional_fields_may_be_missing_or_null() {
    let value = doc(json!({
        "email": "ada@example.com",
        "age": null,
        "address": { "zipCode": "12345" }
    }));
    assert!(user().is_valid(&value));
}

#[test]
fn collects_every_issue_with_paths() {
    let value = doc(json!({
        "age": 3,
        "address": { "city": 7, "zipCode": "123" },
        "hobbies": [{ "years": 1990 }],
        "tags": ["abcd"],
        "meta": { "score": 2 }
    }));
    let err = user().validate(&value).unwrap_err();

    let paths: Vec<String> = err.issues.iter().map(|i| i.path_string()).collect();
    assert_eq!(
        paths,
        [
            ".email",
            ".age",
            ".address.city",
            ".address.zipCode",
            ".hobbies[0].name",
            ".hobbies[0].years",
            ".tags[0]",
            ".meta.score",
        ]
    );

    let age = &err.issues[1];
    assert_eq!(age.code, IssueCode::TooSmall { minimum: 10.0 });
    assert_eq!(age.message, "Become an adult");
    assert_eq!(err.issues[0].code, IssueCode::MissingField);
    assert_eq!(err.issues[0].message, "Path `email` is required");
    assert!(matches!(err.issues[2].code, IssueCode::InvalidType { .. }));
    assert_eq!(err.issues[5].code, IssueCode::InvalidEnumValue);
    assert_eq!(err.issues[7].code, IssueCode::TooBig { maximum: 1.0 });
}

#[test]
fn display_lists_one_issue_per_line() {
    let err = user().validate(&doc(json!({ "address": {} }))).unwrap_err();
    let text = err.to_string();
    assert_eq!(text.lines().count(), 2, "{text}");
    assert!(text.contains(".email"));
    assert!(text.contains(".address.zipCode"));
}

#[test]
fn root_must_be_a_document() {
    let err = user().validate(&MockValue::Array(vec![])).unwrap_err();
    assert!(matches!(
        &err.issues[0].code,
        IssueCode::InvalidType { expected, received } if expected == "document" && received == "array"
    ));
}

#[test]
fn typed_values() {
    let schema = Schema::builder()
        .field("id", docmock::object_id())
        .field("born", docmock::date().min(0))
        .field("blob", docmock::buffer())
        .field("big", docmock::big_int());

    let good = MockValue::Document(
        [
            ("id", MockValue::String("64b7f0c2a1d3e4f5a6b7c8d9".into())),
            ("born", MockValue::Date(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap())),
            ("blob", MockValue::Binary(vec![1, 2, 3])),
            ("big", MockValue::Int(1 << 40)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect(),
    );
    schema.validate(&good).unwrap();

    let bad = doc(json!({
        "id": "not-hex",
        "born": "2000-01-01",
        "blob": "AQID",
        "big": 1.5
    }));
    let err = schema.validate(&bad).unwrap_err();
    assert_eq!(err.issues.len(), 4);
    assert!(err
        .issues
        .iter()
        .all(|i| matches!(i.code, IssueCode::InvalidType { .. })));
}

#[test]
fn dates_compare_by_epoch_millis() {
    let schema = Schema::builder().field("at", docmock::date().min(1_000).max(2_000));
    let at = |ms: i64| {
        let mut d = Document::new();
        d.insert("at".into(), MockValue::Date(Utc.timestamp_millis_opt(ms).unwrap()));
        MockValue::Document(d)
    };
    assert!(schema.is_valid(&at(1_500)));
    assert!(!schema.is_valid(&at(999)));
    assert!(!schema.is_valid(&at(2_001)));
}

#[test]
fn length_counts_characters() {
    let schema = Schema::builder().field("s", docmock::string().max_length(3));
    assert!(schema.is_valid(&doc(json!({ "s": "äöü" }))));
    assert!(!schema.is_valid(&doc(json!({ "s": "abcd" }))));
}
