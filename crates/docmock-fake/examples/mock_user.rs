//! Generate a mock user document and print it as JSON.
//!
//! ```sh
//! cargo run -p docmock-fake --example mock_user
//! cargo run -p docmock-fake --example mock_user -- --required-only
//! ```

use docmock::prelude::*;
use docmock_fake::{generate_mock_with, MockError, MockOptions};
use serde_json::json;

fn address_schema() -> Schema {
    Schema::builder()
        .field("street", docmock::string())
        .field("city", docmock::string())
        .field("zipCode", docmock::string().required())
}

fn field931_schema() -> Schema {
    Schema::builder()
        .field("field9311", docmock::string().enumeration(["Hey", "there"]))
        .field("field9312", docmock::number().min(10).max(12).required())
        .field("field9313", docmock::string().min_length(5).max_length(15))
}

fn field9_schema() -> Schema {
    Schema::builder()
        .field("field91", docmock::number().enumeration([42, 69, 420]))
        .field("field92", docmock::number().min(1000).max(1050))
        .field("field93.field931", docmock::embedded(field931_schema()).required())
        .field("field94", docmock::string().min_length(50).max_length(500))
}

fn user_schema() -> Result<Schema, SchemaError> {
    // Hobbies come from a definition document, the rest from the builder.
    let hobbies = Schema::from_definition(&json!({
        "hobbies": {
            "type": [{
                "name": { "type": "String", "required": true },
                "years": { "type": "Number", "enum": [1995, 2000, 2010, 2020, 2025] }
            }],
            "required": true
        }
    }))?;

    let user = Schema::builder()
        .field("email", docmock::string().required())
        .field("phoneNumber", docmock::string())
        .field("firstName", docmock::string().required())
        .field("lastName", docmock::string().min_length(5).max_length(200))
        .field(
            "age",
            docmock::number()
                .min_with_message(10.0, "Become an adult")
                .max(100),
        )
        .field("birthDate", docmock::date())
        .field("isActive", docmock::boolean())
        .field("address", docmock::embedded(address_schema()).required());

    Ok(user
        .extend(hobbies)
        .field("salary", docmock::decimal128())
        .field("accountBalance", docmock::decimal128())
        .field("field1.field2.field4", docmock::date())
        .field(
            "field1.field2.field6.field7",
            docmock::string().enumeration(["either this", "or that"]),
        )
        .field(
            "field1.field2.field6.field9",
            docmock::embedded(field9_schema()).required(),
        )
        .field("field1.field3", docmock::number()))
}

fn main() -> Result<(), MockError> {
    let required_only = std::env::args().any(|a| a == "--required-only");
    let schema = user_schema()?;
    let options = MockOptions::default().required_only(required_only);

    let user = generate_mock_with(&schema, &options)?;
    println!("{}", serde_json::to_string_pretty(&user)?);

    if let Err(e) = schema.validate(&user) {
        eprintln!("validation failed:\n{e}");
    }
    Ok(())
}
