//! Integration test for record, header, and configuration types
//!
//! Tests programmatic construction of the host-facing types without a host
//! pipeline.

use connect_concat_key::{
    ConcatenateKey, ConfigDef, ConfigType, ConfigValue, ConfigValues, ConnectRecord, Headers,
    Importance, Schema, SchemaType, Transformation,
};
use serde_json::json;

#[test]
fn test_record_builder_round_trip() {
    let key_schema = Schema::structure()
        .name("users.Key")
        .field("user_id", SchemaType::String)
        .build();

    let record = ConnectRecord::new("users")
        .with_partition(0)
        .with_key(key_schema, json!({"user_id": "u-1"}))
        .with_value(
            Schema::primitive(SchemaType::String),
            json!("user created"),
        )
        .with_timestamp(1234567890)
        .with_header("trace-id", "abc");

    assert_eq!(record.topic(), "users");
    assert_eq!(record.partition(), Some(0));
    assert_eq!(record.key().unwrap()["user_id"], "u-1");
    assert_eq!(record.key_schema().unwrap().name.as_deref(), Some("users.Key"));
    assert_eq!(record.value().unwrap(), &json!("user created"));
    assert_eq!(record.timestamp(), Some(1234567890));
    assert_eq!(record.headers().get("trace-id"), Some("abc"));
}

#[test]
fn test_replace_key_builds_a_new_record() {
    let input = ConnectRecord::new("users")
        .with_key(
            Schema::structure()
                .field("user_id", SchemaType::String)
                .build(),
            json!({"user_id": "u-1"}),
        )
        .with_timestamp(7);

    let replacement_schema = Schema::structure()
        .field("_id", SchemaType::String)
        .build();
    let output = input.replace_key(replacement_schema, json!({"_id": "u-1"}));

    assert_eq!(output.topic(), "users");
    assert_eq!(output.timestamp(), Some(7));
    assert_eq!(output.key().unwrap()["_id"], "u-1");

    // the input still carries its original key
    assert_eq!(input.key().unwrap()["user_id"], "u-1");
}

#[test]
fn test_headers_duplicates_and_order() {
    let mut headers = Headers::new();
    headers.add("_id", "one");
    headers.add("other", "x");
    headers.add("_id", "two");

    assert_eq!(headers.len(), 3);
    assert_eq!(headers.get("_id"), Some("one"));
    assert_eq!(headers.last("_id"), Some("two"));

    let names: Vec<&str> = headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["_id", "other", "_id"]);
}

#[test]
fn test_schema_order_is_declaration_order() {
    let schema = Schema::structure()
        .field("z", SchemaType::String)
        .field("a", SchemaType::Int64)
        .field("m", SchemaType::Bool)
        .build();

    let names: Vec<&str> = schema.field_names().collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn test_config_values_from_json_object() {
    let values = ConfigValues::from_json(&json!({
        "key.fields": "id,type",
        "key.delimiter": "-"
    }))
    .unwrap();

    assert_eq!(values.get_str("key.fields"), Some("id,type"));
    assert_eq!(values.get_str("key.delimiter"), Some("-"));
}

#[test]
fn test_config_values_from_json_feeds_configure() {
    let values = ConfigValues::from_json(&json!({
        "key.fields": "",
        "key.delimiter": "-"
    }))
    .unwrap();

    let mut transform = ConcatenateKey::new();
    transform.configure(&values).unwrap();

    let record = ConnectRecord::new("orders").with_key(
        Schema::structure()
            .field("id", SchemaType::String)
            .field("type", SchemaType::String)
            .build(),
        json!({"id": "123", "type": "order"}),
    );

    let output = transform.apply(&record).unwrap();
    assert_eq!(output.key().unwrap()["_id"], "123-order");
}

#[test]
fn test_config_def_serializes_for_host_tooling() {
    let def: ConfigDef = ConcatenateKey::new().config_def();
    let rendered = serde_json::to_value(&def).unwrap();

    let keys = rendered["keys"].as_array().unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0]["name"], "key.fields");
    assert_eq!(keys[0]["key_type"], "list");
    assert_eq!(keys[1]["name"], "key.delimiter");
    assert_eq!(keys[1]["default"], "-");
    assert_eq!(keys[1]["importance"], "high");
}

#[test]
fn test_config_def_declaration_order() {
    let def = ConfigDef::new()
        .define("b", ConfigType::Str, None, Importance::Low, "second")
        .define("a", ConfigType::Bool, None, Importance::Medium, "first");

    let names: Vec<&str> = def.keys().iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_close_is_a_no_op() {
    let mut transform = ConcatenateKey::new();
    let mut options = ConfigValues::new();
    options.set("key.fields", ConfigValue::Str("id".to_string()));
    options.set("key.delimiter", ConfigValue::Str("-".to_string()));
    transform.configure(&options).unwrap();

    transform.close();

    // close holds no resources; the configured instance keeps working
    let record = ConnectRecord::new("orders").with_key(
        Schema::structure()
            .field("id", SchemaType::String)
            .build(),
        json!({"id": "123"}),
    );
    assert_eq!(transform.apply(&record).unwrap().key().unwrap()["_id"], "123");
}
