//! ConcatenateKey - derive a single string identifier from a structured key.

use crate::config::{ConfigType, ConfigValue, Importance};
use crate::message::ConnectRecord;
use crate::schema::{Schema, SchemaType};
use crate::transform::Transformation;
use crate::utils::value_to_string;
use crate::{ConfigDef, ConfigValues, TransformError, TransformResult};
use serde_json::{Map, Value};
use tracing::debug;

/// Option naming the key fields to concatenate, as a comma-separated list
pub const KEY_FIELDS_CONFIG: &str = "key.fields";
/// Option holding the delimiter inserted between concatenated field values
pub const KEY_DELIMITER_CONFIG: &str = "key.delimiter";
/// Declared default for `key.delimiter`
pub const KEY_DELIMITER_DEFAULT: &str = "-";
/// Name of the single field (and header) carrying the derived identifier
pub const ID_FIELD: &str = "_id";

/// Schema name stamped on the rewritten key
const KEY_SCHEMA_NAME: &str = "connect.concat_key.Key";

/// Immutable settings held after a successful `configure`
struct ConcatConfig {
    key_fields: Vec<String>,
    delimiter: String,
}

/// Transform that rewrites a record's structured key into a single `_id`
/// string field
///
/// The identifier is the concatenation of the configured key fields' values
/// (or, when no fields are configured, every field of the key schema in
/// declared order), joined by the configured delimiter. The same identifier
/// is appended to the output record's headers under `_id`, where downstream
/// indexing sinks pick it up as the document id.
///
/// Values are joined verbatim: a delimiter character occurring inside a
/// field value is not escaped.
///
/// # Example
///
/// ```
/// use connect_concat_key::{
///     ConcatenateKey, ConfigValue, ConfigValues, ConnectRecord, Schema, SchemaType,
///     Transformation,
/// };
/// use serde_json::json;
///
/// let mut transform = ConcatenateKey::new();
///
/// let mut options = ConfigValues::new();
/// options.set("key.fields", ConfigValue::Str("".to_string()));
/// options.set("key.delimiter", ConfigValue::Str("-".to_string()));
/// transform.configure(&options)?;
///
/// let key_schema = Schema::structure()
///     .field("id", SchemaType::String)
///     .field("type", SchemaType::String)
///     .build();
/// let record = ConnectRecord::new("orders")
///     .with_key(key_schema, json!({"id": "123", "type": "order"}));
///
/// let output = transform.apply(&record)?;
/// assert_eq!(output.key().unwrap()["_id"], "123-order");
/// assert_eq!(output.headers().get("_id"), Some("123-order"));
/// # Ok::<(), connect_concat_key::TransformError>(())
/// ```
#[derive(Default)]
pub struct ConcatenateKey {
    config: Option<ConcatConfig>,
}

impl ConcatenateKey {
    /// Create an unconfigured transform
    ///
    /// The instance refuses to process records until [`configure`] succeeds.
    ///
    /// [`configure`]: Transformation::configure
    pub fn new() -> Self {
        Self { config: None }
    }

    fn build_identifier(
        config: &ConcatConfig,
        record: &ConnectRecord,
        key: &Map<String, Value>,
    ) -> TransformResult<String> {
        if !config.key_fields.is_empty() && !config.key_fields[0].is_empty() {
            concat_fields(
                key,
                config.key_fields.iter().map(String::as_str),
                &config.delimiter,
            )
        } else {
            // no fields configured: every field of the key schema, in
            // schema-declared order
            let schema = record
                .key_schema()
                .ok_or_else(|| TransformError::key_shape("record has no key schema"))?;
            concat_fields(key, schema.field_names(), &config.delimiter)
        }
    }
}

impl Transformation for ConcatenateKey {
    fn configure(&mut self, config: &ConfigValues) -> TransformResult<()> {
        let raw_fields = config.get_str(KEY_FIELDS_CONFIG).ok_or_else(|| {
            TransformError::config(format!(
                "Missing or invalid '{}' configuration.",
                KEY_FIELDS_CONFIG
            ))
        })?;
        // literal split: names are not trimmed, so a space after a comma
        // stays part of the next name
        let key_fields: Vec<String> = raw_fields.split(',').map(str::to_string).collect();

        let delimiter = match config.get(KEY_DELIMITER_CONFIG) {
            Some(ConfigValue::Str(value)) => value.clone(),
            _ => {
                return Err(TransformError::config(format!(
                    "Missing or invalid '{}' configuration.",
                    KEY_DELIMITER_CONFIG
                )));
            }
        };

        debug!(
            fields = ?key_fields,
            delimiter = %delimiter,
            "concatenate-key transform configured"
        );

        self.config = Some(ConcatConfig {
            key_fields,
            delimiter,
        });
        Ok(())
    }

    fn apply(&self, record: &ConnectRecord) -> TransformResult<ConnectRecord> {
        let config = self.config.as_ref().ok_or_else(|| {
            TransformError::config("'apply' called before the transform was configured")
        })?;

        let key = record
            .key()
            .ok_or_else(|| TransformError::key_shape("record has no key"))?;
        let key_struct = key.as_object().ok_or_else(|| {
            TransformError::key_shape(format!(
                "expected a struct key, got {}",
                value_kind(key)
            ))
        })?;

        let identifier = Self::build_identifier(config, record, key_struct)?;

        let key_schema = Schema::structure()
            .name(KEY_SCHEMA_NAME)
            .field(ID_FIELD, SchemaType::String)
            .build();
        let mut new_key = Map::new();
        new_key.insert(ID_FIELD.to_string(), Value::String(identifier.clone()));

        let mut output = record.replace_key(key_schema, Value::Object(new_key));
        output.headers_mut().add(ID_FIELD, identifier);
        Ok(output)
    }

    fn config_def(&self) -> ConfigDef {
        ConfigDef::new()
            .define(
                KEY_FIELDS_CONFIG,
                ConfigType::List,
                None,
                Importance::High,
                "List of key field names to concatenate",
            )
            .define(
                KEY_DELIMITER_CONFIG,
                ConfigType::Str,
                Some(KEY_DELIMITER_DEFAULT),
                Importance::High,
                "Delimiter used to concatenate key fields",
            )
    }
}

/// Concatenate the string forms of the named fields, joined by `delimiter`
///
/// The delimiter is inserted only when the accumulator already holds text,
/// so a single selected field produces no delimiter at all. A field that is
/// absent from the key, or whose value is null, fails the record.
fn concat_fields<'a>(
    key: &Map<String, Value>,
    field_names: impl Iterator<Item = &'a str>,
    delimiter: &str,
) -> TransformResult<String> {
    let mut identifier = String::new();
    for name in field_names {
        if !identifier.is_empty() {
            identifier.push_str(delimiter);
        }
        let value = key
            .get(name)
            .ok_or_else(|| TransformError::missing_field(name))?;
        let rendered =
            value_to_string(value).ok_or_else(|| TransformError::missing_field(name))?;
        identifier.push_str(&rendered);
    }
    Ok(identifier)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a struct",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn configured(fields: &str, delimiter: &str) -> ConcatenateKey {
        let mut options = ConfigValues::new();
        options.set(KEY_FIELDS_CONFIG, ConfigValue::Str(fields.to_string()));
        options.set(
            KEY_DELIMITER_CONFIG,
            ConfigValue::Str(delimiter.to_string()),
        );

        let mut transform = ConcatenateKey::new();
        transform.configure(&options).unwrap();
        transform
    }

    fn order_record() -> ConnectRecord {
        let key_schema = Schema::structure()
            .field("id", SchemaType::String)
            .field("type", SchemaType::String)
            .build();
        ConnectRecord::new("orders").with_key(key_schema, json!({"id": "123", "type": "order"}))
    }

    #[test]
    fn test_configured_fields_in_order() {
        let transform = configured("type,id", "_");
        let output = transform.apply(&order_record()).unwrap();

        assert_eq!(output.key().unwrap()[ID_FIELD], "order_123");
        assert_eq!(output.headers().get(ID_FIELD), Some("order_123"));
    }

    #[test]
    fn test_empty_fields_falls_back_to_schema_order() {
        let transform = configured("", "-");
        let output = transform.apply(&order_record()).unwrap();

        assert_eq!(output.key().unwrap()[ID_FIELD], "123-order");
    }

    #[test]
    fn test_single_field_has_no_delimiter() {
        let transform = configured("id", "-");
        let output = transform.apply(&order_record()).unwrap();

        assert_eq!(output.key().unwrap()[ID_FIELD], "123");
    }

    #[test]
    fn test_missing_delimiter_fails_configure() {
        let mut options = ConfigValues::new();
        options.set(KEY_FIELDS_CONFIG, ConfigValue::Str("id".to_string()));

        let mut transform = ConcatenateKey::new();
        let err = transform.configure(&options).unwrap_err();
        assert!(err.is_configuration());

        // the instance never became usable
        let err = transform.apply(&order_record()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_non_string_delimiter_fails_configure() {
        let mut options = ConfigValues::new();
        options.set(KEY_FIELDS_CONFIG, ConfigValue::Str("id".to_string()));
        options.set(KEY_DELIMITER_CONFIG, ConfigValue::I64(5));

        let mut transform = ConcatenateKey::new();
        let err = transform.configure(&options).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_fields_option_fails_configure() {
        let mut options = ConfigValues::new();
        options.set(KEY_DELIMITER_CONFIG, ConfigValue::Str("-".to_string()));

        let mut transform = ConcatenateKey::new();
        let err = transform.configure(&options).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_non_struct_key_fails() {
        let transform = configured("id", "-");
        let record = ConnectRecord::new("orders")
            .with_key(Schema::primitive(SchemaType::String), json!("plain"));

        let err = transform.apply(&record).unwrap_err();
        assert!(err.is_key_shape());
    }

    #[test]
    fn test_missing_key_fails() {
        let transform = configured("id", "-");
        let record = ConnectRecord::new("orders");

        let err = transform.apply(&record).unwrap_err();
        assert!(err.is_key_shape());
    }

    #[test]
    fn test_missing_selected_field_fails() {
        let transform = configured("id,region", "-");
        let err = transform.apply(&order_record()).unwrap_err();

        assert!(err.is_missing_field());
        assert_eq!(err.to_string(), "Missing key field: region");
    }

    #[test]
    fn test_null_field_value_fails() {
        let transform = configured("id", "-");
        let key_schema = Schema::structure()
            .field("id", SchemaType::String)
            .build();
        let record =
            ConnectRecord::new("orders").with_key(key_schema, json!({"id": null}));

        let err = transform.apply(&record).unwrap_err();
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_config_def_declares_both_options() {
        let def = ConcatenateKey::new().config_def();

        let fields = def.key(KEY_FIELDS_CONFIG).unwrap();
        assert_eq!(fields.key_type, ConfigType::List);
        assert_eq!(fields.importance, Importance::High);
        assert!(fields.default.is_none());

        let delimiter = def.key(KEY_DELIMITER_CONFIG).unwrap();
        assert_eq!(delimiter.key_type, ConfigType::Str);
        assert_eq!(delimiter.default.as_deref(), Some(KEY_DELIMITER_DEFAULT));
    }
}
