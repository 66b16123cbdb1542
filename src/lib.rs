//! # Connect Concat Key
//!
//! Key-concatenation record transform for Connect-style streaming pipelines.
//!
//! This library implements a single record transform: it receives
//! change-event records keyed by a structured composite key, derives one
//! string identifier by concatenating selected key-field values with a
//! configurable delimiter, and produces a new record whose key is a
//! single-field `_id` structure holding that identifier. The identifier is
//! also stamped into a record header named `_id`, where downstream indexing
//! sinks pick it up as the document id.
//!
//! ## Overview
//!
//! The host pipeline owns record ingestion, delivery, retries, and plugin
//! lifecycle. This crate models only the contract the transform touches:
//!
//! - [`ConnectRecord`]: one record - topic, partition, key and key schema,
//!   value and value schema, timestamp, headers
//! - [`Transformation`]: the lifecycle trait - `configure` once, `apply` per
//!   record, `config_def` for option discovery, `close` at end of life
//! - [`ConfigValues`] / [`ConfigDef`]: host-supplied options and the static
//!   declaration of the options the transform recognizes
//! - [`ConcatenateKey`]: the transform itself
//!
//! ## Quick Start
//!
//! ```rust
//! use connect_concat_key::{
//!     ConcatenateKey, ConfigValue, ConfigValues, ConnectRecord, Schema, SchemaType,
//!     Transformation,
//! };
//! use serde_json::json;
//!
//! // Configure once, at plugin activation
//! let mut transform = ConcatenateKey::new();
//! let mut options = ConfigValues::new();
//! options.set("key.fields", ConfigValue::Str("type,id".to_string()));
//! options.set("key.delimiter", ConfigValue::Str("_".to_string()));
//! transform.configure(&options)?;
//!
//! // Apply per record
//! let key_schema = Schema::structure()
//!     .field("id", SchemaType::String)
//!     .field("type", SchemaType::String)
//!     .build();
//! let record = ConnectRecord::new("orders")
//!     .with_key(key_schema, json!({"id": "123", "type": "order"}));
//!
//! let output = transform.apply(&record)?;
//! assert_eq!(output.key().unwrap()["_id"], "order_123");
//! assert_eq!(output.headers().get("_id"), Some("order_123"));
//! # Ok::<(), connect_concat_key::TransformError>(())
//! ```
//!
//! ## Features
//!
//! - **Deterministic identifiers**: order-preserving concatenation with the
//!   delimiter inserted only between values, never leading or trailing
//! - **Schema-order fallback**: with no configured fields, every field of
//!   the key schema is used in declared order
//! - **Fail-fast records**: a non-struct key or a missing selected field
//!   fails that record; the transform never substitutes defaults
//! - **Loud configuration errors**: a missing or non-string `key.delimiter`
//!   prevents the instance from ever processing records

mod config;
mod error;
mod message;
mod schema;
mod transform;
mod transforms;
pub mod utils;

// Re-export public API
pub use config::{ConfigDef, ConfigKey, ConfigType, ConfigValue, ConfigValues, Importance};
pub use error::{TransformError, TransformResult};
pub use message::{ConnectRecord, Header, Headers};
pub use schema::{Field, Schema, SchemaBuilder, SchemaType};
pub use transform::Transformation;
pub use transforms::{
    ConcatenateKey, ID_FIELD, KEY_DELIMITER_CONFIG, KEY_DELIMITER_DEFAULT, KEY_FIELDS_CONFIG,
};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
