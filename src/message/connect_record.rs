//! ConnectRecord - the record unit handed to transforms by the host pipeline.

use crate::message::Headers;
use crate::schema::Schema;
use serde_json::Value;

/// A single change-event record as seen by a transform
///
/// Models the subset of the host pipeline's record contract that transforms
/// actually touch: topic, partition, key and key schema, value and value
/// schema, timestamp, and headers. Structured keys and values are carried as
/// `serde_json::Value`, already decoded by the host runtime.
///
/// Records are owned by the host. A transform receives a reference and must
/// not mutate the input in place; it produces a new record, typically via
/// [`ConnectRecord::replace_key`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectRecord {
    /// Topic the record was read from
    pub(crate) topic: String,
    /// Topic partition, if the topic is partitioned
    pub(crate) partition: Option<i32>,
    /// Schema of the key (ordered field list for struct keys)
    pub(crate) key_schema: Option<Schema>,
    /// The key (typed data, already decoded)
    pub(crate) key: Option<Value>,
    /// Schema of the value
    pub(crate) value_schema: Option<Schema>,
    /// The value payload (typed data, already decoded)
    pub(crate) value: Option<Value>,
    /// Record timestamp (milliseconds since epoch)
    pub(crate) timestamp: Option<i64>,
    /// Record headers
    pub(crate) headers: Headers,
}

impl ConnectRecord {
    /// Create a new record on the given topic
    ///
    /// All other fields start empty; populate them with the `with_*` builder
    /// methods.
    ///
    /// # Example
    /// ```
    /// use connect_concat_key::{ConnectRecord, Schema, SchemaType};
    /// use serde_json::json;
    ///
    /// let key_schema = Schema::structure()
    ///     .field("id", SchemaType::String)
    ///     .build();
    ///
    /// let record = ConnectRecord::new("orders")
    ///     .with_partition(3)
    ///     .with_key(key_schema, json!({"id": "123"}))
    ///     .with_timestamp(1234567890000);
    ///
    /// assert_eq!(record.topic(), "orders");
    /// assert_eq!(record.partition(), Some(3));
    /// ```
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            partition: None,
            key_schema: None,
            key: None,
            value_schema: None,
            value: None,
            timestamp: None,
            headers: Headers::new(),
        }
    }

    /// Set the partition
    pub fn with_partition(mut self, partition: i32) -> Self {
        self.partition = Some(partition);
        self
    }

    /// Set the key and its schema
    pub fn with_key(mut self, key_schema: Schema, key: Value) -> Self {
        self.key_schema = Some(key_schema);
        self.key = Some(key);
        self
    }

    /// Set the value payload and its schema
    pub fn with_value(mut self, value_schema: Schema, value: Value) -> Self {
        self.value_schema = Some(value_schema);
        self.value = Some(value);
        self
    }

    /// Set the record timestamp (milliseconds since epoch)
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Append a header entry
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Get the topic name
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Get the partition, if any
    pub fn partition(&self) -> Option<i32> {
        self.partition
    }

    /// Get the key schema, if any
    pub fn key_schema(&self) -> Option<&Schema> {
        self.key_schema.as_ref()
    }

    /// Get the key, if any
    pub fn key(&self) -> Option<&Value> {
        self.key.as_ref()
    }

    /// Get the value schema, if any
    pub fn value_schema(&self) -> Option<&Schema> {
        self.value_schema.as_ref()
    }

    /// Get the value payload, if any
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Get the record timestamp (milliseconds since epoch), if any
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// Access the record headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Mutable access to the record headers
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Build a new record with a replaced key and key schema
    ///
    /// Topic, partition, value, value schema, timestamp, and headers are
    /// copied unchanged from `self`; only the key side is substituted. The
    /// original record is untouched. This is the copy-with-replacement
    /// operation transforms use to emit their output record.
    pub fn replace_key(&self, key_schema: Schema, key: Value) -> ConnectRecord {
        ConnectRecord {
            topic: self.topic.clone(),
            partition: self.partition,
            key_schema: Some(key_schema),
            key: Some(key),
            value_schema: self.value_schema.clone(),
            value: self.value.clone(),
            timestamp: self.timestamp,
            headers: self.headers.clone(),
        }
    }
}
