//! Schema types for record keys and values.
//!
//! This module provides a minimal schema model for structured records:
//! an ordered list of named, typed fields. Transforms use it to walk a
//! key's fields in schema-declared order and to describe the shape of
//! the keys they emit.

use serde::{Deserialize, Serialize};

/// Value type of a single record field
///
/// Defines how a field's value is encoded and should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SchemaType {
    /// UTF-8 encoded string
    String,
    /// Boolean
    Bool,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// Raw bytes - no specific encoding
    Bytes,
    /// Structured value with named fields
    Struct,
}

impl SchemaType {
    /// Check if this schema type represents a structured value
    pub fn is_struct(&self) -> bool {
        matches!(self, SchemaType::Struct)
    }

    /// Check if this schema type represents a primitive (non-struct) value
    pub fn is_primitive(&self) -> bool {
        !self.is_struct()
    }

    /// Check if this schema type represents text data
    pub fn is_text(&self) -> bool {
        matches!(self, SchemaType::String)
    }

    /// Check if this schema type represents numeric data
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SchemaType::Int32 | SchemaType::Int64 | SchemaType::Float32 | SchemaType::Float64
        )
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::String => write!(f, "String"),
            SchemaType::Bool => write!(f, "Bool"),
            SchemaType::Int32 => write!(f, "Int32"),
            SchemaType::Int64 => write!(f, "Int64"),
            SchemaType::Float32 => write!(f, "Float32"),
            SchemaType::Float64 => write!(f, "Float64"),
            SchemaType::Bytes => write!(f, "Bytes"),
            SchemaType::Struct => write!(f, "Struct"),
        }
    }
}

impl std::str::FromStr for SchemaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(SchemaType::String),
            "bool" => Ok(SchemaType::Bool),
            "int32" => Ok(SchemaType::Int32),
            "int64" => Ok(SchemaType::Int64),
            "float32" => Ok(SchemaType::Float32),
            "float64" => Ok(SchemaType::Float64),
            "bytes" => Ok(SchemaType::Bytes),
            "struct" => Ok(SchemaType::Struct),
            _ => Err(format!("Unknown schema type: {}", s)),
        }
    }
}

/// A single named, typed field in a struct schema
///
/// Field position in [`Schema::fields`] determines the schema-declared order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub field_type: SchemaType,
}

/// Schema of a record key or value
///
/// For struct schemas, `fields` lists the named fields in declared order.
/// Primitive schemas carry an empty field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Optional schema name (namespaced, opaque to this crate)
    pub name: Option<String>,
    pub schema_type: SchemaType,
    /// Named fields in schema-declared order (empty for primitives)
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a primitive schema
    pub fn primitive(schema_type: SchemaType) -> Self {
        Self {
            name: None,
            schema_type,
            fields: Vec::new(),
        }
    }

    /// Start building a struct schema
    pub fn structure() -> SchemaBuilder {
        SchemaBuilder {
            name: None,
            fields: Vec::new(),
        }
    }

    /// Check if this is a struct schema
    pub fn is_struct(&self) -> bool {
        self.schema_type.is_struct()
    }

    /// Get the fields in schema-declared order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterate field names in schema-declared order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Builder for struct schemas
///
/// # Example
///
/// ```
/// use connect_concat_key::{Schema, SchemaType};
///
/// let schema = Schema::structure()
///     .name("orders.Key")
///     .field("id", SchemaType::String)
///     .field("type", SchemaType::String)
///     .build();
///
/// assert!(schema.is_struct());
/// assert_eq!(schema.fields().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: Option<String>,
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Set the schema name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a field (declared order is append order)
    pub fn field(mut self, name: impl Into<String>, field_type: SchemaType) -> Self {
        self.fields.push(Field {
            name: name.into(),
            field_type,
        });
        self
    }

    /// Finish building the struct schema
    pub fn build(self) -> Schema {
        Schema {
            name: self.name,
            schema_type: SchemaType::Struct,
            fields: self.fields,
        }
    }
}
