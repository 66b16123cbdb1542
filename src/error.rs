//! Error types for transform operations.

use thiserror::Error;

/// Result type for transform operations
///
/// **Mandatory public API** - all transform methods return this.
pub type TransformResult<T> = Result<T, TransformError>;

/// Error types for transform operations
///
/// **Mandatory public API** - all transforms use this for error handling.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Configuration error - detected at startup, fatal to the instance
    ///
    /// Examples: missing `key.delimiter`, non-string option values,
    /// `apply` called before `configure`
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unexpected key shape - the record's key is not a structured value
    ///
    /// Malformed records are a pipeline-configuration problem to be fixed
    /// upstream. This error is never caught locally; the host pipeline's
    /// own dead-letter/retry policy decides what happens to the record.
    #[error("Unexpected key shape: {message}")]
    KeyShape { message: String },

    /// A selected key field is absent (or null) on the record's key
    ///
    /// Propagates uncaught, like [`TransformError::KeyShape`]. The transform
    /// does not substitute defaults for missing fields.
    #[error("Missing key field: {field}")]
    MissingField { field: String },
}

impl TransformError {
    /// Check if this error is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, TransformError::Configuration(_))
    }

    /// Check if this error is a key shape error
    pub fn is_key_shape(&self) -> bool {
        matches!(self, TransformError::KeyShape { .. })
    }

    /// Check if this error is a missing field error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, TransformError::MissingField { .. })
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        TransformError::Configuration(message.into())
    }

    /// Create a key shape error
    pub fn key_shape(message: impl Into<String>) -> Self {
        TransformError::KeyShape {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        TransformError::MissingField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let config = TransformError::config("missing delimiter");
        assert!(config.is_configuration());
        assert!(!config.is_key_shape());

        let shape = TransformError::key_shape("key is not a struct");
        assert!(shape.is_key_shape());
        assert!(!shape.is_configuration());

        let missing = TransformError::missing_field("order_id");
        assert!(missing.is_missing_field());
        assert!(!missing.is_configuration());
    }

    #[test]
    fn test_error_display() {
        let err = TransformError::config("missing 'key.delimiter'");
        assert_eq!(
            err.to_string(),
            "Configuration error: missing 'key.delimiter'"
        );

        let err = TransformError::missing_field("id");
        assert_eq!(err.to_string(), "Missing key field: id");
    }
}
