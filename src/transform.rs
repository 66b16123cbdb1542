//! Transformation trait definition.
//!
//! This module defines the lifecycle contract between the host pipeline and
//! a record transform: configure once, apply per record, describe the
//! recognized options, close at end of life.

use crate::{ConfigDef, ConfigValues, ConnectRecord, TransformResult};

/// Trait for implementing record transforms (Record → Record)
///
/// A transform is a stateless-per-call mapping over one record at a time,
/// executed synchronously by the host pipeline. The host calls
/// [`configure`] exactly once before the first [`apply`]; after that the
/// instance holds only immutable configuration, so a single configured
/// transform may be shared across worker threads behind an `Arc`.
///
/// [`configure`]: Transformation::configure
/// [`apply`]: Transformation::apply
///
/// # Example
///
/// ```rust,no_run
/// use connect_concat_key::{
///     ConcatenateKey, ConfigValue, ConfigValues, ConnectRecord, Transformation,
/// };
///
/// let mut transform = ConcatenateKey::new();
///
/// let mut options = ConfigValues::new();
/// options.set("key.fields", ConfigValue::Str("id,type".to_string()));
/// options.set("key.delimiter", ConfigValue::Str("-".to_string()));
/// transform.configure(&options)?;
///
/// # let record = ConnectRecord::new("orders");
/// let output = transform.apply(&record)?;
/// println!("new key: {:?}", output.key());
/// # Ok::<(), connect_concat_key::TransformError>(())
/// ```
pub trait Transformation: Send + Sync {
    /// Configure the transform with host-supplied options
    ///
    /// Called exactly once per instance, before any [`apply`] call, per the
    /// host's plugin lifecycle contract. A configuration error is fatal to
    /// the instance: the transform must not become usable until it is
    /// reconfigured correctly.
    ///
    /// # Errors
    ///
    /// Return [`TransformError::Configuration`] for missing or invalid
    /// options.
    ///
    /// [`apply`]: Transformation::apply
    /// [`TransformError::Configuration`]: crate::TransformError::Configuration
    fn configure(&mut self, config: &ConfigValues) -> TransformResult<()>;

    /// Map one input record to one output record
    ///
    /// The input record is owned by the host and is not mutated; the
    /// transform returns a new record. Record-shape errors (a key that is
    /// not a structured value, a selected field missing from the key) are
    /// not recovered here - they propagate so the host pipeline's own
    /// failure policy can deal with the record.
    fn apply(&self, record: &ConnectRecord) -> TransformResult<ConnectRecord>;

    /// Static declaration of the options this transform recognizes
    ///
    /// Host tooling may call this at any time for validation and
    /// documentation. Purely descriptive; no side effects.
    fn config_def(&self) -> ConfigDef;

    /// Release any held resources
    ///
    /// Called at most once at the end of the instance's life. The default
    /// implementation does nothing.
    fn close(&mut self) {}
}
