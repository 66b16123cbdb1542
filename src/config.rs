//! Configuration handling for transforms.
//!
//! Transforms are configured once at plugin activation with a mapping of
//! option names to values supplied by the host pipeline ([`ConfigValues`]).
//! Each transform also publishes a static declaration of the options it
//! recognizes ([`ConfigDef`]) so that host tooling can validate and document
//! them before the instance is created.

use crate::{TransformError, TransformResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed config option value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValue::Bool(v) => write!(f, "{}", v),
            ConfigValue::I64(v) => write!(f, "{}", v),
            ConfigValue::F64(v) => write!(f, "{}", v),
            ConfigValue::Str(v) => write!(f, "{}", v),
        }
    }
}

/// Option map passed to a transform at configure time
///
/// The host builds this from its own configuration source (connector
/// properties, JSON, ...) and hands it to [`Transformation::configure`]
/// exactly once, before the first record. Entries keep insertion order.
/// Typed getters return `None` when the option is absent **or** holds a
/// value of a different type - the transform decides whether that is an
/// error.
///
/// [`Transformation::configure`]: crate::Transformation::configure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigValues {
    entries: Vec<(String, ConfigValue)>,
}

impl ConfigValues {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set an option, replacing any previous value under the same name
    pub fn set(&mut self, name: impl Into<String>, value: ConfigValue) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == &name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(ConfigValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ConfigValue::I64(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(ConfigValue::F64(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ConfigValue::Str(v)) => Some(v),
            _ => None,
        }
    }

    /// Build an option map from a JSON object
    ///
    /// Convenience for hosts that deliver transform options as JSON. Only
    /// flat objects with scalar members are accepted; nested objects,
    /// arrays, and nulls fail with a configuration error.
    pub fn from_json(value: &Value) -> TransformResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            TransformError::config("transform options must be a JSON object")
        })?;

        let mut values = ConfigValues::new();
        for (name, member) in object {
            let value = match member {
                Value::Bool(v) => ConfigValue::Bool(*v),
                Value::String(v) => ConfigValue::Str(v.clone()),
                Value::Number(n) => {
                    if let Some(v) = n.as_i64() {
                        ConfigValue::I64(v)
                    } else if let Some(v) = n.as_f64() {
                        ConfigValue::F64(v)
                    } else {
                        return Err(TransformError::config(format!(
                            "option '{}' holds an unrepresentable number",
                            name
                        )));
                    }
                }
                _ => {
                    return Err(TransformError::config(format!(
                        "option '{}' must be a scalar value",
                        name
                    )));
                }
            };
            values.set(name, value);
        }
        Ok(values)
    }
}

/// Declared type of a config option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    Str,
    /// Comma-separated list, delivered as a string
    List,
    Bool,
    I64,
    F64,
}

/// Importance of a config option, for host tooling and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// Declaration of a single recognized config option
///
/// Transforms export these via [`Transformation::config_def`]. Hosts use
/// them to validate and document option values before creating the
/// instance. The declared default is descriptive: whether an absent option
/// falls back to it is up to the transform's own `configure`.
///
/// [`Transformation::config_def`]: crate::Transformation::config_def
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigKey {
    pub name: String,
    pub key_type: ConfigType,
    /// Declared default value, rendered as a string ("-" etc.)
    pub default: Option<String>,
    pub importance: Importance,
    pub documentation: String,
}

/// Static declaration of the options a transform recognizes
///
/// An ordered list of [`ConfigKey`] built with the [`define`] chain.
/// Purely descriptive; no side effects.
///
/// [`define`]: ConfigDef::define
///
/// # Example
///
/// ```
/// use connect_concat_key::{ConfigDef, ConfigType, Importance};
///
/// let def = ConfigDef::new()
///     .define(
///         "key.fields",
///         ConfigType::List,
///         None,
///         Importance::High,
///         "List of key field names to concatenate",
///     );
///
/// assert!(def.key("key.fields").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigDef {
    keys: Vec<ConfigKey>,
}

impl ConfigDef {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Declare an option (declaration order is preserved)
    pub fn define(
        mut self,
        name: impl Into<String>,
        key_type: ConfigType,
        default: Option<&str>,
        importance: Importance,
        documentation: impl Into<String>,
    ) -> Self {
        self.keys.push(ConfigKey {
            name: name.into(),
            key_type,
            default: default.map(str::to_string),
            importance,
            documentation: documentation.into(),
        });
        self
    }

    /// Get the declared options in declaration order
    pub fn keys(&self) -> &[ConfigKey] {
        &self.keys
    }

    /// Look up a declared option by name
    pub fn key(&self, name: &str) -> Option<&ConfigKey> {
        self.keys.iter().find(|k| k.name == name)
    }
}
