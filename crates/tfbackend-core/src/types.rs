//! The in-memory value model for a parsed backend configuration.
//!
//! A `ConfigValue` tree is built fresh from the YAML input on every call and
//! dropped once the HCL text has been produced. Mappings are stored as
//! `Vec<(String, ConfigValue)>` so the source key order survives without
//! depending on `IndexMap`.

/// A parsed YAML value, restricted to the shapes that have an HCL rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    /// Wide enough for every signed and unsigned 64-bit YAML integer.
    Integer(i128),
    /// Always finite; non-finite floats become [`ConfigValue::Other`].
    Float(f64),
    String(String),
    Sequence(Vec<ConfigValue>),
    /// Key-value pairs in source order. Keys are unique.
    Mapping(Vec<(String, ConfigValue)>),
    /// A scalar with no HCL literal, kept as its display text and emitted
    /// as a quoted string.
    Other(String),
}

impl ConfigValue {
    /// Human-readable name of the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
            ConfigValue::Other(_) => "scalar",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Borrow the entries if this value is a mapping.
    pub fn as_mapping(&self) -> Option<&[(String, ConfigValue)]> {
        match self {
            ConfigValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Integer(n.into())
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        if f.is_finite() {
            ConfigValue::Float(f)
        } else {
            ConfigValue::Other(f.to_string())
        }
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}
