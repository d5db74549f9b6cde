//! Attribute values.
//!
//! Terraform attributes are three-state: a value may be null (not set),
//! unknown (will be known after apply) or known. [`Attr`] is the typed form
//! used by resource models; [`Value`] is the dynamic tree exchanged with the
//! host. [`AttrValue`] converts between the two.

use std::collections::BTreeMap;

use crate::diag::Diagnostic;
use crate::path::AttributePath;

/// A typed, three-state attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr<T> {
    /// The attribute is not set.
    Null,
    /// The value is not known until apply.
    Unknown,
    /// A concrete value.
    Known(T),
}

/// String attribute.
pub type TfString = Attr<String>;
/// 64-bit integer attribute.
pub type TfInt64 = Attr<i64>;
/// Boolean attribute.
pub type TfBool = Attr<bool>;
/// List attribute.
pub type TfList<T> = Attr<Vec<T>>;
/// Single nested object attribute.
pub type TfObject<T> = Attr<T>;

impl<T> Default for Attr<T> {
    fn default() -> Self {
        Self::Null
    }
}

impl<T> Attr<T> {
    /// Whether the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value is unknown.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Whether the value is known.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Borrows the known value, if any.
    #[must_use]
    pub const fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null | Self::Unknown => None,
        }
    }

    /// Consumes the attribute, returning the known value, if any.
    #[must_use]
    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null | Self::Unknown => None,
        }
    }

    /// Maps the known value, preserving null and unknown.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Attr<U> {
        match self {
            Self::Null => Attr::Null,
            Self::Unknown => Attr::Unknown,
            Self::Known(value) => Attr::Known(f(value)),
        }
    }

    /// Borrows the contents.
    #[must_use]
    pub const fn as_ref(&self) -> Attr<&T> {
        match self {
            Self::Null => Attr::Null,
            Self::Unknown => Attr::Unknown,
            Self::Known(value) => Attr::Known(value),
        }
    }
}

impl Attr<String> {
    /// The known string, if any.
    #[must_use]
    pub fn known_str(&self) -> Option<&str> {
        self.known().map(String::as_str)
    }
}

impl Attr<bool> {
    /// The known boolean, with null and unknown reading as `false`.
    #[must_use]
    pub fn value_bool(&self) -> bool {
        matches!(self, Self::Known(true))
    }
}

impl<T> From<Option<T>> for Attr<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Known)
    }
}

/// Dynamically-typed attribute value exchanged with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Null
    Null,
    /// Not yet known
    Unknown,
    /// String
    String(String),
    /// 64-bit integer
    Int64(i64),
    /// Boolean
    Bool(bool),
    /// Ordered list
    List(Vec<Value>),
    /// Object with named attributes
    Object(ObjectValue),
}

impl Value {
    /// Short type name used in conversion errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Unknown => "unknown",
            Self::String(_) => "string",
            Self::Int64(_) => "int64",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// Whether the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the value is unknown.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Decodes this payload into a typed model.
    pub fn decode<T: AttrValue>(&self) -> Result<T, Diagnostic> {
        T::from_value(self, &AttributePath::root())
    }

    /// Encodes a typed model into a payload.
    #[must_use]
    pub fn encode<T: AttrValue>(model: &T) -> Self {
        model.to_value()
    }

    /// Borrows the named attribute of an object value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Object(object) => object.get(name),
            _ => None,
        }
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Self::Object(object)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Named attributes of an object value, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectValue {
    attributes: BTreeMap<String, Value>,
}

impl ObjectValue {
    /// Creates an empty object.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
        }
    }

    /// Sets an attribute from a typed value, builder style.
    #[must_use]
    pub fn with(mut self, name: &str, value: &impl AttrValue) -> Self {
        self.attributes.insert(name.to_string(), value.to_value());
        self
    }

    /// Sets an attribute to a raw value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.attributes.insert(name.into(), value);
    }

    /// Borrows an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Iterates over attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the object has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Conversion between a typed attribute and a dynamic [`Value`].
pub trait AttrValue: Sized {
    /// Encodes into a dynamic value.
    fn to_value(&self) -> Value;

    /// Decodes from a dynamic value found at `path`.
    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic>;
}

fn type_mismatch(expected: &str, value: &Value, path: &AttributePath) -> Diagnostic {
    Diagnostic::error(
        "Value Conversion Error",
        format!(
            "Expected {expected} value at {path}, got {}. Please report this issue to the provider developers.",
            value.type_name()
        ),
    )
    .with_attribute(path.clone())
}

impl AttrValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(type_mismatch("string", other, path)),
        }
    }
}

impl AttrValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int64(*self)
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        match value {
            Value::Int64(n) => Ok(*n),
            other => Err(type_mismatch("int64", other, path)),
        }
    }
}

impl AttrValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch("bool", other, path)),
        }
    }
}

impl<T: AttrValue> AttrValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(AttrValue::to_value).collect())
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        match value {
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| T::from_value(item, &path.index(i)))
                .collect(),
            other => Err(type_mismatch("list", other, path)),
        }
    }
}

impl<T: AttrValue> AttrValue for Attr<T> {
    fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Unknown => Value::Unknown,
            Self::Known(inner) => inner.to_value(),
        }
    }

    fn from_value(value: &Value, path: &AttributePath) -> Result<Self, Diagnostic> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Unknown => Ok(Self::Unknown),
            known => T::from_value(known, path).map(Self::Known),
        }
    }
}

/// Reads named attributes out of an object value.
///
/// Attributes missing from the payload read as null, which is how the host
/// represents unset optional attributes.
pub struct ObjectReader<'a> {
    object: &'a ObjectValue,
    path: &'a AttributePath,
}

impl<'a> ObjectReader<'a> {
    /// Wraps `value`, which must be an object.
    pub fn new(value: &'a Value, path: &'a AttributePath) -> Result<Self, Diagnostic> {
        match value {
            Value::Object(object) => Ok(Self { object, path }),
            other => Err(type_mismatch("object", other, path)),
        }
    }

    /// Decodes the named attribute.
    pub fn get<T: AttrValue>(&self, name: &str) -> Result<T, Diagnostic> {
        let path = self.path.attribute(name);
        T::from_value(self.object.get(name).unwrap_or(&Value::Null), &path)
    }
}
