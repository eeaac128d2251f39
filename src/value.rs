//! Dynamic value representation.
//!
//! This module provides the [`Value`] enum which represents any value the
//! two interchange formats can carry. It's useful for working with data when
//! the structure isn't known at compile time.
//!
//! ## Core types
//!
//! - [`Value`]: any value (null, boolean, four integer widths, double,
//!   string, array, object)
//! - [`Kind`]: the tag of a [`Value`], used in error reporting
//!
//! ## Creating values
//!
//! ```rust
//! use bijson::{bijson, Value};
//!
//! // From primitives
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(-42);
//! let text = Value::from("hello");
//!
//! // Using the bijson! macro
//! let obj = bijson!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ## Extracting values
//!
//! ```rust
//! use bijson::Value;
//!
//! let value = Value::from(42u32);
//!
//! // Option-returning accessors with caller-side defaults
//! assert_eq!(value.as_u64().unwrap_or(0), 42);
//!
//! // Fallible conversions across integer widths
//! let n = i64::try_from(&value).unwrap();
//! assert_eq!(n, 42);
//! ```

use crate::{Error, JsonMap, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed value.
///
/// Integer values come in four widths: signed and unsigned 32-bit, signed
/// and unsigned 64-bit. The text parser always resolves a literal into the
/// narrowest width that fits, preferring unsigned for non-negative values;
/// programmatically constructed trees may hold any value in any width.
///
/// # Examples
///
/// ```rust
/// use bijson::Value;
///
/// let num = Value::UInt(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert!(!text.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    UInt(u32),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(JsonMap),
}

/// The kind tag of a [`Value`].
///
/// # Examples
///
/// ```rust
/// use bijson::{Kind, Value};
///
/// assert_eq!(Value::Null.kind(), Kind::Null);
/// assert_eq!(Value::UInt(1).kind(), Kind::UInt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Int,
    UInt,
    Int64,
    UInt64,
    Double,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Int => "int32",
            Kind::UInt => "uint32",
            Kind::Int64 => "int64",
            Kind::UInt64 => "uint64",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the kind tag of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Int(_) => Kind::Int,
            Value::UInt(_) => Kind::UInt,
            Value::Int64(_) => Kind::Int64,
            Value::UInt64(_) => Kind::UInt64,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer or a double.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::UInt(_) | Value::Int64(_) | Value::UInt64(_) | Value::Double(_)
        )
    }

    /// Returns `true` if the value is an integer of any width.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::UInt(_) | Value::Int64(_) | Value::UInt64(_)
        )
    }

    /// Returns `true` if the value is a double.
    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijson::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::UInt(1).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer representable as `i64`, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijson::Value;
    ///
    /// assert_eq!(Value::Int(-5).as_i64(), Some(-5));
    /// assert_eq!(Value::UInt64(u64::MAX).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(i64::from(*v)),
            Value::UInt(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            Value::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// If the value is a non-negative integer representable as `u64`,
    /// returns it.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(v) => u64::try_from(*v).ok(),
            Value::UInt(v) => Some(u64::from(*v)),
            Value::Int64(v) => u64::try_from(*v).ok(),
            Value::UInt64(v) => Some(*v),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as `f64`. Integers are converted.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(f64::from(*v)),
            Value::UInt(v) => Some(f64::from(*v)),
            Value::Int64(v) => Some(*v as f64),
            Value::UInt64(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijson::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::Null.as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an array, returns a mutable reference to it.
    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, returns a mutable reference to it.
    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut JsonMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a key in an object value.
    ///
    /// Returns `None` for missing keys and for non-object values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijson::bijson;
    ///
    /// let obj = bijson!({"a": 1});
    /// assert_eq!(obj.get("a").and_then(|v| v.as_u64()), Some(1));
    /// assert_eq!(obj.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Looks up a key in an object value, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut().and_then(|obj| obj.get_mut(key))
    }

    /// Looks up an element of an array value by index.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    /// Looks up an element of an array value by index, mutably.
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.as_array_mut().and_then(|arr| arr.get_mut(index))
    }

    /// Inserts a key-value pair into an object value, returning the previous
    /// value for the key if any.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::KindMismatch`] if the value is not an object.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<Option<Value>> {
        match self {
            Value::Object(obj) => Ok(obj.insert(key.into(), value)),
            other => Err(Error::kind_mismatch("object", other.kind())),
        }
    }

    /// Appends an element to an array value.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::KindMismatch`] if the value is not an array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bijson::Value;
    ///
    /// let mut arr = Value::Array(vec![]);
    /// arr.push(Value::Bool(true)).unwrap();
    /// assert_eq!(arr.len(), 1);
    /// ```
    pub fn push(&mut self, value: Value) -> Result<()> {
        match self {
            Value::Array(arr) => {
                arr.push(value);
                Ok(())
            }
            other => Err(Error::kind_mismatch("array", other.kind())),
        }
    }

    /// Removes a key from an object value, returning its value if present.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::KindMismatch`] if the value is not an object.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        match self {
            Value::Object(obj) => Ok(obj.remove(key)),
            other => Err(Error::kind_mismatch("object", other.kind())),
        }
    }

    /// Removes an element from an array value by index, returning it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::KindMismatch`] if the value is not an array, and
    /// with [`Error::OutOfRange`] if the index is past the end.
    pub fn remove_index(&mut self, index: usize) -> Result<Value> {
        match self {
            Value::Array(arr) => {
                if index < arr.len() {
                    Ok(arr.remove(index))
                } else {
                    Err(Error::OutOfRange("array index"))
                }
            }
            other => Err(Error::kind_mismatch("array", other.kind())),
        }
    }

    /// Returns `true` if an object value contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|obj| obj.contains_key(key))
    }

    /// Number of elements of an array or entries of an object; `0` for
    /// every other kind.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(obj) => obj.len(),
            _ => 0,
        }
    }

    /// Returns `true` if an array or object value has no children. Scalar
    /// values are considered empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all children of an array or object value. No effect on
    /// scalars.
    pub fn clear(&mut self) {
        match self {
            Value::Array(arr) => arr.clear(),
            Value::Object(obj) => obj.clear(),
            _ => {}
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value as compact text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_text(self))
    }
}

// TryFrom conversions across integer widths. Wrong kinds fail with
// KindMismatch, right-family values that overflow fail with OutOfRange.

impl TryFrom<&Value> for i32 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Int(v) => Ok(*v),
            Value::UInt(v) => i32::try_from(*v).map_err(|_| Error::OutOfRange("int32")),
            Value::Int64(v) => i32::try_from(*v).map_err(|_| Error::OutOfRange("int32")),
            Value::UInt64(v) => i32::try_from(*v).map_err(|_| Error::OutOfRange("int32")),
            other => Err(Error::kind_mismatch("integer", other.kind())),
        }
    }
}

impl TryFrom<&Value> for u32 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Int(v) => u32::try_from(*v).map_err(|_| Error::OutOfRange("uint32")),
            Value::UInt(v) => Ok(*v),
            Value::Int64(v) => u32::try_from(*v).map_err(|_| Error::OutOfRange("uint32")),
            Value::UInt64(v) => u32::try_from(*v).map_err(|_| Error::OutOfRange("uint32")),
            other => Err(Error::kind_mismatch("integer", other.kind())),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Int(v) => Ok(i64::from(*v)),
            Value::UInt(v) => Ok(i64::from(*v)),
            Value::Int64(v) => Ok(*v),
            Value::UInt64(v) => i64::try_from(*v).map_err(|_| Error::OutOfRange("int64")),
            other => Err(Error::kind_mismatch("integer", other.kind())),
        }
    }
}

impl TryFrom<&Value> for u64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Int(v) => u64::try_from(*v).map_err(|_| Error::OutOfRange("uint64")),
            Value::UInt(v) => Ok(u64::from(*v)),
            Value::Int64(v) => u64::try_from(*v).map_err(|_| Error::OutOfRange("uint64")),
            Value::UInt64(v) => Ok(*v),
            other => Err(Error::kind_mismatch("integer", other.kind())),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| Error::kind_mismatch("number", value.kind()))
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| Error::kind_mismatch("boolean", value.kind()))
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::kind_mismatch("string", other.kind())),
        }
    }
}

// From constructors mirroring the typed widths.

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(i32::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::UInt(u32::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::UInt(u32::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt64(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Double(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<JsonMap> for Value {
    fn from(value: JsonMap) -> Self {
        Value::Object(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::UInt(v) => serializer.serialize_u32(*v),
            Value::Int64(v) => serializer.serialize_i64(*v),
            Value::UInt64(v) => serializer.serialize_u64(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                match i32::try_from(value) {
                    Ok(narrow) => Ok(Value::Int(narrow)),
                    Err(_) => Ok(Value::Int64(value)),
                }
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                match u32::try_from(value) {
                    Ok(narrow) => Ok(Value::UInt(narrow)),
                    Err(_) => Ok(Value::UInt64(value)),
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Double(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JsonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::Bool(true).kind(), Kind::Boolean);
        assert_eq!(Value::Int(-1).kind(), Kind::Int);
        assert_eq!(Value::UInt(1).kind(), Kind::UInt);
        assert_eq!(Value::Int64(-1).kind(), Kind::Int64);
        assert_eq!(Value::UInt64(1).kind(), Kind::UInt64);
        assert_eq!(Value::Double(0.5).kind(), Kind::Double);
    }

    #[test]
    fn test_tryfrom_widths() {
        let v = Value::UInt(42);
        assert_eq!(i32::try_from(&v).unwrap(), 42);
        assert_eq!(u64::try_from(&v).unwrap(), 42);

        let big = Value::UInt64(u64::MAX);
        assert_eq!(i64::try_from(&big), Err(Error::OutOfRange("int64")));

        let negative = Value::Int(-1);
        assert_eq!(u32::try_from(&negative), Err(Error::OutOfRange("uint32")));

        let text = Value::from("x");
        assert!(matches!(
            i32::try_from(&text),
            Err(Error::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_tryfrom_f64() {
        assert_eq!(f64::try_from(&Value::Double(3.5)).unwrap(), 3.5);
        assert_eq!(f64::try_from(&Value::Int(-2)).unwrap(), -2.0);
        assert!(f64::try_from(&Value::Null).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(-42i32), Value::Int(-42));
        assert_eq!(Value::from(42u32), Value::UInt(42));
        assert_eq!(Value::from(42i64), Value::Int64(42));
        assert_eq!(Value::from(42u64), Value::UInt64(42));
        assert_eq!(Value::from(3.5f64), Value::Double(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
    }

    #[test]
    fn test_container_navigation() {
        let mut obj = Value::Object(JsonMap::new());
        obj.insert("a", Value::UInt(1)).unwrap();
        obj.insert("b", Value::Bool(false)).unwrap();

        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("a"));
        assert_eq!(obj.get("a"), Some(&Value::UInt(1)));
        assert_eq!(obj.remove("a").unwrap(), Some(Value::UInt(1)));
        assert!(!obj.contains_key("a"));

        let mut arr = Value::Array(vec![]);
        arr.push(Value::Null).unwrap();
        arr.push(Value::UInt(7)).unwrap();
        assert_eq!(arr.get_index(1), Some(&Value::UInt(7)));
        assert_eq!(arr.remove_index(0).unwrap(), Value::Null);
        assert_eq!(arr.remove_index(5), Err(Error::OutOfRange("array index")));

        assert!(Value::Null.push(Value::Null).is_err());
        let mut scalar = Value::Bool(true);
        assert!(scalar.insert("k", Value::Null).is_err());
    }

    #[test]
    fn test_clear() {
        let mut arr = Value::Array(vec![Value::Null, Value::Null]);
        arr.clear();
        assert!(arr.is_empty());
    }
}
