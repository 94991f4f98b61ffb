//! Structured key-value fields attached to a single log call

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Whether this value has a JSON representation
    ///
    /// Non-finite floats (NaN, infinities) do not.
    pub fn is_encodable(&self) -> bool {
        match self {
            FieldValue::Float(f) => f.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(i: $t) -> Self {
                FieldValue::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(u: $t) -> Self {
                FieldValue::UInt(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(ts: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(ts)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A single key/value pair supplied with a log call
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: FieldValue,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn into_parts(self) -> (String, FieldValue) {
        (self.key, self.value)
    }
}

/// Shorthand for [`Field::new`]
pub fn new_field(key: impl Into<String>, value: impl Into<FieldValue>) -> Field {
    Field::new(key, value)
}

/// Older name of [`new_field`], kept for existing call sites
pub fn field_func(key: impl Into<String>, value: impl Into<FieldValue>) -> Field {
    new_field(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_conversions() {
        assert_eq!(Field::new("k", 1).value(), &FieldValue::Int(1));
        assert_eq!(Field::new("k", 7u32).value(), &FieldValue::UInt(7));
        assert_eq!(Field::new("k", "v").value(), &FieldValue::String("v".into()));
        assert_eq!(Field::new("k", true).value(), &FieldValue::Bool(true));
        assert_eq!(Field::new("k", 2.5).value(), &FieldValue::Float(2.5));
        assert_eq!(Field::new("k", None::<i32>).value(), &FieldValue::Null);
    }

    #[test]
    fn test_field_json_shape() {
        let json = serde_json::to_string(&FieldValue::Int(42)).unwrap();
        assert_eq!(json, "42");

        let json = serde_json::to_string(&FieldValue::String("alice".into())).unwrap();
        assert_eq!(json, "\"alice\"");
    }

    #[test]
    fn test_non_finite_float_is_not_encodable() {
        assert!(!FieldValue::Float(f64::NAN).is_encodable());
        assert!(!FieldValue::Float(f64::INFINITY).is_encodable());
        assert!(FieldValue::Float(0.5).is_encodable());
        assert!(FieldValue::Null.is_encodable());
    }

    #[test]
    fn test_into_parts() {
        let (key, value) = new_field("user", "bob").into_parts();
        assert_eq!(key, "user");
        assert_eq!(value.to_string(), "bob");
    }

    #[test]
    fn test_field_func_matches_new_field() {
        assert_eq!(field_func("retry", 3), new_field("retry", 3));
        assert_eq!(field_func("user", "bob").key(), "user");
    }
}
