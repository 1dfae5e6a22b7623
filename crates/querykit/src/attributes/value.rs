//! Attribute value types and their discriminator.
//!
//! [`AttrValue`] is the runtime representation of an extended attribute value.
//! The discriminator ([`AttributeType`]) is always derived from the variant, so a
//! value can never claim to be of a type it does not hold.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttributeError;

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttributeType {
    Decimal,
    Text,
    DateTime,
    Json,
    Boolean,
    Integer,
}

impl AttributeType {
    pub const ALL: [AttributeType; 6] = [
        AttributeType::Decimal,
        AttributeType::Text,
        AttributeType::DateTime,
        AttributeType::Json,
        AttributeType::Boolean,
        AttributeType::Integer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Decimal => "Decimal",
            AttributeType::Text => "Text",
            AttributeType::DateTime => "DateTime",
            AttributeType::Json => "Json",
            AttributeType::Boolean => "Boolean",
            AttributeType::Integer => "Integer",
        }
    }

    /// Whether values of this type have a total order.
    pub fn is_orderable(&self) -> bool {
        !matches!(self, AttributeType::Json)
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeType {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        AttributeType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| AttributeError::UnknownType(s.to_string()))
    }
}

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum AttrValue {
    Decimal(Decimal),
    Text(String),
    DateTime(DateTime<Utc>),
    Json(serde_json::Value),
    Boolean(bool),
    Integer(i64),
}

impl AttrValue {
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            AttrValue::Decimal(_) => AttributeType::Decimal,
            AttrValue::Text(_) => AttributeType::Text,
            AttrValue::DateTime(_) => AttributeType::DateTime,
            AttrValue::Json(_) => AttributeType::Json,
            AttrValue::Boolean(_) => AttributeType::Boolean,
            AttrValue::Integer(_) => AttributeType::Integer,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            AttrValue::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            AttrValue::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            AttrValue::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Compare two values of the same type.
    ///
    /// Integers and decimals compare numerically with each other. Returns `None`
    /// for mismatched types and for JSON, which has no order.
    pub fn compare(&self, other: &AttrValue) -> Option<Ordering> {
        match (self, other) {
            (AttrValue::Decimal(a), AttrValue::Decimal(b)) => Some(a.cmp(b)),
            (AttrValue::Integer(a), AttrValue::Integer(b)) => Some(a.cmp(b)),
            (AttrValue::Decimal(a), AttrValue::Integer(b)) => Some(a.cmp(&Decimal::from(*b))),
            (AttrValue::Integer(a), AttrValue::Decimal(b)) => Some(Decimal::from(*a).cmp(b)),
            (AttrValue::Text(a), AttrValue::Text(b)) => Some(a.cmp(b)),
            (AttrValue::DateTime(a), AttrValue::DateTime(b)) => Some(a.cmp(b)),
            (AttrValue::Boolean(a), AttrValue::Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Position of this value's type in a mixed-type ordering. Integers and
    /// decimals share one numeric class. JSON has no order and returns `None`.
    pub fn order_class(&self) -> Option<u8> {
        match self {
            AttrValue::Integer(_) | AttrValue::Decimal(_) => Some(0),
            AttrValue::Text(_) => Some(1),
            AttrValue::DateTime(_) => Some(2),
            AttrValue::Boolean(_) => Some(3),
            AttrValue::Json(_) => None,
        }
    }

    /// Text rendering used for keyword search.
    pub fn search_text(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Text(v) => Cow::Borrowed(v),
            AttrValue::Decimal(v) => Cow::Owned(v.normalize().to_string()),
            AttrValue::DateTime(v) => Cow::Owned(v.to_rfc3339()),
            AttrValue::Json(v) => Cow::Owned(v.to_string()),
            AttrValue::Boolean(v) => Cow::Owned(v.to_string()),
            AttrValue::Integer(v) => Cow::Owned(v.to_string()),
        }
    }
}

impl From<Decimal> for AttrValue {
    fn from(v: Decimal) -> Self {
        AttrValue::Decimal(v)
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for AttrValue {
    fn from(v: DateTime<Utc>) -> Self {
        AttrValue::DateTime(v)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(v: serde_json::Value) -> Self {
        AttrValue::Json(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Boolean(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Integer(v)
    }
}
