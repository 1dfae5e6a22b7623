//! # Entities
//!
//! Every persisted row is an [`Entity`] with a typed identifier. The traits here
//! are the only things the query layer knows about a row:
//!
//! - [`Entity`]: identity, used by stores and as the final ordering tie-break.
//! - [`Timestamped`]: creation time, used by date-range specifications.
//! - [`Queryable`]: named field access, used by ordering and keyword search.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::attributes::AttrValue;

/// Contract for entity identifiers.
pub trait EntityId: Clone + Debug + Display + Eq + Ord + Hash {
    /// Whether this id is the "unset" value (nil UUID, blank string, zero).
    fn is_empty(&self) -> bool;

    /// The id as a field value, for ordering and search.
    fn to_attr_value(&self) -> AttrValue;
}

impl EntityId for Uuid {
    fn is_empty(&self) -> bool {
        self.is_nil()
    }

    fn to_attr_value(&self) -> AttrValue {
        AttrValue::Text(self.to_string())
    }
}

impl EntityId for String {
    fn is_empty(&self) -> bool {
        self.trim().is_empty()
    }

    fn to_attr_value(&self) -> AttrValue {
        AttrValue::Text(self.clone())
    }
}

macro_rules! integer_entity_id {
    ($($ty:ty),*) => {
        $(
            impl EntityId for $ty {
                fn is_empty(&self) -> bool {
                    *self == 0
                }

                fn to_attr_value(&self) -> AttrValue {
                    AttrValue::Integer(i64::from(*self))
                }
            }
        )*
    };
}

integer_entity_id!(i32, i64, u32);

impl EntityId for u64 {
    fn is_empty(&self) -> bool {
        *self == 0
    }

    fn to_attr_value(&self) -> AttrValue {
        match i64::try_from(*self) {
            Ok(v) => AttrValue::Integer(v),
            Err(_) => AttrValue::Decimal((*self).into()),
        }
    }
}

/// A persisted row with a typed identifier.
pub trait Entity {
    type Id: EntityId;

    fn id(&self) -> &Self::Id;
}

/// Entities that record when they were created.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
}

/// Entities whose fields can be addressed by name.
pub trait Queryable: Entity {
    /// Field names accepted in order-by and search lists.
    const FIELDS: &'static [&'static str];

    /// Fields searched when a filter names none.
    const DEFAULT_SEARCH_FIELDS: &'static [&'static str];

    /// Current value of a field. `None` if the field is unknown or unset.
    ///
    /// Callers in this crate pass names as spelled in `FIELDS`.
    fn field(&self, name: &str) -> Option<AttrValue>;

    /// The `FIELDS` entry matching `name`, ignoring ASCII case.
    fn canonical_field(name: &str) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .copied()
            .find(|f| f.eq_ignore_ascii_case(name))
    }

    fn has_field(name: &str) -> bool {
        Self::canonical_field(name).is_some()
    }
}
