//! # Extended Attributes
//!
//! Extended attributes are typed key/value pairs attached to an entity, letting
//! callers define fields at runtime without a schema change. Each attribute
//! belongs to exactly one entity; the entity owns the collection.
//!
//! ## Attribute Types
//!
//! | Type | Rust value | Example |
//! |------|------------|---------|
//! | `Decimal` | `rust_decimal::Decimal` | royalty percentage |
//! | `Text` | `String` | colour, rarity |
//! | `DateTime` | `DateTime<Utc>` | mint date |
//! | `Json` | `serde_json::Value` | trait bundles |
//! | `Boolean` | `bool` | featured flag |
//! | `Integer` | `i64` | edition number |
//!
//! ## Storage Shape
//!
//! In memory a value is an [`AttrValue`] enum, so the type discriminator is
//! derived and cannot disagree with the value. Storage rows use one nullable
//! column per type plus a `type` column ([`ExtendedAttributeRecord`]);
//! converting a row back into an [`ExtendedAttribute`] checks that exactly the
//! declared column is populated.
//!
//! ## Usage
//!
//! ```ignore
//! let attr = ExtendedAttribute::new(item_id, "royalty", Decimal::new(25, 1));
//! let record = ExtendedAttributeRecord::from(attr.clone());
//! assert_eq!(ExtendedAttribute::try_from(record)?, attr);
//!
//! let criterion = AttributeCriterion::gte("royalty", Decimal::new(2, 0).into());
//! if criterion.matches(&item) { ... }
//! ```

use thiserror::Error;

mod extended;
mod filter;
mod value;

pub use extended::{
    ExtendedAttribute, ExtendedAttributeRecord, ExtendedAttributes, HasExtendedAttributes,
};
pub use filter::{AttributeCriterion, FilterOp};
pub use value::{AttrValue, AttributeType};

/// Violations of the value / discriminator invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    #[error("unknown attribute type '{0}'")]
    UnknownType(String),

    #[error("attribute declared as {0} has no {0} value")]
    MissingValue(AttributeType),

    #[error("attribute declared as {declared} also carries values for: {}", join_types(.populated))]
    ConflictingValues {
        declared: AttributeType,
        populated: Vec<AttributeType>,
    },

    #[error("attribute type is {expected}, cannot assign a {found} value")]
    TypeMismatch {
        expected: AttributeType,
        found: AttributeType,
    },

    #[error("attribute belongs to entity {found}, not {expected}")]
    OwnerMismatch { expected: String, found: String },
}

fn join_types(types: &[AttributeType]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
