//! Attribute criteria.
//!
//! An [`AttributeCriterion`] is a condition on one extended attribute of an
//! entity. Criteria turn into specification predicates, so a list endpoint can
//! filter on runtime-defined fields the same way it filters on columns.

use std::cmp::Ordering;

use super::{AttrValue, HasExtendedAttributes};

/// Operation used to compare an attribute against the criterion value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Case-insensitive substring match on text values.
    Contains,
}

/// A condition on a single extended attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeCriterion {
    /// External id of the attribute (e.g. "royalty", "color")
    pub external_id: String,
    pub op: FilterOp,
    pub value: AttrValue,
}

impl AttributeCriterion {
    pub fn new(external_id: impl Into<String>, op: FilterOp, value: AttrValue) -> Self {
        Self {
            external_id: external_id.into(),
            op,
            value,
        }
    }

    pub fn eq(external_id: impl Into<String>, value: AttrValue) -> Self {
        Self::new(external_id, FilterOp::Eq, value)
    }

    pub fn ne(external_id: impl Into<String>, value: AttrValue) -> Self {
        Self::new(external_id, FilterOp::Ne, value)
    }

    pub fn gt(external_id: impl Into<String>, value: AttrValue) -> Self {
        Self::new(external_id, FilterOp::Gt, value)
    }

    pub fn gte(external_id: impl Into<String>, value: AttrValue) -> Self {
        Self::new(external_id, FilterOp::Gte, value)
    }

    pub fn lt(external_id: impl Into<String>, value: AttrValue) -> Self {
        Self::new(external_id, FilterOp::Lt, value)
    }

    pub fn lte(external_id: impl Into<String>, value: AttrValue) -> Self {
        Self::new(external_id, FilterOp::Lte, value)
    }

    pub fn contains(external_id: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::new(external_id, FilterOp::Contains, AttrValue::Text(needle.into()))
    }

    /// Check the criterion against an entity's attributes.
    ///
    /// A missing attribute never matches, not even for `Ne`. Values of a
    /// different type never match.
    pub fn matches<E: HasExtendedAttributes>(&self, entity: &E) -> bool {
        match entity.extended_attributes().value(&self.external_id) {
            Some(actual) => self.matches_value(actual),
            None => false,
        }
    }

    pub fn matches_value(&self, actual: &AttrValue) -> bool {
        match self.op {
            FilterOp::Eq => {
                actual.compare(&self.value) == Some(Ordering::Equal) || *actual == self.value
            }
            FilterOp::Ne => match (actual, &self.value) {
                (AttrValue::Json(a), AttrValue::Json(b)) => a != b,
                _ => actual
                    .compare(&self.value)
                    .is_some_and(|o| o != Ordering::Equal),
            },
            FilterOp::Gt => actual.compare(&self.value) == Some(Ordering::Greater),
            FilterOp::Gte => matches!(
                actual.compare(&self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FilterOp::Lt => actual.compare(&self.value) == Some(Ordering::Less),
            FilterOp::Lte => matches!(
                actual.compare(&self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            FilterOp::Contains => match (actual, &self.value) {
                (AttrValue::Text(haystack), AttrValue::Text(needle)) => haystack
                    .to_lowercase()
                    .contains(&needle.to_lowercase()),
                _ => false,
            },
        }
    }
}
