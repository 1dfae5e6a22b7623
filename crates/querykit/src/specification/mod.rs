//! # Specifications
//!
//! A [`Specification`] is a reusable predicate over an entity type. Callers build
//! one from zero or more criteria and hand it to a data-access layer, which uses
//! it to filter a collection without the caller knowing how rows are stored.
//!
//! ## Composition
//!
//! Composition is conjunctive only: [`Specification::and`] and
//! [`SpecificationBuilder`] both combine criteria with AND. There are no OR / NOT
//! combinators. A specification with no criteria matches every entity; an empty
//! criteria list is a valid state, never an error.
//!
//! ## Lifecycle
//!
//! Specifications are built per request and dropped once the query has run.
//! They are immutable once built, and cheap to clone (the predicate is shared).
//!
//! ## Provided Specifications
//!
//! - [`date_range`]: inclusive creation-time window for [`Timestamped`] entities.
//! - [`attribute`]: condition on an owned extended attribute.
//! - [`extended_attribute_spec`]: the specification behind an
//!   [`ExtendedAttributePaginationFilter`](crate::validation::ExtendedAttributePaginationFilter).
//!
//! [`Timestamped`]: crate::entity::Timestamped

use std::fmt;
use std::sync::Arc;

mod date_range;
mod extended;

pub use date_range::date_range;
pub use extended::{attribute, extended_attribute_spec};

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A single boolean predicate over `T`.
pub struct Specification<T> {
    predicate: Option<Predicate<T>>,
}

impl<T> Specification<T> {
    /// The specification that matches every entity.
    pub fn all() -> Self {
        Self { predicate: None }
    }

    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Some(Arc::new(predicate)),
        }
    }

    pub fn is_match_all(&self) -> bool {
        self.predicate.is_none()
    }

    pub fn is_satisfied_by(&self, entity: &T) -> bool {
        match &self.predicate {
            Some(predicate) => predicate(entity),
            None => true,
        }
    }

    /// Iterate over the items that satisfy this specification.
    pub fn filter<'a, I>(&'a self, items: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: std::borrow::Borrow<T>,
    {
        items
            .into_iter()
            .filter(move |item| self.is_satisfied_by(std::borrow::Borrow::borrow(item)))
    }
}

impl<T: 'static> Specification<T> {
    /// Both this and `other` must hold.
    pub fn and(self, other: Specification<T>) -> Self {
        match (self.predicate, other.predicate) {
            (None, None) => Self::all(),
            (Some(p), None) | (None, Some(p)) => Self { predicate: Some(p) },
            (Some(a), Some(b)) => Self::new(move |entity| a(entity) && b(entity)),
        }
    }
}

impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
        }
    }
}

impl<T> Default for Specification<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("match_all", &self.is_match_all())
            .finish()
    }
}

/// Collects criteria and builds their conjunction.
pub struct SpecificationBuilder<T> {
    criteria: Vec<Predicate<T>>,
}

impl<T: 'static> SpecificationBuilder<T> {
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    pub fn with<F>(mut self, criterion: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.criteria.push(Arc::new(criterion));
        self
    }

    /// Add the criterion only when `condition` holds. Lets optional request
    /// fields map onto criteria without branching at the call site.
    pub fn with_if<F>(self, condition: bool, criterion: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        if condition {
            self.with(criterion)
        } else {
            self
        }
    }

    pub fn with_spec(mut self, spec: Specification<T>) -> Self {
        if let Some(predicate) = spec.predicate {
            self.criteria.push(predicate);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn build(mut self) -> Specification<T> {
        match self.criteria.len() {
            0 => Specification::all(),
            1 => Specification {
                predicate: self.criteria.pop(),
            },
            _ => {
                let criteria = self.criteria;
                Specification::new(move |entity| criteria.iter().all(|c| c(entity)))
            }
        }
    }
}

impl<T: 'static> Default for SpecificationBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
