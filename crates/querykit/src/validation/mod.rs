//! # Request Validation
//!
//! Validators check a request object before any query runs and report every
//! problem at once, field by field. The caller gets a single
//! [`QueryError::Validation`](crate::error::QueryError::Validation) carrying the
//! whole list, which maps to HTTP 400.
//!
//! - [`PaginationFilterValidator`]: paging bounds, order expressions and search
//!   fields of any [`Queryable`] entity.
//! - [`ExtendedAttributeFilterValidator`]: required owner id and key shapes of
//!   an extended-attribute list request, plus the pagination rules.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::config::QueryConfig;
use crate::entity::Queryable;
use crate::error::{QueryError, Result};
use crate::pagination::{OrderSpec, PaginationFilter};

mod extended;
mod key;

pub use extended::{ExtendedAttributeFilterValidator, ExtendedAttributePaginationFilter};
pub use key::{validate_key, KeyValidationError};

/// A validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found in one request, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(FieldError::new(field, message));
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(QueryError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Checks a request object and reports field-level errors.
pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T) -> ValidationErrors;

    fn check(&self, value: &T) -> Result<()> {
        self.validate(value).into_result()
    }
}

/// Paging, ordering and search rules for list requests over `T`.
pub struct PaginationFilterValidator<'a, T> {
    config: &'a QueryConfig,
    _entity: PhantomData<fn() -> T>,
}

impl<'a, T: Queryable> PaginationFilterValidator<'a, T> {
    pub fn new(config: &'a QueryConfig) -> Self {
        Self {
            config,
            _entity: PhantomData,
        }
    }
}

impl<T: Queryable> Validator<PaginationFilter> for PaginationFilterValidator<'_, T> {
    fn validate(&self, filter: &PaginationFilter) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let max = self.config.max_page_size;

        if filter.page_number < 1 {
            errors.add("page_number", "must be greater than or equal to 1");
        }
        if let Some(size) = filter.page_size {
            if size < 1 || size > max {
                errors.add("page_size", format!("must be between 1 and {}", max));
            }
        }

        for raw in &filter.order_by {
            match OrderSpec::parse(raw) {
                Some(spec) if T::has_field(&spec.field) => {}
                Some(spec) => errors.add("order_by", format!("unknown field '{}'", spec.field)),
                None => errors.add(
                    "order_by",
                    format!("'{}' is not a valid order expression", raw),
                ),
            }
        }

        for field in &filter.search_fields {
            if !T::has_field(field) {
                errors.add("search_fields", format!("unknown field '{}'", field));
            }
        }

        if let Some(keyword) = &filter.keyword {
            let limit = self.config.max_keyword_length;
            if keyword.chars().count() > limit {
                errors.add("keyword", format!("must be at most {} characters", limit));
            }
        }

        errors
    }
}
