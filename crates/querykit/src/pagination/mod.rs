//! # Pagination
//!
//! [`PaginationFilter`] carries the paging, ordering and keyword-search
//! parameters shared by every list request. The helpers in this module apply
//! those parameters to a collection that has already been narrowed by a
//! [`Specification`](crate::specification::Specification):
//!
//! 1. **Search**: keep items where any searched field contains the keyword.
//! 2. **Order**: stable multi-key sort, ties broken by id.
//! 3. **Page**: cut the requested window into a [`PaginatedResult`].
//!
//! ## Order Expressions
//!
//! Each `order_by` entry is `"field"`, `"field asc"` or `"field desc"`. The
//! direction is case-insensitive. Items without a comparable value for a key
//! always sort after items that have one, whatever the direction.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::attributes::AttrValue;
use crate::config::QueryConfig;
use crate::entity::Queryable;

mod result;

pub use result::PaginatedResult;

/// Paging, ordering and search parameters of a list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationFilter {
    /// 1-based page number.
    pub page_number: usize,
    /// Falls back to the configured default when absent.
    pub page_size: Option<usize>,
    pub order_by: Vec<String>,
    pub keyword: Option<String>,
    /// Fields searched for `keyword`. Empty means the entity's defaults.
    pub search_fields: Vec<String>,
}

impl Default for PaginationFilter {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: None,
            order_by: Vec::new(),
            keyword: None,
            search_fields: Vec::new(),
        }
    }
}

impl PaginationFilter {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    pub fn ordered_by(mut self, expr: impl Into<String>) -> Self {
        self.order_by.push(expr.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn search_in(mut self, field: impl Into<String>) -> Self {
        self.search_fields.push(field.into());
        self
    }

    pub fn effective_page_size(&self, config: &QueryConfig) -> usize {
        self.page_size.unwrap_or(config.default_page_size)
    }

    /// The keyword, if it is set and not blank.
    pub fn search_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Parsed order expressions. Malformed entries are skipped; the validator
    /// reports them before a query runs.
    pub fn order_specs(&self) -> Vec<OrderSpec> {
        self.order_by
            .iter()
            .filter_map(|raw| OrderSpec::parse(raw))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One parsed `order_by` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse `"field"`, `"field asc"` or `"field desc"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split_whitespace();
        let field = parts.next()?;
        let direction = match parts.next() {
            None => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(_) => return None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// Keep the items where any searched field contains the keyword
/// (case-insensitive). A blank keyword keeps everything.
pub fn search<T: Queryable>(items: Vec<T>, filter: &PaginationFilter) -> Vec<T> {
    let Some(keyword) = filter.search_keyword() else {
        return items;
    };
    let needle = keyword.to_lowercase();
    let fields: Vec<&str> = if filter.search_fields.is_empty() {
        T::DEFAULT_SEARCH_FIELDS.to_vec()
    } else {
        filter
            .search_fields
            .iter()
            .map(|f| T::canonical_field(f).unwrap_or(f.as_str()))
            .collect()
    };

    items
        .into_iter()
        .filter(|item| {
            fields.iter().any(|field| {
                item.field(field)
                    .map(|v| v.search_text().to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .collect()
}

/// Sort by the given keys, then by id.
///
/// Values of different types order by type class (numbers, text, dates,
/// booleans). Missing and JSON values sort last in both directions.
pub fn sort<T: Queryable>(items: &mut [T], specs: &[OrderSpec]) {
    let fields: Vec<&str> = specs
        .iter()
        .map(|s| T::canonical_field(&s.field).unwrap_or(s.field.as_str()))
        .collect();
    items.sort_by(|a, b| {
        for (spec, field) in specs.iter().zip(&fields) {
            let ord = compare_field(a, b, field, spec.direction);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.id().cmp(b.id())
    });
}

fn sort_key<T: Queryable>(item: &T, field: &str) -> Option<(u8, AttrValue)> {
    let value = item.field(field)?;
    value.order_class().map(|class| (class, value))
}

fn compare_field<T: Queryable>(a: &T, b: &T, field: &str, direction: SortDirection) -> Ordering {
    match (sort_key(a, field), sort_key(b, field)) {
        (Some((ca, x)), Some((cb, y))) => {
            let ord = if ca == cb {
                x.compare(&y).unwrap_or(Ordering::Equal)
            } else {
                ca.cmp(&cb)
            };
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
