//! # Query Execution
//!
//! Runs a list request end to end:
//!
//! 1. Validate the request; any field error aborts with HTTP 400.
//! 2. Ask the [`Repository`] for the rows matching the [`Specification`].
//! 3. Keyword search, order, then cut the requested page.

use crate::attributes::ExtendedAttribute;
use crate::config::QueryConfig;
use crate::entity::{EntityId, Queryable};
use crate::error::Result;
use crate::pagination::{self, PaginatedResult, PaginationFilter};
use crate::specification::{extended_attribute_spec, Specification};
use crate::store::Repository;
use crate::validation::{
    ExtendedAttributeFilterValidator, ExtendedAttributePaginationFilter,
    PaginationFilterValidator, Validator,
};

/// One page of the entities matching `spec`, searched and ordered per `filter`.
pub fn paginate<T, R>(
    store: &R,
    spec: &Specification<T>,
    filter: &PaginationFilter,
    config: &QueryConfig,
) -> Result<PaginatedResult<T>>
where
    T: Queryable,
    R: Repository<T> + ?Sized,
{
    PaginationFilterValidator::<T>::new(config).check(filter)?;
    page(store, spec, filter, config)
}

/// One page of the extended attributes selected by `filter`.
pub fn query_extended_attributes<Id, R>(
    store: &R,
    filter: &ExtendedAttributePaginationFilter<Id>,
    config: &QueryConfig,
) -> Result<PaginatedResult<ExtendedAttribute<Id>>>
where
    Id: EntityId + Send + Sync + 'static,
    R: Repository<ExtendedAttribute<Id>> + ?Sized,
{
    ExtendedAttributeFilterValidator::<Id>::new(config).check(filter)?;
    let spec = extended_attribute_spec(filter);
    page(store, &spec, &filter.pagination, config)
}

fn page<T, R>(
    store: &R,
    spec: &Specification<T>,
    filter: &PaginationFilter,
    config: &QueryConfig,
) -> Result<PaginatedResult<T>>
where
    T: Queryable,
    R: Repository<T> + ?Sized,
{
    let matched = store.list(spec)?;
    let matched_count = matched.len();

    let mut items = pagination::search(matched, filter);
    let order = filter.order_specs();
    pagination::sort(&mut items, &order);

    let page_size = filter.effective_page_size(config);
    tracing::debug!(
        matched = matched_count,
        searched = items.len(),
        page = filter.page_number,
        page_size,
        order_keys = order.len(),
        "query planned"
    );
    Ok(PaginatedResult::from_items(items, filter.page_number, page_size))
}
