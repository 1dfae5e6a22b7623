use chrono::{DateTime, Utc};

use super::{Specification, SpecificationBuilder};
use crate::entity::Timestamped;

/// Entities created within `[start, end]`.
///
/// Either bound may be absent. With no bounds every entity matches; a start
/// after the end matches nothing.
pub fn date_range<T>(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Specification<T>
where
    T: Timestamped + 'static,
{
    SpecificationBuilder::new()
        .with_if(start.is_some(), move |e: &T| {
            start.map_or(true, |from| e.created_at() >= from)
        })
        .with_if(end.is_some(), move |e: &T| {
            end.map_or(true, |to| e.created_at() <= to)
        })
        .build()
}
