//! Sample rows for tests.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use crate::attributes::ExtendedAttribute;

/// Midnight UTC on 2024-01-`day`.
pub fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Seven attributes across entities 1 and 2, created on consecutive days
/// starting 2024-01-01.
pub fn attributes() -> Vec<ExtendedAttribute<i64>> {
    let rows = vec![
        ExtendedAttribute::text(1, "color", "Crimson Red").with_group("style"),
        ExtendedAttribute::text(1, "background", "night sky").with_group("style"),
        ExtendedAttribute::decimal(1, "royalty", Decimal::new(75, 1)).with_group("economics"),
        ExtendedAttribute::integer(1, "edition", 12),
        ExtendedAttribute::boolean(1, "featured", true),
        ExtendedAttribute::json(1, "traits", json!({"eyes": "laser"})),
        ExtendedAttribute::text(2, "color", "Ocean Blue").with_group("style"),
    ];
    rows.into_iter()
        .enumerate()
        .map(|(i, mut attr)| {
            attr.created_at = day(i as u32 + 1);
            attr
        })
        .collect()
}
