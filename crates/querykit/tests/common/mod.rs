//! Shared test helpers: a marketplace listing entity with extended attributes.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use querykit::attributes::{AttrValue, ExtendedAttribute, ExtendedAttributes, HasExtendedAttributes};
use querykit::entity::{Entity, Queryable, Timestamped};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub attributes: ExtendedAttributes<Uuid>,
}

impl Listing {
    pub fn new(title: &str, price: Decimal, created_at: DateTime<Utc>) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            title: title.to_string(),
            price,
            created_at,
            attributes: ExtendedAttributes::new(id),
        }
    }

    pub fn with_attr(mut self, external_id: &str, value: AttrValue) -> Self {
        self.attributes
            .insert(ExtendedAttribute::new(self.id, external_id, value))
            .unwrap();
        self
    }
}

impl Entity for Listing {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}

impl Timestamped for Listing {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Queryable for Listing {
    const FIELDS: &'static [&'static str] = &["id", "title", "price", "created_at"];
    const DEFAULT_SEARCH_FIELDS: &'static [&'static str] = &["title"];

    fn field(&self, name: &str) -> Option<AttrValue> {
        match name {
            "id" => Some(AttrValue::Text(self.id.to_string())),
            "title" => Some(AttrValue::Text(self.title.clone())),
            "price" => Some(AttrValue::Decimal(self.price)),
            "created_at" => Some(AttrValue::DateTime(self.created_at)),
            _ => None,
        }
    }
}

impl HasExtendedAttributes for Listing {
    fn extended_attributes(&self) -> &ExtendedAttributes<Uuid> {
        &self.attributes
    }
}

/// Noon UTC on 2024-03-`day`.
pub fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

/// Five listings created on March 1st, 5th, 10th, 15th and 20th.
pub fn listings() -> Vec<Listing> {
    vec![
        Listing::new("Brass lamp", Decimal::new(4500, 2), march(1))
            .with_attr("condition", AttrValue::Text("used".into()))
            .with_attr("featured", AttrValue::Boolean(true)),
        Listing::new("Oak table", Decimal::new(32000, 2), march(5))
            .with_attr("condition", AttrValue::Text("new".into()))
            .with_attr("weight_kg", AttrValue::Integer(40)),
        Listing::new("Lamp shade", Decimal::new(1200, 2), march(10))
            .with_attr("condition", AttrValue::Text("new".into())),
        Listing::new("Desk chair", Decimal::new(8900, 2), march(15))
            .with_attr("weight_kg", AttrValue::Integer(9))
            .with_attr("featured", AttrValue::Boolean(false)),
        Listing::new("Floor lamp", Decimal::new(7000, 2), march(20)),
    ]
}

pub fn titles<'a>(items: impl IntoIterator<Item = &'a Listing>) -> Vec<&'a str> {
    items.into_iter().map(|l| l.title.as_str()).collect()
}
