//! Extended attribute entities, their storage rows and per-entity collections.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttrValue, AttributeError, AttributeType};
use crate::entity::{Entity, EntityId, Queryable, Timestamped};

/// A typed key/value pair owned by one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedAttribute<Id> {
    pub id: Uuid,
    /// The owning entity.
    pub entity_id: Id,
    /// Attribute key, unique per owner.
    pub external_id: String,
    #[serde(default)]
    pub group: Option<String>,
    value: AttrValue,
    pub created_at: DateTime<Utc>,
}

impl<Id: EntityId> ExtendedAttribute<Id> {
    pub fn new(entity_id: Id, external_id: impl Into<String>, value: AttrValue) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_id,
            external_id: external_id.into(),
            group: None,
            value,
            created_at: Utc::now(),
        }
    }

    pub fn decimal(entity_id: Id, external_id: impl Into<String>, value: Decimal) -> Self {
        Self::new(entity_id, external_id, AttrValue::Decimal(value))
    }

    pub fn text(entity_id: Id, external_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(entity_id, external_id, AttrValue::Text(value.into()))
    }

    pub fn datetime(entity_id: Id, external_id: impl Into<String>, value: DateTime<Utc>) -> Self {
        Self::new(entity_id, external_id, AttrValue::DateTime(value))
    }

    pub fn json(entity_id: Id, external_id: impl Into<String>, value: serde_json::Value) -> Self {
        Self::new(entity_id, external_id, AttrValue::Json(value))
    }

    pub fn boolean(entity_id: Id, external_id: impl Into<String>, value: bool) -> Self {
        Self::new(entity_id, external_id, AttrValue::Boolean(value))
    }

    pub fn integer(entity_id: Id, external_id: impl Into<String>, value: i64) -> Self {
        Self::new(entity_id, external_id, AttrValue::Integer(value))
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn value(&self) -> &AttrValue {
        &self.value
    }

    pub fn attribute_type(&self) -> AttributeType {
        self.value.attribute_type()
    }

    /// Replace the value, keeping the declared type.
    pub fn set_value(&mut self, value: AttrValue) -> Result<(), AttributeError> {
        let expected = self.attribute_type();
        let found = value.attribute_type();
        if expected != found {
            return Err(AttributeError::TypeMismatch { expected, found });
        }
        self.value = value;
        Ok(())
    }
}

impl<Id: EntityId> Entity for ExtendedAttribute<Id> {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}

impl<Id> Timestamped for ExtendedAttribute<Id> {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl<Id: EntityId> Queryable for ExtendedAttribute<Id> {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "entity_id",
        "external_id",
        "group",
        "type",
        "value",
        "created_at",
    ];

    const DEFAULT_SEARCH_FIELDS: &'static [&'static str] = &["external_id", "group", "value"];

    fn field(&self, name: &str) -> Option<AttrValue> {
        match name.to_ascii_lowercase().as_str() {
            "id" => Some(AttrValue::Text(self.id.to_string())),
            "entity_id" => Some(self.entity_id.to_attr_value()),
            "external_id" => Some(AttrValue::Text(self.external_id.clone())),
            "group" => self.group.clone().map(AttrValue::Text),
            "type" => Some(AttrValue::Text(self.attribute_type().to_string())),
            "value" => Some(self.value.clone()),
            "created_at" => Some(AttrValue::DateTime(self.created_at)),
            _ => None,
        }
    }
}

/// Storage row for an extended attribute: one nullable column per type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedAttributeRecord<Id> {
    pub id: Uuid,
    pub entity_id: Id,
    pub external_id: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    #[serde(default)]
    pub decimal: Option<Decimal>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub json: Option<serde_json::Value>,
    #[serde(default)]
    pub boolean: Option<bool>,
    #[serde(default)]
    pub integer: Option<i64>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl<Id> ExtendedAttributeRecord<Id> {
    fn populated(&self) -> Vec<AttributeType> {
        let mut types = Vec::new();
        if self.decimal.is_some() {
            types.push(AttributeType::Decimal);
        }
        if self.text.is_some() {
            types.push(AttributeType::Text);
        }
        if self.datetime.is_some() {
            types.push(AttributeType::DateTime);
        }
        if self.json.is_some() {
            types.push(AttributeType::Json);
        }
        if self.boolean.is_some() {
            types.push(AttributeType::Boolean);
        }
        if self.integer.is_some() {
            types.push(AttributeType::Integer);
        }
        types
    }
}

impl<Id> From<ExtendedAttribute<Id>> for ExtendedAttributeRecord<Id> {
    fn from(attr: ExtendedAttribute<Id>) -> Self {
        let attribute_type = attr.value.attribute_type();
        let mut record = ExtendedAttributeRecord {
            id: attr.id,
            entity_id: attr.entity_id,
            external_id: attr.external_id,
            group: attr.group,
            attribute_type,
            decimal: None,
            text: None,
            datetime: None,
            json: None,
            boolean: None,
            integer: None,
            created_at: attr.created_at,
        };
        match attr.value {
            AttrValue::Decimal(v) => record.decimal = Some(v),
            AttrValue::Text(v) => record.text = Some(v),
            AttrValue::DateTime(v) => record.datetime = Some(v),
            AttrValue::Json(v) => record.json = Some(v),
            AttrValue::Boolean(v) => record.boolean = Some(v),
            AttrValue::Integer(v) => record.integer = Some(v),
        }
        record
    }
}

impl<Id> TryFrom<ExtendedAttributeRecord<Id>> for ExtendedAttribute<Id> {
    type Error = AttributeError;

    fn try_from(record: ExtendedAttributeRecord<Id>) -> Result<Self, Self::Error> {
        let declared = record.attribute_type;
        let populated = record.populated();
        let extra: Vec<AttributeType> = populated
            .iter()
            .copied()
            .filter(|t| *t != declared)
            .collect();
        if !extra.is_empty() {
            return Err(AttributeError::ConflictingValues {
                declared,
                populated: extra,
            });
        }

        let value = match declared {
            AttributeType::Decimal => record.decimal.map(AttrValue::Decimal),
            AttributeType::Text => record.text.map(AttrValue::Text),
            AttributeType::DateTime => record.datetime.map(AttrValue::DateTime),
            AttributeType::Json => record.json.map(AttrValue::Json),
            AttributeType::Boolean => record.boolean.map(AttrValue::Boolean),
            AttributeType::Integer => record.integer.map(AttrValue::Integer),
        }
        .ok_or(AttributeError::MissingValue(declared))?;

        Ok(ExtendedAttribute {
            id: record.id,
            entity_id: record.entity_id,
            external_id: record.external_id,
            group: record.group,
            value,
            created_at: record.created_at,
        })
    }
}

/// The extended attributes owned by a single entity, keyed by external id.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedAttributes<Id> {
    owner: Id,
    items: BTreeMap<String, ExtendedAttribute<Id>>,
}

impl<Id: EntityId> ExtendedAttributes<Id> {
    pub fn new(owner: Id) -> Self {
        Self {
            owner,
            items: BTreeMap::new(),
        }
    }

    pub fn owner(&self) -> &Id {
        &self.owner
    }

    /// Add or replace an attribute. Returns the attribute previously stored
    /// under the same external id.
    pub fn insert(
        &mut self,
        attr: ExtendedAttribute<Id>,
    ) -> Result<Option<ExtendedAttribute<Id>>, AttributeError> {
        if attr.entity_id != self.owner {
            return Err(AttributeError::OwnerMismatch {
                expected: self.owner.to_string(),
                found: attr.entity_id.to_string(),
            });
        }
        Ok(self.items.insert(attr.external_id.clone(), attr))
    }

    pub fn get(&self, external_id: &str) -> Option<&ExtendedAttribute<Id>> {
        self.items.get(external_id)
    }

    pub fn value(&self, external_id: &str) -> Option<&AttrValue> {
        self.get(external_id).map(|a| a.value())
    }

    pub fn remove(&mut self, external_id: &str) -> Option<ExtendedAttribute<Id>> {
        self.items.remove(external_id)
    }

    pub fn in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ExtendedAttribute<Id>> {
        self.items
            .values()
            .filter(move |a| a.group.as_deref() == Some(group))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtendedAttribute<Id>> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Entities that own a collection of extended attributes.
pub trait HasExtendedAttributes: Entity {
    fn extended_attributes(&self) -> &ExtendedAttributes<Self::Id>;
}
