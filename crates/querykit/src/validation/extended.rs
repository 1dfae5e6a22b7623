use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::{validate_key, PaginationFilterValidator, ValidationErrors, Validator};
use crate::attributes::{AttributeType, ExtendedAttribute};
use crate::config::QueryConfig;
use crate::entity::EntityId;
use crate::pagination::PaginationFilter;

/// List request for the extended attributes of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedAttributePaginationFilter<Id> {
    #[serde(flatten)]
    pub pagination: PaginationFilter,
    /// Owning entity. Required.
    #[serde(default)]
    pub entity_id: Option<Id>,
    #[serde(default, rename = "type")]
    pub attribute_type: Option<AttributeType>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
}

impl<Id> Default for ExtendedAttributePaginationFilter<Id> {
    fn default() -> Self {
        Self {
            pagination: PaginationFilter::default(),
            entity_id: None,
            attribute_type: None,
            external_id: None,
            group: None,
        }
    }
}

impl<Id> ExtendedAttributePaginationFilter<Id> {
    pub fn for_entity(entity_id: Id) -> Self {
        Self {
            entity_id: Some(entity_id),
            ..Default::default()
        }
    }
}

/// Owner, key and pagination rules for an extended-attribute list request.
pub struct ExtendedAttributeFilterValidator<'a, Id> {
    config: &'a QueryConfig,
    _id: PhantomData<fn() -> Id>,
}

impl<'a, Id: EntityId> ExtendedAttributeFilterValidator<'a, Id> {
    pub fn new(config: &'a QueryConfig) -> Self {
        Self {
            config,
            _id: PhantomData,
        }
    }
}

impl<Id: EntityId> Validator<ExtendedAttributePaginationFilter<Id>>
    for ExtendedAttributeFilterValidator<'_, Id>
{
    fn validate(&self, filter: &ExtendedAttributePaginationFilter<Id>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        match &filter.entity_id {
            None => errors.add("entity_id", "is required"),
            Some(id) if id.is_empty() => errors.add("entity_id", "must not be empty"),
            Some(_) => {}
        }

        let max = self.config.max_key_length;
        if let Some(external_id) = &filter.external_id {
            if let Err(e) = validate_key(external_id, max) {
                errors.add("external_id", e.to_string());
            }
        }
        if let Some(group) = &filter.group {
            if let Err(e) = validate_key(group, max) {
                errors.add("group", e.to_string());
            }
        }

        errors.extend(
            PaginationFilterValidator::<ExtendedAttribute<Id>>::new(self.config)
                .validate(&filter.pagination),
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn validate<Id: EntityId>(filter: &ExtendedAttributePaginationFilter<Id>) -> ValidationErrors {
        let config = QueryConfig::default();
        ExtendedAttributeFilterValidator::<Id>::new(&config).validate(filter)
    }

    #[test]
    fn rejects_missing_entity_id() {
        let errors = validate(&ExtendedAttributePaginationFilter::<i64>::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.iter().next().map(|e| e.to_string()),
            Some("entity_id: is required".to_string())
        );
    }

    #[test]
    fn rejects_empty_entity_id() {
        let errors = validate(&ExtendedAttributePaginationFilter::for_entity(Uuid::nil()));
        assert!(errors.has_field("entity_id"));

        let errors = validate(&ExtendedAttributePaginationFilter::for_entity(0u32));
        assert!(errors.has_field("entity_id"));
    }

    #[test]
    fn accepts_a_complete_filter() {
        let mut filter = ExtendedAttributePaginationFilter::for_entity(Uuid::new_v4());
        filter.attribute_type = Some(AttributeType::Decimal);
        filter.external_id = Some("royalty.rate".into());
        filter.group = Some("economics".into());
        filter.pagination = PaginationFilter::new(2, 25).ordered_by("created_at desc");
        assert!(validate(&filter).is_empty());
    }

    #[test]
    fn checks_key_shapes() {
        let mut filter = ExtendedAttributePaginationFilter::for_entity(7i64);
        filter.external_id = Some("bad key".into());
        filter.group = Some(String::new());
        let errors = validate(&filter);
        assert!(errors.has_field("external_id"));
        assert!(errors.has_field("group"));
    }

    #[test]
    fn includes_pagination_errors() {
        let mut filter = ExtendedAttributePaginationFilter::for_entity(7i64);
        filter.pagination = PaginationFilter::new(0, 10).ordered_by("owner");
        let errors = validate(&filter);
        assert!(errors.has_field("page_number"));
        assert!(errors.has_field("order_by"));
    }

    #[test]
    fn deserializes_flat_request() {
        let filter: ExtendedAttributePaginationFilter<i64> = serde_json::from_str(
            r#"{"entity_id": 9, "type": "Decimal", "page_number": 2, "page_size": 5}"#,
        )
        .unwrap();
        assert_eq!(filter.entity_id, Some(9));
        assert_eq!(filter.attribute_type, Some(AttributeType::Decimal));
        assert_eq!(filter.pagination.page_number, 2);
        assert_eq!(filter.pagination.page_size, Some(5));
    }
}
