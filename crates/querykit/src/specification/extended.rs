use super::{Specification, SpecificationBuilder};
use crate::attributes::{AttributeCriterion, ExtendedAttribute, HasExtendedAttributes};
use crate::entity::EntityId;
use crate::validation::ExtendedAttributePaginationFilter;

/// Entities whose extended attributes satisfy `criterion`.
pub fn attribute<E>(criterion: AttributeCriterion) -> Specification<E>
where
    E: HasExtendedAttributes + 'static,
{
    Specification::new(move |entity: &E| criterion.matches(entity))
}

/// Specification for an extended-attribute list request.
///
/// The owning entity always constrains the result. Type, external id and
/// group constrain it only when the filter sets them. Keyword search and
/// paging are applied later by the query layer, not here.
pub fn extended_attribute_spec<Id>(
    filter: &ExtendedAttributePaginationFilter<Id>,
) -> Specification<ExtendedAttribute<Id>>
where
    Id: EntityId + Send + Sync + 'static,
{
    let entity_id = filter.entity_id.clone();
    let attribute_type = filter.attribute_type;
    let external_id = filter.external_id.clone();
    let group = filter.group.clone();

    SpecificationBuilder::new()
        .with_if(entity_id.is_some(), move |a: &ExtendedAttribute<Id>| {
            entity_id.as_ref() == Some(&a.entity_id)
        })
        .with_if(attribute_type.is_some(), move |a: &ExtendedAttribute<Id>| {
            attribute_type == Some(a.attribute_type())
        })
        .with_if(external_id.is_some(), move |a: &ExtendedAttribute<Id>| {
            external_id.as_deref() == Some(a.external_id.as_str())
        })
        .with_if(group.is_some(), move |a: &ExtendedAttribute<Id>| {
            group.as_deref() == a.group.as_deref()
        })
        .build()
}
