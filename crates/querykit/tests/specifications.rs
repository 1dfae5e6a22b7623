mod common;

use common::{listings, march, titles, Listing};
use querykit::attributes::{AttrValue, AttributeCriterion};
use querykit::specification::{attribute, date_range, Specification, SpecificationBuilder};
use rust_decimal::Decimal;

#[test]
fn empty_specification_matches_every_listing() {
    let all = listings();
    let spec = SpecificationBuilder::<Listing>::new().build();
    assert!(spec.is_match_all());
    assert_eq!(spec.filter(all.iter()).count(), all.len());
}

#[test]
fn start_only_date_range_keeps_everything_from_the_start() {
    let all = listings();
    let spec = date_range::<Listing>(Some(march(10)), None);
    assert_eq!(
        titles(spec.filter(all.iter())),
        vec!["Lamp shade", "Desk chair", "Floor lamp"]
    );
}

#[test]
fn two_sided_date_range_is_inclusive() {
    let all = listings();
    let spec = date_range::<Listing>(Some(march(5)), Some(march(15)));
    assert_eq!(
        titles(spec.filter(all.iter())),
        vec!["Oak table", "Lamp shade", "Desk chair"]
    );
}

#[test]
fn attribute_criteria_skip_listings_without_the_attribute() {
    let all = listings();

    let new_only = attribute::<Listing>(AttributeCriterion::eq("condition", AttrValue::Text("new".into())));
    assert_eq!(titles(new_only.filter(all.iter())), vec!["Oak table", "Lamp shade"]);

    let not_new = attribute::<Listing>(AttributeCriterion::ne("condition", AttrValue::Text("new".into())));
    assert_eq!(titles(not_new.filter(all.iter())), vec!["Brass lamp"]);
}

#[test]
fn builder_combines_columns_dates_and_attributes() {
    let all = listings();
    let max_price = Some(Decimal::new(10000, 2));
    let keyword: Option<&str> = None;

    let spec = SpecificationBuilder::<Listing>::new()
        .with_if(max_price.is_some(), move |l: &Listing| Some(l.price) <= max_price)
        .with_if(keyword.is_some(), |_: &Listing| false)
        .with_spec(date_range(Some(march(1)), Some(march(15))))
        .with_spec(attribute(AttributeCriterion::gte("weight_kg", AttrValue::Integer(5))))
        .build();

    assert_eq!(titles(spec.filter(all.iter())), vec!["Desk chair"]);
}

#[test]
fn and_is_conjunction() {
    let all = listings();
    let lamps = Specification::new(|l: &Listing| l.title.to_lowercase().contains("lamp"));
    let featured = attribute::<Listing>(AttributeCriterion::eq("featured", AttrValue::Boolean(true)));
    let spec = lamps.and(featured);
    assert_eq!(titles(spec.filter(all.iter())), vec!["Brass lamp"]);
}
