//! Triple and relation constructors.
//!
//! Empty values never become triples: a blank text attribute or a
//! coordinate that does not coerce to a number is silently left out.

use sfgraph_core::CoreError;
use sfgraph_core::attributes::{
    CUISINE_RELATION_TYPE_ID, RESTAURANT_ADDRESS_ATTRIBUTE_ID, RESTAURANT_FOODITEMS_ATTRIBUTE_ID,
    RESTAURANT_LATITUDE_ATTRIBUTE_ID, RESTAURANT_LONGITUDE_ATTRIBUTE_ID,
    RESTAURANT_NAME_ATTRIBUTE_ID, RESTAURANT_STATUS_ATTRIBUTE_ID,
};
use sfgraph_core::entities::{CuisineEntity, RestaurantEntity};
use sfgraph_core::ids::IdSource;
use sfgraph_core::numeric::{Coordinate, format_number};
use sfgraph_core::ops::{Relation, Triple, TypedValue};

/// A `TEXT` triple, or `None` when `value` is absent or whitespace-only.
#[must_use]
pub fn text_triple(entity_id: &str, attribute_id: &str, value: Option<&str>) -> Option<Triple> {
    let value = value.filter(|v| !v.trim().is_empty())?;
    Some(Triple {
        entity: entity_id.to_string(),
        attribute: attribute_id.to_string(),
        value: TypedValue::text(value),
    })
}

/// A `NUMBER` triple, or `None` when `value` is absent, empty, or not a number.
#[must_use]
pub fn number_triple(
    entity_id: &str,
    attribute_id: &str,
    value: Option<&Coordinate>,
) -> Option<Triple> {
    let number = value?.to_number()?;
    Some(Triple {
        entity: entity_id.to_string(),
        attribute: attribute_id.to_string(),
        value: TypedValue::number(format_number(number)),
    })
}

/// A relation of `relation_type_id` from one entity to another.
///
/// # Errors
///
/// Propagates [`CoreError`] from the identifier source.
pub fn relation(
    from_id: &str,
    relation_type_id: &str,
    to_id: &str,
    ids: &mut impl IdSource,
) -> Result<Relation, CoreError> {
    Ok(Relation {
        id: Some(ids.next_id()?),
        from_entity: from_id.to_string(),
        relation_type: relation_type_id.to_string(),
        to_entity: to_id.to_string(),
        index: None,
    })
}

/// Attribute triples of one restaurant: name, address, latitude, longitude,
/// status, food items. At most six.
#[must_use]
pub fn restaurant_triples(restaurant: &RestaurantEntity) -> Vec<Triple> {
    let id = restaurant.id.as_str();
    [
        text_triple(id, RESTAURANT_NAME_ATTRIBUTE_ID, Some(restaurant.name.as_str())),
        text_triple(id, RESTAURANT_ADDRESS_ATTRIBUTE_ID, Some(restaurant.address.as_str())),
        number_triple(id, RESTAURANT_LATITUDE_ATTRIBUTE_ID, Some(&restaurant.latitude)),
        number_triple(id, RESTAURANT_LONGITUDE_ATTRIBUTE_ID, Some(&restaurant.longitude)),
        text_triple(id, RESTAURANT_STATUS_ATTRIBUTE_ID, restaurant.status.as_deref()),
        text_triple(id, RESTAURANT_FOODITEMS_ATTRIBUTE_ID, Some(restaurant.fooditems.as_str())),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// The display-name triple of a cuisine entity.
#[must_use]
pub fn cuisine_triple(cuisine: &CuisineEntity) -> Option<Triple> {
    text_triple(&cuisine.id, RESTAURANT_NAME_ATTRIBUTE_ID, Some(cuisine.name.as_str()))
}

/// "Serves cuisine" relation from a restaurant to a cuisine.
///
/// # Errors
///
/// Propagates [`CoreError`] from the identifier source.
pub fn cuisine_relation(
    restaurant_id: &str,
    cuisine_id: &str,
    ids: &mut impl IdSource,
) -> Result<Relation, CoreError> {
    relation(restaurant_id, CUISINE_RELATION_TYPE_ID, cuisine_id, ids)
}
