//! Attribute, relation-type, and entity-type identifiers used in the graph.
//!
//! These are fixed strings shared by the formatter and anyone reading the
//! published edit back.

pub const RESTAURANT_NAME_ATTRIBUTE_ID: &str = "sfRestaurantNameAttribute";
pub const RESTAURANT_ADDRESS_ATTRIBUTE_ID: &str = "sfRestaurantAddressAttribute";
pub const RESTAURANT_LATITUDE_ATTRIBUTE_ID: &str = "sfRestaurantLatitudeAttribute";
pub const RESTAURANT_LONGITUDE_ATTRIBUTE_ID: &str = "sfRestaurantLongitudeAttribute";
pub const RESTAURANT_STATUS_ATTRIBUTE_ID: &str = "sfRestaurantStatusAttribute";
pub const RESTAURANT_FOODITEMS_ATTRIBUTE_ID: &str = "sfRestaurantFoodItemsAttribute";

/// Relation type linking a restaurant to a cuisine it serves.
pub const CUISINE_RELATION_TYPE_ID: &str = "servesTypeOfCuisineRelation";

pub const RESTAURANT_TYPE_ID: &str = "sfRestaurantEntityType";
pub const CUISINE_TYPE_ID: &str = "cuisineTypeEntity";
