//! Restaurant records and the graph entities derived from them.
//!
//! `Restaurant` is the persisted, normalized record (camelCase keys with a
//! nested `location`, the layout of `sf_restaurants.json`). Entities pair a
//! record with the identifier assigned during one formatting run.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::numeric::Coordinate;

/// Geographic position of a restaurant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

/// A normalized restaurant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub business_name: String,
    pub address: String,
    pub location: Location,
    pub fooditems: String,
    /// Passed through from the source unmodified; absent stays absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub zipcode: String,
    pub neighborhood: String,
}

/// A restaurant with its assigned graph identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RestaurantEntity {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub status: Option<String>,
    pub fooditems: String,
}

impl RestaurantEntity {
    /// Attach `id` to a restaurant record.
    #[must_use]
    pub fn from_restaurant(restaurant: &Restaurant, id: String) -> Self {
        Self {
            id,
            name: restaurant.business_name.clone(),
            address: restaurant.address.clone(),
            latitude: restaurant.location.latitude.clone(),
            longitude: restaurant.location.longitude.clone(),
            status: restaurant.status.clone(),
            fooditems: restaurant.fooditems.clone(),
        }
    }
}

/// A cuisine discovered in the food-items text of one or more restaurants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CuisineEntity {
    pub id: String,
    pub name: String,
}
