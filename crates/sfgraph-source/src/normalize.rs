//! Raw row → [`Restaurant`] normalization.
//!
//! Pure and total: absent or empty fields become their defaults, nothing
//! here can fail. `status` is the exception and is copied as-is, so a row
//! without a status produces a restaurant without one.

use sfgraph_core::entities::{Location, Restaurant};
use sfgraph_core::numeric::Coordinate;

use crate::record::RawRecord;

/// Placeholder for missing names, addresses and neighborhoods.
pub const UNKNOWN: &str = "Unknown";

/// Normalize one raw row.
#[must_use]
pub fn normalize(record: &RawRecord) -> Restaurant {
    let location = record.location.as_ref();
    Restaurant {
        business_name: text_or(record.applicant.as_deref(), UNKNOWN),
        address: text_or(record.address.as_deref(), UNKNOWN),
        location: Location {
            latitude: coordinate_or_zero(location.and_then(|l| l.latitude.as_ref())),
            longitude: coordinate_or_zero(location.and_then(|l| l.longitude.as_ref())),
        },
        fooditems: text_or(record.fooditems.as_deref(), ""),
        status: record.status.clone(),
        zipcode: text_or(record.zipcode.as_deref(), ""),
        neighborhood: text_or(
            record
                .neighborhoods
                .as_ref()
                .and_then(|n| n.first())
                .map(String::as_str),
            UNKNOWN,
        ),
    }
}

/// Normalize a batch, preserving order.
#[must_use]
pub fn normalize_all(records: &[RawRecord]) -> Vec<Restaurant> {
    records.iter().map(normalize).collect()
}

fn text_or(value: Option<&str>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn coordinate_or_zero(value: Option<&Coordinate>) -> Coordinate {
    value
        .filter(|c| !c.is_blank())
        .cloned()
        .unwrap_or_else(Coordinate::zero)
}
