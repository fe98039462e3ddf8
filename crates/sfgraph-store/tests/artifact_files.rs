//! Artifact files as written and read back through `ArtifactStore`.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use sfgraph_core::artifacts::{ContentHashRecord, SpaceRecord};
use sfgraph_core::entities::{Location, Restaurant};
use sfgraph_core::numeric::Coordinate;
use sfgraph_core::ops::{Op, Triple, TypedValue};
use sfgraph_store::ArtifactStore;

fn restaurant() -> Restaurant {
    Restaurant {
        business_name: "Joe's Cafe".into(),
        address: "1 Main St".into(),
        location: Location {
            latitude: Coordinate::Text("37.7".into()),
            longitude: Coordinate::Number(-122.4),
        },
        fooditems: "Pizza:Pasta".into(),
        status: Some("APPROVED".into()),
        zipcode: "94103".into(),
        neighborhood: "Unknown".into(),
    }
}

#[test]
fn restaurants_use_camel_case_and_nested_location() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path().join("data"));
    let path = store.save_restaurants(&[restaurant()]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'), "artifact should be pretty-printed");
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json[0]["businessName"], "Joe's Cafe");
    assert_eq!(json[0]["location"]["latitude"], "37.7");
    assert_eq!(json[0]["location"]["longitude"], -122.4);

    assert_eq!(store.load_restaurants().unwrap(), vec![restaurant()]);
}

#[test]
fn save_overwrites_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    store
        .save_restaurants(&[restaurant(), restaurant()])
        .unwrap();
    store.save_restaurants(&[]).unwrap();
    assert!(store.load_restaurants().unwrap().is_empty());
}

#[test]
fn operations_load_as_raw_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    let ops = vec![Op::from(Triple {
        entity: "E1".into(),
        attribute: "sfRestaurantNameAttribute".into(),
        value: TypedValue::text("Joe's Cafe"),
    })];
    store.save_operations(&ops).unwrap();

    let records = store.load_operation_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["type"], "SET_TRIPLE");
    assert_eq!(records[0]["triple"]["value"]["type"], "TEXT");
}

#[test]
fn content_hash_and_space_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let hash = ContentHashRecord::at("ipfs://bafkrei", at);
    store.save_content_hash(&hash).unwrap();
    assert_eq!(store.load_content_hash().unwrap(), hash);

    let space = SpaceRecord::new("QmSpace", "San Francisco Restaurants");
    store.save_space(&space).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.space_path()).unwrap()).unwrap();
    assert_eq!(raw["spaceId"], "QmSpace");
    assert_eq!(store.load_space().unwrap(), space);
}
