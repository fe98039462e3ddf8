//! Serde roundtrip and JsonSchema validation tests for persisted artifact types.

use chrono::Utc;
use schemars::schema_for;
use sfgraph_core::artifacts::{ContentHashRecord, SpaceRecord};
use sfgraph_core::entities::{Location, Restaurant};
use sfgraph_core::numeric::Coordinate;
use sfgraph_core::ops::{Op, Relation, RelationLink, Triple, TypedValue};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    restaurant_roundtrip,
    Restaurant,
    Restaurant {
        business_name: "Senor Sisig".into(),
        address: "990 FOLSOM ST".into(),
        location: Location {
            latitude: Coordinate::Text("37.7787".into()),
            longitude: Coordinate::Text("-122.4044".into()),
        },
        fooditems: "Filipino fusion: Tacos: Burritos".into(),
        status: Some("APPROVED".into()),
        zipcode: "28855".into(),
        neighborhood: "South of Market".into(),
    }
);

roundtrip_and_validate!(
    restaurant_without_status_roundtrip,
    Restaurant,
    Restaurant {
        business_name: "Unknown".into(),
        address: "Unknown".into(),
        location: Location::default(),
        fooditems: String::new(),
        status: None,
        zipcode: String::new(),
        neighborhood: "Unknown".into(),
    }
);

roundtrip_and_validate!(
    operation_stream_roundtrip,
    Vec<Op>,
    vec![
        Op::from(Triple {
            entity: "C1".into(),
            attribute: "sfRestaurantNameAttribute".into(),
            value: TypedValue::text("Tacos"),
        }),
        Op::from(Relation {
            id: Some("R1".into()),
            from_entity: "E1".into(),
            relation_type: "servesTypeOfCuisineRelation".into(),
            to_entity: "C1".into(),
            index: Some("a0".into()),
        }),
        Op::SetRelation {
            relation: RelationLink {
                from: "E1".into(),
                relation_type: "servesTypeOfCuisineRelation".into(),
                to: "C2".into(),
            },
        },
    ]
);

roundtrip_and_validate!(
    content_hash_roundtrip,
    ContentHashRecord,
    ContentHashRecord::at("ipfs://bafkreigh2akiscaild", Utc::now())
);

roundtrip_and_validate!(
    space_record_roundtrip,
    SpaceRecord,
    SpaceRecord::new("QmSpace", "San Francisco Restaurants")
);
