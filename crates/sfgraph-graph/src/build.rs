//! Operation-stream assembly for a batch of restaurants.

use serde::Serialize;
use sfgraph_core::CoreError;
use sfgraph_core::entities::{Restaurant, RestaurantEntity};
use sfgraph_core::ids::IdSource;
use sfgraph_core::ops::Op;

use crate::cuisine::{CuisineMap, extract_cuisine_types, parse_cuisine_types};
use crate::triples::{cuisine_relation, cuisine_triple, restaurant_triples};

/// Counts describing one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub restaurants: usize,
    pub cuisines: usize,
    pub triples: usize,
    pub relations: usize,
}

/// The operation stream of one run, with its cuisine vocabulary.
#[derive(Debug, Clone)]
pub struct GraphBuild {
    pub ops: Vec<Op>,
    pub cuisines: CuisineMap,
    pub stats: BuildStats,
}

/// Build the full operation stream for `restaurants`.
///
/// Cuisine entities come first, one name triple each. Then, per restaurant
/// in input order: its attribute triples followed by one relation per
/// cuisine token in its food-items text.
///
/// # Errors
///
/// Propagates [`CoreError`] from the identifier source.
pub fn build_operation_stream(
    restaurants: &[Restaurant],
    ids: &mut impl IdSource,
) -> Result<GraphBuild, CoreError> {
    let vocabulary = extract_cuisine_types(restaurants);
    tracing::info!(cuisines = vocabulary.len(), "extracted cuisine vocabulary");
    let cuisines = CuisineMap::assign(vocabulary, ids)?;
    build_with_cuisines(restaurants, cuisines, ids)
}

/// Same as [`build_operation_stream`] with a precomputed vocabulary.
/// Tokens missing from `cuisines` produce no relation.
///
/// # Errors
///
/// Propagates [`CoreError`] from the identifier source.
pub fn build_with_cuisines(
    restaurants: &[Restaurant],
    cuisines: CuisineMap,
    ids: &mut impl IdSource,
) -> Result<GraphBuild, CoreError> {
    let mut ops = Vec::new();
    let mut stats = BuildStats {
        restaurants: restaurants.len(),
        cuisines: cuisines.len(),
        ..BuildStats::default()
    };

    for cuisine in cuisines.entities() {
        if let Some(triple) = cuisine_triple(cuisine) {
            ops.push(Op::from(triple));
            stats.triples += 1;
        }
    }

    for restaurant in restaurants {
        let entity = RestaurantEntity::from_restaurant(restaurant, ids.next_id()?);

        let triples = restaurant_triples(&entity);
        stats.triples += triples.len();
        ops.extend(triples.into_iter().map(Op::from));

        for cuisine in parse_cuisine_types(Some(entity.fooditems.as_str())) {
            let Some(cuisine_id) = cuisines.get(&cuisine) else {
                tracing::debug!(%cuisine, restaurant = %entity.id, "cuisine not in vocabulary");
                continue;
            };
            ops.push(Op::from(cuisine_relation(&entity.id, cuisine_id, ids)?));
            stats.relations += 1;
        }
    }

    tracing::info!(
        operations = ops.len(),
        triples = stats.triples,
        relations = stats.relations,
        "generated operation stream"
    );
    Ok(GraphBuild {
        ops,
        cuisines,
        stats,
    })
}
