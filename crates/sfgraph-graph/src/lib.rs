//! # sfgraph-graph
//!
//! Turns normalized restaurants into the operation stream: cuisine
//! vocabulary extraction, identifier assignment, attribute triples and
//! "serves cuisine" relations.
//!
//! Everything here is pure apart from identifier generation, which goes
//! through an [`IdSource`](sfgraph_core::ids::IdSource) the caller supplies.

pub mod build;
pub mod cuisine;
pub mod triples;

pub use build::{BuildStats, GraphBuild, build_operation_stream, build_with_cuisines};
pub use cuisine::{CuisineMap, extract_cuisine_types, parse_cuisine_types};
pub use triples::{
    cuisine_relation, cuisine_triple, number_triple, relation, restaurant_triples, text_triple,
};
