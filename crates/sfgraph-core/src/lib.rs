//! # sfgraph-core
//!
//! Core types, identifier generation, and error types for sfgraph.
//!
//! This crate provides the foundational types shared across all sfgraph crates:
//! - `Restaurant` and the entity shapes derived from it
//! - Triple / relation assertions and the tagged operation stream
//! - Attribute and relation-type identifiers
//! - Opaque base-58 identifier generation
//! - Artifact records persisted between pipeline stages
//! - Cross-cutting error types

pub mod artifacts;
pub mod attributes;
pub mod entities;
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod ops;

pub use errors::CoreError;
