//! # sfgraph-publish
//!
//! Everything that leaves the machine after the graph is built:
//!
//! - [`edit`]: operation stream → edit operations
//! - [`content_store`]: edit upload, returning a content identifier
//! - [`space`]: space deployment through the Geo API
//! - [`calldata`]: edit calldata for a (space, content id) pair
//! - [`wallet`]: editor address derivation and transaction submission
//!
//! The HTTP endpoints share one [`GeoClient`]; the content store and the
//! transaction sender sit behind traits so stages can be driven without a
//! network.

pub mod calldata;
pub mod content_store;
pub mod edit;
pub mod space;
pub mod wallet;

mod error;

pub use calldata::{Calldata, CalldataRequest};
pub use content_store::{ContentStore, Published, extract_content_id, publish_operations};
pub use edit::{Conversion, Edit, EditOp, EditRelation, convert_operations};
pub use error::PublishError;
pub use space::{DeployRequest, DeployedSpace};
pub use wallet::{AlloySender, TransactionSender, editor_address};

use sfgraph_config::GeoConfig;

/// HTTP client for the Geo API and its content-store upload endpoint.
pub struct GeoClient {
    http: reqwest::Client,
    config: GeoConfig,
}

impl GeoClient {
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: GeoConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("sfgraph/0.1")
                .build()
                .expect("reqwest client should build"),
            config,
        }
    }
}
