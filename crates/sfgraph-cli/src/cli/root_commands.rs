use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree. Stages run in the order listed.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch permit records and save normalized restaurants.
    Scrape,
    /// Build the operation stream from saved restaurants.
    Transform,
    /// Upload the operation stream as an edit and save its content id.
    Publish,
    /// Deploy a new space owned by the configured wallet.
    CreateSpace,
    /// Submit the published edit to the saved space on chain.
    Submit,
    /// Print the JSON Schema of an artifact file.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Artifact to describe.
    #[arg(value_enum)]
    pub artifact: SchemaArtifact,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaArtifact {
    Restaurants,
    Operations,
    ContentHash,
    Space,
}
