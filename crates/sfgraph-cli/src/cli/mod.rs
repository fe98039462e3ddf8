use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, SchemaArgs, SchemaArtifact};

/// Top-level CLI parser for the `sfgraph` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sfgraph",
    version,
    about = "Publish San Francisco restaurant permits to the GRC-20 knowledge graph"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the stage artifacts (overrides `general.data_dir`)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat, SchemaArtifact};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["sfgraph", "--format", "raw", "--verbose", "scrape"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Scrape));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sfgraph", "transform", "--quiet", "--data-dir", "out"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.data_dir.as_deref(), Some(Path::new("out")));
        assert!(matches!(cli.command, Commands::Transform));
    }

    #[test]
    fn stage_names_are_kebab_case() {
        for (name, expected) in [
            ("publish", "Publish"),
            ("create-space", "CreateSpace"),
            ("submit", "Submit"),
        ] {
            let cli = Cli::try_parse_from(["sfgraph", name]).expect("cli should parse");
            assert_eq!(format!("{:?}", cli.command), expected);
        }
    }

    #[test]
    fn schema_takes_an_artifact() {
        let cli = Cli::try_parse_from(["sfgraph", "schema", "content-hash"])
            .expect("cli should parse");
        match cli.command {
            Commands::Schema(args) => assert_eq!(args.artifact, SchemaArtifact::ContentHash),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["sfgraph", "schema", "triples"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sfgraph", "--format", "table", "scrape"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["sfgraph", "--data-dir", "/tmp/sf", "submit"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some(Path::new("/tmp/sf")));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
