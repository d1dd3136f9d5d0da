//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use papyr_vector::EmbedField;

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "papyr", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "PAPYR_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Papyr commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load papers for one or more categories, then run a query.
    Search {
        /// Category codes to ingest (repeatable).
        #[arg(short = 'C', long = "category", required = true)]
        categories: Vec<String>,

        /// Free-text query.
        query: String,

        /// Per-category fetch limit (defaults from config).
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of results to return (defaults from config).
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Paper field(s) to embed.
        #[arg(long, value_enum)]
        field: Option<CliEmbedField>,

        /// Restrict results to these category codes (repeatable).
        #[arg(short, long = "filter")]
        filter: Vec<String>,
    },

    /// List the bundled category catalog.
    Categories,

    /// Print version information.
    Version,
}

/// clap-friendly mirror of [`EmbedField`].
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum CliEmbedField {
    /// Title only.
    Title,
    /// Abstract only.
    Summary,
    /// Title and abstract.
    TitleSummary,
}

impl From<CliEmbedField> for EmbedField {
    fn from(value: CliEmbedField) -> Self {
        match value {
            CliEmbedField::Title => EmbedField::Title,
            CliEmbedField::Summary => EmbedField::Summary,
            CliEmbedField::TitleSummary => EmbedField::TitleSummary,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_command() {
        let args = CliArgs::parse_from([
            "papyr", "search", "-C", "cs.AI", "-C", "cs.LG", "-n", "5", "diffusion models",
        ]);

        match args.command {
            Some(Command::Search {
                categories,
                query,
                count,
                filter,
                ..
            }) => {
                assert_eq!(categories, vec!["cs.AI", "cs.LG"]);
                assert_eq!(query, "diffusion models");
                assert_eq!(count, Some(5));
                assert!(filter.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_category() {
        let result = CliArgs::try_parse_from(["papyr", "search", "black holes"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_field_value_enum() {
        let args =
            CliArgs::parse_from(["papyr", "search", "-C", "cs.AI", "--field", "title", "q"]);
        match args.command {
            Some(Command::Search { field, .. }) => {
                assert!(matches!(field, Some(CliEmbedField::Title)));
                assert_eq!(EmbedField::from(field.unwrap()), EmbedField::Title);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
