//! Papyr CLI application.
//!
//! Dispatches parsed arguments to the ingestion pipeline and query router,
//! holding the loaded configuration and the session for the life of one
//! invocation.

use papyr_arxiv::ArxivClient;
use papyr_core::{category, Result};
use papyr_search::{IngestOptions, IngestPipeline, QueryRouter, SearchSession};
use papyr_vector::{EmbedField, MockEmbeddingProvider};
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::PapyrConfig;
use crate::render;

/// The CLI application.
pub struct PapyrApp {
    config: PapyrConfig,
    version: String,
}

impl PapyrApp {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = PapyrConfig::load(args.config.as_deref())?;
        Ok(Self {
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Version) => {
                println!("papyr {}", self.version);
                Ok(())
            }
            Some(Command::Categories) => {
                for (code, label) in category::known_categories() {
                    println!("{code:<14} {label}");
                }
                Ok(())
            }
            Some(Command::Search {
                categories,
                query,
                limit,
                count,
                field,
                filter,
            }) => {
                self.handle_search(SearchRequest {
                    categories,
                    query,
                    limit,
                    count,
                    field: field.map(EmbedField::from),
                    filter,
                })
                .await
            }
            None => {
                println!("papyr {} — use --help for usage", self.version);
                Ok(())
            }
        }
    }

    /// Ingest the requested categories, run one query, print results.
    async fn handle_search(&self, request: SearchRequest) -> Result<()> {
        let source = ArxivClient::with_base_url(
            &self.config.arxiv.base_url,
            self.config.arxiv.timeout_secs,
        )?;
        let provider = MockEmbeddingProvider::new(self.config.embed.dimension);

        let options = IngestOptions {
            limit: request.limit.unwrap_or(self.config.ingest.limit),
            field: request.field.unwrap_or(self.config.ingest.field),
        };

        let mut session = SearchSession::new();
        let pipeline = IngestPipeline::new(&source, &provider);
        let report = pipeline
            .run(&mut session, &request.categories, &options)
            .await?;

        for warning in &report.warnings {
            eprintln!("warning: {warning}");
        }
        println!(
            "Loaded {} papers from {} categories.\n",
            report.loaded,
            report.per_category.len()
        );

        let router = QueryRouter::new(&provider);
        let desired = request.count.unwrap_or(self.config.search.count);
        let filter = (!request.filter.is_empty()).then_some(request.filter.as_slice());
        let results = router.search(&session, &request.query, desired, filter).await?;

        if results.is_empty() {
            if filter.is_some() {
                println!("No results matched your filters.");
            } else {
                println!("No results.");
            }
        } else {
            println!("{}", render::format_results(&results));
        }
        Ok(())
    }
}

/// Resolved parameters for one search invocation.
struct SearchRequest {
    categories: Vec<String>,
    query: String,
    limit: Option<usize>,
    count: Option<usize>,
    field: Option<EmbedField>,
    filter: Vec<String>,
}

// ============================================================================
// Tests
// ============================================================================
