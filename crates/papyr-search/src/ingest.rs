//! Multi-category ingestion pipeline.
//!
//! Drives one run: fetch each requested category in order, stamp every
//! fetched paper with its source category, embed the whole batch in one
//! provider call, build a fresh corpus store, and install it into the
//! session. A failed category is a warning, not a failed run; a run where
//! *no* category produced papers fails with `NothingLoaded` and leaves any
//! previously installed corpus untouched.

use papyr_arxiv::PaperSource;
use papyr_core::{category, Error, Paper, Result};
use papyr_vector::{CorpusStore, EmbedField, EmbeddingProvider};
use serde::{Deserialize, Serialize};

use crate::session::SearchSession;

/// Options for one ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Per-category result limit.
    pub limit: usize,

    /// Which paper field(s) to embed, fixed for the whole run.
    pub field: EmbedField,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            limit: 100,
            field: EmbedField::default(),
        }
    }
}

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    /// Total papers loaded into the new corpus.
    pub loaded: usize,

    /// Papers fetched per successful category, in request order.
    pub per_category: Vec<(String, usize)>,

    /// One human-readable warning per failed category.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Ingestion pipeline over a paper source and an embedding provider.
pub struct IngestPipeline<'a> {
    source: &'a dyn PaperSource,
    provider: &'a dyn EmbeddingProvider,
}

impl<'a> IngestPipeline<'a> {
    /// Create a pipeline.
    pub fn new(source: &'a dyn PaperSource, provider: &'a dyn EmbeddingProvider) -> Self {
        Self { source, provider }
    }

    /// Run ingestion for the given categories and install the result.
    ///
    /// Categories are fetched sequentially. Each fetched paper is stamped
    /// with the category it was fetched under before embedding. Embeddings
    /// are requested once for the whole accumulated batch. On success the
    /// session's corpus is replaced wholesale, together with the set of
    /// categories that loaded (the filter universe for queries).
    ///
    /// # Errors
    ///
    /// - `NothingLoaded` if no category produced any papers. The session is
    ///   left untouched.
    /// - `DimensionMismatch` / `LengthMismatch` if the provider's output
    ///   violates its own contract.
    pub async fn run(
        &self,
        session: &mut SearchSession,
        categories: &[String],
        options: &IngestOptions,
    ) -> Result<IngestReport> {
        let mut papers: Vec<Paper> = Vec::new();
        let mut per_category = Vec::new();
        let mut warnings = Vec::new();

        // Fold over the categories; failures accumulate as warnings and
        // never abort the remaining fetches.
        for code in categories {
            match self.source.fetch(code, options.limit).await {
                Ok(mut batch) => {
                    for paper in &mut batch {
                        paper.source_category = Some(code.clone());
                    }
                    log::info!(
                        "loaded {} papers from {} ({})",
                        batch.len(),
                        code,
                        category::label_or_code(code),
                    );
                    per_category.push((code.clone(), batch.len()));
                    papers.extend(batch);
                }
                Err(e) => {
                    let warning = format!("skipping {code}: {e}");
                    log::warn!("{warning}");
                    warnings.push(warning);
                }
            }
        }

        if papers.is_empty() {
            return Err(Error::NothingLoaded);
        }

        // One batch embed for the whole run, with one composition policy.
        let texts: Vec<String> = papers.iter().map(|p| options.field.compose(p)).collect();
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let embeddings = self.provider.embed_batch(&text_refs).await?;

        let mut store = CorpusStore::new(self.provider.dimension());
        let loaded_categories: Vec<String> =
            per_category.iter().map(|(code, _)| code.clone()).collect();
        let loaded = papers.len();
        store.add(papers, embeddings)?;

        session.install(store, loaded_categories, options.field);

        Ok(IngestReport {
            loaded,
            per_category,
            warnings,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
