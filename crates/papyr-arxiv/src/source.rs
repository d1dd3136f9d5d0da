//! The document source seam.
//!
//! Ingestion consumes any paper source through [`PaperSource`]: fetch raw
//! papers for one category query, or fail for that category. The trait keeps
//! the pipeline ignorant of transport details; the real arXiv client and
//! the in-memory test source implement the same contract.

use std::collections::HashMap;

use async_trait::async_trait;
use papyr_core::{Error, Paper, Result};

/// Trait for fetching papers by category.
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Fetch up to `limit` papers for one category code.
    ///
    /// # Errors
    ///
    /// `Source` when the fetch fails. Ingestion treats this as recoverable:
    /// the category is skipped with a warning and the run continues.
    async fn fetch(&self, category: &str, limit: usize) -> Result<Vec<Paper>>;

    /// Source name for diagnostics.
    fn name(&self) -> &str;
}

/// In-memory paper source for tests and offline runs.
///
/// Serves pre-loaded papers per category; categories registered as failing
/// return a `Source` error instead. Unregistered categories yield an empty
/// batch.
#[derive(Debug, Clone, Default)]
pub struct StaticPaperSource {
    papers: HashMap<String, Vec<Paper>>,
    failures: HashMap<String, String>,
}

impl StaticPaperSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register papers served for a category.
    pub fn with_category(mut self, code: impl Into<String>, papers: Vec<Paper>) -> Self {
        self.papers.insert(code.into(), papers);
        self
    }

    /// Register a category whose fetch fails with the given message.
    pub fn with_failure(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(code.into(), message.into());
        self
    }
}

#[async_trait]
impl PaperSource for StaticPaperSource {
    async fn fetch(&self, category: &str, limit: usize) -> Result<Vec<Paper>> {
        if let Some(message) = self.failures.get(category) {
            return Err(Error::source(format!("{category}: {message}")));
        }

        let papers = self
            .papers
            .get(category)
            .map(|batch| batch.iter().take(limit).cloned().collect())
            .unwrap_or_default();
        Ok(papers)
    }

    fn name(&self) -> &str {
        "static"
    }
}

// ============================================================================
// Tests
// ============================================================================
