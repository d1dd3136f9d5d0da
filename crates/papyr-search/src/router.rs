//! Query routing: embed, over-fetch, filter, truncate.
//!
//! The vector index ranks before it knows anything about category filters,
//! so asking it for exactly the desired count could starve a filtered result
//! set. The router over-fetches `min(50, max(10, 3 * desired))` candidates,
//! filters in score order, and truncates to the request. The multiplier is a
//! fixed heuristic, not adaptive.

use papyr_core::{Paper, Result};
use papyr_vector::EmbeddingProvider;

use crate::session::SearchSession;

/// Number of raw candidates to request for a desired result count.
pub fn overfetch(desired_count: usize) -> usize {
    desired_count.saturating_mul(3).clamp(10, 50)
}

/// Query router over an embedding provider.
///
/// The provider should be the one the current corpus was built with; a
/// dimension mismatch between the two surfaces as a configuration error from
/// the store, never as silently wrong scores.
pub struct QueryRouter<'a> {
    provider: &'a dyn EmbeddingProvider,
}

impl<'a> QueryRouter<'a> {
    /// Create a router.
    pub fn new(provider: &'a dyn EmbeddingProvider) -> Self {
        Self { provider }
    }

    /// Answer a free-text query against the session's corpus.
    ///
    /// Returns at most `desired_count` (paper, score) pairs in descending
    /// score order. With a filter, only papers whose source category (or
    /// primary category, for unstamped papers) is in the set are kept,
    /// possibly fewer than requested, down to none. Without a filter this is
    /// the raw top `desired_count`.
    ///
    /// A session with nothing loaded yields an empty list; the caller can
    /// tell "no data" from "nothing matched" via
    /// [`SearchSession::is_loaded`].
    pub async fn search(
        &self,
        session: &SearchSession,
        query_text: &str,
        desired_count: usize,
        filter: Option<&[String]>,
    ) -> Result<Vec<(Paper, f32)>> {
        let Some(store) = session.store() else {
            return Ok(Vec::new());
        };

        let query = self.provider.embed(query_text).await?;
        let candidates = store.search(&query, overfetch(desired_count))?;

        let results = match filter {
            None => {
                let mut raw = candidates;
                raw.truncate(desired_count);
                raw
            }
            Some(codes) => candidates
                .into_iter()
                .filter(|(paper, _)| codes.iter().any(|c| c == paper.filter_category()))
                .take(desired_count)
                .collect(),
        };

        Ok(results)
    }
}

// ============================================================================
// Tests
// ============================================================================
