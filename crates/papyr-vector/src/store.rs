//! Corpus store pairing papers with their index positions.
//!
//! `CorpusStore` owns an ordered paper list and a [`FlatIndex`] in
//! lock-step: the paper at ordinal position `i` corresponds exactly to the
//! vector at position `i`. That alignment is the load-bearing invariant of
//! the whole pipeline. Adding vectors without papers (or vice versa) would
//! corrupt every subsequent search, so `add` is all-or-nothing.
//!
//! Position assignment is append-only; there is no deletion or reordering.
//! A store lives for one session and is replaced wholesale by the next
//! successful ingestion run.

use papyr_core::{Error, Paper, Result};

use crate::index::FlatIndex;

/// Aligned pair of (ordered papers, vector index).
#[derive(Debug, Clone)]
pub struct CorpusStore {
    papers: Vec<Paper>,
    index: FlatIndex,
}

impl CorpusStore {
    /// Create an empty store with a fixed embedding dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            papers: Vec::new(),
            index: FlatIndex::new(dimension),
        }
    }

    /// The embedding dimension.
    pub fn dimension(&self) -> usize {
        self.index.dimension()
    }

    /// Number of papers in the store.
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether the store holds no papers.
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Append a batch of papers with their embeddings.
    ///
    /// Pairing is positional: `papers[i]` corresponds to `vectors[i]`.
    /// The index add is atomic, so a failed call leaves both sides of the
    /// store unchanged.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if the batches have different lengths.
    /// - `DimensionMismatch` if any vector's length differs from the store
    ///   dimension.
    pub fn add(&mut self, papers: Vec<Paper>, vectors: Vec<Vec<f32>>) -> Result<()> {
        if papers.len() != vectors.len() {
            return Err(Error::LengthMismatch {
                records: papers.len(),
                vectors: vectors.len(),
            });
        }

        self.index.add(vectors)?;
        self.papers.extend(papers);
        Ok(())
    }

    /// Return the `min(k, len)` most similar papers to a query vector.
    ///
    /// An empty store short-circuits to an empty result without touching the
    /// index. Positions returned by the index are mapped back to papers; a
    /// position with no paired paper means the alignment invariant is broken
    /// and surfaces as `Internal` rather than being skipped.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if the query's length differs from the store
    ///   dimension.
    /// - `Internal` if the index returns an out-of-range position.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(Paper, f32)>> {
        if self.papers.is_empty() {
            return Ok(Vec::new());
        }

        let hits = self.index.search(query, k)?;

        let mut results = Vec::with_capacity(hits.len());
        for (position, score) in hits {
            let paper = self.papers.get(position).ok_or_else(|| {
                Error::internal(format!(
                    "index returned position {position} but store holds {} papers",
                    self.papers.len()
                ))
            })?;
            results.push((paper.clone(), score));
        }
        Ok(results)
    }
}

// ============================================================================
// Tests
// ============================================================================
