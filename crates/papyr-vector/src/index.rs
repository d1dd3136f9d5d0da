//! Flat inner-product vector index.
//!
//! `FlatIndex` stores L2-normalized vectors and answers nearest-neighbor
//! queries by brute-force dot product. Because both stored vectors and the
//! query are normalized before scoring, the inner product equals cosine
//! similarity and lies in `[-1, 1]`.
//!
//! The index knows nothing about papers or categories; position pairing with
//! source records is the [`CorpusStore`](crate::CorpusStore)'s job.
//!
//! # Edge case: zero vectors
//!
//! A zero vector has no direction to normalize, so it is stored unchanged.
//! It scores 0.0 against every query: a degenerate but non-fatal result.

use papyr_core::{Error, Result};

/// Brute-force inner-product index over normalized vectors.
///
/// The dimension is fixed at construction. Every `add` and `search` call is
/// checked against it; a mismatch is a configuration error, never silently
/// truncated or padded.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Create an empty index with a fixed dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: Vec::new(),
        }
    }

    /// The dimension every stored and queried vector must have.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the index holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Append a batch of vectors, normalizing each to unit L2 norm.
    ///
    /// The whole batch is dimension-checked before any vector is stored, so
    /// a failed call leaves the index unchanged.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if any vector's length differs from the index
    /// dimension.
    pub fn add(&mut self, vectors: Vec<Vec<f32>>) -> Result<()> {
        for vector in &vectors {
            if vector.len() != self.dimension {
                return Err(Error::DimensionMismatch {
                    expected: self.dimension,
                    actual: vector.len(),
                });
            }
        }

        self.vectors.extend(vectors.into_iter().map(normalize));
        Ok(())
    }

    /// Return the `min(k, len)` highest-scoring positions for a query.
    ///
    /// The query is normalized the same way stored vectors are. Results are
    /// ordered by descending score; equal scores break ties by lower
    /// position first, so identical inputs always rank identically.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the query's length differs from the index
    /// dimension.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if query.len() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let query = normalize(query.to_vec());

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, stored)| (position, dot(&query, stored)))
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(k);
        Ok(scored)
    }
}

/// Scale a vector to unit L2 norm; zero vectors are returned unchanged.
fn normalize(mut vector: Vec<f32>) -> Vec<f32> {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in &mut vector {
            *value /= norm;
        }
    }
    vector
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_to_unit_norm() {
        let mut index = FlatIndex::new(3);
        index
            .add(vec![vec![3.0, 4.0, 0.0], vec![0.0, 0.0, 2.0]])
            .unwrap();

        for stored in &index.vectors {
            let norm: f32 = stored.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_vector_left_unchanged() {
        let mut index = FlatIndex::new(2);
        index.add(vec![vec![0.0, 0.0]]).unwrap();
        assert_eq!(index.vectors[0], vec![0.0, 0.0]);

        // Scores 0.0 against any query
        let results = index.search(&[1.0, 0.0], 1).unwrap();
        assert_eq!(results[0], (0, 0.0));
    }

    #[test]
    fn test_add_dimension_mismatch_is_atomic() {
        let mut index = FlatIndex::new(2);
        let err = index
            .add(vec![vec![1.0, 0.0], vec![1.0, 0.0, 0.0]])
            .unwrap_err();

        assert!(matches!(
            err,
            papyr_core::Error::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        ));
        // Nothing from the failed batch was stored
        assert!(index.is_empty());
    }

    #[test]
    fn test_search_dimension_mismatch() {
        let mut index = FlatIndex::new(2);
        index.add(vec![vec![1.0, 0.0]]).unwrap();

        let err = index.search(&[1.0, 0.0, 0.0], 1).unwrap_err();
        assert!(matches!(
            err,
            papyr_core::Error::DimensionMismatch { .. }
        ));
    }

    #[test]
    fn test_search_descending_order_and_bounds() {
        let mut index = FlatIndex::new(4);
        index
            .add(vec![
                vec![1.0, 0.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0, 0.0],
                vec![1.0, 1.0, 0.0, 0.0],
            ])
            .unwrap();

        let results = index.search(&[1.0, 0.0, 0.0, 0.0], 3).unwrap();
        assert_eq!(results.len(), 3);
        for window in results.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
        for (_, score) in &results {
            assert!((-1.0..=1.0).contains(score));
        }
    }

    #[test]
    fn test_scenario_axis_vectors() {
        // D=4; vectors [1,0,0,0], [0,1,0,0], [1,1,0,0]; query [1,0,0,0], k=2
        let mut index = FlatIndex::new(4);
        index
            .add(vec![
                vec![1.0, 0.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0, 0.0],
                vec![1.0, 1.0, 0.0, 0.0],
            ])
            .unwrap();

        let results = index.search(&[1.0, 0.0, 0.0, 0.0], 2).unwrap();
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].0, 0);
        assert!((results[0].1 - 1.0).abs() < 1e-6);

        assert_eq!(results[1].0, 2);
        assert!((results[1].1 - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_tie_break_by_position() {
        let mut index = FlatIndex::new(2);
        index
            .add(vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![1.0, 0.0]])
            .unwrap();

        let results = index.search(&[1.0, 0.0], 3).unwrap();
        let positions: Vec<usize> = results.iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_k_larger_than_store() {
        let mut index = FlatIndex::new(2);
        index.add(vec![vec![1.0, 0.0]]).unwrap();

        let results = index.search(&[0.0, 1.0], 10).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_search_idempotent() {
        let mut index = FlatIndex::new(3);
        index
            .add(vec![
                vec![0.2, 0.4, 0.9],
                vec![0.9, 0.1, 0.3],
                vec![0.5, 0.5, 0.5],
            ])
            .unwrap();

        let first = index.search(&[0.3, 0.3, 0.8], 3).unwrap();
        let second = index.search(&[0.3, 0.3, 0.8], 3).unwrap();
        assert_eq!(first, second);
    }
}
