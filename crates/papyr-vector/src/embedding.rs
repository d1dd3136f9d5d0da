//! Embedding provider seam.
//!
//! The pipeline treats the embedding model as an opaque function from text
//! to a fixed-dimension vector. `EmbeddingProvider` is that seam; model
//! choice, batching strategy, and inference performance live behind it.
//!
//! The crate ships only [`MockEmbeddingProvider`], a deterministic provider
//! for tests and offline runs. Real model backends implement the same trait
//! out of tree.

use async_trait::async_trait;
use papyr_core::Result;

/// Trait for converting text to fixed-dimension vectors.
///
/// `Send + Sync` so a provider can be shared across async tasks.
/// Implementations wrapping thread-unsafe inference libraries handle their
/// own synchronization.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text.
    ///
    /// The returned vector must have exactly `dimension()` components; the
    /// corpus store treats any other length as a configuration error.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of texts.
    ///
    /// Default implementation embeds sequentially. Backends with native
    /// batching should override this; ingestion sends every fetched paper
    /// in one call to amortize model invocation overhead.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text).await?);
        }
        Ok(embeddings)
    }

    /// The fixed output dimension.
    fn dimension(&self) -> usize;

    /// Provider name for diagnostics.
    fn name(&self) -> &str;
}

/// Deterministic embedding provider for tests.
///
/// Derives each component from a rolling hash of the input bytes, then
/// scales to unit norm. Equal texts always produce equal vectors; no model
/// files, no network.
pub struct MockEmbeddingProvider {
    dimension: usize,
}

impl MockEmbeddingProvider {
    /// Create a mock provider with the given output dimension.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn hash_embedding(&self, text: &str) -> Vec<f32> {
        // FNV-1a over (component index, text bytes) per component.
        let mut embedding = Vec::with_capacity(self.dimension);
        for component in 0..self.dimension {
            let mut hash: u64 = 0xcbf2_9ce4_8422_2325 ^ component as u64;
            for byte in text.bytes() {
                hash ^= byte as u64;
                hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
            }
            // Map to [-1, 1)
            embedding.push((hash % 2048) as f32 / 1024.0 - 1.0);
        }

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut embedding {
                *value /= norm;
            }
        }
        embedding
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.hash_embedding(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.hash_embedding(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_dimension_and_name() {
        let provider = MockEmbeddingProvider::new(16);
        assert_eq!(provider.dimension(), 16);
        assert_eq!(provider.name(), "mock");

        let embedding = provider.embed("hello").await.unwrap();
        assert_eq!(embedding.len(), 16);
    }

    #[tokio::test]
    async fn test_mock_unit_norm() {
        let provider = MockEmbeddingProvider::new(8);
        let embedding = provider.embed("semantic search").await.unwrap();
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_mock_deterministic() {
        let provider = MockEmbeddingProvider::new(12);
        let e1 = provider.embed("same input").await.unwrap();
        let e2 = provider.embed("same input").await.unwrap();
        assert_eq!(e1, e2);
    }

    #[tokio::test]
    async fn test_mock_distinguishes_texts() {
        let provider = MockEmbeddingProvider::new(12);
        let e1 = provider.embed("galaxy formation").await.unwrap();
        let e2 = provider.embed("diffusion models").await.unwrap();
        assert_ne!(e1, e2);
    }

    #[tokio::test]
    async fn test_batch_matches_single() {
        let provider = MockEmbeddingProvider::new(8);
        let batch = provider.embed_batch(&["one", "two"]).await.unwrap();
        let single = provider.embed("one").await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], single);
    }

    #[test]
    fn test_trait_object_safety() {
        fn _assert_object_safe(_: &dyn EmbeddingProvider) {}
    }
}
