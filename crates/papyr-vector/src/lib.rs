//! Vector search infrastructure for Papyr.
//!
//! This crate provides the flat inner-product index, the corpus store that
//! keeps papers and vectors aligned by position, the embedding provider
//! seam, and the embed-text composition policy.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                    papyr-vector                     │
//! ├────────────────────────────────────────────────────┤
//! │  EmbeddingProvider trait                            │
//! │  └── MockEmbeddingProvider (deterministic, tests)   │
//! ├────────────────────────────────────────────────────┤
//! │  FlatIndex   (L2-normalized vectors, dot product)   │
//! │  CorpusStore (papers ∥ index, positional pairing)   │
//! ├────────────────────────────────────────────────────┤
//! │  EmbedField  (title / summary / title+summary)      │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use papyr_vector::{CorpusStore, EmbeddingProvider, MockEmbeddingProvider};
//!
//! let provider = MockEmbeddingProvider::new(384);
//! let mut store = CorpusStore::new(provider.dimension());
//!
//! store.add(papers, embeddings)?;
//! for (paper, score) in store.search(&query_embedding, 5)? {
//!     println!("{}: {:.3}", paper.title, score);
//! }
//! ```

pub mod embedding;
pub mod index;
pub mod store;
pub mod text;

pub use embedding::{EmbeddingProvider, MockEmbeddingProvider};
pub use index::FlatIndex;
pub use store::CorpusStore;
pub use text::EmbedField;
