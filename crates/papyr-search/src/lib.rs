//! Ingestion pipeline and query routing for Papyr.
//!
//! This crate ties the document source, the embedding provider, and the
//! corpus store together:
//!
//! - [`SearchSession`]: explicit session context owning the loaded corpus
//! - [`IngestPipeline`]: multi-category fetch → stamp → batch embed → install
//! - [`QueryRouter`]: embed query → over-fetch → category filter → truncate
//!
//! # Data flow
//!
//! ```text
//! categories ─► IngestPipeline ─► (PaperSource, EmbeddingProvider)
//!                    │
//!                    ▼
//!              SearchSession (CorpusStore + filter universe)
//!                    ▲
//!                    │
//! query text ─► QueryRouter ─► EmbeddingProvider ─► CorpusStore::search
//! ```

pub mod ingest;
pub mod router;
pub mod session;

pub use ingest::{IngestOptions, IngestPipeline, IngestReport};
pub use router::{overfetch, QueryRouter};
pub use session::SearchSession;
