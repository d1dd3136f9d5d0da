//! arXiv document source adapter for Papyr.
//!
//! Provides the [`PaperSource`] seam the ingestion pipeline consumes, an
//! [`ArxivClient`] speaking the arXiv Atom export API over HTTP, the query
//! string builders, and a [`StaticPaperSource`] for tests and offline use.
//!
//! # Modules
//!
//! - [`source`]: `PaperSource` trait and the static test source
//! - [`client`]: reqwest-based export API client
//! - [`feed`]: Atom response parsing
//! - [`query`]: arXiv search query strings

pub mod client;
pub mod feed;
pub mod query;
pub mod source;

pub use client::{ArxivClient, DEFAULT_BASE_URL};
pub use feed::parse_feed;
pub use query::{category_query, recent_query};
pub use source::{PaperSource, StaticPaperSource};
