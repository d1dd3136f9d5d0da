//! The `Paper` record.
//!
//! A `Paper` is one document's metadata as returned by a document source,
//! plus the ingestion-time category tag. Records are immutable once built;
//! the only post-construction mutation is stamping `source_category` during
//! ingestion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a single paper.
///
/// The `source_category` field is distinct from `primary_category`: it
/// records the category *query* the paper was fetched under, which may be a
/// non-primary category of the paper. It is `None` until ingestion stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Unique identifier assigned by the document source (e.g. "2408.01234v1").
    pub id: String,

    /// Paper title.
    pub title: String,

    /// Abstract text.
    pub summary: String,

    /// Author names, in publication order.
    pub authors: Vec<String>,

    /// First publication timestamp.
    pub published: DateTime<Utc>,

    /// Last update timestamp.
    pub updated: DateTime<Utc>,

    /// All category codes the source tags this paper with.
    pub categories: Vec<String>,

    /// The category the source considers primary.
    pub primary_category: String,

    /// Link to the PDF.
    pub pdf_url: String,

    /// Link to the paper's landing page.
    pub page_url: String,

    /// The category query this paper was fetched under.
    ///
    /// Stamped by the ingestion pipeline; absent for papers that have not
    /// been through ingestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_category: Option<String>,
}

impl Paper {
    /// Create a paper with the required source fields.
    ///
    /// Timestamps, categories, and links are filled via the `with_*`
    /// builders; `source_category` starts out unset.
    pub fn new(id: impl Into<String>, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            authors: Vec::new(),
            published: DateTime::<Utc>::UNIX_EPOCH,
            updated: DateTime::<Utc>::UNIX_EPOCH,
            categories: Vec::new(),
            primary_category: String::new(),
            pdf_url: String::new(),
            page_url: String::new(),
            source_category: None,
        }
    }

    /// Set the author list.
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Set published and updated timestamps.
    pub fn with_timestamps(mut self, published: DateTime<Utc>, updated: DateTime<Utc>) -> Self {
        self.published = published;
        self.updated = updated;
        self
    }

    /// Set the category codes and the primary category.
    pub fn with_categories(mut self, categories: Vec<String>, primary: impl Into<String>) -> Self {
        self.categories = categories;
        self.primary_category = primary.into();
        self
    }

    /// Set the PDF and landing-page links.
    pub fn with_links(mut self, pdf_url: impl Into<String>, page_url: impl Into<String>) -> Self {
        self.pdf_url = pdf_url.into();
        self.page_url = page_url.into();
        self
    }

    /// The category used for result filtering.
    ///
    /// The ingestion-time `source_category` when present, otherwise the
    /// source's `primary_category`.
    pub fn filter_category(&self) -> &str {
        self.source_category
            .as_deref()
            .unwrap_or(&self.primary_category)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_paper() -> Paper {
        Paper::new("2408.01234v1", "Test Paper", "An abstract.")
            .with_authors(vec!["A. Author".to_string(), "B. Author".to_string()])
            .with_categories(
                vec!["cs.AI".to_string(), "cs.LG".to_string()],
                "cs.AI",
            )
            .with_links(
                "https://arxiv.org/pdf/2408.01234v1",
                "https://arxiv.org/abs/2408.01234v1",
            )
    }

    #[test]
    fn test_paper_builder() {
        let paper = sample_paper();
        assert_eq!(paper.id, "2408.01234v1");
        assert_eq!(paper.authors.len(), 2);
        assert_eq!(paper.primary_category, "cs.AI");
        assert!(paper.source_category.is_none());
    }

    #[test]
    fn test_filter_category_falls_back_to_primary() {
        let paper = sample_paper();
        assert_eq!(paper.filter_category(), "cs.AI");
    }

    #[test]
    fn test_filter_category_prefers_source_category() {
        let mut paper = sample_paper();
        paper.source_category = Some("cs.LG".to_string());
        assert_eq!(paper.filter_category(), "cs.LG");
    }

    #[test]
    fn test_serialization_skips_unset_source_category() {
        let paper = sample_paper();
        let json = serde_json::to_string(&paper).unwrap();
        assert!(!json.contains("source_category"));

        let mut stamped = paper;
        stamped.source_category = Some("cs.AI".to_string());
        let json = serde_json::to_string(&stamped).unwrap();
        assert!(json.contains("source_category"));
    }

    #[test]
    fn test_round_trip() {
        let paper = sample_paper();
        let json = serde_json::to_string(&paper).unwrap();
        let back: Paper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, paper);
    }
}
