//! Session context for the loaded corpus.
//!
//! A `SearchSession` is the explicit home of the "currently loaded" state:
//! the corpus store, the category codes it was loaded from (the filter
//! universe), and the embed field used to build it. Ingestion replaces the
//! whole triple on success; queries only ever read it. No global state and
//! no locking: one writer, one reader context, by construction.

use papyr_vector::{CorpusStore, EmbedField};

/// Session-scoped container for the current corpus.
#[derive(Debug, Default)]
pub struct SearchSession {
    store: Option<CorpusStore>,
    categories: Vec<String>,
    field: EmbedField,
}

impl SearchSession {
    /// Create a session with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session's corpus wholesale.
    ///
    /// Called by ingestion only after a run has fully succeeded, so readers
    /// never observe a partially built store.
    pub fn install(&mut self, store: CorpusStore, categories: Vec<String>, field: EmbedField) {
        self.store = Some(store);
        self.categories = categories;
        self.field = field;
    }

    /// The loaded corpus store, if any ingestion run has succeeded.
    pub fn store(&self) -> Option<&CorpusStore> {
        self.store.as_ref()
    }

    /// Category codes the current corpus was loaded from.
    pub fn loaded_categories(&self) -> &[String] {
        &self.categories
    }

    /// The embed field the current corpus was built with.
    pub fn embed_field(&self) -> EmbedField {
        self.field
    }

    /// Whether a corpus is loaded.
    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    /// Number of papers in the loaded corpus (0 when nothing is loaded).
    pub fn corpus_size(&self) -> usize {
        self.store.as_ref().map(CorpusStore::len).unwrap_or(0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session() {
        let session = SearchSession::new();
        assert!(!session.is_loaded());
        assert!(session.store().is_none());
        assert!(session.loaded_categories().is_empty());
        assert_eq!(session.corpus_size(), 0);
    }

    #[test]
    fn test_install_replaces_wholesale() {
        let mut session = SearchSession::new();
        session.install(
            CorpusStore::new(4),
            vec!["cs.AI".to_string()],
            EmbedField::Title,
        );
        assert!(session.is_loaded());
        assert_eq!(session.loaded_categories(), ["cs.AI"]);
        assert_eq!(session.embed_field(), EmbedField::Title);

        session.install(
            CorpusStore::new(8),
            vec!["astro-ph.GA".to_string()],
            EmbedField::TitleSummary,
        );
        assert_eq!(session.store().unwrap().dimension(), 8);
        assert_eq!(session.loaded_categories(), ["astro-ph.GA"]);
    }
}
