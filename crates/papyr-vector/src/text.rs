//! Text composition for embedding.
//!
//! Which paper fields feed the embedding model is a fixed, enumerated choice
//! made once per ingestion run, never a per-record decision and never a
//! runtime string match. Each variant maps to one pure composition function.

use papyr_core::Paper;
use serde::{Deserialize, Serialize};

/// The paper field(s) to embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbedField {
    /// Title only.
    Title,

    /// Abstract only.
    Summary,

    /// Structured concatenation of title and abstract.
    #[default]
    TitleSummary,
}

impl EmbedField {
    /// Compose the embedding text for one paper.
    pub fn compose(&self, paper: &Paper) -> String {
        match self {
            Self::Title => paper.title.clone(),
            Self::Summary => paper.summary.clone(),
            Self::TitleSummary => {
                format!("Title: {}\nAbstract: {}", paper.title, paper.summary)
            }
        }
    }
}

impl std::fmt::Display for EmbedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Summary => write!(f, "summary"),
            Self::TitleSummary => write!(f, "title-summary"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Paper {
        Paper::new("id-1", "Deep Nets", "They are deep.")
    }

    #[test]
    fn test_title_only() {
        assert_eq!(EmbedField::Title.compose(&sample()), "Deep Nets");
    }

    #[test]
    fn test_summary_only() {
        assert_eq!(EmbedField::Summary.compose(&sample()), "They are deep.");
    }

    #[test]
    fn test_title_summary_format() {
        assert_eq!(
            EmbedField::TitleSummary.compose(&sample()),
            "Title: Deep Nets\nAbstract: They are deep."
        );
    }

    #[test]
    fn test_default_is_title_summary() {
        assert_eq!(EmbedField::default(), EmbedField::TitleSummary);
    }

    #[test]
    fn test_serde_kebab_case() {
        let field: EmbedField = serde_json::from_str(r#""title-summary""#).unwrap();
        assert_eq!(field, EmbedField::TitleSummary);
        assert_eq!(
            serde_json::to_string(&EmbedField::Title).unwrap(),
            r#""title""#
        );
    }
}
