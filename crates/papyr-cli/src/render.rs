//! Result rendering.
//!
//! Formats (paper, score) pairs for the terminal: rank, title, score to
//! three decimals, up to the first three authors, published date, primary
//! category, a truncated abstract, and both links.

use papyr_core::Paper;

/// Maximum abstract length before truncation.
const SUMMARY_LIMIT: usize = 400;

/// Maximum number of authors shown.
const AUTHOR_LIMIT: usize = 3;

/// Format one ranked result.
pub fn format_result(rank: usize, paper: &Paper, score: f32) -> String {
    let mut out = String::new();

    out.push_str(&format!("{rank}. {} (score: {score:.3})\n", paper.title));
    out.push_str(&format!("   Authors: {}\n", author_line(&paper.authors)));
    out.push_str(&format!(
        "   Published: {}  Category: {}\n",
        paper.published.format("%Y-%m-%d"),
        paper.primary_category,
    ));
    out.push_str(&format!("   {}\n", truncate(&paper.summary, SUMMARY_LIMIT)));
    out.push_str(&format!("   ID: {}\n", paper.id));
    out.push_str(&format!("   PDF: {}  Page: {}\n", paper.pdf_url, paper.page_url));
    out
}

/// Format a whole result list, one block per paper.
pub fn format_results(results: &[(Paper, f32)]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, (paper, score))| format_result(i + 1, paper, *score))
        .collect::<Vec<_>>()
        .join("\n")
}

fn author_line(authors: &[String]) -> String {
    let mut line = authors
        .iter()
        .take(AUTHOR_LIMIT)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if authors.len() > AUTHOR_LIMIT {
        line.push_str(" et al.");
    }
    if line.is_empty() {
        line.push_str("(unknown)");
    }
    line
}

/// Truncate on a char boundary, appending an ellipsis when shortened.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(limit).collect();
        short.push_str("...");
        short
    }
}

// ============================================================================
// Tests
// ============================================================================
