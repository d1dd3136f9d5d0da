//! arXiv search query strings.
//!
//! The export API takes a `search_query` parameter in arXiv's own syntax.
//! Papyr builds two shapes: a plain category query and a time-boxed variant
//! that ANDs a submission-date range with `YYYYMMDD*` bounds.

use chrono::{Duration, Utc};

/// Query for all papers in one category: `cat:<code>`.
pub fn category_query(code: &str) -> String {
    format!("cat:{code}")
}

/// Query for papers in one category submitted within the last `days` days.
///
/// Produces `cat:<code> AND submittedDate:[<start>* TO <end>*]` where the
/// bounds are `YYYYMMDD` dates.
pub fn recent_query(code: &str, days: i64) -> String {
    let end = Utc::now();
    let start = end - Duration::days(days);
    format!(
        "cat:{} AND submittedDate:[{}* TO {}*]",
        code,
        start.format("%Y%m%d"),
        end.format("%Y%m%d"),
    )
}

// ============================================================================
// Tests
// ============================================================================
