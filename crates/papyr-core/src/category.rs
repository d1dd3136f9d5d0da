//! Category catalog.
//!
//! Maps the arXiv category codes Papyr ships labels for to human-readable
//! names. The catalog is display-only: every operation accepts arbitrary
//! category codes, labelled or not.

/// Category codes with bundled display labels.
const CATALOG: &[(&str, &str)] = &[
    ("cs.AI", "Computer Science - Artificial Intelligence"),
    ("cs.LG", "Computer Science - Machine Learning"),
    ("cs.CL", "Computer Science - Natural Language Processing"),
    ("cs.CV", "Computer Science - Computer Vision"),
    ("astro-ph.GA", "Astrophysics - Galaxies"),
    ("astro-ph.CO", "Astrophysics - Cosmology"),
    ("astro-ph.SR", "Astrophysics - Solar and Stellar"),
];

/// Look up the display label for a category code.
///
/// Returns `None` for codes outside the bundled catalog.
pub fn category_label(code: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// The display label for a code, falling back to the code itself.
pub fn label_or_code(code: &str) -> &str {
    category_label(code).unwrap_or(code)
}

/// All category codes in the bundled catalog.
pub fn known_categories() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().copied()
}

// ============================================================================
// Tests
// ============================================================================
