//! Section kinds for the storefront screen
//!
//! The browse screen is an ordered list of sections, each rendered with its
//! own layout rules:
//! - Promoted: full-bleed paged carousel of featured apps
//! - Standard: paged columns of three app rows, one per named shelf
//! - Categories: plain vertical list of category rows

use std::fmt;

/// One section of the browse screen
///
/// `Promoted` and `Categories` are singleton-like and compare by tag;
/// `Standard` sections are distinct per label. The set is closed, so every
/// dispatch over it is checked exhaustively at compile time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Featured apps carousel at the top of the screen
    Promoted,
    /// A labeled shelf of standard app rows (e.g. "Popular this week")
    Standard(String),
    /// Category list at the bottom of the screen
    Categories,
}

impl SectionKind {
    /// Create a standard shelf section with the given label
    pub fn standard(label: impl Into<String>) -> Self {
        SectionKind::Standard(label.into())
    }

    /// Title shown in this section's header view
    ///
    /// Promoted sections have no header, so their title is empty.
    pub fn title(&self) -> &str {
        match self {
            SectionKind::Promoted => "",
            SectionKind::Standard(label) => label,
            SectionKind::Categories => "Categories",
        }
    }

    /// Whether the host serves header views for this section
    pub fn shows_header(&self) -> bool {
        !matches!(self, SectionKind::Promoted)
    }

    /// Whether this section scrolls its groups sideways
    pub fn pages_horizontally(&self) -> bool {
        matches!(self, SectionKind::Promoted | SectionKind::Standard(_))
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Promoted => write!(f, "promoted"),
            SectionKind::Standard(label) => write!(f, "standard({})", label),
            SectionKind::Categories => write!(f, "categories"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sections_distinct_per_label() {
        let popular = SectionKind::standard("Popular this week");
        let essential = SectionKind::standard("Essential picks");

        assert_ne!(popular, essential);
        assert_eq!(popular, SectionKind::standard("Popular this week"));
        assert_eq!(SectionKind::Promoted, SectionKind::Promoted);
    }

    #[test]
    fn test_titles() {
        assert_eq!(SectionKind::Promoted.title(), "");
        assert_eq!(SectionKind::standard("Popular this week").title(), "Popular this week");
        assert_eq!(SectionKind::Categories.title(), "Categories");
    }

    #[test]
    fn test_section_features() {
        assert!(!SectionKind::Promoted.shows_header());
        assert!(SectionKind::standard("x").shows_header());
        assert!(SectionKind::Categories.shows_header());

        assert!(SectionKind::Promoted.pages_horizontally());
        assert!(SectionKind::standard("x").pages_horizontally());
        assert!(!SectionKind::Categories.pages_horizontally());
    }
}
