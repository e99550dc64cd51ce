//! The set of fonts installed on the host, fixed for the session

use std::collections::BTreeSet;

/// Read-only, alphabetically ordered set of installed font names.
///
/// Built once at startup from the font enumeration source. Ordering is plain
/// byte-wise string ordering, which is what every sorted section of the view uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontUniverse {
    fonts: BTreeSet<String>,
}

impl FontUniverse {
    pub fn new<I, S>(fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fonts: fonts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, font: &str) -> bool {
        self.fonts.contains(font)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Fonts in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fonts.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universe_sorted_and_deduplicated() {
        let universe = FontUniverse::new(["Zapf", "Arial", "Courier", "Arial"]);
        assert_eq!(universe.len(), 3);
        assert_eq!(universe.iter().collect::<Vec<_>>(), vec!["Arial", "Courier", "Zapf"]);
    }

    #[test]
    fn test_universe_is_case_sensitive() {
        let universe = FontUniverse::new(["Arial"]);
        assert!(universe.contains("Arial"));
        assert!(!universe.contains("arial"));
    }
}
