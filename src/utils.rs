//! Utility functions for string processing.

/// Case-fold a string for substring matching.
///
/// Plain Unicode lowercasing, nothing else: whitespace and diacritics are kept,
/// so "café" does not match "cafe" and "tomato  soup" does not match
/// "tomato soup". That is the same comparison the search box has always made.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive containment, where `needle` is already folded.
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold_case(haystack).contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("Tomato SOUP"), "tomato soup");
        assert_eq!(fold_case("ÉCLAIR"), "éclair");
    }

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("Baker Tomato", "tomato"));
        assert!(contains_folded("anything", ""));
        assert!(!contains_folded("café", "cafe"));
    }
}
