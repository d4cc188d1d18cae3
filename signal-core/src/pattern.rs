//! Term-to-matcher compilation

use regex::Regex;

/// Compile a term into its canonical matcher: case-insensitive, whole-word,
/// with every pattern metacharacter escaped so the term matches literally.
///
/// "Whole word" means the match may not sit adjacent to an alphanumeric or
/// underscore character on either side, so a brand "Cat" never matches
/// inside "Category".
pub fn compile(term: &str) -> Regex {
    let escaped = regex::escape(term);
    // An escaped literal between word boundaries is always a valid pattern.
    Regex::new(&format!(r"(?i)\b{escaped}\b")).expect("escaped term compiles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_only() {
        let re = compile("Cat");
        let matches: Vec<_> = re.find_iter("Category Cat").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].as_str(), "Cat");
    }

    #[test]
    fn test_case_insensitive() {
        let re = compile("acme");
        assert_eq!(re.find_iter("Acme ACME acme").count(), 3);
    }

    #[test]
    fn test_metacharacters_matched_literally() {
        let re = compile("v1.0");
        assert!(re.is_match("release v1.0 shipped"));
        // The dot must not act as a wildcard
        assert!(!re.is_match("release v1x0 shipped"));
    }

    #[test]
    fn test_underscore_blocks_boundary() {
        let re = compile("fast");
        assert!(!re.is_match("ultra_fast_mode"));
        assert!(re.is_match("a fast mode"));
    }

    #[test]
    fn test_scan_is_non_overlapping() {
        let re = compile("aa");
        assert_eq!(re.find_iter("aa aa aa").count(), 3);
        // One run of word characters offers no interior boundaries
        assert_eq!(re.find_iter("aaaa").count(), 0);
    }
}
