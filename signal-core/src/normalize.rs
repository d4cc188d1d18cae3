//! Term set normalization for raw delimited input

use std::collections::HashSet;

/// Split raw input into an ordered, deduplicated sequence of trimmed terms.
///
/// Commas, newlines and tabs are accepted interchangeably as delimiters so
/// pasted lists from different sources all parse the same way. Order follows
/// first occurrence; identity is exact string equality, so terms differing
/// only in case are kept as distinct entries.
pub fn parse_terms(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(|c| matches!(c, ',' | '\n' | '\t'))
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(term.to_string()))
        .map(String::from)
        .collect()
}
