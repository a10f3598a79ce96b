//! Pattern validation: the canonical grammar as one anchored regex.
//!
//! Each group covers one decimal digit of the value, most significant first:
//! thousands as `M{0,3}`, then hundreds, tens and units as
//! `(9|4|5?d{0,3})`-shaped alternations. Provably equivalent to the
//! structural scan for every input (see the brute-force agreement test in
//! `engine/tests.rs`).
//!
//! The pattern is compiled once into a `Lazy<Option<Regex>>`. A compile
//! failure makes every call reject — the engine fails closed rather than ever
//! defaulting to "valid".

use once_cell::sync::Lazy;
use regex::Regex;

const GRAMMAR: &str = r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$";

static PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(GRAMMAR).ok());

/// Validate `candidate` against the canonical grammar.
///
/// Same contract as the structural engine: assumes trimmed, uppercased input.
/// The empty string is rejected explicitly — every group of the grammar is
/// optional, so the bare regex would match it.
pub fn matches_grammar(candidate: &str) -> bool {
    match PATTERN.as_ref() {
        Some(re) => !candidate.is_empty() && re.is_match(candidate),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_compiles() {
        assert!(PATTERN.is_some());
    }

    #[test]
    fn accepts_known_valid_forms() {
        for s in ["I", "III", "IV", "IX", "XIV", "XL", "XC", "CD", "CM", "M", "MCMXCIV", "MMMCMXCIX"] {
            assert!(matches_grammar(s), "expected '{s}' to be accepted");
        }
    }

    #[test]
    fn rejects_known_invalid_forms() {
        for s in ["", "IIII", "VV", "IXL", "MMMM", "IL", "CCCM", "IVI", "XCX", "xiv", "ROMAN"] {
            assert!(!matches_grammar(s), "expected '{s}' to be rejected");
        }
    }
}
