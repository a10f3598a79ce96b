//! Structural validation: a single grammar-aware scan.
//!
//! The scan walks the candidate once, left to right, holding a small
//! call-local [`ScanState`]:
//!
//! - **run**: length of the current run of identical symbols. I, X, C and M
//!   may run at most three long; V, L and D are singletons and are tracked
//!   separately in a [`Singletons`] flag set.
//! - **ceiling**: the largest value still permitted at the current position.
//!   It starts at 1000 and only ever moves down, which is what enforces
//!   descending magnitude order (and rejects e.g. "XXC").
//! - **last_subtrahend** / **in_subtractive**: the smaller member of the most
//!   recent subtractive pair and whether the previous step formed one. These
//!   forbid reusing a subtracted symbol ("IVI", "XCX") and chaining pairs.
//!
//! Two extra checks close loopholes the state machine alone misses: the
//! double-subtraction window over `i-2..i` ("IIX") and the one-symbol
//! lookahead after a pair ("IXL", "CMM").
//!
//! Rejections carry a typed [`Rejection`] so the verbose report can say which
//! rule fired; the fast path ([`scan`]) discards it.

use std::fmt;

use crate::{Singletons, Symbol, value_of};

/// Why the structural engine rejected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate was empty. Callers should not pass empty input, but the
    /// engine rejects it rather than vacuously accepting.
    Empty,
    /// A character outside {I, V, X, L, C, D, M}.
    UnknownSymbol(char),
    /// A second occurrence of V, L or D.
    RepeatedSingleton(char),
    /// A run of more than three identical I, X, C or M.
    RunTooLong(char),
    /// An ascending pair outside the six legal ones (IV IX XL XC CD CM).
    IllegalPair,
    /// A subtractive pair directly following another subtractive pair.
    ChainedSubtractive,
    /// A symbol larger than the current position permits.
    AboveCeiling,
    /// A symbol reused after serving as the smaller member of a pair.
    ReusedSubtrahend,
    /// Two symbols both subtracted from the same larger one (e.g. "IIX").
    DoubleSubtraction,
    /// A symbol after a subtractive pair that the pair's smaller member
    /// cannot legally precede (e.g. the L in "IXL").
    TrailingAfterSubtractive,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "empty candidate"),
            Rejection::UnknownSymbol(c) => write!(f, "'{c}' is not a Roman symbol"),
            Rejection::RepeatedSingleton(c) => write!(f, "'{c}' may appear at most once"),
            Rejection::RunTooLong(c) => write!(f, "more than three '{c}' in a row"),
            Rejection::IllegalPair => write!(f, "not one of the six legal subtractive pairs"),
            Rejection::ChainedSubtractive => write!(f, "subtractive pair directly after another"),
            Rejection::AboveCeiling => write!(f, "symbol too large for its position"),
            Rejection::ReusedSubtrahend => write!(f, "symbol reused after being subtracted"),
            Rejection::DoubleSubtraction => write!(f, "two symbols subtracted from one"),
            Rejection::TrailingAfterSubtractive => write!(f, "symbol too large after a subtractive pair"),
        }
    }
}

/// One scan position, as recorded for the verbose report.
///
/// `run` and `ceiling` are the state *entering* the ordering checks for this
/// position, so a rejection at index `i` is explained by step `i`.
#[derive(Debug, Clone)]
pub struct ScanStep {
    pub index: usize,
    pub symbol: char,
    pub value: u32,
    pub run: u32,
    pub ceiling: u32,
}

/// Step-by-step record of one structural scan.
#[derive(Debug, Clone)]
pub struct ScanTrace {
    pub steps: Vec<ScanStep>,
    pub rejection: Option<Rejection>,
}

impl ScanTrace {
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Call-local scan state. Created per call, discarded after; nothing is
/// shared across calls.
#[derive(Debug)]
struct ScanState {
    run: u32,
    ceiling: u32,
    last_subtrahend: u32,
    in_subtractive: bool,
    seen: Singletons,
}

impl ScanState {
    fn new() -> Self {
        ScanState { run: 1, ceiling: 1000, last_subtrahend: 0, in_subtractive: false, seen: Singletons::empty() }
    }
}

/// Validate `candidate` as a canonical Roman numeral (fast path).
///
/// Assumes the caller already trimmed and uppercased the candidate; any
/// character outside the symbol table rejects.
pub fn scan(candidate: &str) -> bool {
    run_scan(candidate, None).is_none()
}

/// Validate `candidate`, recording every scan step for the verbose report.
pub fn scan_traced(candidate: &str) -> ScanTrace {
    let mut steps = Vec::with_capacity(candidate.len());
    let rejection = run_scan(candidate, Some(&mut steps));
    ScanTrace { steps, rejection }
}

/// The six legal subtractive pairs: IV, IX, XL, XC, CD, CM.
fn legal_pair(prev: u32, value: u32) -> bool {
    matches!((prev, value), (1, 5) | (1, 10) | (10, 50) | (10, 100) | (100, 500) | (100, 1000))
}

fn run_scan(candidate: &str, mut steps: Option<&mut Vec<ScanStep>>) -> Option<Rejection> {
    if candidate.is_empty() {
        return Some(Rejection::Empty);
    }

    let chars: Vec<char> = candidate.chars().collect();
    let mut state = ScanState::new();

    for (i, &c) in chars.iter().enumerate() {
        let Some(symbol) = Symbol::from_char(c) else {
            return Some(Rejection::UnknownSymbol(c));
        };
        let value = symbol.value();

        let prev = if i > 0 { value_of(chars[i - 1]) } else { 0 };
        if i > 0 {
            state.run = if value == prev { state.run + 1 } else { 1 };
        }

        if let Some(steps) = steps.as_deref_mut() {
            steps.push(ScanStep { index: i, symbol: c, value, run: state.run, ceiling: state.ceiling });
        }

        // V, L and D may appear once in the whole numeral, adjacent or not.
        let bit = symbol.singleton();
        if !bit.is_empty() {
            if state.seen.contains(bit) {
                return Some(Rejection::RepeatedSingleton(c));
            }
            state.seen.insert(bit);
        }

        if i == 0 {
            continue;
        }

        // Only I, X, C, M can reach a run of four: a second V/L/D was
        // already rejected above.
        if state.run > 3 {
            return Some(Rejection::RunTooLong(c));
        }

        if prev < value {
            // Subtractive pair.
            if !legal_pair(prev, value) {
                return Some(Rejection::IllegalPair);
            }
            if state.in_subtractive {
                return Some(Rejection::ChainedSubtractive);
            }
            if value > state.ceiling {
                return Some(Rejection::AboveCeiling);
            }
            if prev == state.last_subtrahend {
                return Some(Rejection::ReusedSubtrahend);
            }
            state.last_subtrahend = prev;
            state.ceiling = value;
            state.in_subtractive = true;
        } else {
            // Descending or equal.
            if prev > state.ceiling {
                return Some(Rejection::AboveCeiling);
            }
            if value == state.last_subtrahend {
                return Some(Rejection::ReusedSubtrahend);
            }
            state.ceiling = prev;
            state.in_subtractive = false;
        }

        // A pair's larger member may not itself be preceded by two smaller
        // symbols ("IIX" read as a disguised double subtraction).
        if i > 1 && value_of(chars[i - 2]) < value && prev < value {
            return Some(Rejection::DoubleSubtraction);
        }

        // After a pair, the next symbol may not outrank the subtracted one
        // ("IXL": the I..X pair cannot be followed by L).
        if state.in_subtractive && i + 1 < chars.len() && value_of(chars[i + 1]) > state.last_subtrahend {
            return Some(Rejection::TrailingAfterSubtractive);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_valid_forms() {
        for s in ["I", "III", "IV", "IX", "XIV", "XIX", "XL", "XC", "CD", "CM", "M", "MCMXCIV", "MMMCMXCIX", "MMXXV"] {
            assert!(scan(s), "expected '{s}' to be accepted");
        }
    }

    #[test]
    fn single_symbols_are_valid() {
        for s in ["I", "V", "X", "L", "C", "D", "M"] {
            assert!(scan(s), "expected '{s}' to be accepted");
        }
    }

    #[test]
    fn rejects_known_invalid_forms() {
        let cases = [
            ("IIII", Rejection::RunTooLong('I')),
            ("MMMM", Rejection::RunTooLong('M')),
            ("VV", Rejection::RepeatedSingleton('V')),
            ("LL", Rejection::RepeatedSingleton('L')),
            ("DD", Rejection::RepeatedSingleton('D')),
            ("VIV", Rejection::RepeatedSingleton('V')),
            ("IL", Rejection::IllegalPair),
            ("IC", Rejection::IllegalPair),
            ("XD", Rejection::IllegalPair),
            ("IXL", Rejection::TrailingAfterSubtractive),
            ("CMM", Rejection::TrailingAfterSubtractive),
            ("IVI", Rejection::ReusedSubtrahend),
            ("XCX", Rejection::ReusedSubtrahend),
            ("XXC", Rejection::AboveCeiling),
            ("CCCM", Rejection::AboveCeiling),
            ("IXIV", Rejection::ReusedSubtrahend),
            ("XCL", Rejection::TrailingAfterSubtractive),
        ];
        for (s, expected) in cases {
            assert_eq!(run_scan(s, None), Some(expected), "wrong rejection for '{s}'");
        }
    }

    #[test]
    fn rejects_empty_and_unknown() {
        assert_eq!(run_scan("", None), Some(Rejection::Empty));
        assert_eq!(run_scan("MCMA", None), Some(Rejection::UnknownSymbol('A')));
        // The engine assumes pre-uppercased input; lowercase is unmapped.
        assert_eq!(run_scan("xiv", None), Some(Rejection::UnknownSymbol('x')));
    }

    #[test]
    fn trace_records_every_step_until_rejection() {
        let trace = scan_traced("MCMXCIV");
        assert!(trace.accepted());
        assert_eq!(trace.steps.len(), 7);
        assert_eq!(trace.steps[0].value, 1000);
        assert_eq!(trace.steps[0].ceiling, 1000);

        let trace = scan_traced("IIII");
        assert_eq!(trace.rejection, Some(Rejection::RunTooLong('I')));
        assert_eq!(trace.steps.len(), 4);
        assert_eq!(trace.steps[3].run, 4);
    }

    #[test]
    fn ceiling_tracks_descending_magnitude() {
        let trace = scan_traced("XIV");
        assert!(trace.accepted());
        // The leading X lowers the ceiling to 10 before the I..V pair is seen.
        assert_eq!(trace.steps[1].ceiling, 1000);
        assert_eq!(trace.steps[2].ceiling, 10);
    }
}
