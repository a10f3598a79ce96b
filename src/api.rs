use std::time::{Duration, Instant};

use crate::engine::{self, Rejection, ScanStep};
use crate::convert;

/// Which validation engine decides the verdict.
///
/// Both engines accept exactly the strings representing 1..=3999 in canonical
/// form; the pattern engine exists for cross-checking and for callers that
/// prefer the grammar over the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Grammar-aware single-pass scan (primary engine).
    #[default]
    Structural,
    /// Fixed-regex canonical grammar (alternate engine).
    Pattern,
}

/// Options that affect validation behavior.
///
/// This is intentionally minimal: engine selection is the only strategy
/// choice the core exposes.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Validation engine to use.
    pub engine: Engine,
}

/// Verdicts of both engines for one candidate.
///
/// The engines must agree on every input; a disagreement here is
/// a bug in one of them.
#[derive(Debug, Clone, Copy)]
pub struct CrossCheck {
    pub structural: bool,
    pub pattern: bool,
}

impl CrossCheck {
    pub fn agree(&self) -> bool {
        self.structural == self.pattern
    }
}

/// Additional details returned by [`validate_verbose_with`].
///
/// `steps` and `rejection` always come from the structural scan — it is the
/// only engine that can explain a verdict — regardless of which engine was
/// selected to decide it.
#[derive(Debug, Clone)]
pub struct ValidationDetails {
    /// Engine that decided the verdict.
    pub engine: Engine,
    /// Structural scan steps, one per position reached.
    pub steps: Vec<ScanStep>,
    /// Structural rejection reason, if the scan rejected.
    pub rejection: Option<Rejection>,
    /// Both engines' verdicts for this candidate.
    pub cross_check: CrossCheck,
}

/// Result from [`validate_verbose_with`].
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// The candidate as passed in.
    pub text: String,
    /// Verdict of the selected engine.
    pub valid: bool,
    /// Evaluated value, present only when `valid`.
    pub value: Option<u32>,
    /// Elapsed time spent validating + evaluating.
    pub elapsed: Duration,
    pub details: ValidationDetails,
}

/// Validate `candidate` as a canonical Roman numeral (structural engine).
///
/// The candidate must already be trimmed and uppercased; empty input and
/// characters outside {I, V, X, L, C, D, M} reject.
///
/// # Example
/// ```
/// use romanum::is_canonical;
///
/// assert!(is_canonical("MCMXCIV"));
/// assert!(!is_canonical("IIII"));
/// ```
pub fn is_canonical(candidate: &str) -> bool {
    engine::scan(candidate)
}

/// Validate `candidate` with the pattern engine. Same contract and the same
/// accepted set as [`is_canonical`].
pub fn is_canonical_pattern(candidate: &str) -> bool {
    engine::matches_grammar(candidate)
}

/// Validate `candidate` with the engine selected in `options`.
pub fn is_canonical_with(candidate: &str, options: &Options) -> bool {
    match options.engine {
        Engine::Structural => is_canonical(candidate),
        Engine::Pattern => is_canonical_pattern(candidate),
    }
}

/// Sum an already-validated numeral (no re-validation; garbage in, garbage
/// out). Prefer [`to_int`] unless the candidate is known valid.
pub fn evaluate(candidate: &str) -> u32 {
    convert::evaluate(candidate)
}

/// Validate `candidate` with the default engine, then evaluate it.
///
/// # Example
/// ```
/// use romanum::to_int;
///
/// assert_eq!(to_int("MCMXCIV"), Some(1994));
/// assert_eq!(to_int("IXL"), None);
/// ```
pub fn to_int(candidate: &str) -> Option<u32> {
    to_int_with(candidate, &Options::default())
}

/// Validate `candidate` with the engine selected in `options`, then evaluate.
pub fn to_int_with(candidate: &str, options: &Options) -> Option<u32> {
    is_canonical_with(candidate, options).then(|| convert::evaluate(candidate))
}

/// Convert `n` to its canonical Roman numeral; `None` outside 1..=3999.
///
/// # Example
/// ```
/// use romanum::to_roman;
///
/// assert_eq!(to_roman(1994).as_deref(), Some("MCMXCIV"));
/// assert_eq!(to_roman(4000), None);
/// ```
pub fn to_roman(n: u32) -> Option<String> {
    convert::to_roman(n)
}

/// Validate `candidate` and return the verdict with compact debug details:
/// the structural scan trace, the rejection reason and both engines'
/// verdicts. The plain [`is_canonical_with`] path allocates none of this.
pub fn validate_verbose_with(candidate: &str, options: &Options) -> ValidationReport {
    let started = Instant::now();

    let trace = engine::scan_traced(candidate);
    let cross_check = CrossCheck { structural: trace.accepted(), pattern: engine::matches_grammar(candidate) };

    let valid = match options.engine {
        Engine::Structural => cross_check.structural,
        Engine::Pattern => cross_check.pattern,
    };
    let value = if valid { Some(convert::evaluate(candidate)) } else { None };

    ValidationReport {
        text: candidate.to_string(),
        valid,
        value,
        elapsed: started.elapsed(),
        details: ValidationDetails {
            engine: options.engine,
            steps: trace.steps,
            rejection: trace.rejection,
            cross_check,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_int_composes_validation_and_evaluation() {
        assert_eq!(to_int("MCMXCIV"), Some(1994));
        assert_eq!(to_int("IV"), Some(4));
        assert_eq!(to_int("IX"), Some(9));
        assert_eq!(to_int("III"), Some(3));
        assert_eq!(to_int("M"), Some(1000));
        assert_eq!(to_int("MMMCMXCIX"), Some(3999));

        for s in ["", "IIII", "VV", "IXL", "MMMM", "IL", "CCCM", "mcmxciv"] {
            assert_eq!(to_int(s), None, "expected '{s}' to be rejected");
        }
    }

    #[test]
    fn engine_is_selectable_via_options() {
        let pattern = Options { engine: Engine::Pattern };
        assert!(is_canonical_with("XLII", &pattern));
        assert!(!is_canonical_with("XLIX L", &pattern));
        assert_eq!(to_int_with("XLII", &pattern), Some(42));
        assert_eq!(to_int_with("IIX", &pattern), None);
    }

    #[test]
    fn evaluate_assumes_validated_input() {
        assert_eq!(evaluate("MCMXCIV"), 1994);
        // Documented garbage-in-garbage-out: no validation happens here.
        assert_eq!(evaluate("IIII"), 4);
        assert_eq!(evaluate("VV"), 10);
    }

    #[test]
    fn verbose_report_explains_a_rejection() {
        let report = validate_verbose_with("IXL", &Options::default());
        assert!(!report.valid);
        assert_eq!(report.value, None);
        assert_eq!(report.details.rejection, Some(Rejection::TrailingAfterSubtractive));
        assert!(report.details.cross_check.agree());
        assert!(report.elapsed >= Duration::ZERO);
    }

    #[test]
    fn verbose_report_carries_value_and_trace() {
        let report = validate_verbose_with("MMXXV", &Options { engine: Engine::Pattern });
        assert!(report.valid);
        assert_eq!(report.value, Some(2025));
        assert_eq!(report.details.engine, Engine::Pattern);
        assert_eq!(report.details.steps.len(), 5);
        assert!(report.details.cross_check.agree());
    }
}
