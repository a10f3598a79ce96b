//! Canonical-form validation engines.
//!
//! Two independent engines decide the same question: is a candidate string the
//! canonical Roman numeral of some integer in 1..=3999?
//!
//! ```text
//! candidate (trimmed, uppercased)
//!        │
//!        ├── structural.rs   single left-to-right scan over call-local
//!        │                   `ScanState` (run counter, singleton flags,
//!        │                   subtraction ceiling, last subtractive pair);
//!        │                   rejects with a typed `Rejection`
//!        │
//!        └── pattern.rs      whole-string match against the fixed grammar
//!                            ^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$
//! ```
//!
//! The structural engine is the primary one and the only one that can explain
//! a rejection; the pattern engine exists as a cross-check and as a fallback
//! selectable through `Options::engine`. Both engines must agree on every
//! input — `tests.rs` brute-forces that property over all symbol strings up
//! to length 6.
//!
//! Both engines assume the caller has already trimmed and uppercased the
//! candidate. Characters outside the symbol table reject; the empty string
//! rejects.

#[path = "engine/pattern.rs"]
mod pattern;
#[path = "engine/structural.rs"]
mod structural;


pub use pattern::matches_grammar;
pub use structural::{Rejection, ScanStep, ScanTrace, scan, scan_traced};
