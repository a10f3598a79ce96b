use bitflags::bitflags;

mod api;
mod convert;
mod engine;

pub use api::{
    CrossCheck, Engine, Options, ValidationDetails, ValidationReport, evaluate, is_canonical, is_canonical_pattern,
    is_canonical_with, to_int, to_int_with, to_roman, validate_verbose_with,
};
pub use convert::{ROMAN_MAX, ROMAN_MIN};
pub use engine::{Rejection, ScanStep};

// --- Internal types ---------------------------------------------------------

/// One of the seven Roman numeral symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    /// Map an (already uppercased) character to its symbol, if it is one.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// Fixed symbol-value mapping: I=1, V=5, X=10, L=50, C=100, D=500, M=1000.
    pub fn value(self) -> u32 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// The singleton bit for V/L/D; empty for the repeatable symbols.
    pub fn singleton(self) -> Singletons {
        match self {
            Symbol::V => Singletons::V,
            Symbol::L => Singletons::L,
            Symbol::D => Singletons::D,
            _ => Singletons::empty(),
        }
    }
}

/// Value of `c` as a Roman symbol, or 0 when `c` is not one.
///
/// The evaluator and the structural scan's lookahead both want
/// "unknown maps to zero" semantics rather than an `Option`.
pub(crate) fn value_of(c: char) -> u32 {
    Symbol::from_char(c).map_or(0, Symbol::value)
}

bitflags! {
    /// Tracks which of the at-most-once symbols (V, L, D) a scan has seen.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct Singletons: u8 {
        const V = 1 << 0;
        const L = 1 << 1;
        const D = 1 << 2;
    }
}
