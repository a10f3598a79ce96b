//! Integer ↔ numeral conversion primitives.

use crate::value_of;

/// Smallest value expressible as a canonical Roman numeral.
pub const ROMAN_MIN: u32 = 1;
/// Largest value expressible as a canonical Roman numeral.
pub const ROMAN_MAX: u32 = 3999;

/// Descending (value, symbol) table driving the greedy converter. Includes
/// the six subtractive pairs so the output is canonical by construction.
const DESCENDING: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert `n` to its canonical Roman numeral.
///
/// Returns `None` outside [`ROMAN_MIN`]..=[`ROMAN_MAX`]. Greedy subtraction
/// over [`DESCENDING`]; each entry is consumed as many times as it fits
/// before moving on, which yields the unique minimal-length form.
pub fn to_roman(mut n: u32) -> Option<String> {
    if !(ROMAN_MIN..=ROMAN_MAX).contains(&n) {
        return None;
    }

    // The longest canonical numeral is 3888 = "MMMDCCCLXXXVIII", 15 symbols.
    let mut roman = String::with_capacity(15);
    for (value, symbol) in DESCENDING {
        while n >= value {
            roman.push_str(symbol);
            n -= value;
        }
        if n == 0 {
            break;
        }
    }
    Some(roman)
}

/// Sum a numeral left to right with one-symbol lookahead: a symbol valued
/// below its successor counts negative (IV = -1 + 5).
///
/// Assumes `candidate` already passed a validator; it does not re-validate.
/// Unmapped characters count as zero and arbitrary input yields an arbitrary
/// sum, clamped at zero.
pub fn evaluate(candidate: &str) -> u32 {
    let values: Vec<u32> = candidate.chars().map(value_of).collect();

    let mut total: i64 = 0;
    for (i, &value) in values.iter().enumerate() {
        let next = values.get(i + 1).copied().unwrap_or(0);
        if value < next {
            total -= i64::from(value);
        } else {
            total += i64::from(value);
        }
    }
    total.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_boundaries() {
        assert_eq!(to_roman(1).as_deref(), Some("I"));
        assert_eq!(to_roman(3999).as_deref(), Some("MMMCMXCIX"));
        assert_eq!(to_roman(0), None);
        assert_eq!(to_roman(4000), None);
    }

    #[test]
    fn converts_known_values() {
        let cases = [
            (3, "III"),
            (4, "IV"),
            (9, "IX"),
            (14, "XIV"),
            (40, "XL"),
            (90, "XC"),
            (400, "CD"),
            (900, "CM"),
            (1000, "M"),
            (1994, "MCMXCIV"),
            (2025, "MMXXV"),
            (3888, "MMMDCCCLXXXVIII"),
        ];
        for (n, expected) in cases {
            assert_eq!(to_roman(n).as_deref(), Some(expected), "wrong numeral for {n}");
        }
    }

    #[test]
    fn evaluates_known_numerals() {
        let cases = [("I", 1), ("III", 3), ("IV", 4), ("IX", 9), ("M", 1000), ("MCMXCIV", 1994), ("MMMCMXCIX", 3999)];
        for (s, expected) in cases {
            assert_eq!(evaluate(s), expected, "wrong value for '{s}'");
        }
    }

    #[test]
    fn longest_numeral_fits_fifteen_symbols() {
        // 3888 is the longest canonical numeral.
        assert_eq!(to_roman(3888).unwrap().len(), 15);
    }
}
