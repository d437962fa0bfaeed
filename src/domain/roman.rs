//! Roman numeral formatting for tier labels.

const NUMERALS: [(u32, &str); 13] = [
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

/// Converts `n` to its canonical Roman numeral by greedy subtraction.
///
/// Zero has no numeral and yields an empty string.
#[must_use]
pub fn to_roman(mut n: u32) -> String {
    let mut roman = String::new();
    for (value, symbol) in NUMERALS {
        while n >= value {
            roman.push_str(symbol);
            n -= value;
        }
    }
    roman
}
