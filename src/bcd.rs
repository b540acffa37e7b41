//! Packed binary-coded-decimal helpers
//!
//! None of these validate their input: a byte with a nibble above 9, or a
//! decimal above 99, silently produces a wrong value. Range checks belong to
//! the caller.

/// How a time register should be handed back
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Full decimal value, e.g. 0x42 -> 42
    Decimal,
    /// Tens digit only
    Tens,
    /// Ones digit only
    Ones,
    /// The register byte untouched
    Bcd,
}

impl Format {
    pub fn apply(self, x: u8) -> u8 {
        match self {
            Format::Decimal => to_decimal(x),
            Format::Tens => tens_digit(x),
            Format::Ones => ones_digit(x),
            Format::Bcd => x,
        }
    }
}

pub fn to_decimal(x: u8) -> u8 {
    tens_digit(x).wrapping_mul(10).wrapping_add(ones_digit(x))
}

pub fn tens_digit(x: u8) -> u8 {
    x >> 4
}

pub fn ones_digit(x: u8) -> u8 {
    x % 16
}

pub fn to_bcd(x: u8) -> u8 {
    (x / 10).wrapping_mul(16).wrapping_add(x % 10)
}
