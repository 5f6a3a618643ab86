//! Packed 6-bit character set.
//!
//! AIS text fields are sequences of 6-bit groups. Values 0 to 31 map to
//! `@A-Z[\]^_` (ASCII 64 to 95) and values 32 to 63 map to ASCII 32 to 63
//! (space, punctuation and digits). The `@` character is used as padding.

/// Padding character of AIS text fields.
pub const PADDING: char = '@';

/// Number of bits per character.
pub const CHAR_BITS: usize = 6;

/// Converts a 6-bit value into its character.
///
/// Only the 6 least significant bits of `value` are used.
///
/// # Examples
///
/// ```
/// use ais_decode::sixbit;
///
/// assert_eq!(sixbit::to_char(0), '@');
/// assert_eq!(sixbit::to_char(1), 'A');
/// assert_eq!(sixbit::to_char(32), ' ');
/// assert_eq!(sixbit::to_char(48), '0');
/// ```
pub fn to_char(value: u8) -> char {
    let value = value & 0x3f;
    if value < 32 {
        char::from(value + 64)
    } else {
        char::from(value)
    }
}

/// Strips trailing padding and spaces from a decoded text field.
pub fn trim(text: &str) -> &str {
    text.trim_end_matches([PADDING, ' '])
}

// Inverse of to_char, used to assemble payloads in tests.
#[cfg(test)]
pub(crate) fn from_char(c: char) -> u8 {
    let c = u8::try_from(c).unwrap();
    assert!((32..96).contains(&c), "character not in the 6-bit set");
    if c >= 64 {
        c - 64
    } else {
        c
    }
}
