//! Bit-level access to AIS payloads.
//!
//! This module contains [`BitBuffer`], an immutable view over a de-armored AIS
//! payload. All the fields of an AIS message are read through it.

use crate::error::{BitBufferError, RangeError};
use crate::sixbit;
use crate::types::BitSlice;
use alloc::string::String;
use bitvec::prelude::*;

/// Widest integer field that can be extracted.
pub const MAX_INTEGER_BITS: usize = 32;

/// Immutable bit buffer.
///
/// A `BitBuffer` borrows the bits of a decoded AIS payload and extracts
/// unsigned integers, two's-complement signed integers and 6-bit text at
/// arbitrary bit offsets. Fields are stored MSB first. Every extraction checks
/// that the requested bits lie inside the buffer and fails with a
/// [`RangeError`] otherwise.
///
/// # Examples
///
/// ```
/// use ais_decode::BitBuffer;
///
/// // 0b0001_0100 0b1100_0000
/// let bytes = [0x14, 0xc0];
/// let buffer = BitBuffer::new(&bytes, 12).unwrap();
/// assert_eq!(buffer.len_bits(), 12);
/// assert_eq!(buffer.get_unsigned(0, 6).unwrap(), 5);
/// assert_eq!(buffer.get_signed(6, 4).unwrap(), 3);
/// assert!(buffer.get_unsigned(8, 8).is_err());
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct BitBuffer<'a> {
    bits: &'a BitSlice,
}

impl<'a> BitBuffer<'a> {
    /// Constructs a buffer holding the first `len_bits` bits of `bytes`.
    ///
    /// AIS payloads are rarely a whole number of bytes, so the length in bits
    /// is given explicitly. Bits of `bytes` beyond `len_bits` are not
    /// addressable.
    pub fn new(bytes: &'a [u8], len_bits: usize) -> Result<BitBuffer<'a>, BitBufferError> {
        let bits = BitSlice::from_slice(bytes);
        if len_bits > bits.len() {
            return Err(BitBufferError::TooLong {
                len_bits,
                available: bits.len(),
            });
        }
        Ok(BitBuffer {
            bits: &bits[..len_bits],
        })
    }

    /// Constructs a buffer spanning all the bits of `bytes`.
    pub fn from_bytes(bytes: &'a [u8]) -> BitBuffer<'a> {
        BitBuffer {
            bits: BitSlice::from_slice(bytes),
        }
    }

    /// Constructs a buffer from a bit slice.
    pub fn from_bitslice(bits: &'a BitSlice) -> BitBuffer<'a> {
        BitBuffer { bits }
    }

    /// Returns the number of addressable bits.
    pub fn len_bits(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the buffer holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the underlying bits.
    pub fn bits(&self) -> &'a BitSlice {
        self.bits
    }

    fn range(&self, offset: usize, width: usize) -> Result<&'a BitSlice, RangeError> {
        if width == 0 {
            return Err(RangeError::ZeroWidth);
        }
        let len = self.bits.len();
        match offset.checked_add(width) {
            Some(end) if end <= len => Ok(&self.bits[offset..end]),
            _ => Err(RangeError::OutOfBounds { offset, width, len }),
        }
    }

    fn integer_range(&self, offset: usize, width: usize) -> Result<&'a BitSlice, RangeError> {
        if width > MAX_INTEGER_BITS {
            return Err(RangeError::TooWide {
                width,
                max: MAX_INTEGER_BITS,
            });
        }
        self.range(offset, width)
    }

    /// Reads `width` bits at `offset` as an unsigned integer.
    ///
    /// The bits are interpreted as big-endian unsigned binary. `width` must be
    /// between 1 and 32.
    pub fn get_unsigned(&self, offset: usize, width: usize) -> Result<u32, RangeError> {
        Ok(self.integer_range(offset, width)?.load_be::<u32>())
    }

    /// Reads `width` bits at `offset` as a two's-complement signed integer.
    ///
    /// The sign bit is the bit at `offset`. `width` must be between 1 and 32.
    pub fn get_signed(&self, offset: usize, width: usize) -> Result<i32, RangeError> {
        let raw = self.integer_range(offset, width)?.load_be::<u32>();
        // sign-extend by moving the sign bit to bit 31 and shifting back
        let shift = MAX_INTEGER_BITS - width;
        Ok(((raw << shift) as i32) >> shift)
    }

    /// Reads the single bit at `offset` as a flag.
    pub fn get_bool(&self, offset: usize) -> Result<bool, RangeError> {
        Ok(self.range(offset, 1)?[0])
    }

    /// Reads `width` bits at `offset` as 6-bit text.
    ///
    /// `width` must be a multiple of 6. Each 6-bit group is converted with
    /// [`sixbit::to_char`], and trailing `@` padding and spaces are removed,
    /// so a field made only of padding decodes as an empty string.
    pub fn get_text(&self, offset: usize, width: usize) -> Result<String, RangeError> {
        if width % sixbit::CHAR_BITS != 0 {
            return Err(RangeError::TextWidth { width });
        }
        let bits = self.range(offset, width)?;
        let mut text: String = bits
            .chunks_exact(sixbit::CHAR_BITS)
            .map(|c| sixbit::to_char(c.load_be::<u8>()))
            .collect();
        let trimmed = sixbit::trim(&text).len();
        text.truncate(trimmed);
        Ok(text)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_payload::PayloadWriter;
    use hex_literal::hex;

    #[test]
    fn length() {
        let bytes = hex!("ff ff ff");
        assert_eq!(BitBuffer::from_bytes(&bytes).len_bits(), 24);
        assert_eq!(BitBuffer::new(&bytes, 20).unwrap().len_bits(), 20);
        assert!(BitBuffer::new(&bytes, 0).unwrap().is_empty());
        assert_eq!(
            BitBuffer::new(&bytes, 25),
            Err(BitBufferError::TooLong {
                len_bits: 25,
                available: 24
            })
        );
    }

    #[test]
    fn unsigned_msb_first() {
        let bytes = hex!("12 34 56 78");
        let buffer = BitBuffer::from_bytes(&bytes);
        assert_eq!(buffer.get_unsigned(0, 8).unwrap(), 0x12);
        assert_eq!(buffer.get_unsigned(0, 16).unwrap(), 0x1234);
        assert_eq!(buffer.get_unsigned(4, 12).unwrap(), 0x234);
        assert_eq!(buffer.get_unsigned(0, 32).unwrap(), 0x1234_5678);
        assert_eq!(buffer.get_unsigned(3, 1).unwrap(), 1);
        assert_eq!(buffer.get_unsigned(2, 1).unwrap(), 0);
        // 0x12 0x34 = 0001 0010 0011 0100, bits 6..13 = 1000 1101
        assert_eq!(buffer.get_unsigned(6, 8).unwrap(), 0x8d);
    }

    #[test]
    fn unsigned_in_range() {
        let bytes = hex!("ff ff ff ff ff");
        let buffer = BitBuffer::from_bytes(&bytes);
        for width in 1..=32 {
            for offset in 0..=(40 - width) {
                let value = u64::from(buffer.get_unsigned(offset, width).unwrap());
                assert_eq!(value, (1u64 << width) - 1);
            }
        }

        let bytes = hex!("a5 3c 0f f0 96");
        let buffer = BitBuffer::from_bytes(&bytes);
        let word = u64::from_be_bytes([0, 0, 0, 0xa5, 0x3c, 0x0f, 0xf0, 0x96]);
        for width in 1..=32 {
            for offset in 0..=(40 - width) {
                let value = u64::from(buffer.get_unsigned(offset, width).unwrap());
                assert!(value < 1u64 << width);
                let expected = (word >> (40 - offset - width)) & ((1u64 << width) - 1);
                assert_eq!(value, expected);
            }
        }
    }

    #[test]
    fn signed_twos_complement() {
        let mut writer = PayloadWriter::new();
        writer.push_signed(28, -1_234_567);
        writer.push_signed(27, 54_000_000);
        writer.push_signed(1, -1);
        writer.push_signed(8, -128);
        writer.push_signed(8, 127);
        let buffer = writer.buffer();
        assert_eq!(buffer.get_signed(0, 28).unwrap(), -1_234_567);
        assert_eq!(buffer.get_signed(28, 27).unwrap(), 54_000_000);
        assert_eq!(buffer.get_signed(55, 1).unwrap(), -1);
        assert_eq!(buffer.get_signed(56, 8).unwrap(), -128);
        assert_eq!(buffer.get_signed(64, 8).unwrap(), 127);
    }

    #[test]
    fn signed_unsigned_consistency() {
        let bytes = hex!("a5 3c 0f f0 96 69 81 7e");
        let buffer = BitBuffer::from_bytes(&bytes);
        for width in 1..=32usize {
            for offset in 0..=(64 - width) {
                let signed = i64::from(buffer.get_signed(offset, width).unwrap());
                let unsigned = i64::from(buffer.get_unsigned(offset, width).unwrap());
                let modulus = 1i64 << width;
                assert!(signed >= -(modulus / 2) && signed < modulus / 2);
                assert_eq!(signed.rem_euclid(modulus), unsigned);
            }
        }
    }

    #[test]
    fn out_of_range() {
        let bytes = hex!("ff ff");
        let buffer = BitBuffer::new(&bytes, 12).unwrap();
        let error = RangeError::OutOfBounds {
            offset: 8,
            width: 5,
            len: 12,
        };
        assert_eq!(buffer.get_unsigned(8, 5), Err(error));
        assert_eq!(buffer.get_signed(8, 5), Err(error));
        assert!(matches!(
            buffer.get_text(6, 12),
            Err(RangeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            buffer.get_bool(12),
            Err(RangeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            buffer.get_unsigned(usize::MAX, 2),
            Err(RangeError::OutOfBounds { .. })
        ));
        // the last addressable bit is still readable
        assert!(buffer.get_bool(11).unwrap());
    }

    #[test]
    fn invalid_width() {
        let bytes = hex!("00 00 00 00 00 00");
        let buffer = BitBuffer::from_bytes(&bytes);
        assert_eq!(buffer.get_unsigned(0, 0), Err(RangeError::ZeroWidth));
        assert_eq!(buffer.get_signed(4, 0), Err(RangeError::ZeroWidth));
        assert_eq!(buffer.get_text(0, 0), Err(RangeError::ZeroWidth));
        assert_eq!(
            buffer.get_unsigned(0, 33),
            Err(RangeError::TooWide { width: 33, max: 32 })
        );
        assert_eq!(buffer.get_text(0, 7), Err(RangeError::TextWidth { width: 7 }));
    }

    #[test]
    fn text() {
        let mut writer = PayloadWriter::new();
        writer.push_unsigned(3, 0b101);
        writer.push_text(42, "3FOF8");
        writer.push_text(120, "EVER DIADEM");
        let buffer = writer.buffer();
        assert_eq!(buffer.get_text(3, 42).unwrap(), "3FOF8");
        assert_eq!(buffer.get_text(45, 120).unwrap(), "EVER DIADEM");
        // partial read of the first characters
        assert_eq!(buffer.get_text(3, 12).unwrap(), "3F");
    }

    #[test]
    fn text_trimming() {
        let mut writer = PayloadWriter::new();
        writer.push_text(60, "NEW YORK  ");
        writer.push_text(36, "");
        writer.push_text(30, "A@B");
        let buffer = writer.buffer();
        assert_eq!(buffer.get_text(0, 60).unwrap(), "NEW YORK");
        assert_eq!(buffer.get_text(60, 36).unwrap(), "");
        assert_eq!(buffer.get_text(96, 30).unwrap(), "A@B");
    }

    #[test]
    fn text_roundtrip() {
        for text in ["ABC 123", "   ", "Z9 Z9 Z9", "0123456789", "HELLO WORLD  "] {
            let width = text.len() * 6;
            let mut writer = PayloadWriter::new();
            writer.push_text(width, text);
            let buffer = writer.buffer();
            assert_eq!(buffer.get_text(0, width).unwrap(), text.trim_end());
        }
    }
}
