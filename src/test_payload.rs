// Payload assembly for unit tests.

use crate::bitbuffer::BitBuffer;
use crate::sixbit;
use crate::types::BitSlice;
use bitvec::prelude::*;

const MAX_PAYLOAD_BYTES: usize = 128;

/// Writes fields one after another into a zeroed payload.
pub(crate) struct PayloadWriter {
    data: [u8; MAX_PAYLOAD_BYTES],
    len: usize,
}

impl PayloadWriter {
    pub(crate) fn new() -> PayloadWriter {
        PayloadWriter {
            data: [0; MAX_PAYLOAD_BYTES],
            len: 0,
        }
    }

    fn field(&mut self, width: usize) -> &mut BitSlice {
        let start = self.len;
        self.len += width;
        &mut BitSlice::from_slice_mut(&mut self.data)[start..start + width]
    }

    pub(crate) fn push_unsigned(&mut self, width: usize, value: u32) {
        assert!(width == 32 || value < (1 << width), "value does not fit");
        self.field(width).store_be(value);
    }

    pub(crate) fn push_signed(&mut self, width: usize, value: i32) {
        self.field(width).store_be(value as u32);
    }

    pub(crate) fn push_bool(&mut self, value: bool) {
        self.field(1).set(0, value);
    }

    /// Pushes `text` padded with `@` up to `width` bits.
    pub(crate) fn push_text(&mut self, width: usize, text: &str) {
        assert_eq!(width % sixbit::CHAR_BITS, 0);
        let chars = width / sixbit::CHAR_BITS;
        assert!(text.len() <= chars, "text does not fit");
        let padding = core::iter::repeat(sixbit::PADDING).take(chars - text.len());
        for c in text.chars().chain(padding) {
            self.field(sixbit::CHAR_BITS).store_be(sixbit::from_char(c));
        }
    }

    /// Pushes zero bits until the payload is `len` bits long.
    pub(crate) fn pad_to(&mut self, len: usize) {
        assert!(len >= self.len);
        self.len = len;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn buffer(&self) -> BitBuffer<'_> {
        BitBuffer::new(&self.data, self.len).unwrap()
    }
}
