//! Errors.
//!
//! Bit extraction failures are reported as [`RangeError`] and propagated to
//! the caller of the accessor that triggered them. [`DecodeError`] is returned
//! by [`decode`](crate::decode) when no decoder can be built for a payload.

use thiserror::Error;

/// Errors raised by bit extraction on a [`BitBuffer`](crate::BitBuffer).
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum RangeError {
    /// The requested bits extend past the end of the buffer.
    #[error("{width} bits at offset {offset} out of range for buffer of {len} bits")]
    OutOfBounds {
        /// First bit requested.
        offset: usize,
        /// Number of bits requested.
        width: usize,
        /// Length of the buffer in bits.
        len: usize,
    },
    /// A field of zero bits was requested.
    #[error("zero-width field requested")]
    ZeroWidth,
    /// The field is wider than the integer type that holds it.
    #[error("cannot read more than {max} bits into an integer, requested {width}")]
    TooWide {
        /// Number of bits requested.
        width: usize,
        /// Maximum width supported.
        max: usize,
    },
    /// A text field width is not a multiple of 6 bits.
    #[error("text field width {width} is not a multiple of 6 bits")]
    TextWidth {
        /// Number of bits requested.
        width: usize,
    },
}

/// Errors raised while building a [`BitBuffer`](crate::BitBuffer).
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BitBufferError {
    /// The bit length does not fit in the backing storage.
    #[error("{len_bits} bits requested but only {available} bits of storage available")]
    TooLong {
        /// Bit length requested.
        len_bits: usize,
        /// Bits available in the storage.
        available: usize,
    },
}

/// Errors raised while dispatching a payload to its decoder.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DecodeError {
    /// The message type discriminant could not be read.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// No decoder is available for the message type.
    #[error("unsupported AIS message type {0}")]
    UnsupportedType(u8),
}
