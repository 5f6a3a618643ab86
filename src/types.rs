//! Common types.
//!
//! This module contains the bit slice type used to address AIS payloads,
//! the discriminants of the supported message types, and the validity
//! state of a decoded message.

use core::fmt;

/// Bit slice with the MSB-first ordering used by AIS payloads.
pub type BitSlice = bitvec::slice::BitSlice<u8, bitvec::order::Msb0>;

/// Length in bits of the message type discriminant.
pub const MESSAGE_TYPE_BITS: usize = 6;

/// AIS message type.
///
/// Only the message types that this crate knows how to decode are listed.
/// The discriminant of each variant is the value of the 6-bit message type
/// field at the start of the payload.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MessageType {
    /// Type 5: Static and voyage related data.
    StaticVoyageData = 5,
    /// Type 21: Aid-to-navigation report.
    AidToNavigation = 21,
}

impl MessageType {
    /// Returns the raw 6-bit discriminant.
    pub fn discriminant(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MessageType {
    type Error = u8;
    fn try_from(value: u8) -> Result<MessageType, u8> {
        match value {
            5 => Ok(MessageType::StaticVoyageData),
            21 => Ok(MessageType::AidToNavigation),
            other => Err(other),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {}", self.discriminant())
    }
}

/// Validity of a decoded message.
///
/// The validity is decided once, when the decoder is constructed. An
/// [`Invalid`](Validity::Invalid) message still gives access to the bits that
/// are present, but the values carry no semantic guarantee.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Validity {
    /// The payload is structurally usable for its message type.
    Valid,
    /// The payload is too short or does not match its message type.
    Invalid,
}

impl Validity {
    /// Returns `true` if `self` is [`Validity::Valid`].
    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_type_from_discriminant() {
        assert_eq!(MessageType::try_from(5), Ok(MessageType::StaticVoyageData));
        assert_eq!(MessageType::try_from(21), Ok(MessageType::AidToNavigation));
        assert_eq!(MessageType::try_from(1), Err(1));
        assert_eq!(MessageType::try_from(63), Err(63));
        assert_eq!(MessageType::AidToNavigation.discriminant(), 21);
    }

    #[test]
    fn format() {
        assert_eq!(format!("{}", MessageType::StaticVoyageData), "type 5");
    }
}
