//! Message decoders.
//!
//! Every supported AIS message type has a decoder struct that implements the
//! [`Message`] trait. Decoders borrow a [`BitBuffer`] and read each field on
//! demand from its bit range. The [`AisMessage`] enum groups all the decoders,
//! and [`decode`] selects the decoder that corresponds to the message type
//! discriminant found at the start of a payload.
//!
//! # Examples
//!
//! ```
//! use ais_decode::{decode, AisMessage, BitBuffer, Field, Value};
//!
//! // Type 21 header: message type 21, repeat 0, MMSI 992_350_000,
//! // followed by an all-zero body of 272 bits in total.
//! let mut bytes = [0u8; 34];
//! bytes[..5].copy_from_slice(&[0x54, 0xec, 0x98, 0x3c, 0xc0]);
//! let buffer = BitBuffer::from_bytes(&bytes);
//! let message = decode(buffer, "A").unwrap();
//! assert!(matches!(message, AisMessage::AidToNavigation(_)));
//! assert!(message.is_valid());
//! assert_eq!(message.mmsi().unwrap(), 992_350_000);
//! assert_eq!(
//!     message.value(Field::Channel).unwrap(),
//!     Some(Value::Str("A"))
//! );
//! ```

use crate::aton::{AidToNavigationReport, OffPositionIndicator, UtcStatus};
use crate::bitbuffer::BitBuffer;
use crate::error::{DecodeError, RangeError};
use crate::static_voyage::StaticVoyageData;
use crate::types::{MessageType, Validity, MESSAGE_TYPE_BITS};
use alloc::string::String;
use core::fmt;

/// Field of an AIS message.
///
/// Each decoder declares the fields it supports through
/// [`Message::FIELDS`]. The field names returned by [`Field::name`] are
/// suitable as keys of a generic record.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[allow(missing_docs)]
pub enum Field {
    MessageType,
    Channel,
    RepeatIndicator,
    Mmsi,
    AisVersion,
    Imo,
    CallSign,
    Name,
    ShipType,
    ShipTypeDescription,
    AidType,
    AidTypeDescription,
    DimToBow,
    DimToStern,
    DimToPort,
    DimToStarboard,
    Length,
    Width,
    Epfd,
    EpfdDescription,
    EtaMonth,
    EtaDay,
    EtaHour,
    EtaMinute,
    Draught,
    Destination,
    DataTerminalReady,
    PositionAccuracy,
    Longitude,
    Latitude,
    UtcSecond,
    UtcStatus,
    OffPosition,
    Regional,
    Raim,
    VirtualAid,
    AssignedMode,
    NameExtension,
}

impl Field {
    /// Returns the name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::MessageType => "message_type",
            Field::Channel => "channel",
            Field::RepeatIndicator => "repeat_indicator",
            Field::Mmsi => "mmsi",
            Field::AisVersion => "ais_version",
            Field::Imo => "imo",
            Field::CallSign => "call_sign",
            Field::Name => "name",
            Field::ShipType => "ship_type",
            Field::ShipTypeDescription => "ship_type_description",
            Field::AidType => "aid_type",
            Field::AidTypeDescription => "aid_type_description",
            Field::DimToBow => "dim_to_bow",
            Field::DimToStern => "dim_to_stern",
            Field::DimToPort => "dim_to_port",
            Field::DimToStarboard => "dim_to_starboard",
            Field::Length => "length",
            Field::Width => "width",
            Field::Epfd => "epfd",
            Field::EpfdDescription => "epfd_description",
            Field::EtaMonth => "eta_month",
            Field::EtaDay => "eta_day",
            Field::EtaHour => "eta_hour",
            Field::EtaMinute => "eta_minute",
            Field::Draught => "draught",
            Field::Destination => "destination",
            Field::DataTerminalReady => "data_terminal_ready",
            Field::PositionAccuracy => "position_accuracy",
            Field::Longitude => "longitude",
            Field::Latitude => "latitude",
            Field::UtcSecond => "utc_second",
            Field::UtcStatus => "utc_status",
            Field::OffPosition => "off_position",
            Field::Regional => "regional",
            Field::Raim => "raim",
            Field::VirtualAid => "virtual_aid",
            Field::AssignedMode => "assigned_mode",
            Field::NameExtension => "name_extension",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of a decoded field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value<'a> {
    /// Unsigned integer.
    Unsigned(u32),
    /// Signed integer.
    Signed(i32),
    /// Scaled or converted quantity.
    Float(f64),
    /// Flag.
    Bool(bool),
    /// Decoded 6-bit text.
    Text(String),
    /// Borrowed text, such as the channel tag or a code description.
    Str(&'a str),
    /// Off-position indicator of an aid to navigation.
    OffPosition(OffPositionIndicator),
    /// Status of the UTC timestamp of a report.
    UtcStatus(UtcStatus),
}

/// State shared by all the message decoders.
///
/// The header holds the payload, the transport channel tag and the validity
/// decided at construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Header<'a> {
    buffer: BitBuffer<'a>,
    channel: &'a str,
    validity: Validity,
}

impl<'a> Header<'a> {
    /// Constructs the header of a message of type `message_type`.
    ///
    /// The header is [`Validity::Invalid`] if the buffer is shorter than
    /// `min_bits` or if its discriminant is not that of `message_type`.
    pub fn new(
        buffer: BitBuffer<'a>,
        channel: &'a str,
        message_type: MessageType,
        min_bits: usize,
    ) -> Header<'a> {
        log::trace!(
            "decoding {} on channel {:?} ({} bits)",
            message_type,
            channel,
            buffer.len_bits()
        );
        let validity = match buffer.get_unsigned(0, MESSAGE_TYPE_BITS) {
            _ if buffer.len_bits() < min_bits => {
                log::warn!(
                    "{} payload too short: {} bits, at least {} required",
                    message_type,
                    buffer.len_bits(),
                    min_bits
                );
                Validity::Invalid
            }
            Ok(d) if d == u32::from(message_type.discriminant()) => Validity::Valid,
            Ok(d) => {
                log::warn!("discriminant {} does not match {}", d, message_type);
                Validity::Invalid
            }
            Err(e) => {
                log::warn!("could not read discriminant: {}", e);
                Validity::Invalid
            }
        };
        Header {
            buffer,
            channel,
            validity,
        }
    }

    /// Returns the payload.
    pub fn buffer(&self) -> BitBuffer<'a> {
        self.buffer
    }

    /// Returns the transport channel tag.
    pub fn channel(&self) -> &'a str {
        self.channel
    }

    /// Returns the validity of the message.
    pub fn validity(&self) -> Validity {
        self.validity
    }
}

/// AIS message decoder.
///
/// This trait is implemented by the decoder of each message type. The fields
/// common to all message types (discriminant, repeat indicator and MMSI) are
/// provided methods that read the same bit ranges for every type.
pub trait Message<'a>: Sized {
    /// Message type decoded by this decoder.
    const MESSAGE_TYPE: MessageType;
    /// Minimum payload length in bits for the message to be valid.
    const MIN_BITS: usize;
    /// Fields supported by this decoder, in order.
    const FIELDS: &'static [Field];

    /// Constructs a decoder for `buffer`.
    ///
    /// The validity of the message is decided here and never changes
    /// afterwards.
    fn new(buffer: BitBuffer<'a>, channel: &'a str) -> Self;

    /// Returns the shared header of the message.
    fn header(&self) -> &Header<'a>;

    /// Returns the value of a field in a generic form.
    ///
    /// Returns `Ok(None)` if the field is not available in this message,
    /// either because it is not supported by the decoder or because it holds
    /// its "not available" value.
    fn value(&self, field: Field) -> Result<Option<Value<'a>>, RangeError>;

    /// Returns the payload.
    fn buffer(&self) -> BitBuffer<'a> {
        self.header().buffer()
    }

    /// Returns the transport channel tag.
    fn channel(&self) -> &'a str {
        self.header().channel()
    }

    /// Returns the validity of the message.
    fn validity(&self) -> Validity {
        self.header().validity()
    }

    /// Returns `true` if the message is valid.
    fn is_valid(&self) -> bool {
        self.validity().is_valid()
    }

    /// Returns the fields supported by this decoder.
    fn supported_fields(&self) -> &'static [Field] {
        Self::FIELDS
    }

    /// Returns the message type of the decoder.
    fn message_type(&self) -> MessageType {
        Self::MESSAGE_TYPE
    }

    /// Reads the message type discriminant from bits 0-5.
    fn raw_message_type(&self) -> Result<u8, RangeError> {
        Ok(self.buffer().get_unsigned(0, MESSAGE_TYPE_BITS)? as u8)
    }

    /// Reads the repeat indicator from bits 6-7.
    fn repeat_indicator(&self) -> Result<u8, RangeError> {
        Ok(self.buffer().get_unsigned(6, 2)? as u8)
    }

    /// Reads the MMSI from bits 8-37.
    ///
    /// The MMSI is expected to have 9 digits, but this is not checked.
    fn mmsi(&self) -> Result<u32, RangeError> {
        self.buffer().get_unsigned(8, 30)
    }

    /// Returns the value of one of the fields common to all message types.
    ///
    /// Returns `Ok(None)` for any other field.
    fn header_value(&self, field: Field) -> Result<Option<Value<'a>>, RangeError> {
        Ok(match field {
            Field::MessageType => Some(Value::Unsigned(self.raw_message_type()?.into())),
            Field::Channel => Some(Value::Str(self.channel())),
            Field::RepeatIndicator => Some(Value::Unsigned(self.repeat_indicator()?.into())),
            Field::Mmsi => Some(Value::Unsigned(self.mmsi()?)),
            _ => None,
        })
    }
}

// Hull dimensions and EPFD share the same layout in every message type that
// carries them: 9, 9, 6 and 6 bits of dimensions followed by 4 bits of EPFD.
macro_rules! impl_dimensions {
    ($s:ident, $offset:expr) => {
        impl $s<'_> {
            /// Dimension to bow in meters.
            pub fn to_bow(&self) -> Result<u16, $crate::error::RangeError> {
                Ok($crate::message::Message::buffer(self).get_unsigned($offset, 9)? as u16)
            }

            /// Dimension to stern in meters.
            pub fn to_stern(&self) -> Result<u16, $crate::error::RangeError> {
                Ok($crate::message::Message::buffer(self).get_unsigned($offset + 9, 9)? as u16)
            }

            /// Dimension to port in meters.
            pub fn to_port(&self) -> Result<u8, $crate::error::RangeError> {
                Ok($crate::message::Message::buffer(self).get_unsigned($offset + 18, 6)? as u8)
            }

            /// Dimension to starboard in meters.
            pub fn to_starboard(&self) -> Result<u8, $crate::error::RangeError> {
                Ok($crate::message::Message::buffer(self).get_unsigned($offset + 24, 6)? as u8)
            }

            /// Overall length in meters (bow plus stern).
            pub fn length(&self) -> Result<u16, $crate::error::RangeError> {
                Ok(self.to_bow()? + self.to_stern()?)
            }

            /// Overall width in meters (port plus starboard).
            pub fn width(&self) -> Result<u8, $crate::error::RangeError> {
                Ok(self.to_port()? + self.to_starboard()?)
            }

            /// Type of electronic position fixing device.
            pub fn epfd(&self) -> Result<u8, $crate::error::RangeError> {
                Ok($crate::message::Message::buffer(self).get_unsigned($offset + 30, 4)? as u8)
            }

            /// Description of the EPFD type.
            pub fn epfd_description(&self) -> Result<&'static str, $crate::error::RangeError> {
                Ok($crate::lookup::epfd_description(self.epfd()?))
            }

            fn dimensions_value(
                &self,
                field: $crate::message::Field,
            ) -> Result<Option<$crate::message::Value<'static>>, $crate::error::RangeError> {
                use $crate::message::{Field, Value};
                Ok(match field {
                    Field::DimToBow => Some(Value::Unsigned(self.to_bow()?.into())),
                    Field::DimToStern => Some(Value::Unsigned(self.to_stern()?.into())),
                    Field::DimToPort => Some(Value::Unsigned(self.to_port()?.into())),
                    Field::DimToStarboard => Some(Value::Unsigned(self.to_starboard()?.into())),
                    Field::Length => Some(Value::Unsigned(self.length()?.into())),
                    Field::Width => Some(Value::Unsigned(self.width()?.into())),
                    Field::Epfd => Some(Value::Unsigned(self.epfd()?.into())),
                    Field::EpfdDescription => Some(Value::Str(self.epfd_description()?)),
                    _ => None,
                })
            }
        }
    };
}
pub(crate) use impl_dimensions;

/// Decoded AIS message.
///
/// This enum holds the decoder of any of the supported message types. It is
/// usually obtained with [`decode`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AisMessage<'a> {
    /// Type 5: Static and voyage related data.
    StaticVoyageData(StaticVoyageData<'a>),
    /// Type 21: Aid-to-navigation report.
    AidToNavigation(AidToNavigationReport<'a>),
}

macro_rules! dispatch {
    ($self:ident, $m:ident => $e:expr) => {
        match $self {
            AisMessage::StaticVoyageData($m) => $e,
            AisMessage::AidToNavigation($m) => $e,
        }
    };
}

impl<'a> AisMessage<'a> {
    /// Returns the message type.
    pub fn message_type(&self) -> MessageType {
        dispatch!(self, m => m.message_type())
    }

    /// Returns the shared header of the message.
    pub fn header(&self) -> &Header<'a> {
        dispatch!(self, m => m.header())
    }

    /// Returns the transport channel tag.
    pub fn channel(&self) -> &'a str {
        self.header().channel()
    }

    /// Returns the validity of the message.
    pub fn validity(&self) -> Validity {
        self.header().validity()
    }

    /// Returns `true` if the message is valid.
    pub fn is_valid(&self) -> bool {
        self.validity().is_valid()
    }

    /// Reads the repeat indicator.
    pub fn repeat_indicator(&self) -> Result<u8, RangeError> {
        dispatch!(self, m => m.repeat_indicator())
    }

    /// Reads the MMSI.
    pub fn mmsi(&self) -> Result<u32, RangeError> {
        dispatch!(self, m => m.mmsi())
    }

    /// Returns the fields supported by the message.
    pub fn supported_fields(&self) -> &'static [Field] {
        dispatch!(self, m => m.supported_fields())
    }

    /// Returns the value of a field in a generic form.
    pub fn value(&self, field: Field) -> Result<Option<Value<'a>>, RangeError> {
        dispatch!(self, m => m.value(field))
    }

    /// Iterates over the available values of the supported fields.
    ///
    /// Fields that hold their "not available" value are skipped, so the
    /// iterator yields the entries of a generic record for the message.
    /// Extraction errors are yielded rather than skipped.
    pub fn values(&self) -> impl Iterator<Item = Result<(Field, Value<'a>), RangeError>> + '_ {
        self.supported_fields()
            .iter()
            .filter_map(move |&field| match self.value(field) {
                Ok(Some(value)) => Some(Ok((field, value))),
                Ok(None) => None,
                Err(e) => Some(Err(e)),
            })
    }
}

/// Decodes a payload.
///
/// The message type discriminant is read from the first 6 bits of `buffer`
/// and the matching decoder is constructed. The `channel` tag is passed
/// through unchanged.
///
/// # Errors
///
/// Fails with [`DecodeError::Range`] if the buffer is shorter than 6 bits and
/// with [`DecodeError::UnsupportedType`] if there is no decoder for the
/// message type.
pub fn decode<'a>(buffer: BitBuffer<'a>, channel: &'a str) -> Result<AisMessage<'a>, DecodeError> {
    let discriminant = buffer.get_unsigned(0, MESSAGE_TYPE_BITS)? as u8;
    let message_type = MessageType::try_from(discriminant).map_err(|d| {
        log::debug!("no decoder for AIS message type {}", d);
        DecodeError::UnsupportedType(d)
    })?;
    Ok(match message_type {
        MessageType::StaticVoyageData => {
            AisMessage::StaticVoyageData(StaticVoyageData::new(buffer, channel))
        }
        MessageType::AidToNavigation => {
            AisMessage::AidToNavigation(AidToNavigationReport::new(buffer, channel))
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_payload::PayloadWriter;
    use hex_literal::hex;

    fn header(message_type: u32, mmsi: u32) -> PayloadWriter {
        let mut writer = PayloadWriter::new();
        writer.push_unsigned(6, message_type);
        writer.push_unsigned(2, 3);
        writer.push_unsigned(30, mmsi);
        writer
    }

    #[test]
    fn dispatch_static_voyage() {
        let mut writer = header(5, 351_759_000);
        writer.pad_to(424);
        let message = decode(writer.buffer(), "B").unwrap();
        assert!(matches!(message, AisMessage::StaticVoyageData(_)));
        assert_eq!(message.message_type(), MessageType::StaticVoyageData);
        assert_eq!(message.channel(), "B");
        assert_eq!(message.repeat_indicator().unwrap(), 3);
        assert_eq!(message.mmsi().unwrap(), 351_759_000);
        assert!(message.is_valid());
        assert_eq!(message.supported_fields(), StaticVoyageData::FIELDS);
    }

    #[test]
    fn dispatch_aid_to_navigation() {
        let mut writer = header(21, 993_672_085);
        writer.pad_to(272);
        let message = decode(writer.buffer(), "A").unwrap();
        assert!(matches!(message, AisMessage::AidToNavigation(_)));
        assert_eq!(message.mmsi().unwrap(), 993_672_085);
        assert_eq!(message.supported_fields(), AidToNavigationReport::FIELDS);
    }

    #[test]
    fn unsupported_type() {
        for message_type in [0, 1, 4, 6, 20, 22, 27, 63] {
            let mut writer = header(message_type, 1);
            writer.pad_to(424);
            assert_eq!(
                decode(writer.buffer(), "A"),
                Err(DecodeError::UnsupportedType(message_type as u8))
            );
        }
    }

    #[test]
    fn too_short_for_discriminant() {
        let bytes = hex!("14");
        let buffer = BitBuffer::new(&bytes, 5).unwrap();
        assert!(matches!(
            decode(buffer, "A"),
            Err(DecodeError::Range(RangeError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn short_payload_is_invalid() {
        // only the first fragment of a two-sentence type 5 message
        let mut writer = header(5, 211_000_000);
        writer.pad_to(348);
        let message = decode(writer.buffer(), "A").unwrap();
        assert_eq!(message.validity(), Validity::Invalid);
        // fields that are present can still be read
        assert_eq!(message.mmsi().unwrap(), 211_000_000);
        assert!(message.value(Field::Destination).is_err());
    }

    #[test]
    fn mismatched_discriminant_is_invalid() {
        let mut writer = header(21, 1);
        writer.pad_to(424);
        let message = StaticVoyageData::new(writer.buffer(), "A");
        assert_eq!(message.validity(), Validity::Invalid);
        assert_eq!(message.raw_message_type().unwrap(), 21);
        assert_eq!(message.message_type(), MessageType::StaticVoyageData);
    }

    #[test]
    fn header_values() {
        let mut writer = header(21, 992_350_000);
        writer.pad_to(272);
        let message = decode(writer.buffer(), "B").unwrap();
        assert_eq!(
            message.value(Field::MessageType).unwrap(),
            Some(Value::Unsigned(21))
        );
        assert_eq!(message.value(Field::Channel).unwrap(), Some(Value::Str("B")));
        assert_eq!(
            message.value(Field::RepeatIndicator).unwrap(),
            Some(Value::Unsigned(3))
        );
        assert_eq!(
            message.value(Field::Mmsi).unwrap(),
            Some(Value::Unsigned(992_350_000))
        );
        // not part of type 21
        assert_eq!(message.value(Field::Draught).unwrap(), None);
    }

    #[test]
    fn record_omits_absent_fields() {
        let mut writer = header(5, 244_670_000);
        writer.pad_to(424);
        let message = decode(writer.buffer(), "A").unwrap();
        let fields: Vec<Field> = message.values().map(|v| v.unwrap().0).collect();
        // ETA fields are all zero, so they are absent from the record
        assert!(!fields.contains(&Field::EtaMonth));
        assert!(!fields.contains(&Field::EtaMinute));
        assert!(fields.contains(&Field::Mmsi));
        assert!(fields.contains(&Field::Draught));
        assert_eq!(fields[0], Field::MessageType);
    }

    #[test]
    fn field_names_are_unique() {
        for fields in [StaticVoyageData::FIELDS, AidToNavigationReport::FIELDS] {
            for (j, a) in fields.iter().enumerate() {
                for b in &fields[j + 1..] {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
        assert_eq!(format!("{}", Field::EtaHour), "eta_hour");
    }

    #[test]
    fn send_and_sync() {
        fn check<T: Send + Sync>() {}
        check::<BitBuffer<'static>>();
        check::<AisMessage<'static>>();
    }
}
