//! Type 5: Static and voyage related data.
//!
//! Field layout of the message, in bits:
//!
//! | Bits    | Field                 | Encoding                       |
//! |---------|-----------------------|--------------------------------|
//! | 0-5     | Message type          | 5                              |
//! | 6-7     | Repeat indicator      | unsigned                       |
//! | 8-37    | MMSI                  | unsigned                       |
//! | 38-39   | AIS version           | unsigned                       |
//! | 40-69   | IMO number            | unsigned                       |
//! | 70-111  | Call sign             | 7 six-bit characters           |
//! | 112-231 | Vessel name           | 20 six-bit characters          |
//! | 232-239 | Ship type             | see [`ship_type_description`]  |
//! | 240-269 | Dimensions            | bow, stern, port, starboard    |
//! | 270-273 | EPFD                  | see [`epfd_description`]       |
//! | 274-277 | ETA month             | 1-12, 0 = N/A                  |
//! | 278-282 | ETA day               | 1-31, 0 = N/A                  |
//! | 283-287 | ETA hour              | 0-23, 24 = N/A                 |
//! | 288-293 | ETA minute            | 0-59, 60 = N/A                 |
//! | 294-301 | Draught               | meters / 10                    |
//! | 302-421 | Destination           | 20 six-bit characters          |
//! | 422     | DTE                   | 0 = data terminal ready        |
//!
//! [`ship_type_description`]: crate::lookup::ship_type_description
//! [`epfd_description`]: crate::lookup::epfd_description

use crate::bitbuffer::BitBuffer;
use crate::error::RangeError;
use crate::lookup;
use crate::message::{impl_dimensions, Field, Header, Message, Value};
use crate::types::MessageType;
use alloc::string::String;

// End of the destination field. The DTE and spare bits are optional.
const MIN_BITS: usize = 422;
const DTE_BIT: usize = 422;

const FIELDS: &[Field] = &[
    Field::MessageType,
    Field::Channel,
    Field::RepeatIndicator,
    Field::Mmsi,
    Field::CallSign,
    Field::Name,
    Field::AisVersion,
    Field::Imo,
    Field::ShipType,
    Field::ShipTypeDescription,
    Field::DimToBow,
    Field::DimToStern,
    Field::DimToPort,
    Field::DimToStarboard,
    Field::Length,
    Field::Width,
    Field::Epfd,
    Field::EpfdDescription,
    Field::EtaMonth,
    Field::EtaDay,
    Field::EtaHour,
    Field::EtaMinute,
    Field::Draught,
    Field::Destination,
    Field::DataTerminalReady,
];

/// Static and voyage related data (message type 5).
///
/// Transmitted by class A vessels every 6 minutes. It carries the identity
/// and dimensions of the vessel and the details of its current voyage.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct StaticVoyageData<'a> {
    header: Header<'a>,
}

impl<'a> Message<'a> for StaticVoyageData<'a> {
    const MESSAGE_TYPE: MessageType = MessageType::StaticVoyageData;
    const MIN_BITS: usize = MIN_BITS;
    const FIELDS: &'static [Field] = FIELDS;

    fn new(buffer: BitBuffer<'a>, channel: &'a str) -> StaticVoyageData<'a> {
        StaticVoyageData {
            header: Header::new(buffer, channel, Self::MESSAGE_TYPE, Self::MIN_BITS),
        }
    }

    fn header(&self) -> &Header<'a> {
        &self.header
    }

    fn value(&self, field: Field) -> Result<Option<Value<'a>>, RangeError> {
        Ok(match field {
            Field::CallSign => Some(Value::Text(self.call_sign()?)),
            Field::Name => Some(Value::Text(self.name()?)),
            Field::AisVersion => Some(Value::Unsigned(self.ais_version()?.into())),
            Field::Imo => Some(Value::Unsigned(self.imo()?)),
            Field::ShipType => Some(Value::Unsigned(self.ship_type()?.into())),
            Field::ShipTypeDescription => Some(Value::Str(self.ship_type_description()?)),
            Field::EtaMonth => self.eta_month()?.map(|x| Value::Unsigned(x.into())),
            Field::EtaDay => self.eta_day()?.map(|x| Value::Unsigned(x.into())),
            Field::EtaHour => self.eta_hour()?.map(|x| Value::Unsigned(x.into())),
            Field::EtaMinute => self.eta_minute()?.map(|x| Value::Unsigned(x.into())),
            Field::Draught => Some(Value::Float(self.draught()?)),
            Field::Destination => Some(Value::Text(self.destination()?)),
            Field::DataTerminalReady => self.data_terminal_ready()?.map(Value::Bool),
            Field::DimToBow
            | Field::DimToStern
            | Field::DimToPort
            | Field::DimToStarboard
            | Field::Length
            | Field::Width
            | Field::Epfd
            | Field::EpfdDescription => self.dimensions_value(field)?,
            _ => self.header_value(field)?,
        })
    }
}

impl_dimensions!(StaticVoyageData, 240);

// Maps the "not available" values of a field to None.
fn available(raw: u32, not_available: &[u32]) -> Option<u8> {
    if not_available.contains(&raw) {
        None
    } else {
        Some(raw as u8)
    }
}

impl StaticVoyageData<'_> {
    /// AIS version indicator.
    ///
    /// 0 means ITU-R M.1371-1. Values 1 to 3 denote later editions.
    pub fn ais_version(&self) -> Result<u8, RangeError> {
        Ok(self.buffer().get_unsigned(38, 2)? as u8)
    }

    /// IMO ship identification number.
    pub fn imo(&self) -> Result<u32, RangeError> {
        self.buffer().get_unsigned(40, 30)
    }

    /// Radio call sign.
    pub fn call_sign(&self) -> Result<String, RangeError> {
        self.buffer().get_text(70, 42)
    }

    /// Vessel name.
    pub fn name(&self) -> Result<String, RangeError> {
        self.buffer().get_text(112, 120)
    }

    /// Ship and cargo type code.
    pub fn ship_type(&self) -> Result<u8, RangeError> {
        Ok(self.buffer().get_unsigned(232, 8)? as u8)
    }

    /// Description of the ship and cargo type.
    pub fn ship_type_description(&self) -> Result<&'static str, RangeError> {
        Ok(lookup::ship_type_description(self.ship_type()?))
    }

    /// ETA month (1-12), or `None` if not available.
    pub fn eta_month(&self) -> Result<Option<u8>, RangeError> {
        Ok(available(self.buffer().get_unsigned(274, 4)?, &[0]))
    }

    /// ETA day of month (1-31), or `None` if not available.
    pub fn eta_day(&self) -> Result<Option<u8>, RangeError> {
        Ok(available(self.buffer().get_unsigned(278, 5)?, &[0]))
    }

    /// ETA hour, or `None` if not available.
    ///
    /// The hour is transmitted as 0-23, with 24 meaning "not available". Both
    /// 0 and 24 are reported as `None`.
    pub fn eta_hour(&self) -> Result<Option<u8>, RangeError> {
        Ok(available(self.buffer().get_unsigned(283, 5)?, &[0, 24]))
    }

    /// ETA minute, or `None` if not available.
    ///
    /// The minute is transmitted as 0-59, with 60 meaning "not available".
    /// Both 0 and 60 are reported as `None`.
    pub fn eta_minute(&self) -> Result<Option<u8>, RangeError> {
        Ok(available(self.buffer().get_unsigned(288, 6)?, &[0, 60]))
    }

    /// Maximum present static draught in meters.
    pub fn draught(&self) -> Result<f64, RangeError> {
        Ok(f64::from(self.buffer().get_unsigned(294, 8)?) / 10.0)
    }

    /// Destination.
    pub fn destination(&self) -> Result<String, RangeError> {
        self.buffer().get_text(302, 120)
    }

    /// Data terminal equipment status.
    ///
    /// Returns `Some(true)` if the data terminal is ready, and `None` if the
    /// payload ends before the DTE bit.
    pub fn data_terminal_ready(&self) -> Result<Option<bool>, RangeError> {
        if self.buffer().len_bits() <= DTE_BIT {
            return Ok(None);
        }
        Ok(Some(!self.buffer().get_bool(DTE_BIT)?))
    }
}
