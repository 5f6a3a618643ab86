//! Type 21: Aid-to-navigation report.
//!
//! Field layout of the message, in bits:
//!
//! | Bits    | Field                  | Encoding                          |
//! |---------|------------------------|-----------------------------------|
//! | 0-5     | Message type           | 21                                |
//! | 6-7     | Repeat indicator       | unsigned                          |
//! | 8-37    | MMSI                   | unsigned                          |
//! | 38-42   | Aid type               | see [`aid_type_description`]      |
//! | 43-162  | Name                   | 20 six-bit characters             |
//! | 163     | Position accuracy      | flag                              |
//! | 164-191 | Longitude              | signed, 1/10000 minutes           |
//! | 192-218 | Latitude               | signed, 1/10000 minutes           |
//! | 219-248 | Dimensions             | bow, stern, port, starboard       |
//! | 249-252 | EPFD                   | see [`epfd_description`]          |
//! | 253-258 | UTC second             | see [`UtcStatus`]                 |
//! | 259     | Off-position indicator | see [`OffPositionIndicator`]      |
//! | 260-267 | Regional reserved      | uninterpreted                     |
//! | 268     | RAIM flag              | flag                              |
//! | 269     | Virtual aid flag       | flag                              |
//! | 270     | Assigned mode flag     | flag                              |
//! | 271     | Spare                  |                                   |
//! | 272-    | Name extension         | up to 14 six-bit characters       |
//!
//! [`aid_type_description`]: crate::lookup::aid_type_description
//! [`epfd_description`]: crate::lookup::epfd_description

use crate::bitbuffer::BitBuffer;
use crate::error::RangeError;
use crate::lookup;
use crate::message::{impl_dimensions, Field, Header, Message, Value};
use crate::sixbit;
use crate::types::MessageType;
use alloc::string::String;

// End of the fixed part of the message. The name extension follows.
const NAME_EXTENSION_OFFSET: usize = 272;
const ACCURACY_BIT: usize = 163;

// Positions are in 1/10000 minutes.
const POSITION_SCALE: f64 = 600_000.0;
const LONGITUDE_NOT_AVAILABLE: i32 = 181 * 600_000;
const LATITUDE_NOT_AVAILABLE: i32 = 91 * 600_000;

const FIELDS: &[Field] = &[
    Field::MessageType,
    Field::Channel,
    Field::RepeatIndicator,
    Field::Mmsi,
    Field::Name,
    Field::Latitude,
    Field::Longitude,
    Field::PositionAccuracy,
    Field::DimToBow,
    Field::DimToStern,
    Field::DimToPort,
    Field::DimToStarboard,
    Field::Length,
    Field::Width,
    Field::Epfd,
    Field::EpfdDescription,
    Field::UtcSecond,
    Field::UtcStatus,
    Field::OffPosition,
    Field::AidType,
    Field::AidTypeDescription,
    Field::Regional,
    Field::Raim,
    Field::VirtualAid,
    Field::AssignedMode,
    Field::NameExtension,
];

/// Off-position indicator of an aid to navigation.
///
/// The indicator is only meaningful when the UTC second of the report is
/// valid (below 60). In that case its value is read from bit 163 of the
/// payload.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OffPositionIndicator {
    /// The aid is on its assigned position.
    InPosition,
    /// The aid is off its assigned position.
    OffPosition,
    /// The UTC second is not available, so the indicator does not apply.
    NotApplicable,
}

/// Status of the UTC timestamp of a report.
///
/// The 6-bit UTC second field carries either the second of the timestamp or,
/// for values 60 and above, the reason why no timestamp is given.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UtcStatus {
    /// The timestamp is valid. Holds the second (0-59).
    Valid(u8),
    /// No timestamp is available (60).
    NotAvailable,
    /// The positioning system is in manual input mode (61).
    Manual,
    /// The positioning system is in estimated (dead reckoning) mode (62).
    Estimated,
    /// The positioning system is inoperative (63).
    Inoperative,
}

impl From<u8> for UtcStatus {
    /// Interprets a raw UTC second. Only the 6 low bits are meaningful.
    fn from(second: u8) -> UtcStatus {
        match second & 0x3f {
            s @ 0..=59 => UtcStatus::Valid(s),
            60 => UtcStatus::NotAvailable,
            61 => UtcStatus::Manual,
            62 => UtcStatus::Estimated,
            _ => UtcStatus::Inoperative,
        }
    }
}

impl UtcStatus {
    /// Returns `true` if the timestamp holds a valid second.
    pub fn is_valid(self) -> bool {
        matches!(self, UtcStatus::Valid(_))
    }
}

/// Aid-to-navigation report (message type 21).
///
/// Transmitted by aids to navigation (buoys, lights, beacons, and virtual
/// aids). The message is 272 bits long, optionally followed by a name
/// extension of up to 88 bits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct AidToNavigationReport<'a> {
    header: Header<'a>,
}

impl<'a> Message<'a> for AidToNavigationReport<'a> {
    const MESSAGE_TYPE: MessageType = MessageType::AidToNavigation;
    const MIN_BITS: usize = NAME_EXTENSION_OFFSET;
    const FIELDS: &'static [Field] = FIELDS;

    fn new(buffer: BitBuffer<'a>, channel: &'a str) -> AidToNavigationReport<'a> {
        AidToNavigationReport {
            header: Header::new(buffer, channel, Self::MESSAGE_TYPE, Self::MIN_BITS),
        }
    }

    fn header(&self) -> &Header<'a> {
        &self.header
    }

    fn value(&self, field: Field) -> Result<Option<Value<'a>>, RangeError> {
        Ok(match field {
            Field::Name => Some(Value::Text(self.name()?)),
            Field::Latitude => self.latitude()?.map(Value::Float),
            Field::Longitude => self.longitude()?.map(Value::Float),
            Field::PositionAccuracy => Some(Value::Bool(self.position_accuracy()?)),
            Field::UtcSecond => Some(Value::Unsigned(self.utc_second()?.into())),
            Field::UtcStatus => Some(Value::UtcStatus(self.utc_status()?)),
            Field::OffPosition => Some(Value::OffPosition(self.off_position()?)),
            Field::AidType => Some(Value::Unsigned(self.aid_type()?.into())),
            Field::AidTypeDescription => Some(Value::Str(self.aid_type_description()?)),
            Field::Regional => Some(Value::Unsigned(self.regional()?.into())),
            Field::Raim => Some(Value::Bool(self.raim()?)),
            Field::VirtualAid => Some(Value::Bool(self.virtual_aid()?)),
            Field::AssignedMode => Some(Value::Bool(self.assigned_mode()?)),
            Field::NameExtension => {
                let ext = self.name_extension()?;
                if ext.is_empty() {
                    None
                } else {
                    Some(Value::Text(ext))
                }
            }
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

impl_dimensions!(AidToNavigationReport, 219);

impl AidToNavigationReport<'_> {
    /// Type of aid to navigation.
    pub fn aid_type(&self) -> Result<u8, RangeError> {
        Ok(self.buffer().get_unsigned(38, 5)? as u8)
    }

    /// Description of the type of aid to navigation.
    pub fn aid_type_description(&self) -> Result<&'static str, RangeError> {
        Ok(lookup::aid_type_description(self.aid_type()?))
    }

    /// Name of the aid to navigation.
    ///
    /// Names longer than 20 characters continue in the
    /// [name extension](AidToNavigationReport::name_extension).
    pub fn name(&self) -> Result<String, RangeError> {
        self.buffer().get_text(43, 120)
    }

    /// Position accuracy flag.
    ///
    /// `true` means high accuracy (better than 10 m).
    pub fn position_accuracy(&self) -> Result<bool, RangeError> {
        Ok(self.buffer().get_unsigned(ACCURACY_BIT, 1)? == 1)
    }

    /// Raw longitude in 1/10000 minutes.
    pub fn raw_longitude(&self) -> Result<i32, RangeError> {
        self.buffer().get_signed(164, 28)
    }

    /// Raw latitude in 1/10000 minutes.
    pub fn raw_latitude(&self) -> Result<i32, RangeError> {
        self.buffer().get_signed(192, 27)
    }

    /// Longitude in degrees, or `None` if not available.
    ///
    /// East is positive. The raw value 181 degrees means "not available".
    pub fn longitude(&self) -> Result<Option<f64>, RangeError> {
        let raw = self.raw_longitude()?;
        Ok((raw != LONGITUDE_NOT_AVAILABLE).then(|| f64::from(raw) / POSITION_SCALE))
    }

    /// Latitude in degrees, or `None` if not available.
    ///
    /// North is positive. The raw value 91 degrees means "not available".
    pub fn latitude(&self) -> Result<Option<f64>, RangeError> {
        let raw = self.raw_latitude()?;
        Ok((raw != LATITUDE_NOT_AVAILABLE).then(|| f64::from(raw) / POSITION_SCALE))
    }

    /// Second of the UTC timestamp of the report.
    ///
    /// Values 60 and above mean that the timestamp is not available or that
    /// the positioning system is not working.
    pub fn utc_second(&self) -> Result<u8, RangeError> {
        Ok(self.buffer().get_unsigned(253, 6)? as u8)
    }

    /// Status of the UTC timestamp, derived from the UTC second.
    pub fn utc_status(&self) -> Result<UtcStatus, RangeError> {
        Ok(UtcStatus::from(self.utc_second()?))
    }

    /// Off-position indicator.
    ///
    /// If the UTC second is below 60, the indicator is read from the bit at
    /// 163, which is shared with the position accuracy flag. Otherwise it is
    /// [`OffPositionIndicator::NotApplicable`].
    pub fn off_position(&self) -> Result<OffPositionIndicator, RangeError> {
        if !self.utc_status()?.is_valid() {
            return Ok(OffPositionIndicator::NotApplicable);
        }
        Ok(match self.buffer().get_unsigned(ACCURACY_BIT, 1)? {
            0 => OffPositionIndicator::InPosition,
            _ => OffPositionIndicator::OffPosition,
        })
    }

    /// Regional reserved bits, uninterpreted.
    pub fn regional(&self) -> Result<u8, RangeError> {
        Ok(self.buffer().get_unsigned(260, 8)? as u8)
    }

    /// RAIM (Receiver Autonomous Integrity Monitoring) flag.
    pub fn raim(&self) -> Result<bool, RangeError> {
        self.buffer().get_bool(268)
    }

    /// Virtual aid flag.
    ///
    /// `true` if the aid to navigation does not physically exist.
    pub fn virtual_aid(&self) -> Result<bool, RangeError> {
        self.buffer().get_bool(269)
    }

    /// Assigned mode flag.
    pub fn assigned_mode(&self) -> Result<bool, RangeError> {
        self.buffer().get_bool(270)
    }

    /// Name extension.
    ///
    /// The extension takes as many whole 6-bit characters as fit after bit
    /// 272. It is empty if the payload is not longer than 272 bits or if it
    /// is shorter than a character.
    pub fn name_extension(&self) -> Result<String, RangeError> {
        let len_bits = self.buffer().len_bits();
        if len_bits <= NAME_EXTENSION_OFFSET {
            return Ok(String::new());
        }
        let chars = (len_bits - NAME_EXTENSION_OFFSET) / sixbit::CHAR_BITS;
        if chars == 0 {
            return Ok(String::new());
        }
        self.buffer()
            .get_text(NAME_EXTENSION_OFFSET, chars * sixbit::CHAR_BITS)
    }
}
