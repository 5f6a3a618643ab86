//! # AIS message decoding
//!
//! ais-decode is a Rust implementation of the field layer of AIS (Automatic
//! Identification System) messages, the binary reports broadcast by ships
//! and aids to navigation over VHF. Given the de-armored bits of a message
//! payload, it reads the fields of each message type bit-exact, mapping
//! "not available" values to `None` and deriving the fields whose meaning
//! depends on other fields.
//!
//! The payload is wrapped in a [`BitBuffer`], which gives checked access to
//! unsigned, two's-complement signed and 6-bit text fields at arbitrary bit
//! offsets. The [`decode`] function reads the message type from the payload
//! and returns an [`AisMessage`] holding the decoder for that type. Each
//! decoder implements the [`Message`] trait and has typed accessors for its
//! fields, and all of them can be read generically as [`Value`]s through the
//! list of [`Field`]s that the decoder supports.
//!
//! Sentence parsing, fragment reassembly and de-armoring of the NMEA
//! `!AIVDM` payload happen before this crate is involved.
//!
//! # Examples
//!
//! ```
//! use ais_decode::{decode, AisMessage, BitBuffer, Message};
//!
//! # let mut payload = [0u8; 53];
//! # payload[..5].copy_from_slice(&[0x14, 0x53, 0xdd, 0xaa, 0x60]);
//! // `payload` holds the 424 bits of a type 5 message
//! let buffer = BitBuffer::new(&payload, 424).unwrap();
//! match decode(buffer, "A") {
//!     Ok(AisMessage::StaticVoyageData(msg)) => {
//!         assert!(msg.is_valid());
//!         assert_eq!(msg.mmsi().unwrap(), 351_759_000);
//!         assert_eq!(msg.eta_month().unwrap(), None);
//!     }
//!     Ok(_) => unreachable!(),
//!     Err(e) => panic!("could not decode: {e}"),
//! }
//! ```
//!
//! This crate does not depend on `std` (it requires `alloc` for the decoded
//! text fields) and can be used in embedded targets.
//!
//! ## Logging
//!
//! The crate uses the [log](https://docs.rs/log/latest/log/) crate to log the
//! construction of decoders, payloads that are rejected, and messages that are
//! decoded as invalid.
//!
//! ## Features
//!
//! When built with the default features, the crate does not require
//! `std`. Additionally, the crate supports the following features:
//! * `std`. Enables `std` support in the dependencies.
//! * `serde`. Derives `Serialize` for [`Value`], [`Field`] and the other
//!   plain data types, so that decoded records can be serialized.

#![warn(missing_docs)]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod aton;
pub use aton::{AidToNavigationReport, OffPositionIndicator, UtcStatus};
mod bitbuffer;
pub use bitbuffer::{BitBuffer, MAX_INTEGER_BITS};
pub mod error;
pub use error::{BitBufferError, DecodeError, RangeError};
pub mod lookup;
pub mod message;
pub use message::{decode, AisMessage, Field, Header, Message, Value};
pub mod sixbit;
pub mod static_voyage;
pub use static_voyage::StaticVoyageData;
#[cfg(test)]
mod test_payload;
pub mod types;
pub use types::{MessageType, Validity};
