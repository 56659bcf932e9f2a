//! # NMEA 0183 Decoder
//!
//! This library decodes NMEA 0183 sentences from GNSS receivers:
//! `$HHH,D1,D2,...,Dn*CC\r\n`
//!
//! Decoding runs in a single pass:
//! - The line ending is handled according to a [`LineEndingMode`]
//! - The checksum is verified; a sentence with a missing, malformed or wrong
//!   checksum is rejected as a whole
//! - The body is split into fields and dispatched on its sentence identifier
//! - RMC, GGA and GSV sentences are decoded into typed records, GSA and VTG
//!   sentences are kept as raw text
//!
//! Past the checksum, decoding is best effort: empty or malformed fields take
//! default values, and unsupported or truncated sentences still produce a
//! [`DecodedMessage`] carrying the raw sentence.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decoder::decode;
//!
//! let message = decode("$GNRMC,041704.000,A,2935.21718,N,10631.58906,E,0.00,172.39,071124,,,A*7E")
//!     .expect("valid checksum");
//!
//! let rmc = message.rmc().expect("RMC sentence");
//! assert_eq!(rmc.status, 'A');
//! assert!((rmc.latitude - 29.586_953).abs() < 1e-6);
//! assert!((rmc.longitude - 106.526_484).abs() < 1e-6);
//!
//! assert!(decode("Invalid NMEA message").is_none());
//! ```
//!
//! Records are built with `#[derive(FromFields)]`, which can be used for other
//! sentence types as well:
//!
//! ```rust
//! use nmea0183_decoder::{Fields, FromFields, IResult};
//!
//! #[derive(FromFields)]
//! #[nmea(sentence = "ZDA", min_fields = 5)]
//! struct Zda {
//!     #[nmea(index = 2)]
//!     day: u8,
//!     #[nmea(index = 3)]
//!     month: u8,
//!     #[nmea(index = 4, default = 2000)]
//!     year: u16,
//! }
//!
//! let body = "GPZDA,123519,04,07,";
//! let result: IResult<_, _> = Fields::parse(body, body);
//! let (_, fields) = result.unwrap();
//!
//! let zda = Zda::decode(&fields).unwrap();
//! assert_eq!((zda.day, zda.month, zda.year), (4, 7, 2000));
//! ```

mod decoder;
pub mod error;
pub mod nmea_content;
mod nmea0183;
mod parse;
pub mod parsing;

pub use decoder::Decoder;
pub use error::{Error, IResult};
pub use nmea_content::{DecodedMessage, NmeaSentence};
pub use nmea0183::*;
pub use nmea0183_decoder_derive::FromFields;
pub use parse::{FromField, FromFields, Fields};

/// Decodes one sentence with the default [`Decoder`].
///
/// Returns `None` when the sentence is rejected by the checksum gate.
pub fn decode(sentence: &str) -> Option<DecodedMessage> {
    Decoder::default().decode(sentence)
}

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
