//! # NMEA Sentence Content
//!
//! Typed records for the supported sentence types and the [`DecodedMessage`]
//! handed back by the decoder.
//!
//! Content decoding is lenient. Once a sentence passed the checksum gate, it
//! always yields a [`DecodedMessage`]. An unsupported sentence type or a
//! sentence too short for its type only leaves [`DecodedMessage::sentence`]
//! empty, and malformed fields take their default values.

pub mod parse;
mod sentences;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use sentences::*;

use crate::Fields;

/// Satellite system a sentence comes from, derived from its talker identifier.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LocationMode {
    /// `GP` talker: GPS only
    Gps,
    /// `BD` talker: BeiDou only
    BeiDou,
    /// Any other talker, e.g. `GN` for a combined fix
    #[default]
    Combined,
}

impl LocationMode {
    /// Classifies a talker field such as `GNRMC`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_decoder::nmea_content::LocationMode;
    ///
    /// assert_eq!(LocationMode::from_talker("GPGGA"), LocationMode::Gps);
    /// assert_eq!(LocationMode::from_talker("BDGSV"), LocationMode::BeiDou);
    /// assert_eq!(LocationMode::from_talker("GNRMC"), LocationMode::Combined);
    /// ```
    pub fn from_talker(talker: &str) -> Self {
        if talker.contains("GP") {
            Self::Gps
        } else if talker.contains("BD") {
            Self::BeiDou
        } else {
            Self::Combined
        }
    }
}

/// Satellite information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Satellite {
    /// Satellite ID number
    pub id: u16,
    /// Elevation in degrees, 90 maximum
    pub elevation: f64,
    /// Azimuth in degrees true, 000 to 359
    pub azimuth: f64,
    /// Signal-to-noise ratio in dB, 00-99
    pub snr: f64,
}

impl Satellite {
    /// Number of fields describing one satellite.
    pub const FIELDS: usize = 4;

    /// Reads the satellite whose group starts at field `start`.
    pub fn from_group(fields: &Fields<'_>, start: usize) -> Self {
        Self {
            id: fields.parse_or(start, 0),
            elevation: fields.parse_or(start + 1, 0.0),
            azimuth: fields.parse_or(start + 2, 0.0),
            snr: fields.parse_or(start + 3, 0.0),
        }
    }
}

/// The outcome of decoding one sentence that passed the checksum gate.
///
/// At most one sentence record is present, and its type always matches the
/// sentence identifier of [`raw_message`](Self::raw_message).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMessage {
    /// The input sentence, verbatim
    pub raw_message: String,
    /// The decoded record, if the sentence type is supported and complete
    pub sentence: Option<NmeaSentence>,
}

impl DecodedMessage {
    pub(crate) fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            raw_message: fields.raw().to_owned(),
            sentence: NmeaSentence::decode(fields),
        }
    }

    pub fn rmc(&self) -> Option<&RMC> {
        match &self.sentence {
            Some(NmeaSentence::RMC(rmc)) => Some(rmc),
            _ => None,
        }
    }

    pub fn gga(&self) -> Option<&GGA> {
        match &self.sentence {
            Some(NmeaSentence::GGA(gga)) => Some(gga),
            _ => None,
        }
    }

    pub fn gsa(&self) -> Option<&GSA> {
        match &self.sentence {
            Some(NmeaSentence::GSA(gsa)) => Some(gsa),
            _ => None,
        }
    }

    pub fn gsv(&self) -> Option<&GSV> {
        match &self.sentence {
            Some(NmeaSentence::GSV(gsv)) => Some(gsv),
            _ => None,
        }
    }

    pub fn vtg(&self) -> Option<&VTG> {
        match &self.sentence {
            Some(NmeaSentence::VTG(vtg)) => Some(vtg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IResult;

    #[test]
    fn test_satellite_from_group() {
        let body = "GPGSV,1,1,02,05,45.5,120,,07";
        let result: IResult<_, _> = Fields::parse(body, body);
        let (_, fields) = result.unwrap();

        assert_eq!(
            Satellite::from_group(&fields, 4),
            Satellite {
                id: 5,
                elevation: 45.5,
                azimuth: 120.0,
                snr: 0.0,
            }
        );
        assert_eq!(
            Satellite::from_group(&fields, 8),
            Satellite {
                id: 7,
                ..Satellite::default()
            }
        );
    }
}
