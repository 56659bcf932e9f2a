mod gga;
mod gsa;
mod gsv;
mod rmc;
mod vtg;

pub use gga::GGA;
pub use gsa::GSA;
pub use gsv::GSV;
pub use rmc::RMC;
pub use vtg::VTG;

use tracing::{debug, trace};

use crate::{Fields, FromFields};

/// A unified enum representing all supported NMEA 0183 sentence types.
///
/// Each variant wraps the corresponding record. The variant is chosen by the
/// 3-character sentence identifier only; the talker identifier in front of it
/// is not checked, so `GPRMC`, `GNRMC` and `BDRMC` all decode as [`RMC`].
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                              | Decoded content                 |
/// |--------------|--------------------------------------------|---------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data         | Position, fix quality, altitude |
/// | GSA([`GSA`]) | GPS DOP and active satellites              | Raw sentence only               |
/// | GSV([`GSV`]) | Satellites in View                         | Individual satellite details    |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information | Essential navigation data       |
/// | VTG([`VTG`]) | Track made good and Ground speed           | Raw sentence only               |
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_decoder::{Fields, IResult, nmea_content::NmeaSentence};
///
/// let body = "GPGSV,1,1,01,05,45,120,38";
/// let result: IResult<_, _> = Fields::parse(body, body);
/// let (_, fields) = result.unwrap();
///
/// match NmeaSentence::decode(&fields) {
///     Some(NmeaSentence::GSV(gsv)) => assert_eq!(gsv.satellites.len(), 1),
///     other => panic!("unexpected sentence: {other:?}"),
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Satellites in View
    GSV(GSV),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Track made good and Ground speed
    VTG(VTG),
}

impl NmeaSentence {
    /// Decodes the record matching the sentence identifier.
    ///
    /// Returns `None` for unsupported sentence types and for sentences with too
    /// few fields for their type.
    pub fn decode(fields: &Fields<'_>) -> Option<Self> {
        let sentence = match fields.sentence_type() {
            Some("GGA") => GGA::decode(fields).map(Self::GGA),
            Some("GSA") => GSA::decode(fields).map(Self::GSA),
            Some("GSV") => GSV::decode(fields).map(Self::GSV),
            Some("RMC") => RMC::decode(fields).map(Self::RMC),
            Some("VTG") => VTG::decode(fields).map(Self::VTG),
            sentence_type => {
                trace!(?sentence_type, "unsupported sentence type");
                return None;
            }
        };

        sentence
            .inspect_err(|error| debug!(%error, sentence = fields.raw(), "sentence record omitted"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IResult;

    fn decode(body: &str) -> Option<NmeaSentence> {
        let result: IResult<_, _> = Fields::parse(body, body);
        let (_, fields) = result.unwrap();
        NmeaSentence::decode(&fields)
    }

    #[test]
    fn test_dispatch() {
        let cases = [
            ("GNRMC,041704.000,A,2935.21718,N,10631.58906,E,0.00,172.39,071124,,,A", Some("RMC")),
            ("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,", Some("GGA")),
            ("BDGSV,1,1,01,05,45,120,38", Some("GSV")),
            ("GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1", Some("GSA")),
            ("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A", Some("VTG")),
            ("GPZDA,123519,04,07,2025,,", None),
            ("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4", None),
            ("GPRM", None),
            ("", None),
        ];

        for (body, expected) in cases {
            let sentence_type = decode(body).map(|sentence| match sentence {
                NmeaSentence::GGA(_) => "GGA",
                NmeaSentence::GSA(_) => "GSA",
                NmeaSentence::GSV(_) => "GSV",
                NmeaSentence::RMC(_) => "RMC",
                NmeaSentence::VTG(_) => "VTG",
            });
            assert_eq!(sentence_type, expected, "{body}");
        }
    }
}
