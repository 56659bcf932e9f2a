#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, Fields, FromFields,
    nmea_content::{LocationMode, Satellite, parse::location_mode},
};

/// Field of the first satellite group.
const FIRST_SATELLITE: usize = 4;

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Every satellite takes four fields: ID, elevation, azimuth and SNR. A
/// trailing group with fewer than four fields is ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, FromFields)]
#[nmea(sentence = "GSV", min_fields = 4)]
pub struct GSV {
    #[nmea(with = location_mode)]
    /// Satellite system of the talker
    pub location_mode: LocationMode,
    #[nmea(index = 1)]
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: u8,
    #[nmea(index = 2)]
    /// Sentence number of this GSV message within current group
    pub message_number: u8,
    #[nmea(index = 3)]
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    #[nmea(with = satellites)]
    /// Satellite information
    pub satellites: Vec<Satellite>,
}

fn satellites(fields: &Fields<'_>) -> Vec<Satellite> {
    (FIRST_SATELLITE..fields.len())
        .step_by(Satellite::FIELDS)
        .take_while(|start| start + Satellite::FIELDS <= fields.len())
        .map(|start| Satellite::from_group(fields, start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, IResult};

    fn decode(body: &str) -> Result<GSV, Error<&str>> {
        let result: IResult<_, _> = Fields::parse(body, body);
        let (_, fields) = result.unwrap();
        GSV::decode(&fields)
    }

    fn satellite(id: u16, elevation: f64, azimuth: f64, snr: f64) -> Satellite {
        Satellite {
            id,
            elevation,
            azimuth,
            snr,
        }
    }

    #[test]
    fn test_gsv_decoding() {
        let cases = [
            ("GPGSV,1,1,00", vec![]),
            ("GPGSV,1,1,01,05,45,120,38", vec![satellite(5, 45.0, 120.0, 38.0)]),
            ("GPGSV,2,2,05,05,45,120,38,07,30", vec![satellite(5, 45.0, 120.0, 38.0)]),
            (
                "BDGSV,1,1,02,05,45,120,38,07,30,200,",
                vec![
                    satellite(5, 45.0, 120.0, 38.0),
                    satellite(7, 30.0, 200.0, 0.0),
                ],
            ),
            (
                "GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00",
                vec![
                    satellite(3, 3.0, 111.0, 0.0),
                    satellite(4, 15.0, 270.0, 0.0),
                    satellite(6, 1.0, 10.0, 0.0),
                    satellite(13, 6.0, 292.0, 0.0),
                ],
            ),
        ];

        for (body, expected) in cases {
            let gsv = decode(body).unwrap();
            assert_eq!(gsv.satellites, expected, "{body}");
        }
    }

    #[test]
    fn test_gsv_header() {
        let gsv = decode("BDGSV,3,2,11,05,45,120,38").unwrap();

        assert_eq!(gsv.location_mode, LocationMode::BeiDou);
        assert_eq!(gsv.total_messages, 3);
        assert_eq!(gsv.message_number, 2);
        assert_eq!(gsv.satellites_in_view, 11);
    }

    #[test]
    fn test_gsv_insufficient_fields() {
        assert_eq!(
            decode("GPGSV,1,1"),
            Err(Error::InsufficientFields {
                sentence: "GSV",
                found: 3,
                required: 4,
            })
        );
    }
}
