#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decoder, FromFields, nmea_content::parse::raw_message};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The fields are not decoded; the record only keeps the sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, FromFields)]
#[nmea(sentence = "VTG", min_fields = 1)]
pub struct VTG {
    #[nmea(with = raw_message)]
    /// The sentence as received
    pub raw_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fields, IResult};

    #[test]
    fn test_vtg_keeps_raw_message() {
        let raw = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A*25";
        let result: IResult<_, _> = Fields::parse(raw, "GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A");
        let (_, fields) = result.unwrap();

        let vtg = VTG::decode(&fields).unwrap();
        assert_eq!(vtg.raw_message, raw);
    }
}
