#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    self as nmea0183_decoder, Fields, FromFields,
    nmea_content::{
        LocationMode,
        parse::{coordinate_at, fix_time, location_mode},
    },
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, FromFields)]
#[nmea(sentence = "GGA", min_fields = 15)]
pub struct GGA {
    #[nmea(with = location_mode)]
    /// Satellite system of the talker
    pub location_mode: LocationMode,
    #[nmea(with = fix_time)]
    /// Fix time in UTC, on 2000-01-01
    pub utc_time: OffsetDateTime,
    #[nmea(with = latitude)]
    /// Latitude in signed decimal degrees, south negative
    pub latitude: f64,
    #[nmea(index = 3, default = 'N')]
    /// Latitude hemisphere, `N` or `S`
    pub lat_hemisphere: char,
    #[nmea(with = longitude)]
    /// Longitude in signed decimal degrees, west negative
    pub longitude: f64,
    #[nmea(index = 5, default = 'E')]
    /// Longitude hemisphere, `E` or `W`
    pub lon_hemisphere: char,
    #[nmea(index = 6)]
    /// GPS quality indicator, 0 when no fix is available
    pub fix_status: u8,
    #[nmea(index = 7)]
    /// Number of satellites in use
    pub satellite_count: u8,
    #[nmea(index = 8)]
    /// Horizontal Dilution of Precision
    pub hdop: f64,
    #[nmea(index = 9)]
    /// Altitude above/below mean sea level (geoid)
    pub altitude: f64,
    #[nmea(index = 10, default = 'M')]
    /// Unit of the altitude
    pub altitude_unit: char,
    #[nmea(index = 11)]
    /// Geoidal separation, the difference between the WGS-84 earth ellipsoid and mean sea level (geoid),
    /// negative values indicate that the geoid is below the ellipsoid
    pub geoidal_separation: f64,
    #[nmea(index = 12, default = 'M')]
    /// Unit of the geoidal separation
    pub geoidal_separation_unit: char,
    #[nmea(index = 13)]
    /// Age of Differential GPS data in seconds, 0 when DGPS is not used
    pub differential_age: f64,
    #[nmea(index = 14)]
    /// Differential reference station ID, as sent
    pub station_id: String,
}

fn latitude(fields: &Fields<'_>) -> f64 {
    coordinate_at(fields, 2, 3, 'N')
}

fn longitude(fields: &Fields<'_>) -> f64 {
    coordinate_at(fields, 4, 5, 'E')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, IResult};

    fn decode(body: &str) -> Result<GGA, Error<&str>> {
        let result: IResult<_, _> = Fields::parse(body, body);
        let (_, fields) = result.unwrap();
        GGA::decode(&fields)
    }

    #[test]
    fn test_gga_decoding() {
        let gga = decode(
            "GNGGA,001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M,1.5,0042",
        )
        .unwrap();

        assert_eq!(gga.location_mode, LocationMode::Combined);
        assert_eq!(
            (gga.utc_time.hour(), gga.utc_time.minute(), gga.utc_time.second()),
            (0, 10, 43)
        );
        assert!((gga.latitude - 44.069_006).abs() < 1e-6);
        assert!((gga.longitude + 121.314_326_8).abs() < 1e-6);
        assert_eq!((gga.lat_hemisphere, gga.lon_hemisphere), ('N', 'W'));
        assert_eq!(gga.fix_status, 1);
        assert_eq!(gga.satellite_count, 12);
        assert_eq!(gga.hdop, 0.98);
        assert_eq!(gga.altitude, 1113.0);
        assert_eq!(gga.altitude_unit, 'M');
        assert_eq!(gga.geoidal_separation, -21.3);
        assert_eq!(gga.geoidal_separation_unit, 'M');
        assert_eq!(gga.differential_age, 1.5);
        assert_eq!(gga.station_id, "0042");
    }

    #[test]
    fn test_gga_empty_trailing_fields() {
        let gga = decode("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,").unwrap();

        assert_eq!(gga.location_mode, LocationMode::Gps);
        assert!((gga.latitude - 48.1173).abs() < 1e-6);
        assert!((gga.longitude - 11.516_666_7).abs() < 1e-6);
        assert_eq!(gga.satellite_count, 8);
        assert_eq!(gga.hdop, 0.9);
        assert_eq!(gga.altitude, 545.4);
        assert_eq!(gga.geoidal_separation, 46.9);
        assert_eq!(gga.differential_age, 0.0);
        assert_eq!(gga.station_id, "");
    }

    #[test]
    fn test_gga_malformed_fields() {
        let gga = decode("GPGGA,99x,4807.038,Q,01131.000,E,x,8.0,,545.4,,46.9,M,,").unwrap();

        assert_eq!(gga.utc_time, OffsetDateTime::UNIX_EPOCH);
        assert_eq!(gga.latitude, 0.0);
        assert_eq!(gga.lat_hemisphere, 'Q');
        assert_eq!(gga.fix_status, 0);
        assert_eq!(gga.satellite_count, 8);
        assert_eq!(gga.hdop, 0.0);
        assert_eq!(gga.altitude_unit, 'M');
    }

    #[test]
    fn test_gga_insufficient_fields() {
        let cases = [
            ("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4", 10),
            ("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,", 14),
        ];

        for (body, found) in cases {
            assert_eq!(
                decode(body),
                Err(Error::InsufficientFields {
                    sentence: "GGA",
                    found,
                    required: 15,
                }),
                "{body}"
            );
        }
    }
}
