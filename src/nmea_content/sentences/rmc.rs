#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    self as nmea0183_decoder, Fields, FromFields,
    nmea_content::{
        LocationMode,
        parse::{coordinate_at, date, fix_time, location_mode},
    },
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// Fields 1 to 11 must be present, possibly empty. The mode indicator (12) was
/// added in NMEA 2.3 and defaults to `A` when missing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, FromFields)]
#[nmea(sentence = "RMC", min_fields = 12)]
pub struct RMC {
    #[nmea(with = location_mode)]
    /// Satellite system of the talker
    pub location_mode: LocationMode,
    #[nmea(with = fix_time)]
    /// Fix time in UTC, on 2000-01-01
    pub utc_time: OffsetDateTime,
    #[nmea(index = 2, default = 'V')]
    /// Status, `A` valid or `V` warning
    pub status: char,
    #[nmea(with = latitude)]
    /// Latitude in signed decimal degrees, south negative
    pub latitude: f64,
    #[nmea(index = 4, default = 'N')]
    /// Latitude hemisphere, `N` or `S`
    pub lat_hemisphere: char,
    #[nmea(with = longitude)]
    /// Longitude in signed decimal degrees, west negative
    pub longitude: f64,
    #[nmea(index = 6, default = 'E')]
    /// Longitude hemisphere, `E` or `W`
    pub lon_hemisphere: char,
    #[nmea(index = 7)]
    /// Speed over ground in knots
    pub speed_over_ground: f64,
    #[nmea(index = 8)]
    /// Course over ground in degrees true
    pub course_over_ground: f64,
    #[nmea(index = 9)]
    /// Fix date as sent, `ddmmyy`
    pub date: String,
    #[nmea(index = 10)]
    /// Magnetic variation in degrees
    pub magnetic_variation: f64,
    #[nmea(index = 11, default = 'E')]
    /// Direction of the magnetic variation, `E` or `W`
    pub variation_direction: char,
    #[nmea(index = 12, default = 'A')]
    /// FAA mode indicator
    pub mode: char,
}

impl RMC {
    /// Fix date in UTC, `None` when the date field is empty or invalid.
    pub fn fix_date(&self) -> Option<time::Date> {
        date(&self.date)
    }
}

fn latitude(fields: &Fields<'_>) -> f64 {
    coordinate_at(fields, 3, 4, 'N')
}

fn longitude(fields: &Fields<'_>) -> f64 {
    coordinate_at(fields, 5, 6, 'E')
}
