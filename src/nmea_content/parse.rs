//! Field converters shared by the sentence records.
//!
//! Everything here is best effort: a field that does not hold a valid value
//! resolves to a neutral default (`0`, the zero timestamp, `None` for dates)
//! instead of failing the sentence.

use nom::{
    Parser,
    bytes::complete::take,
    character::complete::{char, digit0},
    combinator::{eof, opt},
    error::{ErrorKind, make_error},
    sequence::preceded,
};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};
use tracing::trace;

use crate::{FromField, Fields, IResult, nmea_content::LocationMode, parsing::consumed};

/// Base date of every fix time: the day the time of day is counted from.
const FIX_EPOCH: Date = time::macros::date!(2000-01-01);

/// Location mode of the sentence, taken from its talker field.
pub fn location_mode(fields: &Fields<'_>) -> LocationMode {
    LocationMode::from_talker(fields.get(0))
}

/// Converts a `(d)ddmm.mmmm` coordinate and its hemisphere into signed
/// decimal degrees.
///
/// `N` and `E` are positive, `S` and `W` negative. A latitude beyond 90 degrees
/// is reset to 0 and a longitude beyond 360 degrees is wrapped once. An empty,
/// unparsable or non-finite value, or an unknown hemisphere, gives 0.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::nmea_content::parse::coordinate;
///
/// assert!((coordinate("4807.038", 'N') - 48.1173).abs() < 1e-9);
/// assert!((coordinate("01131.000", 'W') + 11.516_666_666).abs() < 1e-6);
/// assert_eq!(coordinate("", 'N'), 0.0);
/// assert_eq!(coordinate("4807.038", 'X'), 0.0);
/// ```
pub fn coordinate(field: &str, hemisphere: char) -> f64 {
    let value = f64::from_field(field).unwrap_or(0.0);
    if !value.is_finite() || value == 0.0 {
        return 0.0;
    }

    let scaled = value / 100.0;
    let degrees = scaled.trunc();
    let minutes = scaled.fract() * 100.0;
    let decimal = degrees + minutes / 60.0;

    match hemisphere {
        'N' | 'S' if decimal.abs() > 90.0 => 0.0,
        'N' => decimal,
        'S' => -decimal,
        'E' | 'W' => {
            let decimal = if decimal.abs() > 360.0 {
                decimal - 360.0
            } else {
                decimal
            };
            if hemisphere == 'E' { decimal } else { -decimal }
        }
        _ => 0.0,
    }
}

/// Reads the coordinate at `value` together with the hemisphere at
/// `hemisphere`, which defaults to `default_hemisphere` when empty.
pub(crate) fn coordinate_at(
    fields: &Fields<'_>,
    value: usize,
    hemisphere: usize,
    default_hemisphere: char,
) -> f64 {
    coordinate(fields.get(value), fields.parse_or(hemisphere, default_hemisphere))
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    let (i, digits) = take(2u8).parse(i)?;
    let (_, value) = consumed(nom::character::complete::u8, ErrorKind::Digit).parse(digits)?;
    Ok((i, value))
}

/// Milliseconds of a fractional second, e.g. `"5"` is 500 and `"1234"` is 123.
fn milliseconds(fraction: &str) -> u16 {
    fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0, |millis, digit| millis * 10 + u16::from(digit - b'0'))
}

fn time_of_day(i: &str) -> IResult<&str, Time> {
    let (i, (hour, minute, second)) = (two_digits, two_digits, two_digits).parse(i)?;
    let (i, fraction) = opt(preceded(char('.'), digit0)).parse(i)?;
    let (i, _) = eof.parse(i)?;

    let time = Time::from_hms_milli(hour, minute, second, fraction.map_or(0, milliseconds))
        .map_err(|_| nom::Err::Error(make_error(i, ErrorKind::Verify)))?;

    Ok((i, time))
}

fn calendar_date(i: &str) -> IResult<&str, Date> {
    let (i, (day, month, year)) = (two_digits, two_digits, two_digits).parse(i)?;
    let (i, _) = eof.parse(i)?;

    let year = match year {
        83..=99 => 1900 + i32::from(year),
        _ => 2000 + i32::from(year),
    };
    let date = Month::try_from(month)
        .and_then(|month| Date::from_calendar_date(year, month, day))
        .map_err(|_| nom::Err::Error(make_error(i, ErrorKind::Verify)))?;

    Ok((i, date))
}

/// Converts an `hhmmss[.sss]` time of day into a UTC timestamp on
/// 2000-01-01, with millisecond precision.
///
/// The digits after the point are a decimal fraction of a second, so `.25` is
/// 250 ms. Digits past the third are dropped.
///
/// An empty or invalid field gives the zero timestamp
/// ([`OffsetDateTime::UNIX_EPOCH`]).
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::nmea_content::parse::utc_time;
/// use time::OffsetDateTime;
///
/// let time = utc_time("123519.5");
/// assert_eq!(time.date().year(), 2000);
/// assert_eq!((time.hour(), time.minute(), time.second()), (12, 35, 19));
/// assert_eq!(time.millisecond(), 500);
///
/// assert_eq!(utc_time(""), OffsetDateTime::UNIX_EPOCH);
/// assert_eq!(utc_time("256000"), OffsetDateTime::UNIX_EPOCH);
/// ```
pub fn utc_time(field: &str) -> OffsetDateTime {
    if field.is_empty() {
        return OffsetDateTime::UNIX_EPOCH;
    }

    match time_of_day(field) {
        Ok((_, time)) => PrimitiveDateTime::new(FIX_EPOCH, time).assume_utc(),
        Err(_) => {
            trace!(field, "invalid UTC time, using zero timestamp");
            OffsetDateTime::UNIX_EPOCH
        }
    }
}

/// Fix time of RMC and GGA, both carrying it in field 1.
pub(crate) fn fix_time(fields: &Fields<'_>) -> OffsetDateTime {
    utc_time(fields.get(1))
}

/// The whole sentence as received, for records that keep it undecoded.
pub(crate) fn raw_message(fields: &Fields<'_>) -> String {
    fields.raw().to_owned()
}

/// Converts a `ddmmyy` date. Years 83 to 99 belong to the 1900s.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::nmea_content::parse::date;
/// use time::{Date, Month};
///
/// assert_eq!(date("230394"), Date::from_calendar_date(1994, Month::March, 23).ok());
/// assert_eq!(date("071124"), Date::from_calendar_date(2024, Month::November, 7).ok());
/// assert_eq!(date("310224"), None);
/// assert_eq!(date(""), None);
/// ```
pub fn date(field: &str) -> Option<Date> {
    calendar_date(field).ok().map(|(_, date)| date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn test_coordinate() {
        assert_close(coordinate("2935.21718", 'N'), 29.586_953);
        assert_close(coordinate("10631.58906", 'E'), 106.526_484_3);
        assert_close(coordinate("4404.14036", 'N'), 44.069_006);
        assert_close(coordinate("12118.85961", 'W'), -121.314_326_8);
        assert_eq!(coordinate("0000.000", 'N'), 0.0);
        assert_eq!(coordinate("abc", 'N'), 0.0);
        assert_eq!(coordinate("4807.038", ' '), 0.0);

        for field in ["inf", "-inf", "infinity", "nan", "NaN"] {
            for hemisphere in ['N', 'S', 'E', 'W'] {
                assert_eq!(coordinate(field, hemisphere), 0.0, "{field} {hemisphere}");
            }
        }
    }

    #[test]
    fn test_coordinate_hemisphere_symmetry() {
        for field in [
            "4807.038", "2935.21718", "0012.5", "8959.999", "1", "inf", "nan", "infinity",
        ] {
            assert_eq!(coordinate(field, 'N'), -coordinate(field, 'S'), "{field}");
            assert_eq!(coordinate(field, 'E'), -coordinate(field, 'W'), "{field}");
        }
    }

    #[test]
    fn test_coordinate_clamps() {
        assert_eq!(coordinate("9130.000", 'N'), 0.0);
        assert_eq!(coordinate("9130.000", 'S'), 0.0);
        assert_close(coordinate("9000.000", 'S'), -90.0);
        assert_close(coordinate("37030.000", 'E'), 10.5);
        assert_close(coordinate("37030.000", 'W'), -10.5);
        assert_close(coordinate("18000.000", 'W'), -180.0);
    }

    #[test]
    fn test_utc_time() {
        let cases = [
            ("041704.000", Some((4, 17, 4, 0))),
            ("123519", Some((12, 35, 19, 0))),
            ("123519.25", Some((12, 35, 19, 250))),
            ("001043.00", Some((0, 10, 43, 0))),
            ("235959.9999", Some((23, 59, 59, 999))),
            ("123519.", Some((12, 35, 19, 0))),
            ("12351", None),
            ("1235190", None),
            ("12a519", None),
            ("246000", None),
            ("123519.5x", None),
        ];

        for (field, expected) in cases {
            let time = utc_time(field);
            match expected {
                Some((hour, minute, second, millisecond)) => {
                    assert_eq!(time.date(), FIX_EPOCH, "{field}");
                    assert_eq!(
                        (time.hour(), time.minute(), time.second(), time.millisecond()),
                        (hour, minute, second, millisecond),
                        "{field}"
                    );
                }
                None => assert_eq!(time, OffsetDateTime::UNIX_EPOCH, "{field}"),
            }
        }
    }

    #[test]
    fn test_date() {
        assert_eq!(
            date("010183"),
            Date::from_calendar_date(1983, Month::January, 1).ok()
        );
        assert_eq!(
            date("311282"),
            Date::from_calendar_date(2082, Month::December, 31).ok()
        );
        assert_eq!(date("011383"), None);
        assert_eq!(date("0101830"), None);
        assert_eq!(date("01018"), None);
    }

    #[test]
    fn test_location_mode() {
        let cases = [
            ("GPRMC", LocationMode::Gps),
            ("BDGSV", LocationMode::BeiDou),
            ("GNGGA", LocationMode::Combined),
            ("GLGSV", LocationMode::Combined),
        ];

        for (talker, expected) in cases {
            let result: IResult<_, _> = Fields::parse(talker, talker);
            let (_, fields) = result.unwrap();
            assert_eq!(location_mode(&fields), expected, "{talker}");
        }
    }
}
