//! # NMEA 0183 Sentence Framing
//!
//! This module checks the outer structure of an NMEA 0183 sentence:
//! `$HHH,D1,D2,...,Dn*CC\r\n`
//!
//! Framing is the only stage that can reject a sentence outright. It strips the
//! line ending according to a [`LineEndingMode`], requires a `*CC` checksum,
//! skips the leading `$` run and verifies the XOR checksum of the body. The body is
//! then split into comma-separated fields for the sentence decoders.

use nom::{
    AsBytes, AsChar, Compare, Err, FindSubstring, Input, Parser,
    bytes::complete::{tag, take, take_till, take_until},
    character::complete::{char, hex_digit0},
    combinator::opt,
    error::{ErrorKind, ParseError},
    multi::{many1_count, separated_list1},
    number::complete::hex_u32,
};

use crate::{Error, IResult, parsing::consumed};

/// Defines how the decoder should handle line endings.
///
/// NMEA 0183 sentences end with a carriage return and line feed (`\r\n`) on the
/// wire, but sentences that went through logs, APIs or line readers often have
/// them stripped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// A trailing `\r\n` or `\n` is accepted and removed, but not required.
    #[default]
    Optional,

    /// CRLF line ending is required and must be present.
    ///
    /// Use this mode when decoding raw serial port data or log files that keep
    /// line endings.
    Required,

    /// CRLF line ending is forbidden and must not be present.
    ///
    /// Use this mode when decoding sentences from sources that already removed
    /// line endings.
    Forbidden,
}

/// Parses line endings based on configuration.
///
/// Returns the sentence without its line ending as the remaining input.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{IResult, LineEndingMode, crlf};
/// use nom::Parser;
///
/// let mut parser = crlf(LineEndingMode::Required);
/// let result: IResult<_, _> = parser.parse("data\r\n");
/// assert_eq!(result, Ok(("data", ())));
///
/// let mut parser = crlf(LineEndingMode::Optional);
/// let result: IResult<_, _> = parser.parse("data\n");
/// assert_eq!(result, Ok(("data", ())));
///
/// let mut parser = crlf(LineEndingMode::Forbidden);
/// let result: IResult<_, _> = parser.parse("data\r\n");
/// assert!(result.is_err());
/// ```
pub fn crlf<'a, I, E: ParseError<I>>(crlf: LineEndingMode) -> impl Fn(I) -> nom::IResult<I, (), E>
where
    I: Input + Compare<&'a str> + FindSubstring<&'a str>,
{
    move |i: I| {
        let (i, data) = opt(take_until("\r\n")).parse(i)?;

        let data = match (crlf, data) {
            (LineEndingMode::Required | LineEndingMode::Optional, Some(data)) => {
                let (_, _) = consumed(tag("\r\n"), ErrorKind::CrLf).parse(i)?;
                data
            }
            (LineEndingMode::Required, None) | (LineEndingMode::Forbidden, Some(_)) => {
                return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)));
            }
            (LineEndingMode::Optional, None) => {
                let (i, data) = opt(take_until("\n")).parse(i)?;
                match data {
                    Some(data) => {
                        let (_, _) = consumed(tag("\n"), ErrorKind::CrLf).parse(i)?;
                        data
                    }
                    None => i,
                }
            }
            (LineEndingMode::Forbidden, None) => i,
        };

        Ok((data, ()))
    }
}

/// Parses the `*CC` checksum field.
///
/// The delimiter must be followed by exactly two hexadecimal digits and nothing
/// else.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{IResult, checksum_field};
///
/// let result: IResult<_, _> = checksum_field("*7E");
/// assert_eq!(result, Ok(("", 0x7E)));
///
/// let result: IResult<_, _> = checksum_field("*7");
/// assert!(result.is_err());
/// ```
pub fn checksum_field<I, E: ParseError<I>>(i: I) -> nom::IResult<I, u8, E>
where
    I: Input + AsBytes,
    <I as Input>::Item: AsChar,
{
    let (i, _) = char('*').parse(i)?;
    let (i, cc) = consumed(take(2u8), ErrorKind::Count).parse(i)?;
    let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;
    let (_, cc) = hex_u32.parse(cc)?;

    Ok((i, cc as u8))
}

/// Calculates the NMEA 0183 checksum for the given message content.
///
/// The checksum is the XOR of every byte between the `$` prefix and the `*`
/// delimiter, both excluded.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::checksum;
///
/// let (_, cc) = checksum("GNRMC,041704.000,A,2935.21718,N,10631.58906,E,0.00,172.39,071124,,,A");
/// assert_eq!(cc, 0x7E);
/// ```
pub fn checksum<I>(input: I) -> (I, u8)
where
    I: Input + AsBytes,
{
    let calculated_checksum = input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte);

    (input, calculated_checksum)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::format_checksum;
///
/// assert_eq!(format_checksum(0x7E), "7E");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Creates the framing parser, the global gate of every decode.
///
/// The returned parser yields the sentence body: everything after the leading
/// `$` run and before the last `*`. A doubled `$$` prefix is treated like a
/// single `$`, and the checksum always covers the body only.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Error, LineEndingMode, frame};
///
/// let mut parser = frame(LineEndingMode::Optional);
///
/// let (_, body) = parser("$GPGSV,1,1,01,05,45,120,38*44\r\n").unwrap();
/// assert_eq!(body, "GPGSV,1,1,01,05,45,120,38");
///
/// let (_, body) = parser("$$GPGSV,1,1,01,05,45,120,38*44").unwrap();
/// assert_eq!(body, "GPGSV,1,1,01,05,45,120,38");
///
/// let result = parser("$GPGSV,1,1,01,05,45,120,39*44");
/// assert_eq!(
///     result,
///     Err(nom::Err::Error(Error::ChecksumMismatch { expected: 0x45, found: 0x44 }))
/// );
/// ```
pub fn frame<'a>(line_ending: LineEndingMode) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |i: &'a str| {
        let (line, _) = crlf(line_ending).parse(i)?;

        let Some(star) = line.rfind('*') else {
            return Err(Err::Error(Error::MissingChecksum));
        };
        let (data, cc) = line.split_at(star);

        let (_, found) = checksum_field::<_, nom::error::Error<&str>>(cc)
            .map_err(|_| Err::Error(Error::MalformedChecksum(cc)))?;

        let (data, _) = many1_count(char('$')).parse(data)?;
        let (data, expected) = checksum(data);

        if expected != found {
            return Err(Err::Error(Error::ChecksumMismatch { expected, found }));
        }

        Ok(("", data))
    }
}

/// Splits a sentence body into its comma-separated fields.
///
/// Empty fields are kept in place, so field positions always match the
/// sentence layout. Nothing is trimmed.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{IResult, fields};
///
/// let result: IResult<_, _> = fields("GPRMC,,A,");
/// assert_eq!(result, Ok(("", vec!["GPRMC", "", "A", ""])));
/// ```
pub fn fields<I, E: ParseError<I>>(i: I) -> nom::IResult<I, Vec<I>, E>
where
    I: Input,
    <I as Input>::Item: AsChar,
{
    separated_list1(char(','), take_till(|c: <I as Input>::Item| c.as_char() == ',')).parse(i)
}
