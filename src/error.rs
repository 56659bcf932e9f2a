//! # Error Types
//!
//! This module defines the error types used throughout the NMEA decoding library.
//!
//! Only framing and checksum errors abort a decode. A sentence that is too short
//! for its type loses its record but keeps its raw text, and a single field that
//! fails to convert falls back to its default value without producing an error.

use nom::error::{ErrorKind, ParseError};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// The sentence carries no `*` checksum delimiter.
    #[error("sentence has no checksum")]
    MissingChecksum,

    /// The checksum delimiter is not followed by exactly two hexadecimal digits.
    ///
    /// Contains the checksum part of the input, delimiter included.
    #[error("malformed checksum {0:?}")]
    MalformedChecksum(I),

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the message content)
    /// and the actual checksum found in the message.
    #[error("checksum mismatch: expected {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// The sentence framing could not be parsed.
    ///
    /// This wraps nom's standard parsing errors, for example a missing `$` prefix
    /// or a line ending that violates the configured [`LineEndingMode`](crate::LineEndingMode).
    #[error("parsing error: {0:?}")]
    ParsingError(E),

    /// A recognized sentence has fewer fields than its decoder needs.
    ///
    /// The record is dropped, but the decoded message still carries the raw text.
    #[error("{sentence} sentence has {found} fields, at least {required} required")]
    InsufficientFields {
        /// The sentence identifier, e.g. `"GGA"`
        sentence: &'static str,
        /// Number of fields found, talker field included
        found: usize,
        /// Minimum number of fields the decoder needs
        required: usize,
    },
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}
