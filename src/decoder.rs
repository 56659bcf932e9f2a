//! # Sentence Decoder
//!
//! Ties framing, tokenizing and record decoding together.

use tracing::debug;

use crate::{DecodedMessage, Error, Fields, LineEndingMode, frame};

/// Decodes NMEA 0183 sentences into [`DecodedMessage`]s.
///
/// The decoder holds no state besides its line ending policy, so a single
/// instance can be copied into and shared between any number of threads.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Decoder, LineEndingMode};
///
/// let decoder = Decoder::new(LineEndingMode::Required);
///
/// let message = decoder.decode("$GPGSV,1,1,01,05,45,120,38*44\r\n").unwrap();
/// assert_eq!(message.gsv().map(|gsv| gsv.satellites.len()), Some(1));
///
/// assert!(decoder.decode("$GPGSV,1,1,01,05,45,120,38*44").is_none());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    line_ending: LineEndingMode,
}

impl Decoder {
    pub fn new(line_ending: LineEndingMode) -> Self {
        Self { line_ending }
    }

    pub fn line_ending(&self) -> LineEndingMode {
        self.line_ending
    }

    /// Decodes one sentence.
    ///
    /// Fails only when the sentence is not framed correctly or its checksum
    /// does not match. Any sentence passing those checks decodes, even when its
    /// type is unsupported or its fields are incomplete.
    pub fn try_decode<'a>(&self, sentence: &'a str) -> Result<DecodedMessage, Error<&'a str>> {
        let (_, body) = frame(self.line_ending)(sentence).map_err(flatten(sentence))?;
        let (_, fields) = Fields::parse(sentence, body).map_err(flatten(sentence))?;

        Ok(DecodedMessage::from_fields(&fields))
    }

    /// Decodes one sentence, returning `None` when it is rejected.
    pub fn decode(&self, sentence: &str) -> Option<DecodedMessage> {
        self.try_decode(sentence)
            .inspect_err(|error| debug!(%error, sentence, "sentence rejected"))
            .ok()
    }
}

/// Unwraps a nom error. Complete parsers never return `Incomplete`, which is
/// reported against the whole sentence should it happen.
fn flatten<'a>(sentence: &'a str) -> impl Fn(nom::Err<Error<&'a str>>) -> Error<&'a str> {
    move |error| match error {
        nom::Err::Error(error) | nom::Err::Failure(error) => error,
        nom::Err::Incomplete(_) => Error::ParsingError(nom::error::Error::new(
            sentence,
            nom::error::ErrorKind::Complete,
        )),
    }
}
