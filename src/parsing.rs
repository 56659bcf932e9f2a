//! # Parsing Utilities
//!
//! Combinators shared by the framing parsers and the field converters.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    error::{ErrorKind, ParseError},
};

/// Ensures that the parser consumes all input.
///
/// Runs `f` and fails with `e` when any input is left over. Field tokens are
/// converted whole: `"12abc"` is not a number, even though it starts with one.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// // Parse all 3 bytes
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This fails because not all input is consumed
/// let result = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::{IResult, character::complete::u8};

    #[test]
    fn test_consumed() {
        let result: IResult<_, _> = consumed(u8, ErrorKind::Eof).parse("42");
        assert_eq!(result, Ok(("", 42)));

        let result: IResult<_, _> = consumed(u8, ErrorKind::Eof).parse("42.5");
        assert_eq!(
            result,
            Err(Err::Error(nom::error::Error::new(".5", ErrorKind::Eof)))
        );
    }
}
