use nom::{Parser, error::ErrorKind};
use tracing::trace;

use crate::{Error, IResult, fields, parsing::consumed};

/// Trait for converting a single, non-empty NMEA field into a value.
///
/// Numeric types use an int-first policy: the whole field is first parsed as an
/// integer, and only when that fails as a floating point number. Integer fields
/// such as satellite counts therefore stay exact, while fractional fields still
/// convert. A fractional value converted into an integer type is truncated
/// toward zero; an out of range value does not convert.
///
/// Callers normally go through [`Fields::parse_or`], which handles empty fields
/// and falls back to a default when the conversion fails.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::FromField;
///
/// assert_eq!(u8::from_field("12"), Some(12));
/// assert_eq!(u8::from_field("12.7"), Some(12));
/// assert_eq!(u8::from_field("300"), None);
/// assert_eq!(f64::from_field("0.98"), Some(0.98));
/// assert_eq!(char::from_field("A"), Some('A'));
/// assert_eq!(f32::from_field("N"), None);
/// ```
pub trait FromField: Sized {
    /// Converts the field, returning `None` when it does not hold a `Self`.
    fn from_field(field: &str) -> Option<Self>;
}

fn float(field: &str) -> Option<f64> {
    let result: IResult<&str, f64> =
        consumed(nom::number::complete::double, ErrorKind::Eof).parse(field);
    result.ok().map(|(_, value)| value)
}

macro_rules! impl_int_field {
    ($($t:tt),*) => ($(
        impl FromField for $t {
            fn from_field(field: &str) -> Option<Self> {
                let integer: IResult<&str, $t> =
                    consumed(nom::character::complete::$t, ErrorKind::Eof).parse(field);

                match integer {
                    Ok((_, value)) => Some(value),
                    Err(_) => float(field).map(f64::trunc).and_then(|value| {
                        (value.is_finite() && value >= $t::MIN as f64 && value <= $t::MAX as f64)
                            .then_some(value as $t)
                    }),
                }
            }
        }
    )*)
}

impl_int_field!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! impl_float_field {
    ($($t:ty),*) => ($(
        impl FromField for $t {
            fn from_field(field: &str) -> Option<Self> {
                let integer: IResult<&str, i64> =
                    consumed(nom::character::complete::i64, ErrorKind::Eof).parse(field);

                match integer {
                    Ok((_, value)) => Some(value as $t),
                    Err(_) => float(field).map(|value| value as $t),
                }
            }
        }
    )*)
}

impl_float_field!(f32, f64);

impl FromField for char {
    fn from_field(field: &str) -> Option<Self> {
        field.chars().next()
    }
}

impl FromField for String {
    fn from_field(field: &str) -> Option<Self> {
        Some(field.to_owned())
    }
}

/// The comma-separated fields of one sentence.
///
/// Field 0 is the talker and sentence identifier (e.g. `GNRMC`); the following
/// fields match the positions of the sentence layout. Empty fields are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<'a> {
    raw: &'a str,
    body: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Tokenizes `body`, the checksum-verified part of the `raw` sentence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_decoder::{Fields, IResult};
    ///
    /// let raw = "$GPGSV,1,1,00*79";
    /// let result: IResult<_, _> = Fields::parse(raw, "GPGSV,1,1,00");
    /// let (_, fields) = result.unwrap();
    ///
    /// assert_eq!(fields.len(), 4);
    /// assert_eq!(fields.sentence_type(), Some("GSV"));
    /// assert_eq!(fields.parse_or(3, 99u8), 0);
    /// assert_eq!(fields.parse_or(4, 99u8), 99);
    /// ```
    pub fn parse(raw: &'a str, body: &'a str) -> IResult<&'a str, Self> {
        let (i, fields) = fields(body)?;
        Ok((i, Self { raw, body, fields }))
    }

    /// The sentence exactly as it was handed to the decoder.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The sentence between the `$` prefix and the checksum delimiter.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// The 3-character sentence identifier following the 2-character talker.
    pub fn sentence_type(&self) -> Option<&'a str> {
        self.body.get(2..5)
    }

    /// Number of fields, talker field included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false` for a parsed sentence, which has at least the talker field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field at `index`, or an empty field past the end.
    pub fn get(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or_default()
    }

    /// Numeric-with-default conversion of the field at `index`.
    ///
    /// Empty and missing fields yield `default`, and so does a field that fails
    /// to convert. Conversion failures never abort a sentence.
    pub fn parse_or<T: FromField>(&self, index: usize, default: T) -> T {
        let field = self.get(index);
        if field.is_empty() {
            return default;
        }

        T::from_field(field).unwrap_or_else(|| {
            trace!(index, field, "field conversion failed, using default");
            default
        })
    }
}

/// Builds a sentence record from its fields.
///
/// Usually derived with `#[derive(FromFields)]`, naming the sentence type, the
/// minimum field count, and for every struct field either the field index it is
/// read from or a converter function.
pub trait FromFields: Sized {
    /// Sentence identifier, e.g. `"RMC"`.
    const SENTENCE: &'static str;
    /// Minimum number of fields, talker field included.
    const MIN_FIELDS: usize;

    /// Builds the record. Missing fields take their defaults.
    fn from_fields(fields: &Fields<'_>) -> Self;

    /// Builds the record, unless the sentence has fewer than
    /// [`MIN_FIELDS`](Self::MIN_FIELDS) fields.
    fn decode<'a>(fields: &Fields<'a>) -> Result<Self, Error<&'a str>> {
        if fields.len() < Self::MIN_FIELDS {
            return Err(Error::InsufficientFields {
                sentence: Self::SENTENCE,
                found: fields.len(),
                required: Self::MIN_FIELDS,
            });
        }

        Ok(Self::from_fields(fields))
    }
}
