//! # A Rust procedural macro for NMEA 0183 record decoding
//!
//! `nmea0183-decoder-derive` derives [`FromFields`] for the record structs of
//! [`nmea0183-decoder`]. Every field names either the token index it is read
//! from, with an optional default, or a converter function that receives the
//! whole tokenized sentence.
//!
//! ```ignore
//! #[derive(FromFields)]
//! #[nmea(sentence = "GGA", min_fields = 15)]
//! pub struct GGA {
//!     #[nmea(with = location_mode)]
//!     pub location_mode: LocationMode,
//!     #[nmea(index = 7)]
//!     pub satellite_count: u8,
//!     #[nmea(index = 10, default = 'M')]
//!     pub altitude_unit: char,
//! }
//! ```
//!
//! [`nmea0183-decoder`]: https://crates.io/crates/nmea0183-decoder

use generate::generate_from_fields_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;
mod parser;

#[proc_macro_derive(FromFields, attributes(nmea))]
pub fn derive_from_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_from_fields_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
