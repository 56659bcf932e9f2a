use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Result};

use crate::{config::Config, generate::structs::StructParser, meta};

mod structs;

// Usage:
// #[derive(FromFields)]
// #[nmea(sentence = "GGA", min_fields = 15)]
// pub struct MySentence {
//     #[nmea(with = location_mode)]
//     pub location_mode: LocationMode,
//     #[nmea(index = 7)]
//     pub satellite_count: u8,
//     #[nmea(index = 10, default = 'M')]
//     pub altitude_unit: char,
// }

pub fn generate_from_fields_impl(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(datastruct) = &input.data else {
        return Err(Error::new(
            input.ident.span(),
            "nmea0183-decoder-derive: Only structs are supported",
        ));
    };

    let name = &input.ident;
    let attributes = meta::parse_top_level_attributes(&input.attrs)?;
    let config = Config::from_meta_attributes(name, &attributes)?;
    let struct_parser = StructParser::from_fields(&datastruct.fields, &config)?;

    let nmea_fields = &config.input_name;
    let sentence = &config.sentence;
    let min_fields = &config.min_fields;

    let (variable_name, parser): (Vec<_>, Vec<_>) = struct_parser
        .parsers
        .iter()
        .map(|field_parser| (&field_parser.variable_name, &field_parser.parser))
        .unzip();

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics nmea0183_decoder::FromFields for #name #ty_generics #where_clause {
            const SENTENCE: &'static str = #sentence;
            const MIN_FIELDS: usize = #min_fields;

            fn from_fields(#nmea_fields: &nmea0183_decoder::Fields<'_>) -> Self {
                #(let #variable_name = #parser;)*
                Self { #(#variable_name),* }
            }
        }
    })
}
