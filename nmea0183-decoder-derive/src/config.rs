use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Error, Ident, Result};

use crate::meta::{MetaAttribute, MetaAttributeType};

#[derive(Clone)]
pub struct Config {
    pub input_name: Ident,
    pub sentence: TokenStream,
    pub min_fields: TokenStream,
}

impl Config {
    pub fn from_meta_attributes(name: &Ident, attribute_list: &[MetaAttribute]) -> Result<Self> {
        let mut sentence = None;
        let mut min_fields = quote! { 0 };

        for meta in attribute_list {
            match meta.r#type {
                MetaAttributeType::Sentence => sentence = Some(meta.arg().clone()),
                MetaAttributeType::MinFields => min_fields = meta.arg().clone(),
                _ => {}
            }
        }

        let sentence = sentence.ok_or_else(|| {
            Error::new(
                name.span(),
                "nmea0183-decoder-derive: Missing `#[nmea(sentence = \"...\")]` attribute",
            )
        })?;

        Ok(Self {
            input_name: Ident::new("nmea_fields", Span::call_site()),
            sentence,
            min_fields,
        })
    }
}
