use std::fmt::Display;

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Expr, Ident, LitInt, LitStr, Path, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetaAttributeType {
    Default,
    Index,
    MinFields,
    Sentence,
    With,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "default" => Some(Self::Default),
            "index" => Some(Self::Index),
            "min_fields" => Some(Self::MinFields),
            "sentence" => Some(Self::Sentence),
            "with" => Some(Self::With),
            _ => None,
        }
    }

    fn is_top_level(&self) -> bool {
        matches!(self, Self::MinFields | Self::Sentence)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Index => "index",
            Self::MinFields => "min_fields",
            Self::Sentence => "sentence",
            Self::With => "with",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: TokenStream,
    span: Span,
}

impl MetaAttribute {
    pub fn arg(&self) -> &TokenStream {
        &self.arg
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let r#type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(
                ident.span(),
                "nmea0183-decoder-derive: Unknown nmea attribute",
            )
        })?;

        // Every attribute takes exactly one argument: `name = value` or `name(value)`.
        let arg = match r#type {
            MetaAttributeType::Default => parse_argument::<Expr>(input)?,
            MetaAttributeType::Index | MetaAttributeType::MinFields => {
                parse_argument::<LitInt>(input)?
            }
            MetaAttributeType::Sentence => parse_argument::<LitStr>(input)?,
            MetaAttributeType::With => parse_argument::<Path>(input)?,
        };

        Ok(Self {
            r#type,
            arg,
            span: ident.span(),
        })
    }
}

struct List<T: Parse>(Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        let parsed: P = input.parse()?;
        Ok(quote! { #parsed })
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: P = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-decoder-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

fn parse_attributes(attrs: &[Attribute], top_level: bool) -> Result<Vec<MetaAttribute>> {
    let mut seen = Vec::new();

    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .map(|meta_attr| {
            if meta_attr.r#type.is_top_level() != top_level {
                let level = if top_level { "top" } else { "field" };
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Attribute `{}` is not allowed at the {level} level",
                        meta_attr.r#type
                    ),
                ));
            }

            if seen.contains(&meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }
            seen.push(meta_attr.r#type);

            Ok(meta_attr)
        })
        .collect()
}

pub fn parse_top_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    parse_attributes(attrs, true)
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    parse_attributes(attrs, false)
}
