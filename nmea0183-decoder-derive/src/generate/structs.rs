use syn::{Error, Fields, Ident, Result, spanned::Spanned};

use crate::{
    config::Config,
    meta::{self, MetaAttributeType},
    parser::Parser,
};

#[derive(Clone)]
pub struct FieldParser {
    pub variable_name: Ident,
    pub parser: Parser,
}

#[derive(Clone)]
pub struct StructParser {
    pub parsers: Vec<FieldParser>,
}

impl StructParser {
    pub fn from_fields(fields: &Fields, config: &Config) -> Result<Self> {
        let Fields::Named(named) = fields else {
            return Err(Error::new(
                fields.span(),
                "nmea0183-decoder-derive: Only structs with named fields are supported",
            ));
        };

        let mut parsers = vec![];
        for field in &named.named {
            // Named fields always carry an identifier.
            let Some(variable_name) = field.ident.clone() else {
                continue;
            };
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;

            let mut index = None;
            let mut default = None;
            let mut with = None;
            for attribute in &attributes {
                match attribute.r#type {
                    MetaAttributeType::Index => index = Some(attribute.arg().clone()),
                    MetaAttributeType::Default => default = Some(attribute.arg().clone()),
                    MetaAttributeType::With => with = Some(attribute.arg().clone()),
                    _ => {}
                }
            }

            let input = config.input_name.clone();
            let parser = match (index, with) {
                (Some(index), None) => Parser::Index {
                    input,
                    index,
                    ty: Box::new(field.ty.clone()),
                    default,
                },
                (None, Some(path)) if default.is_none() => Parser::With { input, path },
                (None, Some(_)) => {
                    return Err(Error::new(
                        field.span(),
                        "nmea0183-decoder-derive: `default` cannot be used with `with`",
                    ));
                }
                (Some(_), Some(_)) => {
                    return Err(Error::new(
                        field.span(),
                        "nmea0183-decoder-derive: `index` cannot be used with `with`",
                    ));
                }
                (None, None) => {
                    return Err(Error::new(
                        field.span(),
                        format!(
                            "nmea0183-decoder-derive: Field `{variable_name}` needs an `index` or a `with` attribute"
                        ),
                    ));
                }
            };

            parsers.push(FieldParser {
                variable_name,
                parser,
            });
        }

        Ok(Self { parsers })
    }
}
