use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, Type};

/// How a single record field is pulled out of the tokenized sentence.
#[derive(Clone)]
pub enum Parser {
    /// Numeric-with-default conversion of the token at `index`.
    Index {
        input: Ident,
        index: TokenStream,
        ty: Box<Type>,
        default: Option<TokenStream>,
    },
    /// A converter function taking the whole field list.
    With { input: Ident, path: TokenStream },
}

impl ToTokens for Parser {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let token_stream = match self {
            Self::Index {
                input,
                index,
                ty,
                default,
            } => {
                let default = default
                    .clone()
                    .unwrap_or_else(|| quote! { <#ty as ::core::default::Default>::default() });
                quote! { #input.parse_or::<#ty>(#index, #default) }
            }
            Self::With { input, path } => quote! { #path(#input) },
        };

        tokens.extend(token_stream);
    }
}
