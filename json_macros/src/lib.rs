extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, FieldsNamed, parse_macro_input};

fn named_fields(input: &DeriveInput, derive_name: &str) -> Result<FieldsNamed, Error> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            input,
            format!("{derive_name} can only be derived for structs"),
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new_spanned(
            input,
            format!("{derive_name} can only be derived for named field structs"),
        ));
    };

    Ok(fields.clone())
}

// `Option` fields may be absent from the input entirely, so the generated
// parser must not require them
fn is_option(ty: &syn::Type) -> bool {
    if let syn::Type::Path(path) = ty {
        path.path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option")
    } else {
        false
    }
}

#[proc_macro_derive(JsonDeserialise)]
pub fn derive_json_deserialise(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match named_fields(&input, "JsonDeserialise") {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let struct_name = input.ident;

    let fields_struct_types = fields.named.iter().map(|f| {
        let field_name = f.ident.as_ref().unwrap();
        let field_type = &f.ty;

        quote! {
            #field_name: Option<#field_type>
        }
    });

    let fields_struct_init = fields.named.iter().map(|f| {
        let ident = f.ident.as_ref().unwrap();
        quote! {
            #ident: None
        }
    });

    let field_branches = fields.named.iter().map(|f| {
        let field_name = f.ident.as_ref().unwrap();
        let field_type = &f.ty;

        quote! {
            stringify!(#field_name) => {
                parsed_fields.#field_name =
                    Some(<#field_type as ::json::Parse>::parse(parser)?);
            }
        }
    });

    let constructor_fields = fields.named.iter().map(|f| {
        let field_name = f.ident.as_ref().unwrap();

        if is_option(&f.ty) {
            // Present-but-null and absent both become None
            quote! {
                #field_name: parsed_fields.#field_name.flatten()
            }
        } else {
            quote! {
                #field_name: parsed_fields.#field_name.ok_or_else(|| {
                    parser.make_err_prev(
                        ::json::ParseErrorKind::MissingField(stringify!(#field_name)),
                    )
                })?
            }
        }
    });

    let expanded = quote! {
        impl ::json::Parse for #struct_name {
            fn parse(
                parser: &mut ::json::Parser,
            ) -> Result<Self, ::json::ParseError> {
                parser.consume(::json::TokenKind::LCurlyBracket)?;

                let mut had_comma = false;

                let mut parsed_fields = {
                    struct ParsedFields {
                        #( #fields_struct_types, )*
                    }

                    ParsedFields {
                        #( #fields_struct_init, )*
                    }
                };

                // Loop through all properties, until reaching closing bracket
                while !parser.check(::json::TokenKind::RCurlyBracket)? {
                    let token = parser.advance()?;
                    match token.kind {
                        ::json::TokenKind::String(name) => {
                            parser.consume(::json::TokenKind::Colon)?;

                            match name.as_str() {
                                #(#field_branches)*
                                // Unknown key: parse and discard the value
                                _ => {
                                    <::json::JsonValue as ::json::Parse>::parse(parser)?;
                                }
                            };

                            // Once no comma at end, we have reached end of object
                            had_comma = parser.check(::json::TokenKind::Comma)?;
                            if had_comma {
                                parser.advance()?;
                            } else {
                                break;
                            }
                        }
                        _ => {
                            return Err(parser.make_err_prev(
                                ::json::ParseErrorKind::UnexpectedToken,
                            ));
                        }
                    }
                }

                // No trailing comma
                if had_comma {
                    return Err(parser.make_err_prev(
                        ::json::ParseErrorKind::UnexpectedToken,
                    ));
                }

                parser.consume(::json::TokenKind::RCurlyBracket)?;

                Ok(#struct_name {
                    #(#constructor_fields),*
                })
            }
        }
    };

    expanded.into()
}

#[proc_macro_derive(JsonSerialise)]
pub fn derive_json_serialise(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match named_fields(&input, "JsonSerialise") {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let struct_name = input.ident;

    // Fields are emitted in declaration order
    let field_writes = fields.named.iter().enumerate().map(|(i, f)| {
        let field_name = f.ident.as_ref().unwrap();
        let comma = if i > 0 {
            quote! { out.raw(","); }
        } else {
            quote! {}
        };

        quote! {
            #comma
            out.break_line();
            out.key(stringify!(#field_name));
            ::json::Serialise::serialise(&self.#field_name, out);
        }
    });

    let body = if fields.named.is_empty() {
        quote! { out.raw("{}"); }
    } else {
        quote! {
            out.open('{');
            #(#field_writes)*
            out.close('}');
        }
    };

    let expanded = quote! {
        impl ::json::Serialise for #struct_name {
            fn serialise(&self, out: &mut ::json::Serialiser) {
                #body
            }
        }
    };

    expanded.into()
}
