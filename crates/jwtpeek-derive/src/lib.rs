//! jwtpeek macros
//!
//! This crate provides the `#[claims]` attribute macro.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Generates the registered JWT claim fields and implements the
/// `RegisteredClaims` trait.
///
/// Fields included:
/// - Issuer (`iss`)
/// - Subject (`sub`)
/// - Audience (`aud`)
/// - Expiration (`exp`)
/// - Not Before (`nbf`)
/// - Issued At (`iat`)
/// - JWT ID (`jti`)
///
/// The fields hold the raw JSON value of each claim, so heterogeneous
/// encodings (a numeric `exp` sent as a string, a bare-string `aud`) survive
/// deserialization and stay visible to the claim coercions. The annotated
/// struct must live in a crate that depends on `jwtpeek` and `miniserde`.
#[proc_macro_attribute]
pub fn claims(_args: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;
    let vis = &input.vis;
    let generics = &input.generics;

    // Extract existing fields if it's a struct
    let existing_fields = if let syn::Data::Struct(syn::DataStruct {
        fields: syn::Fields::Named(fields),
        ..
    }) = &input.data
    {
        &fields.named
    } else {
        return syn::Error::new_spanned(
            struct_name,
            "#[claims] can only be applied to structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    // Generate the expanded struct with the registered claim fields
    // Always include Debug, Clone, and Deserialize derives
    let expanded = quote! {
        #[derive(Debug, Clone, miniserde::Deserialize)]
        #vis struct #struct_name #generics {
            #[serde(rename = "iss")]
            pub issuer: Option<miniserde::json::Value>,
            #[serde(rename = "sub")]
            pub subject: Option<miniserde::json::Value>,
            #[serde(rename = "aud")]
            pub audience: Option<miniserde::json::Value>,
            #[serde(rename = "exp")]
            pub expiration: Option<miniserde::json::Value>,
            #[serde(rename = "nbf")]
            pub not_before: Option<miniserde::json::Value>,
            #[serde(rename = "iat")]
            pub issued_at: Option<miniserde::json::Value>,
            #[serde(rename = "jti")]
            pub jwt_id: Option<miniserde::json::Value>,

            #existing_fields
        }

        impl #generics jwtpeek::RegisteredClaims for #struct_name #generics {
            fn issuer(&self) -> Option<jwtpeek::ClaimData> {
                self.issuer.as_ref().and_then(jwtpeek::ClaimData::from_json)
            }

            fn subject(&self) -> Option<jwtpeek::ClaimData> {
                self.subject.as_ref().and_then(jwtpeek::ClaimData::from_json)
            }

            fn audience(&self) -> Option<jwtpeek::ClaimData> {
                self.audience.as_ref().and_then(jwtpeek::ClaimData::from_json)
            }

            fn expiration(&self) -> Option<jwtpeek::ClaimData> {
                self.expiration.as_ref().and_then(jwtpeek::ClaimData::from_json)
            }

            fn not_before(&self) -> Option<jwtpeek::ClaimData> {
                self.not_before.as_ref().and_then(jwtpeek::ClaimData::from_json)
            }

            fn issued_at(&self) -> Option<jwtpeek::ClaimData> {
                self.issued_at.as_ref().and_then(jwtpeek::ClaimData::from_json)
            }

            fn jwt_id(&self) -> Option<jwtpeek::ClaimData> {
                self.jwt_id.as_ref().and_then(jwtpeek::ClaimData::from_json)
            }
        }
    };

    TokenStream::from(expanded)
}
