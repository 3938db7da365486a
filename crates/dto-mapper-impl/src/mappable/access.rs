// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! By-name field accessors.
//!
//! One match arm per declared field; `set_field` downcasts to the declared
//! type and hands the value back untouched on any mismatch.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::MappableDef;

/// Generate `field` and `set_field`.
pub fn generate(def: &MappableDef) -> TokenStream {
    let names: Vec<_> = def.fields().iter().map(|field| field.name_str()).collect();
    let idents: Vec<_> = def.fields().iter().map(|field| &field.ident).collect();
    let types: Vec<_> = def.fields().iter().map(|field| &field.ty).collect();

    quote! {
        fn field(&self, name: &str) -> ::std::option::Option<&dyn ::std::any::Any> {
            match name {
                #(#names => ::std::option::Option::Some(&self.#idents as &dyn ::std::any::Any),)*
                _ => ::std::option::Option::None
            }
        }

        fn set_field(
            &mut self,
            name: &str,
            value: ::std::boxed::Box<dyn ::std::any::Any>
        ) -> ::std::result::Result<(), ::std::boxed::Box<dyn ::std::any::Any>> {
            match name {
                #(#names => {
                    self.#idents = *value.downcast::<#types>()?;
                    ::std::result::Result::Ok(())
                })*
                _ => ::std::result::Result::Err(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    #[test]
    fn one_arm_per_field() {
        let input: DeriveInput = syn::parse_quote! {
            pub struct Address {
                pub street: String,
                pub zip: u32,
            }
        };
        let def = MappableDef::from_derive_input(&input).unwrap();
        let code = generate(&def).to_string();
        assert!(code.contains("\"street\" => :: std :: option :: Option :: Some (& self . street"));
        assert!(code.contains("value . downcast :: < u32 > ()"));
        assert!(code.contains("self . zip ="));
    }

    #[test]
    fn empty_struct_only_has_fallback() {
        let input: DeriveInput = syn::parse_quote! {
            pub struct Empty {}
        };
        let def = MappableDef::from_derive_input(&input).unwrap();
        let code = generate(&def).to_string();
        assert!(code.contains("_ => :: std :: option :: Option :: None"));
        assert!(code.contains("_ => :: std :: result :: Result :: Err (value)"));
    }
}
