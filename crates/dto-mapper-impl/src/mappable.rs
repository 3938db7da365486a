// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mappable derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! mappable.rs (orchestrator)
//! │
//! ├── parse/         → Attribute parsing (MappableDef, FieldDef, Shape)
//! │
//! ├── descriptor.rs  → type_descriptor() with its LazyLock table
//! └── access.rs      → field() / set_field() by-name accessors
//! ```
//!
//! # Generated Code
//!
//! For a struct like:
//!
//! ```rust,ignore
//! #[derive(Mappable, Clone, Default)]
//! #[mapper(dto)]
//! pub struct AddressDto {
//!     pub street: String,
//!     pub city: String,
//! }
//! ```
//!
//! the macro emits a single `impl ::dto_mapper::Mappable for AddressDto`
//! whose descriptor is flagged as nested target and instantiable.

mod access;
mod descriptor;
pub mod parse;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::MappableDef;

/// Main entry point for the Mappable derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match MappableDef::from_derive_input(&input) {
        Ok(def) => generate(&def).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(def: &MappableDef) -> TokenStream2 {
    let ident = def.ident();
    let descriptor = descriptor::generate(def);
    let access = access::generate(def);

    quote! {
        impl ::dto_mapper::Mappable for #ident {
            #descriptor
            #access
        }
    }
}
