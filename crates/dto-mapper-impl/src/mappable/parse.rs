// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for `#[derive(Mappable)]`.
//!
//! # Module Structure
//!
//! ```text
//! parse.rs (coordinator, MappableDef)
//! ├── attrs.rs  - MapperAttrs (darling, #[mapper(...)])
//! ├── field.rs  - FieldDef (#[map(...)])
//! └── shape.rs  - Shape detection (Option / Vec / Box<[T]>)
//! ```

mod attrs;
mod field;
mod shape;

use darling::FromDeriveInput;
pub use field::FieldDef;
pub use shape::Shape;
use syn::{DeriveInput, Ident, Path};

use self::attrs::MapperAttrs;

/// Parsed `#[derive(Mappable)]` input.
#[derive(Debug)]
pub struct MappableDef {
    ident:        Ident,
    dto:          bool,
    instantiable: bool,
    mapped_with:  Option<Path>,
    fields:       Vec<FieldDef>
}

impl MappableDef {
    /// Parse the derive input.
    ///
    /// # Errors
    ///
    /// - the input is not a struct with named fields
    /// - the struct has generic parameters
    /// - an attribute is unknown or malformed; every field error is reported
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = MapperAttrs::from_derive_input(input)?;

        if !attrs.generics.params.is_empty() {
            return Err(darling::Error::custom(
                "Mappable cannot be derived for generic structs; map a concrete wrapper instead"
            )
            .with_span(&attrs.generics));
        }

        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named,
                _ => {
                    return Err(darling::Error::custom("Mappable requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Mappable can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let mut errors = darling::Error::accumulator();
        let fields = named
            .named
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .collect();
        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            dto: attrs.dto,
            instantiable: attrs.instantiable,
            mapped_with: attrs.mapped_with,
            fields
        })
    }

    /// Struct identifier.
    #[must_use]
    pub fn ident(&self) -> &Ident {
        &self.ident
    }

    /// Whether the type is a nested mapping destination.
    #[must_use]
    pub fn is_nested_target(&self) -> bool {
        self.dto
    }

    /// Whether the mapper may create the type through `Default`.
    ///
    /// Nested targets are always instantiable.
    #[must_use]
    pub fn is_instantiable(&self) -> bool {
        self.dto || self.instantiable
    }

    /// Default target for managed mapping.
    #[must_use]
    pub fn mapped_with(&self) -> Option<&Path> {
        self.mapped_with.as_ref()
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}
