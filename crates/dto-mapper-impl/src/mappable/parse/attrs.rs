// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `dto` | No | `false` | Nested mapping destination |
//! | `instantiable` | No | `false` | Created through `Default` |
//! | `mapped_with` | No | none | Default target type path |

use darling::FromDeriveInput;
use syn::{Generics, Ident, Path};

/// Type-level attributes parsed from `#[mapper(...)]`.
///
/// Internal to the parse layer; [`MappableDef`](super::MappableDef) combines
/// them with the parsed fields.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(mapper), supports(struct_named))]
pub struct MapperAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Generic parameters; must be empty.
    pub generics: Generics,

    /// `#[mapper(dto)]`.
    #[darling(default)]
    pub dto: bool,

    /// `#[mapper(instantiable)]`.
    #[darling(default)]
    pub instantiable: bool,

    /// `#[mapper(mapped_with = "Target")]`.
    #[darling(default)]
    pub mapped_with: Option<Path>
}
