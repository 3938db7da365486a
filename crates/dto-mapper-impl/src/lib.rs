// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Type-Level `#[mapper(...)]`
//!
//! ```rust,ignore
//! #[derive(Mappable, Default, Clone)]
//! #[mapper(
//!     dto,                           // Optional: nested target, built through Default
//!     instantiable,                  // Optional: built through Default, not nested
//!     mapped_with = "EmployeeDto"    // Optional: default target for managed mapping
//! )]
//! pub struct Employee { /* ... */ }
//! ```
//!
//! ## Field-Level `#[map(...)]`
//!
//! ```rust,ignore
//! pub struct Employee {
//!     #[map(redirect = "taxId")]     // Copied to the target field referencing "taxId"
//!     pub ssn: String,
//! }
//!
//! pub struct EmployeeDto {
//!     #[map(reference = "taxId")]    // Answers the "taxId" redirect
//!     pub tax_id: String,
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Generated item | Description |
//! |----------------|-------------|
//! | `impl Mappable` | Descriptor lookup and by-name field access |
//! | `static DESCRIPTOR` | `LazyLock<TypeDescriptor>` built on first use |

mod mappable;

use proc_macro::TokenStream;

/// Derive `dto_mapper::Mappable` for a struct with named fields.
///
/// # Type Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `dto` | Valid nested mapping destination. Requires `Default`. |
/// | `instantiable` | Can be created by the mapper. Requires `Default`. |
/// | `mapped_with = "Path"` | Default target of `Mapper::map_managed`. |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[map(redirect = "tag")]` | Copy into the target field referencing `tag` instead of the same-named field. |
/// | `#[map(reference = "tag")]` | Receive values redirected with `tag`. |
///
/// Every field type must be `Clone + 'static`. `Option<T>`, `Vec<T>` and
/// `Box<[T]>` fields are recognised syntactically; a `Vec<Vec<T>>` or similar
/// nesting is recorded as multi-dimensional and refused by the mapper.
///
/// # Rejected Input
///
/// Enums, tuple and unit structs, generic structs, blank tags and unknown
/// `#[map(...)]` keys fail to compile.
///
/// # Example
///
/// ```rust,ignore
/// use dto_mapper::Mappable;
///
/// #[derive(Mappable, Debug, Clone, Default)]
/// #[mapper(mapped_with = "EmployeeDto")]
/// pub struct Employee {
///     pub name: String,
///     #[map(redirect = "taxId")]
///     pub ssn: String,
///     pub address: Address,
///     pub internal_notes: String,
/// }
///
/// #[derive(Mappable, Debug, Clone, Default)]
/// #[mapper(instantiable)]
/// pub struct EmployeeDto {
///     pub name: String,
///     #[map(reference = "taxId")]
///     pub tax_id: String,
///     pub address: AddressDto,
/// }
/// ```
#[proc_macro_derive(Mappable, attributes(mapper, map))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    mappable::derive(input)
}
