// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! Redirects are declared with `#[map(...)]`:
//!
//! ```rust,ignore
//! #[map(redirect = "taxId")]   // source side
//! pub ssn: String,
//!
//! #[map(reference = "taxId")]  // target side
//! pub tax_id: String,
//! ```
//!
//! A field may carry both keys: it then redirects when it is read and answers
//! the tag when it is written.

use syn::{Attribute, Field, Ident, LitStr, Type};

use super::Shape;

/// Field definition with its parsed `#[map(...)]` configuration.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Declared field type.
    pub ty: Type,

    /// Structural shape of [`ty`](Self::ty).
    pub shape: Shape,

    /// Outgoing redirect tag (`#[map(redirect = "...")]`).
    pub redirect: Option<LitStr>,

    /// Incoming redirect tag (`#[map(reference = "...")]`).
    pub reference: Option<LitStr>
}

impl FieldDef {
    /// Parse a named struct field.
    ///
    /// # Errors
    ///
    /// - the field is unnamed
    /// - `#[map(...)]` holds an unknown or repeated key
    /// - a tag is blank
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Mappable fields must be named").with_span(field)
        })?;

        let mut redirect = None;
        let mut reference = None;
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("map")) {
            parse_map_attr(attr, &mut redirect, &mut reference)?;
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            shape: Shape::of(&field.ty),
            redirect,
            reference
        })
    }

    /// Field name as written in the struct.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }
}

fn parse_map_attr(
    attr: &Attribute,
    redirect: &mut Option<LitStr>,
    reference: &mut Option<LitStr>
) -> darling::Result<()> {
    attr.parse_nested_meta(|meta| {
        let slot = if meta.path.is_ident("redirect") {
            &mut *redirect
        } else if meta.path.is_ident("reference") {
            &mut *reference
        } else {
            return Err(meta.error("unknown map attribute; expected `redirect` or `reference`"));
        };

        if slot.is_some() {
            return Err(meta.error("duplicate map attribute"));
        }

        let tag: LitStr = meta.value()?.parse()?;
        if tag.value().trim().is_empty() {
            return Err(syn::Error::new_spanned(&tag, "map tag must not be blank"));
        }
        *slot = Some(tag);
        Ok(())
    })
    .map_err(darling::Error::from)
}
