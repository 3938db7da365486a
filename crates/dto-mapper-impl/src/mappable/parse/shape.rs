// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Syntactic shape detection for field types.
//!
//! | Written type | Shape |
//! |--------------|-------|
//! | `Option<T>` | [`Shape::Optional`] |
//! | `Vec<T>` | [`Shape::Vec`] |
//! | `Box<[T]>` | [`Shape::BoxedSlice`] |
//! | anything else, including `[T; N]` | [`Shape::Value`] |
//!
//! Detection looks at the last path segment only, so `std::vec::Vec<T>` and a
//! bare `Vec<T>` are treated alike. A type alias hiding one of these
//! containers is seen as a plain value.

use syn::{GenericArgument, PathArguments, Type};

/// Shape of a field type.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Single value.
    Value,

    /// `Option<T>` with its element type.
    Optional(Type),

    /// `Vec<T>` with its element type.
    Vec {
        /// Element type.
        element: Type,
        /// Element is itself an array.
        jagged:  bool
    },

    /// `Box<[T]>` with its element type.
    BoxedSlice {
        /// Element type.
        element: Type,
        /// Element is itself an array.
        jagged:  bool
    }
}

impl Shape {
    /// Detect the shape of `ty`.
    #[must_use]
    pub fn of(ty: &Type) -> Self {
        if let Some(element) = generic_arg(ty, "Option") {
            return Self::Optional(element.clone());
        }
        if let Some(element) = generic_arg(ty, "Vec") {
            return Self::Vec {
                element: element.clone(),
                jagged:  is_array_like(element)
            };
        }
        if let Some(Type::Slice(slice)) = generic_arg(ty, "Box") {
            let element = slice.elem.as_ref();
            return Self::BoxedSlice {
                element: element.clone(),
                jagged:  is_array_like(element)
            };
        }
        Self::Value
    }
}

/// Single type argument of a path type whose last segment is `wrapper`.
fn generic_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None
    });
    match (types.next(), types.next()) {
        (Some(ty), None) => Some(ty),
        _ => None
    }
}

fn is_array_like(ty: &Type) -> bool {
    match ty {
        Type::Array(_) | Type::Slice(_) => true,
        Type::Group(group) => is_array_like(&group.elem),
        Type::Paren(paren) => is_array_like(&paren.elem),
        _ => {
            generic_arg(ty, "Vec").is_some()
                || matches!(generic_arg(ty, "Box"), Some(Type::Slice(_)))
        }
    }
}
