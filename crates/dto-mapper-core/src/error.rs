// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping errors.
//!
//! Every variant is fatal for the whole mapping call, including recursive
//! calls still in flight. Apart from [`MapError::NullNestedValue`], which
//! depends on the data being mapped, all of them point at a descriptor
//! authoring mistake and carry enough context to fix it.

use thiserror::Error;

/// Error returned by [`Mapper`](crate::Mapper) entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The target type has no constructor.
    #[error(
        "type `{type_name}` cannot be instantiated; derive it with #[mapper(dto)] or \
         #[mapper(instantiable)] and implement Default"
    )]
    Instantiation {
        /// Target type.
        type_name: &'static str
    },

    /// The managed entry point was used on a type without a default target.
    #[error("type `{type_name}` declares no default target; add #[mapper(mapped_with = \"Target\")]")]
    MissingDefaultTarget {
        /// Source type.
        type_name: &'static str
    },

    /// A redirect tag was declared but is blank.
    #[error("field `{field}` of `{type_name}` declares a blank redirect tag")]
    EmptyRedirectTag {
        /// Source type.
        type_name: &'static str,
        /// Source field carrying the tag.
        field:     &'static str
    },

    /// Zero or several target fields answer a redirect tag.
    #[error(
        "expected exactly one field of `{target_type}` referencing tag `{tag}` declared on \
         `{source_type}.{field}`, found {matches}"
    )]
    AmbiguousRedirect {
        /// Redirect tag.
        tag:         &'static str,
        /// Source type.
        source_type: &'static str,
        /// Source field carrying the tag.
        field:       &'static str,
        /// Target type searched.
        target_type: &'static str,
        /// Number of target fields answering the tag.
        matches:     usize
    },

    /// A resolved field pair has incompatible types.
    #[error(
        "field `{source_field}` has type `{source_type}` but target field `{target_field}` has \
         type `{target_type}`; declare a redirect if the names match by accident"
    )]
    TypeMismatch {
        /// Source field.
        source_field: &'static str,
        /// Source field type.
        source_type:  &'static str,
        /// Target field.
        target_field: &'static str,
        /// Target field type.
        target_type:  &'static str
    },

    /// A resolved array pair has incompatible or multi-dimensional element
    /// types.
    #[error(
        "array field `{source_field}` holds `{source_element}` but target field \
         `{target_field}` holds `{target_element}`; map to the right field with a redirect or \
         rename one of them"
    )]
    ElementTypeMismatch {
        /// Source field.
        source_field:   &'static str,
        /// Source element type.
        source_element: &'static str,
        /// Target field.
        target_field:   &'static str,
        /// Target element type.
        target_element: &'static str
    },

    /// A `None` source value met a non-optional nested target field.
    #[error(
        "field `{source_field}` is None but target field `{target_field}` of nested type \
         `{target_type}` is not optional"
    )]
    NullNestedValue {
        /// Source field.
        source_field: &'static str,
        /// Target field.
        target_field: &'static str,
        /// Nested target type.
        target_type:  &'static str
    },

    /// A type taking part in a recursive mapping is not registered.
    #[error("type `{type_name}` takes part in a nested mapping but is not registered")]
    UnregisteredType {
        /// Missing type.
        type_name: &'static str
    },

    /// A field accessor disagrees with its descriptor.
    #[error("accessor for field `{field}` of `{type_name}` does not match its descriptor")]
    Accessor {
        /// Owning type.
        type_name: &'static str,
        /// Field name.
        field:     &'static str
    },

    /// A mapping produced a different type than requested.
    #[error("mapping produced `{actual}` but `{expected}` was requested")]
    UnexpectedTarget {
        /// Requested type.
        expected: &'static str,
        /// Produced type.
        actual:   &'static str
    }
}

impl MapError {
    /// Check if the error comes from descriptor authoring rather than from
    /// the mapped data.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        !matches!(self, Self::NullNestedValue { .. })
    }

    /// Check if this is a scalar or element type incompatibility.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::ElementTypeMismatch { .. })
    }
}
