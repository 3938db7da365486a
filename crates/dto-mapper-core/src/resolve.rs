// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field resolution: pairing source fields with target fields.
//!
//! Resolution runs to completion before any value moves, so a blank or
//! ambiguous redirect tag is reported no matter where it sits among the
//! source fields.

use tracing::trace;

use crate::{FieldDescriptor, MapError, Metadata, TypeDescriptor};

/// How a binding was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Via {
    /// Source redirect tag answered by a target reference tag.
    Redirect(&'static str),

    /// Identical field names.
    Name
}

/// One resolved (source field, target field) pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Binding {
    pub source_type: &'static TypeDescriptor,
    pub target_type: &'static TypeDescriptor,
    pub source:      &'static FieldDescriptor,
    pub target:      &'static FieldDescriptor,
    pub via:         Via
}

/// Resolve every source field against the target type, in declaration
/// order.
///
/// Redirect-tagged fields only ever resolve through their tag; untagged
/// fields resolve by name or are skipped.
///
/// # Errors
///
/// - [`MapError::EmptyRedirectTag`] for a blank tag on any source field
/// - [`MapError::AmbiguousRedirect`] when a tag matches zero or several
///   target fields
pub(crate) fn resolve<M: Metadata + ?Sized>(
    metadata: &M,
    source_type: &'static TypeDescriptor,
    target_type: &'static TypeDescriptor
) -> Result<Vec<Binding>, MapError> {
    let source_fields = source_type.fields();

    for field in source_fields {
        if metadata
            .redirect_tag_of(field)
            .is_some_and(|tag| tag.trim().is_empty())
        {
            return Err(MapError::EmptyRedirectTag {
                type_name: source_type.ty().name(),
                field:     field.name()
            });
        }
    }

    let mut bindings = Vec::with_capacity(source_fields.len());
    for field in source_fields {
        let resolved = match metadata.redirect_tag_of(field) {
            Some(tag) => {
                let target = by_redirect(metadata, source_type, target_type, field, tag)?;
                Some((target, Via::Redirect(tag)))
            }
            None => target_type
                .field(field.name())
                .map(|target| (target, Via::Name))
        };

        match resolved {
            Some((target, via)) => {
                trace!(
                    source = field.name(),
                    target = target.name(),
                    ?via,
                    "Resolved field"
                );
                bindings.push(Binding {
                    source_type,
                    target_type,
                    source: field,
                    target,
                    via
                });
            }
            None => trace!(field = field.name(), "Skipped unmatched source field")
        }
    }

    Ok(bindings)
}

fn by_redirect<M: Metadata + ?Sized>(
    metadata: &M,
    source_type: &'static TypeDescriptor,
    target_type: &'static TypeDescriptor,
    field: &'static FieldDescriptor,
    tag: &'static str
) -> Result<&'static FieldDescriptor, MapError> {
    let mut matches = target_type
        .fields()
        .iter()
        .filter(|candidate| metadata.incoming_redirect_tag_of(candidate) == Some(tag));

    match (matches.next(), matches.next()) {
        (Some(target), None) => Ok(target),
        (first, second) => {
            let found =
                usize::from(first.is_some()) + usize::from(second.is_some()) + matches.count();
            Err(MapError::AmbiguousRedirect {
                tag,
                source_type: source_type.ty().name(),
                field: field.name(),
                target_type: target_type.ty().name(),
                matches: found
            })
        }
    }
}
