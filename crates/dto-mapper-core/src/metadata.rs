// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata collaborator and the default type registry.
//!
//! The engine never inspects declarations itself; it asks a [`Metadata`]
//! implementation. [`Registry`] answers from the descriptor tables of the
//! types registered with it:
//!
//! ```rust,ignore
//! let registry = Registry::builder()
//!     .register::<Address>()
//!     .register::<AddressDto>()
//!     .build();
//!
//! assert!(registry.is_nested_target(TypeId::of::<AddressDto>()));
//! ```
//!
//! Every type that takes part in a recursive mapping has to be registered:
//! nested targets so the engine can construct them, nested sources so the
//! engine can read their fields.

use std::{
    any::TypeId,
    collections::HashMap,
    sync::Arc
};

use tracing::debug;

use crate::{FieldDescriptor, Mappable, TypeDescriptor};

/// Capability lookup consulted by the mapping engine.
///
/// Only [`descriptor_of`](Self::descriptor_of) is required; the other
/// queries default to what the descriptors themselves declare.
pub trait Metadata {
    /// Descriptor of a registered type.
    fn descriptor_of(&self, ty: TypeId) -> Option<&'static TypeDescriptor>;

    /// Whether `ty` is a valid nested mapping destination.
    fn is_nested_target(&self, ty: TypeId) -> bool {
        self.descriptor_of(ty)
            .is_some_and(TypeDescriptor::is_nested_target)
    }

    /// Default target declared by a source type.
    fn default_target_for(&self, source: &TypeDescriptor) -> Option<&'static TypeDescriptor> {
        source.default_target()
    }

    /// Outgoing redirect tag of a source field.
    fn redirect_tag_of<'a>(&self, field: &'a FieldDescriptor) -> Option<&'a str> {
        field.redirect_tag()
    }

    /// Incoming redirect tag of a target field.
    fn incoming_redirect_tag_of<'a>(&self, field: &'a FieldDescriptor) -> Option<&'a str> {
        field.reference_tag()
    }
}

impl<M: Metadata + ?Sized> Metadata for &M {
    fn descriptor_of(&self, ty: TypeId) -> Option<&'static TypeDescriptor> {
        (**self).descriptor_of(ty)
    }

    fn is_nested_target(&self, ty: TypeId) -> bool {
        (**self).is_nested_target(ty)
    }

    fn default_target_for(&self, source: &TypeDescriptor) -> Option<&'static TypeDescriptor> {
        (**self).default_target_for(source)
    }

    fn redirect_tag_of<'a>(&self, field: &'a FieldDescriptor) -> Option<&'a str> {
        (**self).redirect_tag_of(field)
    }

    fn incoming_redirect_tag_of<'a>(&self, field: &'a FieldDescriptor) -> Option<&'a str> {
        (**self).incoming_redirect_tag_of(field)
    }
}

impl<M: Metadata + ?Sized> Metadata for Arc<M> {
    fn descriptor_of(&self, ty: TypeId) -> Option<&'static TypeDescriptor> {
        (**self).descriptor_of(ty)
    }

    fn is_nested_target(&self, ty: TypeId) -> bool {
        (**self).is_nested_target(ty)
    }

    fn default_target_for(&self, source: &TypeDescriptor) -> Option<&'static TypeDescriptor> {
        (**self).default_target_for(source)
    }

    fn redirect_tag_of<'a>(&self, field: &'a FieldDescriptor) -> Option<&'a str> {
        (**self).redirect_tag_of(field)
    }

    fn incoming_redirect_tag_of<'a>(&self, field: &'a FieldDescriptor) -> Option<&'a str> {
        (**self).incoming_redirect_tag_of(field)
    }
}

/// Immutable set of type descriptors keyed by type identity.
///
/// Built once with [`Registry::builder`]; safe to share between threads.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    types: HashMap<TypeId, &'static TypeDescriptor>
}

impl Registry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no type is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether `T` is registered.
    #[must_use]
    pub fn contains<T: Mappable>(&self) -> bool {
        self.types.contains_key(&TypeId::of::<T>())
    }
}

impl Metadata for Registry {
    fn descriptor_of(&self, ty: TypeId) -> Option<&'static TypeDescriptor> {
        self.types.get(&ty).copied()
    }
}

/// Builder for [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    types: HashMap<TypeId, &'static TypeDescriptor>
}

impl RegistryBuilder {
    /// Register `T`.
    #[must_use]
    pub fn register<T: Mappable>(self) -> Self {
        self.register_descriptor(T::type_descriptor())
    }

    /// Register a descriptor directly.
    ///
    /// Registering the same type twice keeps a single entry.
    #[must_use]
    pub fn register_descriptor(mut self, descriptor: &'static TypeDescriptor) -> Self {
        debug!(
            ty = descriptor.ty().name(),
            fields = descriptor.fields().len(),
            nested_target = descriptor.is_nested_target(),
            "Registered mappable type"
        );
        self.types.insert(descriptor.ty().id(), descriptor);
        self
    }

    /// Finish the registry.
    #[must_use]
    pub fn build(self) -> Registry {
        Registry {
            types: self.types
        }
    }
}
