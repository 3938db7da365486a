// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping engine.
//!
//! [`Mapper`] exposes the direct entry point ([`Mapper::map`]) and the managed
//! one ([`Mapper::map_managed`]). Both end up in [`Mapper::map_dyn`], which:
//!
//! 1. instantiates the target type,
//! 2. resolves every source field against the target's field index,
//! 3. transfers each resolved value, recursing into nested targets.
//!
//! # Transfer Rules
//!
//! | Target field | Rule |
//! |--------------|------|
//! | nested target `D` | source value mapped recursively into `D` |
//! | `Option<D>`, `D` nested | `None` stays `None`, `Some(s)` is mapped |
//! | `Vec<D>` / `Box<[D]>`, `D` nested | element-wise recursive mapping, same length |
//! | other array | identical element and container types, cloned |
//! | anything else | identical types, cloned |
//!
//! The engine holds no mutable state: one [`Mapper`] can serve any number of
//! threads at once.

use std::any::{Any, type_name};

use tracing::{debug, trace};

use crate::{
    Container, FieldShape, MapError, Mappable, Metadata, Registry, TypeDescriptor, TypeInfo,
    resolve::{Binding, resolve}
};

/// Object mapper driven by a [`Metadata`] collaborator.
///
/// # Example
///
/// ```rust,ignore
/// let mapper = Mapper::new(registry);
///
/// let dto: EmployeeDto = mapper.map(&employee)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mapper<M = Registry> {
    metadata: M
}

impl<M: Metadata> Mapper<M> {
    /// Create a mapper over a metadata collaborator.
    #[must_use]
    pub const fn new(metadata: M) -> Self {
        Self {
            metadata
        }
    }

    /// Metadata collaborator in use.
    #[must_use]
    pub const fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Map `source` into a new `T`.
    ///
    /// # Errors
    ///
    /// Any [`MapError`]; see [`map_dyn`](Self::map_dyn).
    pub fn map<T: Mappable>(&self, source: &dyn Mappable) -> Result<T, MapError> {
        let target = self.map_dyn(source, T::type_descriptor())?;
        downcast_target(target)
    }

    /// Map `source` into the default target its type declares.
    ///
    /// The declared target is looked up before any field is touched.
    ///
    /// # Errors
    ///
    /// - [`MapError::MissingDefaultTarget`] if the source type declares none
    /// - any error of [`map_dyn`](Self::map_dyn)
    pub fn map_managed(&self, source: &dyn Mappable) -> Result<Box<dyn Mappable>, MapError> {
        let source_type = source.descriptor();
        let target = self
            .metadata
            .default_target_for(source_type)
            .ok_or(MapError::MissingDefaultTarget {
                type_name: source_type.ty().name()
            })?;
        self.map_dyn(source, target)
    }

    /// Managed mapping with the result downcast to `T`.
    ///
    /// # Errors
    ///
    /// - [`MapError::UnexpectedTarget`] if the declared target is not `T`
    /// - any error of [`map_managed`](Self::map_managed)
    pub fn map_managed_as<T: Mappable>(&self, source: &dyn Mappable) -> Result<T, MapError> {
        let target = self.map_managed(source)?;
        downcast_target(target)
    }

    /// Map `source` into a new instance of the described target type.
    ///
    /// # Errors
    ///
    /// - [`MapError::Instantiation`] if the target type has no constructor
    /// - [`MapError::EmptyRedirectTag`], [`MapError::AmbiguousRedirect`] from
    ///   field resolution
    /// - [`MapError::TypeMismatch`], [`MapError::ElementTypeMismatch`],
    ///   [`MapError::NullNestedValue`], [`MapError::UnregisteredType`] from
    ///   value transfer, at any nesting depth
    pub fn map_dyn(
        &self,
        source: &dyn Mappable,
        target: &'static TypeDescriptor
    ) -> Result<Box<dyn Mappable>, MapError> {
        let source_type = source.descriptor();
        debug!(
            source = source_type.ty().name(),
            target = target.ty().name(),
            "Mapping"
        );

        let mut instance = target.instantiate().ok_or(MapError::Instantiation {
            type_name: target.ty().name()
        })?;

        for binding in resolve(&self.metadata, source_type, target)? {
            self.transfer(&binding, source, instance.as_mut())?;
        }

        Ok(instance)
    }

    fn transfer(
        &self,
        binding: &Binding,
        source: &dyn Mappable,
        target: &mut dyn Mappable
    ) -> Result<(), MapError> {
        let value = source
            .field(binding.source.name())
            .ok_or_else(|| source_accessor(binding))?;

        let transferred = match binding.target.shape() {
            FieldShape::Array(container) => self.transfer_array(binding, container, value)?,
            _ => self.transfer_value(binding, value)?
        };

        trace!(
            source = binding.source.name(),
            target = binding.target.name(),
            via = ?binding.via,
            "Transferred field"
        );
        target
            .set_field(binding.target.name(), transferred)
            .map_err(|_| target_accessor(binding))
    }

    fn transfer_value(&self, binding: &Binding, value: &dyn Any) -> Result<Box<dyn Any>, MapError> {
        let nested = match binding.target.shape() {
            FieldShape::Optional(container) => container.element(),
            _ => binding.target.ty()
        };
        if self.metadata.is_nested_target(nested.id()) {
            return self.transfer_nested(binding, nested, value);
        }

        if binding.source.ty() != binding.target.ty() {
            return Err(type_mismatch(binding));
        }
        binding
            .source
            .clone_value(value)
            .ok_or_else(|| source_accessor(binding))
    }

    fn transfer_nested(
        &self,
        binding: &Binding,
        nested: TypeInfo,
        value: &dyn Any
    ) -> Result<Box<dyn Any>, MapError> {
        let descriptor = self.registered(nested)?;

        let present = match binding.source.shape() {
            FieldShape::Value => Some(value),
            FieldShape::Optional(container) => container
                .elements(value)
                .ok_or_else(|| source_accessor(binding))?
                .into_iter()
                .next(),
            FieldShape::Array(_) => return Err(type_mismatch(binding))
        };

        match binding.target.shape() {
            FieldShape::Optional(container) => {
                let elements = match present {
                    Some(value) => vec![self.map_value(binding, descriptor, value)?],
                    None => Vec::new()
                };
                container
                    .collect(elements)
                    .ok_or_else(|| target_accessor(binding))
            }
            _ => {
                let value = present.ok_or(MapError::NullNestedValue {
                    source_field: binding.source.name(),
                    target_field: binding.target.name(),
                    target_type:  nested.name()
                })?;
                self.map_value(binding, descriptor, value)
            }
        }
    }

    fn transfer_array(
        &self,
        binding: &Binding,
        container: &Container,
        value: &dyn Any
    ) -> Result<Box<dyn Any>, MapError> {
        let FieldShape::Array(source_container) = binding.source.shape() else {
            return Err(type_mismatch(binding));
        };
        if container.is_multi_dimensional() || source_container.is_multi_dimensional() {
            return Err(element_mismatch(binding, source_container, container));
        }

        let element = container.element();
        if self.metadata.is_nested_target(element.id()) {
            let descriptor = self.registered(element)?;
            let items = source_container
                .elements(value)
                .ok_or_else(|| source_accessor(binding))?;
            let mapped = items
                .into_iter()
                .map(|item| self.map_value(binding, descriptor, item))
                .collect::<Result<Vec<_>, _>>()?;
            return container
                .collect(mapped)
                .ok_or_else(|| target_accessor(binding));
        }

        if source_container.element() != element {
            return Err(element_mismatch(binding, source_container, container));
        }
        if binding.source.ty() != binding.target.ty() {
            return Err(type_mismatch(binding));
        }
        binding
            .source
            .clone_value(value)
            .ok_or_else(|| source_accessor(binding))
    }

    /// Recursively map one nested source value.
    fn map_value(
        &self,
        binding: &Binding,
        target: &'static TypeDescriptor,
        value: &dyn Any
    ) -> Result<Box<dyn Any>, MapError> {
        let source = self
            .metadata
            .descriptor_of(value.type_id())
            .and_then(|descriptor| descriptor.reflect(value))
            .ok_or(MapError::UnregisteredType {
                type_name: declared_element(binding).name()
            })?;
        let mapped: Box<dyn Any> = self.map_dyn(source, target)?;
        Ok(mapped)
    }

    fn registered(&self, ty: TypeInfo) -> Result<&'static TypeDescriptor, MapError> {
        self.metadata
            .descriptor_of(ty.id())
            .ok_or(MapError::UnregisteredType {
                type_name: ty.name()
            })
    }
}

fn downcast_target<T: Mappable>(target: Box<dyn Mappable>) -> Result<T, MapError> {
    let actual = target.descriptor().ty().name();
    target
        .downcast::<T>()
        .map(|target| *target)
        .map_err(|_| MapError::UnexpectedTarget {
            expected: type_name::<T>(),
            actual
        })
}

fn declared_element(binding: &Binding) -> TypeInfo {
    binding
        .source
        .shape()
        .container()
        .map_or(binding.source.ty(), Container::element)
}

fn type_mismatch(binding: &Binding) -> MapError {
    MapError::TypeMismatch {
        source_field: binding.source.name(),
        source_type:  binding.source.ty().name(),
        target_field: binding.target.name(),
        target_type:  binding.target.ty().name()
    }
}

fn element_mismatch(binding: &Binding, source: &Container, target: &Container) -> MapError {
    MapError::ElementTypeMismatch {
        source_field:   binding.source.name(),
        source_element: source.element().name(),
        target_field:   binding.target.name(),
        target_element: target.element().name()
    }
}

fn source_accessor(binding: &Binding) -> MapError {
    MapError::Accessor {
        type_name: binding.source_type.ty().name(),
        field:     binding.source.name()
    }
}

fn target_accessor(binding: &Binding) -> MapError {
    MapError::Accessor {
        type_name: binding.target_type.ty().name(),
        field:     binding.target.name()
    }
}
