// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and runtime for dto-mapper.
//!
//! This crate provides the descriptor tables, the metadata registry and the
//! mapping engine used by `#[derive(Mappable)]` generated code. It can also be
//! used standalone with hand-written [`Mappable`] implementations.
//!
//! # Overview
//!
//! - [`Mappable`] - Field access over a static [`TypeDescriptor`]
//! - [`Metadata`] - Capability lookup queried by the engine
//! - [`Registry`] - Default [`Metadata`] implementation keyed by type identity
//! - [`Mapper`] - Direct and managed entry points
//! - [`MapError`] - Every way a mapping call can fail
//! - [`prelude`] - Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `dto-mapper` directly, which re-exports this crate.
//!
//! ```rust,ignore
//! use dto_mapper_core::prelude::*;
//!
//! let registry = Registry::builder()
//!     .register::<Employee>()
//!     .register::<EmployeeDto>()
//!     .register::<Address>()
//!     .register::<AddressDto>()
//!     .build();
//! let mapper = Mapper::new(registry);
//!
//! let dto: EmployeeDto = mapper.map(&employee)?;
//! let managed = mapper.map_managed(&employee)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::{any::Any, fmt};

pub mod descriptor;
pub mod error;
pub mod mapper;
pub mod metadata;
pub mod prelude;
mod resolve;

#[cfg(test)]
mod testing;

pub use descriptor::{
    Container, ContainerKind, FieldDescriptor, FieldShape, TypeDescriptor, TypeInfo
};
pub use error::MapError;
pub use mapper::Mapper;
pub use metadata::{Metadata, Registry, RegistryBuilder};

/// A type whose declared fields can be read and written by name.
///
/// Generated by `#[derive(Mappable)]`. Hand-written implementations must keep
/// the accessors consistent with the descriptor: [`field`](Self::field)
/// returns the value of every declared field as its declared type, and
/// [`set_field`](Self::set_field) accepts exactly that type back.
///
/// # Example
///
/// ```rust,ignore
/// impl Mappable for Address {
///     fn type_descriptor() -> &'static TypeDescriptor {
///         static DESCRIPTOR: LazyLock<TypeDescriptor> = LazyLock::new(|| {
///             TypeDescriptor::of::<Address>(vec![
///                 FieldDescriptor::new::<String>("city", FieldShape::value()),
///             ])
///         });
///         &DESCRIPTOR
///     }
///
///     fn descriptor(&self) -> &'static TypeDescriptor {
///         Self::type_descriptor()
///     }
///
///     fn field(&self, name: &str) -> Option<&dyn Any> {
///         match name {
///             "city" => Some(&self.city),
///             _ => None
///         }
///     }
///
///     fn set_field(&mut self, name: &str, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
///         match name {
///             "city" => {
///                 self.city = *value.downcast::<String>()?;
///                 Ok(())
///             }
///             _ => Err(value)
///         }
///     }
/// }
/// ```
pub trait Mappable: Any + 'static {
    /// Descriptor of the implementing type.
    fn type_descriptor() -> &'static TypeDescriptor
    where
        Self: Sized;

    /// Descriptor of the value's concrete type.
    fn descriptor(&self) -> &'static TypeDescriptor;

    /// Borrow a declared field by name.
    fn field(&self, name: &str) -> Option<&dyn Any>;

    /// Replace a declared field by name.
    ///
    /// # Errors
    ///
    /// Hands `value` back if the field does not exist or `value` is not of
    /// the field's declared type.
    fn set_field(&mut self, name: &str, value: Box<dyn Any>) -> Result<(), Box<dyn Any>>;
}

impl dyn Mappable {
    /// Check whether the concrete type is `T`.
    #[must_use]
    pub fn is<T: Mappable>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Borrow as the concrete type `T`.
    #[must_use]
    pub fn downcast_ref<T: Mappable>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Take ownership as the concrete type `T`.
    ///
    /// # Errors
    ///
    /// Returns the value, type-erased, if it is not a `T`.
    pub fn downcast<T: Mappable>(self: Box<Self>) -> Result<Box<T>, Box<dyn Any>> {
        let any: Box<dyn Any> = self;
        any.downcast::<T>()
    }
}

impl fmt::Debug for dyn Mappable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mappable")
            .field(&self.descriptor().ty())
            .finish()
    }
}
