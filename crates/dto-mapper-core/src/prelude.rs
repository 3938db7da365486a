// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dto_mapper_core::prelude::*;
//! ```

pub use crate::{
    FieldDescriptor, FieldShape, MapError, Mappable, Mapper, Metadata, Registry, RegistryBuilder,
    TypeDescriptor, TypeInfo
};
