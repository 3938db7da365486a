// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static type and field descriptor tables.
//!
//! Every [`Mappable`](crate::Mappable) type owns exactly one
//! [`TypeDescriptor`], built on first use and never mutated afterwards. The
//! derive macro generates it; hand-written implementations build one with the
//! same builder API:
//!
//! ```rust,ignore
//! static DESCRIPTOR: LazyLock<TypeDescriptor> = LazyLock::new(|| {
//!     TypeDescriptor::of::<Employee>(vec![
//!         FieldDescriptor::new::<String>("name", FieldShape::value()),
//!         FieldDescriptor::new::<String>("ssn", FieldShape::value()).redirect("taxId"),
//!         FieldDescriptor::new::<Vec<Address>>("addresses", FieldShape::vec::<Address>()),
//!     ])
//!     .mapped_with(EmployeeDto::type_descriptor)
//! });
//! ```
//!
//! # Shapes
//!
//! | Rust type | Shape |
//! |-----------|-------|
//! | `T`, `[T; N]` | [`FieldShape::Value`] |
//! | `Option<T>` | [`FieldShape::Optional`] |
//! | `Vec<T>`, `Box<[T]>` | [`FieldShape::Array`] |

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt
};

use crate::Mappable;

/// Identity and display name of a Rust type.
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id:   TypeId,
    name: &'static str
}

impl TypeInfo {
    /// Describe `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id:   TypeId::of::<T>(),
            name: type_name::<T>()
        }
    }

    /// Type identity used for compatibility checks.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, for diagnostics only.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Kind of container behind an optional or array field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// `Option<T>`.
    Option,

    /// `Vec<T>`.
    Vec,

    /// `Box<[T]>`.
    BoxedSlice
}

/// Type-erased view over a container field.
///
/// `elements` borrows the contained values in order, `collect` rebuilds the
/// container from owned values of the element type. Both return `None` when
/// handed a value of the wrong type.
#[derive(Clone, Copy)]
pub struct Container {
    kind:     ContainerKind,
    element:  TypeInfo,
    jagged:   bool,
    elements: fn(&dyn Any) -> Option<Vec<&dyn Any>>,
    collect:  fn(Vec<Box<dyn Any>>) -> Option<Box<dyn Any>>
}

impl Container {
    /// Container kind.
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Element type.
    #[must_use]
    pub const fn element(&self) -> TypeInfo {
        self.element
    }

    /// Whether the element type is itself an array (`Vec<Vec<T>>` and
    /// friends).
    #[must_use]
    pub const fn is_multi_dimensional(&self) -> bool {
        self.jagged
    }

    /// Borrow the elements of a container value.
    #[must_use]
    pub fn elements<'a>(&self, value: &'a dyn Any) -> Option<Vec<&'a dyn Any>> {
        (self.elements)(value)
    }

    /// Build a container value from owned elements.
    #[must_use]
    pub fn collect(&self, elements: Vec<Box<dyn Any>>) -> Option<Box<dyn Any>> {
        (self.collect)(elements)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("kind", &self.kind)
            .field("element", &self.element)
            .field("jagged", &self.jagged)
            .finish()
    }
}

/// Structural shape of a field type.
#[derive(Debug, Clone, Copy)]
pub enum FieldShape {
    /// Any type handled as a single value.
    Value,

    /// `Option<T>`: zero or one value of the element type.
    Optional(Container),

    /// `Vec<T>` or `Box<[T]>`: runtime-sized array of the element type.
    Array(Container)
}

impl FieldShape {
    /// Plain value shape.
    #[must_use]
    pub const fn value() -> Self {
        Self::Value
    }

    /// Shape of `Option<T>`.
    #[must_use]
    pub fn optional<T: 'static>() -> Self {
        Self::Optional(Container {
            kind:     ContainerKind::Option,
            element:  TypeInfo::of::<T>(),
            jagged:   false,
            elements: option_elements::<T>,
            collect:  option_collect::<T>
        })
    }

    /// Shape of `Vec<T>`.
    ///
    /// Marked multi-dimensional when `T` is itself `Vec`, `Box<[_]>` or
    /// `[_; N]`.
    #[must_use]
    pub fn vec<T: 'static>() -> Self {
        Self::Array(Container {
            kind:     ContainerKind::Vec,
            element:  TypeInfo::of::<T>(),
            jagged:   is_array_type::<T>(),
            elements: vec_elements::<T>,
            collect:  vec_collect::<T>
        })
    }

    /// Shape of `Box<[T]>`.
    ///
    /// Element arrays are detected as for [`vec`](Self::vec).
    #[must_use]
    pub fn boxed_slice<T: 'static>() -> Self {
        Self::Array(Container {
            kind:     ContainerKind::BoxedSlice,
            element:  TypeInfo::of::<T>(),
            jagged:   is_array_type::<T>(),
            elements: boxed_slice_elements::<T>,
            collect:  boxed_slice_collect::<T>
        })
    }

    /// Mark an array shape whose element type is itself an array.
    ///
    /// Needed only for element arrays [`vec`](Self::vec) does not recognise.
    /// Has no effect on other shapes.
    #[must_use]
    pub const fn multi_dimensional(self) -> Self {
        match self {
            Self::Array(mut container) => {
                container.jagged = true;
                Self::Array(container)
            }
            other => other
        }
    }

    /// Whether this is an array shape.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Container view, if the shape is optional or array.
    #[must_use]
    pub const fn container(&self) -> Option<&Container> {
        match self {
            Self::Value => None,
            Self::Optional(container) | Self::Array(container) => Some(container)
        }
    }
}

fn is_array_type<T: 'static>() -> bool {
    let name = type_name::<T>();
    name.starts_with('[')
        || name.starts_with("alloc::vec::Vec<")
        || name.starts_with("alloc::boxed::Box<[")
}

fn option_elements<T: 'static>(value: &dyn Any) -> Option<Vec<&dyn Any>> {
    value
        .downcast_ref::<Option<T>>()
        .map(|option| option.iter().map(|item| item as &dyn Any).collect())
}

fn option_collect<T: 'static>(elements: Vec<Box<dyn Any>>) -> Option<Box<dyn Any>> {
    let mut elements = elements.into_iter();
    let value: Option<T> = match elements.next() {
        Some(first) => Some(*first.downcast::<T>().ok()?),
        None => None
    };
    if elements.next().is_some() {
        return None;
    }
    Some(Box::new(value))
}

fn vec_elements<T: 'static>(value: &dyn Any) -> Option<Vec<&dyn Any>> {
    value
        .downcast_ref::<Vec<T>>()
        .map(|items| items.iter().map(|item| item as &dyn Any).collect())
}

fn downcast_all<T: 'static>(elements: Vec<Box<dyn Any>>) -> Option<Vec<T>> {
    elements
        .into_iter()
        .map(|item| item.downcast::<T>().ok().map(|item| *item))
        .collect()
}

fn vec_collect<T: 'static>(elements: Vec<Box<dyn Any>>) -> Option<Box<dyn Any>> {
    downcast_all::<T>(elements).map(|items| Box::new(items) as Box<dyn Any>)
}

fn boxed_slice_elements<T: 'static>(value: &dyn Any) -> Option<Vec<&dyn Any>> {
    value
        .downcast_ref::<Box<[T]>>()
        .map(|items| items.iter().map(|item| item as &dyn Any).collect())
}

fn boxed_slice_collect<T: 'static>(elements: Vec<Box<dyn Any>>) -> Option<Box<dyn Any>> {
    downcast_all::<T>(elements).map(|items| Box::new(items.into_boxed_slice()) as Box<dyn Any>)
}

fn clone_any<T: Clone + 'static>(value: &dyn Any) -> Option<Box<dyn Any>> {
    value
        .downcast_ref::<T>()
        .map(|value| Box::new(value.clone()) as Box<dyn Any>)
}

/// Descriptor of one declared field.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    name:      &'static str,
    ty:        TypeInfo,
    shape:     FieldShape,
    redirect:  Option<&'static str>,
    reference: Option<&'static str>,
    clone:     fn(&dyn Any) -> Option<Box<dyn Any>>
}

impl FieldDescriptor {
    /// Describe a field of type `T`.
    ///
    /// `T` must be `Clone`: verbatim transfers copy the value out of the
    /// source.
    #[must_use]
    pub fn new<T: Clone + 'static>(name: &'static str, shape: FieldShape) -> Self {
        Self {
            name,
            ty: TypeInfo::of::<T>(),
            shape,
            redirect: None,
            reference: None,
            clone: clone_any::<T>
        }
    }

    /// Declare the outgoing redirect tag (`#[map(redirect = "...")]`).
    #[must_use]
    pub const fn redirect(mut self, tag: &'static str) -> Self {
        self.redirect = Some(tag);
        self
    }

    /// Declare the incoming redirect tag (`#[map(reference = "...")]`).
    #[must_use]
    pub const fn reference(mut self, tag: &'static str) -> Self {
        self.reference = Some(tag);
        self
    }

    /// Field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared field type.
    #[must_use]
    pub const fn ty(&self) -> TypeInfo {
        self.ty
    }

    /// Structural shape.
    #[must_use]
    pub const fn shape(&self) -> &FieldShape {
        &self.shape
    }

    /// Outgoing redirect tag.
    #[must_use]
    pub const fn redirect_tag(&self) -> Option<&'static str> {
        self.redirect
    }

    /// Incoming redirect tag.
    #[must_use]
    pub const fn reference_tag(&self) -> Option<&'static str> {
        self.reference
    }

    /// Clone a value of this field's type.
    ///
    /// Returns `None` when `value` is not of the declared type.
    #[must_use]
    pub fn clone_value(&self, value: &dyn Any) -> Option<Box<dyn Any>> {
        (self.clone)(value)
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("shape", &self.shape)
            .field("redirect", &self.redirect)
            .field("reference", &self.reference)
            .finish()
    }
}

/// Descriptor of a [`Mappable`] type.
///
/// Holds the declared fields in declaration order together with a name index
/// over them, built once at construction.
pub struct TypeDescriptor {
    ty:             TypeInfo,
    fields:         Vec<FieldDescriptor>,
    index:          HashMap<&'static str, usize>,
    nested_target:  bool,
    default_target: Option<fn() -> &'static TypeDescriptor>,
    construct:      Option<fn() -> Box<dyn Mappable>>,
    reflect:        fn(&dyn Any) -> Option<&dyn Mappable>
}

impl TypeDescriptor {
    /// Start a descriptor for `T` with its declared fields.
    ///
    /// The result is neither a nested target nor instantiable until
    /// configured otherwise.
    #[must_use]
    pub fn of<T: Mappable>(fields: Vec<FieldDescriptor>) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(position, field)| (field.name, position))
            .collect();

        Self {
            ty: TypeInfo::of::<T>(),
            fields,
            index,
            nested_target: false,
            default_target: None,
            construct: None,
            reflect: reflect_any::<T>
        }
    }

    /// Allow the engine to create `T` through `Default`.
    #[must_use]
    pub fn instantiable<T: Mappable + Default>(mut self) -> Self {
        self.construct = Some(construct_default::<T>);
        self
    }

    /// Mark the type as a valid nested mapping destination.
    #[must_use]
    pub fn nested_target(mut self) -> Self {
        self.nested_target = true;
        self
    }

    /// Declare the default target used by the managed entry point.
    #[must_use]
    pub fn mapped_with(mut self, target: fn() -> &'static TypeDescriptor) -> Self {
        self.default_target = Some(target);
        self
    }

    /// Described type.
    #[must_use]
    pub const fn ty(&self) -> TypeInfo {
        self.ty
    }

    /// Declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.index.get(name).map(|&position| &self.fields[position])
    }

    /// Whether the type is a nested target.
    #[must_use]
    pub const fn is_nested_target(&self) -> bool {
        self.nested_target
    }

    /// Default target descriptor, if declared.
    #[must_use]
    pub fn default_target(&self) -> Option<&'static TypeDescriptor> {
        self.default_target.map(|target| target())
    }

    /// Create a fresh default instance, if the type is instantiable.
    #[must_use]
    pub fn instantiate(&self) -> Option<Box<dyn Mappable>> {
        self.construct.map(|construct| construct())
    }

    /// Whether [`instantiate`](Self::instantiate) can succeed.
    #[must_use]
    pub const fn is_instantiable(&self) -> bool {
        self.construct.is_some()
    }

    /// View a type-erased value of the described type as [`Mappable`].
    #[must_use]
    pub fn reflect<'a>(&self, value: &'a dyn Any) -> Option<&'a dyn Mappable> {
        (self.reflect)(value)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("ty", &self.ty)
            .field("fields", &self.fields)
            .field("nested_target", &self.nested_target)
            .field("instantiable", &self.is_instantiable())
            .finish()
    }
}

fn construct_default<T: Mappable + Default>() -> Box<dyn Mappable> {
    Box::new(T::default())
}

fn reflect_any<T: Mappable>(value: &dyn Any) -> Option<&dyn Mappable> {
    value
        .downcast_ref::<T>()
        .map(|value| value as &dyn Mappable)
}
