// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hand-written `Mappable` fixtures shared by unit tests.

use std::{any::Any, sync::LazyLock};

use crate::{FieldDescriptor, FieldShape, Mappable, Registry, TypeDescriptor};

macro_rules! accessors {
    ($($field:ident: $ty:ty),* $(,)?) => {
        fn field(&self, name: &str) -> Option<&dyn Any> {
            match name {
                $(stringify!($field) => Some(&self.$field as &dyn Any),)*
                _ => None
            }
        }

        fn set_field(&mut self, name: &str, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
            match name {
                $(stringify!($field) => {
                    self.$field = *value.downcast::<$ty>()?;
                    Ok(())
                })*
                _ => Err(value)
            }
        }
    };
}

macro_rules! descriptor {
    ($ty:ty, $build:expr) => {
        fn type_descriptor() -> &'static TypeDescriptor {
            static DESCRIPTOR: LazyLock<TypeDescriptor> = LazyLock::new(|| $build);
            &DESCRIPTOR
        }

        fn descriptor(&self) -> &'static TypeDescriptor {
            <$ty as Mappable>::type_descriptor()
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub city:   String
}

impl Mappable for Address {
    descriptor!(
        Address,
        TypeDescriptor::of::<Address>(vec![
            FieldDescriptor::new::<String>("street", FieldShape::value()),
            FieldDescriptor::new::<String>("city", FieldShape::value()),
        ])
    );
    accessors!(street: String, city: String);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressDto {
    pub street: String,
    pub city:   String
}

impl Mappable for AddressDto {
    descriptor!(
        AddressDto,
        TypeDescriptor::of::<AddressDto>(vec![
            FieldDescriptor::new::<String>("street", FieldShape::value()),
            FieldDescriptor::new::<String>("city", FieldShape::value()),
        ])
        .nested_target()
        .instantiable::<AddressDto>()
    );
    accessors!(street: String, city: String);
}

#[derive(Debug, Clone, Default)]
pub struct Employee {
    pub name:           String,
    pub ssn:            String,
    pub age:            u32,
    pub address:        Address,
    pub previous:       Option<Address>,
    pub addresses:      Vec<Address>,
    pub tags:           Vec<String>,
    pub internal_notes: String
}

impl Mappable for Employee {
    descriptor!(
        Employee,
        TypeDescriptor::of::<Employee>(vec![
            FieldDescriptor::new::<String>("name", FieldShape::value()),
            FieldDescriptor::new::<String>("ssn", FieldShape::value()).redirect("taxId"),
            FieldDescriptor::new::<u32>("age", FieldShape::value()),
            FieldDescriptor::new::<Address>("address", FieldShape::value()),
            FieldDescriptor::new::<Option<Address>>("previous", FieldShape::optional::<Address>()),
            FieldDescriptor::new::<Vec<Address>>("addresses", FieldShape::vec::<Address>()),
            FieldDescriptor::new::<Vec<String>>("tags", FieldShape::vec::<String>()),
            FieldDescriptor::new::<String>("internal_notes", FieldShape::value()),
        ])
        .mapped_with(EmployeeDto::type_descriptor)
    );
    accessors!(
        name: String,
        ssn: String,
        age: u32,
        address: Address,
        previous: Option<Address>,
        addresses: Vec<Address>,
        tags: Vec<String>,
        internal_notes: String
    );
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeDto {
    pub name:      String,
    pub tax_id:    String,
    pub age:       u32,
    pub address:   AddressDto,
    pub previous:  Option<AddressDto>,
    pub addresses: Vec<AddressDto>,
    pub tags:      Vec<String>
}

impl Mappable for EmployeeDto {
    descriptor!(
        EmployeeDto,
        TypeDescriptor::of::<EmployeeDto>(vec![
            FieldDescriptor::new::<String>("name", FieldShape::value()),
            FieldDescriptor::new::<String>("tax_id", FieldShape::value()).reference("taxId"),
            FieldDescriptor::new::<u32>("age", FieldShape::value()),
            FieldDescriptor::new::<AddressDto>("address", FieldShape::value()),
            FieldDescriptor::new::<Option<AddressDto>>(
                "previous",
                FieldShape::optional::<AddressDto>()
            ),
            FieldDescriptor::new::<Vec<AddressDto>>("addresses", FieldShape::vec::<AddressDto>()),
            FieldDescriptor::new::<Vec<String>>("tags", FieldShape::vec::<String>()),
        ])
        .instantiable::<EmployeeDto>()
    );
    accessors!(
        name: String,
        tax_id: String,
        age: u32,
        address: AddressDto,
        previous: Option<AddressDto>,
        addresses: Vec<AddressDto>,
        tags: Vec<String>
    );
}

/// Source whose `ssn` carries a whitespace-only redirect tag.
#[derive(Debug, Clone, Default)]
pub struct BlankRedirect {
    pub name: String,
    pub ssn:  String
}

impl Mappable for BlankRedirect {
    descriptor!(
        BlankRedirect,
        TypeDescriptor::of::<BlankRedirect>(vec![
            FieldDescriptor::new::<String>("name", FieldShape::value()),
            FieldDescriptor::new::<String>("ssn", FieldShape::value()).redirect("  "),
        ])
    );
    accessors!(name: String, ssn: String);
}

/// Source whose redirect tag no target field answers.
#[derive(Debug, Clone, Default)]
pub struct OrphanRedirect {
    pub ssn: String
}

impl Mappable for OrphanRedirect {
    descriptor!(
        OrphanRedirect,
        TypeDescriptor::of::<OrphanRedirect>(vec![
            FieldDescriptor::new::<String>("ssn", FieldShape::value()).redirect("nobody"),
        ])
    );
    accessors!(ssn: String);
}

/// Target with two fields answering `taxId`.
#[derive(Debug, Clone, Default)]
pub struct DoubleReference {
    pub tax_id:  String,
    pub tax_ref: String
}

impl Mappable for DoubleReference {
    descriptor!(
        DoubleReference,
        TypeDescriptor::of::<DoubleReference>(vec![
            FieldDescriptor::new::<String>("tax_id", FieldShape::value()).reference("taxId"),
            FieldDescriptor::new::<String>("tax_ref", FieldShape::value()).reference("taxId"),
        ])
        .instantiable::<DoubleReference>()
    );
    accessors!(tax_id: String, tax_ref: String);
}

/// Target without a constructor.
#[derive(Debug, Clone, Default)]
pub struct Sealed {
    pub name: String
}

impl Mappable for Sealed {
    descriptor!(
        Sealed,
        TypeDescriptor::of::<Sealed>(vec![FieldDescriptor::new::<String>(
            "name",
            FieldShape::value()
        )])
    );
    accessors!(name: String);
}

/// Source whose `age` is a string.
#[derive(Debug, Clone, Default)]
pub struct TextualAge {
    pub name: String,
    pub age:  String
}

impl Mappable for TextualAge {
    descriptor!(
        TextualAge,
        TypeDescriptor::of::<TextualAge>(vec![
            FieldDescriptor::new::<String>("name", FieldShape::value()),
            FieldDescriptor::new::<String>("age", FieldShape::value()),
        ])
        .mapped_with(Sealed::type_descriptor)
    );
    accessors!(name: String, age: String);
}

/// Source whose `address` may be missing and whose `tags` are bytes.
#[derive(Debug, Clone, Default)]
pub struct Sparse {
    pub address: Option<Address>,
    pub tags:    Vec<u8>
}

impl Mappable for Sparse {
    descriptor!(
        Sparse,
        TypeDescriptor::of::<Sparse>(vec![
            FieldDescriptor::new::<Option<Address>>("address", FieldShape::optional::<Address>()),
            FieldDescriptor::new::<Vec<u8>>("tags", FieldShape::vec::<u8>()),
        ])
    );
    accessors!(address: Option<Address>, tags: Vec<u8>);
}

/// Source with a jagged array.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub tags: Vec<Vec<String>>
}

impl Mappable for Grid {
    descriptor!(
        Grid,
        TypeDescriptor::of::<Grid>(vec![
            FieldDescriptor::new::<Vec<Vec<String>>>(
                "tags",
                FieldShape::vec::<Vec<String>>().multi_dimensional()
            ),
        ])
    );
    accessors!(tags: Vec<Vec<String>>);
}

/// Jagged source described without an explicit multi-dimensional marker.
#[derive(Debug, Clone, Default)]
pub struct Unmarked {
    pub tags: Vec<Vec<String>>
}

impl Mappable for Unmarked {
    descriptor!(
        Unmarked,
        TypeDescriptor::of::<Unmarked>(vec![FieldDescriptor::new::<Vec<Vec<String>>>(
            "tags",
            FieldShape::vec::<Vec<String>>()
        )])
        .instantiable::<Unmarked>()
    );
    accessors!(tags: Vec<Vec<String>>);
}

/// Source with an optional address only.
#[derive(Debug, Clone, Default)]
pub struct MaybeHome {
    pub address: Option<Address>
}

impl Mappable for MaybeHome {
    descriptor!(
        MaybeHome,
        TypeDescriptor::of::<MaybeHome>(vec![FieldDescriptor::new::<Option<Address>>(
            "address",
            FieldShape::optional::<Address>()
        )])
    );
    accessors!(address: Option<Address>);
}

/// Target with a required nested address.
#[derive(Debug, Clone, Default)]
pub struct Home {
    pub address: AddressDto
}

impl Mappable for Home {
    descriptor!(
        Home,
        TypeDescriptor::of::<Home>(vec![FieldDescriptor::new::<AddressDto>(
            "address",
            FieldShape::value()
        )])
        .instantiable::<Home>()
    );
    accessors!(address: AddressDto);
}

/// Registry of every fixture above.
pub fn registry() -> Registry {
    Registry::builder()
        .register::<Address>()
        .register::<AddressDto>()
        .register::<Employee>()
        .register::<EmployeeDto>()
        .register::<BlankRedirect>()
        .register::<OrphanRedirect>()
        .register::<DoubleReference>()
        .register::<Sealed>()
        .register::<TextualAge>()
        .register::<Sparse>()
        .register::<Grid>()
        .register::<Unmarked>()
        .register::<MaybeHome>()
        .register::<Home>()
        .build()
}

pub fn employee() -> Employee {
    Employee {
        name:           "Ada".into(),
        ssn:            "123-45-6789".into(),
        age:            36,
        address:        Address {
            street: "1 Main St".into(),
            city:   "London".into()
        },
        previous:       None,
        addresses:      vec![
            Address {
                street: "2 Side St".into(),
                city:   "Paris".into()
            },
            Address {
                street: "3 Back St".into(),
                city:   "Rome".into()
            },
        ],
        tags:           vec!["math".into(), "engines".into()],
        internal_notes: "do not export".into()
    }
}
