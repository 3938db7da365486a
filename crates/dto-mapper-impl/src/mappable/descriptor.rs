// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Descriptor table generation.
//!
//! ```rust,ignore
//! fn type_descriptor() -> &'static ::dto_mapper::TypeDescriptor {
//!     static DESCRIPTOR: LazyLock<TypeDescriptor> = LazyLock::new(|| {
//!         TypeDescriptor::of::<Employee>(vec![
//!             FieldDescriptor::new::<String>("ssn", FieldShape::value()).redirect("taxId"),
//!             FieldDescriptor::new::<Vec<Address>>("addresses", FieldShape::vec::<Address>()),
//!         ])
//!         .mapped_with(<EmployeeDto as Mappable>::type_descriptor)
//!     });
//!     &DESCRIPTOR
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{FieldDef, MappableDef, Shape};

/// Generate `type_descriptor` and `descriptor`.
pub fn generate(def: &MappableDef) -> TokenStream {
    let ident = def.ident();
    let fields = def.fields().iter().map(field_descriptor);

    let nested = def
        .is_nested_target()
        .then(|| quote! { .nested_target() });
    let instantiable = def
        .is_instantiable()
        .then(|| quote! { .instantiable::<#ident>() });
    let mapped_with = def.mapped_with().map(|target| {
        quote! { .mapped_with(<#target as ::dto_mapper::Mappable>::type_descriptor) }
    });

    quote! {
        fn type_descriptor() -> &'static ::dto_mapper::TypeDescriptor {
            static DESCRIPTOR: ::std::sync::LazyLock<::dto_mapper::TypeDescriptor> =
                ::std::sync::LazyLock::new(|| {
                    ::dto_mapper::TypeDescriptor::of::<#ident>(::std::vec![#(#fields),*])
                        #nested
                        #instantiable
                        #mapped_with
                });
            &DESCRIPTOR
        }

        fn descriptor(&self) -> &'static ::dto_mapper::TypeDescriptor {
            <Self as ::dto_mapper::Mappable>::type_descriptor()
        }
    }
}

fn field_descriptor(field: &FieldDef) -> TokenStream {
    let ty = &field.ty;
    let name = field.name_str();
    let shape = shape(&field.shape);
    let redirect = field.redirect.as_ref().map(|tag| quote! { .redirect(#tag) });
    let reference = field
        .reference
        .as_ref()
        .map(|tag| quote! { .reference(#tag) });

    quote! {
        ::dto_mapper::FieldDescriptor::new::<#ty>(#name, #shape) #redirect #reference
    }
}

fn shape(shape: &Shape) -> TokenStream {
    match shape {
        Shape::Value => quote! { ::dto_mapper::FieldShape::value() },
        Shape::Optional(element) => quote! { ::dto_mapper::FieldShape::optional::<#element>() },
        Shape::Vec {
            element,
            jagged
        } => {
            let jagged = jagged.then(|| quote! { .multi_dimensional() });
            quote! { ::dto_mapper::FieldShape::vec::<#element>() #jagged }
        }
        Shape::BoxedSlice {
            element,
            jagged
        } => {
            let jagged = jagged.then(|| quote! { .multi_dimensional() });
            quote! { ::dto_mapper::FieldShape::boxed_slice::<#element>() #jagged }
        }
    }
}
