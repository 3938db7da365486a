// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_mapper::{Mappable, TypeDescriptor};

#[derive(Mappable, Debug, Clone, Default)]
#[mapper(dto)]
pub struct Point {
    pub x: f64,
    pub y: f64
}

#[derive(Mappable, Debug, Clone, Default)]
pub struct Shapes {
    pub origin: Option<Point>,
    pub path: Vec<Point>,
    pub weights: Box<[u16]>,
    pub matrix: std::vec::Vec<Vec<f32>>,
    pub digest: [u8; 32],
    pub label: Option<String>
}

fn main() {
    let descriptor: &'static TypeDescriptor = Shapes::type_descriptor();
    assert_eq!(descriptor.fields().len(), 6);
    assert!(descriptor.field("matrix").is_some_and(|field| {
        field.shape().container().is_some_and(|container| container.is_multi_dimensional())
    }));
    assert!(Point::type_descriptor().is_nested_target());
}
