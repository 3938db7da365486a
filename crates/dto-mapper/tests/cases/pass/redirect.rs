// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_mapper::{Mappable, Mapper, Registry};

#[derive(Mappable, Debug, Clone, Default)]
#[mapper(mapped_with = "PersonView")]
pub struct Person {
    #[map(redirect = "fullName")]
    pub name: String,
    #[map(redirect = "born", reference = "birthYear")]
    pub year: i32
}

#[derive(Mappable, Debug, Clone, Default)]
#[mapper(instantiable)]
pub struct PersonView {
    #[map(reference = "fullName")]
    pub display_name: String,
    #[map(reference = "born")]
    pub birth_year: i32
}

fn main() {
    let person = Person {
        name: "Grace".into(),
        year: 1906
    };
    let mapper = Mapper::new(Registry::builder().build());
    let view = mapper.map_managed_as::<PersonView>(&person).unwrap();
    assert_eq!(view.display_name, "Grace");
    assert_eq!(view.birth_year, 1906);
}
