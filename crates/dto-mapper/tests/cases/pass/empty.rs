// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_mapper::{Mappable, Mapper, Registry};

#[derive(Mappable, Debug, Clone, Default)]
#[mapper(dto)]
pub struct Nothing {}

#[derive(Mappable, Debug, Clone, Default)]
pub struct Something {
    pub value: u8
}

fn main() {
    let mapper = Mapper::new(Registry::builder().build());
    let _nothing: Nothing = mapper.map(&Something { value: 1 }).unwrap();
}
