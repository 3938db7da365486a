// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_mapper::Mappable;

#[derive(Mappable, Clone, Default)]
pub struct Page<T> {
    pub items: Vec<T>
}

fn main() {}
