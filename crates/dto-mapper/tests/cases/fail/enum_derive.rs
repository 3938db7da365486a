// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_mapper::Mappable;

#[derive(Mappable)]
pub enum Status {
    Active,
    Inactive
}

fn main() {}
