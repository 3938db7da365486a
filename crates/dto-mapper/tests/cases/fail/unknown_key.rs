// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_mapper::Mappable;

#[derive(Mappable)]
pub struct Employee {
    #[map(rename = "taxId")]
    pub ssn: String
}

fn main() {}
