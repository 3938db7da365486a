// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_mapper::Mappable;

#[derive(Mappable)]
pub struct Wrapper(String);

fn main() {}
