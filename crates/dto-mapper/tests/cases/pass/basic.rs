// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dto_mapper::{Mappable, Mapper, Registry};

#[derive(Mappable, Debug, Clone, Default)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String
}

#[derive(Mappable, Debug, Clone, Default)]
#[mapper(instantiable)]
pub struct UserResponse {
    pub name: String,
    pub email: String
}

fn main() {
    let user = User {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password_hash: "x".into()
    };
    let mapper = Mapper::new(Registry::builder().build());
    let response: UserResponse = mapper.map(&user).unwrap();
    assert_eq!(response.email, "ada@example.com");
}
