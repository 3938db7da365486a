// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Employee example with dto-mapper
//!
//! Demonstrates:
//! - name-matched and redirected fields
//! - nested DTOs, optional and in arrays
//! - direct and managed mapping
//! - the error raised for a field pair with incompatible types
//!
//! Run with `RUST_LOG=dto_mapper_core=trace` to see every field decision.

use dto_mapper::{MapError, Mappable, Mapper, Registry};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Entities
// ============================================================================

#[derive(Mappable, Debug, Clone, Default)]
pub struct Address {
    pub street: String,
    pub city:   String
}

#[derive(Mappable, Debug, Clone, Default)]
#[mapper(mapped_with = "EmployeeDto")]
pub struct Employee {
    pub name:           String,
    #[map(redirect = "taxId")]
    pub ssn:            String,
    pub age:            u32,
    pub address:        Address,
    pub previous:       Option<Address>,
    pub branches:       Vec<Address>,
    pub internal_notes: String
}

// ============================================================================
// DTOs
// ============================================================================

#[derive(Mappable, Debug, Clone, Default)]
#[mapper(dto)]
pub struct AddressDto {
    pub street: String,
    pub city:   String
}

#[derive(Mappable, Debug, Clone, Default)]
#[mapper(instantiable)]
pub struct EmployeeDto {
    pub name:     String,
    #[map(reference = "taxId")]
    pub tax_id:   String,
    pub age:      u32,
    pub address:  AddressDto,
    pub previous: Option<AddressDto>,
    pub branches: Vec<AddressDto>
}

/// Public card where `age` is rendered as text.
#[derive(Mappable, Debug, Clone, Default)]
#[mapper(instantiable)]
pub struct EmployeeCard {
    pub name:   String,
    #[map(reference = "taxId")]
    pub tax_id: String,
    pub age:    String
}

fn employee() -> Employee {
    Employee {
        name:           "Ada Lovelace".into(),
        ssn:            "123-45-6789".into(),
        age:            36,
        address:        Address {
            street: "12 St James's Square".into(),
            city:   "London".into()
        },
        previous:       None,
        branches:       vec![
            Address {
                street: "1 Analytical Way".into(),
                city:   "Turin".into()
            },
            Address {
                street: "2 Difference Rd".into(),
                city:   "Cambridge".into()
            },
        ],
        internal_notes: "never leaves the service".into()
    }
}

fn main() -> Result<(), MapError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("employee_demo=info,dto_mapper_core=debug"))
        )
        .init();

    let registry = Registry::builder()
        .register::<Address>()
        .register::<AddressDto>()
        .register::<Employee>()
        .register::<EmployeeDto>()
        .build();
    let mapper = Mapper::new(registry);
    let employee = employee();

    let dto: EmployeeDto = mapper.map(&employee)?;
    tracing::info!(?dto, "Direct mapping");

    let managed = mapper.map_managed_as::<EmployeeDto>(&employee)?;
    tracing::info!(
        tax_id = %managed.tax_id,
        branches = managed.branches.len(),
        "Managed mapping"
    );

    match mapper.map::<EmployeeCard>(&employee) {
        Ok(card) => tracing::warn!(?card, "Unexpectedly mapped"),
        Err(err) => tracing::info!(%err, configuration = err.is_configuration(), "Rejected")
    }

    Ok(())
}
