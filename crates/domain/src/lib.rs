// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod block;
mod error;
mod snapshot;
mod stage;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use block::{Block, classify_block};
pub use error::DomainError;
pub use snapshot::{EmployeeMaster, MonthlySnapshot};
pub use stage::{Stage, classify_stage};
pub use types::{
    EmployeeCode, EmploymentStatus, EmploymentType, MonthlyStatus, MovementType, NewbieLevel,
    Position, YearMonth,
};
pub use validation::{parse_movement_date, validate_employee_code, validate_employee_name};
