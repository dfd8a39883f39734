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
    clippy::all
)]

use comp_block_domain::{EmployeeCode, MovementType};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// The de-duplication key for movement history.
///
/// No two movement records may share the same key. Batch re-submission
/// relies on this: a row whose key already exists is skipped, not
/// re-recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovementKey {
    /// The employee the movement applies to.
    pub employee_code: EmployeeCode,
    /// The date the movement takes effect.
    pub movement_date: Date,
    /// The kind of movement.
    pub movement_type: MovementType,
}

impl MovementKey {
    /// Creates a new movement key.
    #[must_use]
    pub const fn new(
        employee_code: EmployeeCode,
        movement_date: Date,
        movement_type: MovementType,
    ) -> Self {
        Self {
            employee_code,
            movement_date,
            movement_type,
        }
    }
}

/// An immutable movement history entry.
///
/// Every accepted movement produces exactly one record capturing:
/// - Who the movement applies to (employee code and name)
/// - What changed (movement type, old value, new value)
/// - When it takes effect (movement date)
/// - Who recorded it and when (created by, created at)
///
/// Records are never mutated or deleted once created. The snapshot
/// timeline is derived from them; they are the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    /// The employee the movement applies to.
    pub employee_code: EmployeeCode,
    /// The employee's display name as submitted.
    pub employee_name: String,
    /// The kind of movement.
    pub movement_type: MovementType,
    /// The date the movement takes effect.
    pub movement_date: Date,
    /// The value before the movement (position or employment status).
    pub old_value: String,
    /// The value after the movement.
    pub new_value: String,
    /// Free-form notes from the submitter.
    pub notes: Option<String>,
    /// Identifier of the operator who submitted the movement.
    pub created_by: String,
    /// When the record was created.
    pub created_at: OffsetDateTime,
}

impl MovementRecord {
    /// Creates a new movement record.
    ///
    /// Once created, a movement record is immutable.
    #[must_use]
    pub const fn new(
        employee_code: EmployeeCode,
        employee_name: String,
        movement_type: MovementType,
        movement_date: Date,
        old_value: String,
        new_value: String,
        notes: Option<String>,
        created_by: String,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            employee_code,
            employee_name,
            movement_type,
            movement_date,
            old_value,
            new_value,
            notes,
            created_by,
            created_at,
        }
    }

    /// Returns the de-duplication key for this record.
    #[must_use]
    pub fn key(&self) -> MovementKey {
        MovementKey::new(
            self.employee_code.clone(),
            self.movement_date,
            self.movement_type,
        )
    }
}
