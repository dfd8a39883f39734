// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::block::{Block, classify_block};
use crate::stage::{Stage, classify_stage};
use crate::types::{
    EmployeeCode, EmploymentStatus, EmploymentType, MonthlyStatus, NewbieLevel, Position,
    YearMonth,
};

/// One employee's state for one calendar month.
///
/// `block` and `stage` are cached classifications of the other fields.
/// Any code that mutates a snapshot must call [`MonthlySnapshot::refresh_derived`]
/// before persisting it, or the cache goes stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// The employee this snapshot belongs to.
    pub employee_code: EmployeeCode,
    /// The month this snapshot covers.
    pub year_month: YearMonth,
    /// Position held during the month.
    pub position: Position,
    /// Employment type during the month.
    pub employment_type: EmploymentType,
    /// Whether the employee is a licensed pharmacist.
    pub is_pharmacist: bool,
    /// How much of the month was worked.
    pub monthly_status: MonthlyStatus,
    /// Days worked in the month.
    pub work_days: i32,
    /// Hours worked in the month.
    pub work_hours: f64,
    /// Whether the employee held two positions concurrently.
    pub is_dual_position: bool,
    /// Whether the employee was on supervisor rotation this month.
    pub is_supervisor_rotation: bool,
    /// Seniority marker for newbie and admin track employees.
    pub newbie_level: Option<NewbieLevel>,
    /// Whether the month has been confirmed for payroll. Confirmed
    /// snapshots are frozen against manual edits and never deleted.
    pub confirmed: bool,
    /// Cached calculation block.
    pub block: Block,
    /// Cached stage tier.
    pub stage: Stage,
}

impl MonthlySnapshot {
    /// Creates a snapshot with derived fields already computed.
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub fn new(
        employee_code: EmployeeCode,
        year_month: YearMonth,
        position: Position,
        employment_type: EmploymentType,
        is_pharmacist: bool,
        monthly_status: MonthlyStatus,
        work_days: i32,
        work_hours: f64,
        is_dual_position: bool,
        is_supervisor_rotation: bool,
        newbie_level: Option<NewbieLevel>,
    ) -> Self {
        let mut snapshot: Self = Self {
            employee_code,
            year_month,
            position,
            employment_type,
            is_pharmacist,
            monthly_status,
            work_days,
            work_hours,
            is_dual_position,
            is_supervisor_rotation,
            newbie_level,
            confirmed: false,
            block: Block::Unclassified,
            stage: Stage::Unclassified,
        };
        snapshot.refresh_derived();
        snapshot
    }

    /// Recomputes the cached `block` and `stage` from the current fields.
    pub fn refresh_derived(&mut self) {
        self.block = classify_block(self);
        self.stage = classify_stage(&self.position, self.newbie_level);
    }
}

/// Identity and current state of one employee, owned by the
/// employee-management subsystem.
///
/// The engine reads it to resolve old values for movements and mirrors
/// `current_position`/`employment_status` from the latest movement as a
/// best-effort cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeMaster {
    /// Unique employee code.
    pub employee_code: EmployeeCode,
    /// Display name.
    pub employee_name: String,
    /// The store the employee is assigned to.
    pub store_id: String,
    /// Current employment type.
    pub employment_type: EmploymentType,
    /// Whether the employee is a licensed pharmacist.
    pub is_pharmacist: bool,
    /// Current position.
    pub current_position: Position,
    /// Current employment standing.
    pub employment_status: EmploymentStatus,
}

impl EmployeeMaster {
    /// Creates a new employee master record.
    #[must_use]
    pub const fn new(
        employee_code: EmployeeCode,
        employee_name: String,
        store_id: String,
        employment_type: EmploymentType,
        is_pharmacist: bool,
        current_position: Position,
        employment_status: EmploymentStatus,
    ) -> Self {
        Self {
            employee_code,
            employee_name,
            store_id,
            employment_type,
            is_pharmacist,
            current_position,
            employment_status,
        }
    }
}
