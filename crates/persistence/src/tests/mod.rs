// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use comp_block_audit::MovementRecord;
use comp_block_domain::{
    EmployeeCode, EmployeeMaster, EmploymentStatus, EmploymentType, MonthlySnapshot, MonthlyStatus,
    MovementType, Position, YearMonth,
};
use time::macros::{date, datetime};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn create_test_master(code: &str) -> EmployeeMaster {
    EmployeeMaster::new(
        EmployeeCode::new(code),
        String::from("Test Employee"),
        String::from("store-001"),
        EmploymentType::FullTime,
        false,
        Position::Specialist,
        EmploymentStatus::Active,
    )
}

pub fn create_test_snapshot(code: &str, year: i32, month: u8) -> MonthlySnapshot {
    MonthlySnapshot::new(
        EmployeeCode::new(code),
        YearMonth::new(year, month).expect("Valid test month"),
        Position::Specialist,
        EmploymentType::FullTime,
        false,
        MonthlyStatus::FullMonth,
        22,
        176.0,
        false,
        false,
        None,
    )
}

pub fn create_test_movement(code: &str, day: u8) -> MovementRecord {
    MovementRecord::new(
        EmployeeCode::new(code),
        String::from("Test Employee"),
        MovementType::Promotion,
        date!(2025 - 03 - 01).replace_day(day).expect("Valid test day"),
        String::from("specialist"),
        String::from("supervisor"),
        None,
        String::from("op-1"),
        datetime!(2025-03-15 09:00 UTC),
    )
}
