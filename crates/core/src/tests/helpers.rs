// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use comp_block_audit::MovementRecord;
use comp_block_domain::{
    EmployeeCode, EmployeeMaster, EmploymentStatus, EmploymentType, MonthlySnapshot,
    MonthlyStatus, MovementType, Position, YearMonth,
};
use time::macros::datetime;
use time::{Date, Month, OffsetDateTime};

use crate::{EmployeeTimeline, MovementInput};

pub const TEST_OPERATOR: &str = "op-1";

pub fn test_created_at() -> OffsetDateTime {
    datetime!(2025-06-01 09:00 UTC)
}

pub fn create_test_date(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
}

pub fn create_test_month(year: i32, month: u8) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

pub fn create_test_master(code: &str, position: Position) -> EmployeeMaster {
    EmployeeMaster::new(
        EmployeeCode::new(code),
        String::from("Alex Smith"),
        String::from("store-7"),
        EmploymentType::FullTime,
        false,
        position,
        EmploymentStatus::Active,
    )
}

pub fn create_test_snapshot(code: &str, month: YearMonth, position: Position) -> MonthlySnapshot {
    MonthlySnapshot::new(
        EmployeeCode::new(code),
        month,
        position,
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

/// A timeline holding one full-month snapshot per given month, all with
/// the same position.
pub fn create_test_timeline(
    code: &str,
    position: &Position,
    months: &[YearMonth],
) -> EmployeeTimeline {
    let mut timeline: EmployeeTimeline =
        EmployeeTimeline::new(Some(create_test_master(code, position.clone())));
    for month in months {
        timeline.upsert(create_test_snapshot(code, *month, position.clone()));
    }
    timeline
}

pub fn create_test_movement(
    code: &str,
    movement_type: MovementType,
    date: Date,
    old_value: &str,
    new_value: &str,
) -> MovementRecord {
    MovementRecord::new(
        EmployeeCode::new(code),
        String::from("Alex Smith"),
        movement_type,
        date,
        old_value.to_string(),
        new_value.to_string(),
        None,
        TEST_OPERATOR.to_string(),
        test_created_at(),
    )
}

pub fn create_test_input(
    code: &str,
    movement_type: &str,
    position: Option<&str>,
    effective_date: &str,
) -> MovementInput {
    MovementInput {
        employee_code: code.to_string(),
        employee_name: String::from("Alex Smith"),
        movement_type: movement_type.to_string(),
        position: position.map(ToString::to_string),
        effective_date: effective_date.to_string(),
        notes: None,
    }
}
