// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod csv_tests;
mod query_tests;

use comp_block_domain::{
    EmployeeCode, EmployeeMaster, EmploymentStatus, EmploymentType, MonthlySnapshot, MonthlyStatus,
    Position, YearMonth,
};
use comp_block_persistence::Persistence;

use crate::request_response::{MovementBatchRequest, MovementRowRequest};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn create_test_master(code: &str, store_id: &str) -> EmployeeMaster {
    EmployeeMaster::new(
        EmployeeCode::new(code),
        String::from("Test Employee"),
        store_id.to_string(),
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

pub fn create_test_row(code: &str, movement_type: &str, effective_date: &str) -> MovementRowRequest {
    MovementRowRequest {
        employee_code: code.to_string(),
        employee_name: String::from("Test Employee"),
        movement_type: movement_type.to_string(),
        position: if movement_type == "promotion" {
            Some(String::from("supervisor"))
        } else {
            None
        },
        effective_date: effective_date.to_string(),
        notes: None,
    }
}

pub fn create_test_batch(rows: Vec<MovementRowRequest>) -> MovementBatchRequest {
    MovementBatchRequest {
        movements: rows,
        created_by: String::from("op-1"),
    }
}
