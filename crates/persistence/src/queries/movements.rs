// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movement history queries.
//!
//! Movement records are immutable, so these queries never observe partial
//! state. All queries are generated in backend-specific monomorphic
//! versions (`_sqlite` and `_mysql` suffixes) using the `backend_fn!`
//! macro.

use std::str::FromStr;

use comp_block_audit::{MovementKey, MovementRecord};
use comp_block_domain::{EmployeeCode, MovementType, parse_movement_date};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::{MovementRow, movement_from_row};
use crate::diesel_schema::movement_records;
use crate::error::PersistenceError;

backend_fn! {
/// Checks whether a movement with the given de-duplication key exists.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_code` - The normalized employee code
/// * `movement_date` - The effective date in `YYYY-MM-DD` form
/// * `movement_type` - The canonical movement type string
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn movement_exists(
    conn: &mut _,
    employee_code: &str,
    movement_date: &str,
    movement_type: &str,
) -> Result<bool, PersistenceError> {
    let count: i64 = movement_records::table
        .filter(movement_records::employee_code.eq(employee_code))
        .filter(movement_records::movement_date.eq(movement_date))
        .filter(movement_records::movement_type.eq(movement_type))
        .count()
        .get_result::<i64>(conn)?;

    Ok(count > 0)
}
}

backend_fn! {
/// Lists the de-duplication keys of every movement in history.
///
/// Used to build the batch context before recording.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn list_movement_keys(conn: &mut _) -> Result<Vec<MovementKey>, PersistenceError> {
    let rows: Vec<(String, String, String)> = movement_records::table
        .select((
            movement_records::employee_code,
            movement_records::movement_date,
            movement_records::movement_type,
        ))
        .load::<(String, String, String)>(conn)?;

    rows.into_iter()
        .map(|(code, date, movement_type)| {
            Ok(MovementKey::new(
                EmployeeCode::new(&code),
                parse_movement_date(&date)
                    .map_err(|e| PersistenceError::DataCorruption(e.to_string()))?,
                MovementType::from_str(&movement_type)
                    .map_err(|e| PersistenceError::DataCorruption(e.to_string()))?,
            ))
        })
        .collect()
}
}

backend_fn! {
/// Lists an employee's movement history in date order.
///
/// Rows recorded on the same date come back in insertion order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_code` - The normalized employee code
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn list_movements_for_employee(
    conn: &mut _,
    employee_code: &str,
) -> Result<Vec<MovementRecord>, PersistenceError> {
    let rows: Vec<MovementRow> = movement_records::table
        .filter(movement_records::employee_code.eq(employee_code))
        .order((
            movement_records::movement_date.asc(),
            movement_records::movement_id.asc(),
        ))
        .select((
            movement_records::employee_code,
            movement_records::employee_name,
            movement_records::movement_type,
            movement_records::movement_date,
            movement_records::old_value,
            movement_records::new_value,
            movement_records::notes,
            movement_records::created_by,
            movement_records::created_at,
        ))
        .load::<MovementRow>(conn)?;

    rows.into_iter().map(movement_from_row).collect()
}
}
