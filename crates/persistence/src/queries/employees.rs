// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee master record queries.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use comp_block_domain::EmployeeMaster;

use crate::data_models::{EmployeeRow, employee_from_row};
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves one employee master record by code.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_code` - The normalized employee code
///
/// # Errors
///
/// Returns `EmployeeNotFound` if no such employee exists.
pub fn get_employee(
    conn: &mut _,
    employee_code: &str,
) -> Result<EmployeeMaster, PersistenceError> {
    let row: EmployeeRow = employees::table
        .filter(employees::employee_code.eq(employee_code))
        .select((
            employees::employee_code,
            employees::employee_name,
            employees::store_id,
            employees::employment_type,
            employees::is_pharmacist,
            employees::current_position,
            employees::employment_status,
        ))
        .first::<EmployeeRow>(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::EmployeeNotFound(employee_code.to_string())
            }
            other => other.into(),
        })?;

    employee_from_row(row)
}
}

backend_fn! {
/// Lists all employee master records.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn list_employees(conn: &mut _) -> Result<Vec<EmployeeMaster>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .order(employees::employee_code.asc())
        .select((
            employees::employee_code,
            employees::employee_name,
            employees::store_id,
            employees::employment_type,
            employees::is_pharmacist,
            employees::current_position,
            employees::employment_status,
        ))
        .load::<EmployeeRow>(conn)?;

    rows.into_iter().map(employee_from_row).collect()
}
}

backend_fn! {
/// Lists the employee master records assigned to one store.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `store_id` - The store identifier
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn list_employees_by_store(
    conn: &mut _,
    store_id: &str,
) -> Result<Vec<EmployeeMaster>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .filter(employees::store_id.eq(store_id))
        .order(employees::employee_code.asc())
        .select((
            employees::employee_code,
            employees::employee_name,
            employees::store_id,
            employees::employment_type,
            employees::is_pharmacist,
            employees::current_position,
            employees::employment_status,
        ))
        .load::<EmployeeRow>(conn)?;

    rows.into_iter().map(employee_from_row).collect()
}
}
