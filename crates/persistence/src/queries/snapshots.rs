// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly snapshot queries.
//!
//! `year_month` is stored as `YYYY-MM`, so lexical ordering is
//! chronological ordering and plain `ORDER BY` works.
//!
//! All queries are generated in backend-specific monomorphic versions
//! (`_sqlite` and `_mysql` suffixes) using the `backend_fn!` macro.

use comp_block_domain::MonthlySnapshot;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::{SnapshotRow, snapshot_from_row};
use crate::diesel_schema::monthly_snapshots;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves the snapshot for one (employee, month).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_code` - The normalized employee code
/// * `year_month` - The month in `YYYY-MM` form
///
/// # Errors
///
/// Returns `SnapshotNotFound` if no snapshot exists for the month.
pub fn get_snapshot(
    conn: &mut _,
    employee_code: &str,
    year_month: &str,
) -> Result<MonthlySnapshot, PersistenceError> {
    let row: SnapshotRow = monthly_snapshots::table
        .filter(monthly_snapshots::employee_code.eq(employee_code))
        .filter(monthly_snapshots::year_month.eq(year_month))
        .select((
            monthly_snapshots::employee_code,
            monthly_snapshots::year_month,
            monthly_snapshots::position,
            monthly_snapshots::employment_type,
            monthly_snapshots::is_pharmacist,
            monthly_snapshots::monthly_status,
            monthly_snapshots::work_days,
            monthly_snapshots::work_hours,
            monthly_snapshots::is_dual_position,
            monthly_snapshots::is_supervisor_rotation,
            monthly_snapshots::newbie_level,
            monthly_snapshots::confirmed,
            monthly_snapshots::block,
            monthly_snapshots::stage,
        ))
        .first::<SnapshotRow>(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => PersistenceError::SnapshotNotFound {
                employee_code: employee_code.to_string(),
                year_month: year_month.to_string(),
            },
            other => other.into(),
        })?;

    snapshot_from_row(row)
}
}

backend_fn! {
/// Lists an employee's snapshots in chronological order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_code` - The normalized employee code
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is corrupt.
pub fn list_snapshots_for_employee(
    conn: &mut _,
    employee_code: &str,
) -> Result<Vec<MonthlySnapshot>, PersistenceError> {
    let rows: Vec<SnapshotRow> = monthly_snapshots::table
        .filter(monthly_snapshots::employee_code.eq(employee_code))
        .order(monthly_snapshots::year_month.asc())
        .select((
            monthly_snapshots::employee_code,
            monthly_snapshots::year_month,
            monthly_snapshots::position,
            monthly_snapshots::employment_type,
            monthly_snapshots::is_pharmacist,
            monthly_snapshots::monthly_status,
            monthly_snapshots::work_days,
            monthly_snapshots::work_hours,
            monthly_snapshots::is_dual_position,
            monthly_snapshots::is_supervisor_rotation,
            monthly_snapshots::newbie_level,
            monthly_snapshots::confirmed,
            monthly_snapshots::block,
            monthly_snapshots::stage,
        ))
        .load::<SnapshotRow>(conn)?;

    rows.into_iter().map(snapshot_from_row).collect()
}
}

backend_fn! {
/// Retrieves an employee's most recent snapshot, if any.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `employee_code` - The normalized employee code
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is corrupt.
pub fn latest_snapshot(
    conn: &mut _,
    employee_code: &str,
) -> Result<Option<MonthlySnapshot>, PersistenceError> {
    let row: Option<SnapshotRow> = monthly_snapshots::table
        .filter(monthly_snapshots::employee_code.eq(employee_code))
        .order(monthly_snapshots::year_month.desc())
        .select((
            monthly_snapshots::employee_code,
            monthly_snapshots::year_month,
            monthly_snapshots::position,
            monthly_snapshots::employment_type,
            monthly_snapshots::is_pharmacist,
            monthly_snapshots::monthly_status,
            monthly_snapshots::work_days,
            monthly_snapshots::work_hours,
            monthly_snapshots::is_dual_position,
            monthly_snapshots::is_supervisor_rotation,
            monthly_snapshots::newbie_level,
            monthly_snapshots::confirmed,
            monthly_snapshots::block,
            monthly_snapshots::stage,
        ))
        .first::<SnapshotRow>(conn)
        .optional()?;

    row.map(snapshot_from_row).transpose()
}
}
