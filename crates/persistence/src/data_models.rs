// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row tuples and conversions between stored rows and domain values.
//!
//! Enum-like fields are stored as their canonical string forms and parsed
//! back on read. A stored value that no longer parses is reported as
//! `DataCorruption` rather than silently defaulted.

use std::str::FromStr;

use comp_block_audit::MovementRecord;
use comp_block_domain::{
    Block, EmployeeCode, EmployeeMaster, EmploymentStatus, EmploymentType, MonthlySnapshot,
    MonthlyStatus, MovementType, NewbieLevel, Position, Stage, YearMonth, parse_movement_date,
};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::PersistenceError;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Employee row without the surrogate ID:
/// (code, name, `store_id`, `employment_type`, `is_pharmacist`, position, status).
pub type EmployeeRow = (String, String, String, String, i32, String, String);

/// Snapshot row without the surrogate ID.
pub type SnapshotRow = (
    String,
    String,
    String,
    String,
    i32,
    String,
    i32,
    f64,
    i32,
    i32,
    Option<String>,
    i32,
    i32,
    String,
);

/// Movement row without the surrogate ID.
pub type MovementRow = (
    String,
    String,
    String,
    String,
    String,
    String,
    Option<String>,
    String,
    String,
);

/// Converts a stored flag (0/1) to a bool.
pub const fn flag_to_bool(value: i32) -> bool {
    value != 0
}

/// Converts a bool to its stored flag form.
pub const fn bool_to_flag(value: bool) -> i32 {
    if value { 1 } else { 0 }
}

/// Formats a calendar date for storage (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::DataCorruption(e.to_string()))
}

/// Formats a timestamp for storage (RFC 3339).
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, PersistenceError> {
    timestamp
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::DataCorruption(e.to_string()))
}

fn corrupt(e: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::DataCorruption(e.to_string())
}

/// Converts an employee row into a master record.
///
/// # Errors
///
/// Returns `DataCorruption` if a stored enum string no longer parses.
pub fn employee_from_row(row: EmployeeRow) -> Result<EmployeeMaster, PersistenceError> {
    let (code, name, store_id, employment_type, is_pharmacist, position, status) = row;
    Ok(EmployeeMaster::new(
        EmployeeCode::new(&code),
        name,
        store_id,
        EmploymentType::from_str(&employment_type).map_err(corrupt)?,
        flag_to_bool(is_pharmacist),
        Position::parse(&position),
        EmploymentStatus::from_str(&status).map_err(corrupt)?,
    ))
}

/// Converts a snapshot row into a monthly snapshot.
///
/// The stored `block` and `stage` caches are loaded as-is, not recomputed.
///
/// # Errors
///
/// Returns `DataCorruption` if a stored enum string or code no longer
/// parses.
pub fn snapshot_from_row(row: SnapshotRow) -> Result<MonthlySnapshot, PersistenceError> {
    let (
        code,
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
        confirmed,
        block,
        stage,
    ) = row;

    let newbie_level: Option<NewbieLevel> = newbie_level
        .map(|raw| NewbieLevel::from_str(&raw).map_err(corrupt))
        .transpose()?;

    Ok(MonthlySnapshot {
        employee_code: EmployeeCode::new(&code),
        year_month: YearMonth::from_str(&year_month).map_err(corrupt)?,
        position: Position::parse(&position),
        employment_type: EmploymentType::from_str(&employment_type).map_err(corrupt)?,
        is_pharmacist: flag_to_bool(is_pharmacist),
        monthly_status: MonthlyStatus::from_str(&monthly_status).map_err(corrupt)?,
        work_days,
        work_hours,
        is_dual_position: flag_to_bool(is_dual_position),
        is_supervisor_rotation: flag_to_bool(is_supervisor_rotation),
        newbie_level,
        confirmed: flag_to_bool(confirmed),
        block: Block::from_code(block).map_err(corrupt)?,
        stage: Stage::from_label(&stage),
    })
}

/// Converts a movement row into a movement record.
///
/// # Errors
///
/// Returns `DataCorruption` if a stored date, type or timestamp no longer
/// parses.
pub fn movement_from_row(row: MovementRow) -> Result<MovementRecord, PersistenceError> {
    let (code, name, movement_type, movement_date, old_value, new_value, notes, created_by, created_at) =
        row;
    Ok(MovementRecord::new(
        EmployeeCode::new(&code),
        name,
        MovementType::from_str(&movement_type).map_err(corrupt)?,
        parse_movement_date(&movement_date).map_err(corrupt)?,
        old_value,
        new_value,
        notes,
        created_by,
        OffsetDateTime::parse(&created_at, &Rfc3339).map_err(corrupt)?,
    ))
}
