// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Movement record mutations.
//!
//! Movement records are append-only. The unique index on
//! (`employee_code`, `movement_date`, `movement_type`) is the last line of
//! defense; callers are expected to de-duplicate before inserting.

use comp_block_audit::MovementRecord;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::data_models::{format_date, format_timestamp};
use crate::diesel_schema::movement_records;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a movement record.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `record` - The movement record to persist
///
/// # Returns
///
/// The movement ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the insert fails, including when a record with the
/// same de-duplication key already exists.
pub fn insert_movement(
    conn: &mut _,
    record: &MovementRecord,
) -> Result<i64, PersistenceError> {
    let movement_date: String = format_date(record.movement_date)?;
    let created_at: String = format_timestamp(record.created_at)?;

    diesel::insert_into(movement_records::table)
        .values((
            movement_records::employee_code.eq(record.employee_code.value()),
            movement_records::employee_name.eq(&record.employee_name),
            movement_records::movement_type.eq(record.movement_type.as_str()),
            movement_records::movement_date.eq(&movement_date),
            movement_records::old_value.eq(&record.old_value),
            movement_records::new_value.eq(&record.new_value),
            movement_records::notes.eq(&record.notes),
            movement_records::created_by.eq(&record.created_by),
            movement_records::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let movement_id: i64 = conn.get_last_insert_rowid()?;

    debug!(
        employee_code = record.employee_code.value(),
        movement_id, "Inserted movement record"
    );

    Ok(movement_id)
}
}
