// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly snapshot mutations.

use comp_block_domain::{MonthlySnapshot, NewbieLevel};
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::bool_to_flag;
use crate::diesel_schema::monthly_snapshots;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts or updates a monthly snapshot, keyed by (employee, month).
///
/// The cached `block` and `stage` classifications are stored alongside the
/// inputs so reads never have to reclassify.
///
/// Written as select-then-insert-or-update so the same body works on
/// both backends.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `snapshot` - The snapshot to persist
///
/// # Errors
///
/// Returns an error if the insert or update fails.
pub fn upsert_snapshot(
    conn: &mut _,
    snapshot: &MonthlySnapshot,
) -> Result<(), PersistenceError> {
    let code: &str = snapshot.employee_code.value();
    let year_month: String = snapshot.year_month.to_string();
    let newbie_level: Option<&str> = snapshot.newbie_level.as_ref().map(NewbieLevel::as_str);

    let existing: i64 = monthly_snapshots::table
        .filter(monthly_snapshots::employee_code.eq(code))
        .filter(monthly_snapshots::year_month.eq(&year_month))
        .count()
        .get_result::<i64>(conn)?;

    if existing > 0 {
        diesel::update(
            monthly_snapshots::table
                .filter(monthly_snapshots::employee_code.eq(code))
                .filter(monthly_snapshots::year_month.eq(&year_month)),
        )
        .set((
            monthly_snapshots::position.eq(snapshot.position.as_str()),
            monthly_snapshots::employment_type.eq(snapshot.employment_type.as_str()),
            monthly_snapshots::is_pharmacist.eq(bool_to_flag(snapshot.is_pharmacist)),
            monthly_snapshots::monthly_status.eq(snapshot.monthly_status.as_str()),
            monthly_snapshots::work_days.eq(snapshot.work_days),
            monthly_snapshots::work_hours.eq(snapshot.work_hours),
            monthly_snapshots::is_dual_position.eq(bool_to_flag(snapshot.is_dual_position)),
            monthly_snapshots::is_supervisor_rotation
                .eq(bool_to_flag(snapshot.is_supervisor_rotation)),
            monthly_snapshots::newbie_level.eq(newbie_level),
            monthly_snapshots::confirmed.eq(bool_to_flag(snapshot.confirmed)),
            monthly_snapshots::block.eq(snapshot.block.code()),
            monthly_snapshots::stage.eq(snapshot.stage.as_str()),
        ))
        .execute(conn)?;

        debug!(
            employee_code = code,
            year_month = year_month.as_str(),
            "Updated monthly snapshot"
        );
    } else {
        diesel::insert_into(monthly_snapshots::table)
            .values((
                monthly_snapshots::employee_code.eq(code),
                monthly_snapshots::year_month.eq(&year_month),
                monthly_snapshots::position.eq(snapshot.position.as_str()),
                monthly_snapshots::employment_type.eq(snapshot.employment_type.as_str()),
                monthly_snapshots::is_pharmacist.eq(bool_to_flag(snapshot.is_pharmacist)),
                monthly_snapshots::monthly_status.eq(snapshot.monthly_status.as_str()),
                monthly_snapshots::work_days.eq(snapshot.work_days),
                monthly_snapshots::work_hours.eq(snapshot.work_hours),
                monthly_snapshots::is_dual_position.eq(bool_to_flag(snapshot.is_dual_position)),
                monthly_snapshots::is_supervisor_rotation
                    .eq(bool_to_flag(snapshot.is_supervisor_rotation)),
                monthly_snapshots::newbie_level.eq(newbie_level),
                monthly_snapshots::confirmed.eq(bool_to_flag(snapshot.confirmed)),
                monthly_snapshots::block.eq(snapshot.block.code()),
                monthly_snapshots::stage.eq(snapshot.stage.as_str()),
            ))
            .execute(conn)?;

        debug!(
            employee_code = code,
            year_month = year_month.as_str(),
            "Inserted monthly snapshot"
        );
    }

    Ok(())
}
}
