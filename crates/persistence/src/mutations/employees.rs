// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee master record mutations.

use comp_block_domain::EmployeeMaster;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::bool_to_flag;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts or updates an employee master record, keyed by employee code.
///
/// Written as select-then-insert-or-update so the same body works on
/// both backends.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `master` - The master record to persist
///
/// # Errors
///
/// Returns an error if the insert or update fails.
pub fn upsert_employee(
    conn: &mut _,
    master: &EmployeeMaster,
) -> Result<(), PersistenceError> {
    let code: &str = master.employee_code.value();

    let existing: i64 = employees::table
        .filter(employees::employee_code.eq(code))
        .count()
        .get_result::<i64>(conn)?;

    if existing > 0 {
        diesel::update(employees::table.filter(employees::employee_code.eq(code)))
            .set((
                employees::employee_name.eq(&master.employee_name),
                employees::store_id.eq(&master.store_id),
                employees::employment_type.eq(master.employment_type.as_str()),
                employees::is_pharmacist.eq(bool_to_flag(master.is_pharmacist)),
                employees::current_position.eq(master.current_position.as_str()),
                employees::employment_status.eq(master.employment_status.as_str()),
            ))
            .execute(conn)?;

        debug!(employee_code = code, "Updated employee master record");
    } else {
        diesel::insert_into(employees::table)
            .values((
                employees::employee_code.eq(code),
                employees::employee_name.eq(&master.employee_name),
                employees::store_id.eq(&master.store_id),
                employees::employment_type.eq(master.employment_type.as_str()),
                employees::is_pharmacist.eq(bool_to_flag(master.is_pharmacist)),
                employees::current_position.eq(master.current_position.as_str()),
                employees::employment_status.eq(master.employment_status.as_str()),
            ))
            .execute(conn)?;

        debug!(employee_code = code, "Inserted employee master record");
    }

    Ok(())
}
}
