// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries, one module per table.
//!
//! Every query is expanded by `backend_fn!` into `_sqlite` and `_mysql`
//! twins; the `Persistence` adapter picks the one matching its connection.

pub mod employees;
pub mod movements;
pub mod snapshots;

pub use employees::{
    get_employee_mysql, get_employee_sqlite, list_employees_by_store_mysql,
    list_employees_by_store_sqlite, list_employees_mysql, list_employees_sqlite,
};
pub use movements::{
    list_movement_keys_mysql, list_movement_keys_sqlite, list_movements_for_employee_mysql,
    list_movements_for_employee_sqlite, movement_exists_mysql, movement_exists_sqlite,
};
pub use snapshots::{
    get_snapshot_mysql, get_snapshot_sqlite, latest_snapshot_mysql, latest_snapshot_sqlite,
    list_snapshots_for_employee_mysql, list_snapshots_for_employee_sqlite,
};
