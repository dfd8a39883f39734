// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations, one module per table.
//!
//! Upserts are written select-then-insert-or-update so the same body works
//! on both backends; insert ids come through the `PersistenceBackend`
//! helper since `RETURNING` support differs between them.

pub mod employees;
pub mod movements;
pub mod snapshots;

pub use employees::{upsert_employee_mysql, upsert_employee_sqlite};
pub use movements::{insert_movement_mysql, insert_movement_sqlite};
pub use snapshots::{upsert_snapshot_mysql, upsert_snapshot_sqlite};
