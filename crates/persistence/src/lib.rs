// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel-backed store for employee master records, monthly snapshots, and
//! movement history.
//!
//! `SQLite` is the default backend and carries the whole standard test suite
//! with no external infrastructure. `MySQL`/`MariaDB` is compiled in
//! unconditionally and exercised only by `#[ignore]`d validation tests that
//! `cargo xtask test-mariadb` drives against a Docker container.
//!
//! The two backends diverge enough in DDL syntax that migrations live in two
//! directories, `migrations/` (`SQLite`) and `migrations_mysql/`, which must
//! stay semantically identical. `cargo xtask verify-migrations` checks the
//! resulting schemas against each other.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use comp_block::EmployeeTimeline;
use comp_block::TimelineUpdate;
use comp_block_audit::{MovementKey, MovementRecord};
use comp_block_domain::{EmployeeCode, EmployeeMaster, MonthlySnapshot, YearMonth};
use diesel::{MysqlConnection, SqliteConnection};

/// Counter naming shared in-memory databases so parallel tests never
/// collide the way timestamp-based names can.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Expands one function body into `<name>_sqlite` and `<name>_mysql`
/// monomorphic twins, substituting only the connection type.
///
/// Diesel needs a concrete backend type at compile time, so queries cannot
/// be generic over the connection. The macro never adds logic of its own;
/// backend dispatch happens only in the `Persistence` adapter.
macro_rules! backend_fn {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident (
            $conn:ident : &mut _
            $(, $param:ident : $param_ty:ty)* $(,)?
        ) -> $ret:ty
        $body:block
    ) => {
        pastey::paste! {
            $(#[$meta])*
            $vis fn [<$name _sqlite>] (
                $conn: &mut SqliteConnection
                $(, $param : $param_ty)*
            ) -> $ret
            $body

            $(#[$meta])*
            $vis fn [<$name _mysql>] (
                $conn: &mut MysqlConnection
                $(, $param : $param_ty)*
            ) -> $ret
            $body
        }
    };
}

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;
use data_models::format_date;

/// The active backend connection. Chosen once at construction; every
/// adapter method dispatches over it.
pub enum BackendConnection {
    Sqlite(SqliteConnection),
    Mysql(MysqlConnection),
}

/// Store for employees, snapshots, and movement records, backend-agnostic
/// from the caller's side.
pub struct Persistence {
    pub(crate) conn: BackendConnection,
}

impl Persistence {
    /// Opens a fresh shared in-memory `SQLite` database and runs migrations.
    ///
    /// Each call gets its own database, named from an atomic counter, so
    /// concurrently running tests stay isolated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: BackendConnection::Sqlite(conn),
        })
    }

    /// Opens or creates a file-based `SQLite` database, runs migrations, and
    /// switches it to WAL mode for read concurrency.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: BackendConnection::Sqlite(conn),
        })
    }

    /// Connects to a `MySQL`/`MariaDB` database and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_mysql(database_url: &str) -> Result<Self, PersistenceError> {
        let mut conn: MysqlConnection = backend::mysql::initialize_database(database_url)?;
        backend::mysql::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: BackendConnection::Mysql(conn),
        })
    }

    /// Confirms the backend enforces foreign keys. Run at startup; a
    /// backend that silently skips enforcement corrupts referential data.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => conn.verify_foreign_key_enforcement(),
            BackendConnection::Mysql(conn) => conn.verify_foreign_key_enforcement(),
        }
    }

    // ========================================================================
    // Employees
    // ========================================================================

    /// Inserts or updates an employee master record.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn upsert_employee(&mut self, master: &EmployeeMaster) -> Result<(), PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => mutations::upsert_employee_sqlite(conn, master),
            BackendConnection::Mysql(conn) => mutations::upsert_employee_mysql(conn, master),
        }
    }

    /// Retrieves one employee master record by code.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no such employee exists.
    pub fn get_employee(
        &mut self,
        employee_code: &EmployeeCode,
    ) -> Result<EmployeeMaster, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::get_employee_sqlite(conn, employee_code.value())
            }
            BackendConnection::Mysql(conn) => {
                queries::get_employee_mysql(conn, employee_code.value())
            }
        }
    }

    /// Lists all employee master records.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(&mut self) -> Result<Vec<EmployeeMaster>, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => queries::list_employees_sqlite(conn),
            BackendConnection::Mysql(conn) => queries::list_employees_mysql(conn),
        }
    }

    /// Lists the employee master records assigned to one store.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees_by_store(
        &mut self,
        store_id: &str,
    ) -> Result<Vec<EmployeeMaster>, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::list_employees_by_store_sqlite(conn, store_id)
            }
            BackendConnection::Mysql(conn) => queries::list_employees_by_store_mysql(conn, store_id),
        }
    }

    // ========================================================================
    // Movements
    // ========================================================================

    /// Inserts a movement record and returns its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn insert_movement(&mut self, record: &MovementRecord) -> Result<i64, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => mutations::insert_movement_sqlite(conn, record),
            BackendConnection::Mysql(conn) => mutations::insert_movement_mysql(conn, record),
        }
    }

    /// Checks whether a movement with the given de-duplication key exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn movement_exists(&mut self, key: &MovementKey) -> Result<bool, PersistenceError> {
        let movement_date: String = format_date(key.movement_date)?;
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => queries::movement_exists_sqlite(
                conn,
                key.employee_code.value(),
                &movement_date,
                key.movement_type.as_str(),
            ),
            BackendConnection::Mysql(conn) => queries::movement_exists_mysql(
                conn,
                key.employee_code.value(),
                &movement_date,
                key.movement_type.as_str(),
            ),
        }
    }

    /// Lists the de-duplication keys of every recorded movement.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_movement_keys(&mut self) -> Result<Vec<MovementKey>, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => queries::list_movement_keys_sqlite(conn),
            BackendConnection::Mysql(conn) => queries::list_movement_keys_mysql(conn),
        }
    }

    /// Lists an employee's movement history in date order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_movements_for_employee(
        &mut self,
        employee_code: &EmployeeCode,
    ) -> Result<Vec<MovementRecord>, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::list_movements_for_employee_sqlite(conn, employee_code.value())
            }
            BackendConnection::Mysql(conn) => {
                queries::list_movements_for_employee_mysql(conn, employee_code.value())
            }
        }
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Inserts or updates a monthly snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn upsert_snapshot(&mut self, snapshot: &MonthlySnapshot) -> Result<(), PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => mutations::upsert_snapshot_sqlite(conn, snapshot),
            BackendConnection::Mysql(conn) => mutations::upsert_snapshot_mysql(conn, snapshot),
        }
    }

    /// Retrieves the snapshot for one (employee, month).
    ///
    /// # Errors
    ///
    /// Returns `SnapshotNotFound` if no snapshot exists for the month.
    pub fn get_snapshot(
        &mut self,
        employee_code: &EmployeeCode,
        year_month: YearMonth,
    ) -> Result<MonthlySnapshot, PersistenceError> {
        let month: String = year_month.to_string();
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::get_snapshot_sqlite(conn, employee_code.value(), &month)
            }
            BackendConnection::Mysql(conn) => {
                queries::get_snapshot_mysql(conn, employee_code.value(), &month)
            }
        }
    }

    /// Retrieves an employee's most recent snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn latest_snapshot(
        &mut self,
        employee_code: &EmployeeCode,
    ) -> Result<Option<MonthlySnapshot>, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::latest_snapshot_sqlite(conn, employee_code.value())
            }
            BackendConnection::Mysql(conn) => {
                queries::latest_snapshot_mysql(conn, employee_code.value())
            }
        }
    }

    /// Lists an employee's snapshots in chronological order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_snapshots_for_employee(
        &mut self,
        employee_code: &EmployeeCode,
    ) -> Result<Vec<MonthlySnapshot>, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::list_snapshots_for_employee_sqlite(conn, employee_code.value())
            }
            BackendConnection::Mysql(conn) => {
                queries::list_snapshots_for_employee_mysql(conn, employee_code.value())
            }
        }
    }

    // ========================================================================
    // Timelines
    // ========================================================================

    /// Loads an employee's full timeline (master record plus all snapshots).
    ///
    /// A missing master record is not an error; propagation can run against
    /// employees known only through their snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails or a stored row is corrupt.
    pub fn load_timeline(
        &mut self,
        employee_code: &EmployeeCode,
    ) -> Result<EmployeeTimeline, PersistenceError> {
        let master: Option<EmployeeMaster> = match self.get_employee(employee_code) {
            Ok(master) => Some(master),
            Err(PersistenceError::EmployeeNotFound(_)) => None,
            Err(e) => return Err(e),
        };

        let mut timeline: EmployeeTimeline = EmployeeTimeline::new(master);
        for snapshot in self.list_snapshots_for_employee(employee_code)? {
            timeline.upsert(snapshot);
        }

        Ok(timeline)
    }

    /// Persists the touched months and master record of a timeline update.
    ///
    /// Untouched months are never rewritten, so replaying an already-applied
    /// movement performs no writes.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn save_timeline_update(&mut self, update: &TimelineUpdate) -> Result<(), PersistenceError> {
        for month in &update.touched_months {
            if let Some(snapshot) = update.timeline.snapshot(*month) {
                let snapshot: MonthlySnapshot = snapshot.clone();
                self.upsert_snapshot(&snapshot)?;
            }
        }

        if update.master_changed
            && let Some(master) = &update.timeline.master
        {
            let master: EmployeeMaster = master.clone();
            self.upsert_employee(&master)?;
        }

        Ok(())
    }
}
