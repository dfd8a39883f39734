// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `MySQL`/`MariaDB` connection setup and embedded migrations.
//!
//! This backend exists for explicit opt-in validation, not as the default
//! runtime store. The only callers are `#[ignore]`d tests driven by
//! `cargo xtask test-mariadb`, which provisions a `MariaDB` container, sets
//! `DATABASE_URL` and `COMP_BLOCK_TEST_BACKEND`, runs the ignored tests,
//! and tears the container down.
//!
//! `MYSQL_MIGRATIONS` embeds `migrations_mysql/`, which must stay
//! semantically identical to the `SQLite` `migrations/` directory. Add new
//! migrations to both; `cargo xtask verify-migrations` compares the
//! resulting schemas.

use diesel::dsl::sql;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

#[derive(QueryableByName)]
struct ForeignKeyCheck {
    #[diesel(sql_type = Integer)]
    fk_checks: i32,
}

/// Returns the auto-increment id of the most recent insert on this
/// connection, via `LAST_INSERT_ID()`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut MysqlConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("LAST_INSERT_ID()")).get_result(conn)?)
}

/// Migrations in `MySQL` syntax (`AUTO_INCREMENT`, `VARCHAR` widths,
/// backticked reserved words), mirroring `migrations/` table for table.
pub const MYSQL_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations_mysql");

/// Connects to a `MySQL` database and migrates it.
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<MysqlConnection, PersistenceError> {
    info!("Initializing MySQL database at: {}", database_url);

    let mut conn: MysqlConnection = MysqlConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    run_migrations(&mut conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Applies any pending migrations.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut MysqlConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running MySQL database migrations");
    conn.run_pending_migrations(MYSQL_MIGRATIONS)?;
    Ok(())
}

/// Checks the `foreign_key_checks` system variable.
///
/// `InnoDB` enforces foreign keys by default, but the variable can be
/// switched off per session, so the startup check still runs.
///
/// # Errors
///
/// Returns `ForeignKeyEnforcementNotEnabled` if the variable is off, or
/// `QueryFailed` if it cannot be read.
pub fn verify_foreign_key_enforcement(conn: &mut MysqlConnection) -> Result<(), PersistenceError> {
    let result: Result<ForeignKeyCheck, _> =
        diesel::sql_query("SELECT @@foreign_key_checks AS fk_checks").get_result(conn);

    match result {
        Ok(check) => {
            if check.fk_checks == 1 {
                info!("MySQL foreign key enforcement is enabled");
                Ok(())
            } else {
                Err(PersistenceError::ForeignKeyEnforcementNotEnabled)
            }
        }
        Err(e) => Err(PersistenceError::QueryFailed(format!(
            "Failed to verify foreign key enforcement: {e}"
        ))),
    }
}
