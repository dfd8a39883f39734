// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use comp_block_audit::{MovementKey, MovementRecord};
use comp_block_domain::{
    EmployeeCode, EmployeeMaster, MovementType, Position, parse_movement_date,
    validate_employee_code, validate_employee_name,
};
use time::{Date, OffsetDateTime};

use crate::resolve::{ResolvedValues, resolve_transition};

/// One raw movement row as submitted by a caller.
///
/// All fields are unvalidated strings straight from the request payload or
/// spreadsheet import. Validation happens in [`record_batch`], per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementInput {
    /// Employee code.
    pub employee_code: String,
    /// Employee display name.
    pub employee_name: String,
    /// Movement type string (e.g. "promotion").
    pub movement_type: String,
    /// Target position. Required for promotions, ignored otherwise.
    pub position: Option<String>,
    /// Effective date in `YYYY-MM-DD` form.
    pub effective_date: String,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// A validation failure for one row of a batch.
///
/// Row numbers are 1-based to match how operators count spreadsheet rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// The 1-based row number within the submitted batch.
    pub row: usize,
    /// What was wrong with the row.
    pub message: String,
}

/// The outcome of recording one batch of movements.
///
/// A batch never aborts on a bad row: invalid rows land in `errors`,
/// duplicates are counted in `skipped`, and everything else is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Accepted movement records, sorted by effective date so that
    /// several movements for the same employee apply chronologically
    /// regardless of submission order.
    pub accepted: Vec<MovementRecord>,
    /// Rows skipped as duplicates of existing or in-batch movements.
    pub skipped: usize,
    /// Per-row validation failures.
    pub errors: Vec<RowError>,
}

/// The data a batch is recorded against: existing movement keys for
/// de-duplication and master records for old-value resolution.
///
/// Callers load this from persistence once per batch; recording itself
/// performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct BatchContext {
    /// Keys of every movement already in history.
    pub existing_keys: HashSet<MovementKey>,
    /// Master records keyed by employee code.
    pub employees: HashMap<EmployeeCode, EmployeeMaster>,
}

impl BatchContext {
    /// Creates a batch context.
    #[must_use]
    pub const fn new(
        existing_keys: HashSet<MovementKey>,
        employees: HashMap<EmployeeCode, EmployeeMaster>,
    ) -> Self {
        Self {
            existing_keys,
            employees,
        }
    }
}

/// Validates, de-duplicates and resolves a batch of movement inputs into
/// movement records.
///
/// Rows are processed independently: a bad row is reported in
/// `BatchOutcome::errors` and does not stop the batch. A row whose
/// (employee, date, type) key already exists in history, or earlier in the
/// same batch, is silently counted as skipped so re-submitted imports are
/// safe.
///
/// Accepted records come back sorted by effective date. The sort is
/// stable, so rows submitted for the same employee on the same date keep
/// their submission order.
#[must_use]
pub fn record_batch(
    inputs: &[MovementInput],
    context: &BatchContext,
    created_by: &str,
    created_at: OffsetDateTime,
) -> BatchOutcome {
    let mut accepted: Vec<MovementRecord> = Vec::new();
    let mut errors: Vec<RowError> = Vec::new();
    let mut skipped: usize = 0;
    let mut seen_in_batch: HashSet<MovementKey> = HashSet::new();

    for (index, input) in inputs.iter().enumerate() {
        let row: usize = index + 1;

        if let Err(e) = validate_employee_code(&input.employee_code) {
            errors.push(RowError {
                row,
                message: e.to_string(),
            });
            continue;
        }
        if let Err(e) = validate_employee_name(&input.employee_name) {
            errors.push(RowError {
                row,
                message: e.to_string(),
            });
            continue;
        }

        let movement_type: MovementType = match MovementType::from_str(input.movement_type.trim())
        {
            Ok(movement_type) => movement_type,
            Err(e) => {
                errors.push(RowError {
                    row,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let movement_date: Date = match parse_movement_date(&input.effective_date) {
            Ok(date) => date,
            Err(e) => {
                errors.push(RowError {
                    row,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let requested_position: Option<Position> = match parse_requested_position(input) {
            Ok(position) => position,
            Err(message) => {
                errors.push(RowError { row, message });
                continue;
            }
        };

        let employee_code: EmployeeCode = EmployeeCode::new(&input.employee_code);
        let key: MovementKey =
            MovementKey::new(employee_code.clone(), movement_date, movement_type);
        if context.existing_keys.contains(&key) || !seen_in_batch.insert(key) {
            skipped += 1;
            continue;
        }

        let master: Option<&EmployeeMaster> = context.employees.get(&employee_code);
        let resolved: ResolvedValues =
            match resolve_transition(movement_type, master, requested_position.as_ref()) {
                Ok(resolved) => resolved,
                Err(e) => {
                    errors.push(RowError {
                        row,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

        accepted.push(MovementRecord::new(
            employee_code,
            input.employee_name.trim().to_string(),
            movement_type,
            movement_date,
            resolved.old_value,
            resolved.new_value,
            input.notes.clone(),
            created_by.to_string(),
            created_at,
        ));
    }

    accepted.sort_by_key(|record| record.movement_date);

    BatchOutcome {
        accepted,
        skipped,
        errors,
    }
}

/// Parses the position field when required by the movement type.
fn parse_requested_position(input: &MovementInput) -> Result<Option<Position>, String> {
    if input.movement_type.trim() != MovementType::Promotion.as_str() {
        return Ok(None);
    }
    match &input.position {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(Position::parse(raw))),
        _ => Err(String::from("Promotion movements require a target position")),
    }
}
