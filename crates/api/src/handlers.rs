// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for batch processing and read-only queries.
//!
//! Batch handlers orchestrate the full pipeline: load context from
//! persistence, record the batch through the pure core, then persist and
//! propagate each accepted movement. Per-row failures never abort the
//! batch; rows that committed before a failure stay committed.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use comp_block::{BatchContext, BatchOutcome, MovementInput, apply_movement, record_batch};
use comp_block_audit::{MovementKey, MovementRecord};
use comp_block_domain::{
    EmployeeCode, EmployeeMaster, MonthlySnapshot, MovementType, NewbieLevel, YearMonth,
    parse_movement_date, validate_employee_code,
};
use comp_block_persistence::Persistence;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    ListMovementsResponse, ListSnapshotsResponse, MovementBatchRequest, MovementBatchResponse,
    MovementInfo, MovementRowRequest, PromotionBatchRequest, RowErrorInfo, SnapshotInfo,
};

/// Processes a batch of movements: record, persist, and propagate.
///
/// Per-row validation failures and storage failures are reported in the
/// response and never abort the batch. Duplicate rows are counted in
/// `skipped`.
///
/// # Arguments
///
/// * `persistence` - The persistence adapter
/// * `request` - The batch to process
///
/// # Errors
///
/// Returns an error if the batch is empty, the operator is missing, or
/// loading the batch context fails. Per-row failures are not errors.
pub fn process_movement_batch(
    persistence: &mut Persistence,
    request: &MovementBatchRequest,
) -> Result<MovementBatchResponse, ApiError> {
    if request.movements.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("movements"),
            message: String::from("Batch cannot be empty"),
        });
    }
    if request.created_by.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("created_by"),
            message: String::from("Operator cannot be empty"),
        });
    }

    let inputs: Vec<MovementInput> = request.movements.iter().map(to_movement_input).collect();
    let row_numbers: Vec<usize> = (1..=inputs.len()).collect();

    run_batch(persistence, &inputs, &row_numbers, &request.created_by)
}

/// Processes a batch of promotions, optionally scoped to one store.
///
/// When `store_id` is given, rows whose employee belongs to a different
/// store are rejected as per-row errors; unknown employees pass through.
///
/// # Arguments
///
/// * `persistence` - The persistence adapter
/// * `request` - The promotion batch to process
/// * `store_id` - When set, the store the batch is scoped to
///
/// # Errors
///
/// Returns an error if the batch is empty, the operator is missing, or
/// loading the batch context fails. Per-row failures are not errors.
pub fn process_promotion_batch(
    persistence: &mut Persistence,
    request: &PromotionBatchRequest,
    store_id: Option<&str>,
) -> Result<MovementBatchResponse, ApiError> {
    if request.promotions.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("promotions"),
            message: String::from("Batch cannot be empty"),
        });
    }
    if request.created_by.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("created_by"),
            message: String::from("Operator cannot be empty"),
        });
    }

    let mut inputs: Vec<MovementInput> = Vec::new();
    let mut row_numbers: Vec<usize> = Vec::new();
    let mut scope_errors: Vec<RowErrorInfo> = Vec::new();

    for (index, row) in request.promotions.iter().enumerate() {
        let row_number: usize = index + 1;

        if let Some(store) = store_id
            && let Some(assigned) = employee_store(persistence, &row.employee_code)?
            && assigned != store
        {
            scope_errors.push(RowErrorInfo {
                row: row_number,
                message: format!(
                    "Employee '{}' belongs to store '{assigned}', not '{store}'",
                    row.employee_code
                ),
            });
            continue;
        }

        inputs.push(MovementInput {
            employee_code: row.employee_code.clone(),
            employee_name: row.employee_name.clone(),
            movement_type: String::from("promotion"),
            position: Some(row.position.clone()),
            effective_date: row.effective_date.clone(),
            notes: row.notes.clone(),
        });
        row_numbers.push(row_number);
    }

    let mut response: MovementBatchResponse = if inputs.is_empty() {
        MovementBatchResponse {
            success: true,
            created: 0,
            skipped: 0,
            errors: Vec::new(),
            message: String::new(),
        }
    } else {
        run_batch(persistence, &inputs, &row_numbers, &request.created_by)?
    };

    if !scope_errors.is_empty() {
        response.errors.extend(scope_errors);
        response.errors.sort_by_key(|e| e.row);
        response.success = false;
        response.message = summary_message(response.created, response.skipped, &response.errors);
    }

    Ok(response)
}

/// Lists an employee's movement history in date order.
///
/// # Errors
///
/// Returns an error if the employee code is invalid or the query fails.
pub fn list_employee_movements(
    persistence: &mut Persistence,
    employee_code: &str,
) -> Result<ListMovementsResponse, ApiError> {
    validate_employee_code(employee_code).map_err(translate_domain_error)?;
    let code: EmployeeCode = EmployeeCode::new(employee_code);

    let movements: Vec<MovementInfo> = persistence
        .list_movements_for_employee(&code)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|record| MovementInfo {
            employee_code: record.employee_code.value().to_string(),
            employee_name: record.employee_name,
            movement_type: record.movement_type.as_str().to_string(),
            movement_date: record.movement_date.to_string(),
            old_value: record.old_value,
            new_value: record.new_value,
            notes: record.notes,
            created_by: record.created_by,
        })
        .collect();

    Ok(ListMovementsResponse {
        employee_code: code.value().to_string(),
        movements,
    })
}

/// Lists an employee's snapshot timeline in chronological order.
///
/// # Errors
///
/// Returns an error if the employee code is invalid or the query fails.
pub fn list_employee_snapshots(
    persistence: &mut Persistence,
    employee_code: &str,
) -> Result<ListSnapshotsResponse, ApiError> {
    validate_employee_code(employee_code).map_err(translate_domain_error)?;
    let code: EmployeeCode = EmployeeCode::new(employee_code);

    let snapshots: Vec<SnapshotInfo> = persistence
        .list_snapshots_for_employee(&code)
        .map_err(translate_persistence_error)?
        .iter()
        .map(snapshot_info)
        .collect();

    Ok(ListSnapshotsResponse {
        employee_code: code.value().to_string(),
        snapshots,
    })
}

/// Fetches a single snapshot by employee and month.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no snapshot exists for the month.
pub fn get_employee_snapshot(
    persistence: &mut Persistence,
    employee_code: &str,
    year_month: &str,
) -> Result<SnapshotInfo, ApiError> {
    validate_employee_code(employee_code).map_err(translate_domain_error)?;
    let code: EmployeeCode = EmployeeCode::new(employee_code);
    let month: YearMonth = YearMonth::from_str(year_month).map_err(translate_domain_error)?;

    let snapshot: MonthlySnapshot = persistence
        .get_snapshot(&code, month)
        .map_err(translate_persistence_error)?;

    Ok(snapshot_info(&snapshot))
}

/// Records, persists, and propagates one prepared batch.
///
/// `row_numbers[i]` is the caller-visible row number of `inputs[i]`; all
/// per-row errors are reported against those numbers.
fn run_batch(
    persistence: &mut Persistence,
    inputs: &[MovementInput],
    row_numbers: &[usize],
    created_by: &str,
) -> Result<MovementBatchResponse, ApiError> {
    let context: BatchContext = load_batch_context(persistence)?;
    let outcome: BatchOutcome = record_batch(inputs, &context, created_by, OffsetDateTime::now_utc());

    let key_rows: HashMap<MovementKey, usize> = row_numbers_by_key(inputs, row_numbers);

    let mut errors: Vec<RowErrorInfo> = outcome
        .errors
        .iter()
        .map(|e| RowErrorInfo {
            row: row_numbers.get(e.row - 1).copied().unwrap_or(e.row),
            message: e.message.clone(),
        })
        .collect();

    let mut created: usize = 0;
    for record in &outcome.accepted {
        match persist_and_propagate(persistence, record) {
            Ok(()) => created += 1,
            Err(e) => {
                warn!(
                    employee_code = record.employee_code.value(),
                    error = %e,
                    "Failed to persist movement"
                );
                errors.push(RowErrorInfo {
                    row: key_rows.get(&record.key()).copied().unwrap_or(0),
                    message: e.to_string(),
                });
            }
        }
    }

    errors.sort_by_key(|e| e.row);

    let response: MovementBatchResponse = MovementBatchResponse {
        success: errors.is_empty(),
        created,
        skipped: outcome.skipped,
        message: summary_message(created, outcome.skipped, &errors),
        errors,
    };

    info!(
        created = response.created,
        skipped = response.skipped,
        errors = response.errors.len(),
        "Processed movement batch"
    );

    Ok(response)
}

/// Inserts one movement record and propagates it across the timeline.
fn persist_and_propagate(
    persistence: &mut Persistence,
    record: &MovementRecord,
) -> Result<(), ApiError> {
    persistence
        .insert_movement(record)
        .map_err(translate_persistence_error)?;

    let all_movements: Vec<MovementRecord> = persistence
        .list_movements_for_employee(&record.employee_code)
        .map_err(translate_persistence_error)?;

    let timeline = persistence
        .load_timeline(&record.employee_code)
        .map_err(translate_persistence_error)?;

    let update = apply_movement(&timeline, record, &all_movements);

    persistence
        .save_timeline_update(&update)
        .map_err(translate_persistence_error)
}

/// Loads the de-duplication keys and master records a batch records against.
fn load_batch_context(persistence: &mut Persistence) -> Result<BatchContext, ApiError> {
    let existing_keys: HashSet<MovementKey> = persistence
        .list_movement_keys()
        .map_err(translate_persistence_error)?
        .into_iter()
        .collect();

    let employees: HashMap<EmployeeCode, EmployeeMaster> = persistence
        .list_employees()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|master| (master.employee_code.clone(), master))
        .collect();

    Ok(BatchContext::new(existing_keys, employees))
}

/// Maps each parseable input row's de-duplication key to its caller-visible
/// row number. Rows that do not parse are reported by the recorder instead.
fn row_numbers_by_key(
    inputs: &[MovementInput],
    row_numbers: &[usize],
) -> HashMap<MovementKey, usize> {
    let mut map: HashMap<MovementKey, usize> = HashMap::new();
    for (input, row) in inputs.iter().zip(row_numbers) {
        let Ok(movement_date) = parse_movement_date(&input.effective_date) else {
            continue;
        };
        let Ok(movement_type) = MovementType::from_str(&input.movement_type) else {
            continue;
        };
        let key: MovementKey = MovementKey::new(
            EmployeeCode::new(&input.employee_code),
            movement_date,
            movement_type,
        );
        map.entry(key).or_insert(*row);
    }
    map
}

/// Looks up the store an employee is assigned to, if the employee is known.
fn employee_store(
    persistence: &mut Persistence,
    employee_code: &str,
) -> Result<Option<String>, ApiError> {
    match persistence.get_employee(&EmployeeCode::new(employee_code)) {
        Ok(master) => Ok(Some(master.store_id)),
        Err(comp_block_persistence::PersistenceError::EmployeeNotFound(_)) => Ok(None),
        Err(e) => Err(translate_persistence_error(e)),
    }
}

fn to_movement_input(row: &MovementRowRequest) -> MovementInput {
    MovementInput {
        employee_code: row.employee_code.clone(),
        employee_name: row.employee_name.clone(),
        movement_type: row.movement_type.clone(),
        position: row.position.clone(),
        effective_date: row.effective_date.clone(),
        notes: row.notes.clone(),
    }
}

fn snapshot_info(snapshot: &MonthlySnapshot) -> SnapshotInfo {
    SnapshotInfo {
        employee_code: snapshot.employee_code.value().to_string(),
        year_month: snapshot.year_month.to_string(),
        position: snapshot.position.as_str().to_string(),
        employment_type: snapshot.employment_type.as_str().to_string(),
        is_pharmacist: snapshot.is_pharmacist,
        monthly_status: snapshot.monthly_status.as_str().to_string(),
        work_days: snapshot.work_days,
        work_hours: snapshot.work_hours,
        is_dual_position: snapshot.is_dual_position,
        is_supervisor_rotation: snapshot.is_supervisor_rotation,
        newbie_level: snapshot
            .newbie_level
            .as_ref()
            .map(|level| NewbieLevel::as_str(level).to_string()),
        confirmed: snapshot.confirmed,
        block: snapshot.block.code(),
        block_label: snapshot.block.label().to_string(),
        stage: snapshot.stage.as_str().to_string(),
    }
}

fn summary_message(created: usize, skipped: usize, errors: &[RowErrorInfo]) -> String {
    format!(
        "Processed batch: {created} created, {skipped} skipped, {} failed",
        errors.len()
    )
}
