// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API layer.
//!
//! These types are the API contract. They are distinct from domain types
//! and carry only strings and plain values, so the server can expose them
//! directly as wire payloads.

use serde::{Deserialize, Serialize};

/// One movement row submitted in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRowRequest {
    /// The employee code.
    pub employee_code: String,
    /// The employee display name.
    pub employee_name: String,
    /// The movement type (e.g. "promotion").
    pub movement_type: String,
    /// The target position. Required for promotions, ignored otherwise.
    #[serde(default)]
    pub position: Option<String>,
    /// The effective date in `YYYY-MM-DD` form.
    pub effective_date: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// API request to process a batch of movements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementBatchRequest {
    /// The movement rows to record and propagate.
    pub movements: Vec<MovementRowRequest>,
    /// The operator submitting the batch.
    pub created_by: String,
}

/// A per-row failure within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowErrorInfo {
    /// The 1-based row number within the submitted batch.
    pub row: usize,
    /// What went wrong with the row.
    pub message: String,
}

/// API response for a processed movement batch.
///
/// `success` is true when every non-duplicate row was recorded and
/// propagated; per-row failures leave it false without undoing the rows
/// that did commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementBatchResponse {
    /// Whether the batch completed without per-row failures.
    pub success: bool,
    /// Number of movements recorded and propagated.
    pub created: usize,
    /// Number of rows skipped as duplicates.
    pub skipped: usize,
    /// Per-row failures (validation and storage).
    pub errors: Vec<RowErrorInfo>,
    /// A human-readable summary.
    pub message: String,
}

/// One promotion row submitted in a promotion batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRowRequest {
    /// The employee code.
    pub employee_code: String,
    /// The employee display name.
    pub employee_name: String,
    /// The new position.
    pub position: String,
    /// The effective date in `YYYY-MM-DD` form.
    pub effective_date: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// API request to process a batch of promotions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionBatchRequest {
    /// The promotion rows to record and propagate.
    pub promotions: Vec<PromotionRowRequest>,
    /// The operator submitting the batch.
    pub created_by: String,
}

/// Movement information for history listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInfo {
    /// The employee code.
    pub employee_code: String,
    /// The employee display name.
    pub employee_name: String,
    /// The movement type.
    pub movement_type: String,
    /// The effective date in `YYYY-MM-DD` form.
    pub movement_date: String,
    /// The value before the movement.
    pub old_value: String,
    /// The value after the movement.
    pub new_value: String,
    /// Free-form notes.
    pub notes: Option<String>,
    /// The operator who recorded the movement.
    pub created_by: String,
}

/// API response for an employee's movement history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMovementsResponse {
    /// The employee code.
    pub employee_code: String,
    /// The movement history in date order.
    pub movements: Vec<MovementInfo>,
}

/// Snapshot information for timeline listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    /// The employee code.
    pub employee_code: String,
    /// The month in `YYYY-MM` form.
    pub year_month: String,
    /// The position code.
    pub position: String,
    /// The employment type.
    pub employment_type: String,
    /// Whether the employee is a licensed pharmacist.
    pub is_pharmacist: bool,
    /// The monthly attendance status.
    pub monthly_status: String,
    /// Days worked in the month.
    pub work_days: i32,
    /// Hours worked in the month.
    pub work_hours: f64,
    /// Whether the employee holds a dual position.
    pub is_dual_position: bool,
    /// Whether the month is a supervisor rotation month.
    pub is_supervisor_rotation: bool,
    /// The newbie training level, if any.
    pub newbie_level: Option<String>,
    /// Whether the snapshot has been confirmed.
    pub confirmed: bool,
    /// The calculation block code (0-6).
    pub block: i32,
    /// The block label.
    pub block_label: String,
    /// The stage export label.
    pub stage: String,
}

/// API response for an employee's snapshot timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSnapshotsResponse {
    /// The employee code.
    pub employee_code: String,
    /// The snapshots in chronological order.
    pub snapshots: Vec<SnapshotInfo>,
}
