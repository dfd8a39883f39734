// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and validation for bulk movement import.
//!
//! This module parses and validates movement CSV data without persisting
//! anything. Valid rows convert directly into batch requests for the
//! standard pipeline.

use std::collections::HashMap;
use std::str::FromStr;

use csv::StringRecord;

use comp_block_domain::{
    MovementType, parse_movement_date, validate_employee_code, validate_employee_name,
};

use crate::error::ApiError;
use crate::request_response::MovementRowRequest;

/// A single row result from CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The parsed employee code (if present).
    pub employee_code: Option<String>,
    /// The parsed employee name (if present).
    pub employee_name: Option<String>,
    /// The parsed movement type (if present).
    pub movement_type: Option<String>,
    /// The parsed effective date (if present).
    pub effective_date: Option<String>,
    /// The parsed position (if present).
    pub position: Option<String>,
    /// The row status.
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Status of a CSV row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// Result of CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPreviewResult {
    /// Per-row validation results.
    pub rows: Vec<CsvRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

impl CsvPreviewResult {
    /// Converts the valid rows into batch row requests, in CSV order.
    #[must_use]
    pub fn to_batch_rows(&self) -> Vec<MovementRowRequest> {
        self.rows
            .iter()
            .filter(|row| row.status == CsvRowStatus::Valid)
            .filter_map(|row| {
                Some(MovementRowRequest {
                    employee_code: row.employee_code.clone()?,
                    employee_name: row.employee_name.clone()?,
                    movement_type: row.movement_type.clone()?,
                    position: row.position.clone(),
                    effective_date: row.effective_date.clone()?,
                    notes: None,
                })
            })
            .collect()
    }
}

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &[
    "employee_code",
    "employee_name",
    "movement_type",
    "effective_date",
];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();

    for (idx, header) in headers.iter().enumerate() {
        let normalized: String = normalize_header(header);
        header_map.insert(normalized, idx);
    }

    let mut missing: Vec<String> = Vec::new();
    for required in REQUIRED_HEADERS {
        if !header_map.contains_key(*required) {
            missing.push(String::from(*required));
        }
    }

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Validates one CSV record into a row result.
fn validate_csv_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    row_number: usize,
) -> CsvRowResult {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let employee_code: Option<String> = get_field("employee_code");
    let employee_name: Option<String> = get_field("employee_name");
    let movement_type: Option<String> = get_field("movement_type");
    let effective_date: Option<String> = get_field("effective_date");
    let position: Option<String> = get_field("position");

    match &employee_code {
        Some(code) => {
            if let Err(e) = validate_employee_code(code) {
                errors.push(format!("employee_code: {e}"));
            }
        }
        None => errors.push(String::from(
            "employee_code: required field is missing or empty",
        )),
    }

    match &employee_name {
        Some(name) => {
            if let Err(e) = validate_employee_name(name) {
                errors.push(format!("employee_name: {e}"));
            }
        }
        None => errors.push(String::from(
            "employee_name: required field is missing or empty",
        )),
    }

    let parsed_type: Option<MovementType> = match &movement_type {
        Some(raw) => match MovementType::from_str(raw) {
            Ok(movement_type) => Some(movement_type),
            Err(_) => {
                errors.push(format!("movement_type: invalid value '{raw}'"));
                None
            }
        },
        None => {
            errors.push(String::from(
                "movement_type: required field is missing or empty",
            ));
            None
        }
    };

    match &effective_date {
        Some(raw) => {
            if parse_movement_date(raw).is_err() {
                errors.push(format!("effective_date: invalid date '{raw}'"));
            }
        }
        None => errors.push(String::from(
            "effective_date: required field is missing or empty",
        )),
    }

    if parsed_type == Some(MovementType::Promotion) && position.is_none() {
        errors.push(String::from("position: required for promotions"));
    }

    let status: CsvRowStatus = if errors.is_empty() {
        CsvRowStatus::Valid
    } else {
        CsvRowStatus::Invalid
    };

    CsvRowResult {
        row_number,
        employee_code,
        employee_name,
        movement_type,
        effective_date,
        position,
        status,
        errors,
    }
}

/// Parses and validates movement CSV text without persisting anything.
///
/// The first record is treated as the header. Every data row is validated
/// independently; invalid rows never abort the preview.
///
/// # Arguments
///
/// * `csv_text` - The raw CSV text, header row included
///
/// # Errors
///
/// Returns an error if the CSV cannot be parsed at all or required
/// headers are missing.
pub fn preview_movement_csv(csv_text: &str) -> Result<CsvPreviewResult, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut rows: Vec<CsvRowResult> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row_number: usize = index + 1;
        match record {
            Ok(record) => rows.push(validate_csv_row(&record, &header_map, row_number)),
            Err(e) => rows.push(CsvRowResult {
                row_number,
                employee_code: None,
                employee_name: None,
                movement_type: None,
                effective_date: None,
                position: None,
                status: CsvRowStatus::Invalid,
                errors: vec![format!("Failed to parse row: {e}")],
            }),
        }
    }

    let valid_count: usize = rows
        .iter()
        .filter(|row| row.status == CsvRowStatus::Valid)
        .count();
    let total_rows: usize = rows.len();

    Ok(CsvPreviewResult {
        invalid_count: total_rows - valid_count,
        total_rows,
        valid_count,
        rows,
    })
}
