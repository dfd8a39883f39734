// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview validation tests.

use crate::csv_preview::{CsvRowStatus, preview_movement_csv};
use crate::error::ApiError;

#[test]
fn test_valid_csv_previews_cleanly() {
    let csv = "employee_code,employee_name,movement_type,effective_date,position\n\
               E001,Alice,promotion,2025-03-15,supervisor\n\
               E002,Bob,leave_without_pay,2025-04-01,\n";

    let result = preview_movement_csv(csv).expect("Preview failed");

    assert_eq!(result.total_rows, 2);
    assert_eq!(result.valid_count, 2);
    assert_eq!(result.invalid_count, 0);
    assert_eq!(result.rows[0].employee_code.as_deref(), Some("E001"));
    assert_eq!(result.rows[0].position.as_deref(), Some("supervisor"));
}

#[test]
fn test_missing_required_header_is_rejected() {
    let csv = "employee_code,employee_name,effective_date\nE001,Alice,2025-03-15\n";

    let result = preview_movement_csv(csv);

    assert!(matches!(result, Err(ApiError::InvalidCsvFormat { .. })));
    if let Err(ApiError::InvalidCsvFormat { reason }) = result {
        assert!(reason.contains("movement_type"));
    }
}

#[test]
fn test_headers_match_case_insensitively() {
    let csv = "Employee Code,Employee Name,Movement Type,Effective Date\n\
               E001,Alice,resignation,2025-06-30\n";

    let result = preview_movement_csv(csv).expect("Preview failed");

    assert_eq!(result.valid_count, 1);
}

#[test]
fn test_invalid_rows_are_reported_not_fatal() {
    let csv = "employee_code,employee_name,movement_type,effective_date,position\n\
               ,Alice,promotion,2025-03-15,supervisor\n\
               E002,Bob,teleportation,2025-04-01,\n\
               E003,Carol,return_to_work,04/01/2025,\n\
               E004,Dave,promotion,2025-05-01,\n\
               E005,Eve,resignation,2025-06-30,\n";

    let result = preview_movement_csv(csv).expect("Preview failed");

    assert_eq!(result.total_rows, 5);
    assert_eq!(result.valid_count, 1);
    assert_eq!(result.invalid_count, 4);

    assert_eq!(result.rows[0].status, CsvRowStatus::Invalid);
    assert!(result.rows[1].errors[0].contains("movement_type"));
    assert!(result.rows[2].errors[0].contains("effective_date"));
    assert!(result.rows[3].errors[0].contains("position"));
    assert_eq!(result.rows[4].status, CsvRowStatus::Valid);
}

#[test]
fn test_valid_rows_convert_to_batch_rows() {
    let csv = "employee_code,employee_name,movement_type,effective_date,position\n\
               E001,Alice,promotion,2025-03-15,supervisor\n\
               E002,Bob,teleportation,2025-04-01,\n";

    let result = preview_movement_csv(csv).expect("Preview failed");
    let rows = result.to_batch_rows();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_code, "E001");
    assert_eq!(rows[0].movement_type, "promotion");
    assert_eq!(rows[0].position.as_deref(), Some("supervisor"));
}
