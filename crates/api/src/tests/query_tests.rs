// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only query handler tests.

use crate::error::ApiError;
use crate::handlers::{
    get_employee_snapshot, list_employee_movements, list_employee_snapshots,
    process_movement_batch,
};
use crate::tests::{
    create_test_batch, create_test_master, create_test_persistence, create_test_row,
    create_test_snapshot,
};

#[test]
fn test_list_movements_for_employee() {
    let mut persistence = create_test_persistence();
    persistence
        .upsert_employee(&create_test_master("E001", "store-001"))
        .expect("Failed to insert employee");

    let request = create_test_batch(vec![
        create_test_row("E001", "promotion", "2025-03-15"),
        create_test_row("E001", "leave_without_pay", "2025-04-10"),
    ]);
    process_movement_batch(&mut persistence, &request).expect("Batch failed");

    let response = list_employee_movements(&mut persistence, "E001").expect("Query failed");

    assert_eq!(response.employee_code, "E001");
    assert_eq!(response.movements.len(), 2);
    assert_eq!(response.movements[0].movement_type, "promotion");
    assert_eq!(response.movements[0].movement_date, "2025-03-15");
    assert_eq!(response.movements[1].movement_type, "leave_without_pay");
}

#[test]
fn test_list_movements_rejects_invalid_code() {
    let mut persistence = create_test_persistence();

    let result = list_employee_movements(&mut persistence, "  ");

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_list_snapshots_includes_classification() {
    let mut persistence = create_test_persistence();
    persistence
        .upsert_snapshot(&create_test_snapshot("E001", 2025, 3))
        .expect("Failed to insert snapshot");

    let response = list_employee_snapshots(&mut persistence, "E001").expect("Query failed");

    assert_eq!(response.snapshots.len(), 1);
    let snapshot = &response.snapshots[0];
    assert_eq!(snapshot.year_month, "2025-03");
    assert_eq!(snapshot.block, 1);
    assert_eq!(snapshot.block_label, "full-time, full month");
    assert_eq!(snapshot.stage, "tier-3");
}

#[test]
fn test_get_snapshot_by_month() {
    let mut persistence = create_test_persistence();
    persistence
        .upsert_snapshot(&create_test_snapshot("E001", 2025, 3))
        .expect("Failed to insert snapshot");

    let snapshot =
        get_employee_snapshot(&mut persistence, "E001", "2025-03").expect("Query failed");

    assert_eq!(snapshot.employee_code, "E001");
    assert_eq!(snapshot.position, "specialist");
}

#[test]
fn test_get_missing_snapshot_is_not_found() {
    let mut persistence = create_test_persistence();

    let result = get_employee_snapshot(&mut persistence, "E001", "2025-03");

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_get_snapshot_rejects_bad_month() {
    let mut persistence = create_test_persistence();

    let result = get_employee_snapshot(&mut persistence, "E001", "March 2025");

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}
