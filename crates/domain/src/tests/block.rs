// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Block, EmployeeCode, EmploymentType, MonthlySnapshot, MonthlyStatus, Position, YearMonth,
    classify_block,
};

fn create_test_snapshot(
    position: Position,
    employment_type: EmploymentType,
    is_pharmacist: bool,
    monthly_status: MonthlyStatus,
) -> MonthlySnapshot {
    MonthlySnapshot::new(
        EmployeeCode::new("E001"),
        YearMonth::new(2025, 3).unwrap(),
        position,
        employment_type,
        is_pharmacist,
        monthly_status,
        22,
        176.0,
        false,
        false,
        None,
    )
}

#[test]
fn test_full_time_full_month_is_block_one() {
    let snapshot: MonthlySnapshot = create_test_snapshot(
        Position::Specialist,
        EmploymentType::FullTime,
        false,
        MonthlyStatus::FullMonth,
    );
    assert_eq!(classify_block(&snapshot), Block::FullTimeFullMonth);
    assert_eq!(snapshot.block.code(), 1);
}

#[test]
fn test_partial_month_is_block_three() {
    let snapshot: MonthlySnapshot = create_test_snapshot(
        Position::Specialist,
        EmploymentType::FullTime,
        false,
        MonthlyStatus::PartialMonth,
    );
    assert_eq!(classify_block(&snapshot), Block::AdjustedFullTime);
}

#[test]
fn test_supervisor_rotation_overrides_everything() {
    // Part-time non-pharmacist with a partial month would otherwise be
    // block 6; rotation must still win.
    let mut snapshot: MonthlySnapshot = create_test_snapshot(
        Position::PartTimeAssistant,
        EmploymentType::PartTime,
        false,
        MonthlyStatus::PartialMonth,
    );
    snapshot.is_supervisor_rotation = true;
    snapshot.refresh_derived();
    assert_eq!(snapshot.block, Block::SupervisorRotation);
    assert_eq!(snapshot.block.code(), 2);
}

#[test]
fn test_part_time_split_on_pharmacist_license() {
    let plain: MonthlySnapshot = create_test_snapshot(
        Position::PartTimeAssistant,
        EmploymentType::PartTime,
        false,
        MonthlyStatus::FullMonth,
    );
    assert_eq!(classify_block(&plain), Block::PartTime);

    let pharmacist: MonthlySnapshot = create_test_snapshot(
        Position::PartTimePharmacist,
        EmploymentType::PartTime,
        true,
        MonthlyStatus::FullMonth,
    );
    assert_eq!(classify_block(&pharmacist), Block::PartTimePharmacist);
}

#[test]
fn test_dual_role_supervisor_requires_dual_position_flag() {
    let mut snapshot: MonthlySnapshot = create_test_snapshot(
        Position::SupervisorActingStoreManager,
        EmploymentType::FullTime,
        false,
        MonthlyStatus::FullMonth,
    );
    // Without the flag the concurrent title alone lands in block 1.
    assert_eq!(classify_block(&snapshot), Block::FullTimeFullMonth);

    snapshot.is_dual_position = true;
    snapshot.refresh_derived();
    assert_eq!(snapshot.block, Block::DualRoleSupervisor);
    assert_eq!(snapshot.block.code(), 4);
}

#[test]
fn test_dual_position_manager_full_month_is_block_three() {
    // Rule 6 fires even when the month is full, which rule 5 would skip.
    let mut snapshot: MonthlySnapshot = create_test_snapshot(
        Position::ActingStoreManager,
        EmploymentType::FullTime,
        false,
        MonthlyStatus::FullMonth,
    );
    snapshot.is_dual_position = true;
    snapshot.refresh_derived();
    assert_eq!(snapshot.block, Block::AdjustedFullTime);
}

#[test]
fn test_classification_is_deterministic() {
    let snapshot: MonthlySnapshot = create_test_snapshot(
        Position::TeamLead,
        EmploymentType::FullTime,
        false,
        MonthlyStatus::OnLeave,
    );
    assert_eq!(classify_block(&snapshot), classify_block(&snapshot));
}

#[test]
fn test_every_snapshot_gets_a_block() {
    // Exhaustive sweep over the boolean attributes for a handful of
    // positions; every combination must land in 0..=6.
    let positions: Vec<Position> = vec![
        Position::Supervisor,
        Position::StoreManager,
        Position::SupervisorActingStoreManager,
        Position::Newbie,
        Position::Other(String::from("Warehouse Clerk")),
    ];
    let statuses: [MonthlyStatus; 3] = [
        MonthlyStatus::FullMonth,
        MonthlyStatus::PartialMonth,
        MonthlyStatus::OnLeave,
    ];
    let types: [EmploymentType; 2] = [EmploymentType::FullTime, EmploymentType::PartTime];

    for position in &positions {
        for employment_type in types {
            for monthly_status in statuses {
                for is_pharmacist in [false, true] {
                    for is_dual_position in [false, true] {
                        for is_supervisor_rotation in [false, true] {
                            let mut snapshot: MonthlySnapshot = create_test_snapshot(
                                position.clone(),
                                employment_type,
                                is_pharmacist,
                                monthly_status,
                            );
                            snapshot.is_dual_position = is_dual_position;
                            snapshot.is_supervisor_rotation = is_supervisor_rotation;
                            let block: Block = classify_block(&snapshot);
                            assert!((0..=6).contains(&block.code()));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_block_code_round_trip() {
    for code in 0..=6 {
        let block: Block = Block::from_code(code).unwrap();
        assert_eq!(block.code(), code);
    }
    assert!(Block::from_code(7).is_err());
    assert!(Block::from_code(-1).is_err());
}
