// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use comp_block_audit::MovementRecord;
use comp_block_domain::{
    Block, EmploymentStatus, EmploymentType, MonthlyStatus, MovementType, Position, YearMonth,
};

use crate::tests::helpers::{
    create_test_date, create_test_master, create_test_month, create_test_movement,
    create_test_timeline,
};
use crate::{EmployeeTimeline, TimelineUpdate, apply_movement};

fn months(range: std::ops::RangeInclusive<u8>) -> Vec<YearMonth> {
    range.map(|m| create_test_month(2025, m)).collect()
}

#[test]
fn test_promotion_updates_effective_and_later_months() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Specialist, &months(1..=5));
    let movement: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 3, 1),
        "specialist",
        "team_lead",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    for month in months(1..=2) {
        assert_eq!(
            update.timeline.snapshot(month).unwrap().position,
            Position::Specialist
        );
    }
    for month in months(3..=5) {
        assert_eq!(
            update.timeline.snapshot(month).unwrap().position,
            Position::TeamLead
        );
    }
    assert_eq!(update.touched_months, months(3..=5));
}

#[test]
fn test_promotion_stops_at_later_movement_boundary() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Specialist, &months(1..=5));
    let first: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 3, 1),
        "specialist",
        "team_lead",
    );
    let second: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 4, 1),
        "team_lead",
        "store_manager",
    );
    let history: Vec<MovementRecord> = vec![first.clone(), second.clone()];

    let after_first: TimelineUpdate = apply_movement(&timeline, &first, &history);
    let after_second: TimelineUpdate =
        apply_movement(&after_first.timeline, &second, &history);

    let final_timeline: &EmployeeTimeline = &after_second.timeline;
    assert_eq!(
        final_timeline
            .snapshot(create_test_month(2025, 3))
            .unwrap()
            .position,
        Position::TeamLead
    );
    for month in months(4..=5) {
        assert_eq!(
            final_timeline.snapshot(month).unwrap().position,
            Position::StoreManager
        );
    }
    // The first promotion never touched the months the second owns.
    assert_eq!(after_first.touched_months, vec![create_test_month(2025, 3)]);
}

#[test]
fn test_replay_converges_regardless_of_submission_order() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Specialist, &months(1..=5));
    let first: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 3, 1),
        "specialist",
        "team_lead",
    );
    let second: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 4, 1),
        "team_lead",
        "store_manager",
    );
    let history: Vec<MovementRecord> = vec![first.clone(), second.clone()];

    // Apply in date order, then replay the full history again.
    let once: TimelineUpdate = apply_movement(&timeline, &first, &history);
    let once: TimelineUpdate = apply_movement(&once.timeline, &second, &history);

    let replay: TimelineUpdate = apply_movement(&once.timeline, &first, &history);
    let replay: TimelineUpdate = apply_movement(&replay.timeline, &second, &history);

    assert_eq!(once.timeline, replay.timeline);
}

#[test]
fn test_apply_is_idempotent() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Specialist, &months(1..=3));
    let movement: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 2, 1),
        "specialist",
        "team_lead",
    );
    let history: Vec<MovementRecord> = vec![movement.clone()];

    let once: TimelineUpdate = apply_movement(&timeline, &movement, &history);
    let twice: TimelineUpdate = apply_movement(&once.timeline, &movement, &history);

    assert_eq!(once.timeline, twice.timeline);
    // The second application changes nothing, so nothing is touched.
    assert!(twice.touched_months.is_empty());
}

#[test]
fn test_leave_affects_only_effective_month() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E002", &Position::Specialist, &months(3..=4));
    let movement: MovementRecord = create_test_movement(
        "E002",
        MovementType::LeaveWithoutPay,
        create_test_date(2025, 3, 1),
        "active",
        "leave_without_pay",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    assert_eq!(
        update
            .timeline
            .snapshot(create_test_month(2025, 3))
            .unwrap()
            .monthly_status,
        MonthlyStatus::OnLeave
    );
    // April keeps its prior status until a return movement targets it.
    assert_eq!(
        update
            .timeline
            .snapshot(create_test_month(2025, 4))
            .unwrap()
            .monthly_status,
        MonthlyStatus::FullMonth
    );
    assert_eq!(update.touched_months, vec![create_test_month(2025, 3)]);
}

#[test]
fn test_mid_month_leave_is_partial_month() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E002", &Position::Specialist, &months(3..=3));
    let movement: MovementRecord = create_test_movement(
        "E002",
        MovementType::LeaveWithoutPay,
        create_test_date(2025, 3, 15),
        "active",
        "leave_without_pay",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    let snapshot = update
        .timeline
        .snapshot(create_test_month(2025, 3))
        .unwrap();
    assert_eq!(snapshot.monthly_status, MonthlyStatus::PartialMonth);
    // The refreshed block reflects the adjusted month.
    assert_eq!(snapshot.block, Block::AdjustedFullTime);
}

#[test]
fn test_return_on_first_of_month_is_full_month() {
    let mut timeline: EmployeeTimeline =
        create_test_timeline("E002", &Position::Specialist, &months(4..=4));
    if let Some(snapshot) = timeline.snapshots.get_mut(&create_test_month(2025, 4)) {
        snapshot.monthly_status = MonthlyStatus::OnLeave;
        snapshot.refresh_derived();
    }
    let movement: MovementRecord = create_test_movement(
        "E002",
        MovementType::ReturnToWork,
        create_test_date(2025, 4, 1),
        "leave_without_pay",
        "active",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    assert_eq!(
        update
            .timeline
            .snapshot(create_test_month(2025, 4))
            .unwrap()
            .monthly_status,
        MonthlyStatus::FullMonth
    );
}

#[test]
fn test_resignation_on_last_day_is_full_month() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E003", &Position::Specialist, &months(3..=3));
    let movement: MovementRecord = create_test_movement(
        "E003",
        MovementType::Resignation,
        create_test_date(2025, 3, 31),
        "active",
        "resigned",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    assert_eq!(
        update
            .timeline
            .snapshot(create_test_month(2025, 3))
            .unwrap()
            .monthly_status,
        MonthlyStatus::FullMonth
    );
}

#[test]
fn test_mid_month_resignation_is_partial_month() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E003", &Position::Specialist, &months(3..=3));
    let movement: MovementRecord = create_test_movement(
        "E003",
        MovementType::Resignation,
        create_test_date(2025, 3, 15),
        "active",
        "resigned",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    assert_eq!(
        update
            .timeline
            .snapshot(create_test_month(2025, 3))
            .unwrap()
            .monthly_status,
        MonthlyStatus::PartialMonth
    );
}

#[test]
fn test_missing_snapshot_carries_forward_prior_month() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Specialist, &months(2..=2));
    let movement: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 3, 1),
        "specialist",
        "team_lead",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    let created = update
        .timeline
        .snapshot(create_test_month(2025, 3))
        .unwrap();
    assert_eq!(created.position, Position::TeamLead);
    assert_eq!(created.employment_type, EmploymentType::FullTime);
    assert!(!created.is_pharmacist);
    assert!(!created.confirmed);
    assert_eq!(update.touched_months, vec![create_test_month(2025, 3)]);
}

#[test]
fn test_missing_snapshot_falls_back_to_master() {
    let timeline: EmployeeTimeline =
        EmployeeTimeline::new(Some(create_test_master("E001", Position::Specialist)));
    let movement: MovementRecord = create_test_movement(
        "E001",
        MovementType::LeaveWithoutPay,
        create_test_date(2025, 3, 1),
        "active",
        "leave_without_pay",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    let created = update
        .timeline
        .snapshot(create_test_month(2025, 3))
        .unwrap();
    assert_eq!(created.position, Position::Specialist);
    assert_eq!(created.monthly_status, MonthlyStatus::OnLeave);
}

#[test]
fn test_unknown_employee_gets_bare_snapshot() {
    let timeline: EmployeeTimeline = EmployeeTimeline::new(None);
    let movement: MovementRecord = create_test_movement(
        "E999",
        MovementType::Promotion,
        create_test_date(2025, 3, 1),
        "",
        "team_lead",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    let created = update
        .timeline
        .snapshot(create_test_month(2025, 3))
        .unwrap();
    assert_eq!(created.position, Position::TeamLead);
    assert_eq!(created.work_days, 0);
    assert!(!update.master_changed);
}

#[test]
fn test_pass_probation_leaves_timeline_untouched() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Newbie, &months(3..=4));
    let movement: MovementRecord = create_test_movement(
        "E001",
        MovementType::PassProbation,
        create_test_date(2025, 3, 15),
        "probation",
        "passed",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    assert_eq!(update.timeline, timeline);
    assert!(update.touched_months.is_empty());
    assert!(!update.master_changed);
}

#[test]
fn test_latest_movement_mirrors_master() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Specialist, &months(3..=3));
    let movement: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 3, 1),
        "specialist",
        "team_lead",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    assert!(update.master_changed);
    assert_eq!(
        update.timeline.master.as_ref().unwrap().current_position,
        Position::TeamLead
    );
}

#[test]
fn test_superseded_movement_does_not_mirror_master() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Specialist, &months(3..=5));
    let first: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 3, 1),
        "specialist",
        "team_lead",
    );
    let second: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 4, 1),
        "team_lead",
        "store_manager",
    );
    let history: Vec<MovementRecord> = vec![first.clone(), second];

    let update: TimelineUpdate = apply_movement(&timeline, &first, &history);

    assert!(!update.master_changed);
    assert_eq!(
        update.timeline.master.as_ref().unwrap().current_position,
        Position::Specialist
    );
}

#[test]
fn test_resignation_mirrors_employment_status() {
    let timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Specialist, &months(3..=3));
    let movement: MovementRecord = create_test_movement(
        "E001",
        MovementType::Resignation,
        create_test_date(2025, 3, 31),
        "active",
        "resigned",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    assert!(update.master_changed);
    assert_eq!(
        update.timeline.master.as_ref().unwrap().employment_status,
        EmploymentStatus::Resigned
    );
}

#[test]
fn test_promotion_refreshes_block_on_touched_months() {
    let mut timeline: EmployeeTimeline =
        create_test_timeline("E001", &Position::Supervisor, &months(3..=3));
    if let Some(snapshot) = timeline.snapshots.get_mut(&create_test_month(2025, 3)) {
        snapshot.is_dual_position = true;
        snapshot.refresh_derived();
        assert_eq!(snapshot.block, Block::FullTimeFullMonth);
    }
    let movement: MovementRecord = create_test_movement(
        "E001",
        MovementType::Promotion,
        create_test_date(2025, 3, 1),
        "supervisor",
        "supervisor_acting_store_manager",
    );

    let update: TimelineUpdate = apply_movement(&timeline, &movement, &[movement.clone()]);

    let snapshot = update
        .timeline
        .snapshot(create_test_month(2025, 3))
        .unwrap();
    assert_eq!(snapshot.position, Position::SupervisorActingStoreManager);
    assert_eq!(snapshot.block, Block::DualRoleSupervisor);
}
