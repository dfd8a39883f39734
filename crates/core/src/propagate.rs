// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use comp_block_audit::MovementRecord;
use comp_block_domain::{
    EmployeeMaster, EmploymentStatus, EmploymentType, MonthlySnapshot, MonthlyStatus,
    MovementType, Position, YearMonth,
};

use crate::timeline::{EmployeeTimeline, TimelineUpdate};

/// Applies one movement to an employee's snapshot timeline.
///
/// Pure and idempotent: applying the same movement twice yields the same
/// timeline as applying it once. The input timeline is not modified; the
/// update carries the new timeline plus the months that changed.
///
/// `all_movements` is the employee's full movement history (the movement
/// being applied may or may not be included). It is used to find the
/// supersession boundary: a promotion walks forward through later snapshot
/// months but must not overwrite any month on or after a later-dated
/// movement's effective month. Replaying a history in date order therefore
/// always converges to the same final timeline.
///
/// If the effective month has no snapshot yet, a minimal one is created
/// carrying forward the prior month's attributes (or the master record's,
/// or bare defaults). Absence of a snapshot is not an error.
#[must_use]
pub fn apply_movement(
    timeline: &EmployeeTimeline,
    movement: &MovementRecord,
    all_movements: &[MovementRecord],
) -> TimelineUpdate {
    let mut new_timeline: EmployeeTimeline = timeline.clone();
    let mut touched: Vec<YearMonth> = Vec::new();

    // Probation passes live in history only; the timeline is untouched.
    if movement.movement_type == MovementType::PassProbation {
        return TimelineUpdate {
            timeline: new_timeline,
            touched_months: touched,
            master_changed: false,
        };
    }

    let effective: YearMonth = YearMonth::from_date(movement.movement_date);

    if !new_timeline.snapshots.contains_key(&effective) {
        let created: MonthlySnapshot = carry_forward_snapshot(timeline, movement, effective);
        new_timeline.upsert(created);
        touched.push(effective);
    }

    match movement.movement_type {
        MovementType::Promotion => {
            apply_promotion(&mut new_timeline, movement, effective, all_movements, &mut touched);
        }
        MovementType::LeaveWithoutPay | MovementType::ReturnToWork | MovementType::Resignation => {
            let status: MonthlyStatus = monthly_status_for(movement);
            set_monthly_status(&mut new_timeline, effective, status, &mut touched);
        }
        MovementType::PassProbation => {}
    }

    let master_changed: bool = mirror_latest_movement(&mut new_timeline, movement, all_movements);

    TimelineUpdate {
        timeline: new_timeline,
        touched_months: touched,
        master_changed,
    }
}

/// Writes the promoted position onto the effective month and every later
/// snapshot month up to (not including) the supersession boundary.
fn apply_promotion(
    timeline: &mut EmployeeTimeline,
    movement: &MovementRecord,
    effective: YearMonth,
    all_movements: &[MovementRecord],
    touched: &mut Vec<YearMonth>,
) {
    let new_position: Position = Position::parse(&movement.new_value);

    set_position(timeline, effective, &new_position, touched);

    let boundary: Option<YearMonth> = supersession_boundary(movement, all_movements);
    for month in timeline.months_after(effective) {
        if boundary.is_some_and(|b| month >= b) {
            break;
        }
        set_position(timeline, month, &new_position, touched);
    }
}

/// The earliest effective month of any later-dated movement for the same
/// employee. Months on or after it already belong to that movement.
fn supersession_boundary(
    movement: &MovementRecord,
    all_movements: &[MovementRecord],
) -> Option<YearMonth> {
    all_movements
        .iter()
        .filter(|m| {
            m.employee_code == movement.employee_code && m.movement_date > movement.movement_date
        })
        .map(|m| YearMonth::from_date(m.movement_date))
        .min()
}

/// The monthly status a status movement implies for its effective month.
///
/// A movement aligned with the month edge leaves a clean month: leave
/// starting on the 1st means the whole month is on leave, a return on the
/// 1st means a full working month, a resignation on the last day means the
/// final month was fully worked. Anything else is a partial month.
fn monthly_status_for(movement: &MovementRecord) -> MonthlyStatus {
    let day: u8 = movement.movement_date.day();
    match movement.movement_type {
        MovementType::LeaveWithoutPay => {
            if day == 1 {
                MonthlyStatus::OnLeave
            } else {
                MonthlyStatus::PartialMonth
            }
        }
        MovementType::ReturnToWork => {
            if day == 1 {
                MonthlyStatus::FullMonth
            } else {
                MonthlyStatus::PartialMonth
            }
        }
        MovementType::Resignation => {
            let last_day: u8 = movement
                .movement_date
                .month()
                .length(movement.movement_date.year());
            if day == last_day {
                MonthlyStatus::FullMonth
            } else {
                MonthlyStatus::PartialMonth
            }
        }
        MovementType::Promotion | MovementType::PassProbation => MonthlyStatus::FullMonth,
    }
}

fn set_position(
    timeline: &mut EmployeeTimeline,
    month: YearMonth,
    position: &Position,
    touched: &mut Vec<YearMonth>,
) {
    if let Some(snapshot) = timeline.snapshots.get_mut(&month)
        && snapshot.position != *position
    {
        snapshot.position = position.clone();
        snapshot.refresh_derived();
        push_touched(touched, month);
    }
}

fn set_monthly_status(
    timeline: &mut EmployeeTimeline,
    month: YearMonth,
    status: MonthlyStatus,
    touched: &mut Vec<YearMonth>,
) {
    if let Some(snapshot) = timeline.snapshots.get_mut(&month)
        && snapshot.monthly_status != status
    {
        snapshot.monthly_status = status;
        snapshot.refresh_derived();
        push_touched(touched, month);
    }
}

fn push_touched(touched: &mut Vec<YearMonth>, month: YearMonth) {
    if !touched.contains(&month) {
        touched.push(month);
    }
}

/// Builds a minimal snapshot for a month that has none, carrying forward
/// the prior month's attributes, falling back to the master record, then
/// to bare defaults the caller must complete manually.
fn carry_forward_snapshot(
    timeline: &EmployeeTimeline,
    movement: &MovementRecord,
    month: YearMonth,
) -> MonthlySnapshot {
    if let Some(prior) = timeline.snapshot_before(month) {
        return MonthlySnapshot::new(
            movement.employee_code.clone(),
            month,
            prior.position.clone(),
            prior.employment_type,
            prior.is_pharmacist,
            MonthlyStatus::FullMonth,
            0,
            0.0,
            false,
            false,
            prior.newbie_level,
        );
    }
    if let Some(master) = &timeline.master {
        return MonthlySnapshot::new(
            movement.employee_code.clone(),
            month,
            master.current_position.clone(),
            master.employment_type,
            master.is_pharmacist,
            MonthlyStatus::FullMonth,
            0,
            0.0,
            false,
            false,
            None,
        );
    }
    MonthlySnapshot::new(
        movement.employee_code.clone(),
        month,
        Position::Other(String::new()),
        EmploymentType::FullTime,
        false,
        MonthlyStatus::FullMonth,
        0,
        0.0,
        false,
        false,
        None,
    )
}

/// Mirrors the movement onto the master record when it is the employee's
/// latest movement. The mirror is a best-effort cache, not authoritative.
fn mirror_latest_movement(
    timeline: &mut EmployeeTimeline,
    movement: &MovementRecord,
    all_movements: &[MovementRecord],
) -> bool {
    let has_later: bool = all_movements.iter().any(|m| {
        m.employee_code == movement.employee_code && m.movement_date > movement.movement_date
    });
    if has_later {
        return false;
    }
    let Some(master) = timeline.master.as_mut() else {
        return false;
    };

    match movement.movement_type {
        MovementType::Promotion => {
            let position: Position = Position::parse(&movement.new_value);
            if master.current_position == position {
                false
            } else {
                master.current_position = position;
                true
            }
        }
        MovementType::LeaveWithoutPay => {
            set_status(master, EmploymentStatus::LeaveWithoutPay)
        }
        MovementType::ReturnToWork => set_status(master, EmploymentStatus::Active),
        MovementType::Resignation => set_status(master, EmploymentStatus::Resigned),
        MovementType::PassProbation => false,
    }
}

fn set_status(master: &mut EmployeeMaster, status: EmploymentStatus) -> bool {
    if master.employment_status == status {
        false
    } else {
        master.employment_status = status;
        true
    }
}
