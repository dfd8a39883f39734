// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use comp_block_domain::{
    DomainError, EmployeeMaster, EmploymentStatus, MovementType, Position,
};

use crate::tests::helpers::create_test_master;
use crate::{CoreError, ResolvedValues, resolve_transition};

#[test]
fn test_promotion_without_position_is_rejected() {
    let result: Result<ResolvedValues, CoreError> =
        resolve_transition(MovementType::Promotion, None, None);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::MissingPosition))
    );
}

#[test]
fn test_promotion_resolves_old_position_from_master() {
    let master: EmployeeMaster = create_test_master("E001", Position::Specialist);
    let requested: Position = Position::TeamLead;

    let resolved: ResolvedValues =
        resolve_transition(MovementType::Promotion, Some(&master), Some(&requested)).unwrap();

    assert_eq!(resolved.old_value, "specialist");
    assert_eq!(resolved.new_value, "team_lead");
}

#[test]
fn test_leave_uses_master_status_as_old_value() {
    let mut master: EmployeeMaster = create_test_master("E001", Position::Specialist);
    master.employment_status = EmploymentStatus::Active;

    let resolved: ResolvedValues =
        resolve_transition(MovementType::LeaveWithoutPay, Some(&master), None).unwrap();

    assert_eq!(resolved.old_value, "active");
    assert_eq!(resolved.new_value, "leave_without_pay");
}

#[test]
fn test_return_to_work_nominal_old_value_when_unknown() {
    let resolved: ResolvedValues =
        resolve_transition(MovementType::ReturnToWork, None, None).unwrap();

    assert_eq!(resolved.old_value, "leave_without_pay");
    assert_eq!(resolved.new_value, "active");
}

#[test]
fn test_return_to_work_prefers_actual_master_status() {
    // Data drift: the master still says active. The as-of lookup reports
    // what the directory actually held.
    let master: EmployeeMaster = create_test_master("E001", Position::Specialist);

    let resolved: ResolvedValues =
        resolve_transition(MovementType::ReturnToWork, Some(&master), None).unwrap();

    assert_eq!(resolved.old_value, "active");
}

#[test]
fn test_resignation_transition() {
    let resolved: ResolvedValues =
        resolve_transition(MovementType::Resignation, None, None).unwrap();

    assert_eq!(resolved.old_value, "active");
    assert_eq!(resolved.new_value, "resigned");
}

#[test]
fn test_pass_probation_values() {
    let resolved: ResolvedValues =
        resolve_transition(MovementType::PassProbation, None, None).unwrap();

    assert_eq!(resolved.old_value, "probation");
    assert_eq!(resolved.new_value, "passed");
}
