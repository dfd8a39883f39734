// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use comp_block_domain::{DomainError, EmployeeMaster, EmploymentStatus, MovementType, Position};

use crate::error::CoreError;

/// The old/new value pair recorded in movement history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValues {
    /// The value before the movement.
    pub old_value: String,
    /// The value after the movement.
    pub new_value: String,
}

/// Resolves the old and new values for a movement as of the current
/// master record.
///
/// This is the single as-of lookup for every movement type: promotions
/// read the current position, status movements read the current employment
/// status. An unknown employee resolves to the nominal pre-state for the
/// movement type so history stays meaningful.
///
/// # Errors
///
/// Returns `DomainError::MissingPosition` (wrapped) when a promotion is
/// resolved without a target position.
pub fn resolve_transition(
    movement_type: MovementType,
    master: Option<&EmployeeMaster>,
    requested_position: Option<&Position>,
) -> Result<ResolvedValues, CoreError> {
    match movement_type {
        MovementType::Promotion => {
            let Some(position) = requested_position else {
                return Err(CoreError::DomainViolation(DomainError::MissingPosition));
            };
            let old_value: String = master.map_or_else(String::new, |m| {
                m.current_position.as_str().to_string()
            });
            Ok(ResolvedValues {
                old_value,
                new_value: position.as_str().to_string(),
            })
        }
        MovementType::LeaveWithoutPay => Ok(status_transition(
            master,
            EmploymentStatus::Active,
            EmploymentStatus::LeaveWithoutPay,
        )),
        MovementType::ReturnToWork => Ok(status_transition(
            master,
            EmploymentStatus::LeaveWithoutPay,
            EmploymentStatus::Active,
        )),
        MovementType::Resignation => Ok(status_transition(
            master,
            EmploymentStatus::Active,
            EmploymentStatus::Resigned,
        )),
        MovementType::PassProbation => Ok(ResolvedValues {
            old_value: String::from("probation"),
            new_value: String::from("passed"),
        }),
    }
}

/// Builds an employment-status transition, preferring the master record's
/// actual status over the nominal pre-state.
fn status_transition(
    master: Option<&EmployeeMaster>,
    nominal_old: EmploymentStatus,
    new: EmploymentStatus,
) -> ResolvedValues {
    let old: EmploymentStatus = master.map_or(nominal_old, |m| m.employment_status);
    ResolvedValues {
        old_value: old.as_str().to_string(),
        new_value: new.as_str().to_string(),
    }
}
