// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::snapshot::MonthlySnapshot;
use crate::types::{EmploymentType, MonthlyStatus};

/// The calculation block a monthly snapshot falls into.
///
/// Blocks are mutually exclusive inputs to the downstream bonus formula.
/// The numeric codes are part of the persisted data contract and must not
/// be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Block {
    /// Block 0: no rule matched. Caller treats this as needing manual review.
    #[default]
    Unclassified,
    /// Block 1: full-time employee who worked the full month.
    FullTimeFullMonth,
    /// Block 2: supervisor rotation month. Bonus is forced to zero downstream.
    SupervisorRotation,
    /// Block 3: full-time with an adjusted month, or a dual-position manager.
    AdjustedFullTime,
    /// Block 4: supervisor concurrently acting as store manager.
    DualRoleSupervisor,
    /// Block 5: part-time pharmacist.
    PartTimePharmacist,
    /// Block 6: part-time, non-pharmacist.
    PartTime,
}

impl Block {
    /// Returns the numeric block code used by the bonus formula.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Unclassified => 0,
            Self::FullTimeFullMonth => 1,
            Self::SupervisorRotation => 2,
            Self::AdjustedFullTime => 3,
            Self::DualRoleSupervisor => 4,
            Self::PartTimePharmacist => 5,
            Self::PartTime => 6,
        }
    }

    /// Returns the human-readable block label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unclassified => "unclassified",
            Self::FullTimeFullMonth => "full-time, full month",
            Self::SupervisorRotation => "supervisor rotation",
            Self::AdjustedFullTime => "adjusted full-time",
            Self::DualRoleSupervisor => "supervisor acting as store manager",
            Self::PartTimePharmacist => "part-time pharmacist",
            Self::PartTime => "part-time",
        }
    }

    /// Converts a stored numeric code back into a block.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBlockCode` if `code` is outside 0..=6.
    pub const fn from_code(code: i32) -> Result<Self, DomainError> {
        match code {
            0 => Ok(Self::Unclassified),
            1 => Ok(Self::FullTimeFullMonth),
            2 => Ok(Self::SupervisorRotation),
            3 => Ok(Self::AdjustedFullTime),
            4 => Ok(Self::DualRoleSupervisor),
            5 => Ok(Self::PartTimePharmacist),
            6 => Ok(Self::PartTime),
            _ => Err(DomainError::InvalidBlockCode(code)),
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies a monthly snapshot into its calculation block.
///
/// Pure, total and deterministic. Rules are evaluated strictly in priority
/// order; the order encodes business precedence and must not be rearranged.
#[must_use]
pub fn classify_block(snapshot: &MonthlySnapshot) -> Block {
    // Rule 1: rotation overrides everything else.
    if snapshot.is_supervisor_rotation {
        return Block::SupervisorRotation;
    }

    // Rules 2-3: part-time employees split on the pharmacist license.
    if snapshot.employment_type == EmploymentType::PartTime {
        if snapshot.is_pharmacist {
            return Block::PartTimePharmacist;
        }
        return Block::PartTime;
    }

    // Rule 4: concurrent supervisor + acting store manager, held as a
    // dual position.
    if snapshot.position.is_supervisor_acting_store_manager() && snapshot.is_dual_position {
        return Block::DualRoleSupervisor;
    }

    // Rule 5: full-time but not a full month.
    if snapshot.employment_type == EmploymentType::FullTime
        && snapshot.monthly_status != MonthlyStatus::FullMonth
    {
        return Block::AdjustedFullTime;
    }

    // Rule 6: dual-position store managers land in block 3 even when they
    // worked a full month, so this check stays separate from rule 5.
    if snapshot.is_dual_position && snapshot.position.is_store_manager_role() {
        return Block::AdjustedFullTime;
    }

    // Rule 7: the ordinary case.
    if snapshot.employment_type == EmploymentType::FullTime
        && snapshot.monthly_status == MonthlyStatus::FullMonth
    {
        return Block::FullTimeFullMonth;
    }

    Block::Unclassified
}
