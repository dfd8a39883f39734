// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::types::{NewbieLevel, Position};

/// The stage tier reported to downstream export.
///
/// Independent of the calculation block. Unknown positions map to
/// `Unclassified`, which serializes to the empty string the export
/// format expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Stage {
    /// Senior roster and qualified specialists.
    Tier3,
    /// Two-tier newbie.
    Tier2,
    /// One-tier newbie.
    Tier1,
    /// Newbie with no tier assigned yet.
    PreTier1,
    /// Admin track, qualification passed.
    AdminPassed,
    /// Admin track, qualification not yet passed.
    AdminNotPassed,
    /// Part-time roles outside the tier ladder.
    NotPassed,
    /// No stage applies.
    #[default]
    Unclassified,
}

impl Stage {
    /// Converts this stage to its export label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tier3 => "tier-3",
            Self::Tier2 => "tier-2",
            Self::Tier1 => "tier-1",
            Self::PreTier1 => "pre-tier-1",
            Self::AdminPassed => "admin(passed)",
            Self::AdminNotPassed => "admin(not passed)",
            Self::NotPassed => "not passed",
            Self::Unclassified => "",
        }
    }

    /// Converts a stored stage label back into a stage.
    ///
    /// Total: unknown labels, including the empty string, map to
    /// `Unclassified`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "tier-3" => Self::Tier3,
            "tier-2" => Self::Tier2,
            "tier-1" => Self::Tier1,
            "pre-tier-1" => Self::PreTier1,
            "admin(passed)" => Self::AdminPassed,
            "admin(not passed)" => Self::AdminNotPassed,
            "not passed" => Self::NotPassed,
            _ => Self::Unclassified,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a position plus seniority marker into a stage tier.
///
/// Pure and total: anything outside the known roster maps to
/// `Stage::Unclassified` rather than an error.
#[must_use]
pub fn classify_stage(position: &Position, newbie_level: Option<NewbieLevel>) -> Stage {
    if position.is_senior_roster() {
        return Stage::Tier3;
    }

    match position {
        Position::Newbie => match newbie_level {
            Some(NewbieLevel::TwoTier) => Stage::Tier2,
            Some(NewbieLevel::OneTier) => Stage::Tier1,
            _ => Stage::PreTier1,
        },
        Position::Admin => {
            if newbie_level == Some(NewbieLevel::PassedAdmin) {
                Stage::AdminPassed
            } else {
                Stage::AdminNotPassed
            }
        }
        Position::PartTimeSpecialist | Position::PartTimePharmacistSpecialist => Stage::Tier3,
        Position::PartTimePharmacist | Position::PartTimeAssistant => Stage::NotPassed,
        _ => Stage::Unclassified,
    }
}
