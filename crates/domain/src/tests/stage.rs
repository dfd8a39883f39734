// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{NewbieLevel, Position, Stage, classify_stage};

#[test]
fn test_senior_roster_is_tier_three() {
    let roster: [Position; 8] = [
        Position::Supervisor,
        Position::StoreManager,
        Position::ActingStoreManager,
        Position::SupervisorActingStoreManager,
        Position::AssistantManager,
        Position::SectionChief,
        Position::TeamLead,
        Position::Specialist,
    ];
    for position in roster {
        assert_eq!(classify_stage(&position, None), Stage::Tier3);
    }
}

#[test]
fn test_newbie_tier_follows_level() {
    assert_eq!(
        classify_stage(&Position::Newbie, Some(NewbieLevel::TwoTier)),
        Stage::Tier2
    );
    assert_eq!(
        classify_stage(&Position::Newbie, Some(NewbieLevel::OneTier)),
        Stage::Tier1
    );
    assert_eq!(classify_stage(&Position::Newbie, None), Stage::PreTier1);
    // A stale admin marker on a newbie still falls back to pre-tier-1.
    assert_eq!(
        classify_stage(&Position::Newbie, Some(NewbieLevel::PassedAdmin)),
        Stage::PreTier1
    );
}

#[test]
fn test_admin_split_on_qualification() {
    assert_eq!(
        classify_stage(&Position::Admin, Some(NewbieLevel::PassedAdmin)),
        Stage::AdminPassed
    );
    assert_eq!(classify_stage(&Position::Admin, None), Stage::AdminNotPassed);
    assert_eq!(
        classify_stage(&Position::Admin, Some(NewbieLevel::OneTier)),
        Stage::AdminNotPassed
    );
}

#[test]
fn test_part_time_stages() {
    assert_eq!(
        classify_stage(&Position::PartTimeSpecialist, None),
        Stage::Tier3
    );
    assert_eq!(
        classify_stage(&Position::PartTimePharmacistSpecialist, None),
        Stage::Tier3
    );
    assert_eq!(
        classify_stage(&Position::PartTimePharmacist, None),
        Stage::NotPassed
    );
    assert_eq!(
        classify_stage(&Position::PartTimeAssistant, None),
        Stage::NotPassed
    );
}

#[test]
fn test_unknown_position_is_unclassified_not_error() {
    let position: Position = Position::Other(String::from("Warehouse Clerk"));
    let stage: Stage = classify_stage(&position, None);
    assert_eq!(stage, Stage::Unclassified);
    assert_eq!(stage.as_str(), "");
}

#[test]
fn test_stage_label_round_trip() {
    let stages: [Stage; 8] = [
        Stage::Tier3,
        Stage::Tier2,
        Stage::Tier1,
        Stage::PreTier1,
        Stage::AdminPassed,
        Stage::AdminNotPassed,
        Stage::NotPassed,
        Stage::Unclassified,
    ];
    for stage in stages {
        assert_eq!(Stage::from_label(stage.as_str()), stage);
    }
    assert_eq!(Stage::from_label("tier-9"), Stage::Unclassified);
}
