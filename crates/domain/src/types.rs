// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a unique employee code.
///
/// Codes are normalized to uppercase with surrounding whitespace removed,
/// so lookups are insensitive to how the code was keyed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeCode(String);

impl EmployeeCode {
    /// Creates a new employee code, normalizing to uppercase.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    /// Returns the normalized code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar month, the granularity at which snapshots are stored.
///
/// Ordering is chronological: derived `Ord` compares year first, then month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a new year-month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if `month` is outside 1..=12.
    pub const fn new(year: i32, month: u8) -> Result<Self, DomainError> {
        if month == 0 || month > 12 {
            return Err(DomainError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the year component.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the month immediately after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the month immediately before this one.
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the month a calendar date falls in.
    #[must_use]
    pub fn from_date(date: time::Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }
}

impl FromStr for YearMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((year_part, month_part)) = s.split_once('-') else {
            return Err(DomainError::InvalidYearMonth(s.to_string()));
        };
        let year: i32 = year_part
            .parse()
            .map_err(|_| DomainError::InvalidYearMonth(s.to_string()))?;
        let month: u8 = month_part
            .parse()
            .map_err(|_| DomainError::InvalidYearMonth(s.to_string()))?;
        Self::new(year, month)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Represents an employee's contractual employment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    /// Salaried full-time employment.
    FullTime,
    /// Hourly part-time employment.
    PartTime,
}

impl FromStr for EmploymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_time" => Ok(Self::FullTime),
            "part_time" => Ok(Self::PartTime),
            _ => Err(DomainError::InvalidEmploymentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl EmploymentType {
    /// Converts this employment type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
        }
    }
}

/// Represents an employee's current standing in the master record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EmploymentStatus {
    /// Actively employed.
    #[default]
    Active,
    /// On unpaid leave.
    LeaveWithoutPay,
    /// Employment ended.
    Resigned,
}

impl FromStr for EmploymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "leave_without_pay" => Ok(Self::LeaveWithoutPay),
            "resigned" => Ok(Self::Resigned),
            _ => Err(DomainError::InvalidEmploymentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl EmploymentStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::LeaveWithoutPay => "leave_without_pay",
            Self::Resigned => "resigned",
        }
    }
}

/// Represents how much of a month an employee actually worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MonthlyStatus {
    /// Worked the entire month.
    #[default]
    FullMonth,
    /// Worked part of the month (joined, left, or took leave mid-month).
    PartialMonth,
    /// On leave for the entire month.
    OnLeave,
}

impl FromStr for MonthlyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_month" => Ok(Self::FullMonth),
            "partial_month" => Ok(Self::PartialMonth),
            "on_leave" => Ok(Self::OnLeave),
            _ => Err(DomainError::InvalidMonthlyStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for MonthlyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MonthlyStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullMonth => "full_month",
            Self::PartialMonth => "partial_month",
            Self::OnLeave => "on_leave",
        }
    }
}

/// Represents a discrete employment event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    /// Position change.
    Promotion,
    /// Start of unpaid leave.
    LeaveWithoutPay,
    /// Return from unpaid leave.
    ReturnToWork,
    /// Probation period completed. Recorded in history only.
    PassProbation,
    /// Employment ended.
    Resignation,
}

impl FromStr for MovementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "promotion" => Ok(Self::Promotion),
            "leave_without_pay" => Ok(Self::LeaveWithoutPay),
            "return_to_work" => Ok(Self::ReturnToWork),
            "pass_probation" => Ok(Self::PassProbation),
            "resignation" => Ok(Self::Resignation),
            _ => Err(DomainError::InvalidMovementType(s.to_string())),
        }
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MovementType {
    /// Converts this movement type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Promotion => "promotion",
            Self::LeaveWithoutPay => "leave_without_pay",
            Self::ReturnToWork => "return_to_work",
            Self::PassProbation => "pass_probation",
            Self::Resignation => "resignation",
        }
    }
}

/// Seniority marker for employees still in the newbie or admin track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NewbieLevel {
    /// Two tiers below specialist.
    TwoTier,
    /// One tier below specialist.
    OneTier,
    /// Passed the admin qualification.
    PassedAdmin,
}

impl FromStr for NewbieLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two_tier" => Ok(Self::TwoTier),
            "one_tier" => Ok(Self::OneTier),
            "passed_admin" => Ok(Self::PassedAdmin),
            _ => Err(DomainError::InvalidNewbieLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for NewbieLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl NewbieLevel {
    /// Converts this level to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TwoTier => "two_tier",
            Self::OneTier => "one_tier",
            Self::PassedAdmin => "passed_admin",
        }
    }
}

/// A closed set of position codes, resolved once at ingestion time.
///
/// Free-form position strings from imports and request payloads are mapped
/// onto this enum by [`Position::parse`]. Classification then tests enum
/// membership instead of re-matching substrings on every call. Strings that
/// match no known position are preserved verbatim in `Other` so the record
/// is never lost, only left unclassified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Area supervisor.
    Supervisor,
    /// Store manager.
    StoreManager,
    /// Acting store manager.
    ActingStoreManager,
    /// Supervisor concurrently serving as acting store manager.
    SupervisorActingStoreManager,
    /// Assistant manager.
    AssistantManager,
    /// Section chief.
    SectionChief,
    /// Team lead.
    TeamLead,
    /// Specialist.
    Specialist,
    /// Employee still in the newbie track.
    Newbie,
    /// Administrative track employee.
    Admin,
    /// Part-time specialist.
    PartTimeSpecialist,
    /// Part-time pharmacist.
    PartTimePharmacist,
    /// Part-time pharmacist qualified as specialist.
    PartTimePharmacistSpecialist,
    /// Part-time assistant.
    PartTimeAssistant,
    /// Unrecognized position, preserved as entered.
    Other(String),
}

impl Position {
    /// Resolves a free-form position string into a position code.
    ///
    /// Accepts canonical snake_case codes as well as loosely formatted
    /// display names (mixed case, hyphens, parentheses). This function is
    /// total: unrecognized strings map to `Other`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed: &str = raw.trim();
        let lowered: String = trimmed.to_lowercase().replace(['_', '-', '(', ')'], " ");
        let normalized: String = lowered.split_whitespace().collect::<Vec<&str>>().join(" ");

        match normalized.as_str() {
            "supervisor" => Self::Supervisor,
            "store manager" => Self::StoreManager,
            "acting store manager" => Self::ActingStoreManager,
            "supervisor acting store manager" => Self::SupervisorActingStoreManager,
            "assistant manager" => Self::AssistantManager,
            "section chief" => Self::SectionChief,
            "team lead" | "team leader" => Self::TeamLead,
            "specialist" => Self::Specialist,
            "newbie" => Self::Newbie,
            "admin" => Self::Admin,
            "part time specialist" => Self::PartTimeSpecialist,
            "part time pharmacist" => Self::PartTimePharmacist,
            "part time pharmacist specialist" => Self::PartTimePharmacistSpecialist,
            "part time assistant" => Self::PartTimeAssistant,
            _ => {
                // Loose display names from legacy imports resolve by keyword,
                // most specific first.
                if normalized.contains("supervisor") && normalized.contains("acting store manager")
                {
                    Self::SupervisorActingStoreManager
                } else if normalized.contains("acting store manager") {
                    Self::ActingStoreManager
                } else if normalized.contains("store manager") {
                    Self::StoreManager
                } else if normalized.contains("supervisor") {
                    Self::Supervisor
                } else {
                    Self::Other(trimmed.to_string())
                }
            }
        }
    }

    /// Converts this position to its canonical string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Supervisor => "supervisor",
            Self::StoreManager => "store_manager",
            Self::ActingStoreManager => "acting_store_manager",
            Self::SupervisorActingStoreManager => "supervisor_acting_store_manager",
            Self::AssistantManager => "assistant_manager",
            Self::SectionChief => "section_chief",
            Self::TeamLead => "team_lead",
            Self::Specialist => "specialist",
            Self::Newbie => "newbie",
            Self::Admin => "admin",
            Self::PartTimeSpecialist => "part_time_specialist",
            Self::PartTimePharmacist => "part_time_pharmacist",
            Self::PartTimePharmacistSpecialist => "part_time_pharmacist_specialist",
            Self::PartTimeAssistant => "part_time_assistant",
            Self::Other(raw) => raw,
        }
    }

    /// Returns whether this position sits on the senior full-time roster.
    #[must_use]
    pub const fn is_senior_roster(&self) -> bool {
        matches!(
            self,
            Self::Supervisor
                | Self::StoreManager
                | Self::ActingStoreManager
                | Self::SupervisorActingStoreManager
                | Self::AssistantManager
                | Self::SectionChief
                | Self::TeamLead
                | Self::Specialist
        )
    }

    /// Returns whether this position carries store-manager duties,
    /// including acting and concurrent variants.
    #[must_use]
    pub const fn is_store_manager_role(&self) -> bool {
        matches!(
            self,
            Self::StoreManager | Self::ActingStoreManager | Self::SupervisorActingStoreManager
        )
    }

    /// Returns whether this position is the concurrent
    /// supervisor-plus-acting-store-manager role.
    #[must_use]
    pub const fn is_supervisor_acting_store_manager(&self) -> bool {
        matches!(self, Self::SupervisorActingStoreManager)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
