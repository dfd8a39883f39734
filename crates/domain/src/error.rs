// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Errors produced when constructing or parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// The employee code is empty or contains invalid characters.
    InvalidEmployeeCode(String),
    /// The employee name is empty.
    InvalidEmployeeName(String),
    /// The year-month string is not in `YYYY-MM` form.
    InvalidYearMonth(String),
    /// The month component is outside 1..=12.
    InvalidMonth(u8),
    /// The employment type string is not recognized.
    InvalidEmploymentType(String),
    /// The employment status string is not recognized.
    InvalidEmploymentStatus(String),
    /// The monthly status string is not recognized.
    InvalidMonthlyStatus(String),
    /// The movement type string is not recognized.
    InvalidMovementType(String),
    /// The newbie level string is not recognized.
    InvalidNewbieLevel(String),
    /// The numeric block code is outside the valid 0..=6 range.
    InvalidBlockCode(i32),
    /// A promotion movement was submitted without a target position.
    MissingPosition,
    /// A date string could not be parsed as `YYYY-MM-DD`.
    DateParseError {
        /// The raw date string that failed to parse.
        date_string: String,
        /// The underlying parse error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmployeeCode(code) => {
                write!(f, "Invalid employee code: '{code}'")
            }
            Self::InvalidEmployeeName(name) => {
                write!(f, "Invalid employee name: '{name}'")
            }
            Self::InvalidYearMonth(value) => {
                write!(f, "Invalid year-month (expected YYYY-MM): '{value}'")
            }
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month (expected 1-12): {month}")
            }
            Self::InvalidEmploymentType(value) => {
                write!(f, "Invalid employment type: '{value}'")
            }
            Self::InvalidEmploymentStatus(value) => {
                write!(f, "Invalid employment status: '{value}'")
            }
            Self::InvalidMonthlyStatus(value) => {
                write!(f, "Invalid monthly status: '{value}'")
            }
            Self::InvalidMovementType(value) => {
                write!(f, "Invalid movement type: '{value}'")
            }
            Self::InvalidNewbieLevel(value) => {
                write!(f, "Invalid newbie level: '{value}'")
            }
            Self::InvalidBlockCode(code) => {
                write!(f, "Invalid block code (expected 0-6): {code}")
            }
            Self::MissingPosition => {
                write!(f, "Promotion movements require a target position")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
