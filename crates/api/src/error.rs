// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use comp_block::CoreError;
use comp_block_domain::DomainError;
use comp_block_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The submitted CSV could not be parsed.
    InvalidCsvFormat {
        /// The reason the CSV was rejected.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidCsvFormat { reason } => {
                write!(f, "Invalid CSV format: {reason}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidEmployeeCode(code) => ApiError::InvalidInput {
            field: String::from("employee_code"),
            message: format!("Invalid employee code: '{code}'"),
        },
        DomainError::InvalidEmployeeName(name) => ApiError::InvalidInput {
            field: String::from("employee_name"),
            message: format!("Invalid employee name: '{name}'"),
        },
        DomainError::InvalidYearMonth(value) => ApiError::InvalidInput {
            field: String::from("year_month"),
            message: format!("Expected YYYY-MM, got '{value}'"),
        },
        DomainError::InvalidMonth(month) => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Invalid month {month}. Must be between 1 and 12"),
        },
        DomainError::InvalidEmploymentType(value) => ApiError::InvalidInput {
            field: String::from("employment_type"),
            message: format!("Unknown employment type '{value}'. Must be 'full_time' or 'part_time'"),
        },
        DomainError::InvalidEmploymentStatus(value) => ApiError::InvalidInput {
            field: String::from("employment_status"),
            message: format!(
                "Unknown employment status '{value}'. Must be 'active', 'leave_without_pay', or 'resigned'"
            ),
        },
        DomainError::InvalidMonthlyStatus(value) => ApiError::InvalidInput {
            field: String::from("monthly_status"),
            message: format!(
                "Unknown monthly status '{value}'. Must be 'full_month', 'partial_month', or 'on_leave'"
            ),
        },
        DomainError::InvalidMovementType(value) => ApiError::InvalidInput {
            field: String::from("movement_type"),
            message: format!(
                "Unknown movement type '{value}'. Must be 'promotion', 'leave_without_pay', \
                 'return_to_work', 'pass_probation', or 'resignation'"
            ),
        },
        DomainError::InvalidNewbieLevel(value) => ApiError::InvalidInput {
            field: String::from("newbie_level"),
            message: format!(
                "Unknown newbie level '{value}'. Must be 'two_tier', 'one_tier', or 'passed_admin'"
            ),
        },
        DomainError::InvalidBlockCode(code) => ApiError::Internal {
            message: format!("Invalid stored block code {code}"),
        },
        DomainError::MissingPosition => ApiError::InvalidInput {
            field: String::from("position"),
            message: String::from("Promotions require a target position"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("effective_date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Not-found variants map to `ResourceNotFound`; everything else is reported
/// as an internal error without leaking backend detail.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::EmployeeNotFound(code) => ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee '{code}' does not exist"),
        },
        PersistenceError::SnapshotNotFound {
            employee_code,
            year_month,
        } => ApiError::ResourceNotFound {
            resource_type: String::from("Snapshot"),
            message: format!("No snapshot for employee '{employee_code}' in {year_month}"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
