// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::DomainError;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Maximum accepted length of an employee code.
const MAX_EMPLOYEE_CODE_LEN: usize = 32;

/// Validates a raw employee code before normalization.
///
/// Codes must be non-empty, contain no whitespace, and fit the column width.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmployeeCode` if the code is empty, too
/// long, or contains whitespace.
pub fn validate_employee_code(code: &str) -> Result<(), DomainError> {
    let trimmed: &str = code.trim();
    if trimmed.is_empty()
        || trimmed.len() > MAX_EMPLOYEE_CODE_LEN
        || trimmed.chars().any(char::is_whitespace)
    {
        return Err(DomainError::InvalidEmployeeCode(code.to_string()));
    }
    Ok(())
}

/// Validates an employee display name.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmployeeName` if the name is empty or
/// whitespace-only.
pub fn validate_employee_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidEmployeeName(name.to_string()));
    }
    Ok(())
}

/// Parses a movement effective date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date.
pub fn parse_movement_date(raw: &str) -> Result<Date, DomainError> {
    Date::parse(raw.trim(), DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: raw.to_string(),
        error: e.to_string(),
    })
}
