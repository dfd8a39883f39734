// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the compensation block engine.
//!
//! This crate orchestrates the pure core and the persistence layer into
//! batch entry points with per-row error reporting, plus read-only
//! timeline and history queries. DTOs here are the API contract and are
//! exposed directly as wire payloads by the server.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod csv_preview;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use csv_preview::{
    CsvPreviewResult, CsvRowResult, CsvRowStatus, preview_movement_csv,
};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    get_employee_snapshot, list_employee_movements, list_employee_snapshots,
    process_movement_batch, process_promotion_batch,
};
pub use request_response::{
    ListMovementsResponse, ListSnapshotsResponse, MovementBatchRequest, MovementBatchResponse,
    MovementInfo, MovementRowRequest, PromotionBatchRequest, PromotionRowRequest, RowErrorInfo,
    SnapshotInfo,
};
