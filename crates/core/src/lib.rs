// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod propagate;
mod recorder;
mod resolve;
mod timeline;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::CoreError;
pub use propagate::apply_movement;
pub use recorder::{BatchContext, BatchOutcome, MovementInput, RowError, record_batch};
pub use resolve::{ResolvedValues, resolve_transition};
pub use timeline::{EmployeeTimeline, TimelineUpdate};
