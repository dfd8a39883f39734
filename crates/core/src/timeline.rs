// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use comp_block_domain::{EmployeeMaster, MonthlySnapshot, YearMonth};

/// One employee's snapshot timeline plus their master record.
///
/// The timeline is the in-memory unit of work for propagation: callers load
/// it from persistence, apply movements to it, and write back only the
/// months that were touched.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTimeline {
    /// The master record, if the employee is known to the directory.
    /// `None` means the movement referenced an employee the directory has
    /// never seen; propagation still works from snapshot carry-forward.
    pub master: Option<EmployeeMaster>,
    /// Snapshots keyed by month, in chronological order.
    pub snapshots: BTreeMap<YearMonth, MonthlySnapshot>,
}

impl EmployeeTimeline {
    /// Creates an empty timeline for an employee.
    #[must_use]
    pub const fn new(master: Option<EmployeeMaster>) -> Self {
        Self {
            master,
            snapshots: BTreeMap::new(),
        }
    }

    /// Returns the snapshot for a month, if one exists.
    #[must_use]
    pub fn snapshot(&self, month: YearMonth) -> Option<&MonthlySnapshot> {
        self.snapshots.get(&month)
    }

    /// Returns the latest month that has a snapshot.
    #[must_use]
    pub fn latest_month(&self) -> Option<YearMonth> {
        self.snapshots.keys().next_back().copied()
    }

    /// Returns the latest snapshot strictly before the given month.
    #[must_use]
    pub fn snapshot_before(&self, month: YearMonth) -> Option<&MonthlySnapshot> {
        self.snapshots
            .range(..month)
            .next_back()
            .map(|(_, snapshot)| snapshot)
    }

    /// Returns the months strictly after the given month that have
    /// snapshots, in chronological order.
    #[must_use]
    pub fn months_after(&self, month: YearMonth) -> Vec<YearMonth> {
        self.snapshots
            .range(month.next()..)
            .map(|(existing, _)| *existing)
            .collect()
    }

    /// Inserts or replaces the snapshot for its month.
    pub fn upsert(&mut self, snapshot: MonthlySnapshot) {
        self.snapshots.insert(snapshot.year_month, snapshot);
    }
}

/// The result of applying one movement to a timeline.
///
/// Contains the new timeline and the months whose snapshots changed.
/// Persistence writes back exactly the touched months plus the master
/// record when it changed.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineUpdate {
    /// The timeline after the movement was applied.
    pub timeline: EmployeeTimeline,
    /// Months whose snapshots were created or modified, in order.
    pub touched_months: Vec<YearMonth>,
    /// Whether the master record was updated as the latest-movement mirror.
    pub master_changed: bool,
}
