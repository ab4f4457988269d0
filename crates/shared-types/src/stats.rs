use serde::{Deserialize, Serialize};

use crate::case::Case;

/// Aggregate counts the dashboard stat cards derive from a fetched case
/// list. Recomputed per view-mount; never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStatistics {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl CaseStatistics {
    /// Count cases by canonical backend status. Unknown status values
    /// count toward `total` only.
    pub fn from_cases(cases: &[Case]) -> Self {
        let mut stats = Self {
            total: cases.len(),
            ..Self::default()
        };
        for case in cases {
            match case.status.as_str() {
                "OPEN" => stats.open += 1,
                "IN_PROGRESS" => stats.in_progress += 1,
                "RESOLVED" => stats.resolved += 1,
                "CLOSED" => stats.closed += 1,
                _ => {}
            }
        }
        stats
    }
}
