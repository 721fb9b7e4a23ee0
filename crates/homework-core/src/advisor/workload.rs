//! Workload estimation.
//!
//! Hours are derived from difficulty alone using [`HOURS_PER_DIFFICULTY_POINT`].

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;

/// Estimated hours of work per point of difficulty.
pub const HOURS_PER_DIFFICULTY_POINT: f64 = 1.5;

/// Bucket used when an assignment has no class.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Estimated hours for one assignment. A missing difficulty counts as zero.
pub fn estimate_hours(assignment: &Assignment) -> f64 {
    assignment.difficulty.unwrap_or(0) as f64 * HOURS_PER_DIFFICULTY_POINT
}

/// Aggregated workload for a time period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodWorkload {
    pub total: f64,
    pub by_class: BTreeMap<String, f64>,
    pub count: usize,
}

/// Estimate the workload due in `[start, end]`, both inclusive.
///
/// `start` defaults to `now` and `end` to `start + 7 days`. Only active
/// assignments with a due date are counted.
pub fn estimate_period_hours(
    assignments: &[Assignment],
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> PeriodWorkload {
    let start = start.unwrap_or(now);
    let end = end.unwrap_or(start + Duration::days(7));

    let mut workload = PeriodWorkload {
        total: 0.0,
        by_class: BTreeMap::new(),
        count: 0,
    };

    for assignment in assignments.iter().filter(|a| a.is_active()) {
        let Some(due) = assignment.due_date else {
            continue;
        };
        if due < start || due > end {
            continue;
        }

        let hours = estimate_hours(assignment);
        let class = assignment.class_name().unwrap_or(UNCATEGORIZED);
        workload.total += hours;
        *workload.by_class.entry(class.to_string()).or_insert(0.0) += hours;
        workload.count += 1;
    }

    tracing::debug!(
        total = workload.total,
        count = workload.count,
        %start,
        %end,
        "estimated period workload"
    );
    workload
}

/// Whole days between `now` and `due`, floored like a calendar delta.
///
/// 36 hours ahead is 1 day; 6 hours overdue is -1 day.
pub(crate) fn days_until(due: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (due - now).num_seconds().div_euclid(86_400)
}
