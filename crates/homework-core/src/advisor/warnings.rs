//! Workload warnings for the coming week.
//!
//! The window is calendar-based: everything due from today through
//! today + 7 days (eight calendar days), regardless of time of day.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::assignment::{Assignment, Priority};
use super::workload::estimate_hours;

const HIGH_PRIORITY_LIMIT: usize = 3;
const HIGH_DIFFICULTY_THRESHOLD: i64 = 8;
const HIGH_DIFFICULTY_LIMIT: usize = 2;
const HEAVY_HOURS: f64 = 30.0;
const MODERATE_HOURS: f64 = 20.0;
const WINDOW_DAYS: i64 = 7;

/// A qualitative warning about the upcoming week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkloadWarning {
    HighPriorityOverload { count: usize },
    HighDifficultyOverload { count: usize },
    HeavyWorkload { hours: f64 },
    ModerateWorkload { hours: f64 },
}

impl fmt::Display for WorkloadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadWarning::HighPriorityOverload { count } => {
                write!(f, "⚠️ You have {count} high-priority assignments due this week!")
            }
            WorkloadWarning::HighDifficultyOverload { count } => write!(
                f,
                "⚠️ You have {count} challenging (difficulty 8+) assignments this week!"
            ),
            WorkloadWarning::HeavyWorkload { hours } => write!(
                f,
                "⚠️ Heavy workload this week! Estimated {hours:.1} hours needed for assignments."
            ),
            WorkloadWarning::ModerateWorkload { hours } => write!(
                f,
                "🔎 Moderate workload this week: Estimated {hours:.1} hours. Plan your time well!"
            ),
        }
    }
}

/// Structured warnings, in fixed order: priority, difficulty, total hours.
pub fn workload_warnings(assignments: &[Assignment], now: NaiveDateTime) -> Vec<WorkloadWarning> {
    let today = now.date();
    let last_day = today + Duration::days(WINDOW_DAYS);

    let this_week: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| a.is_active())
        .filter(|a| {
            a.due_date
                .map(|due| due.date() >= today && due.date() <= last_day)
                .unwrap_or(false)
        })
        .collect();

    let mut warnings = Vec::new();
    if this_week.is_empty() {
        return warnings;
    }

    let high_priority = this_week
        .iter()
        .filter(|a| a.priority == Some(Priority::High))
        .count();
    if high_priority >= HIGH_PRIORITY_LIMIT {
        warnings.push(WorkloadWarning::HighPriorityOverload {
            count: high_priority,
        });
    }

    let high_difficulty = this_week
        .iter()
        .filter(|a| a.difficulty.unwrap_or(0) >= HIGH_DIFFICULTY_THRESHOLD)
        .count();
    if high_difficulty >= HIGH_DIFFICULTY_LIMIT {
        warnings.push(WorkloadWarning::HighDifficultyOverload {
            count: high_difficulty,
        });
    }

    let hours: f64 = this_week.iter().map(|a| estimate_hours(a)).sum();
    if hours > HEAVY_HOURS {
        warnings.push(WorkloadWarning::HeavyWorkload { hours });
    } else if hours > MODERATE_HOURS {
        warnings.push(WorkloadWarning::ModerateWorkload { hours });
    }

    tracing::debug!(
        active = this_week.len(),
        high_priority,
        high_difficulty,
        hours,
        warnings = warnings.len(),
        "evaluated workload warnings"
    );
    warnings
}

/// Rendered warning lines evaluated against `now`.
pub fn get_workload_warnings_at(assignments: &[Assignment], now: NaiveDateTime) -> Vec<String> {
    workload_warnings(assignments, now)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Rendered warning lines evaluated against the local wall clock.
pub fn get_workload_warnings(assignments: &[Assignment]) -> Vec<String> {
    get_workload_warnings_at(assignments, super::local_now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn item(priority: Priority, difficulty: i64, due: NaiveDateTime) -> Assignment {
        Assignment::new(0, "hw", "Math", due, priority, difficulty)
    }

    #[test]
    fn empty_input_has_no_warnings() {
        assert!(workload_warnings(&[], now()).is_empty());
    }

    #[test]
    fn three_high_priority_today_is_moderate_not_heavy() {
        // Due earlier today still counts: the window is by calendar date.
        let due = now() - Duration::hours(2);
        let assignments: Vec<_> = (0..3).map(|_| item(Priority::High, 5, due)).collect();

        let warnings = workload_warnings(&assignments, now());
        assert_eq!(
            warnings,
            vec![
                WorkloadWarning::HighPriorityOverload { count: 3 },
                WorkloadWarning::ModerateWorkload { hours: 22.5 },
            ]
        );
        assert_eq!(
            warnings[1].to_string(),
            "🔎 Moderate workload this week: Estimated 22.5 hours. Plan your time well!"
        );
    }

    #[test]
    fn two_hard_assignments_raise_difficulty_warning() {
        let due = now() + Duration::days(3);
        let assignments = vec![item(Priority::Medium, 9, due), item(Priority::Medium, 10, due)];

        let warnings = workload_warnings(&assignments, now());
        assert_eq!(
            warnings,
            vec![WorkloadWarning::HighDifficultyOverload { count: 2 }]
        );
    }

    #[test]
    fn heavy_workload_suppresses_moderate() {
        let due = now() + Duration::days(2);
        let assignments: Vec<_> = (0..3).map(|_| item(Priority::Low, 7, due)).collect();

        let lines = get_workload_warnings_at(&assignments, now());
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "⚠️ Heavy workload this week! Estimated 31.5 hours needed for assignments."
        );
    }

    #[test]
    fn window_covers_eight_calendar_days() {
        let day_seven_late = (now().date() + Duration::days(7)).and_hms_opt(23, 59, 0).unwrap();
        let day_eight = (now().date() + Duration::days(8)).and_hms_opt(0, 1, 0).unwrap();
        let yesterday = now() - Duration::days(1);

        let inside: Vec<_> = (0..3).map(|_| item(Priority::High, 1, day_seven_late)).collect();
        assert_eq!(workload_warnings(&inside, now()).len(), 1);

        let outside = vec![
            item(Priority::High, 1, day_eight),
            item(Priority::High, 1, day_eight),
            item(Priority::High, 1, yesterday),
        ];
        assert!(workload_warnings(&outside, now()).is_empty());
    }

    #[test]
    fn malformed_records_are_skipped() {
        let due = now() + Duration::days(1);
        let mut undated = item(Priority::High, 9, due);
        undated.due_date = None;
        let mut done = item(Priority::High, 9, due);
        done.completed = true;
        let mut no_priority = item(Priority::High, 9, due);
        no_priority.priority = None;

        let assignments = vec![
            undated,
            done,
            no_priority,
            item(Priority::High, 9, due),
        ];
        assert_eq!(
            workload_warnings(&assignments, now()),
            vec![
                WorkloadWarning::HighDifficultyOverload { count: 2 },
                WorkloadWarning::ModerateWorkload { hours: 27.0 },
            ]
        );
    }

    #[test]
    fn all_three_warnings_keep_their_order() {
        let due = now() + Duration::days(4);
        let assignments: Vec<_> = (0..4).map(|_| item(Priority::High, 9, due)).collect();

        let warnings = workload_warnings(&assignments, now());
        assert_eq!(
            warnings,
            vec![
                WorkloadWarning::HighPriorityOverload { count: 4 },
                WorkloadWarning::HighDifficultyOverload { count: 4 },
                WorkloadWarning::HeavyWorkload { hours: 54.0 },
            ]
        );
    }
}
