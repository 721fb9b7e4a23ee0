//! Study schedule suggestions.
//!
//! Ranks active, strictly future assignments by priority and due date and
//! proposes a daily pace for the top entries.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use super::workload::{days_until, estimate_hours};

/// Number of ranked assignments included in a schedule.
pub const SCHEDULE_LIMIT: usize = 5;

pub const SCHEDULE_HEADER: &str = "📅 Suggested Study Schedule Focus (Top 5):";
pub const NO_ASSIGNMENTS: &str = "No assignments to schedule!";
pub const NOTHING_SCHEDULABLE: &str =
    "No upcoming assignments that can be scheduled (check due dates, completion status, and difficulty).";

/// How the remaining work should be paced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pace {
    /// Spread over the remaining whole days.
    Daily { days_until_due: i64, hours_per_day: f64 },
    /// Due before the next whole day elapses.
    DueToday,
}

/// One ranked line of the suggested schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: u64,
    pub name: String,
    pub class: Option<String>,
    pub priority: Option<String>,
    pub difficulty: i64,
    pub estimated_hours: f64,
    pub pace: Pace,
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() { "N/A" } else { &self.name };
        writeln!(f, "• {} ({}):", name, self.class.as_deref().unwrap_or("N/A"))?;
        writeln!(
            f,
            "  - Priority: {}, Difficulty: {}/10",
            self.priority.as_deref().unwrap_or("N/A"),
            self.difficulty
        )?;
        match &self.pace {
            Pace::Daily {
                days_until_due,
                hours_per_day,
            } => write!(
                f,
                "  - Due in {} days. Estimated total: {:.1} hrs.\n  - Suggestion: Allocate ~{:.1} hours/day.",
                days_until_due, self.estimated_hours, hours_per_day
            ),
            Pace::DueToday => write!(
                f,
                "  - URGENT: DUE TODAY! Estimated remaining: {:.1} hrs. Focus on this!",
                self.estimated_hours
            ),
        }
    }
}

/// Rank schedulable assignments and build at most [`SCHEDULE_LIMIT`] entries.
///
/// Eligible: not completed, due strictly after `now`, difficulty present.
/// Ordering is priority rank descending, then due date ascending; the sort is
/// stable so exact ties keep their input order.
pub fn plan_schedule(assignments: &[Assignment], now: NaiveDateTime) -> Vec<ScheduleEntry> {
    let mut eligible: Vec<(&Assignment, NaiveDateTime, i64)> = assignments
        .iter()
        .filter(|a| a.is_active())
        .filter_map(|a| match (a.due_date, a.difficulty) {
            (Some(due), Some(difficulty)) if due > now => Some((a, due, difficulty)),
            _ => None,
        })
        .collect();

    eligible.sort_by(|(a, a_due, _), (b, b_due, _)| {
        b.priority_rank()
            .cmp(&a.priority_rank())
            .then_with(|| a_due.cmp(b_due))
    });

    let entries: Vec<ScheduleEntry> = eligible
        .into_iter()
        .take(SCHEDULE_LIMIT)
        .map(|(assignment, due, difficulty)| {
            let estimated_hours = estimate_hours(assignment);
            let days = days_until(due, now);
            let pace = if days > 0 {
                Pace::Daily {
                    days_until_due: days,
                    hours_per_day: estimated_hours / days as f64,
                }
            } else {
                Pace::DueToday
            };
            ScheduleEntry {
                id: assignment.id,
                name: assignment.name.clone(),
                class: assignment.class.clone(),
                priority: assignment.priority.as_ref().map(|p| p.to_string()),
                difficulty,
                estimated_hours,
                pace,
            }
        })
        .collect();

    tracing::debug!(entries = entries.len(), "planned study schedule");
    entries
}

/// Rendered schedule evaluated against `now`.
///
/// The header comes first; an empty input or an input with nothing
/// schedulable yields a single explanatory line instead.
pub fn generate_schedule_at(assignments: &[Assignment], now: NaiveDateTime) -> Vec<String> {
    if assignments.is_empty() {
        return vec![NO_ASSIGNMENTS.to_string()];
    }

    let entries = plan_schedule(assignments, now);
    if entries.is_empty() {
        return vec![NOTHING_SCHEDULABLE.to_string()];
    }

    std::iter::once(SCHEDULE_HEADER.to_string())
        .chain(entries.iter().map(ToString::to_string))
        .collect()
}

/// Rendered schedule evaluated against the local wall clock.
pub fn generate_schedule(assignments: &[Assignment]) -> Vec<String> {
    generate_schedule_at(assignments, super::local_now())
}
