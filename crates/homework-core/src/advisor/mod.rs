//! Study advisor: workload estimation, weekly warnings, schedule suggestions
//! and contextual tips.
//!
//! Every function here is a pure read over an assignment snapshot. The `_at`
//! variants take "now" explicitly; the plain variants read the local wall
//! clock once at the start of the call. Nothing in this module fails:
//! malformed records are skipped by whichever aggregate needs the missing
//! field, and empty input yields each component's empty response.

pub mod planner;
pub mod subject;
pub mod tips;
pub mod warnings;
pub mod workload;

use chrono::NaiveDateTime;

pub use planner::{generate_schedule, generate_schedule_at, plan_schedule, Pace, ScheduleEntry};
pub use subject::{subject_tips, Subject};
pub use tips::{get_tips, get_tips_at, get_tips_for};
pub use warnings::{get_workload_warnings, get_workload_warnings_at, workload_warnings, WorkloadWarning};
pub use workload::{estimate_hours, estimate_period_hours, PeriodWorkload, HOURS_PER_DIFFICULTY_POINT};

/// Local wall-clock time without zone, matching stored due dates.
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
