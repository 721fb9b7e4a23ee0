//! Display helpers for due dates.

use chrono::NaiveDateTime;

/// Human-readable time left until `due`, e.g. `"2 days, 3 hours remaining"`.
pub fn format_time_remaining(due: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(due) = due else {
        return "Invalid date".to_string();
    };

    let total_seconds = (due - now).num_seconds();
    if total_seconds <= 0 {
        return "Overdue!".to_string();
    }
    if total_seconds < 60 {
        return "Less than a minute remaining".to_string();
    }

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;

    let parts: Vec<String> = [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{n} {unit}{}", if n != 1 { "s" } else { "" }))
        .collect();

    if parts.is_empty() {
        return "Due very soon".to_string();
    }
    format!("{} remaining", parts.join(", "))
}

/// `YYYY-MM-DD HH:MM`, or `YYYY-MM-DD` without time; `N/A` when absent.
pub fn format_date(date: Option<NaiveDateTime>, include_time: bool) -> String {
    match date {
        Some(d) if include_time => d.format("%Y-%m-%d %H:%M").to_string(),
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "N/A".to_string(),
    }
}
