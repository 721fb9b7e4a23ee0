//! Contextual study tips for a focal assignment.
//!
//! Every rule is additive; the result is the de-duplicated union of all tips
//! that fired. The general pool is sampled from the caller's generator, so a
//! seeded generator gives reproducible output.

use chrono::NaiveDateTime;
use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::assignment::{Assignment, Priority};
use super::subject::subject_tips;
use super::workload::days_until;

pub const NO_FOCAL_ASSIGNMENT: &str = "No specific assignment provided to provide tips for.";
pub const FALLBACK_TIP: &str = "Try to break down the work and start early!";

/// General tips drawn per call.
pub const GENERAL_SAMPLE_SIZE: usize = 3;

pub const GENERAL_TIPS: [&str; 10] = [
    "Break down large assignments into smaller, manageable tasks.",
    "Create a study schedule and stick to it.",
    "Minimize distractions: find a quiet study space and turn off notifications.",
    "Take regular short breaks (e.g., 5-10 minutes every hour) to stay fresh.",
    "Review your notes regularly, not just before an exam.",
    "Practice active recall: try to retrieve information without looking at your notes.",
    "Teach the material to someone else to solidify your understanding.",
    "Get enough sleep; it's crucial for memory consolidation.",
    "Stay hydrated and eat nutritious food to keep your brain powered.",
    "Don't be afraid to ask for help from teachers or classmates if you're stuck.",
];

pub const HARD_ASSIGNMENT_TIPS: [&str; 3] = [
    "Break this challenging assignment into smaller, manageable tasks.",
    "Schedule dedicated study blocks with breaks for this assignment.",
    "Consider using the Pomodoro Technique (e.g., 25min work / 5min break).",
];

pub const LIGHT_ASSIGNMENT_TIPS: [&str; 1] =
    ["This seems like a lighter task. Plan to complete it efficiently!"];

pub const BUSY_WEEK_TIPS: [&str; 3] = [
    "📅 You have multiple assignments due soon. Create a detailed weekly study schedule.",
    "⏰ Use time blocking techniques to allocate specific time slots for each assignment.",
    "📊 Prioritize your tasks based on due dates, difficulty, and weight.",
];

pub const HIGH_PRIORITY_TIPS: [&str; 3] = [
    "❗ This is a high-priority assignment. Consider starting it before others.",
    "📋 Set specific, achievable daily goals for this assignment.",
    "⚡ Minimize distractions during your dedicated work sessions for this task.",
];

pub const DUE_VERY_SOON_TIPS: [&str; 3] = [
    "⚠️ This assignment is due very soon! Focus on completing essential parts first.",
    "🕒 Set specific completion milestones for today and tomorrow.",
    "📱 Minimize all distractions and dedicate focused time for completion.",
];

pub const DUE_THIS_WEEK_TIPS: [&str; 3] = [
    "📆 This assignment is due within a week. Create a daily progress plan.",
    "✅ Break the remaining work into manageable chunks for each day.",
    "📈 Track your progress daily to stay on schedule.",
];

const HARD_DIFFICULTY: i64 = 7;
const LIGHT_DIFFICULTY: i64 = 4;
const BUSY_WEEK_COUNT: usize = 3;
const VERY_SOON_DAYS: i64 = 2;
const THIS_WEEK_DAYS: i64 = 7;

/// Compose tips for `focal` in the context of `all`, evaluated at `now`.
pub fn get_tips_at<R: Rng + ?Sized>(
    all: &[Assignment],
    focal: Option<&Assignment>,
    now: NaiveDateTime,
    rng: &mut R,
) -> Vec<String> {
    let Some(focal) = focal else {
        return vec![NO_FOCAL_ASSIGNMENT.to_string()];
    };

    let mut tips: IndexSet<&'static str> = IndexSet::new();

    let difficulty = focal.difficulty.unwrap_or(0);
    if difficulty > HARD_DIFFICULTY {
        tips.extend(HARD_ASSIGNMENT_TIPS);
    } else if difficulty > 0 && difficulty < LIGHT_DIFFICULTY {
        tips.extend(LIGHT_ASSIGNMENT_TIPS);
    }

    let sample = GENERAL_SAMPLE_SIZE.min(GENERAL_TIPS.len());
    tips.extend(GENERAL_TIPS.choose_multiple(rng, sample).copied());

    tips.extend(subject_tips(focal.class.as_deref()).iter().copied());

    let due_soon = all
        .iter()
        .filter(|a| a.is_active())
        .filter_map(|a| a.due_date)
        .filter(|due| days_until(*due, now) <= THIS_WEEK_DAYS)
        .count();
    if due_soon >= BUSY_WEEK_COUNT {
        tips.extend(BUSY_WEEK_TIPS);
    }

    if focal.priority == Some(Priority::High) {
        tips.extend(HIGH_PRIORITY_TIPS);
    }

    if let Some(due) = focal.due_date {
        let days = days_until(due, now);
        if days <= VERY_SOON_DAYS {
            tips.extend(DUE_VERY_SOON_TIPS);
        } else if days <= THIS_WEEK_DAYS {
            tips.extend(DUE_THIS_WEEK_TIPS);
        }
    }

    tracing::debug!(
        focal = focal.id,
        tips = tips.len(),
        due_soon,
        "composed study tips"
    );

    if tips.is_empty() {
        return vec![FALLBACK_TIP.to_string()];
    }
    tips.into_iter().map(str::to_string).collect()
}

/// Compose tips evaluated against the local wall clock.
pub fn get_tips<R: Rng + ?Sized>(
    all: &[Assignment],
    focal: Option<&Assignment>,
    rng: &mut R,
) -> Vec<String> {
    get_tips_at(all, focal, super::local_now(), rng)
}

/// Compose tips for the assignment in `all` carrying `focal_id`.
///
/// An unknown id is treated as no focal assignment.
pub fn get_tips_for<R: Rng + ?Sized>(
    all: &[Assignment],
    focal_id: u64,
    now: NaiveDateTime,
    rng: &mut R,
) -> Vec<String> {
    let focal = all.iter().find(|a| a.id == focal_id);
    get_tips_at(all, focal, now, rng)
}
