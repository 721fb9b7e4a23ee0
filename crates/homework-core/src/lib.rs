//! # Homework Tracker Core Library
//!
//! This library provides the core logic for the Homework Tracker. As with the
//! CLI, any front end is a thin layer over the same core.
//!
//! ## Architecture
//!
//! - **Advisor**: Pure functions over an assignment snapshot that derive
//!   workload warnings, a ranked study schedule, and contextual study tips
//! - **Manager**: Validated CRUD over the session's assignment list
//! - **Storage**: JSON assignment file and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Assignment`]: The record every component reads
//! - [`AssignmentManager`]: Assignment lifecycle and persistence
//! - [`Config`]: Application configuration management
//! - [`advisor`]: Estimator, warning engine, schedule planner, tip composer

pub mod advisor;
pub mod assignment;
pub mod error;
pub mod format;
pub mod manager;
pub mod storage;

pub use advisor::{
    estimate_hours, estimate_period_hours, generate_schedule, get_tips, get_workload_warnings,
    PeriodWorkload, ScheduleEntry, Subject, WorkloadWarning, HOURS_PER_DIFFICULTY_POINT,
};
pub use assignment::{Assignment, Priority};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use manager::{AssignmentManager, AssignmentUpdate, CompletionChange, NewAssignment};
pub use storage::{AssignmentStore, Config, JsonFileStore, MemoryStore};
