//! Assignment management commands for CLI.

use clap::Subcommand;
use homework_core::advisor::local_now;
use homework_core::format::{format_date, format_time_remaining};
use homework_core::manager::{parse_due_date_text, ASSIGNMENT_CATEGORIES};
use homework_core::{Assignment, AssignmentUpdate, CompletionChange, Config, NewAssignment, Priority};

use super::open_manager;

#[derive(Subcommand)]
pub enum AssignmentAction {
    /// Add a new assignment
    Add {
        /// Assignment name
        name: String,
        /// Class (subject) name
        #[arg(long)]
        class: String,
        /// Due date, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long)]
        due: String,
        /// Priority: High, Medium or Low
        #[arg(long, default_value = "Medium")]
        priority: String,
        /// Difficulty from 1 to 10
        #[arg(long)]
        difficulty: i64,
    },
    /// List assignments
    List {
        /// Include completed assignments
        #[arg(long)]
        all: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Get assignment details
    Get {
        /// Assignment ID
        id: u64,
    },
    /// Update an assignment
    Update {
        /// Assignment ID
        id: u64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New class
        #[arg(long)]
        class: Option<String>,
        /// New due date, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long)]
        due: Option<String>,
        /// New priority
        #[arg(long)]
        priority: Option<String>,
        /// New difficulty
        #[arg(long)]
        difficulty: Option<i64>,
    },
    /// Delete an assignment
    Delete {
        /// Assignment ID
        id: u64,
    },
    /// Mark an assignment as completed
    Complete {
        /// Assignment ID
        id: u64,
    },
    /// Mark an assignment as not completed
    Reopen {
        /// Assignment ID
        id: u64,
    },
    /// List known classes
    Classes,
    /// List priority levels
    Priorities,
    /// List assignment categories
    Categories,
}

fn summary_line(assignment: &Assignment) -> String {
    let now = local_now();
    format!(
        "#{} {} ({}) due {} [{}] priority {}, difficulty {}{}",
        assignment.id,
        assignment.name,
        assignment.class_name().unwrap_or("N/A"),
        format_date(assignment.due_date, true),
        format_time_remaining(assignment.due_date, now),
        assignment
            .priority
            .as_ref()
            .map_or("N/A".to_string(), ToString::to_string),
        assignment
            .difficulty
            .map_or("N/A".to_string(), |d| d.to_string()),
        if assignment.completed { " (done)" } else { "" },
    )
}

fn set_completion(
    config: &Config,
    id: u64,
    completed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = open_manager(config)?;
    match manager.set_completed(id, completed)? {
        CompletionChange::Updated => println!("Completion status updated successfully."),
        CompletionChange::AlreadySet => println!(
            "Assignment is already marked as {}.",
            if completed { "complete" } else { "incomplete" }
        ),
    }
    Ok(())
}

pub fn run(action: AssignmentAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AssignmentAction::Add {
            name,
            class,
            due,
            priority,
            difficulty,
        } => {
            let mut manager = open_manager(config)?;
            let id = manager.add(NewAssignment {
                name,
                class,
                due_date: Some(parse_due_date_text(&due)?),
                priority: Some(Priority::from(priority)),
                difficulty: Some(difficulty),
                completed: false,
            })?;
            println!("Assignment created: {id}");
        }
        AssignmentAction::List { all, json } => {
            let manager = open_manager(config)?;
            let listed: Vec<&Assignment> = manager
                .assignments()
                .iter()
                .filter(|a| all || !a.completed)
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&listed)?);
            } else if listed.is_empty() {
                println!("No assignments.");
            } else {
                for assignment in listed {
                    println!("{}", summary_line(assignment));
                }
            }
        }
        AssignmentAction::Get { id } => {
            let manager = open_manager(config)?;
            let assignment = manager
                .get(id)
                .ok_or(homework_core::CoreError::NotFound { id })?;
            println!("{}", serde_json::to_string_pretty(assignment)?);
        }
        AssignmentAction::Update {
            id,
            name,
            class,
            due,
            priority,
            difficulty,
        } => {
            let update = AssignmentUpdate {
                name,
                class,
                due_date: due.as_deref().map(parse_due_date_text).transpose()?,
                priority: priority.map(Priority::from),
                difficulty,
                completed: None,
            };
            if update.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }
            let mut manager = open_manager(config)?;
            manager.update(id, update)?;
            println!("Assignment updated successfully.");
        }
        AssignmentAction::Delete { id } => {
            let mut manager = open_manager(config)?;
            let removed = manager.delete(id)?;
            println!("Assignment deleted: {} ({})", removed.id, removed.name);
        }
        AssignmentAction::Complete { id } => set_completion(config, id, true)?,
        AssignmentAction::Reopen { id } => set_completion(config, id, false)?,
        AssignmentAction::Classes => {
            let manager = open_manager(config)?;
            for class in manager.class_list() {
                println!("{class}");
            }
        }
        AssignmentAction::Priorities => {
            for (priority, description) in Priority::levels() {
                println!("{priority}: {description}");
            }
        }
        AssignmentAction::Categories => {
            for category in ASSIGNMENT_CATEGORIES {
                println!("{category}");
            }
        }
    }
    Ok(())
}
