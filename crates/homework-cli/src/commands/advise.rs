//! Study advice commands for CLI.

use clap::Subcommand;
use homework_core::advisor::{
    estimate_period_hours, generate_schedule_at, get_tips_for, local_now, plan_schedule,
    workload_warnings,
};
use homework_core::manager::parse_due_date_text;
use homework_core::Config;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

use super::open_manager;

#[derive(Subcommand)]
pub enum AdviseAction {
    /// Warnings about the coming week's workload
    Warnings {
        #[arg(long)]
        json: bool,
    },
    /// Suggested study schedule (top 5)
    Schedule {
        #[arg(long)]
        json: bool,
    },
    /// Study tips for one assignment
    Tips {
        /// Assignment ID
        id: u64,
        /// Seed for the general-tip sample (overrides tips.seed)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Estimated hours due in a period (defaults to the next 7 days)
    Workload {
        /// Period start, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long)]
        start: Option<String>,
        /// Period end, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long)]
        end: Option<String>,
    },
}

pub fn run(action: AdviseAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let manager = open_manager(config)?;
    let assignments = manager.assignments();
    let now = local_now();

    match action {
        AdviseAction::Warnings { json } => {
            let warnings = workload_warnings(assignments, now);
            if json {
                println!("{}", serde_json::to_string_pretty(&warnings)?);
            } else if warnings.is_empty() {
                println!("No workload warnings for this week.");
            } else {
                for warning in warnings {
                    println!("{warning}");
                }
            }
        }
        AdviseAction::Schedule { json } => {
            if json {
                let entries = plan_schedule(assignments, now);
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for line in generate_schedule_at(assignments, now) {
                    println!("{line}");
                }
            }
        }
        AdviseAction::Tips { id, seed } => {
            let mut rng = match seed.or(config.tips.seed) {
                Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
                None => Mcg128Xsl64::from_entropy(),
            };
            for tip in get_tips_for(assignments, id, now, &mut rng) {
                println!("{tip}");
            }
        }
        AdviseAction::Workload { start, end } => {
            let start = start.as_deref().map(parse_due_date_text).transpose()?;
            let end = end.as_deref().map(parse_due_date_text).transpose()?;
            let workload = estimate_period_hours(assignments, start, end, now);
            println!("{}", serde_json::to_string_pretty(&workload)?);
        }
    }
    Ok(())
}
