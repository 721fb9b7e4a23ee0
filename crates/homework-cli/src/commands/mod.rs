pub mod advise;
pub mod assignment;
pub mod config;

use homework_core::{AssignmentManager, Config, JsonFileStore};

/// Open the manager over the configured assignments file.
pub fn open_manager(
    config: &Config,
) -> Result<AssignmentManager<JsonFileStore>, Box<dyn std::error::Error>> {
    let store = JsonFileStore::open(config.assignments_path()?)?;
    Ok(AssignmentManager::open(store)?)
}
