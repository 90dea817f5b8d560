//! Storage initialization
//!
//! Handles first-run setup: the starter categories and a reporting period set
//! to the current month.

use tracing::info;

use crate::config::paths::PlannerPaths;
use crate::error::PlannerError;
use crate::models::{Category, ReportingPeriod};

use super::file_io::write_json_atomic;
use super::StateData;

/// Initialize storage for a fresh installation
///
/// Returns `true` if a new state file was written. An existing state file is
/// never touched.
pub fn initialize_storage(paths: &PlannerPaths) -> Result<bool, PlannerError> {
    paths.ensure_directories()?;

    if !needs_initialization(paths) {
        return Ok(false);
    }

    let state = StateData {
        categories: Category::defaults(),
        period: ReportingPeriod::current(),
        ..StateData::default()
    };
    write_json_atomic(paths.state_file(), &state)?;

    info!(path = %paths.state_file().display(), "initialized record store");
    Ok(true)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &PlannerPaths) -> bool {
    !paths.state_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::read_json;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        assert!(initialize_storage(&paths).unwrap());

        assert!(!needs_initialization(&paths));
        assert!(paths.state_file().exists());
        assert!(paths.exports_dir().exists());
    }

    #[test]
    fn test_default_categories_created() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let data: StateData = read_json(paths.state_file()).unwrap();
        let names: Vec<_> = data.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Food", "Transportation", "Housing", "Entertainment", "Shopping", "Income"]
        );
        assert!(data.transactions.is_empty());
        assert!(data.goals.is_empty());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let custom = StateData {
            categories: vec![Category::new("Custom", Money::from_units(5), "fa-tag", "#FF9F40")],
            ..StateData::default()
        };
        write_json_atomic(paths.state_file(), &custom).unwrap();

        assert!(!initialize_storage(&paths).unwrap());

        let data: StateData = read_json(paths.state_file()).unwrap();
        assert_eq!(data.categories.len(), 1);
        assert_eq!(data.categories[0].name, "Custom");
    }
}
