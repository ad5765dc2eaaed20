//! Storage initialization
//!
//! Handles first-run setup: writes the built-in table to the data directory
//! so it can be edited.

use crate::config::paths::BoothPaths;
use crate::error::BoothResult;

use super::file_io::write_json_atomic;
use super::table::default_budget_data;

/// Initialize storage for a fresh installation
///
/// Returns true when a new table file was written. An existing table file is
/// left untouched.
pub fn initialize_storage(paths: &BoothPaths) -> BoothResult<bool> {
    paths.ensure_directories()?;

    if paths.table_file().exists() {
        return Ok(false);
    }

    write_json_atomic(paths.table_file(), &default_budget_data())?;
    Ok(true)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BoothPaths) -> bool {
    !paths.table_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetData;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoothPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        assert!(initialize_storage(&paths).unwrap());

        assert!(!needs_initialization(&paths));
        assert!(paths.data_dir().exists());

        let content = std::fs::read_to_string(paths.table_file()).unwrap();
        let data: BudgetData = serde_json::from_str(&content).unwrap();
        assert_eq!(data, default_budget_data());
    }

    #[test]
    fn test_initialize_keeps_existing_table() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoothPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut edited = default_budget_data();
        edited.indirect_expenses.truncate(1);
        write_json_atomic(paths.table_file(), &edited).unwrap();

        assert!(!initialize_storage(&paths).unwrap());
        let content = std::fs::read_to_string(paths.table_file()).unwrap();
        let data: BudgetData = serde_json::from_str(&content).unwrap();
        assert_eq!(data.indirect_expenses.len(), 1);
    }
}
