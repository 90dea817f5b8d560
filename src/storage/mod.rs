//! Storage layer for the budget planner
//!
//! The record store owns every transaction, category and goal plus the
//! selected reporting period. It is persisted as a single JSON document with
//! atomic writes; dates are stored as ISO-8601 strings and come back as
//! calendar dates.

pub mod file_io;
pub mod init;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::paths::PlannerPaths;
use crate::error::PlannerError;
use crate::models::{Category, Goal, ReportingPeriod, Transaction};
use crate::reports::Snapshot;

/// Everything the store persists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateData {
    /// Transactions in insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub goals: Vec<Goal>,

    /// Month selected for report views
    #[serde(default)]
    pub period: ReportingPeriod,
}

impl StateData {
    /// Lend the records to the reporting engine
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.transactions, &self.categories, &self.goals)
    }
}

/// Main storage coordinator
pub struct Storage {
    paths: PlannerPaths,
    data: RwLock<StateData>,
}

impl Storage {
    /// Create a new Storage instance with an empty store
    pub fn new(paths: PlannerPaths) -> Result<Self, PlannerError> {
        paths.ensure_directories()?;

        Ok(Self {
            paths,
            data: RwLock::new(StateData::default()),
        })
    }

    /// Create the store, seeding defaults on first run, and load it from disk
    pub fn open(paths: PlannerPaths) -> Result<Self, PlannerError> {
        initialize_storage(&paths)?;
        let storage = Self::new(paths)?;
        storage.load()?;
        Ok(storage)
    }

    /// Load the store from disk; a missing file loads as empty
    pub fn load(&self) -> Result<(), PlannerError> {
        let state: StateData = read_json(self.paths.state_file())?;
        debug!(
            transactions = state.transactions.len(),
            categories = state.categories.len(),
            goals = state.goals.len(),
            "loaded record store"
        );
        *self.write()? = state;
        Ok(())
    }

    /// Save the store to disk
    pub fn save(&self) -> Result<(), PlannerError> {
        let data = self.read()?;
        write_json_atomic(self.paths.state_file(), &*data)?;
        debug!(path = %self.paths.state_file().display(), "saved record store");
        Ok(())
    }

    /// Check if storage has been initialized (state file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Copy of the whole store, for handing to the reporting engine
    pub fn state(&self) -> Result<StateData, PlannerError> {
        Ok(self.read()?.clone())
    }

    pub fn transactions(&self) -> Result<Vec<Transaction>, PlannerError> {
        Ok(self.read()?.transactions.clone())
    }

    pub fn categories(&self) -> Result<Vec<Category>, PlannerError> {
        Ok(self.read()?.categories.clone())
    }

    pub fn goals(&self) -> Result<Vec<Goal>, PlannerError> {
        Ok(self.read()?.goals.clone())
    }

    pub fn period(&self) -> Result<ReportingPeriod, PlannerError> {
        Ok(self.read()?.period)
    }

    /// Run `f` against the store under the read lock
    pub fn with_state<R>(&self, f: impl FnOnce(&StateData) -> R) -> Result<R, PlannerError> {
        let guard = self.read()?;
        Ok(f(&guard))
    }

    /// Mutate the store under the write lock; the caller decides when to save
    pub fn update<R>(&self, f: impl FnOnce(&mut StateData) -> R) -> Result<R, PlannerError> {
        let mut guard = self.write()?;
        Ok(f(&mut guard))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StateData>, PlannerError> {
        self.data
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StateData>, PlannerError> {
        self.data
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthKey, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn temp_paths(temp_dir: &TempDir) -> PlannerPaths {
        PlannerPaths::with_base_dir(temp_dir.path().to_path_buf())
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_paths(&temp_dir)).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert!(storage.transactions().unwrap().is_empty());
    }

    #[test]
    fn test_open_seeds_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::open(temp_paths(&temp_dir)).unwrap();

        assert!(storage.is_initialized());
        let categories = storage.categories().unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(storage.period().unwrap().key(), MonthKey::current());
    }

    #[test]
    fn test_save_and_reload_preserves_order_and_dates() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::open(temp_paths(&temp_dir)).unwrap();
        let food = storage.categories().unwrap()[0].clone();

        storage
            .update(|state| {
                for day in [20, 5, 12] {
                    state.transactions.push(Transaction::new(
                        TransactionType::Expense,
                        Money::from_units(day),
                        format!("day {}", day),
                        &food,
                        NaiveDate::from_ymd_opt(2024, 3, day as u32).unwrap(),
                    ));
                }
                state.period = ReportingPeriod::new(MonthKey::new(2024, 2));
            })
            .unwrap();
        storage.save().unwrap();

        let raw = std::fs::read_to_string(temp_paths(&temp_dir).state_file()).unwrap();
        assert!(raw.contains("\"2024-03-20\""));

        let reopened = Storage::open(temp_paths(&temp_dir)).unwrap();
        let descriptions: Vec<_> = reopened
            .transactions()
            .unwrap()
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(descriptions, vec!["day 20", "day 5", "day 12"]);
        assert_eq!(reopened.period().unwrap().key(), MonthKey::new(2024, 2));
        assert_eq!(reopened.state().unwrap(), storage.state().unwrap());
    }

    #[test]
    fn test_malformed_state_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        paths.ensure_directories().unwrap();
        std::fs::write(paths.state_file(), "[1, 2").unwrap();

        let err = Storage::open(paths).err().unwrap();
        assert!(matches!(err, PlannerError::Storage(_)));
    }

    #[test]
    fn test_with_state_reads_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::open(temp_paths(&temp_dir)).unwrap();

        let count = storage
            .with_state(|state| state.snapshot().categories.len())
            .unwrap();
        assert_eq!(count, 6);
    }
}
