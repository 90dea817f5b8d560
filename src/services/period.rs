//! Reporting period service
//!
//! Moves the persisted report cursor. The cursor is independent of the
//! current calendar month used by the dashboard cards.

use tracing::info;

use crate::error::PlannerResult;
use crate::models::{MonthKey, ReportingPeriod};
use crate::storage::Storage;

/// Service for reporting period navigation
pub struct PeriodService<'a> {
    storage: &'a Storage,
}

impl<'a> PeriodService<'a> {
    /// Create a new period service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The selected reporting period
    pub fn show(&self) -> PlannerResult<ReportingPeriod> {
        self.storage.period()
    }

    /// Step back one month
    pub fn prev(&self) -> PlannerResult<ReportingPeriod> {
        self.move_to(|period| period.prev())
    }

    /// Step forward one month
    pub fn next(&self) -> PlannerResult<ReportingPeriod> {
        self.move_to(|period| period.next())
    }

    /// Jump to a specific month
    pub fn set(&self, month: MonthKey) -> PlannerResult<ReportingPeriod> {
        self.move_to(|_| ReportingPeriod::new(month))
    }

    /// Resolve an optional `YYYY-MM` override, falling back to the cursor
    pub fn resolve(&self, month: Option<MonthKey>) -> PlannerResult<MonthKey> {
        match month {
            Some(month) => Ok(month),
            None => Ok(self.show()?.key()),
        }
    }

    fn move_to(
        &self,
        step: impl FnOnce(ReportingPeriod) -> ReportingPeriod,
    ) -> PlannerResult<ReportingPeriod> {
        let period = self.storage.update(|state| {
            state.period = step(state.period);
            state.period
        })?;
        self.storage.save()?;

        info!(period = %period.key(), "moved reporting period");
        Ok(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PlannerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_defaults_to_current_month() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PeriodService::new(&storage);

        assert_eq!(service.show().unwrap().key(), MonthKey::current());
    }

    #[test]
    fn test_navigation_rolls_years() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PeriodService::new(&storage);

        service.set(MonthKey::new(2024, 0)).unwrap();
        assert_eq!(service.prev().unwrap().key(), MonthKey::new(2023, 11));
        assert_eq!(service.next().unwrap().key(), MonthKey::new(2024, 0));

        service.set(MonthKey::new(2024, 11)).unwrap();
        assert_eq!(service.next().unwrap().key(), MonthKey::new(2025, 0));
    }

    #[test]
    fn test_cursor_is_persisted() {
        let (temp_dir, storage) = create_test_storage();
        PeriodService::new(&storage)
            .set(MonthKey::new(2024, 2))
            .unwrap();

        let reopened =
            Storage::open(PlannerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(reopened.period().unwrap().key(), MonthKey::new(2024, 2));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PeriodService::new(&storage);
        service.set(MonthKey::new(2024, 2)).unwrap();

        assert_eq!(service.resolve(None).unwrap(), MonthKey::new(2024, 2));
        assert_eq!(
            service.resolve(Some(MonthKey::new(2023, 5))).unwrap(),
            MonthKey::new(2023, 5)
        );
    }
}
