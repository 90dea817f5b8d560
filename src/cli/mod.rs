//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod dashboard;
pub mod goal;
pub mod period;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use dashboard::handle_dashboard;
pub use goal::{handle_goal_command, GoalCommands};
pub use period::{handle_period_command, PeriodCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Money, MonthKey, TransactionType};

/// Parse an amount such as "40", "40.5" or "$40.50"
pub(crate) fn parse_amount(s: &str) -> PlannerResult<Money> {
    Money::parse(s).map_err(|e| {
        PlannerError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '40' or '40.50'. Error: {}",
            s, e
        ))
    })
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(s: &str) -> PlannerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        PlannerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse a `YYYY-MM` month
pub(crate) fn parse_month(s: &str) -> PlannerResult<MonthKey> {
    MonthKey::parse(s).map_err(|e| {
        PlannerError::Validation(format!("{}. Use YYYY-MM (e.g., 2024-03)", e))
    })
}

pub(crate) fn parse_kind(s: &str) -> PlannerResult<TransactionType> {
    TransactionType::parse(s).ok_or_else(|| {
        PlannerError::Validation(format!(
            "Invalid transaction type: '{}'. Use income or expense",
            s
        ))
    })
}

/// Create `path` and hand a buffered writer to `write_report`
pub(crate) fn export_to_file(
    path: &Path,
    write_report: impl FnOnce(&mut BufWriter<File>) -> PlannerResult<()>,
) -> PlannerResult<()> {
    let file = File::create(path).map_err(|e| {
        PlannerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_amount("$40.50").unwrap(), Money::from_cents(4050));
        assert!(parse_amount("forty").unwrap_err().is_validation());

        assert_eq!(
            parse_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(parse_date("15/03/2024").unwrap_err().is_validation());

        assert_eq!(parse_month("2024-03").unwrap(), MonthKey::new(2024, 2));
        assert!(parse_month("2024-13").unwrap_err().is_validation());

        assert_eq!(parse_kind("Expense").unwrap(), TransactionType::Expense);
        assert!(parse_kind("transfer").unwrap_err().is_validation());
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        export_to_file(&path, |w| {
            w.write_all(b"a,b\n")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n");

        let missing = temp_dir.path().join("nope").join("out.csv");
        let err = export_to_file(&missing, |_| Ok(())).unwrap_err();
        assert!(matches!(err, PlannerError::Export(_)));
    }
}
