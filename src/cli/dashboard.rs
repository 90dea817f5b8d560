//! Dashboard command
//!
//! Summary cards, recent activity and budgets for the current calendar month.

use chrono::Local;

use crate::config::settings::Settings;
use crate::display::dashboard::format_dashboard;
use crate::error::PlannerResult;
use crate::models::MonthKey;
use crate::storage::Storage;

/// Print the dashboard
pub fn handle_dashboard(storage: &Storage, settings: &Settings) -> PlannerResult<()> {
    let month = MonthKey::from_date(Local::now().date_naive());

    let output = storage.with_state(|state| {
        let snapshot = state.snapshot();
        format_dashboard(
            &snapshot.monthly_summary(month),
            &snapshot.recent_transactions(settings.recent_limit),
            &snapshot.category_spend(month),
            snapshot.categories,
            &settings.currency_symbol,
            &settings.date_format,
        )
    })?;

    print!("{}", output);
    Ok(())
}
