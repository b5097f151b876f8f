// Helper functions shared by the dashboard handlers
use chrono::{Local, NaiveDate};

// Periods are evaluated against the local calendar date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

// Exports are produced overnight, so the newest data is from the day before.
pub fn last_updated(today: NaiveDate) -> Option<NaiveDate> {
    today.pred_opt()
}

/// "+12.5 тис. грн" / "-3.0 тис. грн"
pub fn format_margin(total_margin: f64) -> String {
    let sign = if total_margin >= 0.0 { "+" } else { "" };
    format!("{}{:.1} тис. грн", sign, total_margin)
}
