// Ukrainian locale helpers used for labels shown next to the data.
use chrono::NaiveDate;

pub const ALL_TIME_LABEL: &str = "Весь час";

const MONTH_NAMES: [&str; 12] = [
    "січень", "лютий", "березень", "квітень", "травень", "червень",
    "липень", "серпень", "вересень", "жовтень", "листопад", "грудень",
];

pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
}

/// "Жовтень 2026 р." for (2026, 10). Unknown months fall back to the numeric id.
pub fn month_label(year: i32, month: u32) -> String {
    match month_name(month) {
        Some(name) => capitalize(&format!("{} {} р.", name, year)),
        None => format!("{:04}-{:02}", year, month),
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a date as `DD.MM.YYYY`, the same layout the source exports use.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
