// Distinct calendar months present in the loaded data, for the period selector.
use chrono::Datelike;
use shared::models::{MonthEntry, Period, PeriodSelector, Stations};
use shared::utils::{month_label, ALL_TIME_LABEL};
use std::collections::BTreeSet;

/// Months with at least one record in any station, newest first.
pub fn build_month_catalog(stations: &Stations) -> Vec<MonthEntry> {
    let months: BTreeSet<(i32, u32)> = stations
        .iter()
        .flat_map(|s| s.daily.iter())
        .map(|r| (r.date.year(), r.date.month()))
        .collect();

    months
        .into_iter()
        .rev()
        .map(|(year, month)| MonthEntry {
            id: Period::Month { year, month }.id(),
            label: month_label(year, month),
        })
        .collect()
}

/// The catalog followed by the "all time" entry.
pub fn period_options(catalog: &[MonthEntry]) -> Vec<MonthEntry> {
    let mut options = catalog.to_vec();
    options.push(MonthEntry {
        id: Period::ALL_TIME_ID.to_string(),
        label: ALL_TIME_LABEL.to_string(),
    });
    options
}

/// Maps a selector onto a period that actually exists in the catalog.
pub fn resolve_period(selector: PeriodSelector, catalog: &[MonthEntry]) -> Period {
    let months: Vec<Period> = catalog.iter().filter_map(|e| Period::from_id(&e.id)).collect();
    let Some(&latest) = months.first() else {
        return Period::AllTime;
    };

    match selector {
        PeriodSelector::Current => latest,
        PeriodSelector::Previous => months.get(1).copied().unwrap_or(latest),
        PeriodSelector::All => Period::AllTime,
        PeriodSelector::Month { year, month } => {
            let wanted = Period::Month { year, month };
            if months.contains(&wanted) {
                wanted
            } else {
                latest
            }
        }
    }
}
