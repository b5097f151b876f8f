// Restricts a daily series to the selected period.
use chrono::NaiveDate;
use shared::models::{DailyRecord, Period};

/// Lower bound used for the "all time" period.
pub fn all_time_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Inclusive date range covered by `period`. `None` only for a month outside the calendar.
pub fn period_bounds(period: Period, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    match period {
        Period::AllTime => Some((all_time_start(), today)),
        Period::Month { year, month } => {
            let start = NaiveDate::from_ymd_opt(year, month, 1)?;
            let (next_year, next_month) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
            let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
            Some((start, end))
        }
    }
}

/// Records of `records` that fall inside `period`.
///
/// When `period` is the month containing `today`, trailing days after the latest non-zero
/// margin are dropped as not yet reported. A zero margin before that day is kept. Without any
/// non-zero margin in the month the range filter alone applies.
pub fn filter_by_period(
    records: &[DailyRecord],
    period: Period,
    today: NaiveDate,
) -> Vec<DailyRecord> {
    let Some((start, end)) = period_bounds(period, today) else {
        return Vec::new();
    };

    let mut filtered: Vec<DailyRecord> = records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .cloned()
        .collect();

    if period == Period::containing(today) {
        let last_reported = filtered
            .iter()
            .filter(|r| r.has_nonzero_margin())
            .map(|r| r.date)
            .max();
        if let Some(last) = last_reported {
            filtered.retain(|r| r.date <= last);
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn margins(year: i32, month: u32, values: &[Option<f64>]) -> Vec<DailyRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, m)| DailyRecord::with_margin(date(year, month, i as u32 + 1), *m, None))
            .collect()
    }

    fn days(records: &[DailyRecord]) -> Vec<u32> {
        use chrono::Datelike;
        records.iter().map(|r| r.date.day()).collect()
    }

    #[test]
    fn test_month_bounds() {
        let today = date(2026, 10, 15);
        assert_eq!(
            period_bounds(Period::Month { year: 2024, month: 2 }, today),
            Some((date(2024, 2, 1), date(2024, 2, 29)))
        );
        assert_eq!(
            period_bounds(Period::Month { year: 2025, month: 12 }, today),
            Some((date(2025, 12, 1), date(2025, 12, 31)))
        );
        assert_eq!(period_bounds(Period::AllTime, today), Some((date(2020, 1, 1), today)));
        assert_eq!(period_bounds(Period::Month { year: 2025, month: 13 }, today), None);
    }

    #[test]
    fn test_past_month_keeps_whole_month() {
        let mut records = margins(2025, 3, &[Some(5.0), None, Some(0.0)]);
        records.push(DailyRecord::with_margin(date(2025, 2, 28), Some(1.0), None));
        records.push(DailyRecord::with_margin(date(2025, 4, 1), Some(1.0), None));

        let march = Period::Month { year: 2025, month: 3 };
        let filtered = filter_by_period(&records, march, date(2026, 10, 15));
        assert_eq!(days(&filtered), vec![1, 2, 3]);
    }

    #[test]
    fn test_all_time_range() {
        let records = vec![
            DailyRecord::with_margin(date(2019, 12, 31), Some(1.0), None),
            DailyRecord::with_margin(date(2020, 1, 1), Some(1.0), None),
            DailyRecord::with_margin(date(2026, 10, 15), Some(1.0), None),
            DailyRecord::with_margin(date(2026, 10, 16), Some(1.0), None),
        ];
        let filtered = filter_by_period(&records, Period::AllTime, date(2026, 10, 15));
        let dates: Vec<NaiveDate> = filtered.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2020, 1, 1), date(2026, 10, 15)]);
    }

    #[test]
    fn test_current_month_keeps_days_up_to_present_nonzero_margin() {
        let records = margins(2026, 10, &[Some(5.0), Some(0.0), None, Some(-3.0)]);
        let october = Period::Month { year: 2026, month: 10 };
        let filtered = filter_by_period(&records, october, date(2026, 10, 4));
        assert_eq!(days(&filtered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_current_month_trims_trailing_unreported_days() {
        let records = margins(2026, 10, &[Some(5.0), Some(0.0), None, None]);
        let october = Period::Month { year: 2026, month: 10 };
        let filtered = filter_by_period(&records, october, date(2026, 10, 4));
        assert_eq!(days(&filtered), vec![1]);
    }

    #[test]
    fn test_current_month_without_margins_is_untrimmed() {
        let records: Vec<DailyRecord> = (1..=3)
            .map(|d| DailyRecord::with_plan_fact(date(2026, 10, d), Some(1.0), None))
            .collect();
        let october = Period::Month { year: 2026, month: 10 };
        let filtered = filter_by_period(&records, october, date(2026, 10, 3));
        assert_eq!(days(&filtered), vec![1, 2, 3]);
    }

    #[test]
    fn test_trim_only_applies_to_current_month() {
        let records = margins(2026, 9, &[Some(5.0), None, Some(0.0)]);
        let september = Period::Month { year: 2026, month: 9 };
        let filtered = filter_by_period(&records, september, date(2026, 10, 4));
        assert_eq!(days(&filtered), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_period(&[], Period::AllTime, date(2026, 10, 4)).is_empty());
    }
}
