// Totals and averages over a filtered daily series.
use shared::models::{DailyRecord, StationSummary};

pub fn summarize(records: &[DailyRecord]) -> StationSummary {
    StationSummary {
        total_margin: records.iter().filter_map(|r| r.margin).sum(),
        total_plan: records.iter().filter_map(|r| r.plan).sum(),
        total_fact: records.iter().filter_map(|r| r.fact).sum(),
        avg_margin_percent: average_margin_percent(records),
        days_count: records.len(),
    }
}

/// Sum of present margin percents divided by the number of days with a present margin
/// (not the number of days with a present percent). Zero when no margin is present.
pub fn average_margin_percent(records: &[DailyRecord]) -> f64 {
    let margin_days = records.iter().filter(|r| r.margin.is_some()).count();
    if margin_days == 0 {
        return 0.0;
    }
    let percent_sum: f64 = records.iter().filter_map(|r| r.margin_percent).sum();
    percent_sum / margin_days as f64
}

/// Figures for the station detail view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailStats {
    pub summary: StationSummary,
    pub max_margin: Option<f64>,
    pub min_margin: Option<f64>,
    pub positive_days: usize,
}

pub fn detail_stats(records: &[DailyRecord]) -> DetailStats {
    let present = || records.iter().filter_map(|r| r.margin);
    DetailStats {
        summary: summarize(records),
        max_margin: present().reduce(f64::max),
        min_margin: present().reduce(f64::min),
        positive_days: present().filter(|m| *m > 0.0).count(),
    }
}
