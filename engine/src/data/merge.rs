// Combines the plan/fact and margin/percent datasets into one daily series per station.
use super::csv_parser::RawDataset;
use chrono::NaiveDate;
use shared::models::{DailyRecord, StationSeries, Stations};
use std::collections::BTreeMap;

/// Builds the per-station series from the two parsed sources.
///
/// Stations are the union of both sources, plan/fact stations first, each in header order.
/// For a date present in both sources the margin fields are copied onto the plan/fact record;
/// a margin-only date becomes a record with plan and fact absent. Either input may be empty.
pub fn merge_datasets(plan_fact: &RawDataset, margin_percent: &RawDataset) -> Stations {
    let mut names: Vec<&str> = Vec::new();
    for name in plan_fact.stations.iter().chain(margin_percent.stations.iter()) {
        if !names.contains(&name.as_str()) {
            names.push(name.as_str());
        }
    }

    let series = names
        .into_iter()
        .map(|name| {
            StationSeries::new(
                name,
                merge_station(plan_fact.records(name), margin_percent.records(name)),
            )
        })
        .collect();

    Stations::new(series)
}

fn merge_station(plan_fact: &[DailyRecord], margin_percent: &[DailyRecord]) -> Vec<DailyRecord> {
    // Keyed by date, so iteration yields the series already in ascending order.
    let mut by_date: BTreeMap<NaiveDate, DailyRecord> = BTreeMap::new();

    for record in plan_fact {
        by_date.insert(record.date, record.clone());
    }

    for record in margin_percent {
        by_date
            .entry(record.date)
            .and_modify(|existing| {
                existing.margin = record.margin;
                existing.margin_percent = record.margin_percent;
            })
            .or_insert_with(|| {
                DailyRecord::with_margin(record.date, record.margin, record.margin_percent)
            });
    }

    by_date.into_values().collect()
}
