// Detail view of one station for the selected period.
use crate::analysis::{detail_stats, filter_by_period, DetailStats};
use crate::error::EngineError;
use chrono::NaiveDate;
use shared::models::{DailyRecord, Period, Stations};

#[derive(Debug, Clone, PartialEq)]
pub struct StationDetail {
    pub name: String,
    pub has_plan: bool,
    pub stats: DetailStats,
    pub records: Vec<DailyRecord>,
}

pub fn build_station_detail(
    stations: &Stations,
    name: &str,
    period: Period,
    today: NaiveDate,
    no_plan_marker: &str,
) -> Result<StationDetail, EngineError> {
    let series = stations
        .get(name)
        .ok_or_else(|| EngineError::StationDataError(format!("station '{}' not found", name)))?;

    let records = filter_by_period(&series.daily, period, today);
    Ok(StationDetail {
        name: series.name.clone(),
        has_plan: series.has_plan_data(no_plan_marker),
        stats: detail_stats(&records),
        records,
    })
}
