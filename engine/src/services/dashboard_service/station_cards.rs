// Per-station cards and the overview for the selected period.
use super::helpers::last_updated;
use crate::analysis::{filter_by_period, summarize};
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{DailyRecord, Period, StationSummary, Stations};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationCard {
    pub name: String,
    /// False for stations that publish no plan figures; renderers hide the plan value.
    pub has_plan: bool,
    pub summary: StationSummary,
    /// Filtered series behind the card's mini chart.
    pub records: Vec<DailyRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_margin: f64,
    pub total_margin_millions: f64,
    pub best_station: Option<String>,
    pub station_count: usize,
    pub last_updated: Option<NaiveDate>,
}

// Stations with no records in the period get no card.
pub fn build_station_cards(
    stations: &Stations,
    period: Period,
    today: NaiveDate,
    no_plan_marker: &str,
) -> Vec<StationCard> {
    stations
        .iter()
        .filter_map(|series| {
            let records = filter_by_period(&series.daily, period, today);
            if records.is_empty() {
                return None;
            }
            Some(StationCard {
                name: series.name.clone(),
                has_plan: series.has_plan_data(no_plan_marker),
                summary: summarize(&records),
                records,
            })
        })
        .collect()
}

pub fn build_overview(cards: &[StationCard], today: NaiveDate) -> Overview {
    let total_margin: f64 = cards.iter().map(|c| c.summary.total_margin).sum();

    let mut best: Option<&StationCard> = None;
    for card in cards {
        match best {
            Some(b) if card.summary.total_margin <= b.summary.total_margin => {}
            _ => best = Some(card),
        }
    }

    Overview {
        total_margin,
        total_margin_millions: total_margin / 1000.0,
        best_station: best.map(|c| c.name.clone()),
        station_count: cards.len(),
        last_updated: last_updated(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::StationSeries;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn full(day: u32, fact: f64, margin: f64, percent: f64) -> DailyRecord {
        DailyRecord {
            date: date(4, day),
            plan: Some(10.0),
            fact: Some(fact),
            margin: Some(margin),
            margin_percent: Some(percent),
        }
    }

    fn stations() -> Stations {
        Stations::new(vec![
            StationSeries::new("УЗЕ-1", vec![full(1, 9.0, 500.0, 5.0), full(2, 8.0, 700.0, 7.0)]),
            StationSeries::new(
                "ТОВ СОЛІПАУЕР",
                vec![DailyRecord::with_margin(date(4, 1), Some(1200.0), None)],
            ),
            StationSeries::new(
                "УЗЕ-3",
                vec![DailyRecord::with_margin(date(3, 31), Some(-50.0), None)],
            ),
        ])
    }

    #[test]
    fn test_cards_skip_stations_without_period_data() {
        let today = date(10, 1);
        let april = Period::Month { year: 2025, month: 4 };
        let cards = build_station_cards(&stations(), april, today, "СОЛІПАУЕР");
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["УЗЕ-1", "ТОВ СОЛІПАУЕР"]);
        assert!(cards[0].has_plan);
        assert!(!cards[1].has_plan);
        assert_eq!(cards[0].summary.total_plan, 20.0);
        assert_eq!(cards[0].summary.days_count, 2);
        assert_eq!(cards[0].records.len(), 2);
    }

    #[test]
    fn test_overview_totals_and_best_station() {
        let today = date(10, 1);
        let cards = build_station_cards(&stations(), Period::AllTime, today, "СОЛІПАУЕР");
        let overview = build_overview(&cards, today);
        assert_eq!(overview.station_count, 3);
        assert!((overview.total_margin - 2350.0).abs() < 1e-9);
        assert!((overview.total_margin_millions - 2.35).abs() < 1e-9);
        assert_eq!(overview.best_station.as_deref(), Some("УЗЕ-1"));
        assert_eq!(overview.last_updated, Some(date(9, 30)));
    }

    #[test]
    fn test_overview_tie_keeps_first_station() {
        let stations = Stations::new(vec![
            StationSeries::new("А", vec![DailyRecord::with_margin(date(4, 1), Some(5.0), None)]),
            StationSeries::new("Б", vec![DailyRecord::with_margin(date(4, 1), Some(5.0), None)]),
        ]);
        let today = date(10, 1);
        let cards = build_station_cards(&stations, Period::AllTime, today, "");
        assert_eq!(build_overview(&cards, today).best_station.as_deref(), Some("А"));
    }

    #[test]
    fn test_overview_without_cards() {
        let overview = build_overview(&[], date(10, 1));
        assert_eq!(overview.best_station, None);
        assert_eq!(overview.total_margin, 0.0);
        assert_eq!(overview.station_count, 0);
    }
}
