// Writes card summaries to a CSV file.
use super::station_cards::StationCard;
use crate::error::EngineError;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    station: &'a str,
    days: usize,
    total_plan: Option<f64>,
    total_fact: f64,
    total_margin: f64,
    avg_margin_percent: f64,
}

impl<'a> From<&'a StationCard> for SummaryRow<'a> {
    fn from(card: &'a StationCard) -> Self {
        SummaryRow {
            station: &card.name,
            days: card.summary.days_count,
            // Left blank for stations without plan figures.
            total_plan: card.has_plan.then_some(card.summary.total_plan),
            total_fact: card.summary.total_fact,
            total_margin: card.summary.total_margin,
            avg_margin_percent: card.summary.avg_margin_percent,
        }
    }
}

pub fn export_summaries(cards: &[StationCard], path: &Path) -> Result<usize, EngineError> {
    let mut writer = csv::Writer::from_path(path)?;
    for card in cards {
        writer.serialize(SummaryRow::from(card))?;
    }
    writer.flush()?;
    Ok(cards.len())
}
