// Holds the station series of the last successful load.
use super::catalog::build_month_catalog;
use super::csv_parser::{DatasetLayout, RawDataset, StationCsvParser};
use super::merge::merge_datasets;
use shared::models::{MonthEntry, Stations};
use std::sync::Arc;

/// One complete, immutable load: the merged series and the months they cover.
///
/// A store is always built in full before it is published, so readers never observe a
/// half-merged model.
#[derive(Debug, Clone, Default)]
pub struct StationStore {
    stations: Arc<Stations>,
    catalog: Arc<Vec<MonthEntry>>,
}

impl StationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and merges both sources. A missing source is treated as an empty dataset.
    pub fn build(plan_fact_csv: Option<&str>, margin_csv: Option<&str>) -> Self {
        let parse = |content: Option<&str>, layout: DatasetLayout| {
            content
                .map(|c| StationCsvParser::parse_dataset(c, layout))
                .unwrap_or_default()
        };
        let plan_fact: RawDataset = parse(plan_fact_csv, DatasetLayout::PlanFact);
        let margins: RawDataset = parse(margin_csv, DatasetLayout::MarginPercent);

        let stations = merge_datasets(&plan_fact, &margins);
        let catalog = build_month_catalog(&stations);
        StationStore {
            stations: Arc::new(stations),
            catalog: Arc::new(catalog),
        }
    }

    pub fn stations(&self) -> Arc<Stations> {
        Arc::clone(&self.stations)
    }

    pub fn catalog(&self) -> Arc<Vec<MonthEntry>> {
        Arc::clone(&self.catalog)
    }

    pub fn record_count(&self) -> usize {
        self.stations.iter().map(|s| s.daily.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN_FACT: &str = "Дата,,А,\n,,CM,FCM\n01.02.2025,,1,2\n01.03.2025,,3,4\n";
    const MARGINS: &str = "Дата,,А,,Б,\n,,M,%,M,%\n01.03.2025,,5,5%,1,1%\n";

    #[test]
    fn test_build_from_both_sources() {
        let store = StationStore::build(Some(PLAN_FACT), Some(MARGINS));
        assert_eq!(store.stations().len(), 2);
        assert_eq!(store.record_count(), 3);
        let ids: Vec<String> = store.catalog().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["2025-03", "2025-02"]);
    }

    #[test]
    fn test_build_with_one_source_missing() {
        let store = StationStore::build(None, Some(MARGINS));
        let stations = store.stations();
        assert_eq!(stations.names().collect::<Vec<_>>(), vec!["А", "Б"]);
        assert!(stations.get("А").unwrap().daily.iter().all(|r| r.plan.is_none()));
    }

    #[test]
    fn test_empty_store() {
        assert!(StationStore::new().is_empty());
        assert!(StationStore::build(None, None).is_empty());
        assert!(StationStore::build(Some("only,one,line"), None).catalog().is_empty());
    }
}
