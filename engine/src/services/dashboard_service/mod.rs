// engine/src/services/dashboard_service/mod.rs
// The dashboard controller: owns the published station data and answers the renderer's queries.
use crate::config::settings::MonitorSettings;
use crate::data::catalog::{period_options, resolve_period};
use crate::data::station_store::StationStore;
use crate::error::EngineError;
use chrono::NaiveDate;
use shared::models::{MonthEntry, Period, PeriodSelector};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod export;
pub mod helpers;
pub mod load_sources;
pub mod station_cards;
pub mod station_detail;

use load_sources::SourceTexts;
use station_cards::{build_overview, build_station_cards, Overview, StationCard};
use station_detail::{build_station_detail, StationDetail};

pub struct DashboardService {
    settings: MonitorSettings,
    store: Arc<RwLock<StationStore>>,
}

impl DashboardService {
    pub fn new(settings: MonitorSettings) -> Self {
        DashboardService {
            settings,
            store: Arc::new(RwLock::new(StationStore::new())),
        }
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }

    /// Reads both configured sources and replaces the published data.
    pub async fn reload(&self) -> Result<usize, EngineError> {
        let sources = load_sources::read_sources(&self.settings).await;
        self.reload_from(sources).await
    }

    /// Builds a new store from already fetched sources and swaps it in as a whole.
    /// With neither source available the previous data stays published.
    pub async fn reload_from(&self, sources: SourceTexts) -> Result<usize, EngineError> {
        if sources.is_empty() {
            tracing::error!("Neither data source could be read, keeping previous data");
            return Err(EngineError::ProcessingError("no data sources available".to_string()));
        }

        let fresh = StationStore::build(sources.plan_fact.as_deref(), sources.margin.as_deref());
        let station_count = fresh.stations().len();
        tracing::info!(
            stations = station_count,
            records = fresh.record_count(),
            months = fresh.catalog().len(),
            "Station data rebuilt"
        );

        *self.store.write().await = fresh;
        Ok(station_count)
    }

    async fn snapshot(&self) -> StationStore {
        self.store.read().await.clone()
    }

    /// Months with data, newest first, followed by the "all time" entry.
    pub async fn period_options(&self) -> Vec<MonthEntry> {
        period_options(&self.snapshot().await.catalog())
    }

    pub async fn resolve_period(&self, selector: PeriodSelector) -> Period {
        let period = resolve_period(selector, &self.snapshot().await.catalog());
        tracing::debug!(?selector, %period, "Resolved period selection");
        period
    }

    pub async fn station_cards(&self, period: Period, today: NaiveDate) -> Vec<StationCard> {
        let stations = self.snapshot().await.stations();
        build_station_cards(&stations, period, today, &self.settings.solipower_marker)
    }

    pub async fn overview(&self, period: Period, today: NaiveDate) -> Overview {
        build_overview(&self.station_cards(period, today).await, today)
    }

    pub async fn station_detail(
        &self,
        name: &str,
        period: Period,
        today: NaiveDate,
    ) -> Result<StationDetail, EngineError> {
        let stations = self.snapshot().await.stations();
        build_station_detail(&stations, name, period, today, &self.settings.solipower_marker)
            .map_err(|e| {
                tracing::warn!(station = %name, error = %e, "Station detail unavailable");
                e
            })
    }

    pub async fn export_summaries(
        &self,
        period: Period,
        today: NaiveDate,
        path: &Path,
    ) -> Result<usize, EngineError> {
        let cards = self.station_cards(period, today).await;
        let written = export::export_summaries(&cards, path)?;
        tracing::info!(
            path = %path.display(),
            rows = written,
            %period,
            "Exported station summaries"
        );
        Ok(written)
    }
}
