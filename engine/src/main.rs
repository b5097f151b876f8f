// Station monitor entry point: loads both exports and prints the dashboard for one period.
use anyhow::Context;
use clap::Parser;
use engine::config::settings::MonitorSettings;
use engine::services::dashboard_service::helpers::{format_margin, local_today};
use engine::services::DashboardService;
use shared::models::PeriodSelector;
use shared::utils::format_date;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "station-monitor", about = "Per-station plan, fact and margin summaries")]
struct Args {
    /// Settings file (JSON). The embedded defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Period to show: current, previous, all or YYYY-MM
    #[arg(long, default_value = "current")]
    period: String,

    /// Show the detail view of a single station
    #[arg(long)]
    station: Option<String>,

    /// Write the station summaries to this CSV file
    #[arg(long)]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => MonitorSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => MonitorSettings::load_default().context("embedded default settings are invalid")?,
    };

    tracing_subscriber::fmt()
        .with_max_level(settings.max_log_level()?)
        .init();
    info!("Starting station monitor...");

    let service = DashboardService::new(settings);
    service.reload().await.context("failed to load station data")?;
    let export_path = args
        .export
        .clone()
        .or_else(|| service.settings().export_path.clone());

    let today = local_today();
    let period = service.resolve_period(PeriodSelector::from(args.period.as_str())).await;
    let options = service.period_options().await;
    let label = options
        .iter()
        .find(|o| o.id == period.id())
        .map(|o| o.label.as_str())
        .unwrap_or("-");
    println!("Період: {} ({})", label, period);

    match &args.station {
        Some(name) => {
            let detail = service.station_detail(name, period, today).await?;
            let stats = &detail.stats;
            println!("{}", detail.name);
            println!("  Загальний прибуток: {:.1} тис. грн", stats.summary.total_margin);
            if let (Some(max), Some(min)) = (stats.max_margin, stats.min_margin) {
                println!("  Макс. прибуток за день: {:.1}", max);
                println!("  Мін. прибуток за день: {:.1}", min);
            }
            println!("  Прибуткових днів: {} з {}", stats.positive_days, stats.summary.days_count);
            for record in &detail.records {
                println!(
                    "  {}  план {:>8}  факт {:>8}  прибуток {:>8}",
                    format_date(record.date),
                    display_value(record.plan.filter(|_| detail.has_plan)),
                    display_value(record.fact),
                    display_value(record.margin)
                );
            }
        }
        None => {
            let cards = service.station_cards(period, today).await;
            if cards.is_empty() {
                println!("Дані не завантажені");
            }
            for card in &cards {
                println!("{}  {}", card.name, format_margin(card.summary.total_margin));
                if card.has_plan {
                    println!("  План (CM): {:.0}", card.summary.total_plan);
                }
                println!("  Факт (FCM): {:.0}", card.summary.total_fact);
                println!(
                    "  Прибуток: {:.1}  (сер. {:.2}%)",
                    card.summary.total_margin, card.summary.avg_margin_percent
                );
            }

            let overview = service.overview(period, today).await;
            println!("Загальний прибуток, млн грн: {:.4}", overview.total_margin_millions);
            println!("Найкраща станція: {}", overview.best_station.as_deref().unwrap_or("-"));
            if let Some(updated) = overview.last_updated {
                println!("Оновлено: {}", format_date(updated));
            }
        }
    }

    if let Some(path) = export_path {
        service
            .export_summaries(period, today, &path)
            .await
            .with_context(|| format!("failed to export summaries to {}", path.display()))?;
    }

    Ok(())
}

fn display_value(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string())
}
