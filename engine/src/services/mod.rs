// Services consumed by renderers: loading, period selection, cards, detail view, export.
pub mod dashboard_service;

pub use dashboard_service::DashboardService;
