// Period filtering and aggregation over a station's daily series
pub mod period_filter;
pub mod summary;

pub use period_filter::{filter_by_period, period_bounds};
pub use summary::{average_margin_percent, detail_stats, summarize, DetailStats};
