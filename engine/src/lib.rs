// Engine library root: the station data pipeline and the dashboard service built on it.

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use error::EngineError;
