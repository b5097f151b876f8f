// Data model and locale helpers shared by the engine and any renderer built on top of it.
pub mod models;
pub mod utils;
