// Loading-side pipeline: CSV parsing, merging, month catalog and the published state.
pub mod catalog;
pub mod csv_parser;
pub mod merge;
pub mod station_store;
