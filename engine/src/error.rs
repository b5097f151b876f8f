use thiserror::Error;

// Failures of the layers around the pipeline: configuration, file access, export.
// Parsing, merging, filtering and aggregation never fail.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration format error: {source}")]
    ConfigFormatError {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV writing error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("Station data error: {0}")]
    StationDataError(String),

    #[error("Internal processing error: {0}")]
    ProcessingError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::StationDataError("station 'X' not found".to_string());
        assert_eq!(err.to_string(), "Station data error: station 'X' not found");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: EngineError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
