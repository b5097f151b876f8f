// Monitor settings, loaded from a JSON file or the embedded default.
use crate::error::EngineError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

const DEFAULT_PLAN_FACT_PATH: &str = "data/2. Фінансовий результат УЗЕ поденно - CM_FCM.csv";
const DEFAULT_MARGIN_PATH: &str = "data/2. Фінансовий результат УЗЕ поденно - Прибуток день.csv";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MonitorSettings {
    /// CSV with plan (CM) / fact (FCM) column pairs.
    pub plan_fact_path: PathBuf,
    /// CSV with margin / margin percent column pairs.
    pub margin_path: PathBuf,
    /// Stations whose name contains this text publish no plan figures.
    pub solipower_marker: String,
    pub log_level: String,
    pub export_path: Option<PathBuf>,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        MonitorSettings {
            plan_fact_path: PathBuf::from(DEFAULT_PLAN_FACT_PATH),
            margin_path: PathBuf::from(DEFAULT_MARGIN_PATH),
            solipower_marker: "СОЛІПАУЕР".to_string(),
            log_level: "info".to_string(),
            export_path: None,
        }
    }
}

impl MonitorSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn load_default() -> Result<Self, EngineError> {
        Self::from_json(include_str!("../../assets/config/default.json"))
    }

    pub fn from_json(contents: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn max_log_level(&self) -> Result<Level, EngineError> {
        self.log_level.parse::<Level>().map_err(|e| {
            EngineError::ConfigError(format!("invalid log_level '{}': {}", self.log_level, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_default_matches_default_impl() {
        assert_eq!(MonitorSettings::load_default().unwrap(), MonitorSettings::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "margin_path": "m.csv", "log_level": "debug" }"#;
        let settings = MonitorSettings::from_json(json).unwrap();
        assert_eq!(settings.margin_path, PathBuf::from("m.csv"));
        assert_eq!(settings.solipower_marker, "СОЛІПАУЕР");
        assert_eq!(settings.max_log_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "plan_fact_path": "a.csv", "export_path": "out.csv" }}"#).unwrap();
        let settings = MonitorSettings::load(file.path()).unwrap();
        assert_eq!(settings.plan_fact_path, PathBuf::from("a.csv"));
        assert_eq!(settings.export_path, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            MonitorSettings::from_json("{ not json"),
            Err(EngineError::ConfigFormatError { .. })
        ));
        assert!(matches!(
            MonitorSettings::load("does/not/exist.json"),
            Err(EngineError::IoError { .. })
        ));

        let settings = MonitorSettings {
            log_level: "loud".to_string(),
            ..MonitorSettings::default()
        };
        assert!(matches!(settings.max_log_level(), Err(EngineError::ConfigError(_))));
    }
}
