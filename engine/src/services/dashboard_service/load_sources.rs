// Reads both CSV sources concurrently.
use crate::config::settings::MonitorSettings;
use std::path::Path;

/// Raw text of both sources; `None` for a source that could not be read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTexts {
    pub plan_fact: Option<String>,
    pub margin: Option<String>,
}

impl SourceTexts {
    pub fn is_empty(&self) -> bool {
        self.plan_fact.is_none() && self.margin.is_none()
    }
}

// Both reads complete before anything is parsed.
pub async fn read_sources(settings: &MonitorSettings) -> SourceTexts {
    let (plan_fact, margin) = tokio::join!(
        read_source(&settings.plan_fact_path),
        read_source(&settings.margin_path)
    );
    SourceTexts { plan_fact, margin }
}

async fn read_source(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "Read data source");
            Some(content)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Data source unavailable, treating it as empty"
            );
            None
        }
    }
}
