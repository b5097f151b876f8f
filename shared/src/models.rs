use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One station's figures for one calendar date.
///
/// Absent values stay `None`; a present zero is a real reading and is kept distinct
/// from "not reported" everywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub plan: Option<f64>,
    pub fact: Option<f64>,
    pub margin: Option<f64>,
    pub margin_percent: Option<f64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            plan: None,
            fact: None,
            margin: None,
            margin_percent: None,
        }
    }

    pub fn with_plan_fact(date: NaiveDate, plan: Option<f64>, fact: Option<f64>) -> Self {
        Self { plan, fact, ..Self::new(date) }
    }

    pub fn with_margin(date: NaiveDate, margin: Option<f64>, margin_percent: Option<f64>) -> Self {
        Self { margin, margin_percent, ..Self::new(date) }
    }

    /// True when the margin was reported and is not zero.
    pub fn has_nonzero_margin(&self) -> bool {
        matches!(self.margin, Some(m) if m != 0.0)
    }
}

/// Ordered daily series of a single station. Dates are unique and strictly ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSeries {
    pub name: String,
    pub daily: Vec<DailyRecord>,
}

impl StationSeries {
    pub fn new(name: impl Into<String>, daily: Vec<DailyRecord>) -> Self {
        Self { name: name.into(), daily }
    }

    // Stations carrying the marker publish no plan figures at all.
    pub fn has_plan_data(&self, no_plan_marker: &str) -> bool {
        no_plan_marker.is_empty() || !self.name.contains(no_plan_marker)
    }
}

/// All station series of one load, in station discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stations {
    series: Vec<StationSeries>,
}

impl Stations {
    pub fn new(series: Vec<StationSeries>) -> Self {
        Self { series }
    }

    pub fn get(&self, name: &str) -> Option<&StationSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationSeries> {
        self.series.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// The active filter window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    AllTime,
    Month { year: i32, month: u32 },
}

impl Period {
    pub const ALL_TIME_ID: &'static str = "all";

    pub fn month(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Period::Month { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Period::Month { year: date.year(), month: date.month() }
    }

    /// Parses a selector id produced by [`Period::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        if id == Self::ALL_TIME_ID {
            return Some(Period::AllTime);
        }
        let (year, month) = id.split_once('-')?;
        Period::month(year.parse().ok()?, month.parse().ok()?)
    }

    /// Selector id: `all` or `YYYY-MM`.
    pub fn id(&self) -> String {
        match self {
            Period::AllTime => Self::ALL_TIME_ID.to_string(),
            Period::Month { year, month } => format!("{:04}-{:02}", year, month),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// What the user asked for in the period selector, before it is resolved against the
/// months actually present in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodSelector {
    Current,
    Previous,
    All,
    Month { year: i32, month: u32 },
}

impl From<&str> for PeriodSelector {
    // Unknown selector strings behave like `current`.
    fn from(value: &str) -> Self {
        match value.trim() {
            "current" => PeriodSelector::Current,
            "previous" => PeriodSelector::Previous,
            other => match Period::from_id(other) {
                Some(Period::AllTime) => PeriodSelector::All,
                Some(Period::Month { year, month }) => PeriodSelector::Month { year, month },
                None => PeriodSelector::Current,
            },
        }
    }
}

/// One entry of the period selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEntry {
    pub id: String,
    pub label: String,
}

/// Aggregates of a filtered daily series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StationSummary {
    pub total_margin: f64,
    pub total_plan: f64,
    pub total_fact: f64,
    pub avg_margin_percent: f64,
    pub days_count: usize,
}
