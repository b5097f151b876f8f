// Parser for the per-station daily CSV exports (plan/fact and margin/percent layouts).
use chrono::NaiveDate;
use shared::models::DailyRecord;
use std::collections::HashMap;

// Number, percent and date tokens as written by the Ukrainian spreadsheet export.
pub mod ukrainian_format {
    use chrono::NaiveDate;

    const DIV_ERROR_MARKER: &str = "#DIV";

    // Parses "1 234,5" into 1234.5. Blank cells and division-error cells are absent.
    pub fn parse_number(token: &str) -> Option<f64> {
        parse_cleaned(token, false)
    }

    // Parses "12,3%" into 12.3 (the raw percentage, not a fraction).
    pub fn parse_percent(token: &str) -> Option<f64> {
        parse_cleaned(token, true)
    }

    fn parse_cleaned(token: &str, strip_percent: bool) -> Option<f64> {
        if token.trim().is_empty() || token.contains(DIV_ERROR_MARKER) {
            return None;
        }

        let mut cleaned: String = token
            .chars()
            .filter(|c| *c != '"' && !c.is_whitespace())
            .collect();
        if strip_percent {
            cleaned = cleaned.replacen('%', "", 1);
        }
        let normalized = cleaned.replacen(',', ".", 1);

        let prefix = numeric_prefix(&normalized);
        prefix.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    // Longest leading `[+-]digits[.digits][e[+-]digits]`; trailing text such as units is ignored.
    // Empty when the token does not start with a number.
    fn numeric_prefix(s: &str) -> &str {
        let bytes = s.as_bytes();
        let digits_from = |mut i: usize| {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            i
        };

        let mut end = 0;
        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end = 1;
        }
        let int_end = digits_from(end);
        let mut mantissa_digits = int_end - end;
        end = int_end;

        if bytes.get(end) == Some(&b'.') {
            let frac_end = digits_from(end + 1);
            mantissa_digits += frac_end - (end + 1);
            end = frac_end;
        }
        if mantissa_digits == 0 {
            return "";
        }

        if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
            let mut exp_start = end + 1;
            if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
                exp_start += 1;
            }
            let exp_end = digits_from(exp_start);
            if exp_end > exp_start {
                end = exp_end;
            }
        }

        &s[..end]
    }

    // Parses "DD.MM.YYYY". Wrong part count, non-numeric parts or impossible dates are None.
    pub fn parse_date(token: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = token.trim().split('.').collect();
        if parts.len() != 3 {
            return None;
        }
        let day = parts[0].trim().parse::<u32>().ok()?;
        let month = parts[1].trim().parse::<u32>().ok()?;
        let year = parts[2].trim().parse::<i32>().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

}

/// Which of the two known export shapes a document has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetLayout {
    /// Column pairs are plan (CM) and fact (FCM).
    PlanFact,
    /// Column pairs are margin and margin percent.
    MarginPercent,
}

/// Result of parsing one CSV document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDataset {
    /// Station names in header order.
    pub stations: Vec<String>,
    /// Partial records per station, in row order.
    pub data: HashMap<String, Vec<DailyRecord>>,
}

impl RawDataset {
    pub fn records(&self, station: &str) -> &[DailyRecord] {
        self.data.get(station).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn record_count(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

// Title row, sub-header row, at least one data row.
const MIN_LINES: usize = 3;
const FIRST_STATION_COLUMN: usize = 2;

// Splits one line on commas; a double quote toggles quoted mode, inside which commas are literal.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

pub struct StationCsvParser;

impl StationCsvParser {
    // Row layout: date, <label>, station1_a, station1_b, station2_a, station2_b, ...
    // Malformed rows are dropped silently; the result may be empty but never fails.
    pub fn parse_dataset(content: &str, layout: DatasetLayout) -> RawDataset {
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() < MIN_LINES {
            return RawDataset::default();
        }

        let stations = Self::station_names(lines[0]);
        let mut data: HashMap<String, Vec<DailyRecord>> = stations
            .iter()
            .map(|s| (s.clone(), Vec::new()))
            .collect();

        // lines[1] is the sub-header
        for line in &lines[2..] {
            let row = parse_line(line);
            if row.len() < 3 {
                continue;
            }
            let Some(date) = ukrainian_format::parse_date(&row[0]) else {
                continue;
            };

            for (idx, station) in stations.iter().enumerate() {
                let base = FIRST_STATION_COLUMN + idx * 2;
                if let Some(record) = Self::record_for(layout, date, &row, base) {
                    data.entry(station.clone()).or_default().push(record);
                }
            }
        }

        RawDataset { stations, data }
    }

    // The title row is split on plain commas, not quote-aware.
    fn station_names(header: &str) -> Vec<String> {
        header
            .split(',')
            .skip(FIRST_STATION_COLUMN)
            .step_by(2)
            .map(|cell| cell.replace('"', "").trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }

    fn record_for(
        layout: DatasetLayout,
        date: NaiveDate,
        row: &[String],
        base: usize,
    ) -> Option<DailyRecord> {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
        match layout {
            DatasetLayout::PlanFact => {
                let plan = ukrainian_format::parse_number(cell(base));
                let fact = ukrainian_format::parse_number(cell(base + 1));
                (plan.is_some() || fact.is_some())
                    .then(|| DailyRecord::with_plan_fact(date, plan, fact))
            }
            DatasetLayout::MarginPercent => {
                let margin = ukrainian_format::parse_number(cell(base))?;
                let percent = ukrainian_format::parse_percent(cell(base + 1));
                Some(DailyRecord::with_margin(date, Some(margin), percent))
            }
        }
    }
}
