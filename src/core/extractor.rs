//! Best-effort recovery of `label: number` pairs from generated prose.
//!
//! Nothing here fails. A line either yields a record or it does not, and
//! a text with no matching line yields `None` rather than an empty
//! container.

use crate::domain::model::{ChartSeries, ExtractedRecord};
use regex::Regex;
use once_cell::sync::Lazy;

// Not anchored to line start, so the label may end up being the tail
// of a longer clause. Numbers are ASCII digits only.
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?P<label>\w[\w\x20\t-]*)
        :\s*
        [$€£]?
        (?P<value>[0-9]+\.?[0-9]*)
        (?:
            \s+(?i:for|por)\s+
            (?P<weeks>[0-9]+\.?[0-9]*)
            \s*(?i:weeks?|semanas?|days?|d[ií]as?|months?|mes(?:es)?)\b
        )?
        ",
    )
    .expect("line pattern is a valid regex")
});

/// Try to read one record out of a single line.
pub fn parse_line(line: &str) -> Option<ExtractedRecord> {
    let caps = LINE_PATTERN.captures(line)?;

    let label = caps.name("label")?.as_str().trim();
    let value = caps.name("value")?.as_str().parse::<f64>().ok()?;
    let weeks = caps
        .name("weeks")
        .and_then(|m| m.as_str().parse::<f64>().ok());

    Some(ExtractedRecord {
        label: label.to_string(),
        value,
        weeks,
    })
}

/// Every matching line as its own record, duplicates included, in text order.
pub fn extract_records(text: &str) -> Option<Vec<ExtractedRecord>> {
    let records: Vec<ExtractedRecord> = text.lines().filter_map(parse_line).collect();
    tracing::debug!(matched = records.len(), "extracted records from response");

    if records.is_empty() {
        None
    } else {
        Some(records)
    }
}

/// Label to value mapping for two-column charts. A repeated label keeps
/// its first position but takes the last value seen.
pub fn extract_chart_series(text: &str) -> Option<ChartSeries> {
    let mut series = ChartSeries::new();
    for record in text.lines().filter_map(parse_line) {
        series.insert(record.label, record.value);
    }
    tracing::debug!(points = series.len(), "extracted chart series from response");

    if series.is_empty() {
        None
    } else {
        Some(series)
    }
}
