//! Text, CSV and JSON views of a simulation outcome.

use crate::core::simulator::SimulationOutcome;
use crate::domain::model::{Chart, ExtractedRecord, Recommendation};
use crate::utils::error::Result;
use std::fmt::Write as _;

pub const NO_DATA_MESSAGE: &str = "No numeric data found to chart.";

pub fn render_text(outcome: &SimulationOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", outcome.scenario);
    let _ = writeln!(out);

    match &outcome.result {
        Ok(recommendation) => {
            let _ = writeln!(out, "Recommendation");
            let _ = writeln!(out, "{}", recommendation.text.trim_end());
            render_data(&mut out, outcome, recommendation);
        }
        // Failures are shown in place of the recommendation.
        Err(e) => {
            let _ = writeln!(out, "{}", e);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Generated {}", outcome.generated_at.format("%B %Y"));
    out
}

fn render_data(out: &mut String, outcome: &SimulationOutcome, recommendation: &Recommendation) {
    if outcome.scenario.chart().is_none() {
        return;
    }

    if let Some(chart) = &recommendation.chart {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({:?})", chart.title, chart.kind);
        out.push_str(&render_chart_table(chart));
    }

    if let Some(records) = &recommendation.table {
        let _ = writeln!(out);
        out.push_str(&render_records_table(records));
    }

    if !recommendation.has_data() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", NO_DATA_MESSAGE);
    }
}

pub fn render_chart_table(chart: &Chart) -> String {
    let rows: Vec<Vec<String>> = chart
        .series
        .iter()
        .map(|(label, value)| vec![label.to_string(), format_number(value)])
        .collect();
    render_table(&[chart.label_column.as_str(), chart.value_column.as_str()], &rows)
}

pub fn render_records_table(records: &[ExtractedRecord]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.label.clone(),
                format_number(r.value),
                r.weeks.map(format_number).unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    render_table(&["Platform", "Investment", "Weeks"], &rows)
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// CSV of the extracted data. Scenarios with a duration table export the
/// full record list; others export the chart series. `None` when there is
/// nothing to export.
pub fn to_csv(recommendation: &Recommendation) -> Result<Option<String>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if let Some(records) = &recommendation.table {
        writer.write_record(["label", "value", "weeks"])?;
        for r in records {
            let value = r.value.to_string();
            let weeks = r.weeks.map(|w| w.to_string()).unwrap_or_default();
            writer.write_record([r.label.as_str(), value.as_str(), weeks.as_str()])?;
        }
    } else if let Some(chart) = &recommendation.chart {
        writer.write_record([chart.label_column.as_str(), chart.value_column.as_str()])?;
        for (label, value) in chart.series.iter() {
            let value = value.to_string();
            writer.write_record([label, value.as_str()])?;
        }
    } else {
        return Ok(None);
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

pub fn to_json(outcome: &SimulationOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::simulator::build_recommendation;
    use crate::domain::model::Scenario;
    use crate::utils::error::GenerationError;
    use chrono::Utc;

    fn outcome(
        scenario: Scenario,
        result: std::result::Result<Recommendation, GenerationError>,
    ) -> SimulationOutcome {
        SimulationOutcome {
            scenario,
            prompt: "prompt".to_string(),
            result,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_chart_table_aligns_columns() {
        let rec = build_recommendation(
            Scenario::ContentCampaign,
            "Video: 5000\nBlog posts: 1200.5".to_string(),
        );
        let table = render_chart_table(rec.chart.as_ref().unwrap());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Format     | Interactions");
        assert_eq!(lines[1], "---------- | ------------");
        assert_eq!(lines[2], "Video      | 5000");
        assert_eq!(lines[3], "Blog posts | 1200.5");
    }

    #[test]
    fn test_render_text_reports_no_data() {
        let rec = build_recommendation(Scenario::Pricing, "Keep prices stable.".to_string());
        let text = render_text(&outcome(Scenario::Pricing, Ok(rec)));
        assert!(text.contains("Keep prices stable."));
        assert!(text.contains(NO_DATA_MESSAGE));
    }

    #[test]
    fn test_render_text_shows_error_in_place() {
        let err = GenerationError::transport("connection refused");
        let text = render_text(&outcome(Scenario::Seo, Err(err)));
        assert!(text.contains("Error connecting to the API: connection refused"));
        assert!(!text.contains("Recommendation"));
    }

    #[test]
    fn test_csv_uses_records_for_duration_table() {
        let rec = build_recommendation(
            Scenario::DigitalInvestment,
            "Google Ads: $500 for 4 weeks\nEmail Marketing: 150".to_string(),
        );
        let csv = to_csv(&rec).unwrap().unwrap();
        assert_eq!(csv, "label,value,weeks\nGoogle Ads,500,4\nEmail Marketing,150,\n");
    }

    #[test]
    fn test_csv_none_without_data() {
        let rec = build_recommendation(Scenario::BrandCrisis, "Stay calm.".to_string());
        assert_eq!(to_csv(&rec).unwrap(), None);
    }

    #[test]
    fn test_json_marks_status() {
        let err = GenerationError::InvalidResponse;
        let json = to_json(&outcome(Scenario::Seo, Err(err))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["status"], "error");
        assert_eq!(value["result"]["message"], "Error: invalid API response.");
        assert_eq!(value["scenario"], "seo");
    }
}
