use marketing_sim::{extract_chart_series, extract_records, parse_line, ExtractedRecord};

fn record(label: &str, value: f64, weeks: Option<f64>) -> ExtractedRecord {
    ExtractedRecord {
        label: label.to_string(),
        value,
        weeks,
    }
}

#[test]
fn test_segmentation_response_skips_prose_line() {
    let text = "Age 18-24: 30%\nAge 25-34: 45%\nConclusion: great fit";

    let records = extract_records(text).expect("two lines should match");
    assert_eq!(
        records,
        vec![record("Age 18-24", 30.0, None), record("Age 25-34", 45.0, None)]
    );

    let series = extract_chart_series(text).expect("two lines should match");
    let points: Vec<_> = series.iter().collect();
    assert_eq!(points, vec![("Age 18-24", 30.0), ("Age 25-34", 45.0)]);
}

#[test]
fn test_investment_response_keeps_weeks() {
    let text = "Google Ads: $500 for 4 weeks\nFacebook: $300 for 2 weeks";

    let records = extract_records(text).unwrap();
    assert_eq!(
        records,
        vec![
            record("Google Ads", 500.0, Some(4.0)),
            record("Facebook", 300.0, Some(2.0)),
        ]
    );
}

#[test]
fn test_realistic_markdown_response() {
    let text = "\
Here is a suggested split of your budget:

1. Google Ads: $500 for 4 weeks
2. Instagram: $250.50 for 3 weeks
- TikTok: 200
Email Marketing costs are negligible.

Overall this should reach 1000 units.";

    let records = extract_records(text).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], record("Google Ads", 500.0, Some(4.0)));
    assert_eq!(records[1], record("Instagram", 250.5, Some(3.0)));
    assert_eq!(records[2], record("TikTok", 200.0, None));
}

#[test]
fn test_duplicate_labels_overwrite_in_mapping_and_append_in_list() {
    let text = "Facebook: 300\nInstagram: 100\nFacebook: 450";

    let series = extract_chart_series(text).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.get("Facebook"), Some(450.0));
    let labels: Vec<_> = series.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["Facebook", "Instagram"]);

    let records = extract_records(text).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].value, 300.0);
    assert_eq!(records[2].value, 450.0);
}

#[test]
fn test_no_matches_signal_absence() {
    let text = "Focus on authenticity.\nBe consistent: post daily.";
    assert!(extract_records(text).is_none());
    assert!(extract_chart_series(text).is_none());
}

#[test]
fn test_single_line_shapes() {
    assert_eq!(parse_line("Label: 123.45"), Some(record("Label", 123.45, None)));
    assert_eq!(
        parse_line("Label: $500 for 4 weeks"),
        Some(record("Label", 500.0, Some(4.0)))
    );
    assert_eq!(parse_line("Label 123.45"), None);
    assert_eq!(parse_line("Label: about forty"), None);
}

#[test]
fn test_euro_and_pound_markers() {
    assert_eq!(parse_line("Ads: €250.5"), Some(record("Ads", 250.5, None)));
    assert_eq!(
        parse_line("Print: £90 for 2 weeks"),
        Some(record("Print", 90.0, Some(2.0)))
    );

    let text = "Google Ads: €400 for 3 weeks\nRadio: £120\nSocial: $80 por 2 semanas";
    let series = extract_chart_series(text).unwrap();
    let pairs: Vec<(&str, f64)> = series.iter().collect();
    assert_eq!(
        pairs,
        vec![("Google Ads", 400.0), ("Radio", 120.0), ("Social", 80.0)]
    );
}

#[test]
fn test_non_ascii_digits_are_not_numbers() {
    let text = "Nota: ٣ items, Budget: 500\nVentas: ٣٠\nLeads: 12";
    assert_eq!(
        extract_records(text),
        Some(vec![record("Budget", 500.0, None), record("Leads", 12.0, None)])
    );
}
