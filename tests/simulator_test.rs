use anyhow::Result;
use httpmock::prelude::*;
use marketing_sim::core::report;
use marketing_sim::utils::validation::Validate;
use marketing_sim::{
    ApiSettings, Category, GenerationError, GoalInput, OpenRouterClient, ProductDetails, Scenario,
    ScriptedGenerator, Simulator,
};
use std::time::Duration;
use tempfile::TempDir;

fn product() -> ProductDetails {
    ProductDetails {
        name: "Andes Roast".to_string(),
        category: Category::Food,
        audience: "Young adults 18-35".to_string(),
        unique_feature: "Sustainably sourced".to_string(),
    }
}

#[tokio::test]
async fn test_end_to_end_digital_investment_over_http() -> Result<()> {
    let server = MockServer::start();
    let answer = "Suggested plan:\nGoogle Ads: $500 for 4 weeks\nFacebook: $300 for 2 weeks\nGood luck!";
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat")
            .header("Authorization", "Bearer sk-e2e")
            .body_contains("Google Ads, Facebook, Instagram");
        then.status(200)
            .json_body(serde_json::json!({"choices": [{"message": {"content": answer}}]}));
    });

    let settings = ApiSettings::new("sk-e2e").with_endpoint(server.url("/chat"));
    let simulator = Simulator::new(OpenRouterClient::new(settings)?);
    let input = GoalInput::new(Scenario::DigitalInvestment, product(), Some(1200.0));
    input.validate()?;

    let outcome = simulator.run(&input).await;
    api_mock.assert();

    let recommendation = outcome.result.as_ref().expect("call should succeed");
    let table = recommendation.table.as_ref().expect("table expected");
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].label, "Google Ads");
    assert_eq!(table[0].value, 500.0);
    assert_eq!(table[0].weeks, Some(4.0));

    let chart = recommendation.chart.as_ref().expect("chart expected");
    assert_eq!(chart.label_column, "Platform");
    assert_eq!(chart.series.get("Facebook"), Some(300.0));

    let temp_dir = TempDir::new()?;
    let export = temp_dir.path().join("investment.csv");
    let csv = report::to_csv(recommendation)?.expect("data to export");
    std::fs::write(&export, csv)?;
    let written = std::fs::read_to_string(&export)?;
    assert!(written.starts_with("label,value,weeks\n"));
    assert!(written.contains("Facebook,300,2"));

    Ok(())
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_message() {
    let generator = ScriptedGenerator::failing(GenerationError::transport("dns error"));
    let simulator = Simulator::new(generator.clone());
    let input = GoalInput::new(Scenario::Seo, product(), None);

    let outcome = simulator.run(&input).await;

    assert_eq!(generator.call_count(), 1);
    let text = report::render_text(&outcome);
    assert!(text.contains("Error connecting to the API: dns error"));
}

#[tokio::test]
async fn test_slow_generator_hits_timeout() {
    let generator = ScriptedGenerator::replying("Video: 5000").with_delay(Duration::from_secs(5));
    let simulator = Simulator::new(generator).with_timeout(Duration::from_millis(50));
    let input = GoalInput::new(Scenario::ContentCampaign, product(), None);

    let outcome = simulator.run(&input).await;

    let err = outcome.result.unwrap_err();
    assert!(err.is_transport());
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn test_each_run_is_independent() {
    let generator = ScriptedGenerator::replying("Nothing to chart.");
    generator.push(Ok("Awareness: 50%\nConsideration: 20%\nPurchase: 5%".to_string()));
    let simulator = Simulator::new(generator.clone());
    let input = GoalInput::new(Scenario::ConversionFunnel, product(), Some(5.0));

    let first = simulator.run(&input).await;
    let second = simulator.run(&input).await;

    let first = first.result.unwrap();
    assert_eq!(first.chart.as_ref().map(|c| c.series.len()), Some(3));

    let second = second.result.unwrap();
    assert!(second.chart.is_none());
    assert!(!second.has_data());

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[0], prompts[1]);
    assert!(prompts[0].contains("conversion rate of 5%"));
}

#[tokio::test]
async fn test_invalid_response_shown_in_json_output() -> Result<()> {
    let generator = ScriptedGenerator::failing(GenerationError::InvalidResponse);
    let simulator = Simulator::new(generator);
    let input = GoalInput::new(Scenario::Pricing, product(), None);

    let outcome = simulator.run(&input).await;
    let json: serde_json::Value = serde_json::from_str(&report::to_json(&outcome)?)?;

    assert_eq!(json["scenario"], "pricing");
    assert_eq!(json["result"]["status"], "error");
    assert!(json["prompt"].as_str().unwrap_or_default().contains("1000 units sold"));
    Ok(())
}
