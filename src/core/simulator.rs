use crate::core::extractor::{extract_chart_series, extract_records};
use crate::core::prompt::PromptBuilder;
use crate::domain::model::{Chart, GoalInput, Recommendation, Scenario};
use crate::domain::ports::TextGenerator;
use crate::utils::error::GenerationError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of one simulation click: the prompt sent and what came back.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    pub scenario: Scenario,
    pub prompt: String,
    #[serde(serialize_with = "serialize_result")]
    pub result: Result<Recommendation, GenerationError>,
    pub generated_at: DateTime<Utc>,
}

fn serialize_result<S>(
    result: &Result<Recommendation, GenerationError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    #[derive(Serialize)]
    #[serde(tag = "status", rename_all = "snake_case")]
    enum Wire<'a> {
        Ok { recommendation: &'a Recommendation },
        Error { message: String },
    }

    match result {
        Ok(recommendation) => Wire::Ok { recommendation }.serialize(serializer),
        Err(e) => Wire::Error {
            message: e.to_string(),
        }
        .serialize(serializer),
    }
}

pub struct Simulator<G: TextGenerator> {
    generator: G,
    timeout: Duration,
}

impl<G: TextGenerator> Simulator<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn prompt_for(&self, input: &GoalInput) -> String {
        PromptBuilder::new(&input.product).build(input.scenario, input.target)
    }

    /// One request, one answer. Dropping the returned future abandons the call.
    pub async fn run(&self, input: &GoalInput) -> SimulationOutcome {
        let prompt = self.prompt_for(input);
        tracing::info!("Running {} simulation", input.scenario);
        tracing::debug!("Prompt: {}", prompt);

        let result = match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await
        {
            Ok(Ok(text)) => Ok(build_recommendation(input.scenario, text)),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(GenerationError::transport(format!(
                "request timed out after {:?}",
                self.timeout
            ))),
        };

        match &result {
            Ok(recommendation) if recommendation.has_data() => {
                tracing::info!("Recommendation received with chartable data")
            }
            Ok(_) => tracing::info!("Recommendation received, no numeric data found"),
            Err(e) => tracing::warn!("Generation failed: {}", e),
        }

        SimulationOutcome {
            scenario: input.scenario,
            prompt,
            result,
            generated_at: Utc::now(),
        }
    }
}

pub fn build_recommendation(scenario: Scenario, text: String) -> Recommendation {
    let chart = scenario.chart().and_then(|spec| {
        extract_chart_series(&text).map(|series| Chart {
            kind: spec.kind,
            title: spec.title.to_string(),
            label_column: spec.label_column.to_string(),
            value_column: spec.value_column.to_string(),
            series,
        })
    });

    let table = if scenario.tabulates_durations() {
        extract_records(&text)
    } else {
        None
    };

    Recommendation { text, chart, table }
}
