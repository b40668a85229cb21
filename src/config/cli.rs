use crate::config::SettingsOverrides;
use crate::domain::model::{Category, GoalInput, ProductDetails, Scenario};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "marketing-sim")]
#[command(about = "Inverse marketing simulators: state a goal, get a strategy")]
pub struct CliConfig {
    /// Simulator to run
    #[arg(long, value_enum, default_value = "audience-segmentation")]
    pub scenario: Scenario,

    /// Product or service name
    #[arg(long)]
    pub product_name: String,

    #[arg(long, value_enum, default_value = "other")]
    pub category: Category,

    /// Target audience, e.g. "Young adults 18-35"
    #[arg(long)]
    pub audience: String,

    /// What sets the product apart, e.g. "Sustainability"
    #[arg(long)]
    pub unique_feature: String,

    /// Numeric goal for the scenario; the scenario default when omitted
    #[arg(long)]
    pub goal: Option<f64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "API key; falls back to the config file, then OPENROUTER_API_KEY")]
    pub api_key: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Write the extracted data as CSV to this path
    #[arg(long)]
    pub export: Option<String>,

    /// Print the prompt without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn goal_input(&self) -> GoalInput {
        let product = ProductDetails {
            name: self.product_name.clone(),
            category: self.category,
            audience: self.audience.clone(),
            unique_feature: self.unique_feature.clone(),
        };
        GoalInput::new(self.scenario, product, self.goal)
    }

    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let config = CliConfig::try_parse_from([
            "marketing-sim",
            "--scenario",
            "digital-investment",
            "--product-name",
            "Andes Roast",
            "--category",
            "food",
            "--audience",
            "Young adults",
            "--unique-feature",
            "Organic",
        ])
        .unwrap();

        let input = config.goal_input();
        assert_eq!(input.scenario, Scenario::DigitalInvestment);
        assert_eq!(input.product.category, Category::Food);
        assert_eq!(input.target, 1000.0);
        assert!(config.overrides().api_key.is_none());
    }

    #[test]
    fn test_product_name_required() {
        let result = CliConfig::try_parse_from([
            "marketing-sim",
            "--audience",
            "Young adults",
            "--unique-feature",
            "Organic",
        ]);
        assert!(result.is_err());
    }
}
