pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{OpenRouterClient, ScriptedGenerator};
pub use config::{toml_config::TomlConfig, ApiSettings, SettingsOverrides};
pub use crate::core::extractor::{extract_chart_series, extract_records, parse_line};
pub use crate::core::simulator::{SimulationOutcome, Simulator};
pub use domain::model::{
    Category, ChartSeries, ExtractedRecord, GoalInput, ProductDetails, Recommendation, Scenario,
};
pub use domain::ports::TextGenerator;
pub use utils::error::{GenerationError, Result, SimError};
