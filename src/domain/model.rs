use crate::utils::error::{Result, SimError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name the product form starts with; leaving it untouched counts as empty.
pub const PLACEHOLDER_PRODUCT_NAME: &str = "Example: Premium Coffee";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Food,
    Technology,
    Fashion,
    Services,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Food => "Food",
            Category::Technology => "Technology",
            Category::Fashion => "Fashion",
            Category::Services => "Services",
            Category::Other => "Other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: String,
    pub category: Category,
    pub audience: String,
    pub unique_feature: String,
}

impl Validate for ProductDetails {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("product name", &self.name)?;
        if self.name.trim() == PLACEHOLDER_PRODUCT_NAME {
            return Err(SimError::ValidationError {
                message: "Replace the example product name with your own".to_string(),
            });
        }
        validate_non_empty_string("target audience", &self.audience)?;
        validate_non_empty_string("unique feature", &self.unique_feature)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    AudienceSegmentation,
    ContentCampaign,
    Pricing,
    ConversionFunnel,
    BrandCrisis,
    Seo,
    ProductLaunch,
    InfluencerMarketing,
    DigitalInvestment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
    Funnel,
}

/// How a scenario presents the numbers scraped from a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: &'static str,
    pub label_column: &'static str,
    pub value_column: &'static str,
}

/// Bounds and default of the single numeric goal a scenario asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub whole_number: bool,
}

impl Scenario {
    pub const ALL: [Scenario; 9] = [
        Scenario::AudienceSegmentation,
        Scenario::ContentCampaign,
        Scenario::Pricing,
        Scenario::ConversionFunnel,
        Scenario::BrandCrisis,
        Scenario::Seo,
        Scenario::ProductLaunch,
        Scenario::InfluencerMarketing,
        Scenario::DigitalInvestment,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Scenario::AudienceSegmentation => "Audience Segmentation",
            Scenario::ContentCampaign => "Content Campaigns",
            Scenario::Pricing => "Pricing",
            Scenario::ConversionFunnel => "Conversion Funnels",
            Scenario::BrandCrisis => "Brand Crisis",
            Scenario::Seo => "SEO and Positioning",
            Scenario::ProductLaunch => "Product Launch",
            Scenario::InfluencerMarketing => "Influencer Marketing",
            Scenario::DigitalInvestment => "Digital Platform Investment",
        }
    }

    pub fn goal(&self) -> GoalSpec {
        let count = |label: &'static str, default: f64| GoalSpec {
            label,
            min: 0.0,
            max: f64::MAX,
            default,
            whole_number: true,
        };
        let percent = |label: &'static str, default: f64| GoalSpec {
            label,
            min: 0.0,
            max: 100.0,
            default,
            whole_number: false,
        };

        match self {
            Scenario::AudienceSegmentation => GoalSpec {
                label: "Target cost per acquisition (CPA)",
                min: 0.0,
                max: f64::MAX,
                default: 10.0,
                whole_number: false,
            },
            Scenario::ContentCampaign => count("Target interactions", 10_000.0),
            Scenario::Pricing => count("Target units sold", 1_000.0),
            Scenario::ConversionFunnel => percent("Target conversion rate (%)", 5.0),
            Scenario::BrandCrisis => percent("Maximum acceptable reputation damage (%)", 10.0),
            Scenario::Seo => count("Target monthly organic traffic", 50_000.0),
            Scenario::ProductLaunch => count("Target initial adoption (units)", 1_000.0),
            Scenario::InfluencerMarketing => count("Target reach (people)", 500_000.0),
            Scenario::DigitalInvestment => count("Target sales (units)", 1_000.0),
        }
    }

    /// `None` for scenarios whose recommendation is text only.
    pub fn chart(&self) -> Option<ChartSpec> {
        let spec = |kind: ChartKind,
                    title: &'static str,
                    label_column: &'static str,
                    value_column: &'static str| {
            Some(ChartSpec {
                kind,
                title,
                label_column,
                value_column,
            })
        };

        match self {
            Scenario::AudienceSegmentation => {
                spec(ChartKind::Pie, "Segment Distribution", "Segment", "Percentage")
            }
            Scenario::ContentCampaign => {
                spec(ChartKind::Bar, "Interactions by Format", "Format", "Interactions")
            }
            Scenario::Pricing => spec(ChartKind::Line, "Sales by Price Strategy", "Price", "Units"),
            Scenario::ConversionFunnel => {
                spec(ChartKind::Funnel, "Conversion Funnel", "Stage", "Rate")
            }
            Scenario::BrandCrisis => None,
            Scenario::Seo => spec(ChartKind::Bar, "Traffic by Keyword", "Keyword", "Traffic"),
            Scenario::ProductLaunch => {
                spec(ChartKind::Pie, "Adoption by Channel", "Channel", "Units")
            }
            Scenario::InfluencerMarketing => spec(
                ChartKind::Bar,
                "Reach by Influencer Type",
                "Influencer Type",
                "Reach",
            ),
            Scenario::DigitalInvestment => spec(
                ChartKind::Pie,
                "Investment Distribution by Platform",
                "Platform",
                "Investment",
            ),
        }
    }

    /// Whether the recommendation also gets a table keeping every match
    /// and its trailing duration.
    pub fn tabulates_durations(&self) -> bool {
        matches!(self, Scenario::DigitalInvestment)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Everything one simulation request needs. Lives for a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalInput {
    pub scenario: Scenario,
    pub product: ProductDetails,
    pub target: f64,
}

impl GoalInput {
    pub fn new(scenario: Scenario, product: ProductDetails, target: Option<f64>) -> Self {
        let target = target.unwrap_or_else(|| scenario.goal().default);
        Self {
            scenario,
            product,
            target,
        }
    }
}

impl Validate for GoalInput {
    fn validate(&self) -> Result<()> {
        self.product.validate()?;

        let goal = self.scenario.goal();
        if !self.target.is_finite() {
            return Err(SimError::ValidationError {
                message: format!("'{}' must be a finite number", goal.label),
            });
        }
        if goal.max == f64::MAX {
            if self.target < goal.min {
                return Err(SimError::ValidationError {
                    message: format!("'{}' cannot be below {}", goal.label, goal.min),
                });
            }
        } else {
            validate_range(goal.label, self.target, goal.min, goal.max)?;
        }
        if goal.whole_number && self.target.fract() != 0.0 {
            return Err(SimError::ValidationError {
                message: format!("'{}' must be a whole number", goal.label),
            });
        }
        Ok(())
    }
}

/// One `label: value` line recovered from generated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub label: String,
    pub value: f64,
    /// Number from a trailing `for N weeks` clause, when the line has one.
    pub weeks: Option<f64>,
}

/// Label to value pairs in first-seen order. Re-inserting a label
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    points: Vec<(String, f64)>,
}

impl ChartSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: f64) {
        let label = label.into();
        match self.points.iter_mut().find(|(existing, _)| *existing == label) {
            Some(point) => point.1 = value,
            None => self.points.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.points.iter().map(|(label, value)| (label.as_str(), *value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub label_column: String,
    pub value_column: String,
    pub series: ChartSeries,
}

/// Generated prose plus whatever numeric data could be scraped out of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub text: String,
    pub chart: Option<Chart>,
    pub table: Option<Vec<ExtractedRecord>>,
}

impl Recommendation {
    pub fn has_data(&self) -> bool {
        self.chart.is_some() || self.table.is_some()
    }
}
