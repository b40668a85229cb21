use crate::domain::model::{ProductDetails, Scenario};

/// Turns the product form and a scenario goal into the question sent to
/// the text generator.
pub struct PromptBuilder<'a> {
    product: &'a ProductDetails,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(product: &'a ProductDetails) -> Self {
        Self { product }
    }

    pub fn build(&self, scenario: Scenario, target: f64) -> String {
        let mut prompt = self.preamble();
        prompt.push_str(", ");
        prompt.push_str(&question(scenario, &format_goal(target)));

        if let Some(example) = data_example(scenario) {
            prompt.push_str(&format!(
                " {} Put each figure on its own line as 'Label: value' (example: {}).",
                data_request(scenario),
                example
            ));
        }

        prompt
    }

    fn preamble(&self) -> String {
        format!(
            "For a product '{}' in the category '{}', aimed at '{}' with the unique feature '{}'",
            self.product.name.trim(),
            self.product.category,
            self.product.audience.trim(),
            self.product.unique_feature.trim()
        )
    }
}

fn format_goal(target: f64) -> String {
    if target.fract() == 0.0 {
        format!("{:.0}", target)
    } else {
        target.to_string()
    }
}

fn question(scenario: Scenario, goal: &str) -> String {
    match scenario {
        Scenario::AudienceSegmentation => format!(
            "and given a target CPA of {goal}, what should the optimal market segments be (age, interests, location, behaviour)?"
        ),
        Scenario::ContentCampaign => format!(
            "and given a goal of {goal} interactions, which formats, tones and publishing calendar should I use?"
        ),
        Scenario::Pricing => format!(
            "and given a goal of {goal} units sold, what pricing strategy should I use?"
        ),
        Scenario::ConversionFunnel => format!(
            "and given a target conversion rate of {goal}%, which tactics should I use at each stage of the funnel?"
        ),
        Scenario::BrandCrisis => format!(
            "and given a maximum acceptable reputation damage of {goal}%, what communication response should I use in a crisis?"
        ),
        Scenario::Seo => format!(
            "and given a goal of {goal} monthly organic visits, which keywords and strategies should I use?"
        ),
        Scenario::ProductLaunch => format!(
            "and given a goal of {goal} units sold at launch, what plan should I follow?"
        ),
        Scenario::InfluencerMarketing => format!(
            "and given a reach goal of {goal} people, what kind of influencers should I use?"
        ),
        Scenario::DigitalInvestment => format!(
            "and given a goal of {goal} units sold, how much should I invest and for how long on the following digital platforms: Google Ads, Facebook, Instagram, Pinterest, LinkedIn, YouTube, TikTok, Influencers, Twitter (X), Email Marketing?"
        ),
    }
}

fn data_request(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::AudienceSegmentation => "Provide numeric data if possible.",
        Scenario::ContentCampaign => "Include numeric estimates if possible.",
        Scenario::Pricing => "Include numeric examples if possible.",
        Scenario::ConversionFunnel => "Include rates per stage if possible.",
        Scenario::Seo => "Include traffic estimates per keyword if possible.",
        Scenario::ProductLaunch => "Include estimates per channel if possible.",
        Scenario::InfluencerMarketing => "Include reach estimates per type if possible.",
        Scenario::DigitalInvestment => {
            "Provide numeric estimates in dollars and duration in weeks if possible."
        }
        Scenario::BrandCrisis => "",
    }
}

fn data_example(scenario: Scenario) -> Option<&'static str> {
    match scenario {
        Scenario::AudienceSegmentation => Some("Age 18-24: 30%"),
        Scenario::ContentCampaign => Some("Video: 5000 interactions"),
        Scenario::Pricing => Some("Price $10: 800 units"),
        Scenario::ConversionFunnel => Some("Awareness: 50%"),
        Scenario::Seo => Some("sustainable coffee: 20000 visits"),
        Scenario::ProductLaunch => Some("Social Media: 400 units"),
        Scenario::InfluencerMarketing => Some("Micro-influencers: 100000 people"),
        Scenario::DigitalInvestment => Some("Google Ads: $500 for 4 weeks"),
        Scenario::BrandCrisis => None,
    }
}
