use thiserror::Error;

/// Prefix of every transport failure message shown to the user.
pub const TRANSPORT_ERROR_PREFIX: &str = "Error connecting to the API";

/// Failure of one call to the remote text generator.
///
/// Only two kinds exist. Timeouts, DNS, TLS and non-2xx statuses all
/// collapse into `Transport`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Error connecting to the API: {message}")]
    Transport { message: String },

    #[error("Error: invalid API response.")]
    InvalidResponse,
}

impl GenerationError {
    pub fn transport(message: impl Into<String>) -> Self {
        GenerationError::Transport {
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GenerationError::Transport { .. })
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::transport(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SimError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SimError::ValidationError { .. } => ErrorSeverity::Medium,
            SimError::ConfigError { .. }
            | SimError::InvalidConfigValueError { .. }
            | SimError::MissingConfigError { .. } => ErrorSeverity::High,
            SimError::CsvError(_) | SimError::SerializationError(_) => ErrorSeverity::High,
            SimError::HttpClientError(_) | SimError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SimError::MissingConfigError { field } if field == "api_key" => {
                "Set OPENROUTER_API_KEY, pass --api-key, or add api.api_key to the config file"
                    .to_string()
            }
            SimError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            SimError::InvalidConfigValueError { field, .. } => {
                format!("Check the value given for '{}'", field)
            }
            SimError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            SimError::ValidationError { .. } => {
                "Fill in every product detail and keep the goal within its bounds".to_string()
            }
            SimError::IoError(_) => "Check file paths and permissions".to_string(),
            SimError::CsvError(_) | SimError::SerializationError(_) => {
                "Try a different export path or output format".to_string()
            }
            SimError::HttpClientError(_) => {
                "The HTTP client could not be created; check the TLS setup".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SimError::ValidationError { message } => message.clone(),
            SimError::MissingConfigError { field } => format!("Missing setting: {}", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
