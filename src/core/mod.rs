pub mod extractor;
pub mod prompt;
pub mod report;
pub mod simulator;

pub use crate::domain::model::{ExtractedRecord, GoalInput, Recommendation};
pub use crate::domain::ports::TextGenerator;
pub use crate::utils::error::Result;
