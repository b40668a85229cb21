use crate::utils::error::GenerationError;
use async_trait::async_trait;

/// The remote text generator, seen from this side of the wire.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
