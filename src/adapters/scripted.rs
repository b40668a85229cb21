use crate::domain::ports::TextGenerator;
use crate::utils::error::GenerationError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Reply = Result<String, GenerationError>;

/// Generator that plays back canned replies instead of calling out.
///
/// Replies queued with [`ScriptedGenerator::push`] are served first, in
/// order; once they run out every call gets the fallback.
#[derive(Debug, Clone)]
pub struct ScriptedGenerator {
    fallback: Reply,
    queue: Arc<Mutex<VecDeque<Reply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl ScriptedGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_fallback(Ok(text.into()))
    }

    pub fn failing(error: GenerationError) -> Self {
        Self::with_fallback(Err(error))
    }

    fn with_fallback(fallback: Reply) -> Self {
        Self {
            fallback,
            queue: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    pub fn push(&self, reply: Reply) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(reply);
        }
    }

    /// Wait this long before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Reply {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let queued = self.queue.lock().ok().and_then(|mut q| q.pop_front());
        queued.unwrap_or_else(|| self.fallback.clone())
    }
}
