// Adapters layer: concrete implementations of the generator port.

pub mod openrouter;
pub mod scripted;

pub use openrouter::OpenRouterClient;
pub use scripted::ScriptedGenerator;
