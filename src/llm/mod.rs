pub mod client;
pub mod prompt;

pub use client::{CompletionRequest, CompletionService, LlmClient, LlmError, ProviderConfig};
pub use prompt::{build_prompt, LlmPrompt};
