//! generator.rs
//!
//! One completion call per eligible file.

use log::{debug, error};
use thiserror::Error;

use crate::config::AiSettings;
use crate::detectors::language::Language;
use crate::llm::{build_prompt, CompletionRequest, CompletionService, LlmError};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Service(#[from] LlmError),

    #[error("completion service returned no test code")]
    Empty,
}

pub struct TestGenerator<'a> {
    service: &'a dyn CompletionService,
}

impl<'a> TestGenerator<'a> {
    pub fn new(service: &'a dyn CompletionService) -> Self {
        Self { service }
    }

    /// Errors are logged here and returned; they never escape as panics.
    pub fn generate(
        &self,
        source: &str,
        language: Language,
        file: &str,
        framework: &str,
        settings: &AiSettings,
    ) -> Result<String, GenerationError> {
        let prompt = build_prompt(source, language, file, framework);
        debug!("prompt {} for {}", prompt.hash(), file);

        let request = CompletionRequest {
            prompt: &prompt,
            settings,
        };

        let result = self
            .service
            .complete(&request)
            .map_err(GenerationError::from)
            .and_then(|text| {
                if text.is_empty() {
                    Err(GenerationError::Empty)
                } else {
                    Ok(text)
                }
            });

        if let Err(e) = &result {
            error!("Error generating tests for {file}: {e}");
        }

        result
    }
}
