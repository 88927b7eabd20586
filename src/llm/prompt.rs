use sha2::{Digest, Sha256};

use crate::detectors::language::Language;

const PROMPT_ABI_VERSION: &str = "v1-unit-testgen";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmPrompt {
    pub user: String,
}

impl LlmPrompt {
    /// Stable fingerprint of the instruction, for log correlation.
    pub fn hash(&self) -> String {
        let mut h = Sha256::new();
        h.update(PROMPT_ABI_VERSION.as_bytes());
        h.update(self.user.as_bytes());
        hex::encode(h.finalize())
    }
}

/* ============================================================
   Unit test instruction
   ============================================================ */

pub fn build_prompt(
    source: &str,
    language: Language,
    file: &str,
    framework: &str,
) -> LlmPrompt {
    let mut out = String::new();

    out.push_str(&format!(
        "Generate comprehensive unit tests for the following {language} code from file {file}:\n\n"
    ));

    out.push_str(&format!("```{language}\n{source}\n```\n\n"));

    out.push_str("Requirements:\n");
    for req in requirements(language, framework) {
        out.push_str("- ");
        out.push_str(&req);
        out.push('\n');
    }

    out.push_str("\nGenerate only the test code, no explanations.\n");

    LlmPrompt { user: out }
}

fn requirements(language: Language, framework: &str) -> Vec<String> {
    vec![
        format!("Use {framework} testing framework"),
        "Cover all public methods and edge cases".into(),
        "Include setup/teardown where needed".into(),
        format!("Follow {language} naming conventions"),
        "Add descriptive test names and comments".into(),
        "Mock external dependencies where appropriate".into(),
        "Include both positive and negative test cases".into(),
        "Ensure good test coverage".into(),
    ]
}
