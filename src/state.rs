use std::path::PathBuf;

use serde::Serialize;

use crate::detectors::language::Language;

/* ---------- per-file outcome ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Success,
    Failed,
    Error,
}

/// One record per candidate that entered generation. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileResult {
    pub source_file: String,
    pub test_file: Option<PathBuf>,
    pub language: Language,
    pub framework: String,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    pub fn success(source_file: &str, binding: &LanguageBinding) -> Self {
        Self {
            source_file: source_file.to_string(),
            test_file: Some(binding.test_file.clone()),
            language: binding.language,
            framework: binding.framework.clone(),
            status: FileStatus::Success,
            error: None,
        }
    }

    pub fn failed(source_file: &str, binding: &LanguageBinding) -> Self {
        Self {
            source_file: source_file.to_string(),
            test_file: None,
            language: binding.language,
            framework: binding.framework.clone(),
            status: FileStatus::Failed,
            error: None,
        }
    }

    pub fn error(source_file: &str, language: Language, message: String) -> Self {
        Self {
            source_file: source_file.to_string(),
            test_file: None,
            language,
            framework: crate::detectors::UNKNOWN_FRAMEWORK.to_string(),
            status: FileStatus::Error,
            error: Some(message),
        }
    }
}

/* ---------- derived per candidate ---------- */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageBinding {
    pub language: Language,
    pub framework: String,
    pub test_file: PathBuf,
}

/* ---------- run lifecycle ---------- */

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// `enabled: false` in the configuration.
    Disabled,
    /// Empty changed-file list.
    NoCandidates,
    Completed(Vec<FileResult>),
}
