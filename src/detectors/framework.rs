//! detectors/framework.rs
//!
//! Test framework selection from the run configuration.

use crate::config::RunConfiguration;
use crate::detectors::language::Language;

pub const UNKNOWN_FRAMEWORK: &str = "unknown";

/* ============================================================
   Public API
   ============================================================ */

/// Looks up the configured framework for `language`. Absent entries yield
/// `"unknown"`.
pub fn framework_for(language: Language, config: &RunConfiguration) -> String {
    config
        .frameworks
        .get(language.tag())
        .map(|fw| fw.trim())
        .filter(|fw| !fw.is_empty())
        .unwrap_or(UNKNOWN_FRAMEWORK)
        .to_string()
}
