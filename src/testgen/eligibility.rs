//! eligibility.rs
//!
//! Decides whether a changed file is worth generating tests for.
//!
//! Checks run in a fixed order and stop at the first failure:
//! existence, size, language, framework.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::config::RunConfiguration;
use crate::detectors::{detect_language, framework_for, Language, UNKNOWN_FRAMEWORK};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Admit(Admitted),
    Skip(SkipReason),
}

/// Everything the runner needs from the filter, so the file is read once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admitted {
    pub source: String,
    pub line_count: usize,
    pub language: Language,
    pub framework: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Missing,
    Unreadable(String),
    TooSmall { lines: usize, min: usize },
    UnknownLanguage,
    NoFramework(Language),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "does not exist"),
            SkipReason::Unreadable(e) => write!(f, "is not readable ({e})"),
            SkipReason::TooSmall { lines, min } => {
                write!(f, "is too small ({lines} lines, minimum {min})")
            }
            SkipReason::UnknownLanguage => write!(f, "has an unknown language"),
            SkipReason::NoFramework(lang) => write!(f, "has no framework configured for {lang}"),
        }
    }
}

/* ============================================================
   Public API
   ============================================================ */

/// `path` is where the file lives on disk; `config` supplies the size floor
/// and the framework mapping.
pub fn check(path: &Path, config: &RunConfiguration) -> Eligibility {
    if !path.is_file() {
        return Eligibility::Skip(SkipReason::Missing);
    }

    // Invalid UTF-8 is replaced, not rejected: legacy encodings still get tests.
    let source = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Eligibility::Skip(SkipReason::Missing);
        }
        Err(e) => return Eligibility::Skip(SkipReason::Unreadable(e.to_string())),
    };

    let line_count = count_lines(&source);
    if line_count < config.min_file_size {
        return Eligibility::Skip(SkipReason::TooSmall {
            lines: line_count,
            min: config.min_file_size,
        });
    }

    let language = detect_language(path);
    if !language.is_known() {
        return Eligibility::Skip(SkipReason::UnknownLanguage);
    }

    let framework = framework_for(language, config);
    if framework == UNKNOWN_FRAMEWORK {
        return Eligibility::Skip(SkipReason::NoFramework(language));
    }

    Eligibility::Admit(Admitted {
        source,
        line_count,
        language,
        framework,
    })
}

/// Number of `\n`-separated segments; an empty file counts as one line.
pub fn count_lines(source: &str) -> usize {
    source.split('\n').count()
}
