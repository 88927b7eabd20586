//! detectors/language.rs
//!
//! Extension-based language detection for a single changed file.

use std::fmt;
use std::path::Path;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Language {
    CSharp,
    Java,
    JavaScript,
    TypeScript,
    Python,
    Unknown,
}

/* ============================================================
   Public API
   ============================================================ */

/// Maps a file path to its language. Unrecognized extensions are `Unknown`.
pub fn detect_language(path: &Path) -> Language {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_ascii_lowercase(),
        None => return Language::Unknown,
    };

    match ext.as_str() {
        "cs" => Language::CSharp,
        "java" => Language::Java,
        "js" => Language::JavaScript,
        "ts" => Language::TypeScript,
        "py" => Language::Python,
        _ => Language::Unknown,
    }
}

impl Language {
    /// Tag used as the key into the configured framework mapping.
    pub fn tag(self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Unknown => "unknown",
        }
    }

    /// Conventional test directory, relative to the repository root.
    pub fn test_dir(self) -> &'static str {
        match self {
            Language::CSharp => "Tests",
            Language::Java => "src/test/java",
            Language::JavaScript | Language::TypeScript => "__tests__",
            Language::Python => "tests",
            Language::Unknown => "tests",
        }
    }

    /// Appended to the source file stem to form the test file name.
    pub fn test_suffix(self) -> &'static str {
        match self {
            Language::CSharp => ".Tests.cs",
            Language::Java => "Test.java",
            Language::JavaScript => ".test.js",
            Language::TypeScript => ".test.ts",
            Language::Python => "_test.py",
            Language::Unknown => ".test",
        }
    }

    pub fn is_known(self) -> bool {
        self != Language::Unknown
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.tag())
    }
}
