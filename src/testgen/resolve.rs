use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::config::RunConfiguration;
use crate::detectors::{detect_language, framework_for, Language};
use crate::state::LanguageBinding;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("cannot derive a test file name from `{0}`")]
    NoFileStem(String),
}

/* ============================================================
   Public entry
   ============================================================ */

pub fn bind(source_file: &str, config: &RunConfiguration) -> Result<LanguageBinding, BindError> {
    let path = Path::new(source_file);
    let language = detect_language(path);
    let framework = framework_for(language, config);
    let test_file = test_path_for(path, language)?;

    Ok(LanguageBinding {
        language,
        framework,
        test_file,
    })
}

/// `<test dir>/<source dirs>/<stem><suffix>`.
///
/// Only normal components of the source directory are kept, so the result
/// always stays under the test dir.
pub fn test_path_for(source: &Path, language: Language) -> Result<PathBuf, BindError> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| BindError::NoFileStem(source.display().to_string()))?;

    let mut out = PathBuf::from(language.test_dir());

    if let Some(parent) = source.parent() {
        for c in parent.components() {
            if let Component::Normal(part) = c {
                out.push(part);
            }
        }
    }

    out.push(format!("{stem}{}", language.test_suffix()));
    Ok(out)
}
