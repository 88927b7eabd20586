//! summarizer.rs
//!
//! Reduces the per-file results of a run into a markdown report.
//!
//! Pure: the same result sequence always renders the same bytes.

use std::fmt::Write;

use crate::state::{FileResult, FileStatus};

pub const DEFAULT_SUMMARY_PATH: &str = "test-generation-summary.md";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub success: usize,
    pub failed: usize,
    pub error: usize,
}

pub fn count(results: &[FileResult]) -> Counts {
    results.iter().fold(Counts::default(), |mut c, r| {
        match r.status {
            FileStatus::Success => c.success += 1,
            FileStatus::Failed => c.failed += 1,
            FileStatus::Error => c.error += 1,
        }
        c
    })
}

pub fn render(results: &[FileResult]) -> String {
    let counts = count(results);
    let mut out = String::new();

    out.push_str("### Summary\n\n");
    let _ = writeln!(out, "- ✅ **{}** test files generated successfully", counts.success);
    let _ = writeln!(out, "- ❌ **{}** files failed to generate tests", counts.failed);
    let _ = writeln!(out, "- 🚨 **{}** files had errors\n", counts.error);

    if counts.success > 0 {
        out.push_str("### Generated Test Files\n\n");
        for r in with_status(results, FileStatus::Success) {
            let test_file = r
                .test_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "- `{}` ({}) for `{}`",
                test_file, r.framework, r.source_file
            );
        }
        out.push('\n');
    }

    if counts.failed + counts.error > 0 {
        out.push_str("### Issues\n\n");
        let issues = with_status(results, FileStatus::Failed)
            .chain(with_status(results, FileStatus::Error));
        for r in issues {
            let _ = write!(out, "- ❌ `{}` ({})", r.source_file, r.language);
            if let Some(e) = &r.error {
                let _ = write!(out, " - Error: {e}");
            }
            out.push('\n');
        }
    }

    out
}

fn with_status(results: &[FileResult], status: FileStatus) -> impl Iterator<Item = &FileResult> {
    results.iter().filter(move |r| r.status == status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::language::Language;
    use crate::state::LanguageBinding;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn binding(lang: Language, fw: &str, test: &str) -> LanguageBinding {
        LanguageBinding {
            language: lang,
            framework: fw.into(),
            test_file: PathBuf::from(test),
        }
    }

    #[test]
    fn empty_run_reports_zeroes_only() {
        assert_eq!(
            render(&[]),
            "### Summary\n\n\
             - ✅ **0** test files generated successfully\n\
             - ❌ **0** files failed to generate tests\n\
             - 🚨 **0** files had errors\n\n"
        );
    }

    #[test]
    fn mixed_run_lists_generated_files_then_issues() {
        let results = vec![
            FileResult::error("src/c.py", Language::Python, "permission denied".into()),
            FileResult::success("src/a.py", &binding(Language::Python, "pytest", "tests/src/a_test.py")),
            FileResult::failed("web/b.ts", &binding(Language::TypeScript, "jest", "__tests__/web/b.test.ts")),
        ];

        let expected = "### Summary\n\n\
- ✅ **1** test files generated successfully\n\
- ❌ **1** files failed to generate tests\n\
- 🚨 **1** files had errors\n\n\
### Generated Test Files\n\n\
- `tests/src/a_test.py` (pytest) for `src/a.py`\n\n\
### Issues\n\n\
- ❌ `web/b.ts` (typescript)\n\
- ❌ `src/c.py` (python) - Error: permission denied\n";

        assert_eq!(render(&results), expected);
    }

    #[test]
    fn rendering_is_deterministic() {
        let results = vec![
            FileResult::success("a.py", &binding(Language::Python, "pytest", "tests/a_test.py")),
            FileResult::failed("b.cs", &binding(Language::CSharp, "xunit", "Tests/b.Tests.cs")),
        ];
        assert_eq!(render(&results), render(&results.clone()));
    }

    #[test]
    fn counts_by_status() {
        let b = binding(Language::Java, "junit5", "src/test/java/ATest.java");
        let results = vec![
            FileResult::success("A.java", &b),
            FileResult::success("B.java", &b),
            FileResult::failed("C.java", &b),
        ];
        assert_eq!(
            count(&results),
            Counts {
                success: 2,
                failed: 1,
                error: 0
            }
        );
    }
}
