use std::cell::Cell;
use std::fs;

use testgen_ci::config::RunConfiguration;
use testgen_ci::llm::{CompletionRequest, CompletionService, LlmError};
use testgen_ci::state::{FileStatus, RunOutcome};
use testgen_ci::testgen::{summarizer, NoPause, Pipeline};

struct Canned {
    calls: Cell<usize>,
}

impl CompletionService for Canned {
    fn complete(&self, req: &CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.set(self.calls.get() + 1);
        if req.prompt.user.contains("from file web/broken.ts") {
            return Err(LlmError::Transport("timed out".into()));
        }
        Ok("describe('x', () => { it('works', () => {}) })\n".into())
    }
}

fn write_lines(root: &std::path::Path, rel: &str, n: usize) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec!["const x = 1;"; n].join("\n")).unwrap();
}

#[test]
fn mixed_batch_produces_files_and_report() {
    let dir = tempfile::tempdir().unwrap();
    write_lines(dir.path(), "web/app.ts", 30);
    write_lines(dir.path(), "web/broken.ts", 30);
    write_lines(dir.path(), "web/tiny.ts", 3);
    write_lines(dir.path(), "scripts/run.rb", 30);

    let cfg = RunConfiguration::default();
    let svc = Canned { calls: Cell::new(0) };
    let candidates: Vec<String> = ["web/app.ts", "web/broken.ts", "web/tiny.ts", "scripts/run.rb", "gone.py"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let results = match Pipeline::new(&cfg, &svc, &NoPause, dir.path()).run(&candidates) {
        RunOutcome::Completed(r) => r,
        other => panic!("unexpected outcome {other:?}"),
    };

    assert_eq!(svc.calls.get(), 2);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].status, FileStatus::Success);
    assert_eq!(results[1].status, FileStatus::Failed);
    assert!(dir.path().join("__tests__/web/app.test.ts").is_file());
    assert!(!dir.path().join("__tests__/web/broken.test.ts").exists());

    let report = summarizer::render(&results);
    assert!(report.contains("- ✅ **1** test files generated successfully"));
    assert!(report.contains("- ❌ **1** files failed to generate tests"));
    assert!(report.contains("- 🚨 **0** files had errors"));
    assert!(report.contains("- `__tests__/web/app.test.ts` (jest) for `web/app.ts`"));
    assert!(report.contains("- ❌ `web/broken.ts` (typescript)\n"));
    assert!(!report.contains("tiny.ts"));
    assert!(!report.contains("run.rb"));

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["status"], "success");
    assert_eq!(json[0]["language"], "typescript");
    assert_eq!(json[1]["test_file"], serde_json::Value::Null);
}
