// Drives one batch: cap, filter, bind, generate, write, record, pace.
// Candidates are handled strictly one after another.

use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::RunConfiguration;
use crate::detectors::detect_language;
use crate::llm::CompletionService;
use crate::state::{FileResult, RunOutcome};
use crate::testgen::eligibility::{self, Admitted, Eligibility};
use crate::testgen::generator::TestGenerator;
use crate::testgen::materialize::write_test;
use crate::testgen::pacing::Pacer;
use crate::testgen::resolve::bind;

pub struct Pipeline<'a> {
    config: &'a RunConfiguration,
    generator: TestGenerator<'a>,
    pacer: &'a dyn Pacer,
    repo_root: PathBuf,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a RunConfiguration,
        service: &'a dyn CompletionService,
        pacer: &'a dyn Pacer,
        repo_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            generator: TestGenerator::new(service),
            pacer,
            repo_root: repo_root.into(),
        }
    }

    pub fn run(&self, candidates: &[String]) -> RunOutcome {
        if !self.config.enabled {
            info!("Unit test generation is disabled");
            return RunOutcome::Disabled;
        }

        if candidates.is_empty() {
            info!("No changed files to process");
            return RunOutcome::NoCandidates;
        }

        let mut results = Vec::new();

        // Anything past the cap is dropped without being read or logged.
        for file in candidates.iter().take(self.config.max_files_per_pr) {
            let admitted = match eligibility::check(&self.repo_root.join(file), self.config) {
                Eligibility::Admit(a) => a,
                Eligibility::Skip(reason) => {
                    info!("File {file} {reason}, skipping");
                    continue;
                }
            };

            info!(
                "Generating tests for {file} ({}, {}, {} lines)",
                admitted.language, admitted.framework, admitted.line_count
            );

            results.push(self.process(file, &admitted));
            self.pacer.pause();
        }

        RunOutcome::Completed(results)
    }

    fn process(&self, file: &str, admitted: &Admitted) -> FileResult {
        let binding = match bind(file, self.config) {
            Ok(b) => b,
            Err(e) => return self.errored(file, e.to_string()),
        };

        let generated = self.generator.generate(
            &admitted.source,
            binding.language,
            file,
            &binding.framework,
            &self.config.ai_settings,
        );

        let test_code = match generated {
            Ok(code) => code,
            Err(_) => {
                info!("❌ Failed to generate tests for: {file}");
                return FileResult::failed(file, &binding);
            }
        };

        match write_test(&self.repo_root, &binding.test_file, &test_code) {
            Ok(_) => {
                info!("✅ Generated tests: {}", binding.test_file.display());
                FileResult::success(file, &binding)
            }
            Err(e) => self.errored(
                file,
                format!("cannot write {}: {e}", binding.test_file.display()),
            ),
        }
    }

    fn errored(&self, file: &str, message: String) -> FileResult {
        error!("Error processing {file}: {message}");
        FileResult::error(file, detect_language(Path::new(file)), message)
    }
}

/// Splits the whitespace-separated changed-file list from the CI event.
pub fn parse_changed_files(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| s.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
