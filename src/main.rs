use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use testgen_ci::{
    config::{RunConfiguration, DEFAULT_CONFIG_PATH},
    llm::{LlmClient, ProviderConfig},
    logger,
    state::{FileResult, RunOutcome},
    testgen::{parse_changed_files, summarizer, Pipeline, SleepPacer},
};

#[derive(Parser, Debug)]
#[command(
    name = "testgen-ci",
    version,
    about = "Generate unit tests for the files changed in a pull request."
)]
struct Cli {
    /// Whitespace-separated list of changed files
    #[arg(long, env = "CHANGED_FILES")]
    changed_files: Option<String>,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH, help = "Path to the generator configuration")]
    config: PathBuf,

    #[arg(long, default_value = ".", help = "Repository root that changed paths are relative to")]
    root: PathBuf,

    #[arg(long, default_value = summarizer::DEFAULT_SUMMARY_PATH, help = "Where to write the markdown summary")]
    summary: PathBuf,

    #[arg(long, help = "Also write per-file results as JSON to this file")]
    results_json: Option<PathBuf>,

    #[arg(long, default_value_t = 1000, help = "Pause between completion calls, in milliseconds")]
    delay_ms: u64,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    #[arg(long, env = "OPENAI_BASE_URL", help = "OpenAI-compatible chat completions URL")]
    base_url: Option<String>,

    #[arg(long, default_value_t = 120, help = "HTTP timeout per completion call, in seconds")]
    timeout_secs: u64,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error in main: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RunConfiguration::load_or_default(&cli.config);
    let candidates = parse_changed_files(cli.changed_files.as_deref());

    let client = LlmClient::new(ProviderConfig {
        api_key: cli.api_key,
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout_secs),
    })
    .context("cannot construct completion client")?;

    let pacer = SleepPacer::new(Duration::from_millis(cli.delay_ms));
    let pipeline = Pipeline::new(&config, &client, &pacer, cli.root.clone());

    let results = match pipeline.run(&candidates) {
        RunOutcome::Completed(results) => results,
        RunOutcome::Disabled | RunOutcome::NoCandidates => return Ok(()),
    };

    let summary = summarizer::render(&results);
    write_output(&cli.summary, &summary)?;
    info!("\n{summary}");

    if let Some(path) = &cli.results_json {
        write_results_json(path, &results)?;
    }

    Ok(())
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("cannot write {}", path.display()))
}

fn write_results_json(path: &Path, results: &[FileResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results).context("cannot serialize results")?;
    write_output(path, &json)
}
