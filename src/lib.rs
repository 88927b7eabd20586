//! Generates unit tests for the files changed in a pull request.
//!
//! The pipeline filters the changed files, asks an LLM for test code per
//! eligible file, writes it next to the project's tests and reports the run.

pub mod config;
pub mod detectors;
pub mod llm;
pub mod logger;
pub mod state;
pub mod testgen;
