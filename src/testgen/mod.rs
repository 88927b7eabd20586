pub mod eligibility;
pub mod generator;
pub mod materialize;
pub mod pacing;
pub mod resolve;
pub mod runner;
pub mod summarizer;

pub use pacing::{NoPause, Pacer, SleepPacer};
pub use runner::{parse_changed_files, Pipeline};
