//! Common test infrastructure
//!
//! Helpers to write songs csv fixtures in a scratch directory and to run the
//! whole pipeline on them. Tests should only import from this module.

mod constants;
mod fixtures;

pub use constants::*;
pub use fixtures::{run_pipeline, PipelineRun, SongsFixture};
