//! Command-line interface and orchestration for repo-health
//!
//! Three commands are provided:
//!
//! - **analyze**: resolve a repository reference, fetch a snapshot through
//!   [`crate::facts::Provider`], score it with [`crate::appraisal::appraise`] and
//!   emit console and/or JSON reports, optionally failing below a score threshold
//! - **init**: write the default configuration file
//! - **validate**: load and check a configuration file
//!
//! All output goes through the [`Host`] trait so the commands can be driven
//! from tests with in-memory buffers.

mod analyze;
mod common;
mod config;
mod host;
mod init;
mod progress_reporter;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use analyze::{AnalyzeArgs, analyze_repository};
pub use common::{ColorMode, LogLevel};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use progress_reporter::ProgressReporter;
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
