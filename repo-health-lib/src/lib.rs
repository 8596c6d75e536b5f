#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for repo-health
//!
//! This library consolidates all functionality for the repo-health tool, which scores
//! the health of a GitHub repository from a snapshot of its public metadata.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`facts`]: Repository snapshots and their retrieval from GitHub
//! - [`metrics`]: Per-category scoring of a snapshot
//! - [`appraisal`]: Overall score, grade, and recommendations
//! - [`reports`]: Console and JSON report generation

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod appraisal;
pub mod facts;
pub mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
