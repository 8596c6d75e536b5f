//! Report generation for appraised repositories
//!
//! Two report generators are provided, each accessed through a `generate` function:
//! - **Console**: Terminal output with ANSI colors, score bars and wrapped advice
//! - **JSON**: Machine-readable structured data
//!
//! Both generators operate on the same input, a [`ReportableRepo`] pairing the
//! repository record with its [`HealthReport`](crate::appraisal::HealthReport).
//! Formatting shared between them lives in the `common` module.

mod common;
mod console;
mod json;
mod reportable_repo;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
pub use reportable_repo::ReportableRepo;
