//! Per-category scoring of a repository snapshot
//!
//! Each category has an independent, pure scorer mapping a [`RepoSnapshot`] and an
//! evaluation time to an integer from 0 to 100. Scorers spend a point budget of 100
//! across a handful of signals and cap the total rather than rescaling it.
//!
//! Scorers are registered in the static [`CATEGORY_DEFINITIONS`] table, which also
//! carries each category's weight in the overall score and the text used to present
//! it. [`CategoryScores::compute`] runs the whole table.
//!
//! [`RepoSnapshot`]: crate::facts::RepoSnapshot

pub mod activity;
mod category_def;
mod category_scores;
pub mod code_quality;
pub mod community;
pub mod documentation;
pub mod maintenance;
pub(crate) mod points;
mod score_category;

pub use category_def::{CATEGORY_DEFINITIONS, CategoryDef, definition};
pub use category_scores::CategoryScores;
pub use points::days_since;
pub use score_category::ScoreCategory;
