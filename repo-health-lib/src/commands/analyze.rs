use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use super::progress_reporter::ProgressReporter;
use crate::Result;
use crate::appraisal::appraise;
use crate::facts::{FetchError, Progress, Provider, RepoSpec};
use crate::reports::{ReportableRepo, generate_console, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::Parser;
use core::time::Duration;
use ohno::IntoAppError;
use std::fs;
use std::io::{Write, stderr, stdout};

const LOG_TARGET: &str = "   analyze";

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Repository to analyze, e.g. `https://github.com/owner/repo`
    #[arg(value_name = "REPOSITORY")]
    pub repository: String,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Path to configuration file (default is `repo-health.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Output the health report to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output the health report to the console.
    /// If omitted, console output is shown only when no other report or exit gate is requested.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Exit with status code 1 if the overall score is below SCORE.
    /// Without a value, the configured `minimum_score` is used.
    #[arg(long, value_name = "SCORE", num_args = 0..=1, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub error_if_below: Option<Option<u8>>,
}

/// Fetch, score, and report on a single repository.
pub async fn analyze_repository<H: Host>(host: &mut H, args: &AnalyzeArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

    let repo_spec = match RepoSpec::parse(&args.repository) {
        Ok(spec) => spec,
        Err(e) => return report_fetch_error(host, e),
    };

    let provider = Provider::new(
        args.github_token.as_deref(),
        &config.api_base_url,
        config.page_size,
        config.request_timeout,
    )?;

    let delay = if args.log_level == LogLevel::None {
        Duration::from_millis(300)
    } else {
        Duration::from_hours(365 * 24)
    };

    let progress = ProgressReporter::new(delay, args.color.use_colors(&stderr()));
    let result = provider.get_snapshot(&repo_spec, &progress).await;
    progress.done();

    let snapshot = match result {
        Ok(snapshot) => snapshot,
        Err(e) => return report_fetch_error(host, e),
    };

    let now = Utc::now();
    let report = appraise(&snapshot, now);
    log::info!(target: LOG_TARGET, "Repository '{repo_spec}' scored {} overall", report.overall);

    let info = snapshot.repo().cloned().unwrap_or_default();
    let repo = ReportableRepo::new(repo_spec, info, now, report);

    let threshold = args.error_if_below.map(|score| score.unwrap_or(config.minimum_score));

    if args.console || (args.json.is_none() && threshold.is_none()) {
        let mut console_output = String::new();
        generate_console(&repo, args.color.use_colors(&stdout()), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    if let Some(filename) = &args.json {
        let mut json_output = String::new();
        generate_json(&repo, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        log::info!(target: LOG_TARGET, "Wrote JSON report to '{filename}'");
    }

    if let Some(threshold) = threshold
        && repo.report.overall < threshold
    {
        return Err(ohno::app_err!(
            "overall health score {} is below the required minimum of {threshold}",
            repo.report.overall
        ));
    }

    Ok(())
}

fn report_fetch_error<H: Host>(host: &mut H, e: FetchError) -> Result<()> {
    log::debug!(target: LOG_TARGET, "{}", e.detail());
    let _ = writeln!(host.error(), "❌ {e}");
    host.exit(1);
    Err(e.into())
}
