//! Command dispatch logic for repo-health

use super::{AnalyzeArgs, InitArgs, ValidateArgs, analyze_repository, init_config, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "repo-health", version, author, long_about = None)]
#[command(about = "Score the health of a GitHub repository")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: HealthSubcommand,
}

#[derive(Subcommand, Debug)]
enum HealthSubcommand {
    /// Analyze a repository and report its health score
    Analyze(Box<AnalyzeArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        HealthSubcommand::Analyze(analyze_args) => analyze_repository(host, analyze_args).await,
        HealthSubcommand::Init(init_args) => init_config(host, init_args),
        HealthSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_error_if_below_without_value() {
        let cli = Cli::try_parse_from(["repo-health", "analyze", "owner/repo", "--error-if-below"]).unwrap();
        let HealthSubcommand::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.error_if_below, Some(None));
    }

    #[test]
    fn test_error_if_below_with_value() {
        let cli = Cli::try_parse_from(["repo-health", "analyze", "owner/repo", "--error-if-below", "70"]).unwrap();
        let HealthSubcommand::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.error_if_below, Some(Some(70)));
        assert!(!args.console);
    }

    #[test]
    fn test_error_if_below_out_of_range() {
        let _ = Cli::try_parse_from(["repo-health", "analyze", "owner/repo", "--error-if-below", "101"]).unwrap_err();
    }

    #[test]
    fn test_init_default_output() {
        let cli = Cli::try_parse_from(["repo-health", "init"]).unwrap();
        let HealthSubcommand::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert!(args.output.is_none());
    }
}
