//! CLI for readme-site.
//!
//! Fetches the README of every public repository of an organization or user
//! and writes them as content pages for a static-site generator.

use clap::{Args, Parser, Subcommand};
use readme_site::{
    load_or_default, AccessToken, Reporter, RunSummary, Runner, RunnerConfig, RunnerError,
    TracingReporter, DEFAULT_CONFIG_FILE,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// readme-site - Build static-site content from GitHub repository READMEs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch all repos of the configured organization or user and write their READMEs as pages.
    Build(BuildArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Path to the configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Organization name or user login, overriding the configuration file.
    #[arg(long)]
    site: Option<String>,

    /// Treat the site as a user account rather than an organization.
    #[arg(long)]
    user: bool,

    /// Directory content files are written to.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Maximum concurrent README fetches (unbounded by default).
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-repository timeout in seconds (none by default).
    #[arg(long)]
    task_timeout: Option<u64>,

    /// Fail a repository when writing its content file fails.
    #[arg(long)]
    strict_writes: bool,

    /// GitHub access token.
    #[arg(long, env = "GITHUB_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Both ring and aws-lc-rs end up linked; pick one explicitly.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();
    let reporter: Arc<dyn Reporter> = Arc::new(TracingReporter);

    match cli.command {
        Command::Build(args) => match build(args, Arc::clone(&reporter)).await {
            Ok(summary) => {
                print_summary(reporter.as_ref(), &summary);
                ExitCode::SUCCESS
            }
            Err(_) => ExitCode::from(1),
        },
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Resolves configuration and runs the build.
///
/// Configuration errors are reported here; everything after that is reported
/// by the runner itself.
async fn build(args: BuildArgs, reporter: Arc<dyn Reporter>) -> Result<RunSummary, RunnerError> {
    let config = match resolve_config(args) {
        Ok(config) => config,
        Err(e) => {
            reporter.error("config", &e.to_string());
            return Err(e.into());
        }
    };

    let runner = Runner::new(config, reporter)?;
    runner.run().await
}

/// Layers command-line overrides over the configuration file.
fn resolve_config(args: BuildArgs) -> Result<RunnerConfig, readme_site::ConfigError> {
    let mut site = load_or_default(&args.config)?;

    if let Some(name) = args.site {
        site.site = name;
    } else if site.site.trim().is_empty() && !args.config.exists() {
        return Err(readme_site::ConfigError::MissingFile {
            path: args.config.display().to_string(),
        });
    }
    if args.user {
        site.is_user = true;
    }
    if let Some(output_dir) = args.output_dir {
        site.output_dir = output_dir;
    }
    if args.concurrency.is_some() {
        site.concurrency = args.concurrency;
    }
    if args.task_timeout.is_some() {
        site.task_timeout_secs = args.task_timeout;
    }
    if args.strict_writes {
        site.strict_writes = true;
    }

    RunnerConfig::from_site(&site, AccessToken::resolve(args.token))
}

/// Prints the closing hints after a successful build.
fn print_summary(reporter: &dyn Reporter, summary: &RunSummary) {
    debug!(
        discovered = summary.repositories_discovered,
        written = summary.files_written,
        failed = summary.fetches_failed,
        "Build finished"
    );
    reporter.info("sill", "Successfully built your site!");
    reporter.info("sill", "Run `hugo server` to run the hugo server");
    reporter.info("sill", "To change theme refer to the hugo documentation");
}
