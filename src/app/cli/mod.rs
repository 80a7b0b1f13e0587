//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::api::{self, GenerateOutcome};
use crate::app::config;
use crate::domain::{AppError, GeneratorConfig, GeneratorOptions};

#[derive(Parser)]
#[command(name = "backdate")]
#[command(version)]
#[command(
    about = "Synthesize a dated commit history and optionally push it to a remote",
    long_about = None
)]
struct Cli {
    /// Remote URL to push the generated history to
    #[arg(short = 'r', long)]
    repository: Option<String>,
    /// Local git user.name for the generated commits
    #[arg(long = "user-name", visible_alias = "un", alias = "user_name")]
    user_name: Option<String>,
    /// Local git user.email for the generated commits
    #[arg(long = "user-email", visible_alias = "ue", alias = "user_email")]
    user_email: Option<String>,
    /// File that receives one marker line per commit [default: README.md]
    #[arg(short = 'f', long = "file", alias = "target-file")]
    target_file: Option<String>,
    /// Branch name for the new repository [default: main]
    #[arg(short = 'b', long)]
    branch: Option<String>,
    /// Never commit on Saturdays or Sundays
    #[arg(
        long = "no-weekends",
        visible_alias = "nw",
        alias = "no_weekends",
        action = ArgAction::SetTrue,
        overrides_with = "weekends"
    )]
    no_weekends: bool,
    /// Allow weekend commits even if the config file sets no_weekends
    #[arg(long, action = ArgAction::SetTrue, overrides_with = "no_weekends")]
    weekends: bool,
    /// Percent chance that a day receives commits, 0-100 [default: 80]
    #[arg(long, visible_alias = "fr", allow_negative_numbers = true)]
    frequency: Option<i64>,
    /// Days before today to start the history [default: 365]
    #[arg(long = "days-before", visible_alias = "db", alias = "days_before", allow_negative_numbers = true)]
    days_before: Option<i64>,
    /// Days after today to continue the history [default: 0]
    #[arg(long = "days-after", visible_alias = "da", alias = "days_after", allow_negative_numbers = true)]
    days_after: Option<i64>,
    /// Maximum commits on a single day, 1-20 [default: 10]
    #[arg(long = "max-commits", visible_alias = "mc", alias = "max_commits", allow_negative_numbers = true)]
    max_commits: Option<i64>,
    /// Working directory for the repository [default: derived from the remote or the time]
    #[arg(short = 'd', long)]
    directory: Option<PathBuf>,
    /// Seed for the schedule; the same seed and day produce the same history
    #[arg(long)]
    seed: Option<u64>,
    /// TOML file with defaults for any of the options above
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    /// Print the schedule without creating anything
    #[arg(long)]
    dry_run: bool,
    /// With --dry-run, print the schedule as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,
    /// Log every commit
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            repository: self.repository.clone(),
            user_name: self.user_name.clone(),
            user_email: self.user_email.clone(),
            target_file: self.target_file.clone(),
            branch: self.branch.clone(),
            skip_weekends: self.skip_weekends(),
            frequency: self.frequency,
            days_before: self.days_before,
            days_after: self.days_after,
            max_commits: self.max_commits,
            directory: self.directory.clone(),
            seed: self.seed,
        }
    }

    fn skip_weekends(&self) -> Option<bool> {
        match (self.no_weekends, self.weekends) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = config::resolve(cli.options(), cli.config.as_deref()).and_then(|config| {
        if cli.dry_run { run_plan(&config, cli.json) } else { run_generate(&config) }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "backdate=debug" } else { "backdate=info" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run_plan(config: &GeneratorConfig, json: bool) -> Result<(), AppError> {
    let plan = api::plan(config)?;
    if json {
        println!("{}", plan.to_json()?);
    } else {
        print!("{}", plan.render_text());
    }
    Ok(())
}

fn run_generate(config: &GeneratorConfig) -> Result<(), AppError> {
    let outcome = api::generate(config)?;
    print_summary(&outcome);
    Ok(())
}

fn print_summary(outcome: &GenerateOutcome) {
    let report = &outcome.report;

    println!(
        "✅ Generated {} of {} commit(s) on {} active day(s) in {}",
        report.emit.committed,
        report.scheduled,
        report.active_days,
        outcome.directory.display()
    );
    if let Some(len) = report.history_len {
        println!("  History length: {} commit(s)", len);
    }
    println!("  Seed: {}", outcome.seed);

    if let Some(published) = &report.published {
        if published.pushed() {
            println!("✅ Pushed {} to {}", published.branch, published.remote);
        } else {
            println!("⚠️  Push to {} did not complete:", published.remote);
            for failure in &published.failures {
                println!("  • {}: {}", failure.step, failure.error);
            }
        }
    }

    if !report.setup_failures.is_empty() {
        println!("⚠️  Repository setup warnings:");
        for failure in &report.setup_failures {
            println!("  • {}: {}", failure.step, failure.error);
        }
    }

    if !report.emit.failures.is_empty() {
        println!("⚠️  {} contribution(s) failed:", report.emit.failures.len());
        for failure in &report.emit.failures {
            println!(
                "  • {} ({}): {}",
                failure.timestamp.format("%Y-%m-%d %H:%M"),
                failure.stage,
                failure.error
            );
        }
    }
}
