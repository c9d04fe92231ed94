//! Command-line interface for nmprune.
//!
//! Handles argument parsing, layering command-line flags over the settings
//! file, and running a single prune with terminal feedback.

use crate::config::Settings;
use crate::error::Result;
use crate::logger::LogFacade;
use crate::output::OutputFormatter;
use crate::pruner::{Pruner, Stats};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "nmprune")]
#[command(about = "Remove documentation and TypeScript sources from node_modules", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(help = "Directory to prune [default: node_modules]")]
    pub dir: Option<PathBuf>,

    #[arg(long, short = 'c', help = "Path to settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'v', help = "Log every removed file")]
    pub verbose: bool,

    #[arg(long, short = 'q', conflicts_with = "verbose", help = "Suppress the summary")]
    pub quiet: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Cli {
    /// Settings file named on the command line, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

/// Everything needed to run one prune, after merging flags over settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub dir: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
    pub color: bool,
}

impl RunOptions {
    /// Command-line flags win over the settings file; a flag that was not
    /// given leaves the settings value in place.
    pub fn resolve(cli: &Cli, settings: &Settings) -> Self {
        let verbose = cli.verbose || (settings.output.verbose && !cli.quiet);
        let quiet = cli.quiet || (settings.output.quiet && !cli.verbose);

        Self {
            dir: cli
                .dir
                .clone()
                .unwrap_or_else(|| settings.prune.dir.clone()),
            verbose,
            quiet: quiet && !verbose,
            color: settings.output.color && !cli.no_color,
        }
    }

    /// Filter handed to `env_logger` unless `RUST_LOG` says otherwise.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Loads the settings file the command line points at and merges the flags
/// over it.
pub fn load_options(cli: &Cli) -> Result<RunOptions> {
    let settings = Settings::load(cli.config_path())?;
    Ok(RunOptions::resolve(cli, &settings))
}

/// Prunes `options.dir`, printing progress and a summary.
///
/// Partial stats are printed before the error is returned when the prune
/// aborts, so the caller only has to report the error itself.
///
/// # Examples
///
/// ```no_run
/// use nmprune::cli::{RunOptions, run_cli};
/// use std::path::PathBuf;
///
/// let options = RunOptions {
///     dir: PathBuf::from("node_modules"),
///     verbose: false,
///     quiet: false,
///     color: true,
/// };
/// match run_cli(&options) {
///     Ok(stats) => println!("reclaimed {} bytes", stats.size_removed),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(options: &RunOptions) -> Result<Stats> {
    if !options.color {
        colored::control::set_override(false);
    }

    log::info!("pruning {}", options.dir.display());

    let spinner = (!options.quiet && !options.verbose).then(|| {
        OutputFormatter::create_spinner(&format!("Pruning {}", options.dir.display()))
    });

    let start = Instant::now();
    let result = Pruner::with_log(&options.dir, LogFacade).prune();
    let elapsed = start.elapsed();

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(stats) => {
            if !options.quiet {
                OutputFormatter::summary(&stats, elapsed);
                OutputFormatter::success(&format!("Pruned {}", options.dir.display()));
            }
            Ok(stats)
        }
        Err(aborted) => {
            if !options.quiet {
                OutputFormatter::warning("Prune stopped early, partial results:");
                OutputFormatter::summary(&aborted.stats, elapsed);
            }
            Err(aborted.into())
        }
    }
}
