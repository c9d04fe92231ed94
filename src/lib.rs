//! nmprune - strip dependency trees down to what actually runs
//!
//! This library walks a directory tree (typically `node_modules`) and deletes
//! Markdown documentation and TypeScript sources, tallying how many files were
//! seen, how many were removed and how many bytes that reclaimed. The binary
//! wraps it with TOML settings, colored output and logging.

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod output;
pub mod pruner;

pub use config::{ConfigError, Settings};
pub use error::{Aborted, Error, PruneError, Result};
pub use logger::{LogFacade, NoopLog, PruneLog};
pub use pruner::{Pruner, Stats, is_prunable, prune};

pub use cli::{Cli, RunOptions, load_options, run_cli};
