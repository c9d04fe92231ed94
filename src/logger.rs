//! Logging collaborator for the pruner.
//!
//! The pruner never reaches for a global logger. Callers hand it something that
//! implements [`PruneLog`]; [`NoopLog`] is the default and [`LogFacade`] forwards
//! to whatever backend the `log` crate has been wired to (the binary installs
//! `env_logger`).

use std::path::Path;
use std::sync::Arc;

/// Log target used for per-file prune records.
pub const PRUNE_TARGET: &str = "nmprune::prune";

/// Minimal structured logging capability needed while pruning.
///
/// Implementations receive the `path` field and a short message for every file
/// that is about to be removed.
pub trait PruneLog {
    /// Emits a debug-severity record carrying `path`.
    fn debug(&self, path: &Path, message: &str);
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl PruneLog for NoopLog {
    fn debug(&self, _path: &Path, _message: &str) {}
}

/// Forwards records to the `log` facade at debug level, with the path as a
/// `path` key-value pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl PruneLog for LogFacade {
    fn debug(&self, path: &Path, message: &str) {
        log::debug!(target: PRUNE_TARGET, path:% = path.display(); "{message}");
    }
}

impl<T: PruneLog + ?Sized> PruneLog for &T {
    fn debug(&self, path: &Path, message: &str) {
        (**self).debug(path, message);
    }
}

impl<T: PruneLog + ?Sized> PruneLog for Arc<T> {
    fn debug(&self, path: &Path, message: &str) {
        (**self).debug(path, message);
    }
}
