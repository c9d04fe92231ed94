//! Tree walking and file removal.
//!
//! A [`Pruner`] walks its root depth-first, counts every non-directory entry,
//! and deletes the ones whose name ends in one of [`PRUNABLE_EXTENSIONS`]. The
//! first error stops the walk; whatever was counted up to that point is handed
//! back inside [`Aborted`].

use crate::error::{Aborted, PruneError};
use crate::logger::{NoopLog, PruneLog};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use walkdir::WalkDir;

/// Extensions (including the leading dot) that mark a file for removal.
pub const PRUNABLE_EXTENSIONS: [&str; 2] = [".ts", ".md"];

/// Counters summarizing one prune.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Every non-directory entry visited.
    pub files_total: u64,
    /// Entries selected for removal.
    pub files_removed: u64,
    /// Bytes those entries occupied, from the metadata read during the walk.
    pub size_removed: u64,
}

/// Shared counters bumped while walking.
///
/// Increments go through `&self` so visits can be fanned out across threads
/// without changing how counting works.
#[derive(Debug, Default)]
struct Tally {
    files_total: AtomicU64,
    files_removed: AtomicU64,
    size_removed: AtomicU64,
}

impl Tally {
    fn visited(&self) {
        self.files_total.fetch_add(1, Ordering::Relaxed);
    }

    fn removed(&self, size: u64) {
        self.files_removed.fetch_add(1, Ordering::Relaxed);
        self.size_removed.fetch_add(size, Ordering::Relaxed);
    }

    fn snapshot(&self) -> Stats {
        Stats {
            files_total: self.files_total.load(Ordering::Relaxed),
            files_removed: self.files_removed.load(Ordering::Relaxed),
            size_removed: self.size_removed.load(Ordering::Relaxed),
        }
    }
}

/// Prunes a single directory tree.
#[derive(Debug, Clone)]
pub struct Pruner<L = NoopLog> {
    dir: PathBuf,
    log: L,
}

impl Pruner<NoopLog> {
    /// Creates a pruner for `dir` that logs nothing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_log(dir, NoopLog)
    }
}

impl<L: PruneLog> Pruner<L> {
    /// Creates a pruner for `dir` that reports removals to `log`.
    pub fn with_log(dir: impl Into<PathBuf>, log: L) -> Self {
        Self {
            dir: dir.into(),
            log,
        }
    }

    /// Root directory this pruner walks.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Walks the tree and deletes every prunable file.
    ///
    /// # Errors
    ///
    /// Returns [`Aborted`] on the first traversal or removal failure. Its
    /// `stats` cover every entry handled before the walk stopped, including
    /// the file whose removal failed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use nmprune::Pruner;
    ///
    /// match Pruner::new("node_modules").prune() {
    ///     Ok(stats) => println!("removed {} files", stats.files_removed),
    ///     Err(aborted) => eprintln!("{} (removed {} so far)", aborted.error, aborted.stats.files_removed),
    /// }
    /// ```
    pub fn prune(&self) -> Result<Stats, Aborted> {
        self.prune_with(|path| fs::remove_file(path))
    }

    fn prune_with<F>(&self, mut remove: F) -> Result<Stats, Aborted>
    where
        F: FnMut(&Path) -> io::Result<()>,
    {
        let tally = Tally::default();

        match self.walk(&tally, &mut remove) {
            Ok(()) => Ok(tally.snapshot()),
            Err(error) => Err(Aborted {
                stats: tally.snapshot(),
                error,
            }),
        }
    }

    fn walk<F>(&self, tally: &Tally, remove: &mut F) -> Result<(), PruneError>
    where
        F: FnMut(&Path) -> io::Result<()>,
    {
        let walker = WalkDir::new(&self.dir)
            .follow_root_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(PruneError::traversal)?;
            if entry.file_type().is_dir() {
                continue;
            }

            let metadata = entry.metadata().map_err(PruneError::traversal)?;
            tally.visited();

            let path = entry.path();
            if !is_prunable(path) {
                continue;
            }

            self.log.debug(path, "prune");
            tally.removed(metadata.len());

            remove(path).map_err(|source| PruneError::Removal {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(())
    }
}

/// Prunes `dir` with a [`NoopLog`].
pub fn prune(dir: impl Into<PathBuf>) -> Result<Stats, Aborted> {
    Pruner::new(dir).prune()
}

/// Whether the file at `path` should be removed.
///
/// The extension is everything from the last `.` of the file name, compared
/// byte for byte, so `.md` and `types.d.ts` qualify while `notes.MD` and
/// `guide.markdown` do not.
pub fn is_prunable(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();

    PRUNABLE_EXTENSIONS
        .iter()
        .any(|ext| name.ends_with(ext.as_bytes()))
}
