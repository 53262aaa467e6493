// src/watch/target.rs

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{Glob, GlobMatcher};

use crate::errors::Result;

/// Default filename filter for directory targets.
pub const DEFAULT_GLOB: &str = "*.txt";

/// What a watcher monitors: a single file, or the immediate (non-recursive)
/// files of a directory that match a glob filter.
///
/// Exactly one of the two is ever set; the enum makes the invariant
/// structural.
#[derive(Clone)]
pub enum WatchTarget {
    File(PathBuf),
    Dir { dir: PathBuf, filter: GlobMatcher },
}

impl fmt::Debug for WatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchTarget::File(path) => f.debug_tuple("File").field(path).finish(),
            WatchTarget::Dir { dir, filter } => f
                .debug_struct("Dir")
                .field("dir", dir)
                .field("filter", &filter.glob().glob())
                .finish(),
        }
    }
}

impl WatchTarget {
    /// Target a single file. The file does not have to exist yet; it is
    /// silently skipped on every poll until it appears.
    pub fn single_file(path: impl Into<PathBuf>) -> Self {
        WatchTarget::File(path.into())
    }

    /// Target the immediate files of `dir` whose names match `pattern`.
    pub fn directory(dir: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let filter = Glob::new(pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?
            .compile_matcher();
        Ok(WatchTarget::Dir {
            dir: dir.into(),
            filter,
        })
    }

    /// Enumerate the files currently covered by this target.
    ///
    /// A missing file or directory yields an empty list rather than an error;
    /// watch targets are allowed to appear after the watcher starts. The
    /// result is sorted so poll cycles process files in a stable order.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        match self {
            WatchTarget::File(path) => {
                if path.is_file() {
                    Ok(vec![path.clone()])
                } else {
                    Ok(Vec::new())
                }
            }
            WatchTarget::Dir { dir, filter } => {
                if !dir.is_dir() {
                    return Ok(Vec::new());
                }
                let entries = std::fs::read_dir(dir)
                    .with_context(|| format!("listing watch directory {:?}", dir))?;

                let mut files = Vec::new();
                for entry in entries {
                    let entry = entry?;
                    let path = entry.path();
                    if path.is_file() && matches_name(filter, &path) {
                        files.push(path);
                    }
                }
                files.sort();
                Ok(files)
            }
        }
    }

    /// Directory to hand to the filesystem-event backend: the watched
    /// directory itself, or the parent of the watched file.
    pub fn root_dir(&self) -> PathBuf {
        match self {
            WatchTarget::File(path) => path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
            WatchTarget::Dir { dir, .. } => dir.clone(),
        }
    }
}

/// Match the glob against the file name only, not the full path.
fn matches_name(filter: &GlobMatcher, path: &Path) -> bool {
    path.file_name().is_some_and(|name| filter.is_match(name))
}
