//! Directory scanning for image files.
//!
//! The scanner walks an image root with `walkdir` and lazily yields the path
//! of every regular file it finds. Directories are never yielded.
//!
//! # Modes
//!
//! - **Recursive** (default): every file at any depth below the root.
//! - **Non-recursive**: only files directly inside the root. Depth is capped
//!   at one, so the result never depends on the order in which the
//!   filesystem reports entries.
//!
//! Symlinked directories are only descended into when
//! [`ScanOptions::follow_links`] is set. Symlinks that point at regular files
//! are always yielded. Dangling symlinks below the root are skipped in both
//! modes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Images2CocoError, Result};

/// Options controlling how the image root is traversed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into subdirectories. Defaults to `true`.
    pub recursive: bool,

    /// Follow symlinked directories while descending. Defaults to `false`.
    pub follow_links: bool,

    /// Yield entries sorted by file name within each directory instead of
    /// in the order the filesystem reports them. Defaults to `false`.
    pub sort: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            follow_links: false,
            sort: false,
        }
    }
}

/// Lazy iterator over the files below an image root.
///
/// Created by [`scan_dir`]. Traversal errors (missing or unreadable root,
/// unreadable subdirectory) are yielded as [`Images2CocoError::Scan`].
pub struct ScanIter {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl Iterator for ScanIter {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(source) if is_dangling_link(&source) => {
                    tracing::debug!("Skipping dangling symlink: {source}");
                    continue;
                }
                Err(source) => {
                    return Some(Err(Images2CocoError::Scan {
                        path: self.root.clone(),
                        source,
                    }))
                }
            };

            if is_file_entry(&entry) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

/// Starts a scan of `root`.
///
/// Nothing touches the filesystem until the iterator is first advanced. The
/// root entry itself is never yielded, so a root that is a plain file scans
/// as empty.
pub fn scan_dir(root: &Path, options: &ScanOptions) -> ScanIter {
    let mut walk = WalkDir::new(root)
        .min_depth(1)
        .follow_links(options.follow_links);

    if !options.recursive {
        walk = walk.max_depth(1);
    }
    if options.sort {
        walk = walk.sort_by_file_name();
    }

    ScanIter {
        root: root.to_path_buf(),
        inner: walk.into_iter(),
    }
}

fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    // Unfollowed symlinks still count when they resolve to a file.
    file_type.is_symlink() && entry.path().is_file()
}

/// walkdir only reports dangling links as errors when following links.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    if err.depth() == 0 || err.io_error().map(|e| e.kind()) != Some(ErrorKind::NotFound) {
        return false;
    }
    err.path()
        .and_then(|path| fs::symlink_metadata(path).ok())
        .is_some_and(|meta| meta.file_type().is_symlink())
}
