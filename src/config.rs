//! Run configuration for a conversion.

use std::path::PathBuf;

use crate::collect::{CollectOptions, ExcludeExtensions, FileNameMode};
use crate::error::{Images2CocoError, Result};
use crate::scan::ScanOptions;

/// Default output file name.
pub const DEFAULT_OUT: &str = "test.json";

/// Required ending of the output file name.
///
/// This is a plain suffix check, so `resultjson` is accepted too.
pub const OUT_SUFFIX: &str = "json";

/// Everything needed to turn an image directory into a COCO file.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Root directory to scan for images.
    pub image_root: PathBuf,

    /// Existing annotation file whose `categories` are copied.
    pub categories_path: PathBuf,

    /// Output file. Defaults to [`DEFAULT_OUT`].
    pub out: PathBuf,

    /// Extensions to skip. `None` keeps every file.
    pub exclude_extensions: Option<ExcludeExtensions>,

    /// Descend into subdirectories. Defaults to `true`.
    pub recursive: bool,

    /// Follow symlinked directories. Defaults to `false`.
    pub follow_links: bool,

    /// Sort directory entries by name while scanning. Defaults to `false`.
    pub sort: bool,

    /// Defaults to [`FileNameMode::Basename`].
    pub file_name_mode: FileNameMode,

    /// Pretty-print the output JSON. Defaults to `false`.
    pub pretty: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            image_root: PathBuf::new(),
            categories_path: PathBuf::new(),
            out: PathBuf::from(DEFAULT_OUT),
            exclude_extensions: None,
            recursive: true,
            follow_links: false,
            sort: false,
            file_name_mode: FileNameMode::Basename,
            pretty: false,
        }
    }
}

impl ConvertConfig {
    /// Creates a config with default settings for the given inputs.
    pub fn new(image_root: impl Into<PathBuf>, categories_path: impl Into<PathBuf>) -> Self {
        Self {
            image_root: image_root.into(),
            categories_path: categories_path.into(),
            ..Default::default()
        }
    }

    /// Checks the config before any filesystem work happens.
    ///
    /// # Errors
    /// Returns [`Images2CocoError::InvalidOutputPath`] if `out` does not end
    /// with [`OUT_SUFFIX`].
    pub fn validate(&self) -> Result<()> {
        if !self.out.to_string_lossy().ends_with(OUT_SUFFIX) {
            return Err(Images2CocoError::InvalidOutputPath {
                path: self.out.clone(),
            });
        }
        Ok(())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            recursive: self.recursive,
            follow_links: self.follow_links,
            sort: self.sort,
        }
    }

    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            exclude: self.exclude_extensions.clone(),
            file_name_mode: self.file_name_mode,
        }
    }
}
