//! Summary of a finished conversion.

use std::fmt;
use std::path::PathBuf;

/// Counts describing what a conversion wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Where the COCO file was written.
    pub output: PathBuf,
    /// Number of entries in the `images` list.
    pub images: usize,
    /// Scanned files skipped by the exclusion set.
    pub excluded: usize,
    /// Number of categories copied from the source file.
    pub categories: usize,
}

impl fmt::Display for ConvertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} images, {} categories, 0 annotations",
            self.images, self.categories
        )?;
        if self.excluded > 0 {
            writeln!(f, "  {} file(s) excluded by extension", self.excluded)?;
        }
        Ok(())
    }
}
