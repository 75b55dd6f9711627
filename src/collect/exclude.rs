//! Case-insensitive file extension exclusion.

use std::path::Path;

use crate::error::{Images2CocoError, Result};

/// A set of file extensions to skip while collecting images.
///
/// Entries are stored lowercased and without a leading dot, so `"PNG"`,
/// `".png"` and `"png"` are equivalent. Matching looks at the file name only,
/// never at directory components: `png` excludes `photo.PNG` but not
/// `png/photo.jpg` or a file named `png`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExcludeExtensions {
    extensions: Vec<String>,
}

impl ExcludeExtensions {
    /// Builds an exclusion set from user-supplied extension strings.
    ///
    /// # Errors
    /// Returns [`Images2CocoError::InvalidExtension`] for an entry that is
    /// empty once the leading dot is removed.
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for raw in extensions {
            let raw = raw.as_ref();
            let ext = raw.trim().trim_start_matches('.').to_lowercase();
            if ext.is_empty() {
                return Err(Images2CocoError::InvalidExtension(raw.to_string()));
            }
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        Ok(Self {
            extensions: normalized,
        })
    }

    /// The normalized extensions, in the order they were first given.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns true if `path` has one of the excluded extensions.
    ///
    /// Multi-part extensions such as `tar.gz` match when the file name ends
    /// with `.tar.gz`. A dotfile like `.png` has no extension and never
    /// matches.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy().to_lowercase();

        self.extensions.iter().any(|ext| {
            name.len() > ext.len() + 1
                && name.ends_with(ext.as_str())
                && name[..name.len() - ext.len()].ends_with('.')
        })
    }
}
