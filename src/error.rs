use std::path::PathBuf;
use thiserror::Error;

/// The main error type for images2coco operations.
#[derive(Debug, Error)]
pub enum Images2CocoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The output file name must end with 'json', got '{}'", path.display())]
    InvalidOutputPath { path: PathBuf },

    #[error("Invalid exclude extension '{0}': must not be empty")]
    InvalidExtension(String),

    #[error("Failed to scan image directory {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read image dimensions from {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("Image {} reports invalid dimensions {width}x{height}", path.display())]
    InvalidDimensions {
        path: PathBuf,
        width: usize,
        height: usize,
    },

    #[error("File name is not valid UTF-8: {}", path.display())]
    NonUtf8FileName { path: PathBuf },

    #[error("Failed to read categories file {}: {source}", path.display())]
    CategoriesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse categories file {}: {source}", path.display())]
    CategoriesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate file_name '{file_name}' at image #{index} (first seen at image #{first_index})")]
    DuplicateFileName {
        file_name: String,
        first_index: usize,
        index: usize,
    },

    #[error("Failed to write COCO JSON to {}: {source}", path.display())]
    CocoJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type with [`Images2CocoError`] as the default error.
pub type Result<T, E = Images2CocoError> = std::result::Result<T, E>;
