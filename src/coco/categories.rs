//! Loading the `categories` list from an existing annotation file.

use std::fs;
use std::path::Path;

use serde::de::Error as _;

use super::Category;
use crate::error::{Images2CocoError, Result};

/// Reads the `categories` list from a JSON annotation file.
///
/// Only the top-level `categories` key is looked at. A missing or `null`
/// key yields an empty list.
///
/// # Errors
/// Returns [`Images2CocoError::CategoriesRead`] if the file cannot be read
/// and [`Images2CocoError::CategoriesParse`] if it is not a JSON object or
/// its `categories` value is not a list.
pub fn load_categories(path: &Path) -> Result<Vec<Category>> {
    let bytes = fs::read(path).map_err(|source| Images2CocoError::CategoriesRead {
        path: path.to_path_buf(),
        source,
    })?;

    categories_from_slice(&bytes).map_err(|source| Images2CocoError::CategoriesParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Extracts the `categories` list from raw JSON bytes.
///
/// Useful for testing and fuzzing without file I/O.
pub fn categories_from_slice(bytes: &[u8]) -> Result<Vec<Category>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    let serde_json::Value::Object(mut object) = value else {
        return Err(serde_json::Error::custom(
            "expected a JSON object at the top level",
        ));
    };

    match object.remove("categories") {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(categories) => serde_json::from_value(categories),
    }
}
