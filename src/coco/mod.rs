//! Unannotated COCO documents.
//!
//! This module assembles collected [`ImageInfo`] records and a list of
//! categories borrowed from an existing annotation file into a COCO
//! "test split" document: every image gets a sequential id and the
//! `annotations` list is always empty.
//!
//! # Output Shape
//!
//! ```json
//! {
//!   "images": [{"id": 0, "file_name": "a.jpg", "height": 200, "width": 100}],
//!   "type": "instance",
//!   "categories": [{"id": 1, "name": "cat"}],
//!   "annotations": []
//! }
//! ```

mod categories;
mod io;

pub use categories::{categories_from_slice, load_categories};
pub use io::{to_coco_string, write_coco_json};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::collect::ImageInfo;
use crate::error::{Images2CocoError, Result};

/// A category entry copied verbatim from the categories source file.
///
/// The shape is owned by whoever wrote that file and is never inspected.
pub type Category = serde_json::Value;

/// The value of the top-level `type` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetType {
    #[default]
    Instance,
}

/// One entry of the `images` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocoImage {
    pub id: u64,
    pub file_name: String,
    pub height: u32,
    pub width: u32,
}

/// A complete unannotated COCO document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoDocument {
    pub images: Vec<CocoImage>,

    #[serde(rename = "type")]
    pub dataset_type: DatasetType,

    pub categories: Vec<Category>,

    /// Always empty on output.
    pub annotations: Vec<serde_json::Value>,
}

/// Builds a COCO document from collected images and copied categories.
///
/// Image ids start at 0 and follow input order.
///
/// # Errors
/// Returns [`Images2CocoError::DuplicateFileName`] as soon as a file name
/// repeats. With basename file names this happens whenever two
/// subdirectories hold files of the same name.
pub fn assemble(images: &[ImageInfo], categories: Vec<Category>) -> Result<CocoDocument> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(images.len());
    let mut coco_images = Vec::with_capacity(images.len());

    for (index, info) in images.iter().enumerate() {
        if let Some(&first_index) = seen.get(info.filename.as_str()) {
            return Err(Images2CocoError::DuplicateFileName {
                file_name: info.filename.clone(),
                first_index,
                index,
            });
        }
        seen.insert(info.filename.as_str(), index);

        coco_images.push(CocoImage {
            id: index as u64,
            file_name: info.filename.clone(),
            height: info.height,
            width: info.width,
        });
    }

    Ok(CocoDocument {
        images: coco_images,
        dataset_type: DatasetType::Instance,
        categories,
        annotations: Vec::new(),
    })
}
