//! End-to-end conversion from an image directory to a COCO file.
//!
//! The pipeline is strictly sequential:
//!
//! 1. validate the config (before touching the filesystem)
//! 2. scan the image root and collect dimensions, failing on the first bad file
//! 3. load categories from the reference annotation file
//! 4. assemble the document, rejecting duplicate file names
//! 5. write the output
//!
//! The output file is only created once every earlier step has succeeded,
//! so a failed run never leaves a partial document behind.

pub mod report;

pub use report::ConvertSummary;

use crate::coco::{assemble, load_categories, write_coco_json};
use crate::collect::collect_image_infos;
use crate::config::ConvertConfig;
use crate::error::Result;
use crate::scan::scan_dir;

/// Runs a full conversion as described by `config`.
///
/// # Errors
/// Returns the first error hit by any step; nothing is written in that case.
pub fn convert(config: &ConvertConfig) -> Result<ConvertSummary> {
    config.validate()?;

    tracing::info!("Scanning images under {}", config.image_root.display());
    let paths = scan_dir(&config.image_root, &config.scan_options());
    let collection = collect_image_infos(paths, &config.collect_options())?;
    tracing::info!(
        "Collected {} image(s), excluded {} file(s)",
        collection.images.len(),
        collection.excluded
    );

    let categories = load_categories(&config.categories_path)?;
    tracing::info!(
        "Loaded {} categories from {}",
        categories.len(),
        config.categories_path.display()
    );

    let document = assemble(&collection.images, categories)?;

    write_coco_json(&config.out, &document, config.pretty)?;
    tracing::debug!("Wrote {}", config.out.display());

    Ok(ConvertSummary {
        output: config.out.clone(),
        images: document.images.len(),
        excluded: collection.excluded,
        categories: document.categories.len(),
    })
}
