//! Image metadata collection.
//!
//! Turns the file paths produced by the scanner into [`ImageInfo`] records by
//! reading each image's pixel dimensions from its header with `imagesize`.
//! Pixel data is never decoded.
//!
//! Collection is fail-fast: the first path that cannot be scanned or read as
//! an image aborts the whole collection, and no partial result is returned.

mod exclude;

pub use exclude::ExcludeExtensions;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{Images2CocoError, Result};

/// How collected file names are derived from scanned paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileNameMode {
    /// The final path component only (`dir/a.jpg` becomes `a.jpg`).
    #[default]
    Basename,
    /// The path exactly as produced by the scanner, root prefix included.
    FullPath,
}

/// Basic metadata for one image file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub filename: String,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    pub fn new(filename: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            filename: filename.into(),
            width,
            height,
        }
    }
}

/// Options for [`collect_image_infos`].
#[derive(Clone, Debug, Default)]
pub struct CollectOptions {
    /// Extensions to skip. `None` keeps every scanned file.
    pub exclude: Option<ExcludeExtensions>,
    pub file_name_mode: FileNameMode,
}

/// The result of collecting image metadata.
#[derive(Clone, Debug, Default)]
pub struct ImageCollection {
    /// One record per kept file, in scan order.
    pub images: Vec<ImageInfo>,
    /// Number of scanned files skipped by the exclusion set.
    pub excluded: usize,
}

/// Collects image metadata for every scanned path not excluded by `options`.
///
/// Output order matches input order; nothing is sorted here.
///
/// # Errors
/// Propagates the first scan error from `paths`. For the first kept file
/// whose dimensions cannot be read returns [`Images2CocoError::ImageDecode`]
/// or [`Images2CocoError::InvalidDimensions`], and for a file name that is
/// not UTF-8 returns [`Images2CocoError::NonUtf8FileName`].
pub fn collect_image_infos<I>(paths: I, options: &CollectOptions) -> Result<ImageCollection>
where
    I: IntoIterator<Item = Result<PathBuf>>,
{
    let mut collection = ImageCollection::default();

    for path in paths {
        let path = path?;

        if let Some(exclude) = &options.exclude {
            if exclude.matches(&path) {
                tracing::debug!("Excluding {}", path.display());
                collection.excluded += 1;
                continue;
            }
        }

        let (width, height) = read_image_dimensions(&path)?;
        let filename = file_name_for(&path, options.file_name_mode)?;
        tracing::trace!("{}: {}x{}", filename, width, height);

        collection
            .images
            .push(ImageInfo::new(filename, width, height));
    }

    Ok(collection)
}

/// Reads `(width, height)` from an image header.
///
/// BMP stores its height as a signed field where a negative value marks a
/// top-down bitmap; the magnitude is the height.
///
/// # Errors
/// Returns [`Images2CocoError::ImageDecode`] if the header cannot be parsed
/// and [`Images2CocoError::InvalidDimensions`] if a dimension is above
/// `i32::MAX` once decoded.
pub fn read_image_dimensions(path: &Path) -> Result<(u32, u32)> {
    let decode_err = |source: imagesize::ImageError| Images2CocoError::ImageDecode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| decode_err(e.into()))?;
    let mut reader = BufReader::new(file);
    let image_type = imagesize::reader_type(&mut reader).map_err(decode_err)?;
    let size = image_type.reader_size(&mut reader).map_err(decode_err)?;

    let width = header_dimension(size.width);
    let height = match image_type {
        imagesize::ImageType::Bmp => bmp_height(size.height),
        _ => header_dimension(size.height),
    };

    match (width, height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(Images2CocoError::InvalidDimensions {
            path: path.to_path_buf(),
            width: size.width,
            height: size.height,
        }),
    }
}

fn header_dimension(value: usize) -> Option<u32> {
    u32::try_from(value).ok().filter(|&v| v <= i32::MAX as u32)
}

/// imagesize reads the BMP height field as unsigned.
fn bmp_height(value: usize) -> Option<u32> {
    let raw = u32::try_from(value).ok()?;
    Some((raw as i32).unsigned_abs()).filter(|&h| h <= i32::MAX as u32)
}

/// Non-UTF-8 names are rejected; lossy conversion could merge distinct names.
fn file_name_for(path: &Path, mode: FileNameMode) -> Result<String> {
    let name = match mode {
        FileNameMode::Basename => path.file_name().map(Path::new).unwrap_or(path),
        FileNameMode::FullPath => path,
    };

    name.to_str()
        .map(str::to_owned)
        .ok_or_else(|| Images2CocoError::NonUtf8FileName {
            path: path.to_path_buf(),
        })
}
