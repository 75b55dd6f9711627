//! Writing COCO documents to disk.

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::CocoDocument;
use crate::error::{Images2CocoError, Result};

/// Writes a COCO document to a JSON file.
///
/// The document goes to a temporary file next to `path` that is renamed
/// into place once fully written, so `path` holds either the complete
/// document or whatever it held before. Output is compact unless `pretty`
/// is set.
///
/// # Errors
/// Returns an error if the file cannot be created, written or renamed.
pub fn write_coco_json(path: &Path, document: &CocoDocument, pretty: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(dir).map_err(Images2CocoError::Io)?;
    let mut writer = BufWriter::new(temp);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, document)
    } else {
        serde_json::to_writer(&mut writer, document)
    };
    written.map_err(|source| Images2CocoError::CocoJsonWrite {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(Images2CocoError::Io)?;

    let temp = writer
        .into_inner()
        .map_err(|err| Images2CocoError::Io(err.into_error()))?;
    temp.persist(path)
        .map_err(|err| Images2CocoError::Io(err.error))?;
    Ok(())
}

/// Serializes a COCO document to a compact JSON string.
///
/// Useful for testing without file I/O.
pub fn to_coco_string(document: &CocoDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string(document)
}
