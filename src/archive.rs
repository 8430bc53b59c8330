//! In-memory zip assembly
//!
//! The whole archive is materialized in one buffer. This is an explicit
//! memory-bound assumption: the listing API is unpaginated and folders are
//! expected to be of moderate size, so streaming assembly is not worth its
//! complexity here.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Build one compressed zip buffer from archive-relative paths to bytes
///
/// Exactly one entry per map key, with the key as the entry's internal path.
/// Entry order inside the archive is unspecified; no consumer may rely on it.
pub fn build_zip(entries: &HashMap<String, Vec<u8>>) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, bytes) in entries {
        writer
            .start_file(path.as_str(), options)
            .map_err(|e| Error::Archive(e.to_string()))?;
        writer
            .write_all(bytes)
            .map_err(|e| Error::Archive(e.to_string()))?;
    }

    let cursor = writer.finish().map_err(|e| Error::Archive(e.to_string()))?;
    Ok(cursor.into_inner())
}
