//! Atomic replacement of settings files on disk.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replaces the contents of `path` with `text` in one atomic step.
///
/// The text is written to a temporary file in the destination directory
/// and then renamed over `path`. A crash or a failed write therefore never
/// leaves a truncated file behind: either the old contents survive intact
/// or the new contents are fully in place.
///
/// # Errors
///
/// Any I/O failure while creating, writing, or renaming the temporary
/// file. On failure the destination file is untouched.
pub fn write_file_atomic(path: &Path, text: &str) -> io::Result<()> {
    // The temp file must live on the same filesystem as the destination
    // for the rename to be atomic.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
