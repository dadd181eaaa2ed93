//! Reading and writing files with typed errors.

use crate::error::{IoError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Maximum file size to read into memory (1GB).
const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Reads a UTF-8 file to a string.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist and
/// [`IoError::ReadFailed`] if it cannot be read, is too large, or is not
/// valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use entitydeps::io::read_file;
///
/// let content = read_file("analyses.json").unwrap();
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if !path_ref.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }

    let size = std::fs::metadata(path_ref)
        .map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?
        .len();
    if size > MAX_FILE_SIZE {
        return Err(IoError::ReadFailed {
            path: path_str,
            reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
        }
        .into());
    }

    let content = std::fs::read_to_string(path_ref).map_err(|e| IoError::ReadFailed {
        path: path_str,
        reason: e.to_string(),
    })?;
    Ok(content)
}

/// Reads and deserializes a JSON file.
///
/// # Errors
///
/// Returns the errors of [`read_file`], and [`IoError::Json`] if the content
/// does not match `T`.
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = read_file(path)?;
    let value = serde_json::from_str(&content).map_err(IoError::from)?;
    Ok(value)
}

/// Writes content to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns [`IoError::DirectoryFailed`] or [`IoError::WriteFailed`].
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    // Create parent directories
    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}
