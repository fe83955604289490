use std::path::{Component, Path};

use crate::ReceiveError;

/// Validates that an uploaded file name stays inside the destination.
///
/// Rejects:
/// - Empty names
/// - Absolute paths (Unix `/` or Windows `C:\`)
/// - Parent directory traversal (`..`)
/// - Windows prefix components (`C:`, `\\server`)
///
/// Relative subdirectory paths (`sub/file.txt`) are allowed.
pub fn validate_file_name(name: &str) -> Result<(), ReceiveError> {
    if name.is_empty() {
        return Err(ReceiveError::InvalidPath("empty file name".into()));
    }

    let path = Path::new(name);

    if path.is_absolute() {
        return Err(ReceiveError::InvalidPath(format!(
            "absolute path not allowed: {name}"
        )));
    }

    for component in path.components() {
        match component {
            Component::ParentDir => {
                return Err(ReceiveError::InvalidPath(format!(
                    "parent directory traversal not allowed: {name}"
                )));
            }
            Component::Prefix(_) => {
                return Err(ReceiveError::InvalidPath(format!(
                    "path prefix not allowed: {name}"
                )));
            }
            Component::RootDir => {
                return Err(ReceiveError::InvalidPath(format!(
                    "absolute path not allowed: {name}"
                )));
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    Ok(())
}
