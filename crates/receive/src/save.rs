use std::path::{Path, PathBuf};

use tracing::info;

use notebridge_progress::ProgressUpdate;

use crate::validation::validate_file_name;
use crate::{IncomingFile, ReceiveError};

/// Writes uploaded files under `dest`, reporting per-file progress.
///
/// Creates `dest` (and any subdirectories named by the files) as needed.
/// After each file the sink receives `((i + 1) / count) * 100`, followed
/// by a terminal success update. On any failure the sink receives a
/// failure update with the underlying message and the operation aborts;
/// files already written stay on disk, the failed one is not exposed as
/// saved.
///
/// Returns the full paths of the saved files, in input order.
pub fn save_files(
    dest: &Path,
    files: &[IncomingFile],
    mut on_progress: impl FnMut(ProgressUpdate),
) -> Result<Vec<PathBuf>, ReceiveError> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let result = save_all(dest, files, &mut on_progress);
    match &result {
        Ok(saved) => {
            on_progress(ProgressUpdate::success());
            info!(count = saved.len(), dest = %dest.display(), "upload saved");
        }
        Err(e) => on_progress(ProgressUpdate::failure(e.to_string())),
    }
    result
}

fn save_all(
    dest: &Path,
    files: &[IncomingFile],
    on_progress: &mut impl FnMut(ProgressUpdate),
) -> Result<Vec<PathBuf>, ReceiveError> {
    std::fs::create_dir_all(dest)?;

    let count = files.len();
    let mut saved = Vec::with_capacity(count);
    for (i, file) in files.iter().enumerate() {
        // Validate before joining to keep writes inside `dest`.
        validate_file_name(&file.name)?;

        let path = dest.join(&file.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &file.data)?;

        let percent = ((i + 1) * 100 / count) as u8;
        on_progress(ProgressUpdate::at(percent));
        saved.push(path);
    }

    Ok(saved)
}
