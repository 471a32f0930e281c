//! Write-then-rename so a failed write never leaves partial output.

use crate::error::{PipelineError, PipelineResult};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

/// Stage the output in a temporary file beside `destination`, then move it
/// into place once `write` succeeds.
///
/// On any error the temporary file is removed and an existing destination
/// keeps its previous content.
pub(crate) fn write_atomically<F>(destination: &Path, write: F) -> PipelineResult<()>
where
    F: FnOnce(&mut NamedTempFile) -> PipelineResult<()>,
{
    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;

    let mut staged = NamedTempFile::new_in(parent).map_err(|e| PipelineError::io(parent, e))?;
    write(&mut staged)?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| PipelineError::io(staged.path(), e))?;

    staged
        .persist(destination)
        .map_err(|e| PipelineError::io(destination, e.error))?;
    Ok(())
}
