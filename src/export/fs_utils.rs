use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Make sure the destination is writable: parent directory exists and an
/// existing file is only replaced under --force.
pub fn prepare_destination(path: &str, force: bool) -> AppResult<()> {
    let dest = Path::new(path);

    if dest.exists() && !force {
        return Err(AppError::Export(format!(
            "file '{}' already exists (use --force to overwrite)",
            dest.display()
        )));
    }

    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}
