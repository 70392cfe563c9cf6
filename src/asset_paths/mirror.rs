use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

/// Map a resolved source file to its location inside the artifact by stripping `base_dir`.
pub fn mirror_destination(base_dir: &Path, source: &Path) -> BuildResult<PathBuf> {
    let base = std::path::absolute(base_dir).map_err(BuildError::io("resolve", base_dir))?;
    source
        .strip_prefix(&base)
        .map(Path::to_path_buf)
        .map_err(|_| {
            BuildError::config(format!(
                "{} is outside the application directory {}",
                source.display(),
                base.display()
            ))
        })
}

/// Produce the URL form of an artifact-relative path.
///
/// The generated path always uses forward slashes so that references embedded in the page
/// work on every platform, regardless of the native directory separator that was used when
/// the files were discovered on disk.
pub fn url_path(relative: &Path) -> String {
    relative.to_string_lossy().replace('\\', "/")
}
