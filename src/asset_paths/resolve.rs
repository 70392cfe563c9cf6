use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::warn;

use super::url_path;
use crate::error::{BuildError, BuildResult};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Resolve `pattern` beneath `base_dir` into absolute file paths, sorted lexicographically.
///
/// Ordering compares the forward-slash string form of each path, so `a-b/x.css` comes before
/// `a/x.css` on every platform.
///
/// Directories are never returned and a pattern matching nothing yields an empty list. Only
/// a syntactically invalid pattern is an error.
pub fn resolve(pattern: &str, base_dir: &Path) -> BuildResult<Vec<PathBuf>> {
    let base = std::path::absolute(base_dir).map_err(BuildError::io("resolve", base_dir))?;
    let escaped_base = Pattern::escape(&base.to_string_lossy());
    let full_pattern = format!(
        "{}/{}",
        escaped_base.trim_end_matches(['/', '\\']),
        pattern.trim_start_matches("./")
    );

    let entries = glob::glob_with(&full_pattern, MATCH_OPTIONS)
        .map_err(|err| BuildError::config(format!("invalid glob pattern `{pattern}`: {err}")))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(err) => warn!(pattern, error = %err, "skipping unreadable glob match"),
        }
    }

    files.sort_by_cached_key(|path| url_path(path));
    Ok(files)
}

/// Resolve a pattern that must match at least one file unless marked optional.
///
/// Matches located under `excluded` are dropped before the check, so a pattern whose only
/// matches live there is treated as matching nothing.
pub fn resolve_required(
    pattern: &str,
    base_dir: &Path,
    optional: bool,
    excluded: Option<&Path>,
) -> BuildResult<Vec<PathBuf>> {
    let mut files = resolve(pattern, base_dir)?;
    if let Some(excluded) = excluded {
        files.retain(|path| !path.starts_with(excluded));
    }
    if files.is_empty() && !optional {
        return Err(BuildError::Resolution {
            pattern: pattern.to_string(),
            base_dir: base_dir.to_path_buf(),
        });
    }
    Ok(files)
}
