//! Error taxonomy shared by every build stage.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::BuildStage;

/// Result alias used across the crate.
pub type BuildResult<T> = Result<T, BuildError>;

/// Failure that aborts a `build` or `deploy` call.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The build specification is malformed or references something that does not exist.
  #[error("configuration error: {0}")]
  Config(String),
  /// A mandatory glob pattern matched no files.
  #[error("no files matched `{pattern}` under {}", .base_dir.display())]
  Resolution {
    /// Pattern as written in the build specification.
    pattern: String,
    /// Directory the pattern was resolved against.
    base_dir: PathBuf,
  },
  /// The string declaration could not be extracted from a module.
  #[error("failed to read string declaration from {}: {reason}", .module.display())]
  Introspection {
    /// Module whose source was inspected.
    module: PathBuf,
    /// Human readable cause.
    reason: String,
  },
  /// The external bundler rejected an entry point.
  #[error("bundling {} failed: {message}", .entry.display())]
  Bundle {
    /// Entry file handed to the bundler.
    entry: PathBuf,
    /// Diagnostic output reported by the bundler.
    message: String,
  },
  /// The publish target refused or failed to accept the artifact.
  #[error("publish failed: {0}")]
  Publish(String),
  /// Filesystem access failed.
  #[error("failed to {action} {}", .path.display())]
  Io {
    /// Verb describing the attempted operation.
    action: &'static str,
    /// Path involved in the failure.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The orchestrator attempted a transition its state machine does not allow.
  #[error("cannot move from {from:?} to {to:?}")]
  Stage {
    /// Stage the build was in.
    from: BuildStage,
    /// Stage that was requested.
    to: BuildStage,
  },
}

impl BuildError {
  /// Build a closure that wraps an I/O error with the path it concerned.
  pub fn io(action: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> BuildError {
    let path = path.to_path_buf();
    move |source| BuildError::Io {
      action,
      path,
      source,
    }
  }

  pub(crate) fn config(message: impl Into<String>) -> Self {
    BuildError::Config(message.into())
  }
}
