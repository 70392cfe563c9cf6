//! Publishing a finished artifact to a hosted location.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::config::{BuildSpec, DeploySpec};
use crate::error::{BuildError, BuildResult};

/// Pushes a built artifact directory somewhere it can be served from.
pub trait PublishTarget {
  /// Publish the contents of `artifact_dir`.
  fn publish(&self, artifact_dir: &Path) -> BuildResult<()>;
}

impl<T: PublishTarget + ?Sized> PublishTarget for &T {
  fn publish(&self, artifact_dir: &Path) -> BuildResult<()> {
    (**self).publish(artifact_dir)
  }
}

/// Commits the artifact into a directory of a git branch and pushes it.
#[derive(Debug, Clone)]
pub struct GitBranchPublisher {
  repo_dir: PathBuf,
  remote: String,
  branch: String,
  dest: String,
  message: String,
}

impl GitBranchPublisher {
  /// Publisher for the repository containing `repo_dir`, configured from the spec's deploy section.
  pub fn from_spec(spec: &BuildSpec, repo_dir: impl Into<PathBuf>) -> Self {
    let DeploySpec {
      remote,
      branch,
      dest,
      message,
    } = spec.deploy_spec();
    Self {
      repo_dir: repo_dir.into(),
      remote,
      branch,
      dest: dest.unwrap_or_else(|| spec.name.clone()),
      message: message.unwrap_or_else(|| format!("Deploy {}", spec.name)),
    }
  }

  fn git(&self, cwd: &Path, args: &[&str]) -> BuildResult<String> {
    debug!(cwd = %cwd.display(), ?args, "running git");
    let output = Command::new("git")
      .args(args)
      .current_dir(cwd)
      .output()
      .map_err(|err| BuildError::Publish(format!("failed to run git: {err}")))?;

    if !output.status.success() {
      return Err(BuildError::Publish(format!(
        "`git {}` failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr).trim()
      )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }
}

impl PublishTarget for GitBranchPublisher {
  fn publish(&self, artifact_dir: &Path) -> BuildResult<()> {
    let url = self.git(&self.repo_dir, &["remote", "get-url", &self.remote])?;
    let staging = tempfile::tempdir().map_err(BuildError::io("create", &std::env::temp_dir()))?;
    let checkout = staging.path();

    self.git(checkout, &[
      "clone",
      "--depth",
      "1",
      "--branch",
      &self.branch,
      &url,
      ".",
    ])?;

    let dest_dir = checkout.join(&self.dest);
    if dest_dir.exists() {
      fs::remove_dir_all(&dest_dir).map_err(BuildError::io("remove", &dest_dir))?;
    }
    copy_tree(artifact_dir, &dest_dir)?;

    self.git(checkout, &["add", "--all", "--", &self.dest])?;
    if self.git(checkout, &["status", "--porcelain"])?.is_empty() {
      info!(branch = %self.branch, dest = %self.dest, "published site already up to date");
      return Ok(());
    }

    self.git(checkout, &["commit", "--quiet", "-m", &self.message])?;
    self.git(checkout, &["push", "--quiet", "origin", &self.branch])?;
    info!(branch = %self.branch, dest = %self.dest, "published artifact");
    Ok(())
  }
}

/// Recursively copy `source` into `destination`, creating directories as needed.
pub(crate) fn copy_tree(source: &Path, destination: &Path) -> BuildResult<()> {
  fs::create_dir_all(destination).map_err(BuildError::io("create", destination))?;

  let mut entries = fs::read_dir(source)
    .map_err(BuildError::io("list", source))?
    .collect::<Result<Vec<_>, _>>()
    .map_err(BuildError::io("list", source))?;
  entries.sort_by_key(|entry| entry.file_name());

  for entry in entries {
    let path = entry.path();
    let target = destination.join(entry.file_name());
    let file_type = entry.file_type().map_err(BuildError::io("inspect", &path))?;
    if file_type.is_dir() {
      copy_tree(&path, &target)?;
    } else {
      fs::copy(&path, &target).map_err(BuildError::io("copy", &path))?;
    }
  }

  Ok(())
}
