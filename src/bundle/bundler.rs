//! External bundler invocation for script entries that import other modules.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{BuildError, BuildResult};

/// Turns an entry file and its imports into one deployable script.
pub trait Bundler {
  /// Bundle `entry`, returning the generated code.
  fn bundle(&self, entry: &Path) -> BuildResult<String>;
}

impl<T: Bundler + ?Sized> Bundler for &T {
  fn bundle(&self, entry: &Path) -> BuildResult<String> {
    (**self).bundle(entry)
  }
}

/// Bundler backed by an external program writing the bundle to stdout.
#[derive(Debug, Clone)]
pub struct CommandBundler {
  program: String,
  args: Vec<String>,
}

impl Default for CommandBundler {
  fn default() -> Self {
    Self::new("esbuild")
  }
}

impl CommandBundler {
  /// Run `program <entry> --bundle --format=iife --log-level=warning`.
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: vec![
        "--bundle".into(),
        "--format=iife".into(),
        "--log-level=warning".into(),
      ],
    }
  }

  /// Replace the arguments passed after the entry path.
  pub fn with_args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args = args.into_iter().map(Into::into).collect();
    self
  }
}

impl Bundler for CommandBundler {
  fn bundle(&self, entry: &Path) -> BuildResult<String> {
    debug!(program = %self.program, entry = %entry.display(), "running bundler");
    let output = Command::new(&self.program)
      .arg(entry)
      .args(&self.args)
      .output()
      .map_err(|err| BuildError::Bundle {
        entry: entry.to_path_buf(),
        message: format!("failed to run `{}`: {err}", self.program),
      })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(BuildError::Bundle {
        entry: entry.to_path_buf(),
        message: format!("`{}` exited with {}: {}", self.program, output.status, stderr.trim()),
      });
    }

    String::from_utf8(output.stdout).map_err(|_| BuildError::Bundle {
      entry: entry.to_path_buf(),
      message: format!("`{}` produced non UTF-8 output", self.program),
    })
  }
}
