//! Compose ordered stylesheet, script and asset lists into build material.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::asset_paths::{mirror_destination, resolve_required};
use crate::error::{BuildError, BuildResult};
use crate::models::{AssetCopy, ComposedAssets, GlobSource, ScriptSource, StylesheetSource};

/// Resolves a build specification's source lists against the application directory.
#[derive(Debug, Clone)]
pub struct AssetPipeline<'a> {
  app_dir: &'a Path,
  exclude_dir: Option<PathBuf>,
}

impl<'a> AssetPipeline<'a> {
  /// Pipeline resolving every pattern beneath `app_dir`.
  pub fn new(app_dir: &'a Path) -> Self {
    Self {
      app_dir,
      exclude_dir: None,
    }
  }

  /// Ignore every match located inside `dir`, typically the output directory.
  pub fn excluding(mut self, dir: &Path) -> BuildResult<Self> {
    let dir = std::path::absolute(dir).map_err(BuildError::io("resolve", dir))?;
    self.exclude_dir = Some(dir);
    Ok(self)
  }

  /// Resolve all three lists, preserving declaration order.
  pub fn compose(
    &self,
    stylesheets: &[StylesheetSource],
    scripts: &[ScriptSource],
    assets: &[GlobSource],
  ) -> BuildResult<ComposedAssets> {
    Ok(ComposedAssets {
      css: self.compose_css(stylesheets)?,
      scripts: scripts.to_vec(),
      files: self.compose_files(assets)?,
    })
  }

  /// Concatenate literal stylesheets and glob-matched files in declaration order.
  pub fn compose_css(&self, stylesheets: &[StylesheetSource]) -> BuildResult<String> {
    let mut pieces = Vec::with_capacity(stylesheets.len());
    for sheet in stylesheets {
      match sheet {
        StylesheetSource::Literal(css) => pieces.push(css.clone()),
        StylesheetSource::Glob(glob) => {
          let files = self.matches(&glob.path, glob.optional)?;
          debug!(pattern = %glob.path, matches = files.len(), "resolved stylesheets");
          pieces.extend(read_all(&files)?);
        }
      }
    }
    Ok(pieces.join("\n"))
  }

  /// Map every matched asset to its artifact-relative destination.
  pub fn compose_files(&self, assets: &[GlobSource]) -> BuildResult<Vec<AssetCopy>> {
    let mut seen = BTreeSet::new();
    let mut files = Vec::new();

    for asset in assets {
      let matches = self.matches(&asset.path, asset.optional)?;
      debug!(pattern = %asset.path, matches = matches.len(), "resolved assets");
      for source in matches {
        let destination = mirror_destination(self.app_dir, &source)?;
        if seen.insert(destination.clone()) {
          files.push(AssetCopy {
            source,
            destination,
          });
        }
      }
    }

    Ok(files)
  }

  /// Resolve a copied script glob, which must match at least one file.
  pub fn script_sources(&self, pattern: &str) -> BuildResult<Vec<PathBuf>> {
    self.matches(pattern, false)
  }

  fn matches(&self, pattern: &str, optional: bool) -> BuildResult<Vec<PathBuf>> {
    resolve_required(pattern, self.app_dir, optional, self.exclude_dir.as_deref())
  }
}

/// Read files in parallel, returning contents in input order.
pub(crate) fn read_all(files: &[PathBuf]) -> BuildResult<Vec<String>> {
  files
    .par_iter()
    .map(|path| fs::read_to_string(path).map_err(BuildError::io("read", path)))
    .collect()
}
