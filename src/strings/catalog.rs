//! Locale catalog sources.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BuildError, BuildResult};
use crate::models::{MessageCatalog, MessageRecord};

/// Supplies the full multi-locale message catalog.
pub trait LocaleStore {
  /// Load every locale known to the store.
  fn load(&self) -> BuildResult<MessageCatalog>;
}

impl LocaleStore for MessageCatalog {
  fn load(&self) -> BuildResult<MessageCatalog> {
    Ok(self.clone())
  }
}

impl<T: LocaleStore + ?Sized> LocaleStore for &T {
  fn load(&self) -> BuildResult<MessageCatalog> {
    (**self).load()
  }
}

/// Directory of `<locale>.json` files, each mapping compound identifiers to message records.
#[derive(Debug, Clone)]
pub struct LocaleDirectory {
  dir: PathBuf,
}

impl LocaleDirectory {
  /// Store backed by the given directory.
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// Directory the catalog is read from.
  pub fn dir(&self) -> &Path {
    &self.dir
  }
}

impl LocaleStore for LocaleDirectory {
  fn load(&self) -> BuildResult<MessageCatalog> {
    let entries = fs::read_dir(&self.dir).map_err(|err| {
      BuildError::config(format!(
        "cannot read locale directory {}: {err}",
        self.dir.display()
      ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
      let entry = entry.map_err(BuildError::io("list", &self.dir))?;
      let path = entry.path();
      if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
        files.push(path);
      }
    }
    files.sort();

    let mut catalog = MessageCatalog::new();
    for path in files {
      let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
        continue;
      };
      let content = fs::read_to_string(&path).map_err(BuildError::io("read", &path))?;
      let messages: BTreeMap<String, MessageRecord> = serde_json::from_str(&content)
        .map_err(|err| {
          BuildError::config(format!("invalid locale file {}: {err}", path.display()))
        })?;
      debug!(locale, messages = messages.len(), "loaded locale");
      catalog.insert(locale.to_string(), messages);
    }

    Ok(catalog)
  }
}
