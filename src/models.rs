//! Data structures flowing between the build stages.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single localized message as stored in a locale catalog file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessageRecord {
  /// Translated message text.
  pub message: String,
  /// Any additional fields carried by the catalog (descriptions, placeholders).
  #[serde(flatten)]
  pub extra: BTreeMap<String, Value>,
}

impl MessageRecord {
  /// Record carrying only a message.
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      extra: BTreeMap::new(),
    }
  }
}

/// Locale code to compound identifier (`"<sourceFile> | <variableName>"`) to message.
pub type MessageCatalog = BTreeMap<String, BTreeMap<String, MessageRecord>>;

/// Variable name to message template, as declared by one module.
pub type StringDeclaration = BTreeMap<String, String>;

/// Locale code to variable name to message, restricted to one module's declaration.
pub type LocalizedStringTable = BTreeMap<String, BTreeMap<String, MessageRecord>>;

/// Glob pattern evaluated relative to the application directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlobSource {
  /// Pattern such as `styles/*` or `images/**/*`.
  pub path: String,
  /// When set, matching nothing is not an error.
  #[serde(default)]
  pub optional: bool,
}

impl GlobSource {
  /// Mandatory glob for the given pattern.
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      optional: false,
    }
  }
}

/// One entry of the ordered stylesheet list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StylesheetSource {
  /// CSS text appended verbatim.
  Literal(String),
  /// Files whose contents are appended in resolved order.
  Glob(GlobSource),
}

/// Script that is read from disk, optionally through the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScriptFile {
  /// Entry path (bundled) or glob pattern (copied) relative to the application directory.
  pub path: String,
  /// Hand the entry to the bundler instead of copying it.
  #[serde(default)]
  pub bundle: bool,
}

/// Request to generate the per-locale string table for one module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocaleStringsSpec {
  /// Module whose string declaration selects the messages, relative to the application directory.
  pub module: String,
  /// Directory of `<locale>.json` catalog files, relative to the application directory.
  pub locales_dir: String,
  /// Source-file suffix matched against catalog identifiers. Defaults to the module file name.
  #[serde(default)]
  pub suffix: Option<String>,
  /// Global the generated script assigns. Defaults to `strings`.
  #[serde(default)]
  pub global: Option<String>,
  /// Name of the declaration literal inside the module. Defaults to `UIStrings`.
  #[serde(default)]
  pub export_name: Option<String>,
}

impl LocaleStringsSpec {
  /// Default global assigned by the generated script.
  pub const DEFAULT_GLOBAL: &'static str = "strings";
  /// Default declaration name searched for in the module.
  pub const DEFAULT_EXPORT_NAME: &'static str = "UIStrings";

  /// Global identifier the generated script assigns.
  pub fn global(&self) -> &str {
    self.global.as_deref().unwrap_or(Self::DEFAULT_GLOBAL)
  }

  /// Declaration name looked up in the module source.
  pub fn export_name(&self) -> &str {
    self
      .export_name
      .as_deref()
      .unwrap_or(Self::DEFAULT_EXPORT_NAME)
  }

  /// Suffix used to filter catalog identifiers.
  pub fn suffix(&self) -> &str {
    match self.suffix.as_deref() {
      Some(suffix) => suffix,
      None => self
        .module
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(self.module.as_str()),
    }
  }
}

/// One entry of the ordered script list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ScriptSource {
  /// JavaScript text inlined into the page.
  Literal(String),
  /// Locale strings generated at build time and inlined into the page.
  Strings {
    /// Generation parameters.
    strings: LocaleStringsSpec,
  },
  /// Script read from disk.
  File(ScriptFile),
}

/// Asset scheduled for copying into the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCopy {
  /// Absolute source file.
  pub source: PathBuf,
  /// Destination relative to the output directory.
  pub destination: PathBuf,
}

/// Intermediate material produced by [`crate::bundle::pipeline::AssetPipeline`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedAssets {
  /// Aggregated stylesheet text.
  pub css: String,
  /// Script sources in declaration order, untouched.
  pub scripts: Vec<ScriptSource>,
  /// Asset files in pattern order, each pattern's matches sorted.
  pub files: Vec<AssetCopy>,
}

/// Stages a build passes through, strictly in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildStage {
  /// Specification accepted, template located.
  Init,
  /// Generated locale string scripts are available.
  StringsReady,
  /// Stylesheets, scripts and assets are resolved.
  AssetsComposed,
  /// HTML document rendered in memory.
  Rendered,
  /// Output directory fully written.
  Written,
  /// Artifact handed to the publish target.
  Deployed,
}

impl BuildStage {
  /// The only stage reachable from this one.
  pub fn next(self) -> Option<BuildStage> {
    match self {
      BuildStage::Init => Some(BuildStage::StringsReady),
      BuildStage::StringsReady => Some(BuildStage::AssetsComposed),
      BuildStage::AssetsComposed => Some(BuildStage::Rendered),
      BuildStage::Rendered => Some(BuildStage::Written),
      BuildStage::Written => Some(BuildStage::Deployed),
      BuildStage::Deployed => None,
    }
  }
}

/// Directory tree produced by one successful build.
///
/// Only [`crate::AppBuilder::build`] constructs artifacts, so holding one proves the
/// output was written.
#[derive(Debug)]
pub struct BuildArtifact {
  pub(crate) root: PathBuf,
  pub(crate) entry_html: PathBuf,
  pub(crate) written: Vec<PathBuf>,
  pub(crate) stage: BuildStage,
}

impl BuildArtifact {
  /// Output directory.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Rendered HTML entry point.
  pub fn entry_html(&self) -> &Path {
    &self.entry_html
  }

  /// Every file written, in write order.
  pub fn written(&self) -> &[PathBuf] {
    &self.written
  }

  /// Stage the artifact has reached.
  pub fn stage(&self) -> BuildStage {
    self.stage
  }

  /// Serializable summary with paths relative to the output directory.
  pub fn summary(&self) -> ArtifactSummary {
    ArtifactSummary {
      root: self.root.to_string_lossy().replace('\\', "/"),
      files: self
        .written
        .iter()
        .map(|path| {
          path
            .strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
        })
        .collect(),
    }
  }
}

/// Serializable manifest of a build artifact.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ArtifactSummary {
  /// Output directory.
  pub root: String,
  /// Files written, relative to the root, forward-slash separated.
  pub files: Vec<String>,
}
