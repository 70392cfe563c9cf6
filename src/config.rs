//! Build specification loader describing what goes into the packaged app.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::error::{BuildError, BuildResult};
use crate::models::{GlobSource, ScriptSource, StylesheetSource};

/// File looked up in the working directory when no specification path is given.
pub const DEFAULT_SPEC_FILE: &str = "pages.config.json";

/// Declarative description of one packaged application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildSpec {
  /// Application identifier, used for the output directory and publish destination.
  pub name: String,
  /// Source root every relative path is resolved against.
  pub app_dir: PathBuf,
  /// Output directory. Defaults to `dist/<name>`.
  #[serde(default)]
  pub out_dir: Option<PathBuf>,
  /// HTML shell template.
  pub html: HtmlSpec,
  /// Stylesheets, concatenated in this order.
  pub stylesheets: Vec<StylesheetSource>,
  /// Scripts, referenced from the page in this order.
  pub javascripts: Vec<ScriptSource>,
  /// Static assets copied into the artifact.
  pub assets: Vec<GlobSource>,
  /// Where `--deploy` publishes the artifact.
  #[serde(default)]
  pub deploy: Option<DeploySpec>,
}

/// HTML template reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HtmlSpec {
  /// Template path relative to the application directory.
  pub path: String,
  /// Literal substitutions applied to the template before injection.
  #[serde(default)]
  pub replacements: BTreeMap<String, String>,
}

/// Publishing configuration for the git branch target.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeploySpec {
  /// Git remote whose URL receives the push.
  #[serde(default = "default_remote")]
  pub remote: String,
  /// Branch holding published sites.
  #[serde(default = "default_branch")]
  pub branch: String,
  /// Directory inside the branch. Defaults to the application name.
  #[serde(default)]
  pub dest: Option<String>,
  /// Commit message. Defaults to `Deploy <name>`.
  #[serde(default)]
  pub message: Option<String>,
}

impl Default for DeploySpec {
  fn default() -> Self {
    Self {
      remote: default_remote(),
      branch: default_branch(),
      dest: None,
      message: None,
    }
  }
}

fn default_remote() -> String {
  "origin".into()
}

fn default_branch() -> String {
  "gh-pages".into()
}

impl BuildSpec {
  /// Load the specification from `pages.config.json` inside `dir`.
  pub fn discover(dir: &Path) -> BuildResult<Self> {
    Self::from_path(&dir.join(DEFAULT_SPEC_FILE))
  }

  /// Read, anchor and validate a specification file.
  ///
  /// `.yaml`/`.yml` files are parsed as YAML, everything else as JSON. Relative `appDir` and
  /// `outDir` values are resolved against the directory containing the file.
  pub fn from_path(path: &Path) -> BuildResult<Self> {
    let content = fs::read_to_string(path).map_err(|err| {
      BuildError::config(format!("cannot read build spec {}: {err}", path.display()))
    })?;

    let is_yaml = matches!(
      path.extension().and_then(|ext| ext.to_str()),
      Some("yaml" | "yml")
    );
    let spec: BuildSpec = if is_yaml {
      serde_yaml::from_str(&content).map_err(|err| {
        BuildError::config(format!("invalid build spec {}: {err}", path.display()))
      })?
    } else {
      serde_json::from_str(&content).map_err(|err| {
        BuildError::config(format!("invalid build spec {}: {err}", path.display()))
      })?
    };

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let spec = spec.anchored(base);
    spec.validate()?;
    Ok(spec)
  }

  /// Resolve relative directories against `base`.
  pub fn anchored(mut self, base: &Path) -> Self {
    let out_dir = self.output_dir();
    self.out_dir = Some(base.join(out_dir));
    self.app_dir = base.join(&self.app_dir);
    self
  }

  /// Output directory, falling back to `dist/<name>`.
  pub fn output_dir(&self) -> PathBuf {
    match &self.out_dir {
      Some(dir) => dir.clone(),
      None => PathBuf::from("dist").join(&self.name),
    }
  }

  /// Absolute-or-anchored template path.
  pub fn html_path(&self) -> PathBuf {
    self.app_dir.join(&self.html.path)
  }

  /// Publishing configuration, defaulted when the section is absent.
  pub fn deploy_spec(&self) -> DeploySpec {
    self.deploy.clone().unwrap_or_default()
  }

  /// Reject specifications that cannot produce a meaningful build.
  pub fn validate(&self) -> BuildResult<()> {
    let name = self.name.trim();
    if name.is_empty() {
      return Err(BuildError::config("`name` must not be empty"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
      return Err(BuildError::config(format!(
        "`name` must be a single path segment, got `{}`",
        self.name
      )));
    }
    if self.html.path.trim().is_empty() {
      return Err(BuildError::config("`html.path` must not be empty"));
    }
    if self.html.replacements.keys().any(|needle| needle.is_empty()) {
      return Err(BuildError::config("`html.replacements` keys must not be empty"));
    }

    for sheet in &self.stylesheets {
      if let StylesheetSource::Glob(glob) = sheet {
        require_pattern("stylesheets", &glob.path)?;
      }
    }

    for script in &self.javascripts {
      match script {
        ScriptSource::Literal(_) => {}
        ScriptSource::File(file) => require_pattern("javascripts", &file.path)?,
        ScriptSource::Strings { strings } => {
          require_pattern("javascripts.strings.module", &strings.module)?;
          require_pattern("javascripts.strings.localesDir", &strings.locales_dir)?;
          if !is_js_identifier(strings.global()) {
            return Err(BuildError::config(format!(
              "`{}` is not a valid JavaScript identifier",
              strings.global()
            )));
          }
          if !is_js_identifier(strings.export_name()) {
            return Err(BuildError::config(format!(
              "`{}` is not a valid declaration name",
              strings.export_name()
            )));
          }
        }
      }
    }

    for asset in &self.assets {
      require_pattern("assets", &asset.path)?;
    }

    if let Some(deploy) = &self.deploy {
      if deploy.branch.trim().is_empty() || deploy.remote.trim().is_empty() {
        return Err(BuildError::config("`deploy.remote` and `deploy.branch` must not be empty"));
      }
      if let Some(dest) = &deploy.dest {
        if dest.trim_matches('/').is_empty() || dest.split('/').any(|part| part == "..") {
          return Err(BuildError::config(format!("invalid `deploy.dest` `{dest}`")));
        }
      }
    }

    Ok(())
  }
}

fn require_pattern(field: &str, value: &str) -> BuildResult<()> {
  if value.trim().is_empty() {
    Err(BuildError::config(format!("`{field}` entries need a non-empty `path`")))
  } else {
    Ok(())
  }
}

fn is_js_identifier(value: &str) -> bool {
  use std::sync::OnceLock;

  static IDENT: OnceLock<Regex> = OnceLock::new();
  IDENT
    .get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("invalid identifier regex"))
    .is_match(value)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  const TREEMAP_SPEC: &str = r#"{
    "name": "treemap",
    "appDir": "app",
    "html": {"path": "index.html"},
    "stylesheets": ["body { margin: 0; }", {"path": "styles/*"}],
    "javascripts": [
      {"strings": {"module": "src/util.js", "localesDir": "../locales"}},
      {"path": "src/main.js", "bundle": true}
    ],
    "assets": [{"path": "images/**/*"}, {"path": "debug.json"}]
  }"#;

  #[test]
  fn loads_json_and_anchors_relative_paths() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_SPEC_FILE);
    fs::write(&path, TREEMAP_SPEC).unwrap();

    let spec = BuildSpec::discover(dir.path()).unwrap();
    assert_eq!(spec.name, "treemap");
    assert_eq!(spec.app_dir, dir.path().join("app"));
    assert_eq!(spec.output_dir(), dir.path().join("dist").join("treemap"));
    assert_eq!(spec.html_path(), dir.path().join("app").join("index.html"));
    assert_eq!(spec.stylesheets.len(), 2);
    assert_eq!(spec.javascripts.len(), 2);
    assert_eq!(spec.assets.len(), 2);
    assert!(spec.deploy.is_none());
    assert_eq!(spec.deploy_spec().branch, "gh-pages");
  }

  #[test]
  fn loads_yaml_specs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pages.yaml");
    fs::write(
      &path,
      "name: viewer\nappDir: .\nhtml:\n  path: index.html\nstylesheets: []\njavascripts:\n  - \"init();\"\nassets: []\ndeploy:\n  branch: pages\n",
    )
    .unwrap();

    let spec = BuildSpec::from_path(&path).unwrap();
    assert_eq!(spec.name, "viewer");
    assert_eq!(spec.javascripts, vec![ScriptSource::Literal("init();".into())]);
    let deploy = spec.deploy_spec();
    assert_eq!(deploy.branch, "pages");
    assert_eq!(deploy.remote, "origin");
  }

  #[test]
  fn missing_file_is_a_config_error() {
    let dir = tempdir().unwrap();
    let err = BuildSpec::discover(dir.path()).unwrap_err();
    assert!(matches!(err, BuildError::Config(_)));
  }

  #[test]
  fn unknown_fields_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spec.json");
    fs::write(
      &path,
      r#"{"name": "a", "appDir": ".", "html": {"path": "i.html"}, "stylesheets": [], "javascripts": [], "assets": [], "asets": []}"#,
    )
    .unwrap();
    assert!(matches!(BuildSpec::from_path(&path), Err(BuildError::Config(_))));
  }

  #[test]
  fn required_lists_must_be_present() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spec.json");
    fs::write(&path, r#"{"name": "a", "appDir": ".", "html": {"path": "i.html"}}"#).unwrap();
    assert!(matches!(BuildSpec::from_path(&path), Err(BuildError::Config(_))));
  }

  #[test]
  fn validation_rejects_bad_names_and_identifiers() {
    let mut spec: BuildSpec = serde_json::from_str(TREEMAP_SPEC).unwrap();
    assert!(spec.validate().is_ok());

    spec.name = "nested/name".into();
    assert!(matches!(spec.validate(), Err(BuildError::Config(_))));

    spec.name = "treemap".into();
    if let ScriptSource::Strings { strings } = &mut spec.javascripts[0] {
      strings.global = Some("not an ident".into());
    }
    assert!(matches!(spec.validate(), Err(BuildError::Config(_))));
  }

  #[test]
  fn validation_rejects_empty_patterns() {
    let mut spec: BuildSpec = serde_json::from_str(TREEMAP_SPEC).unwrap();
    spec.assets.push(GlobSource::new(" "));
    assert!(matches!(spec.validate(), Err(BuildError::Config(_))));
  }

  #[test]
  fn identifier_check_accepts_js_names() {
    assert!(is_js_identifier("strings"));
    assert!(is_js_identifier("$lh_strings2"));
    assert!(!is_js_identifier("2strings"));
    assert!(!is_js_identifier("a-b"));
  }
}
