//! Build orchestrator: strings, composition, rendering, writing and optional publishing.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use same_file::is_same_file;
use tracing::{debug, info, warn};

use crate::asset_paths::url_path;
use crate::bundle::pipeline::read_all;
use crate::bundle::{AssetPipeline, Bundler, PublishTarget, ScriptTag, render_page};
use crate::config::BuildSpec;
use crate::error::{BuildError, BuildResult};
use crate::models::{AssetCopy, BuildArtifact, BuildStage, ComposedAssets, ScriptSource};
use crate::strings::{ModuleIntrospector, generate_strings_script};

/// Aggregated stylesheet location inside the artifact.
pub const STYLESHEET_FILE: &str = "styles/bundled.css";

/// Directory holding emitted script files inside the artifact.
pub const SCRIPTS_DIR: &str = "scripts";

/// High-level driver turning a [`BuildSpec`] into a [`BuildArtifact`].
pub struct AppBuilder<'a, B, I> {
  spec: &'a BuildSpec,
  bundler: B,
  introspector: I,
}

/// How one script source is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlannedScript {
  Inline(String),
  Bundle { entry: PathBuf, file: PathBuf },
  Concat { sources: Vec<PathBuf>, file: PathBuf },
}

impl PlannedScript {
  fn tag(&self) -> ScriptTag {
    match self {
      PlannedScript::Inline(code) => ScriptTag::Inline(code.clone()),
      PlannedScript::Bundle { file, .. } | PlannedScript::Concat { file, .. } => {
        ScriptTag::External(url_path(file))
      }
    }
  }

  fn file(&self) -> Option<&Path> {
    match self {
      PlannedScript::Inline(_) => None,
      PlannedScript::Bundle { file, .. } | PlannedScript::Concat { file, .. } => Some(file),
    }
  }
}

/// Enforces the linear stage order of a single build.
#[derive(Debug)]
struct StageTracker {
  current: BuildStage,
}

impl StageTracker {
  fn new() -> Self {
    Self {
      current: BuildStage::Init,
    }
  }

  fn advance(&mut self, to: BuildStage) -> BuildResult<()> {
    if self.current.next() != Some(to) {
      return Err(BuildError::Stage {
        from: self.current,
        to,
      });
    }
    debug!(from = ?self.current, ?to, "build stage reached");
    self.current = to;
    Ok(())
  }
}

impl<'a, B: Bundler, I: ModuleIntrospector> AppBuilder<'a, B, I> {
  /// Create a builder for the provided specification and collaborators.
  pub fn new(spec: &'a BuildSpec, bundler: B, introspector: I) -> Self {
    Self {
      spec,
      bundler,
      introspector,
    }
  }

  /// Run every stage through `Written` and return the artifact.
  ///
  /// Nothing is written to disk until the template, locale strings and every mandatory glob
  /// have been resolved. Publishing never happens here; see [`AppBuilder::deploy`].
  pub fn build(&self) -> BuildResult<BuildArtifact> {
    let spec = self.spec;
    let mut stages = StageTracker::new();
    info!(name = %spec.name, app_dir = %spec.app_dir.display(), "building app");

    spec.validate()?;
    let template = self.read_template()?;

    let generated = self.generate_strings()?;
    stages.advance(BuildStage::StringsReady)?;

    let out_dir = std::path::absolute(spec.output_dir())
      .map_err(BuildError::io("resolve", &spec.output_dir()))?;
    self.guard_output_dir(&out_dir)?;
    let pipeline = AssetPipeline::new(&spec.app_dir).excluding(&out_dir)?;
    let mut composed = pipeline.compose(&spec.stylesheets, &spec.javascripts, &spec.assets)?;
    stages.advance(BuildStage::AssetsComposed)?;

    let plan = plan_scripts(&pipeline, &composed.scripts, generated)?;
    let html_name = self.entry_html_name();
    skip_generated_destinations(&mut composed.files, &html_name, &plan);
    let tags: Vec<ScriptTag> = plan.iter().map(PlannedScript::tag).collect();
    let page = render_page(&template, &spec.html.replacements, &composed.css, &tags);
    stages.advance(BuildStage::Rendered)?;

    let (entry_html, written) = self.write_output(&out_dir, &html_name, &page, &composed, &plan)?;
    stages.advance(BuildStage::Written)?;

    info!(
      name = %spec.name,
      out_dir = %out_dir.display(),
      files = written.len(),
      "build complete"
    );
    Ok(BuildArtifact {
      root: out_dir,
      entry_html,
      written,
      stage: stages.current,
    })
  }

  /// Publish a written artifact. Each artifact can be deployed once.
  pub fn deploy<P: PublishTarget>(&self, artifact: &mut BuildArtifact, target: &P) -> BuildResult<()> {
    if artifact.stage != BuildStage::Written {
      return Err(BuildError::Stage {
        from: artifact.stage,
        to: BuildStage::Deployed,
      });
    }

    info!(name = %self.spec.name, root = %artifact.root.display(), "deploying artifact");
    target.publish(&artifact.root)?;
    artifact.stage = BuildStage::Deployed;
    Ok(())
  }

  fn read_template(&self) -> BuildResult<String> {
    let path = self.spec.html_path();
    fs::read_to_string(&path).map_err(|err| {
      BuildError::config(format!("cannot read html template {}: {err}", path.display()))
    })
  }

  /// Generated code for each `strings` script source, aligned with the script list.
  fn generate_strings(&self) -> BuildResult<Vec<Option<String>>> {
    self
      .spec
      .javascripts
      .iter()
      .map(|script| match script {
        ScriptSource::Strings { strings } => {
          generate_strings_script(strings, &self.spec.app_dir, &self.introspector).map(Some)
        }
        _ => Ok(None),
      })
      .collect()
  }

  fn guard_output_dir(&self, out_dir: &Path) -> BuildResult<()> {
    let app_dir = std::path::absolute(&self.spec.app_dir)
      .map_err(BuildError::io("resolve", &self.spec.app_dir))?;
    let overlaps = app_dir.starts_with(out_dir)
      || (out_dir.exists()
        && app_dir.exists()
        && is_same_file(out_dir, &app_dir).map_err(BuildError::io("inspect", out_dir))?);

    if overlaps {
      return Err(BuildError::config(format!(
        "output directory {} would replace the application directory {}",
        out_dir.display(),
        app_dir.display()
      )));
    }
    Ok(())
  }

  /// File name of the rendered page inside the artifact.
  fn entry_html_name(&self) -> PathBuf {
    Path::new(&self.spec.html.path)
      .file_name()
      .map(PathBuf::from)
      .unwrap_or_else(|| PathBuf::from("index.html"))
  }

  fn write_output(
    &self,
    out_dir: &Path,
    html_name: &Path,
    page: &str,
    composed: &ComposedAssets,
    plan: &[PlannedScript],
  ) -> BuildResult<(PathBuf, Vec<PathBuf>)> {
    if out_dir.exists() {
      fs::remove_dir_all(out_dir).map_err(BuildError::io("remove", out_dir))?;
    }
    fs::create_dir_all(out_dir).map_err(BuildError::io("create", out_dir))?;

    let mut written = Vec::new();
    let entry_html = out_dir.join(html_name);
    write_file(&entry_html, page.as_bytes(), &mut written)?;
    write_file(
      &out_dir.join(STYLESHEET_FILE),
      composed.css.as_bytes(),
      &mut written,
    )?;

    for script in plan {
      match script {
        PlannedScript::Inline(_) => {}
        PlannedScript::Bundle { entry, file } => {
          let code = self.bundler.bundle(entry)?;
          write_file(&out_dir.join(file), code.as_bytes(), &mut written)?;
        }
        PlannedScript::Concat { sources, file } => {
          let code = read_all(sources)?.join("\n");
          write_file(&out_dir.join(file), code.as_bytes(), &mut written)?;
        }
      }
    }

    for AssetCopy {
      source,
      destination,
    } in &composed.files
    {
      let target = out_dir.join(destination);
      install_asset(source, &target)?;
      debug!(path = %target.display(), "copied asset");
      written.push(target);
    }

    Ok((entry_html, written))
  }
}

fn plan_scripts(
  pipeline: &AssetPipeline<'_>,
  scripts: &[ScriptSource],
  generated: Vec<Option<String>>,
) -> BuildResult<Vec<PlannedScript>> {
  scripts
    .iter()
    .zip(generated)
    .enumerate()
    .map(|(index, (script, generated))| match script {
      ScriptSource::Literal(code) => Ok(PlannedScript::Inline(code.clone())),
      ScriptSource::Strings { strings } => generated.map(PlannedScript::Inline).ok_or_else(|| {
        BuildError::config(format!("locale strings for {} were not generated", strings.module))
      }),
      ScriptSource::File(file) => {
        let sources = pipeline.script_sources(&file.path)?;
        let output = script_file_name(index, &file.path);
        if !file.bundle {
          return Ok(PlannedScript::Concat {
            sources,
            file: output,
          });
        }
        match sources.as_slice() {
          [entry] => Ok(PlannedScript::Bundle {
            entry: entry.clone(),
            file: output,
          }),
          _ => Err(BuildError::config(format!(
            "bundle entry `{}` must match exactly one file, found {}",
            file.path,
            sources.len()
          ))),
        }
      }
    })
    .collect()
}

/// Drop asset copies whose destination is a file the build generates itself.
fn skip_generated_destinations(files: &mut Vec<AssetCopy>, html_name: &Path, plan: &[PlannedScript]) {
  let mut generated = BTreeSet::from([html_name.to_path_buf(), PathBuf::from(STYLESHEET_FILE)]);
  generated.extend(plan.iter().filter_map(PlannedScript::file).map(Path::to_path_buf));

  files.retain(|copy| {
    let collides = generated.contains(&copy.destination);
    if collides {
      warn!(
        source = %copy.source.display(),
        destination = %copy.destination.display(),
        "asset skipped, destination is generated by the build"
      );
    }
    !collides
  });
}

/// Artifact-relative file for the script at `index`: `scripts/NN-<stem>.js`.
fn script_file_name(index: usize, path: &str) -> PathBuf {
  let last = path.rsplit(['/', '\\']).next().unwrap_or(path);
  let stem = last.rsplit_once('.').map_or(last, |(stem, _)| stem);
  let cleaned: String = stem
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
    .collect();
  let cleaned = cleaned.trim_matches('-');
  let stem = if cleaned.is_empty() { "script" } else { cleaned };

  PathBuf::from(SCRIPTS_DIR).join(format!("{:02}-{stem}.js", index + 1))
}

fn write_file(path: &Path, contents: &[u8], written: &mut Vec<PathBuf>) -> BuildResult<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(BuildError::io("create", parent))?;
  }
  fs::write(path, contents).map_err(BuildError::io("write", path))?;
  debug!(path = %path.display(), bytes = contents.len(), "wrote file");
  written.push(path.to_path_buf());
  Ok(())
}

fn install_asset(source: &Path, destination: &Path) -> BuildResult<()> {
  if let Some(parent) = destination.parent() {
    fs::create_dir_all(parent).map_err(BuildError::io("create", parent))?;
  }

  if destination.exists() {
    if is_same_file(source, destination).map_err(BuildError::io("inspect", destination))? {
      return Ok(());
    }
    fs::remove_file(destination).map_err(BuildError::io("remove", destination))?;
  }

  fs::copy(source, destination)
    .map(|_| ())
    .map_err(BuildError::io("copy", source))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::{Cell, RefCell};
  use std::collections::BTreeMap;

  use tempfile::{TempDir, tempdir};

  use crate::strings::LiteralIntrospector;

  #[derive(Default)]
  struct RecordingBundler {
    entries: RefCell<Vec<PathBuf>>,
  }

  impl Bundler for RecordingBundler {
    fn bundle(&self, entry: &Path) -> BuildResult<String> {
      self.entries.borrow_mut().push(entry.to_path_buf());
      let name = entry.file_name().unwrap().to_string_lossy();
      Ok(format!("/* bundled {name} */\n"))
    }
  }

  struct FailingBundler;

  impl Bundler for FailingBundler {
    fn bundle(&self, entry: &Path) -> BuildResult<String> {
      Err(BuildError::Bundle {
        entry: entry.to_path_buf(),
        message: "Could not resolve \"./missing.js\"".into(),
      })
    }
  }

  #[derive(Default)]
  struct CountingPublisher {
    calls: Cell<usize>,
  }

  impl PublishTarget for CountingPublisher {
    fn publish(&self, artifact_dir: &Path) -> BuildResult<()> {
      assert!(artifact_dir.join("index.html").exists());
      self.calls.set(self.calls.get() + 1);
      Ok(())
    }
  }

  const SPEC: &str = r#"{
    "name": "treemap",
    "appDir": "app",
    "html": {"path": "index.html", "replacements": {"%%TITLE%%": "Treemap"}},
    "stylesheets": [".lib { color: red; }", {"path": "styles/*"}],
    "javascripts": [
      {"strings": {"module": "src/util.js", "localesDir": "locales"}},
      {"path": "src/main.js", "bundle": true},
      {"path": "vendor/*.js"},
      "window.booted = true;"
    ],
    "assets": [{"path": "images/**/*"}, {"path": "debug.json"}]
  }"#;

  fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
  }

  fn project(spec_json: &str) -> (TempDir, BuildSpec) {
    let dir = tempdir().unwrap();
    let app = dir.path().join("app");
    write(
      &app,
      "index.html",
      "<html><head><title>%%TITLE%%</title></head><body><main></main></body></html>\n",
    );
    write(&app, "styles/b.css", ".b {}");
    write(&app, "styles/a.css", ".a {}");
    write(&app, "src/main.js", "import './util.js';\n");
    write(
      &app,
      "src/util.js",
      "export const UIStrings = {\n  /** Title. */\n  title: 'Treemap',\n  total: 'Total',\n};\n",
    );
    write(&app, "vendor/one.js", "var one = 1;");
    write(&app, "vendor/two.js", "var two = 2;");
    write(
      &app,
      "locales/en-US.json",
      r#"{"app/src/util.js | title": {"message": "Treemap"}, "app/src/other.js | title": {"message": "Other"}}"#,
    );
    write(
      &app,
      "locales/es.json",
      r#"{"app/src/util.js | total": {"message": "Total"}}"#,
    );
    write(&app, "images/logo.png", "png");
    write(&app, "images/icons/info.svg", "<svg/>");
    write(&app, "debug.json", "{}");
    write(dir.path(), crate::config::DEFAULT_SPEC_FILE, spec_json);

    let spec = BuildSpec::discover(dir.path()).unwrap();
    (dir, spec)
  }

  fn relative_files(artifact: &BuildArtifact) -> Vec<String> {
    artifact.summary().files
  }

  #[test]
  fn builds_the_complete_artifact() {
    let (_dir, spec) = project(SPEC);
    let bundler = RecordingBundler::default();
    let artifact = AppBuilder::new(&spec, &bundler, LiteralIntrospector).build().unwrap();

    assert_eq!(artifact.stage(), BuildStage::Written);
    assert_eq!(relative_files(&artifact), vec![
      "index.html",
      "styles/bundled.css",
      "scripts/02-main.js",
      "scripts/03-script.js",
      "images/icons/info.svg",
      "images/logo.png",
      "debug.json",
    ]);
    assert_eq!(bundler.entries.borrow().len(), 1);
    assert!(bundler.entries.borrow()[0].ends_with("src/main.js"));

    let root = artifact.root();
    assert_eq!(
      fs::read_to_string(root.join(STYLESHEET_FILE)).unwrap(),
      ".lib { color: red; }\n.a {}\n.b {}"
    );
    assert_eq!(
      fs::read_to_string(root.join("scripts/03-script.js")).unwrap(),
      "var one = 1;\nvar two = 2;"
    );
    assert_eq!(
      fs::read_to_string(root.join("scripts/02-main.js")).unwrap(),
      "/* bundled main.js */\n"
    );
    assert_eq!(fs::read_to_string(root.join("images/icons/info.svg")).unwrap(), "<svg/>");

    let page = fs::read_to_string(artifact.entry_html()).unwrap();
    assert!(page.contains("<title>Treemap</title>"));
    assert_eq!(page.matches("<style>").count(), 1);
    assert!(page.contains("<style>\n.lib { color: red; }\n.a {}\n.b {}\n</style>\n</head>"));
    assert_eq!(page.matches("<script").count(), 4);

    let order: Vec<usize> = [
      "const strings = {",
      "scripts/02-main.js",
      "scripts/03-script.js",
      "window.booted = true;",
    ]
    .iter()
    .map(|needle| page.find(needle).unwrap())
    .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(page.contains("\"Treemap\""));
    assert!(!page.contains("\"Other\""));
    assert!(page.contains("\"es\": {\n    \"total\""));
  }

  #[test]
  fn repeated_builds_are_byte_identical() {
    let (_dir, spec) = project(SPEC);
    let builder = AppBuilder::new(&spec, RecordingBundler::default(), LiteralIntrospector);

    let snapshot = |artifact: &BuildArtifact| -> BTreeMap<PathBuf, Vec<u8>> {
      artifact
        .written()
        .iter()
        .map(|path| (path.clone(), fs::read(path).unwrap()))
        .collect()
    };

    let first = builder.build().unwrap();
    let first_files = snapshot(&first);
    let second = builder.build().unwrap();
    assert_eq!(first.written(), second.written());
    assert_eq!(first_files, snapshot(&second));
  }

  #[test]
  fn assets_never_overwrite_generated_files() {
    let spec_json = SPEC.replace(
      r#""assets": [{"path": "images/**/*"}, {"path": "debug.json"}]"#,
      r#""assets": [{"path": "*"}, {"path": "scripts/*"}, {"path": "styles/*"}]"#,
    );
    let (dir, spec) = project(&spec_json);
    write(&dir.path().join("app"), "scripts/02-main.js", "stale();");

    let artifact = AppBuilder::new(&spec, RecordingBundler::default(), LiteralIntrospector)
      .build()
      .unwrap();
    assert_eq!(relative_files(&artifact), vec![
      "index.html",
      "styles/bundled.css",
      "scripts/02-main.js",
      "scripts/03-script.js",
      "debug.json",
      "styles/a.css",
      "styles/b.css",
    ]);

    let root = artifact.root();
    let page = fs::read_to_string(artifact.entry_html()).unwrap();
    assert!(page.contains("<style>"));
    assert!(!page.contains("%%TITLE%%"));
    assert_eq!(
      fs::read_to_string(root.join("scripts/02-main.js")).unwrap(),
      "/* bundled main.js */\n"
    );
  }

  #[test]
  fn previous_output_is_not_read_back_as_input() {
    let dir = tempdir().unwrap();
    write(dir.path(), "index.html", "<html><head></head><body></body></html>");
    write(dir.path(), "a.css", "a{}");
    write(
      dir.path(),
      crate::config::DEFAULT_SPEC_FILE,
      r#"{
        "name": "site",
        "appDir": ".",
        "html": {"path": "index.html"},
        "stylesheets": [{"path": "**/*.css"}],
        "javascripts": [],
        "assets": [{"path": "**/*.html"}]
      }"#,
    );
    let spec = BuildSpec::discover(dir.path()).unwrap();
    let builder = AppBuilder::new(&spec, RecordingBundler::default(), LiteralIntrospector);

    let first = builder.build().unwrap();
    let first_css = fs::read_to_string(first.root().join(STYLESHEET_FILE)).unwrap();
    let first_files = relative_files(&first);
    let second = builder.build().unwrap();

    assert_eq!(first_css, "a{}");
    assert_eq!(fs::read_to_string(second.root().join(STYLESHEET_FILE)).unwrap(), first_css);
    assert_eq!(relative_files(&second), first_files);
    assert_eq!(first_files, vec!["index.html", "styles/bundled.css"]);
  }

  #[test]
  fn stale_output_is_removed() {
    let (_dir, spec) = project(SPEC);
    let stale = spec.output_dir().join("old.html");
    write(&spec.output_dir(), "old.html", "stale");

    AppBuilder::new(&spec, RecordingBundler::default(), LiteralIntrospector)
      .build()
      .unwrap();
    assert!(!stale.exists());
  }

  #[test]
  fn missing_template_fails_before_writing() {
    let (_dir, mut spec) = project(SPEC);
    spec.html.path = "missing.html".into();
    let bundler = RecordingBundler::default();

    let err = AppBuilder::new(&spec, &bundler, LiteralIntrospector).build().unwrap_err();
    assert!(matches!(err, BuildError::Config(_)));
    assert!(!spec.output_dir().exists());
    assert!(bundler.entries.borrow().is_empty());
  }

  #[test]
  fn empty_mandatory_glob_fails_before_writing() {
    let (_dir, mut spec) = project(SPEC);
    spec.assets.push(crate::models::GlobSource::new("fonts/*.woff2"));

    let err = AppBuilder::new(&spec, RecordingBundler::default(), LiteralIntrospector)
      .build()
      .unwrap_err();
    assert!(matches!(err, BuildError::Resolution { ref pattern, .. } if pattern == "fonts/*.woff2"));
    assert!(!spec.output_dir().exists());
  }

  #[test]
  fn introspection_failure_aborts_the_build() {
    let (dir, spec) = project(SPEC);
    write(&dir.path().join("app"), "src/util.js", "export const Other = {};");

    let err = AppBuilder::new(&spec, RecordingBundler::default(), LiteralIntrospector)
      .build()
      .unwrap_err();
    assert!(matches!(err, BuildError::Introspection { .. }));
    assert!(!spec.output_dir().exists());
  }

  #[test]
  fn bundler_errors_propagate_verbatim() {
    let (_dir, spec) = project(SPEC);
    let err = AppBuilder::new(&spec, FailingBundler, LiteralIntrospector)
      .build()
      .unwrap_err();
    let BuildError::Bundle { message, entry } = err else {
      panic!("expected bundle error");
    };
    assert_eq!(message, "Could not resolve \"./missing.js\"");
    assert!(entry.ends_with("src/main.js"));
  }

  #[test]
  fn deploy_runs_only_when_requested_and_once() {
    let (_dir, spec) = project(SPEC);
    let builder = AppBuilder::new(&spec, RecordingBundler::default(), LiteralIntrospector);
    let publisher = CountingPublisher::default();

    let mut artifact = builder.build().unwrap();
    assert_eq!(publisher.calls.get(), 0);

    builder.deploy(&mut artifact, &publisher).unwrap();
    assert_eq!(publisher.calls.get(), 1);
    assert_eq!(artifact.stage(), BuildStage::Deployed);

    let err = builder.deploy(&mut artifact, &publisher).unwrap_err();
    assert!(matches!(err, BuildError::Stage { .. }));
    assert_eq!(publisher.calls.get(), 1);
  }

  #[test]
  fn refuses_output_that_contains_the_app() {
    let (dir, mut spec) = project(SPEC);
    spec.out_dir = Some(dir.path().to_path_buf());

    let err = AppBuilder::new(&spec, RecordingBundler::default(), LiteralIntrospector)
      .build()
      .unwrap_err();
    assert!(matches!(err, BuildError::Config(_)));
    assert!(dir.path().join("app/index.html").exists());
  }

  #[test]
  fn bundle_entries_must_be_unique() {
    let (_dir, mut spec) = project(SPEC);
    spec.javascripts = vec![ScriptSource::File(crate::models::ScriptFile {
      path: "vendor/*.js".into(),
      bundle: true,
    })];

    let err = AppBuilder::new(&spec, RecordingBundler::default(), LiteralIntrospector)
      .build()
      .unwrap_err();
    assert!(matches!(err, BuildError::Config(_)));
  }

  #[test]
  fn stage_tracker_rejects_skips_and_repeats() {
    let mut stages = StageTracker::new();
    assert!(matches!(
      stages.advance(BuildStage::Rendered),
      Err(BuildError::Stage {
        from: BuildStage::Init,
        to: BuildStage::Rendered
      })
    ));
    stages.advance(BuildStage::StringsReady).unwrap();
    assert!(stages.advance(BuildStage::StringsReady).is_err());
  }

  #[test]
  fn script_file_names_are_indexed_and_sanitised() {
    assert_eq!(script_file_name(0, "src/main.js"), PathBuf::from("scripts/01-main.js"));
    assert_eq!(script_file_name(11, "vendor/*.js"), PathBuf::from("scripts/12-script.js"));
    assert_eq!(
      script_file_name(2, "lib\\chart.bundle.mjs"),
      PathBuf::from("scripts/03-chart-bundle.js")
    );
  }
}
