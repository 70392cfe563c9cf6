//! Command line entry point: build the app described by a spec file, optionally deploy it.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pages_bundler::config::DEFAULT_SPEC_FILE;
use pages_bundler::{AppBuilder, BuildSpec, CommandBundler, GitBranchPublisher, LiteralIntrospector};

/// Package a single-page app into a self-contained static site.
#[derive(Debug, Parser)]
#[command(name = "pages-bundler", version, about)]
struct Cli {
  /// Build specification (JSON or YAML).
  #[arg(long, default_value = DEFAULT_SPEC_FILE)]
  spec: PathBuf,
  /// Publish the artifact after a successful build.
  #[arg(long)]
  deploy: bool,
  /// Program used to bundle script entries marked `bundle: true`.
  #[arg(long, default_value = "esbuild")]
  bundler: String,
  /// Log every stage and written file.
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}

fn run(cli: &Cli) -> Result<()> {
  let spec = BuildSpec::from_path(&cli.spec)
    .with_context(|| format!("failed to load {}", cli.spec.display()))?;

  let builder = AppBuilder::new(
    &spec,
    CommandBundler::new(cli.bundler.clone()),
    LiteralIntrospector,
  );
  let mut artifact = builder
    .build()
    .with_context(|| format!("failed to build `{}`", spec.name))?;
  info!(entry = %artifact.entry_html().display(), "artifact ready");

  if cli.deploy {
    let repo_dir = std::env::current_dir().context("failed to read the working directory")?;
    let target = GitBranchPublisher::from_spec(&spec, repo_dir);
    builder
      .deploy(&mut artifact, &target)
      .with_context(|| format!("failed to deploy `{}`", spec.name))?;
  }

  Ok(())
}
