//! Locale string generation: catalog loading, declaration introspection and subsetting.

pub mod catalog;
pub mod introspect;
pub mod subset;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{BuildError, BuildResult};
use crate::models::LocaleStringsSpec;

pub use catalog::{LocaleDirectory, LocaleStore};
pub use introspect::{IntrospectionFailure, LiteralIntrospector, ModuleIntrospector};
pub use subset::{render_strings_script, subset};

/// Produce the generated strings script described by `spec`.
///
/// Module and locale paths are resolved against `app_dir`.
pub fn generate_strings_script<I: ModuleIntrospector>(
  spec: &LocaleStringsSpec,
  app_dir: &Path,
  introspector: &I,
) -> BuildResult<String> {
  let module = app_dir.join(&spec.module);
  let source = fs::read_to_string(&module).map_err(|err| BuildError::Introspection {
    module: module.clone(),
    reason: err.to_string(),
  })?;
  let declaration = introspector
    .introspect(&source, spec.export_name())
    .map_err(|err| BuildError::Introspection {
      module: module.clone(),
      reason: err.to_string(),
    })?;

  let catalog = LocaleDirectory::new(app_dir.join(&spec.locales_dir)).load()?;
  let table = subset(&catalog, &declaration, spec.suffix());

  info!(
    module = %module.display(),
    declared = declaration.len(),
    locales = table.len(),
    "generated locale strings"
  );
  render_strings_script(spec.global(), &table)
}
