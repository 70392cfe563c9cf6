//! Restrict a multi-locale catalog to the strings one module declares.

use std::collections::BTreeMap;

use crate::error::{BuildError, BuildResult};
use crate::models::{LocalizedStringTable, MessageCatalog, StringDeclaration};

/// Separator between source file and variable name in catalog identifiers.
pub const IDENTIFIER_SEPARATOR: &str = " | ";

/// Build the per-locale table of messages declared by the module whose file ends with `suffix`.
///
/// Every catalog locale gets an entry, even when nothing matches. Identifiers from other
/// files, undeclared variables and identifiers without a separator are dropped.
pub fn subset(
  catalog: &MessageCatalog,
  declaration: &StringDeclaration,
  suffix: &str,
) -> LocalizedStringTable {
  catalog
    .iter()
    .map(|(locale, messages)| {
      let table: BTreeMap<_, _> = messages
        .iter()
        .filter_map(|(identifier, record)| {
          let (source_file, variable) = identifier.split_once(IDENTIFIER_SEPARATOR)?;
          (source_file.ends_with(suffix) && declaration.contains_key(variable))
            .then(|| (variable.to_string(), record.clone()))
        })
        .collect();
      (locale.clone(), table)
    })
    .collect()
}

/// Render the table as a script assigning it to `global`.
pub fn render_strings_script(global: &str, table: &LocalizedStringTable) -> BuildResult<String> {
  let json = serde_json::to_string_pretty(table)
    .map_err(|err| BuildError::config(format!("cannot serialize locale strings: {err}")))?;
  // Inlined into a <script> element.
  let json = json.replace("</", "<\\/");
  Ok(format!("const {global} = {json};\n"))
}
