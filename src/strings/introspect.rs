//! Read a module's string declaration without loading the module.
//!
//! The declaration is located syntactically (`<name> = {`), the object literal is cut out of
//! the source with a small scanner that understands strings and comments, and the result is
//! parsed as JSON5 data. Nothing from the module is ever executed.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::models::StringDeclaration;

/// Why a declaration could not be extracted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntrospectionFailure {
  /// No `<name> = {` assignment exists in the source.
  #[error("no `{0} = {{...}}` declaration found")]
  MissingDeclaration(String),
  /// The object literal never closes.
  #[error("declaration `{0}` is not terminated")]
  Unterminated(String),
  /// The literal is not plain data.
  #[error("declaration is not a data literal: {0}")]
  Parse(String),
  /// A declared value is not a string template.
  #[error("value of `{0}` is not a string")]
  NonString(String),
}

/// Extracts the exported name to template mapping from module source text.
pub trait ModuleIntrospector {
  /// Return the mapping assigned to `export_name` in `source`.
  fn introspect(
    &self,
    source: &str,
    export_name: &str,
  ) -> Result<StringDeclaration, IntrospectionFailure>;
}

impl<T: ModuleIntrospector + ?Sized> ModuleIntrospector for &T {
  fn introspect(
    &self,
    source: &str,
    export_name: &str,
  ) -> Result<StringDeclaration, IntrospectionFailure> {
    (**self).introspect(source, export_name)
  }
}

/// Structural introspector that parses the declaration's object literal as data.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralIntrospector;

impl ModuleIntrospector for LiteralIntrospector {
  fn introspect(
    &self,
    source: &str,
    export_name: &str,
  ) -> Result<StringDeclaration, IntrospectionFailure> {
    let open = assignments(source)
      .find(|(name, _)| *name == export_name)
      .map(|(_, open)| open)
      .ok_or_else(|| IntrospectionFailure::MissingDeclaration(export_name.to_string()))?;

    let literal = balanced_object(&source[open..])
      .ok_or_else(|| IntrospectionFailure::Unterminated(export_name.to_string()))?;

    let raw: serde_json::Map<String, Value> =
      json5::from_str(literal).map_err(|err| IntrospectionFailure::Parse(err.to_string()))?;

    raw
      .into_iter()
      .map(|(key, value)| match value {
        Value::String(template) => Ok((key, template)),
        _ => Err(IntrospectionFailure::NonString(key)),
      })
      .collect()
  }
}

/// Every `<identifier> = {` in `source`, paired with the byte offset of the opening brace.
fn assignments(source: &str) -> impl Iterator<Item = (&str, usize)> {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN
    .get_or_init(|| {
      Regex::new(r"(?:^|[^A-Za-z0-9_$])([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*\{")
        .expect("invalid assignment regex")
    })
    .captures_iter(source)
    .filter_map(|caps| {
      let name = caps.get(1)?;
      Some((name.as_str(), caps.get(0)?.end() - 1))
    })
}

/// Slice of `text` from its leading `{` through the matching `}`.
fn balanced_object(text: &str) -> Option<&str> {
  let bytes = text.as_bytes();
  let mut depth = 0usize;
  let mut index = 0;

  while index < bytes.len() {
    match bytes[index] {
      b'{' => depth += 1,
      b'}' => {
        depth = depth.checked_sub(1)?;
        if depth == 0 {
          return Some(&text[..=index]);
        }
      }
      quote @ (b'"' | b'\'' | b'`') => {
        index += 1;
        while index < bytes.len() && bytes[index] != quote {
          if bytes[index] == b'\\' {
            index += 1;
          }
          index += 1;
        }
      }
      b'/' if bytes.get(index + 1) == Some(&b'/') => {
        while index < bytes.len() && bytes[index] != b'\n' {
          index += 1;
        }
      }
      b'/' if bytes.get(index + 1) == Some(&b'*') => {
        index += 2;
        while index + 1 < bytes.len() && !(bytes[index] == b'*' && bytes[index + 1] == b'/') {
          index += 1;
        }
        index += 1;
      }
      _ => {}
    }
    index += 1;
  }

  None
}
