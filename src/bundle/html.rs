//! HTML template rendering for the packaged page.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// How a script appears in the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptTag {
    /// Code embedded in a `<script>` element.
    Inline(String),
    /// Reference to an emitted file, relative to the page.
    External(String),
}

impl ScriptTag {
    fn render(&self) -> String {
        match self {
            ScriptTag::Inline(code) => {
                format!("<script>\n{}</script>\n", with_trailing_newline(code))
            }
            ScriptTag::External(src) => format!("<script src=\"{src}\"></script>\n"),
        }
    }
}

fn head_close() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)</head\s*>").expect("invalid head regex"))
}

fn body_close() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)</body\s*>").expect("invalid body regex"))
}

/// Apply literal replacements, then inject one `<style>` block and the script tags.
///
/// The style block lands before the first `</head>` and the scripts before the last
/// `</body>`; a missing closing tag means the block is appended to the document instead.
pub fn render_page(
    template: &str,
    replacements: &BTreeMap<String, String>,
    css: &str,
    scripts: &[ScriptTag],
) -> String {
    let mut text = template.to_string();
    for (needle, replacement) in replacements {
        if !text.contains(needle.as_str()) {
            warn!(needle, "html replacement not found in template");
        }
        text = text.replace(needle.as_str(), replacement);
    }

    let style_block = format!("<style>\n{}</style>\n", with_trailing_newline(css));
    let text = insert_at(&text, head_close().find(&text).map(|m| m.start()), &style_block);

    let script_block: String = scripts.iter().map(ScriptTag::render).collect();
    let body_index = body_close().find_iter(&text).last().map(|m| m.start());
    insert_at(&text, body_index, &script_block)
}

fn insert_at(text: &str, index: Option<usize>, block: &str) -> String {
    match index {
        Some(index) => format!("{}{}{}", &text[..index], block, &text[index..]),
        None => format!("{}{}", with_trailing_newline(text), block),
    }
}

fn with_trailing_newline(text: &str) -> String {
    if text.is_empty() || text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}
