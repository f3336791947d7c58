//! Offline dictionary for solved-word definitions.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

const DEFINITIONS_TOML: &str = include_str!("../assets/definitions.toml");

static DEFINITIONS: OnceLock<HashMap<String, String>> = OnceLock::new();
static TAG_RE: OnceLock<Option<Regex>> = OnceLock::new();
static WS_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn definitions() -> &'static HashMap<String, String> {
    DEFINITIONS.get_or_init(|| match toml::from_str(DEFINITIONS_TOML) {
        Ok(map) => map,
        Err(e) => {
            wordsquad_logger::error(&format!("Failed to parse bundled definitions: {}", e));
            HashMap::new()
        }
    })
}

/// Look up a definition for `word`, case-insensitively.
pub fn lookup(word: &str) -> Option<String> {
    definitions()
        .get(&word.to_lowercase())
        .map(|d| sanitize_definition(d))
}

/// Strip markup and normalize whitespace in a raw definition.
///
/// Bundled entries are plain text, but user-supplied dictionaries may
/// carry HTML fragments and entities from their upstream source.
pub fn sanitize_definition(raw: &str) -> String {
    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]+>").ok());
    let ws_re = WS_RE.get_or_init(|| Regex::new(r"\s+").ok());

    let without_tags = match tag_re {
        Some(re) => re.replace_all(raw, "").into_owned(),
        None => raw.to_string(),
    };
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");
    match ws_re {
        Some(re) => re.replace_all(decoded.trim(), " ").to_string(),
        None => decoded.trim().to_string(),
    }
}
