use once_cell::sync::Lazy;
use regex::Regex;
use std::{fs, io, path::Path};

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid slug strip regex"));
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("valid slug separator regex"));

/// Lowercase, hyphen-separated identifier for a display name.
///
/// Word characters are kept as-is, so accented letters survive
/// (`"Sommernächte 2022"` becomes `"sommernächte-2022"`). Each whitespace or
/// underscore run turns into a single `-`, but hyphens already present are
/// left alone.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(&lowered, "");
    let joined = SEPARATOR_RE.replace_all(&stripped, "-");
    joined.trim_matches('-').to_string()
}

pub fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
