use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::Concert;
use crate::utils;

const INDENT: &[u8] = b"    ";

/// Four-space indented JSON, non-ASCII left unescaped.
pub fn to_pretty_json(concerts: &[Concert]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    concerts
        .serialize(&mut serializer)
        .context("failed to serialize concerts")?;
    String::from_utf8(buf).context("serialized concerts are not UTF-8")
}

/// The same array as a script assigning it to `binding`, exported for
/// CommonJS consumers when `module` exists.
pub fn render_js_module(concerts: &[Concert], binding: &str) -> Result<String> {
    let json = to_pretty_json(concerts)?;
    Ok(format!(
        "// Concert data - converted from original event list\n\
         const {binding} = {json};\n\
         \n\
         // Export for use in other modules\n\
         if (typeof module !== 'undefined' && module.exports) {{\n\
         \x20   module.exports = {binding};\n\
         }}\n"
    ))
}

pub fn write_json(path: &Path, concerts: &[Concert]) -> Result<()> {
    let contents = to_pretty_json(concerts)?;
    write_file(path, &contents)
}

pub fn write_js(path: &Path, concerts: &[Concert], binding: &str) -> Result<()> {
    let contents = render_js_module(concerts, binding)?;
    write_file(path, &contents)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    utils::ensure_parent(path)
        .with_context(|| format!("failed to create parent of {}", path.display()))?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConcertType;

    fn sample() -> Concert {
        Concert {
            id: "sommernächte-2022".to_string(),
            date: "2022-07-15".to_string(),
            end_date: None,
            artist_ids: vec!["versengold".to_string(), "delva".to_string()],
            venue_id: "colos-saal-aschaffenburg".to_string(),
            kind: ConcertType::Concert,
            name: "Sommernächte 2022".to_string(),
            price: None,
            logo: None,
            notes: None,
        }
    }

    #[test]
    fn json_layout_matches_site_data_files() {
        let json = to_pretty_json(&[sample()]).unwrap();
        let expected = r#"[
    {
        "id": "sommernächte-2022",
        "date": "2022-07-15",
        "endDate": null,
        "artistIds": [
            "versengold",
            "delva"
        ],
        "venueId": "colos-saal-aschaffenburg",
        "type": "concert",
        "name": "Sommernächte 2022",
        "price": null,
        "logo": null,
        "notes": null
    }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn empty_list_is_bare_brackets() {
        assert_eq!(to_pretty_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn js_module_wraps_the_json() {
        let concerts = [sample()];
        let js = render_js_module(&concerts, "concertsData").unwrap();
        let json = to_pretty_json(&concerts).unwrap();
        assert!(js.starts_with("// Concert data - converted from original event list\nconst concertsData = [\n"));
        assert!(js.contains(&format!("const concertsData = {json};\n\n")));
        assert!(js.ends_with(
            "// Export for use in other modules\n\
             if (typeof module !== 'undefined' && module.exports) {\n    \
             module.exports = concertsData;\n\
             }\n"
        ));
    }

    #[test]
    fn writers_create_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("out").join("converted_concerts.json");
        let js_path = dir.path().join("out").join("converted_concerts.js");
        write_json(&json_path, &[sample()]).unwrap();
        write_js(&js_path, &[sample()], "shows").unwrap();

        let parsed: Vec<Concert> =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed, vec![sample()]);
        assert!(fs::read_to_string(&js_path)
            .unwrap()
            .contains("module.exports = shows;"));
    }
}
