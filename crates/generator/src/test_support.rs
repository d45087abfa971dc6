//! Synthetic sites for unit tests.

use couture_core::config::parse_site_toml_str;
use couture_core::keys::MessageKind;
use couture_core::{Catalog, Key, Locale, MessageTable, Site};
use std::path::PathBuf;

pub const SITE_TOML: &str = r#"
[site]
base_url = "https://example.com/"
name = "Example Couture"

[organization]
legal_name = "Example Couture UG"
email = "hello@example.com"
logo = "logo.svg"
same_as = ["https://sparring.example.com"]

[links]
sparring = "https://sparring.example.com"

[[team]]
id = "erika"
name = "erika"
role = { de = "Architektin", en = "Architect" }
description = { de = "Baut Systeme.", en = "Builds systems." }
"#;

/// A site whose every text reads `"{locale} {key path}"`, passed through `edit`
pub fn site_with_messages<F>(edit: F) -> Site
where
    F: Fn(Key, String) -> String,
{
    let tables = Locale::ALL
        .into_iter()
        .map(|locale| {
            let mut source = String::new();
            for key in Key::all() {
                let text = format!("{} {}", locale.code(), key.path());
                let text = if key.placeholders().contains(&"year") {
                    format!("{} {{year}}", text)
                } else {
                    text
                };
                let value = match key.kind() {
                    MessageKind::Text => toml_string(&edit(key, text)),
                    MessageKind::List => format!(
                        "[{}, {}]",
                        toml_string(&format!("{} a", text)),
                        toml_string(&format!("{} b", locale.code()))
                    ),
                };
                source.push_str(&format!("\"{}\" = {}\n", key.path(), value));
            }
            MessageTable::from_toml_str(locale, &source).unwrap()
        })
        .collect();

    Site {
        root: PathBuf::from("/nonexistent/site"),
        config: parse_site_toml_str(SITE_TOML).unwrap(),
        catalog: Catalog::from_tables(tables).unwrap(),
    }
}

pub fn synthetic_site() -> Site {
    site_with_messages(|_, text| text)
}

fn toml_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
