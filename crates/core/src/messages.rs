//! Message store and content resolver.
//!
//! Message files are nested TOML tables (`messages/de.toml`,
//! `messages/en.toml`). Loading flattens them into dotted keys; a
//! [`Catalog`] only exists once every [`Key`] resolves for every locale.

use crate::error::{Error, Result};
use crate::keys::{Key, MessageKind};
use crate::locale::Locale;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory (relative to the site root) holding one message file per locale
pub const MESSAGES_DIR: &str = "messages";

/// A translated value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Text(String),
    List(Vec<String>),
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Text(_) => MessageKind::Text,
            Message::List(_) => MessageKind::List,
        }
    }

    /// True for empty text, an empty list, or a list with an empty item
    pub fn is_blank(&self) -> bool {
        match self {
            Message::Text(text) => text.trim().is_empty(),
            Message::List(items) => {
                items.is_empty() || items.iter().any(|item| item.trim().is_empty())
            }
        }
    }
}

/// Path of the message file for `locale` below a site directory
pub fn message_file(site_dir: &Path, locale: Locale) -> PathBuf {
    site_dir
        .join(MESSAGES_DIR)
        .join(format!("{}.toml", locale.code()))
}

/// All messages of one locale, keyed by dotted path
#[derive(Debug, Clone)]
pub struct MessageTable {
    locale: Locale,
    entries: BTreeMap<String, Message>,
}

impl MessageTable {
    /// Load and flatten a message file
    pub fn load<P: AsRef<Path>>(locale: Locale, path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::InvalidData(format!(
                "Cannot read messages for '{}' from {}: {}",
                locale,
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(locale, &content)
    }

    /// Parse a message table from TOML source (useful for testing)
    pub fn from_toml_str(locale: Locale, content: &str) -> Result<Self> {
        let root: toml::Table = toml::from_str(content).map_err(|e| {
            Error::ConfigParse(format!("messages/{}.toml: {}", locale.code(), e))
        })?;

        let mut entries = BTreeMap::new();
        flatten("", &root, &mut entries)?;

        Ok(Self { locale, entries })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, path: &str) -> Option<&Message> {
        self.entries.get(path)
    }

    /// Dotted paths present in the file, sorted
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check one key: present, of the expected shape, not blank
    pub fn check_key(&self, key: Key) -> Result<&Message> {
        let path = key.path();
        let message = self
            .entries
            .get(&path)
            .ok_or_else(|| Error::MissingTranslation {
                locale: self.locale,
                key: path.clone(),
            })?;

        if message.kind() != key.kind() {
            return Err(Error::InvalidData(format!(
                "'{}' in locale '{}' must be a {}",
                path,
                self.locale,
                match key.kind() {
                    MessageKind::Text => "string",
                    MessageKind::List => "list of strings",
                }
            )));
        }

        if message.is_blank() {
            return Err(Error::MissingTranslation {
                locale: self.locale,
                key: path,
            });
        }

        Ok(message)
    }

    /// Every problem with this table, in key order
    pub fn problems(&self) -> Vec<Error> {
        Key::all()
            .into_iter()
            .filter_map(|key| self.check_key(key).err())
            .collect()
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut BTreeMap<String, Message>) -> Result<()> {
    for (name, value) in table {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        let message = match value {
            toml::Value::String(text) => Message::Text(text.clone()),
            toml::Value::Array(items) => {
                let items = items
                    .iter()
                    .map(|item| match item {
                        toml::Value::String(text) => Ok(text.clone()),
                        other => Err(Error::InvalidData(format!(
                            "'{}' must only contain strings, found {}",
                            path,
                            other.type_str()
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Message::List(items)
            }
            toml::Value::Table(nested) => {
                flatten(&path, nested, out)?;
                continue;
            }
            other => {
                return Err(Error::InvalidData(format!(
                    "'{}' must be a string or list of strings, found {}",
                    path,
                    other.type_str()
                )));
            }
        };

        // `"a.b" = ...` and `[a] b = ...` spell the same dotted key
        if out.contains_key(&path) {
            return Err(Error::InvalidData(format!(
                "'{}' is defined more than once",
                path
            )));
        }
        out.insert(path, message);
    }
    Ok(())
}

/// Replace `{name}` placeholders with their values
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}

/// Verified message tables for every supported locale
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: BTreeMap<Locale, MessageTable>,
}

impl Catalog {
    /// Load `messages/{locale}.toml` for every locale below `site_dir`
    pub fn load<P: AsRef<Path>>(site_dir: P) -> Result<Self> {
        let site_dir = site_dir.as_ref();
        let tables = Locale::ALL
            .into_iter()
            .map(|locale| MessageTable::load(locale, message_file(site_dir, locale)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_tables(tables)
    }

    /// Build a catalog, failing on the first missing or malformed key
    pub fn from_tables(tables: Vec<MessageTable>) -> Result<Self> {
        let tables: BTreeMap<Locale, MessageTable> =
            tables.into_iter().map(|t| (t.locale(), t)).collect();

        for locale in Locale::ALL {
            let table = tables.get(&locale).ok_or_else(|| {
                Error::InvalidData(format!("No message table for locale '{}'", locale))
            })?;
            if let Some(problem) = table.problems().into_iter().next() {
                return Err(problem);
            }
        }

        Ok(Self { tables })
    }

    pub fn table(&self, locale: Locale) -> Option<&MessageTable> {
        self.tables.get(&locale)
    }

    /// Resolve `key` in `locale`
    pub fn resolve(&self, locale: Locale, key: Key) -> Result<&Message> {
        self.tables
            .get(&locale)
            .ok_or_else(|| Error::MissingTranslation {
                locale,
                key: key.path(),
            })?
            .check_key(key)
    }

    /// Resolve a text message
    pub fn text(&self, locale: Locale, key: Key) -> Result<&str> {
        match self.resolve(locale, key)? {
            Message::Text(text) => Ok(text),
            Message::List(_) => Err(Error::InvalidData(format!(
                "'{}' is a list, expected a string",
                key
            ))),
        }
    }

    /// Resolve a list message
    pub fn list(&self, locale: Locale, key: Key) -> Result<&[String]> {
        match self.resolve(locale, key)? {
            Message::List(items) => Ok(items),
            Message::Text(_) => Err(Error::InvalidData(format!(
                "'{}' is a string, expected a list",
                key
            ))),
        }
    }

    /// Resolve a text message and substitute its placeholders
    pub fn format(&self, locale: Locale, key: Key, vars: &[(&str, &str)]) -> Result<String> {
        Ok(interpolate(self.text(locale, key)?, vars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{BusinessArea, CardField, FooterKey, NavKey, TermsSection, SectionField};

    /// Render a complete message file in which every text is `"{prefix} {path}"`.
    fn synthetic_messages(prefix: &str) -> String {
        let mut out = String::new();
        for key in Key::all() {
            let value = match key.kind() {
                MessageKind::Text if key.placeholders().contains(&"year") => {
                    format!("\"{} {} {{year}}\"", prefix, key.path())
                }
                MessageKind::Text => format!("\"{} {}\"", prefix, key.path()),
                MessageKind::List => format!("[\"{} {} a\", \"{} b\"]", prefix, key.path(), prefix),
            };
            out.push_str(&format!("\"{}\" = {}\n", key.path(), value));
        }
        out
    }

    fn synthetic_catalog() -> Catalog {
        let de = MessageTable::from_toml_str(Locale::De, &synthetic_messages("de")).unwrap();
        let en = MessageTable::from_toml_str(Locale::En, &synthetic_messages("en")).unwrap();
        Catalog::from_tables(vec![de, en]).unwrap()
    }

    #[test]
    fn test_flatten_nested_tables() {
        let table = MessageTable::from_toml_str(
            Locale::En,
            r#"
[nav]
home = "Home"

[businessAreas.sparring]
features = ["One", "Two"]
"#,
        )
        .unwrap();

        assert_eq!(table.get("nav.home"), Some(&Message::Text("Home".into())));
        assert_eq!(
            table.get("businessAreas.sparring.features"),
            Some(&Message::List(vec!["One".into(), "Two".into()]))
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_rejects_non_string_values() {
        let err = MessageTable::from_toml_str(Locale::De, "[nav]\nhome = 3\n").unwrap_err();
        assert!(err.to_string().contains("nav.home"));

        let err = MessageTable::from_toml_str(Locale::De, "list = [\"a\", 1]\n").unwrap_err();
        assert!(err.to_string().contains("only contain strings"));
    }

    #[test]
    fn test_rejects_same_key_spelled_twice() {
        let err = MessageTable::from_toml_str(
            Locale::En,
            "\"nav.home\" = \"B\"\n[nav]\nhome = \"A\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.to_string().contains("'nav.home' is defined more than once"));
    }

    #[test]
    fn test_catalog_rejects_missing_key_at_load() {
        let de = MessageTable::from_toml_str(Locale::De, &synthetic_messages("de")).unwrap();
        let incomplete = synthetic_messages("en").replace("\"nav.home\" = \"en nav.home\"\n", "");
        let en = MessageTable::from_toml_str(Locale::En, &incomplete).unwrap();

        match Catalog::from_tables(vec![de, en]) {
            Err(Error::MissingTranslation { locale, key }) => {
                assert_eq!(locale, Locale::En);
                assert_eq!(key, "nav.home");
            }
            other => panic!("expected MissingTranslation, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_catalog_rejects_blank_value() {
        let de = MessageTable::from_toml_str(Locale::De, &synthetic_messages("de")).unwrap();
        let blank = synthetic_messages("en").replace("\"en nav.home\"", "\"  \"");
        let en = MessageTable::from_toml_str(Locale::En, &blank).unwrap();

        let err = Catalog::from_tables(vec![de, en]).unwrap_err();
        assert!(matches!(err, Error::MissingTranslation { .. }));
    }

    #[test]
    fn test_catalog_rejects_wrong_shape() {
        let de = MessageTable::from_toml_str(Locale::De, &synthetic_messages("de")).unwrap();
        let wrong = synthetic_messages("en").replace(
            "[\"en businessAreas.talent.features a\", \"en b\"]",
            "\"not a list\"",
        );
        let en = MessageTable::from_toml_str(Locale::En, &wrong).unwrap();

        let err = Catalog::from_tables(vec![de, en]).unwrap_err();
        assert!(err.to_string().contains("businessAreas.talent.features"));
    }

    #[test]
    fn test_catalog_requires_every_locale() {
        let de = MessageTable::from_toml_str(Locale::De, &synthetic_messages("de")).unwrap();
        let err = Catalog::from_tables(vec![de]).unwrap_err();
        assert!(err.to_string().contains("'en'"));
    }

    #[test]
    fn test_resolve_is_per_locale() {
        let catalog = synthetic_catalog();
        assert_eq!(
            catalog.text(Locale::De, Key::Nav(NavKey::Home)).unwrap(),
            "de nav.home"
        );
        assert_eq!(
            catalog.text(Locale::En, Key::Nav(NavKey::Home)).unwrap(),
            "en nav.home"
        );
        assert_eq!(
            catalog
                .text(Locale::En, Key::TermsSection(TermsSection::Final, SectionField::Title))
                .unwrap(),
            "en legal.terms.sections.final.title"
        );
    }

    #[test]
    fn test_text_and_list_enforce_shape() {
        let catalog = synthetic_catalog();
        let features = Key::BusinessArea(BusinessArea::Platforms, CardField::Features);
        assert_eq!(catalog.list(Locale::De, features).unwrap().len(), 2);
        assert!(catalog.text(Locale::De, features).is_err());
        assert!(catalog.list(Locale::De, Key::Nav(NavKey::Home)).is_err());
    }

    #[test]
    fn test_format_substitutes_year() {
        let catalog = synthetic_catalog();
        let line = catalog
            .format(Locale::En, Key::Footer(FooterKey::Copyright), &[("year", "2026")])
            .unwrap();
        assert_eq!(line, "en footer.copyright 2026");
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholders() {
        assert_eq!(
            interpolate("© {year} {owner}", &[("year", "2026")]),
            "© 2026 {owner}"
        );
    }
}
