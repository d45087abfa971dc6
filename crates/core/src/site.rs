use crate::config::{SITE_TOML, parse_site_toml};
use crate::error::{Error, Result};
use crate::messages::Catalog;
use crate::types::SiteConfig;
use std::path::{Path, PathBuf};

/// Directory (relative to the site root) with files served verbatim
pub const PUBLIC_DIR: &str = "public";

/// Everything needed to render the site: config plus verified messages
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub config: SiteConfig,
    pub catalog: Catalog,
}

impl Site {
    /// Load `site.toml` and all message tables from a site directory
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::InvalidData(format!(
                "Site directory does not exist: {}",
                root.display()
            )));
        }

        let config = parse_site_toml(root.join(SITE_TOML)).map_err(|e| match e {
            Error::IoError(io) => Error::InvalidData(format!(
                "Cannot read {}: {}",
                root.join(SITE_TOML).display(),
                io
            )),
            other => other,
        })?;
        let catalog = Catalog::load(root)?;

        Ok(Self {
            root: root.to_path_buf(),
            config,
            catalog,
        })
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root.join(PUBLIC_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Key;
    use crate::locale::Locale;
    use crate::messages::Message;

    fn shipped_site_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../site")
    }

    #[test]
    fn test_shipped_site_loads() {
        let site = Site::load(shipped_site_dir()).unwrap();
        assert_eq!(site.config.default_locale, Locale::De);
        assert!(site.config.base_url.starts_with("https://"));
    }

    #[test]
    fn test_every_key_resolves_non_empty_in_every_locale() {
        let site = Site::load(shipped_site_dir()).unwrap();
        for locale in Locale::ALL {
            for key in Key::all() {
                match site.catalog.resolve(locale, key).unwrap() {
                    Message::Text(text) => assert!(!text.trim().is_empty(), "{} {}", locale, key),
                    Message::List(items) => assert!(!items.is_empty(), "{} {}", locale, key),
                }
            }
        }
    }

    #[test]
    fn test_shipped_tables_have_no_unused_entries() {
        let site = Site::load(shipped_site_dir()).unwrap();
        let known: Vec<String> = Key::all().iter().map(Key::path).collect();
        for locale in Locale::ALL {
            let table = site.catalog.table(locale).unwrap();
            for path in table.paths() {
                assert!(known.iter().any(|k| k == path), "unused '{}' in {}", path, locale);
            }
        }
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let err = Site::load("/definitely/not/a/site").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
