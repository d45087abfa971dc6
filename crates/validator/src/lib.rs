//! Content validation for a site directory.
//!
//! Errors make the site unbuildable (config problems, missing or mistyped
//! translations). Warnings flag content that builds but is incomplete, such
//! as imprint details a German site is expected to carry.

use couture_core::config::SITE_TOML;
use couture_core::messages::message_file;
use couture_core::site::PUBLIC_DIR;
use couture_core::{Key, Locale, Message, MessageTable, SiteConfig, parse_site_toml};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Findings of a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validate the site directory at `path`
pub fn validate_site<P: AsRef<Path>>(path: P) -> ValidationReport {
    let path = path.as_ref();
    let mut report = ValidationReport::new();

    if !path.is_dir() {
        report
            .errors
            .push(format!("Site directory does not exist: {}", path.display()));
        return report;
    }

    let public_files = public_files(&path.join(PUBLIC_DIR), &mut report);

    match parse_site_toml(path.join(SITE_TOML)) {
        Ok(config) => check_config(&config, &public_files, &mut report),
        Err(e) => report.errors.push(format!("{}: {}", SITE_TOML, e)),
    }

    for locale in Locale::ALL {
        let file = message_file(path, locale);
        match MessageTable::load(locale, &file) {
            Ok(table) => check_messages(&table, &mut report),
            Err(e) => report.errors.push(e.to_string()),
        }
    }

    report
}

/// Files below `public/`, relative to it
fn public_files(dir: &Path, report: &mut ValidationReport) -> HashSet<PathBuf> {
    if !dir.is_dir() {
        report
            .warnings
            .push(format!("No {}/ directory; no static files will be served", PUBLIC_DIR));
        return HashSet::new();
    }

    let files: HashSet<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.path().strip_prefix(dir).ok().map(Path::to_path_buf))
        .collect();

    report
        .info
        .push(format!("{} file(s) in {}/", files.len(), PUBLIC_DIR));
    files
}

fn check_config(config: &SiteConfig, public_files: &HashSet<PathBuf>, report: &mut ValidationReport) {
    report
        .info
        .push(format!("Site: {} ({})", config.name, config.base_url));
    report
        .info
        .push(format!("Team members: {}", config.team.len()));

    let org = &config.organization;
    let imprint_fields = [
        ("organization.address", org.address.is_none()),
        ("organization.phone", org.phone.is_none()),
        ("organization.managing_director", org.managing_director.is_none()),
        ("organization.register", org.register.is_none()),
        ("organization.vat_id", org.vat_id.is_none()),
    ];
    for (field, missing) in imprint_fields {
        if missing {
            report.warnings.push(format!(
                "{} is not set; the imprint will omit it",
                field
            ));
        }
    }

    match &org.logo {
        Some(logo) if !public_files.contains(Path::new(logo)) => {
            report.warnings.push(format!(
                "organization.logo '{}' not found in {}/",
                logo, PUBLIC_DIR
            ));
        }
        Some(_) => {}
        None => report
            .warnings
            .push("organization.logo is not set; pages render without a logo".to_string()),
    }

    if config.links.sparring.is_none() {
        report
            .warnings
            .push("links.sparring is not set; the sparring card has no link".to_string());
    }

    if config.team.is_empty() {
        report
            .warnings
            .push("No [[team]] entries; the talent page shows an empty roster".to_string());
    }
}

fn check_messages(table: &MessageTable, report: &mut ValidationReport) {
    let locale = table.locale();

    for problem in table.problems() {
        report.errors.push(problem.to_string());
    }

    let keys = Key::all();
    let known: HashSet<String> = keys.iter().map(Key::path).collect();
    for path in table.paths() {
        if !known.contains(path) {
            report.warnings.push(format!(
                "'{}' in locale '{}' is not used by any page",
                path, locale
            ));
        }
    }

    for key in &keys {
        let Some(Message::Text(text)) = table.get(&key.path()) else {
            continue;
        };
        for name in key.placeholders() {
            if !text.contains(&format!("{{{}}}", name)) {
                report.warnings.push(format!(
                    "'{}' in locale '{}' does not use the {{{}}} placeholder",
                    key, locale, name
                ));
            }
        }
    }

    report
        .info
        .push(format!("Locale '{}': {} message(s)", locale, table.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Copy the shipped site into a scratch directory
    fn scratch_site() -> TempDir {
        let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../site");
        let dir = TempDir::new().unwrap();

        for entry in WalkDir::new(&source) {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(&source).unwrap();
            let target = dir.path().join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).unwrap();
            } else {
                fs::copy(entry.path(), &target).unwrap();
            }
        }

        dir
    }

    fn rewrite(path: PathBuf, from: &str, to: &str) {
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(from), "'{}' not in {}", from, path.display());
        fs::write(&path, content.replacen(from, to, 1)).unwrap();
    }

    #[test]
    fn test_shipped_site_has_no_errors() {
        let dir = scratch_site();
        let report = validate_site(dir.path());
        assert!(!report.has_errors(), "{:?}", report.errors);
        assert!(
            report
                .info
                .iter()
                .any(|line| line.starts_with("Locale 'de':"))
        );
    }

    #[test]
    fn test_missing_imprint_details_are_warnings() {
        let dir = scratch_site();
        let report = validate_site(dir.path());
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.starts_with("organization.phone is not set"))
        );
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.starts_with("organization.address is not set"))
        );
    }

    #[test]
    fn test_missing_translation_is_an_error() {
        let dir = scratch_site();
        rewrite(
            message_file(dir.path(), Locale::En),
            "home = \"Home\"\n",
            "",
        );
        let report = validate_site(dir.path());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("nav.home") && e.contains("en")),
            "{:?}",
            report.errors
        );
    }

    #[test]
    fn test_unused_key_is_a_warning() {
        let dir = scratch_site();
        rewrite(
            message_file(dir.path(), Locale::De),
            "[nav]\n",
            "[nav]\nblog = \"Blog\"\n",
        );
        let report = validate_site(dir.path());
        assert!(!report.has_errors(), "{:?}", report.errors);
        assert!(report.warnings.iter().any(|w| w.contains("'nav.blog'")));
    }

    #[test]
    fn test_key_spelled_twice_is_an_error() {
        let dir = scratch_site();
        rewrite(
            message_file(dir.path(), Locale::En),
            "[nav]\n",
            "\"nav.home\" = \"Start\"\n[nav]\n",
        );
        let report = validate_site(dir.path());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("'nav.home'") && e.contains("more than once")),
            "{:?}",
            report.errors
        );
    }

    #[test]
    fn test_copyright_without_year_is_a_warning() {
        let dir = scratch_site();
        rewrite(message_file(dir.path(), Locale::En), "© {year}", "©");
        let report = validate_site(dir.path());
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("footer.copyright") && w.contains("{year}"))
        );
    }

    #[test]
    fn test_missing_logo_file_is_a_warning() {
        let dir = scratch_site();
        fs::remove_file(dir.path().join(PUBLIC_DIR).join("logo.svg")).unwrap();
        let report = validate_site(dir.path());
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("organization.logo 'logo.svg' not found"))
        );
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let dir = scratch_site();
        rewrite(
            dir.path().join(SITE_TOML),
            "base_url = \"https://parlison-code-couture.cloud\"",
            "base_url = \"parlison-code-couture.cloud\"",
        );
        let report = validate_site(dir.path());
        assert!(report.errors.iter().any(|e| e.starts_with("site.toml:")));
    }

    #[test]
    fn test_missing_directory() {
        let report = validate_site("/definitely/not/a/site");
        assert_eq!(report.errors.len(), 1);
        assert!(report.info.is_empty());
    }
}
