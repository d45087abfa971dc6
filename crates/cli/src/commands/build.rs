use super::load_site;
use anyhow::{Context, Result};
use couture_core::Site;
use couture_generator::{RenderOptions, STATIC_PREFIX, generate_site};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Build the static site.
///
/// Writes one `index.html` per locale and page, the root redirect,
/// `404.html`, `sitemap.xml`, `robots.txt`, the fingerprinted stylesheet and
/// everything below `public/` (served under `/static/`).
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let site = load_site(&path)?;
    println!("✓ Loaded: {}", site.config.name);
    println!("  Base URL: {}", site.config.base_url);
    println!();

    let (pages, assets, copied) = build_into(&site, &output, &RenderOptions::now())?;

    println!("📄 Generated {} pages and files", pages);
    println!("🎨 Generated {} stylesheet(s)", assets);
    println!("📁 Copied {} public files", copied);
    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Render and write everything; returns (pages, assets, public files) counts
pub(crate) fn build_into(
    site: &Site,
    output: &Path,
    opts: &RenderOptions,
) -> Result<(usize, usize, usize)> {
    let generated = generate_site(site, opts).context("Failed to render site")?;

    fs::create_dir_all(output).context("Failed to create output directory")?;

    for (relative, html) in &generated.pages {
        write_file(&output.join(relative), html.as_bytes())?;
    }
    for (relative, data) in &generated.assets {
        write_file(&output.join(relative), data)?;
    }

    let copied = copy_public(
        &site.public_dir(),
        &output.join(STATIC_PREFIX.trim_start_matches('/')),
    )?;

    Ok((generated.pages.len(), generated.assets.len(), copied))
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), "wrote");
    Ok(())
}

fn copy_public(src: &Path, dst: &Path) -> Result<usize> {
    if !src.exists() {
        eprintln!("   ⚠ Warning: No public directory at {}", src.display());
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to read {}", src.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(src)
            .context("Public file outside public directory")?;
        let target = dst.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn shipped_site() -> Site {
        load_site(&Path::new(env!("CARGO_MANIFEST_DIR")).join("../../site")).unwrap()
    }

    fn opts() -> RenderOptions {
        RenderOptions {
            year: 2026,
            today: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            live_reload: false,
        }
    }

    #[test]
    fn test_build_writes_every_route() {
        let out = TempDir::new().unwrap();
        let (pages, assets, copied) = build_into(&shipped_site(), out.path(), &opts()).unwrap();

        assert_eq!(pages, 20);
        assert_eq!(assets, 1);
        assert!(copied >= 1);

        for file in [
            "index.html",
            "404.html",
            "sitemap.xml",
            "robots.txt",
            "de/index.html",
            "en/plattformen/vermietung/index.html",
            "de/impressum/index.html",
            "static/logo.svg",
        ] {
            assert!(out.path().join(file).is_file(), "missing {}", file);
        }

        let styles: Vec<_> = fs::read_dir(out.path().join("styles")).unwrap().collect();
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn test_built_pages_are_localized() {
        let out = TempDir::new().unwrap();
        build_into(&shipped_site(), out.path(), &opts()).unwrap();

        let de = fs::read_to_string(out.path().join("de/plattformen/erp/index.html")).unwrap();
        let en = fs::read_to_string(out.path().join("en/plattformen/erp/index.html")).unwrap();
        assert!(de.contains("<html lang=\"de\">"));
        assert!(en.contains("<html lang=\"en\">"));
        assert!(en.contains("Modular Architecture"));
        assert!(de.contains("© 2026"));
    }

    #[test]
    fn test_missing_site_fails() {
        let err = load_site(Path::new("/definitely/not/a/site")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
