use couture_validator::validate_site;
use std::path::PathBuf;

/// Check a site directory and print the findings.
///
/// Fails when the report carries errors; warnings alone pass.
pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("🔍 Validating site at: {}", path.display());
    println!();

    let report = validate_site(&path);

    for line in &report.info {
        println!("  ℹ {}", line);
    }
    if !report.info.is_empty() {
        println!();
    }

    for warning in &report.warnings {
        println!("  ⚠ {}", warning);
    }
    for error in &report.errors {
        println!("  ✗ {}", error);
    }

    if report.has_errors() {
        println!();
        anyhow::bail!(
            "Validation failed with {} error(s) and {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
    }

    println!();
    if report.is_clean() {
        println!("✅ Site is valid");
    } else {
        println!(
            "✅ Site is valid ({} warning(s))",
            report.warnings.len()
        );
    }

    Ok(())
}
