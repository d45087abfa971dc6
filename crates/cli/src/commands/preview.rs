use super::load_site;
use crate::server::{AppState, router};
use anyhow::{Context, Result};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::sync::broadcast;
use tracing::{debug, error, info};

/// Start preview server with hot reload for local development.
///
/// This command:
/// - Validates site.toml and both message tables up front
/// - Re-reads the site directory on every request
/// - Serves `public/` under `/static/`
/// - Watches for file changes and tells open pages to reload
///
/// # Arguments
///
/// * `path` - Path to site directory containing site.toml
/// * `port` - Port to serve on (default: 8080)
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("👀 Starting preview server...");
    println!("   Site: {}", path.display());

    let site = load_site(&path)?;
    println!("   ✓ Loaded: {}", site.config.name);
    println!("   ✓ Default locale: {}", site.config.default_locale);
    println!("   ✓ Team members: {}", site.config.team.len());

    let (reload_tx, _) = broadcast::channel::<()>(100);
    let app = router(AppState::live(path.clone(), reload_tx.clone()));

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            error!("File watcher error: {:#}", e);
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to port {}", port))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Editor swap files and dotfiles do not count as content changes
fn is_content_file(path: &Path) -> bool {
    let filename = path.file_name().unwrap_or_default().to_string_lossy();
    !filename.is_empty() && !filename.starts_with('.') && !filename.ends_with('~')
}

/// Watch the site directory and broadcast a reload on every content change
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher
        .watch(&path, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", path.display()))?;
    debug!(path = %path.display(), "watching for changes");

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                if let Some(changed) = event.paths.iter().find(|p| is_content_file(p)) {
                    info!(path = %changed.display(), "file changed, reloading");
                    // No subscribers just means no page is open
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_file_filter() {
        assert!(is_content_file(Path::new("site/messages/de.toml")));
        assert!(is_content_file(Path::new("site/public/logo.svg")));
        assert!(!is_content_file(Path::new("site/messages/.de.toml.swp")));
        assert!(!is_content_file(Path::new("site/site.toml~")));
        assert!(!is_content_file(Path::new("/")));
    }
}
