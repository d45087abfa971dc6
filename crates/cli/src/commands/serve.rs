use super::load_site;
use crate::server::{AppState, router};
use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Serve the site, loading content once at startup.
///
/// Broken content fails here rather than on the first request; restart
/// to pick up edits.
pub async fn run(path: PathBuf, host: IpAddr, port: u16) -> Result<()> {
    println!("🌐 Starting server...");
    println!("   Site: {}", path.display());

    let site = load_site(&path)?;
    println!("   ✓ Loaded: {}", site.config.name);
    println!("   ✓ Base URL: {}", site.config.base_url);

    let app = router(AppState::loaded(site));

    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    println!("\n🚀 Listening on http://{}", addr);
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
