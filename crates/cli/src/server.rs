//! HTTP surface shared by `preview` and `serve`.
//!
//! Routes: `/` redirects to the default locale, `/{locale}/{page*}` renders
//! pages, `/static/*` serves `public/`, `/styles/*` the fingerprinted
//! stylesheet. In preview mode `/_internal/reload` streams reload events.

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, Uri, header},
    response::{
        Html, IntoResponse, Redirect, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use couture_core::{Error as SiteError, Locale, Page, Site, resolve_route};
use couture_generator::html::escape;
use couture_generator::layout::RELOAD_PATH;
use couture_generator::sitemap::{robots_txt, sitemap_xml};
use couture_generator::{RenderOptions, STATIC_PREFIX, Stylesheet, render_not_found, render_page};
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

#[derive(Clone)]
enum SiteSource {
    /// Loaded once at startup
    Loaded(Arc<Site>),
    /// Re-read from disk on every request
    Live(PathBuf),
}

#[derive(Clone)]
pub struct AppState {
    source: SiteSource,
    reload_tx: Option<broadcast::Sender<()>>,
}

impl AppState {
    pub fn loaded(site: Site) -> Self {
        Self {
            source: SiteSource::Loaded(Arc::new(site)),
            reload_tx: None,
        }
    }

    pub fn live(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Self {
        Self {
            source: SiteSource::Live(path),
            reload_tx: Some(reload_tx),
        }
    }

    fn site(&self) -> Result<Arc<Site>, SiteError> {
        match &self.source {
            SiteSource::Loaded(site) => Ok(Arc::clone(site)),
            SiteSource::Live(path) => Site::load(path).map(Arc::new),
        }
    }

    fn public_dir(&self) -> PathBuf {
        match &self.source {
            SiteSource::Loaded(site) => site.public_dir(),
            SiteSource::Live(path) => path.join(couture_core::site::PUBLIC_DIR),
        }
    }

    fn options(&self) -> RenderOptions {
        let opts = RenderOptions::now();
        if self.reload_tx.is_some() {
            opts.with_live_reload()
        } else {
            opts
        }
    }
}

pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/styles/{file}", get(stylesheet_handler))
        .nest_service(STATIC_PREFIX, ServeDir::new(state.public_dir()));

    if state.reload_tx.is_some() {
        app = app.route(RELOAD_PATH, get(sse_handler));
    }

    app.fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error page shown when the site cannot be loaded or rendered
fn error_response(e: &SiteError) -> Response {
    error!("{}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(format!(
            r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Configuration Error</h1>
<pre>{}</pre>
</body></html>"#,
            escape(&e.to_string())
        )),
    )
        .into_response()
}

async fn root_handler(State(state): State<AppState>) -> Response {
    match state.site() {
        Ok(site) => Redirect::temporary(&Page::Home.path(site.config.default_locale)).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn robots_handler(State(state): State<AppState>) -> Response {
    match state.site() {
        Ok(site) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            robots_txt(&site.config),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

async fn sitemap_handler(State(state): State<AppState>) -> Response {
    match state.site() {
        Ok(site) => (
            [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
            sitemap_xml(&site.config, state.options().today),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

async fn stylesheet_handler(Path(file): Path<String>) -> Response {
    let stylesheet = Stylesheet::get();
    if file != stylesheet.file_name() {
        return StatusCode::NOT_FOUND.into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        stylesheet.css(),
    )
        .into_response()
}

/// Render `/{locale}/{page*}`; anything else is a localized 404
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let site = match state.site() {
        Ok(site) => site,
        Err(e) => return error_response(&e),
    };
    let opts = state.options();

    match resolve_route(uri.path()) {
        Ok(route) => match render_page(&site, route, &opts) {
            Ok(html) => Html(html).into_response(),
            Err(e) => error_response(&e),
        },
        Err(e) if e.is_not_found() => {
            warn!(path = %uri.path(), "{}", e);
            let locale = uri
                .path()
                .split('/')
                .find(|segment| !segment.is_empty())
                .and_then(Locale::from_code)
                .unwrap_or(site.config.default_locale);
            match render_not_found(&site, locale, &opts) {
                Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
                Err(e) => error_response(&e),
            }
        }
        Err(e) => error_response(&e),
    }
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Result<Sse<impl futures::Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    let mut rx = state
        .reload_tx
        .as_ref()
        .ok_or(StatusCode::NOT_FOUND)?
        .subscribe();

    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(()) => yield Ok(Event::default().data("reload")),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
