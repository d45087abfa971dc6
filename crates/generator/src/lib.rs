//! Static site generation: page composition, metadata, structured data and
//! the HTML layout shell.

pub mod compose;
pub mod html;
pub mod layout;
pub mod metadata;
pub mod render;
pub mod sections;
pub mod sitemap;
pub mod structured_data;
pub mod style;

#[cfg(test)]
mod test_support;

use chrono::{Datelike, Local, NaiveDate};
use couture_core::{Result, Route, Site};

pub use render::{render_not_found, render_page, render_root_redirect};
pub use style::Stylesheet;

/// URL prefix for files copied from the site's `public/` directory
pub const STATIC_PREFIX: &str = "/static";

/// Site-relative URL of a public file
pub fn static_url(file: &str) -> String {
    format!("{}/{}", STATIC_PREFIX, file.trim_start_matches('/'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year shown in the copyright line
    pub year: i32,
    /// `lastmod` of sitemap entries
    pub today: NaiveDate,
    /// Inject the preview reload script
    pub live_reload: bool,
}

impl RenderOptions {
    pub fn now() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            today,
            live_reload: false,
        }
    }

    pub fn with_live_reload(mut self) -> Self {
        self.live_reload = true;
        self
    }
}

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

/// Output path of a route, e.g. `en/plattformen/erp/index.html`
pub fn output_path(route: Route) -> String {
    match route.page.slug() {
        "" => format!("{}/index.html", route.locale.code()),
        slug => format!("{}/{}/index.html", route.locale.code(), slug),
    }
}

/// Render every page and generated file of the site
pub fn generate_site(site: &Site, opts: &RenderOptions) -> Result<GeneratedSite> {
    let mut pages = Route::all()
        .into_iter()
        .map(|route| Ok((output_path(route), render_page(site, route, opts)?)))
        .collect::<Result<Vec<_>>>()?;

    pages.push(("index.html".to_string(), render_root_redirect(site)));
    pages.push((
        "404.html".to_string(),
        render_not_found(site, site.config.default_locale, opts)?,
    ));
    pages.push((
        "sitemap.xml".to_string(),
        sitemap::sitemap_xml(&site.config, opts.today),
    ));
    pages.push(("robots.txt".to_string(), sitemap::robots_txt(&site.config)));

    let stylesheet = Stylesheet::get();
    let assets = vec![(
        format!(
            "{}/{}",
            style::STYLES_PREFIX.trim_start_matches('/'),
            stylesheet.file_name()
        ),
        stylesheet.css().as_bytes().to_vec(),
    )];

    Ok(GeneratedSite { pages, assets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::synthetic_site;
    use couture_core::{Locale, Page};

    #[test]
    fn test_output_paths() {
        assert_eq!(output_path(Route::new(Locale::De, Page::Home)), "de/index.html");
        assert_eq!(
            output_path(Route::new(Locale::En, Page::Rental)),
            "en/plattformen/vermietung/index.html"
        );
    }

    #[test]
    fn test_generate_site_outputs() {
        let site = synthetic_site();
        let opts = RenderOptions {
            year: 2026,
            today: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            live_reload: false,
        };
        let generated = generate_site(&site, &opts).unwrap();

        let paths: Vec<&str> = generated.pages.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths.len(), Route::all().len() + 4);
        for expected in ["index.html", "404.html", "sitemap.xml", "robots.txt", "de/agb/index.html"] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }

        assert_eq!(generated.assets.len(), 1);
        assert!(generated.assets[0].0.starts_with("styles/site-"));
        assert!(!generated.pages.iter().any(|(_, html)| html.contains("EventSource")));
    }

    #[test]
    fn test_static_url() {
        assert_eq!(static_url("logo.svg"), "/static/logo.svg");
        assert_eq!(static_url("/img/a.png"), "/static/img/a.png");
    }
}
