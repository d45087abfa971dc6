use crate::RenderOptions;
use crate::compose::compose_page;
use crate::html::escape;
use crate::layout;
use crate::metadata::{build_metadata, default_title, not_found_metadata};
use crate::sections::render_sections;
use crate::structured_data::structured_data;
use couture_core::keys::NotFoundKey;
use couture_core::{Key, Locale, Page, Result, Route, Site};

/// Render the complete HTML document for a route
pub fn render_page(site: &Site, route: Route, opts: &RenderOptions) -> Result<String> {
    let metadata = build_metadata(site, route.locale, route.page)?;
    let data = structured_data(site, route.locale, route.page)?;
    let composed = compose_page(site, route.page, route.locale)?;

    layout::document(
        site,
        &metadata,
        Some(&route.path()),
        data.as_ref(),
        &render_sections(&composed),
        opts,
    )
}

/// Render the not-found page in `locale`
pub fn render_not_found(site: &Site, locale: Locale, opts: &RenderOptions) -> Result<String> {
    let metadata = not_found_metadata(site, locale)?;
    let t = |key: NotFoundKey| site.catalog.text(locale, Key::NotFound(key)).map(escape);

    let main = format!(
        r#"<section class="not-found">
<div class="container">
<p class="status">404</p>
<h1>{}</h1>
<p>{}</p>
<a class="button" href="{}">{}</a>
</div>
</section>"#,
        t(NotFoundKey::Title)?,
        t(NotFoundKey::Description)?,
        Page::Home.path(locale),
        t(NotFoundKey::BackHome)?
    );

    layout::document(site, &metadata, None, None, &main, opts)
}

/// Static `index.html` that forwards to the default locale
pub fn render_root_redirect(site: &Site) -> String {
    let locale = site.config.default_locale;
    let target = Page::Home.path(locale);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
<meta name="robots" content="noindex">
<meta http-equiv="refresh" content="0; url={target}">
<link rel="canonical" href="{canonical}">
</head>
<body>
<p><a href="{target}">{target}</a></p>
</body>
</html>
"#,
        lang = locale.code(),
        title = escape(&default_title(&site.config, locale)),
        target = target,
        canonical = escape(&site.config.absolute_url(&target)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::synthetic_site;
    use chrono::NaiveDate;

    fn opts() -> RenderOptions {
        RenderOptions {
            year: 2026,
            today: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            live_reload: false,
        }
    }

    #[test]
    fn test_every_route_renders() {
        let site = synthetic_site();
        for route in Route::all() {
            let html = render_page(&site, route, &opts()).unwrap();
            assert!(html.contains(&format!("<html lang=\"{}\">", route.locale.code())));
            assert!(html.ends_with("</html>\n"));
        }
    }

    #[test]
    fn test_legal_pages_carry_no_structured_data() {
        let site = synthetic_site();
        let html = render_page(&site, Route::new(Locale::De, Page::Terms), &opts()).unwrap();
        assert!(!html.contains("application/ld+json"));
        assert!(html.contains(r#"<meta name="robots" content="noindex, follow">"#));

        let html = render_page(&site, Route::new(Locale::De, Page::Home), &opts()).unwrap();
        assert!(html.contains("application/ld+json"));
    }

    #[test]
    fn test_not_found_is_localized() {
        let site = synthetic_site();
        let html = render_not_found(&site, Locale::En, &opts()).unwrap();
        assert!(html.contains("<h1>en notFound.title</h1>"));
        assert!(html.contains(r#"<a class="button" href="/en">en notFound.backHome</a>"#));
    }

    #[test]
    fn test_not_found_marks_no_nav_item_current() {
        let site = synthetic_site();
        let html = render_not_found(&site, Locale::En, &opts()).unwrap();
        assert!(!html.contains(r#"aria-current="page""#));
        assert!(html.contains(r#"<a href="/en">en nav.home</a>"#));
        assert!(html.contains(r#"<a href="/de" hreflang="de""#));

        let html = render_page(&site, Route::new(Locale::En, Page::Home), &opts()).unwrap();
        assert!(html.contains(r#"<a href="/en" aria-current="page">en nav.home</a>"#));
    }

    #[test]
    fn test_root_redirect_targets_default_locale() {
        let site = synthetic_site();
        let html = render_root_redirect(&site);
        assert!(html.contains(r#"<meta http-equiv="refresh" content="0; url=/de">"#));
    }
}
