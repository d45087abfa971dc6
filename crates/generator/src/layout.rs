//! Layout shell: document head, header with navigation and language
//! switcher, footer.

use crate::RenderOptions;
use crate::html::{escape, escape_script_json};
use crate::metadata::Metadata;
use crate::style::Stylesheet;
use couture_core::keys::{FooterKey, NavKey};
use couture_core::{Key, Locale, Page, Result, Site, switch_locale};
use serde_json::Value;

/// Endpoint the preview server streams reload events on
pub const RELOAD_PATH: &str = "/_internal/reload";

/// Wrap a rendered `<main>` body into a complete HTML document
///
/// `current_path` is the route being rendered. Documents without a route,
/// such as the 404 page, pass `None`: no nav item is marked current and
/// the language switcher points at each locale's home page.
pub fn document(
    site: &Site,
    metadata: &Metadata,
    current_path: Option<&str>,
    structured_data: Option<&Value>,
    main: &str,
    opts: &RenderOptions,
) -> Result<String> {
    let locale = metadata.locale;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
{head}
</head>
<body>
{header}
<main id="main">
{main}
</main>
{footer}
{reload}</body>
</html>
"#,
        lang = locale.code(),
        head = head(site, metadata, structured_data),
        header = header(site, locale, current_path)?,
        main = main,
        footer = footer(site, locale, opts.year)?,
        reload = if opts.live_reload {
            live_reload_script()
        } else {
            String::new()
        },
    ))
}

fn head(site: &Site, meta: &Metadata, structured_data: Option<&Value>) -> String {
    let mut tags = vec![
        r#"<meta charset="utf-8">"#.to_string(),
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#.to_string(),
        format!("<title>{}</title>", escape(&meta.document_title)),
        meta_name("description", &meta.description),
    ];

    if !meta.keywords.is_empty() {
        tags.push(meta_name("keywords", &meta.keywords.join(", ")));
    }
    tags.push(meta_name("author", &meta.author));
    tags.push(meta_name("creator", &meta.author));
    tags.push(meta_name("publisher", &meta.author));
    tags.push(meta_name("robots", &meta.robots.content()));
    tags.push(meta_name("googlebot", &meta.robots.googlebot()));

    if let Some(canonical) = &meta.canonical {
        tags.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            escape(canonical)
        ));
    }
    for alternate in &meta.alternates {
        tags.push(format!(
            r#"<link rel="alternate" hreflang="{}" href="{}">"#,
            alternate.locale.code(),
            escape(&alternate.href)
        ));
    }

    let og = &meta.open_graph;
    tags.push(meta_property("og:type", og.kind));
    tags.push(meta_property("og:locale", og.locale));
    for alternate in &og.alternate_locales {
        tags.push(meta_property("og:locale:alternate", alternate));
    }
    tags.push(meta_property("og:site_name", &og.site_name));
    tags.push(meta_property("og:title", &og.title));
    tags.push(meta_property("og:description", &og.description));
    if let Some(url) = &og.url {
        tags.push(meta_property("og:url", url));
    }
    if let Some(image) = &og.image {
        tags.push(meta_property("og:image", image));
    }

    tags.push(meta_name("twitter:card", meta.twitter.card));
    tags.push(meta_name("twitter:title", &meta.twitter.title));
    tags.push(meta_name("twitter:description", &meta.twitter.description));

    tags.push(format!(
        r#"<link rel="stylesheet" href="{}">"#,
        Stylesheet::get().href()
    ));
    if let Some(logo) = &site.config.organization.logo {
        tags.push(format!(
            r#"<link rel="icon" href="{}">"#,
            escape(&crate::static_url(logo))
        ));
    }

    if let Some(data) = structured_data {
        tags.push(format!(
            r#"<script type="application/ld+json">{}</script>"#,
            escape_script_json(&data.to_string())
        ));
    }

    tags.join("\n")
}

fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{}" content="{}">"#,
        name,
        escape(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}">"#,
        property,
        escape(content)
    )
}

/// Links to every locale; targets follow [`switch_locale`]
pub fn language_switcher(current_path: &str, current: Locale, label: &str) -> String {
    let links: String = Locale::ALL
        .into_iter()
        .map(|locale| {
            let current_attr = if locale == current {
                r#" aria-current="true""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}" hreflang="{}" lang="{}" title="{}"{}>{}</a>"#,
                escape(&switch_locale(current_path, locale)),
                locale.code(),
                locale.code(),
                locale.display_name(),
                current_attr,
                locale.code().to_uppercase()
            )
        })
        .collect();

    format!(
        r#"<nav class="lang-switch" aria-label="{}">{}</nav>"#,
        escape(label),
        links
    )
}

fn header(site: &Site, locale: Locale, current_path: Option<&str>) -> Result<String> {
    let t = |key: NavKey| site.catalog.text(locale, Key::Nav(key));
    let current = current_path.map(|path| path.trim_end_matches('/'));

    let nav_links = [
        (Page::Home, NavKey::Home),
        (Page::Platforms, NavKey::Platforms),
        (Page::Talent, NavKey::Talent),
    ]
    .into_iter()
    .map(|(page, key)| {
        let path = page.path(locale);
        let active = if current == Some(path.as_str()) {
            r#" aria-current="page""#
        } else {
            ""
        };
        Ok(format!(
            r#"<a href="{}"{}>{}</a>"#,
            path,
            active,
            escape(t(key)?)
        ))
    })
    .collect::<Result<Vec<_>>>()?
    .join("");

    let home = Page::Home.path(locale);
    let switcher = language_switcher(current_path.unwrap_or(&home), locale, t(NavKey::Language)?);

    let logo = match &site.config.organization.logo {
        Some(logo) => format!(
            r#"<img src="{}" alt="" width="32" height="32">"#,
            escape(&crate::static_url(logo))
        ),
        None => String::new(),
    };

    Ok(format!(
        r#"<header class="site-header">
<div class="container header-inner">
<a class="brand" href="{home}">{logo}<span>{name}</span></a>
<nav class="main-nav" aria-label="{nav_label}">{nav_links}</nav>
{switcher}
<details class="mobile-menu">
<summary>{menu}</summary>
<nav aria-label="{menu}">{nav_links}</nav>
{switcher}
</details>
</div>
</header>"#,
        home = Page::Home.path(locale),
        logo = logo,
        name = escape(&site.config.name),
        nav_label = escape(t(NavKey::Home)?),
        nav_links = nav_links,
        switcher = switcher,
        menu = escape(t(NavKey::Menu)?),
    ))
}

fn footer(site: &Site, locale: Locale, year: i32) -> Result<String> {
    let nav = |key: NavKey| site.catalog.text(locale, Key::Nav(key)).map(escape);
    let year = year.to_string();

    Ok(format!(
        r#"<footer class="site-footer">
<div class="container footer-grid">
<div class="footer-brand">
<p class="brand">{name}</p>
<p>{tagline}</p>
<p><a href="{mailto}">{email}</a></p>
</div>
<nav aria-label="{platforms}">
<h2>{platforms}</h2>
<a href="{erp_href}">{erp}</a>
<a href="{rental_href}">{rental}</a>
<a href="{talent_href}">{talent}</a>
</nav>
<nav aria-label="{legal}">
<h2>{legal}</h2>
<a href="{imprint_href}">{imprint}</a>
<a href="{privacy_href}">{privacy}</a>
<a href="{terms_href}">{terms}</a>
</nav>
</div>
<div class="container footer-bottom">
<p>{copyright}</p>
<p>{made_with}</p>
</div>
</footer>"#,
        name = escape(&site.config.name),
        tagline = escape(site.catalog.text(locale, Key::Footer(FooterKey::Tagline))?),
        mailto = escape(&site.config.mailto()),
        email = escape(&site.config.organization.email),
        platforms = nav(NavKey::Platforms)?,
        erp_href = Page::Erp.path(locale),
        erp = nav(NavKey::Erp)?,
        rental_href = Page::Rental.path(locale),
        rental = nav(NavKey::Rental)?,
        talent_href = Page::Talent.path(locale),
        talent = nav(NavKey::Talent)?,
        legal = nav(NavKey::Legal)?,
        imprint_href = Page::Imprint.path(locale),
        imprint = nav(NavKey::Imprint)?,
        privacy_href = Page::Privacy.path(locale),
        privacy = nav(NavKey::Privacy)?,
        terms_href = Page::Terms.path(locale),
        terms = nav(NavKey::Terms)?,
        copyright = escape(&site.catalog.format(
            locale,
            Key::Footer(FooterKey::Copyright),
            &[("year", year.as_str())]
        )?),
        made_with = escape(site.catalog.text(locale, Key::Footer(FooterKey::MadeWith))?),
    ))
}

fn live_reload_script() -> String {
    format!(
        r#"<script>
const source = new EventSource('{}');
source.onmessage = () => location.reload();
source.onerror = () => source.close();
</script>
"#,
        RELOAD_PATH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::build_metadata;
    use crate::test_support::synthetic_site;
    use chrono::NaiveDate;

    fn opts(live_reload: bool) -> RenderOptions {
        RenderOptions {
            year: 2026,
            today: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            live_reload,
        }
    }

    #[test]
    fn test_language_switcher_rewrites_first_segment() {
        let html = language_switcher("/de/plattformen/erp", Locale::De, "Sprache");
        assert!(html.contains(r#"<a href="/de/plattformen/erp" hreflang="de" lang="de" title="Deutsch" aria-current="true">DE</a>"#));
        assert!(html.contains(r#"<a href="/en/plattformen/erp" hreflang="en" lang="en" title="English">EN</a>"#));
    }

    #[test]
    fn test_document_head_and_footer() {
        let site = synthetic_site();
        let meta = build_metadata(&site, Locale::En, Page::Erp).unwrap();
        let html = document(&site, &meta, Some("/en/plattformen/erp"), None, "<p>body</p>", &opts(false)).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/en/plattformen/erp">"#));
        assert!(html.contains(r#"<link rel="alternate" hreflang="de" href="https://example.com/de/plattformen/erp">"#));
        assert!(html.contains("en footer.copyright 2026"));
        assert!(html.contains(&Stylesheet::get().href()));
        assert!(!html.contains("EventSource"));
    }

    #[test]
    fn test_active_nav_item_is_marked() {
        let site = synthetic_site();
        let meta = build_metadata(&site, Locale::De, Page::Talent).unwrap();
        let html = document(&site, &meta, Some("/de/vermittlung/"), None, "", &opts(true)).unwrap();
        assert!(html.contains(r#"<a href="/de/vermittlung" aria-current="page">de nav.talent</a>"#));
        assert!(html.contains(r#"<a href="/en/vermittlung/" hreflang="en""#));
        assert!(html.contains(RELOAD_PATH));
    }

    #[test]
    fn test_structured_data_is_embedded_safely() {
        let site = synthetic_site();
        let meta = build_metadata(&site, Locale::De, Page::Home).unwrap();
        let data = serde_json::json!({ "name": "</script><b>" });
        let html = document(&site, &meta, Some("/de"), Some(&data), "", &opts(false)).unwrap();
        assert!(html.contains(r#"<script type="application/ld+json">{"name":"<\/script><b>"}</script>"#));
    }
}
