//! `sitemap.xml` and `robots.txt`.

use crate::html::escape;
use chrono::NaiveDate;
use couture_core::{Locale, Page, SiteConfig};

/// Internal prefix for preview endpoints, kept out of crawlers
pub const INTERNAL_PREFIX: &str = "/_internal/";

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    /// `(hreflang, url)` for every supported locale
    pub alternates: Vec<(Locale, String)>,
    pub last_modified: NaiveDate,
    pub change_frequency: &'static str,
    pub priority: f32,
}

/// One entry per locale and indexable page
pub fn sitemap_entries(config: &SiteConfig, last_modified: NaiveDate) -> Vec<SitemapEntry> {
    Locale::ALL
        .into_iter()
        .flat_map(|locale| {
            Page::SITEMAP.into_iter().map(move |page| SitemapEntry {
                url: config.absolute_url(&page.path(locale)),
                alternates: Locale::ALL
                    .into_iter()
                    .map(|alt| (alt, config.absolute_url(&page.path(alt))))
                    .collect(),
                last_modified,
                change_frequency: "monthly",
                priority: if page == Page::Home { 1.0 } else { 0.8 },
            })
        })
        .collect()
}

pub fn sitemap_xml(config: &SiteConfig, last_modified: NaiveDate) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in sitemap_entries(config, last_modified) {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(&entry.url)));
        for (locale, href) in &entry.alternates {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                locale.code(),
                escape(href)
            ));
        }
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\nDisallow: {}\n\nSitemap: {}\n",
        INTERNAL_PREFIX,
        config.absolute_url("/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::synthetic_site;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_entries_are_locales_times_pages() {
        let site = synthetic_site();
        let entries = sitemap_entries(&site.config, date());
        assert_eq!(entries.len(), Locale::ALL.len() * Page::SITEMAP.len());
        for entry in &entries {
            let codes: Vec<&str> = entry.alternates.iter().map(|(l, _)| l.code()).collect();
            assert_eq!(codes, ["de", "en"]);
        }
    }

    #[test]
    fn test_priorities_and_urls() {
        let site = synthetic_site();
        let entries = sitemap_entries(&site.config, date());
        assert_eq!(entries[0].url, "https://example.com/de");
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[1].priority, 0.8);
        assert!(entries.iter().all(|e| !e.url.contains("impressum")));
    }

    #[test]
    fn test_xml_shape() {
        let site = synthetic_site();
        let xml = sitemap_xml(&site.config, date());
        assert_eq!(xml.matches("<url>").count(), 10);
        assert_eq!(xml.matches("<xhtml:link").count(), 20);
        assert!(xml.contains("<lastmod>2026-10-16</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"en\" href=\"https://example.com/en/plattformen/erp\"/>"
        ));
    }

    #[test]
    fn test_robots_policy() {
        let site = synthetic_site();
        let robots = robots_txt(&site.config);
        assert!(robots.contains("Disallow: /api/\n"));
        assert!(robots.contains("Disallow: /_internal/\n"));
        assert!(robots.ends_with("Sitemap: https://example.com/sitemap.xml\n"));
    }
}
