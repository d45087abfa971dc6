//! URL ↔ (locale, page) resolution and the language switch.

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::types::Page;

/// A request path resolved to exactly one content set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub locale: Locale,
    pub page: Page,
}

impl Route {
    pub fn new(locale: Locale, page: Page) -> Self {
        Self { locale, page }
    }

    /// Canonical site-relative path of this route
    pub fn path(&self) -> String {
        self.page.path(self.locale)
    }

    /// Every (locale, page) combination the site serves
    pub fn all() -> Vec<Route> {
        Locale::ALL
            .into_iter()
            .flat_map(|locale| Page::ALL.into_iter().map(move |page| Route::new(locale, page)))
            .collect()
    }
}

/// Resolve a request path of the form `/{locale}/{page-segment*}`.
///
/// Empty segments are ignored, so `/de/agb/` and `//de//agb` resolve like
/// `/de/agb`. Fails with `UnknownLocale` when the first segment is not a
/// supported locale (including the bare root), and `UnknownPage` when the
/// remaining segments name no page.
pub fn resolve_route(path: &str) -> Result<Route> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let code = segments.next().unwrap_or_default();
    let locale = code.parse::<Locale>()?;

    let slug = segments.collect::<Vec<_>>().join("/");
    let page = Page::from_slug(&slug)
        .ok_or_else(|| Error::UnknownPage(path.to_string()))?;

    Ok(Route::new(locale, page))
}

/// Replace the first path segment with `new_locale`, keeping the rest.
///
/// ```text
/// switch_locale("/de/plattformen/erp", En)  → "/en/plattformen/erp"
/// switch_locale("/", En)                    → "/en"
/// ```
pub fn switch_locale(current_path: &str, new_locale: Locale) -> String {
    let code = new_locale.code();
    let trimmed = current_path.trim_start_matches('/');

    if trimmed.is_empty() {
        return format!("/{}", code);
    }

    match trimmed.split_once('/') {
        Some((_, rest)) => format!("/{}/{}", code, rest),
        None => format!("/{}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        assert_eq!(
            resolve_route("/de").unwrap(),
            Route::new(Locale::De, Page::Home)
        );
        assert_eq!(
            resolve_route("/en/plattformen/erp").unwrap(),
            Route::new(Locale::En, Page::Erp)
        );
        assert_eq!(
            resolve_route("/de/plattformen/vermietung/").unwrap(),
            Route::new(Locale::De, Page::Rental)
        );
        assert_eq!(
            resolve_route("/en/agb?ref=footer").unwrap(),
            Route::new(Locale::En, Page::Terms)
        );
    }

    #[test]
    fn test_every_route_resolves_to_itself() {
        for route in Route::all() {
            assert_eq!(resolve_route(&route.path()).unwrap(), route);
        }
        assert_eq!(Route::all().len(), Locale::ALL.len() * Page::ALL.len());
    }

    #[test]
    fn test_unsupported_locale_is_not_found() {
        let err = resolve_route("/fr").unwrap_err();
        assert!(matches!(err, Error::UnknownLocale(ref code) if code == "fr"));
        assert!(err.is_not_found());

        assert!(resolve_route("/fr/plattformen").unwrap_err().is_not_found());
        assert!(resolve_route("/").unwrap_err().is_not_found());
    }

    #[test]
    fn test_unknown_page_is_not_found() {
        let err = resolve_route("/de/plattformen/crm").unwrap_err();
        assert!(matches!(err, Error::UnknownPage(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_switch_locale_keeps_rest_of_path() {
        assert_eq!(
            switch_locale("/de/plattformen/erp", Locale::En),
            "/en/plattformen/erp"
        );
        assert_eq!(switch_locale("/en/agb", Locale::De), "/de/agb");
        assert_eq!(switch_locale("/en", Locale::De), "/de");
        assert_eq!(switch_locale("/en/vermittlung/", Locale::De), "/de/vermittlung/");
    }

    #[test]
    fn test_switch_locale_without_segments_goes_to_locale_root() {
        assert_eq!(switch_locale("", Locale::En), "/en");
        assert_eq!(switch_locale("/", Locale::De), "/de");
        assert_eq!(switch_locale("///", Locale::En), "/en");
    }

    #[test]
    fn test_switch_to_same_locale_is_identity() {
        for route in Route::all() {
            assert_eq!(switch_locale(&route.path(), route.locale), route.path());
        }
    }
}
