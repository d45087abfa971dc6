use crate::locale::{Locale, Localized};
use serde::{Deserialize, Serialize};

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public origin without trailing slash, e.g. `https://example.com`
    pub base_url: String,
    pub name: String,
    pub default_locale: Locale,
    pub organization: Organization,
    pub links: Links,
    pub team: Vec<TeamMember>,
}

impl SiteConfig {
    /// Absolute URL for a site-relative path (`/de/agb`)
    pub fn absolute_url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return self.base_url.clone();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `mailto:` link for the contact address
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.organization.email)
    }
}

/// Legal entity behind the site
///
/// Everything optional here is left out of rendered pages when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub legal_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Logo file below `public/`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_director: Option<String>,
    pub same_as: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register: Option<RegisterEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub postal_code: String,
    pub locality: String,
    /// ISO 3166-1 alpha-2
    pub country: String,
}

/// Commercial register entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterEntry {
    pub court: String,
    pub number: String,
}

/// Outbound links referenced by page content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparring: Option<String>,
}

/// One entry of the talent page's team roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: Localized<String>,
    pub description: Localized<String>,
}

impl TeamMember {
    /// First letter of the name, used as avatar
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Every page the site serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Home,
    Platforms,
    Erp,
    Rental,
    Talent,
    Imprint,
    Privacy,
    Terms,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Platforms,
        Page::Erp,
        Page::Rental,
        Page::Talent,
        Page::Imprint,
        Page::Privacy,
        Page::Terms,
    ];

    /// Pages listed in the sitemap (legal pages are not indexed)
    pub const SITEMAP: [Page; 5] = [
        Page::Home,
        Page::Platforms,
        Page::Erp,
        Page::Rental,
        Page::Talent,
    ];

    /// Path below the locale segment; empty for the home page.
    /// Segments are the same in every locale.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Platforms => "plattformen",
            Page::Erp => "plattformen/erp",
            Page::Rental => "plattformen/vermietung",
            Page::Talent => "vermittlung",
            Page::Imprint => "impressum",
            Page::Privacy => "datenschutz",
            Page::Terms => "agb",
        }
    }

    /// Site-relative path in `locale`, e.g. `/en/plattformen/erp`
    pub fn path(self, locale: Locale) -> String {
        match self.slug() {
            "" => format!("/{}", locale.code()),
            slug => format!("/{}/{}", locale.code(), slug),
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn is_indexable(self) -> bool {
        !matches!(self, Page::Imprint | Page::Privacy | Page::Terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_paths() {
        assert_eq!(Page::Home.path(Locale::De), "/de");
        assert_eq!(Page::Erp.path(Locale::En), "/en/plattformen/erp");
        assert_eq!(Page::Terms.path(Locale::De), "/de/agb");
    }

    #[test]
    fn test_slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::from_slug("plattformen/crm"), None);
    }

    #[test]
    fn test_sitemap_pages_are_exactly_the_indexable_ones() {
        let indexable: Vec<Page> = Page::ALL.into_iter().filter(|p| p.is_indexable()).collect();
        assert_eq!(indexable, Page::SITEMAP);
    }

    #[test]
    fn test_team_member_initial() {
        let member = TeamMember {
            id: "erika".into(),
            name: "erika".into(),
            role: Localized::new("r".into(), "r".into()),
            description: Localized::new("d".into(), "d".into()),
        };
        assert_eq!(member.initial(), "E");
    }
}
