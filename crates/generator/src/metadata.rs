//! Per-page SEO metadata.
//!
//! Page titles, descriptions and keywords are fixed strings, one per locale.
//! Legal pages take their title from the message table instead and are kept
//! out of search indexes.

use couture_core::keys::{ImprintKey, NotFoundKey, PrivacyKey, TermsKey};
use couture_core::{Key, Locale, Localized, Page, Result, Site, SiteConfig};

/// Hreflang link to a page's translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub locale: Locale,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    pub const INDEX: Robots = Robots {
        index: true,
        follow: true,
    };
    pub const NOINDEX: Robots = Robots {
        index: false,
        follow: true,
    };

    /// Value of `<meta name="robots">`
    pub fn content(&self) -> String {
        format!(
            "{}, {}",
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" }
        )
    }

    /// Value of `<meta name="googlebot">`
    pub fn googlebot(&self) -> String {
        if self.index {
            format!(
                "{}, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
                self.content()
            )
        } else {
            self.content()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub kind: &'static str,
    pub locale: &'static str,
    pub alternate_locales: Vec<&'static str>,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
}

/// Everything that goes into a page's `<head>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub locale: Locale,
    /// Page title without the site name
    pub title: String,
    /// Content of `<title>`
    pub document_title: String,
    pub description: String,
    pub keywords: Vec<&'static str>,
    pub author: String,
    pub canonical: Option<String>,
    pub alternates: Vec<Alternate>,
    pub robots: Robots,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

type Keywords = Localized<&'static [&'static str]>;

struct PageCopy {
    title: Localized<&'static str>,
    description: Option<Localized<&'static str>>,
    keywords: Option<Keywords>,
}

/// Where a page's title comes from
enum TitleSource {
    Fixed(&'static PageCopy),
    Messages(Key),
}

const SITE_TAGLINE: Localized<&str> = Localized::new(
    "Softwareentwicklung & Vibe Coding Beratung",
    "Software Development & Vibe Coding Consulting",
);

const SITE_DESCRIPTION: Localized<&str> = Localized::new(
    "Vibe Coding Experten: Wir unterstützen Sie bei der KI-gestützten Entwicklung mit Claude Code, Lovable & Co. Dazu IT-Freelancer Vermittlung, ERP-Systeme und Starter Templates. Maßgeschneiderte Software aus Deutschland.",
    "Vibe Coding experts: We support your AI-powered development with Claude Code, Lovable & more. Plus IT freelancer network, ERP systems and starter templates. Custom software from Germany.",
);

const SITE_KEYWORDS: Keywords = Keywords::new(
    &[
        "Softwareentwicklung",
        "IT-Beratung",
        "IT Freelancer Vermittlung",
        "ERP System",
        "Vibe Coding",
        "KI gestützte Softwareentwicklung",
        "Claude Code Entwicklung",
        "Lovable App Entwicklung",
        "Vibe Coding Beratung Deutschland",
        "AI Pair Programming Service",
        "IT Freelancer Deutschland",
        "Fullstack Entwickler Freelancer",
        "Software Architektur Beratung",
        "Code Review Service",
        "Testautomatisierung Experten",
        "ERP System Mittelstand",
        "Vermietungssoftware",
        "Starter Templates Software",
        "Business Consultant IT",
        "DevOps Freelancer",
        "Maßgeschneiderte Software",
        "Software nach Maß",
        "Individuelle Softwareentwicklung",
    ],
    &[
        "Software Development",
        "IT Consulting",
        "IT Freelancer Network",
        "ERP System",
        "Vibe Coding",
        "AI powered software development",
        "Claude Code development",
        "Lovable app development",
        "Vibe coding consulting Germany",
        "AI pair programming service",
        "IT freelancers Germany",
        "Fullstack developer freelancer",
        "Software architecture consulting",
        "Code review service",
        "Test automation experts",
        "ERP system SMB",
        "Rental management software",
        "Starter templates software",
        "Business consultant IT",
        "DevOps freelancer",
        "Custom software development",
        "Bespoke software solutions",
        "Tailored software Germany",
    ],
);

const OG_TAGLINE: Localized<&str> =
    Localized::new("Vibe Coding & IT-Beratung", "Vibe Coding & IT Consulting");

const OG_DESCRIPTION: Localized<&str> = Localized::new(
    "KI-gestützte Softwareentwicklung, IT-Freelancer und Starter Templates. Code Couture: maßgeschneiderte Software für Ihren Erfolg.",
    "AI-powered software development, IT freelancers and starter templates. Code Couture: custom software for your success.",
);

const TWITTER_TAGLINE: Localized<&str> =
    Localized::new("Vibe Coding Experten", "Vibe Coding Experts");

const TWITTER_DESCRIPTION: Localized<&str> = Localized::new(
    "Vibe Coding Beratung, IT-Freelancer und Starter Templates aus Deutschland.",
    "Vibe coding consulting, IT freelancers and starter templates from Germany.",
);

static HOME: PageCopy = PageCopy {
    title: Localized::new(
        "Vibe Coding Beratung & IT-Freelancer",
        "Vibe Coding Consulting & IT Freelancers",
    ),
    description: Some(Localized::new(
        "Ihr Partner für Vibe Coding: Beratung für Claude Code, Lovable & KI-Tools. Dazu erfahrene IT-Freelancer (Entwickler, Architekten, Tester) und Starter Templates für ERP, CRM & mehr.",
        "Your partner for vibe coding: Consulting for Claude Code, Lovable & AI tools. Plus experienced IT freelancers (developers, architects, testers) and starter templates for ERP, CRM & more.",
    )),
    keywords: None,
};

static PLATFORMS: PageCopy = PageCopy {
    title: Localized::new(
        "Vibe Starter Templates | ERP, CRM & Vermietungssoftware",
        "Vibe Starter Templates | ERP, CRM & Rental Software",
    ),
    description: Some(Localized::new(
        "Fertige Starter-Templates für Ihre Software-Projekte: ERP-Systeme für den Mittelstand, Vermietungsplattformen, CRM und mehr. Schneller Projektstart mit Lovable oder Claude Code.",
        "Ready-made starter templates for your software projects: ERP systems for SMBs, rental platforms, CRM and more. Quick project start with Lovable or Claude Code.",
    )),
    keywords: Some(Keywords::new(
        &[
            "Starter Templates Software",
            "ERP System Mittelstand",
            "Vermietungssoftware",
            "CRM Template",
            "Schulungsplattform Software",
            "Lovable Templates",
            "Claude Code Vorlagen",
            "Software Boilerplate",
            "SaaS Template",
            "Vibe Coding Templates",
        ],
        &[
            "Starter templates software",
            "ERP system SMB",
            "Rental management software",
            "CRM template",
            "Training platform software",
            "Lovable templates",
            "Claude Code templates",
            "Software boilerplate",
            "SaaS template",
            "Vibe coding templates",
        ],
    )),
};

static ERP: PageCopy = PageCopy {
    title: Localized::new(
        "ERP-System für Mittelstand | Modulares Cloud-ERP Template",
        "ERP System for SMBs | Modular Cloud ERP Template",
    ),
    description: Some(Localized::new(
        "Modulares ERP-System Template für mittelständische Unternehmen. Cloud-native, API-first, mit Echtzeit-Analytics. Flexibel anpassbar mit Lovable oder Claude Code.",
        "Modular ERP system template for medium-sized businesses. Cloud-native, API-first, with real-time analytics. Flexibly customizable with Lovable or Claude Code.",
    )),
    keywords: Some(Keywords::new(
        &[
            "ERP System Mittelstand",
            "modulares ERP",
            "Cloud ERP",
            "ERP Template",
            "ERP Software Deutschland",
            "Warenwirtschaft",
            "Unternehmenssteuerung",
            "API-first ERP",
            "ERP Lösung KMU",
            "Business Intelligence Dashboard",
        ],
        &[
            "ERP system SMB",
            "modular ERP",
            "cloud ERP",
            "ERP template",
            "ERP software Germany",
            "inventory management",
            "enterprise management",
            "API-first ERP",
            "ERP solution SME",
            "business intelligence dashboard",
        ],
    )),
};

static RENTAL: PageCopy = PageCopy {
    title: Localized::new(
        "Vermietungssoftware | Online-Buchung & Bestandsverwaltung",
        "Rental Software | Online Booking & Inventory Management",
    ),
    description: Some(Localized::new(
        "Digitale Vermietungsplattform mit Online-Buchung, Bestandsverwaltung, automatischer Abrechnung und Reporting. Perfekt für Vermietungsunternehmen aller Art.",
        "Digital rental platform with online booking, inventory management, automatic billing and reporting. Perfect for rental businesses of all types.",
    )),
    keywords: Some(Keywords::new(
        &[
            "Vermietungssoftware",
            "Online Buchungssystem",
            "Bestandsverwaltung Software",
            "Mietverwaltung",
            "Vermietungsplattform",
            "Buchungssoftware",
            "Gerätevermietung Software",
            "Fahrzeugvermietung System",
            "Verleih Software",
            "Auslastungsanalyse",
        ],
        &[
            "Rental software",
            "Online booking system",
            "Inventory management software",
            "Rental management",
            "Rental platform",
            "Booking software",
            "Equipment rental software",
            "Vehicle rental system",
            "Rental business software",
            "Utilization analysis",
        ],
    )),
};

static TALENT: PageCopy = PageCopy {
    title: Localized::new(
        "IT-Freelancer Vermittlung | Entwickler, Architekten & Consultants",
        "IT Freelancer Network | Developers, Architects & Consultants",
    ),
    description: Some(Localized::new(
        "Erfahrene IT-Freelancer für Ihre Projekte: Fullstack Entwickler, Software Architekten, Business Consultants, QA & DevOps Experten. Persönlich geprüft, sofort verfügbar.",
        "Experienced IT freelancers for your projects: Fullstack developers, software architects, business consultants, QA & DevOps experts. Personally vetted, immediately available.",
    )),
    keywords: Some(Keywords::new(
        &[
            "IT Freelancer Vermittlung",
            "Fullstack Entwickler Freelancer",
            "Software Architekt Freelancer",
            "Business Consultant IT",
            "QA Engineer Freelancer",
            "DevOps Freelancer Deutschland",
            "IT Experten Vermittlung",
            "Freelancer Netzwerk IT",
            "Senior Developer Freelancer",
            "Testautomatisierung Experte",
        ],
        &[
            "IT freelancer network",
            "Fullstack developer freelancer",
            "Software architect freelancer",
            "Business consultant IT",
            "QA engineer freelancer",
            "DevOps freelancer Germany",
            "IT experts network",
            "Freelancer network IT",
            "Senior developer freelancer",
            "Test automation expert",
        ],
    )),
};

/// `<title>` for a page title: `"{title} | {site name}"`
///
/// Both parts are inserted verbatim; neither is scanned for placeholders.
pub fn document_title(config: &SiteConfig, title: &str) -> String {
    format!("{} | {}", title, config.name)
}

/// Title used where no page title applies, e.g. the root redirect
pub fn default_title(config: &SiteConfig, locale: Locale) -> String {
    format!("{} | {}", config.name, SITE_TAGLINE.get(locale))
}

/// Build the metadata record of `page` in `locale`
pub fn build_metadata(site: &Site, locale: Locale, page: Page) -> Result<Metadata> {
    let config = &site.config;

    let (title, description, keywords) = match title_source(page) {
        TitleSource::Messages(key) => (
            site.catalog.text(locale, key)?.to_string(),
            SITE_DESCRIPTION.get(locale).to_string(),
            SITE_KEYWORDS.get(locale).to_vec(),
        ),
        TitleSource::Fixed(copy) => {
            (
                copy.title.get(locale).to_string(),
                copy.description
                    .as_ref()
                    .unwrap_or(&SITE_DESCRIPTION)
                    .get(locale)
                    .to_string(),
                copy.keywords
                    .as_ref()
                    .unwrap_or(&SITE_KEYWORDS)
                    .get(locale)
                    .to_vec(),
            )
        }
    };

    let canonical = config.absolute_url(&page.path(locale));
    let alternates = Locale::ALL
        .into_iter()
        .map(|alt| Alternate {
            locale: alt,
            href: config.absolute_url(&page.path(alt)),
        })
        .collect();

    let robots = if page.is_indexable() {
        Robots::INDEX
    } else {
        Robots::NOINDEX
    };

    Ok(Metadata {
        locale,
        document_title: document_title(config, &title),
        title,
        description,
        keywords,
        author: config.organization.legal_name.clone(),
        canonical: Some(canonical.clone()),
        alternates,
        robots,
        open_graph: open_graph(config, locale, Some(canonical)),
        twitter: twitter_card(config, locale),
    })
}

/// Metadata of the not-found page: localized title, never indexed
pub fn not_found_metadata(site: &Site, locale: Locale) -> Result<Metadata> {
    let config = &site.config;
    let title = site
        .catalog
        .text(locale, Key::NotFound(NotFoundKey::Title))?
        .to_string();

    Ok(Metadata {
        locale,
        document_title: document_title(config, &title),
        title,
        description: site
            .catalog
            .text(locale, Key::NotFound(NotFoundKey::Description))?
            .to_string(),
        keywords: Vec::new(),
        author: config.organization.legal_name.clone(),
        canonical: None,
        alternates: Vec::new(),
        robots: Robots {
            index: false,
            follow: false,
        },
        open_graph: open_graph(config, locale, None),
        twitter: twitter_card(config, locale),
    })
}

fn title_source(page: Page) -> TitleSource {
    match page {
        Page::Home => TitleSource::Fixed(&HOME),
        Page::Platforms => TitleSource::Fixed(&PLATFORMS),
        Page::Erp => TitleSource::Fixed(&ERP),
        Page::Rental => TitleSource::Fixed(&RENTAL),
        Page::Talent => TitleSource::Fixed(&TALENT),
        Page::Imprint => TitleSource::Messages(Key::Imprint(ImprintKey::Title)),
        Page::Privacy => TitleSource::Messages(Key::Privacy(PrivacyKey::Title)),
        Page::Terms => TitleSource::Messages(Key::Terms(TermsKey::Title)),
    }
}

fn open_graph(config: &SiteConfig, locale: Locale, url: Option<String>) -> OpenGraph {
    OpenGraph {
        kind: "website",
        locale: locale.og_locale(),
        alternate_locales: Locale::ALL
            .into_iter()
            .filter(|&l| l != locale)
            .map(Locale::og_locale)
            .collect(),
        site_name: config.name.clone(),
        title: format!("{} | {}", config.name, OG_TAGLINE.get(locale)),
        description: OG_DESCRIPTION.get(locale).to_string(),
        url,
        image: config
            .organization
            .logo
            .as_ref()
            .map(|logo| config.absolute_url(&crate::static_url(logo))),
    }
}

fn twitter_card(config: &SiteConfig, locale: Locale) -> TwitterCard {
    TwitterCard {
        card: "summary_large_image",
        title: format!("{} | {}", config.name, TWITTER_TAGLINE.get(locale)),
        description: TWITTER_DESCRIPTION.get(locale).to_string(),
    }
}
