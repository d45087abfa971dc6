//! JSON-LD structured data per page.

use couture_core::keys::{Platform, PlatformField, Role, TalentKey, TextField};
use couture_core::{Key, Locale, Localized, Page, Result, Site, SiteConfig};
use serde_json::{Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

const WEBSITE_DESCRIPTION: Localized<&str> = Localized::new(
    "Vibe Coding Beratung, IT-Freelancer Vermittlung und Starter Templates",
    "Vibe Coding Consulting, IT Freelancer Network and Starter Templates",
);

const SERVICE_DESCRIPTION: Localized<&str> = Localized::new(
    "Softwareentwicklung, Vibe Coding Beratung und IT-Freelancer Vermittlung",
    "Software Development, Vibe Coding Consulting and IT Freelancer Network",
);

const SERVICE_TYPES: Localized<[&str; 4]> = Localized::new(
    ["Softwareentwicklung", "IT-Beratung", "Vibe Coding", "Freelancer Vermittlung"],
    ["Software Development", "IT Consulting", "Vibe Coding", "Freelancer Network"],
);

const PLATFORM_LIST_DESCRIPTION: Localized<&str> = Localized::new(
    "Fertige Starter-Templates für schnellen Projektstart",
    "Ready-made starter templates for quick project launches",
);

/// Structured data for `page`, or `None` for pages that carry none
pub fn structured_data(site: &Site, locale: Locale, page: Page) -> Result<Option<Value>> {
    let config = &site.config;

    let value = match page {
        Page::Home => json!({
            "@context": SCHEMA_CONTEXT,
            "@graph": [
                organization(config),
                {
                    "@type": "WebSite",
                    "@id": format!("{}/#website", config.base_url),
                    "url": config.base_url,
                    "name": config.name,
                    "description": WEBSITE_DESCRIPTION.get(locale),
                    "publisher": { "@id": organization_id(config) },
                    "inLanguage": [locale.language_tag()],
                },
                {
                    "@type": "ProfessionalService",
                    "@id": format!("{}/#service", config.base_url),
                    "name": config.name,
                    "description": SERVICE_DESCRIPTION.get(locale),
                    "provider": { "@id": organization_id(config) },
                    "serviceType": SERVICE_TYPES.get(locale),
                    "areaServed": { "@type": "Country", "name": "Germany" },
                },
            ],
        }),
        Page::Platforms => {
            let items = Platform::ALL
                .iter()
                .enumerate()
                .map(|(i, &platform)| {
                    Ok(json!({
                        "@type": "SoftwareApplication",
                        "position": i + 1,
                        "name": site.catalog.text(locale, Key::Platform(platform, PlatformField::Title))?,
                        "applicationCategory": "BusinessApplication",
                        "description": site.catalog.text(locale, Key::Platform(platform, PlatformField::Description))?,
                        "url": config.absolute_url(&platform_page(platform).path(locale)),
                        "offers": { "@type": "Offer", "availability": "https://schema.org/InStock" },
                    }))
                })
                .collect::<Result<Vec<_>>>()?;

            json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "ItemList",
                "name": "Vibe Starter Templates",
                "description": PLATFORM_LIST_DESCRIPTION.get(locale),
                "itemListElement": items,
            })
        }
        Page::Erp => software_application(site, locale, Platform::Erp)?,
        Page::Rental => software_application(site, locale, Platform::Rental)?,
        Page::Talent => {
            let service_types = Role::ALL
                .iter()
                .map(|&role| {
                    site.catalog
                        .text(locale, Key::Role(role, TextField::Title))
                        .map(str::to_string)
                })
                .collect::<Result<Vec<_>>>()?;

            json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "EmploymentAgency",
                "name": format!("{} - Talent Network", config.name),
                "description": site.catalog.text(locale, Key::Talent(TalentKey::Description))?,
                "url": config.absolute_url(&Page::Talent.path(locale)),
                "provider": { "@type": "Organization", "name": config.organization.legal_name },
                "areaServed": { "@type": "Country", "name": "Germany" },
                "serviceType": service_types,
            })
        }
        Page::Imprint | Page::Privacy | Page::Terms => return Ok(None),
    };

    Ok(Some(value))
}

fn organization_id(config: &SiteConfig) -> String {
    format!("{}/#organization", config.base_url)
}

/// The Organization node. Optional contact details are left out when unset.
fn organization(config: &SiteConfig) -> Value {
    let org = &config.organization;

    let mut contact = json!({
        "@type": "ContactPoint",
        "email": org.email,
        "contactType": "customer service",
        "availableLanguage": ["German", "English"],
    });
    if let Some(phone) = &org.phone {
        contact["telephone"] = json!(phone);
    }

    let mut node = json!({
        "@type": "Organization",
        "@id": organization_id(config),
        "name": org.legal_name,
        "url": config.base_url,
        "email": org.email,
        "contactPoint": contact,
        "sameAs": org.same_as,
    });

    if let Some(logo) = &org.logo {
        node["logo"] = json!({
            "@type": "ImageObject",
            "url": config.absolute_url(&crate::static_url(logo)),
        });
    }
    if let Some(address) = &org.address {
        node["address"] = json!({
            "@type": "PostalAddress",
            "streetAddress": address.street,
            "addressLocality": address.locality,
            "postalCode": address.postal_code,
            "addressCountry": address.country,
        });
    }
    if let Some(vat_id) = &org.vat_id {
        node["vatID"] = json!(vat_id);
    }

    node
}

fn software_application(site: &Site, locale: Locale, platform: Platform) -> Result<Value> {
    let config = &site.config;
    let features = platform
        .features()
        .iter()
        .map(|&feature| {
            site.catalog
                .text(locale, Key::Feature(feature, TextField::Title))
                .map(str::to_string)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "SoftwareApplication",
        "name": format!(
            "Vibe Starter {}",
            site.catalog.text(locale, Key::Platform(platform, PlatformField::Title))?
        ),
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web-based",
        "description": site.catalog.text(locale, Key::Platform(platform, PlatformField::Description))?,
        "featureList": features,
        "offers": {
            "@type": "Offer",
            "availability": "https://schema.org/InStock",
            "priceCurrency": "EUR",
        },
        "provider": {
            "@type": "Organization",
            "name": config.organization.legal_name,
            "url": config.base_url,
        },
    }))
}

fn platform_page(platform: Platform) -> Page {
    match platform {
        Platform::Erp => Page::Erp,
        Platform::Rental => Page::Rental,
    }
}
