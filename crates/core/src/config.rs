use crate::error::{Error, Result};
use crate::locale::{Locale, Localized};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path};

/// File name of the site configuration inside a site directory
pub const SITE_TOML: &str = "site.toml";

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSite,
    organization: RawOrganization,
    #[serde(default)]
    links: Links,
    #[serde(default)]
    team: Vec<RawTeamMember>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    base_url: String,
    name: String,
    #[serde(default)]
    default_locale: Option<Locale>,
}

#[derive(Debug, Deserialize)]
struct RawOrganization {
    legal_name: String,
    email: String,
    phone: Option<String>,
    logo: Option<String>,
    managing_director: Option<String>,
    #[serde(default)]
    same_as: Vec<String>,
    address: Option<RawAddress>,
    register: Option<RegisterEntry>,
    vat_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAddress {
    street: String,
    postal_code: String,
    locality: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct RawTeamMember {
    id: String,
    name: String,
    role: Localized<String>,
    description: Localized<String>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    let base_url = validate_base_url(&raw.site.base_url)?;
    let name = require_non_empty(raw.site.name, "site.name")?;

    let address = match raw.organization.address {
        Some(a) => Some(PostalAddress {
            street: require_non_empty(a.street, "organization.address.street")?,
            postal_code: require_non_empty(a.postal_code, "organization.address.postal_code")?,
            locality: require_non_empty(a.locality, "organization.address.locality")?,
            country: validate_country(&a.country)?,
        }),
        None => None,
    };

    let logo = match raw.organization.logo {
        Some(logo) => Some(validate_asset_path(&logo, "organization.logo")?),
        None => None,
    };

    let organization = Organization {
        legal_name: require_non_empty(raw.organization.legal_name, "organization.legal_name")?,
        email: validate_email(&raw.organization.email)?,
        phone: non_empty(raw.organization.phone),
        logo,
        managing_director: non_empty(raw.organization.managing_director),
        same_as: raw.organization.same_as,
        address,
        register: raw.organization.register,
        vat_id: non_empty(raw.organization.vat_id),
    };

    let mut team = Vec::with_capacity(raw.team.len());
    for member in raw.team {
        if team.iter().any(|m: &TeamMember| m.id == member.id) {
            return Err(Error::ConfigParse(format!(
                "Duplicate team member id '{}'",
                member.id
            )));
        }
        team.push(TeamMember {
            id: require_non_empty(member.id, "team.id")?,
            name: require_non_empty(member.name, "team.name")?,
            role: require_localized(member.role, "team.role")?,
            description: require_localized(member.description, "team.description")?,
        });
    }

    Ok(SiteConfig {
        base_url,
        name,
        default_locale: raw.site.default_locale.unwrap_or(Locale::DEFAULT),
        organization,
        links: raw.links,
        team,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn require_non_empty(value: String, field_name: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "'{}' must not be empty",
            field_name
        )));
    }
    Ok(value)
}

/// Every locale's text must be present and non-blank
fn require_localized(value: Localized<String>, field_name: &str) -> Result<Localized<String>> {
    Ok(Localized {
        de: require_non_empty(value.de, &format!("{}.de", field_name))?,
        en: require_non_empty(value.en, &format!("{}.en", field_name))?,
    })
}

/// Normalize the public base URL: absolute http(s), no trailing slash.
///
/// ```text
/// validate_base_url("https://example.com/")  → Ok("https://example.com")
/// validate_base_url("example.com")           → Err(...)
/// ```
fn validate_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');

    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| {
            Error::ConfigParse(format!(
                "'site.base_url' must start with http:// or https://: '{}'",
                url
            ))
        })?;

    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(Error::ConfigParse(format!(
            "'site.base_url' has no valid host: '{}'",
            url
        )));
    }

    Ok(trimmed.to_string())
}

fn validate_email(email: &str) -> Result<String> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(Error::ConfigParse(format!(
            "'organization.email' is not a valid address: '{}'",
            email
        )));
    }
    Ok(email.to_string())
}

/// ISO 3166-1 alpha-2 code, upper case
fn validate_country(code: &str) -> Result<String> {
    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::ConfigParse(format!(
            "'organization.address.country' must be a two-letter country code: '{}'",
            code
        )));
    }
    Ok(code.to_ascii_uppercase())
}

/// Asset paths are relative to `public/` and may not leave it
fn validate_asset_path(path_str: &str, field_name: &str) -> Result<String> {
    let path = Path::new(path_str);

    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    if path.is_absolute() || path.components().any(|c| c == Component::ParentDir) {
        return Err(Error::ConfigParse(format!(
            "'{}' must be a relative path inside public/: '{}'",
            field_name, path_str
        )));
    }

    Ok(path_str.replace('\\', "/"))
}
