//! Locale registry.
//!
//! The set of supported locales is closed: adding one means adding a variant
//! here and a message table under `messages/`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported site locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    De,
    En,
}

impl Locale {
    /// All supported locales in registry order
    pub const ALL: [Locale; 2] = [Locale::De, Locale::En];

    /// Locale used when a request carries none (or an unknown one)
    pub const DEFAULT: Locale = Locale::De;

    /// Code used as the first URL path segment and message file stem
    pub fn code(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    /// Name shown in the language switcher
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::De => "Deutsch",
            Locale::En => "English",
        }
    }

    /// BCP 47 tag, e.g. for `inLanguage` in structured data
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::De => "de-DE",
            Locale::En => "en-US",
        }
    }

    /// Open Graph locale, e.g. `de_DE`
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::De => "de_DE",
            Locale::En => "en_US",
        }
    }

    /// Look up a locale by its code. Codes are matched exactly.
    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_code(s).ok_or_else(|| Error::UnknownLocale(s.to_string()))
    }
}

/// A value held once per supported locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub de: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub const fn new(de: T, en: T) -> Self {
        Self { de, en }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::De => &self.de,
            Locale::En => &self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code("DE"), None);
        assert_eq!(Locale::from_code(""), None);

        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, Error::UnknownLocale(ref code) if code == "fr"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_default_is_german() {
        assert_eq!(Locale::DEFAULT, Locale::De);
        assert_eq!(Locale::ALL[0], Locale::DEFAULT);
    }

    #[test]
    fn test_localized_selects_by_locale() {
        let title = Localized::new("Impressum", "Imprint");
        assert_eq!(*title.get(Locale::De), "Impressum");
        assert_eq!(*title.get(Locale::En), "Imprint");
    }

    #[test]
    fn test_deserialize_lowercase_code() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let w: Wrapper = toml::from_str("locale = \"en\"").unwrap();
        assert_eq!(w.locale, Locale::En);
        assert!(toml::from_str::<Wrapper>("locale = \"fr\"").is_err());
    }
}
