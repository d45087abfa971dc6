use crate::locale::Locale;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    ConfigParse(String),
    IoError(std::io::Error),
    InvalidData(String),
    /// A key has no entry in the message table of `locale`.
    MissingTranslation {
        locale: Locale,
        key: String,
    },
    UnknownLocale(String),
    UnknownPage(String),
}

impl Error {
    /// Whether the error means "nothing lives at this URL".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::UnknownLocale(_) | Error::UnknownPage(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigParse(msg) => write!(f, "Configuration parse error: {}", msg),
            Error::IoError(err) => write!(f, "IO error: {}", err),
            Error::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            Error::MissingTranslation { locale, key } => {
                write!(f, "Missing translation for '{}' in locale '{}'", key, locale)
            }
            Error::UnknownLocale(code) => write!(f, "Unknown locale: '{}'", code),
            Error::UnknownPage(path) => write!(f, "Unknown page: '{}'", path),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
