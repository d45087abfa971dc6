pub mod config;
pub mod error;
pub mod keys;
pub mod locale;
pub mod messages;
pub mod routing;
pub mod site;
pub mod types;

pub use config::parse_site_toml;
pub use error::{Error, Result};
pub use keys::Key;
pub use locale::{Locale, Localized};
pub use messages::{Catalog, Message, MessageTable};
pub use routing::{Route, resolve_route, switch_locale};
pub use site::Site;
pub use types::*;
