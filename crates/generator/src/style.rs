use sha2::{Digest, Sha256};
use std::sync::OnceLock;

/// URL prefix under which generated stylesheets are served
pub const STYLES_PREFIX: &str = "/styles";

const SITE_CSS: &str = include_str!("../assets/site.css");

/// The site stylesheet with a content fingerprint for cache busting
#[derive(Debug)]
pub struct Stylesheet {
    css: &'static str,
    fingerprint: String,
}

static STYLESHEET: OnceLock<Stylesheet> = OnceLock::new();

impl Stylesheet {
    pub fn get() -> &'static Stylesheet {
        STYLESHEET.get_or_init(|| Stylesheet::new(SITE_CSS))
    }

    fn new(css: &'static str) -> Self {
        let digest = Sha256::digest(css.as_bytes());
        let fingerprint = digest[..4].iter().map(|b| format!("{:02x}", b)).collect();
        Self { css, fingerprint }
    }

    pub fn css(&self) -> &'static str {
        self.css
    }

    /// File name including the fingerprint, e.g. `site-1a2b3c4d.css`
    pub fn file_name(&self) -> String {
        format!("site-{}.css", self.fingerprint)
    }

    pub fn href(&self) -> String {
        format!("{}/{}", STYLES_PREFIX, self.file_name())
    }
}
