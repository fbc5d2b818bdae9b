//! Scheme allowlist for content navigation.

use tracing::debug;

/// Decides which URLs the content view may navigate to.
#[derive(Debug, Clone)]
pub struct NavigationPolicy {
    allowed_schemes: Vec<String>,
}

impl NavigationPolicy {
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_schemes: schemes
                .into_iter()
                .map(|s| s.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Check whether a URL is allowed. Unparseable URLs are refused.
    pub fn allows(&self, raw: &str) -> bool {
        match url::Url::parse(raw) {
            Ok(url) => self.allowed_schemes.iter().any(|s| s == url.scheme()),
            Err(e) => {
                debug!(url = %raw, error = %e, "unparseable navigation target");
                false
            }
        }
    }

    pub fn allowed_schemes(&self) -> &[String] {
        &self.allowed_schemes
    }
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self::new(["https", "http", "about"])
    }
}
