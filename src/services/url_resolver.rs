//! Address bar submission: turns typed text into a navigation target.

use url::form_urlencoded;
use url::Url;

use crate::types::config::ShellConfig;

/// Prefixes whose input is navigated to verbatim.
const LITERAL_PREFIXES: &[&str] = &["http://", "https://", "file://", "about:"];

#[derive(Debug, Clone)]
pub struct UrlResolver {
    home_url: String,
    search_url: String,
}

impl UrlResolver {
    pub fn new(home_url: &str, search_url: &str) -> Self {
        Self {
            home_url: home_url.to_string(),
            search_url: search_url.to_string(),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(&config.home_url, &config.search_url)
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    /// Resolve submitted address bar text.
    ///
    /// Literal URLs pass through, bare host names get `https://`, and
    /// everything else becomes a search with the query form-encoded
    /// (spaces as `+`).
    pub fn resolve(&self, input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return self.home_url.clone();
        }
        if LITERAL_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            return trimmed.to_string();
        }
        if looks_like_host(trimmed) {
            return format!("https://{}", trimmed);
        }
        self.search(trimmed)
    }

    pub fn search(&self, query: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        format!("{}{}", self.search_url, encoded)
    }
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}

/// `example.com` or `docs.rs/url` style input: no whitespace, a dot in the
/// host, and parseable once a scheme is added.
fn looks_like_host(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) || !input.contains('.') {
        return false;
    }
    Url::parse(&format!("https://{}", input))
        .ok()
        .and_then(|u| u.host_str().map(|h| h.contains('.') && !h.ends_with('.')))
        .unwrap_or(false)
}
