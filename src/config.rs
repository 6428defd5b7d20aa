//! API Configuration
//!
//! The backend base URL comes from `<meta name="knit-bingo-api">` in
//! `index.html`, else `KNIT_BINGO_API_URL` at build time, else `/api`.

const META_SELECTOR: &str = r#"meta[name="knit-bingo-api"]"#;
const DEFAULT_BASE_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Resolve from the page, then the build environment
    pub fn resolve() -> Self {
        let from_page = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(META_SELECTOR).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));
        Self::pick(from_page.as_deref(), option_env!("KNIT_BINGO_API_URL"))
    }

    fn pick(from_page: Option<&str>, from_build: Option<&str>) -> Self {
        [from_page, from_build]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_else(|| Self::new(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a relative endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let config = ApiConfig::new("https://api.example.com/prod/");
        assert_eq!(config.endpoint("auth/magic-link"), "https://api.example.com/prod/auth/magic-link");
        assert_eq!(config.endpoint("/bingo3x3"), "https://api.example.com/prod/bingo3x3");
    }

    #[test]
    fn test_pick_order() {
        assert_eq!(ApiConfig::pick(Some("https://page"), Some("https://build")).base_url(), "https://page");
        assert_eq!(ApiConfig::pick(Some("  "), Some("https://build")).base_url(), "https://build");
        assert_eq!(ApiConfig::pick(None, None).base_url(), "/api");
    }
}
