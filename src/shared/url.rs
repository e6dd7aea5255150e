use reqwest::Url;

/// Absolute http(s) URL with a host. Used for product sources, avatars and
/// cover images.
pub fn is_http_url(raw: &str) -> bool {
    match Url::parse(raw.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
