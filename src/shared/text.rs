//! Input normalization shared by the write-side services. Errors are plain
//! messages that services wrap in their own `InvalidInput` variants.

use crate::shared::url::is_http_url;

/// Trims `raw` and checks it has 1..=`max_chars` characters.
pub fn required_text(field: &str, raw: &str, max_chars: usize) -> Result<String, String> {
    let value = raw.trim();
    let len = value.chars().count();

    if len == 0 {
        return Err(format!("{field} must not be empty"));
    }
    if len > max_chars {
        return Err(format!("{field} must be at most {max_chars} characters"));
    }

    Ok(value.to_string())
}

/// Trims an optional value. Blank becomes `None`.
pub fn optional_text(
    field: &str,
    raw: Option<String>,
    max_chars: usize,
) -> Result<Option<String>, String> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => required_text(field, value, max_chars).map(Some),
    }
}

/// Trims an optional URL. Blank becomes `None`; anything else must be http(s).
pub fn optional_http_url(field: &str, raw: Option<String>) -> Result<Option<String>, String> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(url) if is_http_url(url) => Ok(Some(url.to_string())),
        Some(_) => Err(format!("{field} must be an http(s) URL")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims_and_bounds() {
        assert_eq!(required_text("title", "  Desk  ", 10).unwrap(), "Desk");
        assert!(required_text("title", "   ", 10).is_err());
        assert!(required_text("title", "abcdef", 5).is_err());
    }

    #[test]
    fn test_required_text_counts_chars_not_bytes() {
        assert!(required_text("title", "ééééé", 5).is_ok());
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text("bio", Some("  ".into()), 10).unwrap(), None);
        assert_eq!(optional_text("bio", None, 10).unwrap(), None);
        assert_eq!(
            optional_text("bio", Some(" hi ".into()), 10).unwrap(),
            Some("hi".to_string())
        );
    }

    #[test]
    fn test_optional_http_url() {
        assert_eq!(optional_http_url("logo_url", None).unwrap(), None);
        assert_eq!(
            optional_http_url("logo_url", Some(" https://x.io/l.png ".into())).unwrap(),
            Some("https://x.io/l.png".to_string())
        );
        let err = optional_http_url("logo_url", Some("ftp://x.io".into())).unwrap_err();
        assert!(err.contains("logo_url"));
    }
}
