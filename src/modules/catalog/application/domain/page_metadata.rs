use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use super::entities::ProductDraft;

static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid meta tag pattern"));

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)([a-z][a-z0-9:_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("valid attribute pattern")
});

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title pattern"));

/// One `<meta>` tag reduced to its key (`property` or `name`) and `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MetaTag {
    key: String,
    content: String,
}

/// Extracts a product draft from raw HTML.
///
/// Title prefers `og:title` over `<title>`. Description prefers
/// `og:description` over `<meta name="description">`. Every `og:image` is
/// resolved against `page_url`, and non-http results and duplicates are
/// skipped. Price comes from `product:price:amount` or `og:price:amount`.
pub fn extract_product_draft(html: &str, page_url: &Url) -> ProductDraft {
    let tags = meta_tags(html);

    let name = first(&tags, &["og:title"]).or_else(|| page_title(html));
    let description = first(&tags, &["og:description", "description"]);

    let mut image_urls: Vec<String> = Vec::new();
    for raw in all(&tags, &["og:image", "og:image:url", "og:image:secure_url"]) {
        if let Some(resolved) = resolve_url(page_url, raw) {
            if !image_urls.contains(&resolved) {
                image_urls.push(resolved);
            }
        }
    }

    let price_cents = first(&tags, &["product:price:amount", "og:price:amount"])
        .as_deref()
        .and_then(parse_price_cents);

    let currency = first(&tags, &["product:price:currency", "og:price:currency"])
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.len() == 3 && c.chars().all(|ch| ch.is_ascii_alphabetic()));

    ProductDraft {
        source_url: page_url.to_string(),
        name,
        description,
        image_urls,
        price_cents,
        currency,
        site_name: first(&tags, &["og:site_name"]),
    }
}

fn meta_tags(html: &str) -> Vec<MetaTag> {
    META_TAG_RE
        .find_iter(html)
        .filter_map(|tag| {
            let mut key = None;
            let mut content = None;

            for cap in ATTR_RE.captures_iter(tag.as_str()) {
                let attr = cap[1].to_ascii_lowercase();
                let value = cap.get(2).or_else(|| cap.get(3)).map(|m| m.as_str());
                match (attr.as_str(), value) {
                    ("property" | "name", Some(v)) if key.is_none() => {
                        key = Some(v.trim().to_ascii_lowercase())
                    }
                    ("content", Some(v)) => content = Some(decode_entities(v.trim())),
                    _ => {}
                }
            }

            Some(MetaTag {
                key: key?,
                content: content.filter(|c| !c.is_empty())?,
            })
        })
        .collect()
}

fn first(tags: &[MetaTag], keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| tags.iter().find(|t| t.key == *key))
        .map(|t| t.content.clone())
}

fn all<'a>(tags: &'a [MetaTag], keys: &'a [&str]) -> impl Iterator<Item = &'a str> {
    tags.iter()
        .filter(move |t| keys.contains(&t.key.as_str()))
        .map(|t| t.content.as_str())
}

fn page_title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .map(|cap| decode_entities(collapse_whitespace(&cap[1]).as_str()))
        .filter(|t| !t.is_empty())
}

fn resolve_url(base: &Url, raw: &str) -> Option<String> {
    let url = base.join(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

/// "1,299.50" -> 129950. Commas are thousands separators.
pub fn parse_price_cents(raw: &str) -> Option<i64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let (whole, frac) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(frac)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
