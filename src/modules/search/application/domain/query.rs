pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;

/// Queries shorter than this skip full-text ranking.
pub const MIN_RANKED_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTier {
    /// `ts_rank` over a `simple` tsvector
    Ranked,
    /// `ILIKE` or trigram similarity, ordered by similarity
    Fuzzy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    limit: u32,
}

impl SearchQuery {
    pub fn new(raw: &str, limit: Option<u32>) -> Self {
        Self {
            text: raw.trim().to_string(),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First tier to try. A ranked search that finds nothing still falls
    /// back to fuzzy matching.
    pub fn tier(&self) -> SearchTier {
        if self.text.chars().count() >= MIN_RANKED_CHARS {
            SearchTier::Ranked
        } else {
            SearchTier::Fuzzy
        }
    }

    /// `%text%` with LIKE wildcards in the input escaped.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.text.len() + 2);
        pattern.push('%');
        for c in self.text.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
