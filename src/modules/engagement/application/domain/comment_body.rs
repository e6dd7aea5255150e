pub const MAX_COMMENT_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentBodyError {
    #[error("Comment must not be empty")]
    Empty,

    #[error("Comment must be at most {MAX_COMMENT_CHARS} characters")]
    TooLong,
}

/// Trims and checks the length in characters, not bytes.
pub fn normalize_comment_body(raw: &str) -> Result<String, CommentBodyError> {
    let body = raw.trim();
    if body.is_empty() {
        return Err(CommentBodyError::Empty);
    }
    if body.chars().count() > MAX_COMMENT_CHARS {
        return Err(CommentBodyError::TooLong);
    }
    Ok(body.to_string())
}
