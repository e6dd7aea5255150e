use email_address::EmailAddress;
use regex::Regex;
use std::sync::LazyLock;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("valid username pattern"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Email is required")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Username must be between 3 and 30 characters")]
    UsernameLength,

    #[error("Username may only contain lowercase letters, digits and underscores")]
    UsernameCharset,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must be at most 128 characters")]
    PasswordTooLong,
}

/// Trims and lower-cases. Emails are compared case-insensitively everywhere.
pub fn normalize_email(raw: &str) -> Result<String, CredentialError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(CredentialError::EmptyEmail);
    }
    if !EmailAddress::is_valid(email) {
        return Err(CredentialError::InvalidEmailFormat);
    }
    Ok(email.to_lowercase())
}

/// Usernames are stored lower-case; uppercase input is folded, not rejected.
pub fn normalize_username(raw: &str) -> Result<String, CredentialError> {
    let username = raw.trim().to_lowercase();
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(CredentialError::UsernameLength);
    }
    if !USERNAME_RE.is_match(&username) {
        return Err(CredentialError::UsernameCharset);
    }
    Ok(username)
}

pub fn validate_password(password: &str) -> Result<(), CredentialError> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    if len > PASSWORD_MAX_LEN {
        return Err(CredentialError::PasswordTooLong);
    }
    Ok(())
}
