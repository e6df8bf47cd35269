//! Validation for externally supplied identifiers and URLs.
//!
//! Validators never fail loudly: invalid or missing input yields `None` (or
//! an empty string for base URLs) and callers fall back to defaults.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Longest username GitHub accepts.
const GITHUB_USERNAME_MAX_LEN: usize = 39;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Return the URL if it is absolute and uses `http` or `https`.
pub fn validate_url(url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    let parsed = Url::parse(url).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}

/// Resolve the site's base URL.
///
/// Tries `url`, then `fallback`; an empty string means neither was usable.
pub fn validate_base_url(url: Option<&str>, fallback: Option<&str>) -> String {
    validate_url(url)
        .or_else(|| validate_url(fallback))
        .unwrap_or_default()
}

/// Return the username if GitHub would accept it.
///
/// Usernames are 1-39 ASCII alphanumerics or hyphens, start with an
/// alphanumeric and never contain two hyphens in a row.
pub fn validate_github_username(username: Option<&str>) -> Option<String> {
    let username = username?;
    if username.is_empty() || username.len() > GITHUB_USERNAME_MAX_LEN {
        return None;
    }

    let mut chars = username.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    if username.contains("--") {
        return None;
    }

    Some(username.to_string())
}

/// Return the address if it looks like a deliverable e-mail address.
pub fn validate_email(email: Option<&str>) -> Option<String> {
    let email = email?;
    if email.starts_with('.') || email.contains("..") || !EMAIL.is_match(email) {
        return None;
    }
    Some(email.to_string())
}
