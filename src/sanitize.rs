//! Sanitization for strings headed into document metadata and links.
//!
//! Three classes of input are neutralized before text reaches a `<meta>` tag,
//! an attribute name, or an `href`:
//! - markup (`<...>` tags and stray angle brackets)
//! - dangerous URL schemes (`javascript:`, `data:`, `vbscript:`)
//! - inline event handlers (`onclick=`, `onerror =`, ...)
//!
//! Every function here is total: empty input gives an empty string.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of sanitized meta content, in characters.
pub const MAX_META_CONTENT_LEN: usize = 5000;

/// Maximum length of a sanitized meta name, in characters.
pub const MAX_META_NAME_LEN: usize = 100;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static DANGEROUS_SCHEMES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)javascript:").unwrap(),
        Regex::new(r"(?i)data:").unwrap(),
        Regex::new(r"(?i)vbscript:").unwrap(),
    ]
});

// ASCII word characters only, so `onfoo=` matches but non-Latin letters don't.
static EVENT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on[0-9A-Za-z_]+\s*=").unwrap());

static ALLOWED_URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?|mailto):").unwrap());

/// Clean text for use as a `<meta content="...">` value.
///
/// Steps run in a fixed order: strip tags, strip dangerous schemes, strip
/// event handlers, drop leftover angle brackets, trim, truncate. Text between
/// tags is kept, so `<script>alert(1)</script>` becomes `alert(1)`.
pub fn sanitize_meta_content(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = HTML_TAG.replace_all(text, "").into_owned();
    // Removing one pattern can splice together another (`jajavascript:vascript:`),
    // so repeat until nothing matches.
    loop {
        let before = cleaned.len();
        for scheme in DANGEROUS_SCHEMES.iter() {
            cleaned = scheme.replace_all(&cleaned, "").into_owned();
        }
        cleaned = EVENT_HANDLER.replace_all(&cleaned, "").into_owned();
        if cleaned.len() == before {
            break;
        }
    }
    let cleaned: String = cleaned.chars().filter(|c| !matches!(c, '<' | '>')).collect();

    truncate_chars(cleaned.trim(), MAX_META_CONTENT_LEN)
}

/// Clean text for use as a meta tag name or attribute key.
///
/// Names may not contain whitespace or quotes, so both are removed outright.
pub fn sanitize_meta_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let cleaned: String = HTML_TAG
        .replace_all(name, "")
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\'') && !c.is_whitespace())
        .collect();

    truncate_chars(&cleaned, MAX_META_NAME_LEN)
}

/// Normalize a string for use in an `href` attribute.
///
/// `http:`, `https:` and `mailto:` URLs pass through trimmed, as do
/// site-relative paths and fragments. Anything else is treated as a bare host
/// and prefixed with `https://`, which also turns an unlisted scheme such as
/// `javascript:` into an inert path segment.
pub fn sanitize_url(url: &str) -> String {
    let trimmed = url.trim();
    // Whitespace-only input yields "" rather than a bare `https://`.
    if trimmed.is_empty() {
        return String::new();
    }

    if ALLOWED_URL_SCHEME.is_match(trimmed) || trimmed.starts_with('/') || trimmed.starts_with('#')
    {
        return trimmed.to_string();
    }

    format!("https://{}", trimmed)
}

/// Escape the five HTML-significant characters for safe interpolation into
/// text nodes and quoted attribute values.
pub fn sanitize_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_content_strips_script_tags() {
        assert_eq!(
            sanitize_meta_content("<script>alert(1)</script>"),
            "alert(1)"
        );
    }

    #[test]
    fn test_meta_content_empty() {
        assert_eq!(sanitize_meta_content(""), "");
        assert_eq!(sanitize_meta_content("   "), "");
    }

    #[test]
    fn test_meta_content_strips_schemes_case_insensitive() {
        assert_eq!(sanitize_meta_content("JavaScript:alert(1)"), "alert(1)");
        assert_eq!(
            sanitize_meta_content("see data:text/html,x and VBScript:msgbox"),
            "see text/html,x and msgbox"
        );
    }

    #[test]
    fn test_meta_content_strips_event_handlers() {
        assert_eq!(sanitize_meta_content("x onclick=steal()"), "x steal()");
        assert_eq!(sanitize_meta_content("x ONERROR  =boom"), "x boom");
    }

    #[test]
    fn test_meta_content_drops_stray_brackets() {
        // No `>` follows the `<`, so the tag pattern never matches
        let out = sanitize_meta_content("5 > 3 < 4");
        assert_eq!(out, "5  3  4");
        assert!(!out.contains('<') && !out.contains('>'));
    }

    #[test]
    fn test_meta_content_scheme_split_by_tag() {
        // Tags go first, so a scheme reassembled by tag removal is still caught
        assert_eq!(sanitize_meta_content("java<b>script:x"), "x");
    }

    #[test]
    fn test_meta_content_spliced_schemes() {
        assert_eq!(sanitize_meta_content("jajavascript:vascript:alert(1)"), "alert(1)");
        assert_eq!(sanitize_meta_content("javaonx=script:alert(1)"), "alert(1)");
    }

    #[test]
    fn test_meta_content_trims_then_truncates() {
        let long = format!("  {}  ", "é".repeat(MAX_META_CONTENT_LEN + 10));
        let out = sanitize_meta_content(&long);
        assert_eq!(out.chars().count(), MAX_META_CONTENT_LEN);
        assert!(out.starts_with('é'));
    }

    #[test]
    fn test_meta_content_keeps_benign_text() {
        assert_eq!(
            sanitize_meta_content("Rust & TypeScript developer"),
            "Rust & TypeScript developer"
        );
    }

    #[test]
    fn test_meta_name() {
        assert_eq!(sanitize_meta_name("og:title"), "og:title");
        assert_eq!(sanitize_meta_name(" twitter : card "), "twitter:card");
        assert_eq!(sanitize_meta_name("a\"b'c<d>e"), "abce");
        assert_eq!(sanitize_meta_name("a>b"), "ab");
        assert_eq!(sanitize_meta_name("<i>desc</i>ription"), "description");
        assert_eq!(sanitize_meta_name(""), "");
    }

    #[test]
    fn test_meta_name_truncates() {
        let out = sanitize_meta_name(&"n".repeat(250));
        assert_eq!(out.len(), MAX_META_NAME_LEN);
    }

    #[test]
    fn test_url_allowed_schemes() {
        assert_eq!(sanitize_url("https://example.com"), "https://example.com");
        assert_eq!(sanitize_url("  HTTP://example.com  "), "HTTP://example.com");
        assert_eq!(sanitize_url("mailto:me@example.com"), "mailto:me@example.com");
    }

    #[test]
    fn test_url_relative_and_fragment() {
        assert_eq!(sanitize_url("/projects"), "/projects");
        assert_eq!(sanitize_url("#contact"), "#contact");
    }

    #[test]
    fn test_url_bare_host() {
        assert_eq!(sanitize_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_url_disallowed_scheme_gets_prefixed() {
        assert_eq!(
            sanitize_url("javascript:alert(1)"),
            "https://javascript:alert(1)"
        );
    }

    #[test]
    fn test_url_empty() {
        assert_eq!(sanitize_url(""), "");
        assert_eq!(sanitize_url("   "), "");
    }

    #[test]
    fn test_text_escapes() {
        assert_eq!(sanitize_text("<b>"), "&lt;b&gt;");
        assert_eq!(
            sanitize_text(r#"Tom & "Jerry's""#),
            "Tom &amp; &quot;Jerry&#039;s&quot;"
        );
        assert_eq!(sanitize_text(""), "");
    }

    #[test]
    fn test_text_never_shrinks() {
        for input in ["plain", "<>&\"'", "mixed <tag> & 'quote'"] {
            assert!(sanitize_text(input).len() >= input.len());
        }
    }
}
