//! Sanitizer command.

use crate::sanitize::{sanitize_meta_content, sanitize_meta_name, sanitize_text, sanitize_url};

/// Which sanitizer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SanitizeKind {
    /// Meta tag content value
    Content,
    /// Meta tag name / attribute key
    Name,
    /// Link target (href)
    Url,
    /// Text node (HTML-escaped)
    Text,
}

impl SanitizeKind {
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Content => sanitize_meta_content(input),
            Self::Name => sanitize_meta_name(input),
            Self::Url => sanitize_url(input),
            Self::Text => sanitize_text(input),
        }
    }
}

/// Print the sanitized form of `input`.
pub fn cmd_sanitize(kind: SanitizeKind, input: &str) -> anyhow::Result<()> {
    let output = kind.apply(input);
    if output != input {
        tracing::info!("Sanitized {:?} input ({} -> {} bytes)", kind, input.len(), output.len());
    }
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(SanitizeKind::Content.apply("<b>hi</b>"), "hi");
        assert_eq!(SanitizeKind::Name.apply("og: title"), "og:title");
        assert_eq!(SanitizeKind::Url.apply("example.com"), "https://example.com");
        assert_eq!(SanitizeKind::Text.apply("<b>"), "&lt;b&gt;");
    }
}
