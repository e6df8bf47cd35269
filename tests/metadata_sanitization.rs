//! Sanitizer behavior at the metadata boundary.

use folio::sanitize::{sanitize_meta_content, sanitize_meta_name, sanitize_text, sanitize_url};
use folio::seo::PageMeta;

const HOSTILE: &[&str] = &[
    "<script>alert(1)</script>",
    "<img src=x onerror=alert(1)>",
    "javascript:alert(document.cookie)",
    "DATA:text/html;base64,PHNjcmlwdD4=",
    "\" onmouseover=\"alert(1)",
    "5 > 3 <",
    "<<nested>>",
];

#[test]
fn test_meta_content_never_contains_brackets_or_schemes() {
    for input in HOSTILE {
        let out = sanitize_meta_content(input);
        assert!(!out.contains('<') && !out.contains('>'), "{input} -> {out}");
        let lower = out.to_lowercase();
        for scheme in ["javascript:", "data:", "vbscript:"] {
            assert!(!lower.contains(scheme), "{input} -> {out}");
        }
    }
}

#[test]
fn test_meta_name_never_contains_quotes_or_whitespace() {
    for input in HOSTILE {
        let out = sanitize_meta_name(input);
        assert!(
            !out.chars().any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>')),
            "{input} -> {out}"
        );
    }
}

#[test]
fn test_documented_boundary_cases() {
    assert_eq!(sanitize_meta_content("<script>alert(1)</script>"), "alert(1)");
    assert_eq!(sanitize_url("javascript:alert(1)"), "https://javascript:alert(1)");
    assert_eq!(sanitize_url("example.com"), "https://example.com");
    assert_eq!(sanitize_text("<b>"), "&lt;b&gt;");
}

#[test]
fn test_rendered_head_has_no_live_markup() {
    let mut meta = PageMeta::default()
        .with_title("<script>alert(1)</script> | Jo")
        .with_description("\"><script>alert(2)</script>");
    meta.og_image = "javascript:alert(3)".to_string();

    let html = meta.render_head("https://jo.dev", "/projects");
    assert!(!html.contains("<script"));
    assert!(!html.contains("content=\"javascript:"));
    assert!(html.contains(r#"<meta property="og:image" content="https://javascript:alert(3)">"#));
    assert!(html.contains(r#"<link rel="canonical" href="https://jo.dev/projects">"#));
}
