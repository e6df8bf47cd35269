//! Page metadata assembly.
//!
//! Builds the `<title>`, `<meta>` and canonical `<link>` set for a page. Every
//! key and value passes through the sanitizer before it is emitted, so the
//! result can be injected into a document head verbatim.

use serde::Serialize;

use crate::config::Settings;
use crate::sanitize::{sanitize_meta_content, sanitize_meta_name, sanitize_text, sanitize_url};

/// Which attribute carries the tag's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaAttribute {
    Name,
    Property,
}

impl MetaAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// A single sanitized `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub attribute: MetaAttribute,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn text(attribute: MetaAttribute, key: &str, content: &str) -> Self {
        Self {
            attribute,
            key: sanitize_meta_name(key),
            content: sanitize_meta_content(content),
        }
    }

    fn link(attribute: MetaAttribute, key: &str, url: &str) -> Self {
        Self {
            attribute,
            key: sanitize_meta_name(key),
            content: sanitize_url(url),
        }
    }

    /// Render as an HTML element.
    pub fn to_html(&self) -> String {
        format!(
            r#"<meta {}="{}" content="{}">"#,
            self.attribute.as_str(),
            sanitize_text(&self.key),
            sanitize_text(&self.content)
        )
    }
}

/// Metadata inputs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub og_image: String,
    pub og_type: String,
    pub twitter_card: String,
    /// Explicit canonical URL; otherwise derived from the base URL and path.
    pub canonical: Option<String>,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            keywords: String::new(),
            author: String::new(),
            og_image: "/og-image.png".to_string(),
            og_type: "website".to_string(),
            twitter_card: "summary_large_image".to_string(),
            canonical: None,
        }
    }
}

impl PageMeta {
    /// Site-wide defaults from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            title: settings.site_name.clone(),
            description: settings.description.clone(),
            keywords: settings.keywords.clone(),
            author: settings.author.clone(),
            og_image: settings.og_image.clone(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = Some(canonical.into());
        self
    }

    /// Canonical URL for `path`: the explicit one if set, else `base_url + path`.
    pub fn canonical_url(&self, base_url: &str, path: &str) -> String {
        match &self.canonical {
            Some(canonical) => sanitize_url(canonical),
            None => sanitize_url(&format!("{}{}", base_url.trim_end_matches('/'), path)),
        }
    }

    /// The sanitized meta tags for `path`, in document order.
    pub fn tags(&self, base_url: &str, path: &str) -> Vec<MetaTag> {
        use MetaAttribute::{Name, Property};

        let url = self.canonical_url(base_url, path);
        vec![
            MetaTag::text(Name, "description", &self.description),
            MetaTag::text(Name, "keywords", &self.keywords),
            MetaTag::text(Name, "author", &self.author),
            MetaTag::text(Property, "og:title", &self.title),
            MetaTag::text(Property, "og:description", &self.description),
            MetaTag::link(Property, "og:image", &self.og_image),
            MetaTag::text(Property, "og:type", &self.og_type),
            MetaTag::link(Property, "og:url", &url),
            MetaTag::text(Name, "twitter:card", &self.twitter_card),
            MetaTag::text(Name, "twitter:title", &self.title),
            MetaTag::text(Name, "twitter:description", &self.description),
            MetaTag::link(Name, "twitter:image", &self.og_image),
        ]
    }

    /// Render the full head fragment: title, meta tags and canonical link.
    pub fn render_head(&self, base_url: &str, path: &str) -> String {
        let mut lines = Vec::with_capacity(14);
        lines.push(format!(
            "<title>{}</title>",
            sanitize_text(&sanitize_meta_content(&self.title))
        ));
        lines.extend(self.tags(base_url, path).iter().map(MetaTag::to_html));
        lines.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            sanitize_text(&self.canonical_url(base_url, path))
        ));
        lines.join("\n")
    }
}
