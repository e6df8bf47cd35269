//! Project showcase entries.

use serde::{Deserialize, Serialize};

/// External links attached to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<String>,
}

/// A project shown on the projects page.
///
/// `tech` and `tags` together form the project's facets. A record without
/// either list deserializes with it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within the catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Path or URL of the preview image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Technology tags, in display order.
    #[serde(default)]
    pub tech: Vec<String>,
    /// Category tags, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    /// Create a project with the given tags and no optional details.
    pub fn new(id: &str, title: &str, tech: &[&str], tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            image: None,
            tech: tech.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            role: None,
            challenges: Vec::new(),
            solutions: Vec::new(),
            outcomes: Vec::new(),
            links: ProjectLinks::default(),
        }
    }

    /// Whether the project has any case-study detail to show.
    pub fn has_case_study(&self) -> bool {
        !self.challenges.is_empty() || !self.solutions.is_empty() || !self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tag_lists_default_empty() {
        let project: Project = serde_json::from_str(
            r#"{"id": "p1", "title": "Bare", "description": "No tags at all"}"#,
        )
        .unwrap();
        assert!(project.tech.is_empty());
        assert!(project.tags.is_empty());
        assert_eq!(project.links, ProjectLinks::default());
        assert!(!project.has_case_study());
    }

    #[test]
    fn test_links_deserialize() {
        let project: Project = toml::from_str(
            r#"
            id = "p2"
            title = "Linked"
            description = "Has links"
            tech = ["Rust"]
            outcomes = ["Shipped"]

            [links]
            github = "https://github.com/example/linked"
            "#,
        )
        .unwrap();
        assert_eq!(
            project.links.github.as_deref(),
            Some("https://github.com/example/linked")
        );
        assert!(project.links.demo.is_none());
        assert!(project.has_case_study());
    }
}
