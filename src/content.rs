//! The site's static content, loaded once at startup.
//!
//! Content lives in a single data file (TOML, YAML or JSON) with one array per
//! collection. The catalog is read-only after loading.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Experience, Project, Skill, Testimonial};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} content: {message}")]
    Parse { format: ContentFormat, message: String },

    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: String },
}

/// Serialization format of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Yaml,
    Json,
}

impl ContentFormat {
    /// Pick a format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl std::fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        })
    }
}

/// Every content collection the site renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl ContentCatalog {
    /// Load and validate a content file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::parse(&contents, ContentFormat::from_path(path))?;
        tracing::info!(
            "Loaded content from {}: {} projects, {} skills, {} testimonials, {} experience entries",
            path.display(),
            catalog.projects.len(),
            catalog.skills.len(),
            catalog.testimonials.len(),
            catalog.experience.len()
        );
        Ok(catalog)
    }

    /// Parse and validate content held in memory.
    pub fn parse(contents: &str, format: ContentFormat) -> Result<Self, ContentError> {
        let parse_err = |message: String| ContentError::Parse { format, message };

        let catalog: ContentCatalog = match format {
            ContentFormat::Toml => toml::from_str(contents).map_err(|e| parse_err(e.to_string()))?,
            ContentFormat::Yaml => {
                serde_yaml::from_str(contents).map_err(|e| parse_err(e.to_string()))?
            }
            ContentFormat::Json => {
                serde_json::from_str(contents).map_err(|e| parse_err(e.to_string()))?
            }
        };

        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that ids are unique within each collection.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        check_unique("skill", self.skills.iter().map(|s| s.id.as_str()))?;
        check_unique("testimonial", self.testimonials.iter().map(|t| t.id.as_str()))?;
        check_unique("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Skill categories in first-seen order, each with its skills.
    pub fn skills_by_category(&self) -> Vec<(&str, Vec<&Skill>)> {
        let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|(cat, _)| *cat == skill.category) {
                Some((_, skills)) => skills.push(skill),
                None => groups.push((skill.category.as_str(), vec![skill])),
            }
        }
        groups
    }
}

fn check_unique<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
