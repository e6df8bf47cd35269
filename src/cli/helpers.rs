//! Shared helper functions for CLI commands.

use console::style;

use crate::config::Settings;
use crate::content::ContentCatalog;
use crate::filter::Selection;
use crate::models::Project;

use super::icons::{bullet, dim_arrow};

/// Load the content catalog named in settings.
pub fn load_catalog(settings: &Settings) -> anyhow::Result<ContentCatalog> {
    ContentCatalog::load(&settings.content_path).map_err(|e| {
        anyhow::anyhow!(
            "{}\n  Set `content` in the config file, FOLIO_CONTENT, or pass --content",
            e
        )
    })
}

/// Truncate a string to at most `max` characters, adding "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Comma-joined selection, or "none".
pub fn describe_selection(selection: &Selection) -> String {
    if selection.is_empty() {
        "none".to_string()
    } else {
        selection.iter().collect::<Vec<_>>().join(", ")
    }
}

/// Print a project summary, highlighting facets that are selected.
pub fn print_project(project: &Project, selection: &Selection) {
    println!("{} {}", bullet(), style(&project.title).bold());
    if !project.description.is_empty() {
        println!("    {}", truncate(&project.description, 96));
    }

    let facets: Vec<String> = project
        .tech
        .iter()
        .chain(project.tags.iter())
        .map(|f| {
            if selection.contains(f) {
                style(f).cyan().bold().to_string()
            } else {
                style(f).dim().to_string()
            }
        })
        .collect();
    if !facets.is_empty() {
        println!("    {} {}", dim_arrow(), facets.join(" · "));
    }
}
