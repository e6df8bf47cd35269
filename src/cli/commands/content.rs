//! Facet listing and project filtering commands.

use console::style;

use crate::config::Settings;
use crate::filter::{apply_filter, available_filters, Selection};

use super::super::helpers::{describe_selection, load_catalog, print_project};
use super::super::icons::{bullet, warn};

/// List available facet values.
pub fn cmd_filters(settings: &Settings, experience: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(settings)?;
    let facets = if experience {
        available_filters(&catalog.experience)
    } else {
        available_filters(&catalog.projects)
    };

    if facets.is_empty() {
        println!("{} No facets found", warn());
        return Ok(());
    }

    for facet in facets {
        println!("{} {}", bullet(), facet);
    }
    Ok(())
}

/// List projects matching any of the given facets.
pub fn cmd_projects(settings: &Settings, filters: &[String], json: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(settings)?;
    let selection: Selection = filters.iter().map(String::as_str).collect();

    let known = available_filters(&catalog.projects);
    for value in selection.iter() {
        if known.binary_search_by(|f| f.as_str().cmp(value)).is_err() {
            tracing::warn!("Unknown facet '{}' matches no project", value);
        }
    }

    let matches = apply_filter(&catalog.projects, &selection);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!(
        "\n{} ({} of {}, selected: {})",
        style("Projects").bold(),
        matches.len(),
        catalog.projects.len(),
        describe_selection(&selection)
    );
    println!("{}", "-".repeat(60));
    for project in matches {
        print_project(project, &selection);
    }
    Ok(())
}
