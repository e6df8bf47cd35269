//! Page metadata command.

use crate::config::Settings;
use crate::seo::PageMeta;

use super::super::helpers::load_catalog;

/// Print the sanitized head metadata for a page.
pub fn cmd_meta(
    settings: &Settings,
    path: &str,
    title: Option<&str>,
    description: Option<&str>,
    project: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut meta = PageMeta::from_settings(settings);

    if let Some(id) = project {
        let catalog = load_catalog(settings)?;
        let project = catalog
            .project(id)
            .ok_or_else(|| anyhow::anyhow!("Project not found: {}", id))?;
        meta = meta
            .with_title(format!("{} | {}", project.title, settings.site_name))
            .with_description(project.description.clone());
        if let Some(ref image) = project.image {
            meta.og_image = image.clone();
        }
    }
    if let Some(title) = title {
        meta = meta.with_title(title);
    }
    if let Some(description) = description {
        meta = meta.with_description(description);
    }

    if json {
        let tags = meta.tags(&settings.base_url, path);
        println!("{}", serde_json::to_string_pretty(&tags)?);
    } else {
        println!("{}", meta.render_head(&settings.base_url, path));
    }
    Ok(())
}
