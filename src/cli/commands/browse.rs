//! Interactive facet browsing.

use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Settings;
use crate::filter::{apply_filter, available_filters, clear_filters, toggle_filter, Selection};

use super::super::helpers::{describe_selection, load_catalog, print_project};
use super::super::icons::{dim_arrow, facet_marker};

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Toggle(String),
    Clear,
    List,
    Quit,
    Nothing,
}

impl Action {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::Nothing,
            "clear" => Self::Clear,
            "list" | "?" => Self::List,
            "quit" | "exit" | "q" => Self::Quit,
            facet => Self::Toggle(facet.to_string()),
        }
    }
}

/// Toggle facets from stdin until `quit` or end of input.
pub async fn cmd_browse(settings: &Settings) -> anyhow::Result<()> {
    let catalog = load_catalog(settings)?;
    let facets = available_filters(&catalog.projects);

    println!(
        "{} Type a facet to toggle it, {} to reset, {} for facets, {} to exit",
        style("Browse projects").bold(),
        style("clear").cyan(),
        style("list").cyan(),
        style("quit").cyan()
    );
    println!("{} {}", dim_arrow(), facets.join(", "));

    let mut selection = Selection::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        selection = match Action::parse(&line) {
            Action::Nothing => continue,
            Action::Quit => break,
            Action::List => {
                for facet in &facets {
                    println!("  {} {}", facet_marker(selection.contains(facet)), facet);
                }
                continue;
            }
            Action::Clear => clear_filters(&selection),
            Action::Toggle(facet) => {
                if facets.binary_search(&facet).is_err() {
                    println!("{} '{}' is not a known facet", dim_arrow(), facet);
                }
                toggle_filter(&selection, &facet)
            }
        };

        let matches = apply_filter(&catalog.projects, &selection);
        println!(
            "\n{} {} ({} matching)",
            style("Selected:").bold(),
            describe_selection(&selection),
            matches.len()
        );
        for project in matches {
            print_project(project, &selection);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(Action::parse("  "), Action::Nothing);
        assert_eq!(Action::parse("clear"), Action::Clear);
        assert_eq!(Action::parse("?"), Action::List);
        assert_eq!(Action::parse("q"), Action::Quit);
        assert_eq!(
            Action::parse("  Agentic Workflows "),
            Action::Toggle("Agentic Workflows".to_string())
        );
    }
}
