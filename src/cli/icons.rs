//! Console icons shared by the folio commands.

use console::{style, StyledObject};

/// Green check for completed actions.
pub fn success() -> StyledObject<&'static str> {
    style("✓").green()
}

/// Yellow bang for recoverable problems (unknown facet, empty catalog).
pub fn warn() -> StyledObject<&'static str> {
    style("!").yellow()
}

pub fn dim_arrow() -> StyledObject<&'static str> {
    style("→").dim()
}

/// List item marker.
pub fn bullet() -> StyledObject<&'static str> {
    style("•").dim()
}

/// Marker for a facet: filled and cyan when selected, hollow otherwise.
pub fn facet_marker(selected: bool) -> StyledObject<&'static str> {
    if selected {
        style("●").cyan()
    } else {
        style("○").dim()
    }
}
