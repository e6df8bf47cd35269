//! Facet filtering for content collections.
//!
//! Facets are the union of an item's technology and category tags. Filtering
//! is an OR across the selected facets: an item matches when any one of its
//! facets is selected. Selection state is passed explicitly; toggling or
//! clearing returns a new [`Selection`] and leaves the old one untouched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Experience, Project};

/// Anything that exposes filterable tags.
pub trait Faceted {
    /// Every facet value of this item. Duplicates are allowed.
    fn facets(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl Faceted for Project {
    fn facets(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(
            self.tech
                .iter()
                .chain(self.tags.iter())
                .map(|s| s.as_str()),
        )
    }
}

impl Faceted for Experience {
    fn facets(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.tech.iter().map(|s| s.as_str()))
    }
}

/// A set of selected facet values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Sorted, de-duplicated union of every facet in `items`.
pub fn available_filters<T: Faceted>(items: &[T]) -> Vec<String> {
    let facets: BTreeSet<&str> = items.iter().flat_map(|item| item.facets()).collect();
    facets.into_iter().map(str::to_string).collect()
}

/// Items with at least one facet in `selection`, in their original order.
///
/// An empty selection applies no filtering and returns every item.
pub fn apply_filter<'a, T: Faceted>(items: &'a [T], selection: &Selection) -> Vec<&'a T> {
    if selection.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| item.facets().any(|facet| selection.contains(facet)))
        .collect()
}

/// A copy of `selection` with `value` added if absent or removed if present.
pub fn toggle_filter(selection: &Selection, value: &str) -> Selection {
    let mut next = selection.clone();
    if !next.0.remove(value) {
        next.0.insert(value.to_string());
    }
    next
}

/// An empty selection, whatever was selected before.
pub fn clear_filters(_selection: &Selection) -> Selection {
    Selection::new()
}
