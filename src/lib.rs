//! folio - content engine for a personal portfolio site.
//!
//! Loads the site's static content once and provides the logic the pages
//! lean on: facet filtering over projects, sanitization of anything written
//! into page metadata or links, SEO tag assembly, and the testimonial
//! carousel's rotation state.

pub mod carousel;
pub mod cli;
pub mod config;
pub mod content;
pub mod filter;
pub mod logging;
pub mod models;
pub mod sanitize;
pub mod seo;
pub mod validation;

pub use content::{ContentCatalog, ContentError, ContentFormat};
pub use filter::{apply_filter, available_filters, clear_filters, toggle_filter, Faceted, Selection};
