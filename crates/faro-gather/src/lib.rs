//! faro Gatherers
//!
//! Collects page artifacts over an abstract page-inspection channel.
//!
//! Features:
//! - Font-size gatherer: per-text-node effective font sizes with rule attribution
//! - Viewport gatherer: `<meta name="viewport">` content
//! - Concurrent per-node style queries bracketed by session setup/teardown

pub mod cascade;
pub mod dom;
pub mod font_size;
pub mod inspector;
pub mod viewport;

pub use cascade::{CascadeEntry, CascadeOrigin, MatchedStyles, StyleProperty, StylesheetKind};
pub use dom::{DomNode, NodeType};
pub use font_size::collect_font_sizes;
pub use inspector::{ComputedProperty, PageInspector};
pub use viewport::collect_viewport;

/// Gather error
#[derive(Debug, thiserror::Error)]
pub enum GatherError {
    #[error("Page inspection channel failed: {0}")]
    Channel(String),

    #[error("Document unavailable: {0}")]
    Document(String),
}
