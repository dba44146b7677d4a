//! Page inspection contract
//!
//! The channel a gatherer uses to look inside a live page: document
//! snapshots, computed styles, and matched-rule cascades. Implementations
//! wrap whatever drives the page; gatherers stay protocol-agnostic.

use serde::{Deserialize, Serialize};

use crate::cascade::MatchedStyles;
use crate::dom::DomNode;
use crate::GatherError;

/// A computed style property as reported for an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedProperty {
    pub name: String,
    pub value: String,
}

impl ComputedProperty {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Abstract page-inspection channel.
///
/// `enable_dom` / `enable_css` must be called before any per-node query and
/// the matching `disable_*` calls after the last one; gatherers bracket
/// their query phase with them. Per-node queries are independent and may be
/// issued concurrently.
#[allow(async_fn_in_trait)]
pub trait PageInspector {
    async fn enable_dom(&self) -> Result<(), GatherError>;
    async fn enable_css(&self) -> Result<(), GatherError>;
    async fn disable_dom(&self) -> Result<(), GatherError>;
    async fn disable_css(&self) -> Result<(), GatherError>;

    /// Full document snapshot, piercing frame boundaries where supported.
    async fn document(&self) -> Result<DomNode, GatherError>;

    /// Computed style of the given element.
    async fn computed_style(&self, node_id: u64) -> Result<Vec<ComputedProperty>, GatherError>;

    /// Matched-style cascade of the given element.
    async fn matched_styles(&self, node_id: u64) -> Result<MatchedStyles, GatherError>;
}
