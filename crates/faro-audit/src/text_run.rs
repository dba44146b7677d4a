//! Text-run model
//!
//! One contiguous unit of rendered text attributable to a single style
//! origin. Produced by the font-size gatherer, consumed by the font-size
//! audit. Everything here serializes so the gather/audit boundary can cross
//! a process if needed.

use serde::{Deserialize, Serialize};

/// Opaque reference to the element owning a text run. Used for display and,
/// for unattributed origins, as the grouping identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    pub node_id: u64,
    pub local_name: String,
    pub attributes: Vec<(String, String)>,
}

impl NodeRef {
    pub fn new(node_id: u64, local_name: &str) -> Self {
        Self {
            node_id,
            local_name: local_name.to_string(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Short element snippet for display, e.g. `<p class="small">`.
    pub fn snippet(&self) -> String {
        let mut out = format!("<{}", self.local_name);
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {name}=\"{value}\""));
        }
        out.push('>');
        out
    }
}

/// Where an effective font-size value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StyleOrigin {
    /// A rule in an external or embedded author stylesheet.
    Regular {
        sheet_id: String,
        /// URL of the owning stylesheet, absent for embedded `<style>` sheets.
        source_url: Option<String>,
        start_line: u32,
        start_column: u32,
        selectors: Vec<String>,
    },
    /// `style` attribute on the element itself.
    Inline,
    /// Presentational attributes on the element.
    Attributes,
    /// Default browser styling. Selectors are known, source location is not.
    UserAgent { selectors: Vec<String> },
    /// Style information could not be resolved.
    Unknown,
}

/// Grouping identity for a style origin.
///
/// Two runs belong to the same failing group iff their keys are equal: rule
/// coordinates for stylesheet rules, owning node identity for
/// inline/attribute/unresolved styles, the selector list for user-agent
/// rules. A structured key rather than concatenated coordinates, so a rule
/// at a real 0:0 never collides with one whose range defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OriginKey {
    Rule {
        sheet_id: String,
        start_line: u32,
        start_column: u32,
    },
    Inline(u64),
    Attributes(u64),
    UserAgent(Vec<String>),
    Unknown(u64),
}

/// One contiguous unit of rendered text and the style origin that sized it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// Resolved pixel font size.
    pub font_size_px: u32,
    /// Character count of the trimmed text content.
    pub text_length: u64,
    pub style_origin: StyleOrigin,
    pub node: NodeRef,
}

impl TextRun {
    pub fn grouping_key(&self) -> OriginKey {
        match &self.style_origin {
            StyleOrigin::Regular {
                sheet_id,
                start_line,
                start_column,
                ..
            } => OriginKey::Rule {
                sheet_id: sheet_id.clone(),
                start_line: *start_line,
                start_column: *start_column,
            },
            StyleOrigin::Inline => OriginKey::Inline(self.node.node_id),
            StyleOrigin::Attributes => OriginKey::Attributes(self.node.node_id),
            StyleOrigin::UserAgent { selectors } => OriginKey::UserAgent(selectors.clone()),
            StyleOrigin::Unknown => OriginKey::Unknown(self.node.node_id),
        }
    }
}
