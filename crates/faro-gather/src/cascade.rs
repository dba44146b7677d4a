//! Matched-style cascade
//!
//! Decides which cascade entry supplies the effective value for a property
//! and classifies that entry into a reportable style origin. The stylesheet
//! population a rule belongs to is an explicit field on the entry, so
//! classification needs no ambient state.

use faro_audit::StyleOrigin;
use serde::{Deserialize, Serialize};

/// Which stylesheet population a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StylesheetKind {
    Author,
    UserAgent,
}

/// One declaration as it appears in a cascade entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProperty {
    pub name: String,
    pub value: String,
    /// True when a higher-precedence entry overrides this declaration.
    pub overridden: bool,
}

impl StyleProperty {
    pub fn effective(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            overridden: false,
        }
    }

    pub fn overridden(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            overridden: true,
        }
    }
}

/// Where a cascade entry comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeOrigin {
    /// A stylesheet rule with a source location.
    Rule {
        sheet_id: String,
        source_url: Option<String>,
        start_line: u32,
        start_column: u32,
        selectors: Vec<String>,
        stylesheet: StylesheetKind,
    },
    /// The element's `style` attribute.
    Inline,
    /// Presentational attributes on the element.
    Attributes,
}

/// One entry of an element's matched-style cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeEntry {
    pub origin: CascadeOrigin,
    pub properties: Vec<StyleProperty>,
}

/// An element's full matched-style cascade, highest precedence first, as
/// resolved by the page-inspection channel after specificity and override
/// computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedStyles {
    pub entries: Vec<CascadeEntry>,
}

impl MatchedStyles {
    pub fn new(entries: Vec<CascadeEntry>) -> Self {
        Self { entries }
    }

    /// The entry whose non-overridden declaration wins the cascade for
    /// `property`, or `None` when nothing sets it.
    pub fn effective_entry(&self, property: &str) -> Option<&CascadeEntry> {
        self.entries.iter().find(|entry| {
            entry
                .properties
                .iter()
                .any(|p| p.name == property && !p.overridden)
        })
    }
}

/// Classify a winning cascade entry into a style origin for reporting.
///
/// `None` means the owning rule could not be resolved.
pub fn classify_origin(entry: Option<&CascadeEntry>) -> StyleOrigin {
    let Some(entry) = entry else {
        return StyleOrigin::Unknown;
    };

    match &entry.origin {
        CascadeOrigin::Inline => StyleOrigin::Inline,
        CascadeOrigin::Attributes => StyleOrigin::Attributes,
        CascadeOrigin::Rule {
            stylesheet: StylesheetKind::UserAgent,
            selectors,
            ..
        } => StyleOrigin::UserAgent {
            selectors: selectors.clone(),
        },
        CascadeOrigin::Rule {
            sheet_id,
            source_url,
            start_line,
            start_column,
            selectors,
            stylesheet: StylesheetKind::Author,
        } => StyleOrigin::Regular {
            sheet_id: sheet_id.clone(),
            source_url: source_url.clone(),
            start_line: *start_line,
            start_column: *start_column,
            selectors: selectors.clone(),
        },
    }
}
