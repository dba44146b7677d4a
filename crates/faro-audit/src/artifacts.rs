//! Page artifacts
//!
//! Everything gatherers hand to audits for one page snapshot.

use serde::{Deserialize, Serialize};

use crate::text_run::TextRun;

/// A crawlable anchor found on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorElement {
    pub href: String,
    pub text: String,
}

/// A `rel="alternate"` link carrying an `hreflang` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HreflangLink {
    pub href: String,
    pub hreflang: String,
}

/// An `<embed>`, `<object>` or `<applet>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedContent {
    /// Uppercase tag name as reported by the page.
    pub tag_name: String,
    pub type_attr: Option<String>,
    pub src: Option<String>,
    pub data: Option<String>,
    pub code: Option<String>,
    pub params: Vec<EmbeddedParam>,
}

/// A `<param>` child of an embedded element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedParam {
    pub name: String,
    pub value: String,
}

/// Artifacts collected for one page snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artifacts {
    /// Final URL of the audited page.
    pub url: String,
    /// Content of the `<meta name="viewport">` tag, if any.
    pub viewport: Option<String>,
    /// Per-text-node font-size records from the font-size gatherer.
    pub font_size: Vec<TextRun>,
    pub crawlable_anchors: Vec<AnchorElement>,
    /// `rel="canonical"` hrefs found in the document head.
    pub canonical: Vec<String>,
    pub hreflang: Vec<HreflangLink>,
    pub embedded_content: Vec<EmbeddedContent>,
    /// HTTP status code of the main resource.
    pub http_status_code: Option<u16>,
    /// Response headers of the main resource, when captured.
    pub response_headers: Option<Vec<(String, String)>>,
}

impl Artifacts {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Response headers with the given name, case-insensitively.
    pub fn headers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.response_headers
            .iter()
            .flatten()
            .filter(move |(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
