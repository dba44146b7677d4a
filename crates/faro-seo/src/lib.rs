//! faro SEO Audits
//!
//! Search-engine and mobile-friendliness heuristics over gathered page
//! artifacts.
//!
//! Features:
//! - Font-size legibility with per-rule attribution (the core audit)
//! - Viewport, anchor text, canonical, hreflang, HTTP status, plugins

pub mod anchor_text;
pub mod canonical;
pub mod font_size;
pub mod hreflang;
pub mod http_status_code;
pub mod link_header;
pub mod plugins;
pub mod viewport;

pub use anchor_text::AnchorTextAudit;
pub use canonical::CanonicalAudit;
pub use font_size::FontSizeAudit;
pub use hreflang::HreflangAudit;
pub use http_status_code::HttpStatusCodeAudit;
pub use plugins::PluginsAudit;
pub use viewport::ViewportAudit;

use faro_audit::Audit;

/// All SEO audits, in report order.
pub fn all_audits() -> Vec<Box<dyn Audit>> {
    vec![
        Box::new(ViewportAudit),
        Box::new(FontSizeAudit),
        Box::new(AnchorTextAudit),
        Box::new(CanonicalAudit),
        Box::new(HreflangAudit),
        Box::new(HttpStatusCodeAudit),
        Box::new(PluginsAudit),
    ]
}
