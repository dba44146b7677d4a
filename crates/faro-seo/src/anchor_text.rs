//! Anchor-text audit
//!
//! Flags crawlable anchors whose text is a generic call to action instead
//! of something a crawler can learn from.

use faro_audit::{AnchorElement, Artifacts, Audit, AuditCategory, AuditDetails, AuditError, AuditResult};
use url::Url;

pub const ID: &str = "anchor-text";
pub const TITLE: &str = "Anchors have descriptive text";

const BLOCKLIST: [&str; 9] = [
    "click here",
    "click this",
    "go",
    "here",
    "this",
    "start",
    "right here",
    "more",
    "learn more",
];

pub struct AnchorTextAudit;

impl Audit for AnchorTextAudit {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn category(&self) -> AuditCategory {
        AuditCategory::ContentBestPractices
    }

    fn run(&self, artifacts: &Artifacts) -> Result<AuditResult, AuditError> {
        let page = Url::parse(&artifacts.url)
            .map_err(|err| AuditError::Incomplete(format!("invalid page URL: {err}")))?;

        let failing: Vec<&AnchorElement> = artifacts
            .crawlable_anchors
            .iter()
            .filter(|anchor| is_undescriptive(anchor, &page))
            .collect();

        let rows = failing
            .iter()
            .map(|anchor| vec![anchor.href.clone(), anchor.text.clone()])
            .collect();
        let details = AuditDetails::table(&["URL", "Text"], rows);

        let mut result = if failing.is_empty() {
            AuditResult::pass(ID, TITLE, self.category())
        } else {
            AuditResult::fail(ID, TITLE, self.category())
                .with_display_value(format!("{} anchors found", failing.len()))
        };
        result = result.with_details(details);
        Ok(result)
    }
}

fn is_undescriptive(anchor: &AnchorElement, page: &Url) -> bool {
    // Unresolvable targets cannot be judged; skip rather than abort.
    let Ok(target) = page.join(&anchor.href) else {
        return false;
    };

    // Script links and same-page links carry no crawl signal.
    if target.scheme().eq_ignore_ascii_case("javascript") {
        return false;
    }
    if target.origin() == page.origin()
        && target.path() == page.path()
        && target.query() == page.query()
    {
        return false;
    }

    BLOCKLIST.contains(&anchor.text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/articles/1";

    fn anchor(href: &str, text: &str) -> AnchorElement {
        AnchorElement {
            href: href.to_string(),
            text: text.to_string(),
        }
    }

    fn run_audit(anchors: Vec<AnchorElement>) -> AuditResult {
        let artifacts = Artifacts {
            crawlable_anchors: anchors,
            ..Artifacts::new(PAGE)
        };
        AnchorTextAudit.run(&artifacts).unwrap()
    }

    #[test]
    fn test_descriptive_anchors_pass() {
        let result = run_audit(vec![
            anchor("https://example.com/pricing", "See our pricing"),
            anchor("/about", "About the team"),
        ]);
        assert!(result.passed);
    }

    #[test]
    fn test_generic_anchor_text_fails() {
        let result = run_audit(vec![
            anchor("https://example.com/pricing", " click here "),
            anchor("https://example.com/docs", "learn more"),
        ]);
        assert!(!result.passed);
        assert_eq!(result.display_value.as_deref(), Some("2 anchors found"));
        assert_eq!(result.details.unwrap().row_count(), 2);
    }

    #[test]
    fn test_javascript_and_same_page_links_are_ignored() {
        let result = run_audit(vec![
            anchor("javascript:void(0)", "here"),
            anchor("https://example.com/articles/1#comments", "more"),
        ]);
        assert!(result.passed);
    }

    #[test]
    fn test_relative_links_resolve_against_the_page() {
        let result = run_audit(vec![anchor("/other", "here")]);
        assert!(!result.passed);
    }
}
