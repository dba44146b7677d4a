//! hreflang audit
//!
//! Every `rel=alternate` link, in the document or in `Link` response
//! headers, must carry `x-default` or a structurally valid language tag.

use faro_audit::{Artifacts, Audit, AuditCategory, AuditDetails, AuditError, AuditResult};

use crate::link_header;

pub const ID: &str = "hreflang";
pub const TITLE: &str = "Document has a valid hreflang";

const NO_LANGUAGE: &str = "x-default";

/// Structural BCP 47 check: a 2-3 letter primary language subtag, optional
/// alphanumeric subtags of up to 8 characters each.
fn is_valid_hreflang(hreflang: &str) -> bool {
    if hreflang.eq_ignore_ascii_case(NO_LANGUAGE) {
        return true;
    }

    let mut subtags = hreflang.split('-');
    let primary = match subtags.next() {
        Some(primary) if !primary.is_empty() => primary,
        _ => return false,
    };
    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    subtags.all(|subtag| {
        !subtag.is_empty() && subtag.len() <= 8 && subtag.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

/// True when every `rel=alternate` entry in the header value carries a valid
/// hreflang.
fn header_has_valid_hreflangs(value: &str) -> bool {
    link_header::links_with_rel(value, "alternate")
        .iter()
        .all(|link| link.param("hreflang").is_some_and(is_valid_hreflang))
}

pub struct HreflangAudit;

impl Audit for HreflangAudit {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn category(&self) -> AuditCategory {
        AuditCategory::CrawlingAndIndexing
    }

    fn run(&self, artifacts: &Artifacts) -> Result<AuditResult, AuditError> {
        let headers = artifacts
            .response_headers
            .as_ref()
            .ok_or(AuditError::MissingArtifact("response headers"))?;

        let mut invalid: Vec<Vec<String>> = Vec::new();

        for link in &artifacts.hreflang {
            if !is_valid_hreflang(&link.hreflang) {
                invalid.push(vec![format!(
                    "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />",
                    link.hreflang, link.href
                )]);
            }
        }

        for (name, value) in headers {
            if name.eq_ignore_ascii_case("link") && !header_has_valid_hreflangs(value) {
                invalid.push(vec![format!("{name}: {value}")]);
            }
        }

        let passed = invalid.is_empty();
        let details = AuditDetails::table(&["Source"], invalid);

        let result = if passed {
            AuditResult::pass(ID, TITLE, self.category())
        } else {
            AuditResult::fail(ID, TITLE, self.category())
        };
        Ok(result.with_details(details))
    }
}
