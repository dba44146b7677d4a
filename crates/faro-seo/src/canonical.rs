//! Canonical-link audit
//!
//! Validates `rel=canonical` targets collected from the document and from
//! `Link` response headers: they must be absolute, agree with each other,
//! stay on the page's domain, and not collapse the whole site to its root.

use faro_audit::{Artifacts, Audit, AuditCategory, AuditError, AuditResult};
use url::Url;

use crate::link_header;

pub const ID: &str = "canonical";
pub const TITLE: &str = "Document has a valid rel=canonical";

pub struct CanonicalAudit;

impl Audit for CanonicalAudit {
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
        let base = Url::parse(&artifacts.url)
            .map_err(|err| AuditError::Incomplete(format!("invalid page URL: {err}")))?;

        let mut canonicals: Vec<String> = Vec::new();
        for (name, value) in headers {
            if name.eq_ignore_ascii_case("link") {
                canonicals.extend(
                    link_header::links_with_rel(value, "canonical")
                        .into_iter()
                        .map(|link| link.uri),
                );
            }
        }
        canonicals.extend(artifacts.canonical.iter().cloned());

        if canonicals.is_empty() {
            return Ok(AuditResult::pass(ID, TITLE, self.category()));
        }

        let mut parsed: Vec<Url> = Vec::new();
        for candidate in &canonicals {
            match Url::parse(candidate) {
                Ok(url) => parsed.push(url),
                Err(url::ParseError::RelativeUrlWithoutBase) => {
                    // Relative targets are syntactically fine but invalid as
                    // canonical URLs; anything else is plain garbage.
                    let reason = if base.join(candidate).is_ok() {
                        format!("relative URL ({candidate})")
                    } else {
                        format!("invalid URL ({candidate})")
                    };
                    return Ok(self.fail_with(reason));
                }
                Err(_) => {
                    return Ok(self.fail_with(format!("invalid URL ({candidate})")));
                }
            }
        }

        let first = &parsed[0];
        if let Some(conflicting) = parsed.iter().find(|url| url.as_str() != first.as_str()) {
            return Ok(self.fail_with(format!(
                "multiple conflicting URLs ({conflicting}, {first})"
            )));
        }

        if root_domain(first) != root_domain(&base) {
            return Ok(self.fail_with(format!("points to a different domain ({first})")));
        }

        // Pointing every page at the site root is a common mistake.
        if first.origin() == base.origin() && first.path() == "/" && base.path() != "/" {
            return Ok(self.fail_with("points to the root of the same origin".to_string()));
        }

        Ok(AuditResult::pass(ID, TITLE, self.category()))
    }
}

impl CanonicalAudit {
    fn fail_with(&self, reason: String) -> AuditResult {
        AuditResult::fail(ID, TITLE, self.category()).with_debug_string(reason)
    }
}

/// Registrable-ish domain: the last two labels of the hostname.
fn root_domain(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        host.to_string()
    } else {
        labels[labels.len() - 2..].join(".")
    }
}
