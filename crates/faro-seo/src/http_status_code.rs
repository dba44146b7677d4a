//! HTTP status code audit
//!
//! Pages answering with an unsuccessful status code may not get indexed.

use faro_audit::{Artifacts, Audit, AuditCategory, AuditError, AuditResult};

pub const ID: &str = "http-status-code";
pub const TITLE: &str = "Page has a successful HTTP status code";

const UNSUCCESSFUL_LOW: u16 = 400;
const UNSUCCESSFUL_HIGH: u16 = 599;

pub struct HttpStatusCodeAudit;

impl Audit for HttpStatusCodeAudit {
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
        let result = match artifacts.http_status_code {
            None => AuditResult::fail(ID, TITLE, self.category())
                .with_debug_string("No HTTP status code was captured for the main resource"),
            Some(code) if (UNSUCCESSFUL_LOW..=UNSUCCESSFUL_HIGH).contains(&code) => {
                AuditResult::fail(ID, TITLE, self.category()).with_display_value(code.to_string())
            }
            Some(_) => AuditResult::pass(ID, TITLE, self.category()),
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(code: Option<u16>) -> AuditResult {
        let artifacts = Artifacts {
            http_status_code: code,
            ..Artifacts::new("https://example.com/")
        };
        HttpStatusCodeAudit.run(&artifacts).unwrap()
    }

    #[test]
    fn test_successful_codes_pass() {
        assert!(run_with(Some(200)).passed);
        assert!(run_with(Some(301)).passed);
        assert!(run_with(Some(399)).passed);
    }

    #[test]
    fn test_error_codes_fail_with_display_value() {
        let result = run_with(Some(404));
        assert!(!result.passed);
        assert_eq!(result.display_value.as_deref(), Some("404"));
        assert!(!run_with(Some(400)).passed);
        assert!(!run_with(Some(599)).passed);
    }

    #[test]
    fn test_missing_code_fails_with_debug_string() {
        let result = run_with(None);
        assert!(!result.passed);
        assert!(result.debug_string.unwrap().contains("status code"));
    }
}
