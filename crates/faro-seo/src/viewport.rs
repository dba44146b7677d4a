//! Viewport audit
//!
//! Text cannot be mobile-legible without a device-width viewport, so the
//! font-size audit consumes this verdict before looking at any sizes.

use faro_audit::{Artifacts, Audit, AuditCategory, AuditError, AuditResult};

pub const ID: &str = "viewport";
pub const TITLE: &str = "Has a viewport meta tag with width=device-width";

/// True iff the page declares a device-width-scaled viewport meta tag.
pub fn has_legible_viewport(artifacts: &Artifacts) -> bool {
    artifacts.viewport.as_deref().is_some_and(|content| {
        content
            .split(',')
            .any(|directive| directive.trim().eq_ignore_ascii_case("width=device-width"))
    })
}

pub struct ViewportAudit;

impl Audit for ViewportAudit {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn category(&self) -> AuditCategory {
        AuditCategory::MobileFriendly
    }

    fn run(&self, artifacts: &Artifacts) -> Result<AuditResult, AuditError> {
        if has_legible_viewport(artifacts) {
            Ok(AuditResult::pass(ID, TITLE, self.category()))
        } else {
            Ok(AuditResult::fail(ID, TITLE, self.category())
                .with_debug_string("No viewport meta tag with width=device-width found"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifacts_with_viewport(content: Option<&str>) -> Artifacts {
        Artifacts {
            viewport: content.map(str::to_string),
            ..Artifacts::new("https://example.com/")
        }
    }

    #[test]
    fn test_device_width_viewport_passes() {
        assert!(has_legible_viewport(&artifacts_with_viewport(Some(
            "width=device-width, initial-scale=1"
        ))));
        assert!(has_legible_viewport(&artifacts_with_viewport(Some(
            "initial-scale=1,width=device-width"
        ))));
    }

    #[test]
    fn test_missing_or_fixed_viewport_fails() {
        assert!(!has_legible_viewport(&artifacts_with_viewport(None)));
        assert!(!has_legible_viewport(&artifacts_with_viewport(Some("width=1024"))));
        assert!(!has_legible_viewport(&artifacts_with_viewport(Some(""))));
    }

    #[test]
    fn test_audit_verdicts() {
        let pass = ViewportAudit
            .run(&artifacts_with_viewport(Some("width=device-width")))
            .unwrap();
        assert!(pass.passed);

        let fail = ViewportAudit.run(&artifacts_with_viewport(None)).unwrap();
        assert!(!fail.passed);
        assert!(fail.debug_string.unwrap().contains("viewport"));
    }
}
