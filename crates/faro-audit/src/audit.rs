//! Audit trait and runner

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::artifacts::Artifacts;
use crate::details::AuditDetails;
use crate::AuditError;

/// Audit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditCategory {
    MobileFriendly,
    ContentBestPractices,
    CrawlingAndIndexing,
    Accessibility,
}

/// Outcome of one audit over one page's artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    pub id: String,
    pub title: String,
    pub category: AuditCategory,
    /// Binary verdict.
    pub passed: bool,
    /// Short value shown next to the verdict, e.g. a count or percentage.
    pub display_value: Option<String>,
    /// Explanation when the verdict needs context or could not be computed.
    pub debug_string: Option<String>,
    pub details: Option<AuditDetails>,
}

impl AuditResult {
    pub fn pass(id: &str, title: &str, category: AuditCategory) -> Self {
        Self::verdict(id, title, category, true)
    }

    pub fn fail(id: &str, title: &str, category: AuditCategory) -> Self {
        Self::verdict(id, title, category, false)
    }

    fn verdict(id: &str, title: &str, category: AuditCategory, passed: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category,
            passed,
            display_value: None,
            debug_string: None,
            details: None,
        }
    }

    pub fn with_display_value(mut self, value: impl Into<String>) -> Self {
        self.display_value = Some(value.into());
        self
    }

    pub fn with_debug_string(mut self, value: impl Into<String>) -> Self {
        self.debug_string = Some(value.into());
        self
    }

    pub fn with_details(mut self, details: AuditDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// A single pass/fail page audit.
pub trait Audit: Send + Sync {
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn category(&self) -> AuditCategory;
    fn run(&self, artifacts: &Artifacts) -> Result<AuditResult, AuditError>;
}

/// Runs a set of audits over one page's artifacts.
#[derive(Default)]
pub struct AuditRunner {
    audits: Vec<Box<dyn Audit>>,
}

impl AuditRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, audit: Box<dyn Audit>) {
        self.audits.push(audit);
    }

    /// Runs every registered audit, in registration order.
    ///
    /// An audit that cannot complete is reported as a failed result with a
    /// debug string; it is never dropped from the report.
    pub fn run(&self, artifacts: &Artifacts) -> Vec<AuditResult> {
        self.audits
            .iter()
            .map(|audit| match audit.run(artifacts) {
                Ok(result) => result,
                Err(err) => {
                    warn!(audit = audit.id(), error = %err, "audit could not complete");
                    AuditResult::fail(audit.id(), audit.title(), audit.category())
                        .with_debug_string(format!("Audit could not complete: {err}"))
                }
            })
            .collect()
    }
}
