//! faro Audit Framework
//!
//! Shared plumbing for page audits.
//!
//! Features:
//! - `Audit` trait with binary pass/fail results
//! - Tabular details consumed by generic report renderers
//! - Page artifacts shared between gatherers and audits

pub mod artifacts;
pub mod audit;
pub mod details;
pub mod text_run;

pub use artifacts::{AnchorElement, Artifacts, EmbeddedContent, EmbeddedParam, HreflangLink};
pub use audit::{Audit, AuditCategory, AuditResult, AuditRunner};
pub use details::AuditDetails;
pub use text_run::{NodeRef, OriginKey, StyleOrigin, TextRun};

/// Audit error
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Required artifact missing: {0}")]
    MissingArtifact(&'static str),

    #[error("Audit could not complete: {0}")]
    Incomplete(String),
}
