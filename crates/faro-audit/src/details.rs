//! Tabular audit details
//!
//! Generic table payload attached to audit results. Report renderers only
//! need column headings and row values; no audit-specific logic lives on
//! this side of the boundary.

use serde::{Deserialize, Serialize};

/// Structured details attached to an audit result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AuditDetails {
    Table {
        headings: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl AuditDetails {
    pub fn table(headings: &[&str], rows: Vec<Vec<String>>) -> Self {
        AuditDetails::Table {
            headings: headings.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            AuditDetails::Table { rows, .. } => rows.len(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        match self {
            AuditDetails::Table { rows, .. } => rows,
        }
    }
}
