//! Font-size legibility audit
//!
//! Correlates per-text-node font sizes against the style rules that produced
//! them, deduplicates failing text by originating rule, and reports how much
//! of the page's text is legible on mobile. A single pass with two early
//! exits: no viewport means an automatic fail, no text means an automatic
//! pass.

use std::collections::HashMap;

use faro_audit::{
    Artifacts, Audit, AuditCategory, AuditDetails, AuditError, AuditResult, NodeRef, OriginKey,
    StyleOrigin, TextRun,
};
use tracing::debug;

use crate::viewport;

pub const ID: &str = "font-size";
pub const TITLE: &str = "Document uses legible font sizes";

/// Text below this size requires pinch-to-zoom on mobile.
pub const MIN_LEGIBLE_FONT_SIZE_PX: u32 = 16;
/// Minimum share of page text that must be legible to pass.
pub const MIN_LEGIBLE_TEXT_PERCENT: f64 = 75.0;

const TABLE_HEADINGS: [&str; 5] = ["Source", "Selector", "Location", "% of Page Text", "Font Size"];

/// All failing text attributable to one style origin.
#[derive(Debug, Clone)]
pub struct FailingRuleGroup {
    pub origin: StyleOrigin,
    /// Element shown when the origin has no selectors of its own.
    pub node: NodeRef,
    /// Font size of the first-seen member; members of one origin share it,
    /// since the origin determines the size.
    pub font_size_px: u32,
    /// Sum of member text lengths.
    pub total_text_length: u64,
}

impl FailingRuleGroup {
    fn seed(run: &TextRun) -> Self {
        Self {
            origin: run.style_origin.clone(),
            node: run.node.clone(),
            font_size_px: run.font_size_px,
            total_text_length: run.text_length,
        }
    }
}

pub struct FontSizeAudit;

impl Audit for FontSizeAudit {
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
        Ok(evaluate(artifacts))
    }
}

/// Runs the legibility computation. Pure: no I/O, no shared state, safe to
/// invoke repeatedly on independent inputs.
pub fn evaluate(artifacts: &Artifacts) -> AuditResult {
    let category = AuditCategory::MobileFriendly;

    if !viewport::has_legible_viewport(artifacts) {
        return AuditResult::fail(ID, TITLE, category)
            .with_debug_string("Text is illegible because of a missing viewport config");
    }

    let runs = &artifacts.font_size;
    let total_text_length: u64 = runs.iter().map(|r| r.text_length).sum();
    if total_text_length == 0 {
        return AuditResult::pass(ID, TITLE, category);
    }

    let groups = group_failing_runs(runs);
    let failing_text_length: u64 = groups.iter().map(|g| g.total_text_length).sum();
    let passing_percent =
        (total_text_length - failing_text_length) as f64 / total_text_length as f64 * 100.0;
    let passed = passing_percent >= MIN_LEGIBLE_TEXT_PERCENT;

    debug!(
        total_text_length,
        failing_text_length, passing_percent, "font-size coverage computed"
    );

    let details = AuditDetails::table(
        &TABLE_HEADINGS,
        table_rows(&groups, total_text_length, &artifacts.url),
    );

    let mut result = if passed {
        AuditResult::pass(ID, TITLE, category)
    } else {
        AuditResult::fail(ID, TITLE, category)
            .with_debug_string(format!("{:.2}% of text is too small.", 100.0 - passing_percent))
    }
    .with_details(details);

    if passed && passing_percent < 100.0 {
        result = result.with_display_value(format!("{passing_percent:.2}% of text is legible."));
    }

    result
}

/// Groups failing runs by style-origin identity, summing text lengths.
/// Each run lands in exactly one group; encounter order is preserved.
fn group_failing_runs(runs: &[TextRun]) -> Vec<FailingRuleGroup> {
    let mut groups: Vec<FailingRuleGroup> = Vec::new();
    let mut index: HashMap<OriginKey, usize> = HashMap::new();

    for run in runs.iter().filter(|r| r.font_size_px < MIN_LEGIBLE_FONT_SIZE_PX) {
        match index.get(&run.grouping_key()) {
            Some(&at) => groups[at].total_text_length += run.text_length,
            None => {
                index.insert(run.grouping_key(), groups.len());
                groups.push(FailingRuleGroup::seed(run));
            }
        }
    }

    groups
}

/// One row per failing group, largest text share first. The sort is stable,
/// so equal shares keep encounter order and the first-seen rule is shown
/// first.
fn table_rows(groups: &[FailingRuleGroup], total_text_length: u64, page_url: &str) -> Vec<Vec<String>> {
    let mut ordered: Vec<&FailingRuleGroup> = groups.iter().collect();
    ordered.sort_by(|a, b| b.total_text_length.cmp(&a.total_text_length));

    ordered
        .iter()
        .map(|group| {
            let coverage = group.total_text_length as f64 / total_text_length as f64 * 100.0;
            vec![
                source_column(group, page_url),
                selector_column(group),
                location_column(group),
                format!("{coverage:.2}%"),
                format!("{}px", group.font_size_px),
            ]
        })
        .collect()
}

fn source_column(group: &FailingRuleGroup, page_url: &str) -> String {
    match &group.origin {
        StyleOrigin::Regular {
            source_url: Some(url),
            ..
        } => url.clone(),
        StyleOrigin::Regular { .. } => "embedded stylesheet".to_string(),
        StyleOrigin::Inline | StyleOrigin::Attributes => page_url.to_string(),
        StyleOrigin::UserAgent { .. } => "user agent stylesheet".to_string(),
        StyleOrigin::Unknown => "Unknown".to_string(),
    }
}

fn selector_column(group: &FailingRuleGroup) -> String {
    match &group.origin {
        StyleOrigin::Regular { selectors, .. } | StyleOrigin::UserAgent { selectors } => {
            selectors.join(", ")
        }
        StyleOrigin::Inline | StyleOrigin::Attributes | StyleOrigin::Unknown => {
            group.node.snippet()
        }
    }
}

fn location_column(group: &FailingRuleGroup) -> String {
    match &group.origin {
        StyleOrigin::Regular {
            start_line,
            start_column,
            ..
        } => format!("{start_line}:{start_column}"),
        _ => String::new(),
    }
}
