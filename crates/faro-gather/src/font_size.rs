//! Font-size gatherer
//!
//! For every non-empty text node under `<body>`, resolves the effective
//! `font-size` and the style origin that produced it. Per-node style queries
//! fan out concurrently and are awaited jointly; a node whose style cannot
//! be resolved degrades to an `Unknown`-origin record instead of failing
//! the pass.

use faro_audit::{NodeRef, StyleOrigin, TextRun};
use futures::future::{join, join_all};
use tracing::{debug, warn};

use crate::cascade::classify_origin;
use crate::dom::DomNode;
use crate::inspector::PageInspector;
use crate::GatherError;

const FONT_SIZE_PROPERTY: &str = "font-size";

/// Collects one [`TextRun`] per non-empty text node under the document body,
/// in breadth-first document order.
///
/// DOM and CSS inspection are enabled before the first query and disabled
/// after the last, also when collection fails. Only an unreachable document
/// is an error; a page without a body yields an empty collection.
pub async fn collect_font_sizes<I: PageInspector>(
    inspector: &I,
) -> Result<Vec<TextRun>, GatherError> {
    let (dom, css) = join(inspector.enable_dom(), inspector.enable_css()).await;

    let result = match dom.and(css) {
        Ok(()) => collect_inner(inspector).await,
        Err(err) => Err(err),
    };

    // Teardown runs on both paths; its own failures are logged, not returned.
    if let Err(err) = inspector.disable_css().await {
        warn!(error = %err, "failed to disable CSS inspection");
    }
    if let Err(err) = inspector.disable_dom().await {
        warn!(error = %err, "failed to disable DOM inspection");
    }

    result
}

async fn collect_inner<I: PageInspector>(inspector: &I) -> Result<Vec<TextRun>, GatherError> {
    let document = inspector.document().await?;

    let Some(body) = document.find_body() else {
        debug!("document has no body, nothing to collect");
        return Ok(Vec::new());
    };

    let candidates: Vec<(&DomNode, &DomNode)> = body
        .text_nodes_with_parents()
        .into_iter()
        .filter(|(text, _)| text.is_nonempty_text())
        .collect();

    let runs = join_all(
        candidates
            .into_iter()
            .map(|(text, parent)| font_size_information(inspector, text, parent)),
    )
    .await;

    debug!(runs = runs.len(), "collected font-size text runs");
    Ok(runs)
}

/// Resolves one text node's font size and owning rule. Never fails: any
/// query or parse problem degrades the record to an `Unknown` origin with a
/// conservatively failing size.
async fn font_size_information<I: PageInspector>(
    inspector: &I,
    text: &DomNode,
    parent: &DomNode,
) -> TextRun {
    let text_length = text.node_value.trim().chars().count() as u64;
    let node = NodeRef {
        node_id: parent.node_id,
        local_name: parent.local_name.clone(),
        attributes: parent.attributes.clone(),
    };

    let (computed, matched) = join(
        inspector.computed_style(parent.node_id),
        inspector.matched_styles(parent.node_id),
    )
    .await;

    let computed = match computed {
        Ok(computed) => computed,
        Err(err) => {
            warn!(node_id = parent.node_id, error = %err, "computed style unavailable");
            return unresolved_run(node, text_length);
        }
    };

    let font_size_px = computed
        .iter()
        .find(|p| p.name == FONT_SIZE_PROPERTY)
        .and_then(|p| parse_px(&p.value));

    let Some(font_size_px) = font_size_px else {
        warn!(node_id = parent.node_id, "computed font-size missing or unparseable");
        return unresolved_run(node, text_length);
    };

    let style_origin = match matched {
        Ok(matched) => classify_origin(matched.effective_entry(FONT_SIZE_PROPERTY)),
        Err(err) => {
            warn!(node_id = parent.node_id, error = %err, "matched styles unavailable");
            StyleOrigin::Unknown
        }
    };

    TextRun {
        font_size_px,
        text_length,
        style_origin,
        node,
    }
}

/// A record whose size could not be determined: zero pixels counts as
/// failing downstream, so illegibility is never hidden by a lost query.
fn unresolved_run(node: NodeRef, text_length: u64) -> TextRun {
    TextRun {
        font_size_px: 0,
        text_length,
        style_origin: StyleOrigin::Unknown,
        node,
    }
}

/// Parses the leading integer of a computed length, e.g. `"16px"` -> 16.
fn parse_px(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
