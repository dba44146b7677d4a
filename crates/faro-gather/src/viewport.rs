//! Viewport gatherer
//!
//! Reads the content of the document's `<meta name="viewport">` tag.

use std::collections::VecDeque;

use crate::dom::DomNode;
use crate::inspector::PageInspector;
use crate::GatherError;

/// Returns the viewport meta content, or `None` when the page declares none.
pub async fn collect_viewport<I: PageInspector>(
    inspector: &I,
) -> Result<Option<String>, GatherError> {
    let document = inspector.document().await?;
    Ok(find_viewport_content(&document))
}

fn find_viewport_content(document: &DomNode) -> Option<String> {
    let mut queue = VecDeque::from([document]);
    while let Some(node) = queue.pop_front() {
        if node.local_name == "meta"
            && node
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("viewport"))
        {
            return node.attr("content").map(str::to_string);
        }
        queue.extend(node.children.iter());
    }
    None
}
