//! Plain-text extraction.

use pf_content::ContentNode;

/// Concatenate every text value under `nodes` in document order.
///
/// The result is not escaped. Childless elements contribute their raw value.
/// Uses an explicit stack, so depth is not limited by the call stack.
#[must_use]
pub fn plain_text(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    let mut stack: Vec<&ContentNode> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match node {
            ContentNode::Text { value } => out.push_str(value),
            ContentNode::Element {
                children, value, ..
            } => {
                if children.is_empty() {
                    if let Some(value) = value {
                        out.push_str(value);
                    }
                } else {
                    stack.extend(children.iter().rev());
                }
            }
        }
    }

    out
}
