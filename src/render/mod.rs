//! Rendering a factor tree to indented text.
//!
//! Each node becomes one line, `"-> <value>"` prefixed with three spaces per
//! nesting level, left subtree before right. [`render`] is pure; writing the
//! result to a file is a separate step so failures stay at the I/O boundary.

use std::fs;
use std::io;
use std::path::Path;

use crate::factor::FactorNode;

const INDENT: &str = "   ";

/// Renders the tree as lines of text, pre-order, root at nest level 0.
pub fn render(root: &FactorNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_node(root, 0, &mut lines);
    lines
}

fn render_node(node: &FactorNode, nest_level: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}-> {}",
        INDENT.repeat(nest_level),
        node.value()
    ));
    if let FactorNode::Composite { left, right, .. } = node {
        render_node(left, nest_level + 1, lines);
        render_node(right, nest_level + 1, lines);
    }
}

/// Writes the rendered tree to `path`, one line per node, trailing newline.
pub fn write_tree_to_file(path: &Path, root: &FactorNode) -> io::Result<()> {
    let mut text = render(root).join("\n");
    text.push('\n');
    fs::write(path, text)
}
