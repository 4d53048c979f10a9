use std::fmt::{self, Write};

use crate::ast::Node;
use crate::config::render::INDENT_WIDTH;

/// Render a tree one node per line, children indented one level deeper.
///
/// ```text
/// + (Add)
///     2 (Integer)
///     * (Multiply)
///         3 (Integer)
///         4 (Integer)
/// ```
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = render_into(&mut out, node, 0);
    out
}

/// Render an optional root; an absent tree renders as nothing.
pub fn render_root(root: Option<&Node>) -> String {
    root.map(render).unwrap_or_default()
}

pub fn render_into<W: Write>(out: &mut W, node: &Node, indent: usize) -> fmt::Result {
    match node {
        Node::BinaryOperator {
            operator,
            left,
            right,
        } => {
            writeln!(
                out,
                "{:indent$}{} ({})",
                "",
                operator.symbol(),
                operator.name(),
                indent = indent
            )?;
            render_into(out, left, indent + INDENT_WIDTH)?;
            render_into(out, right, indent + INDENT_WIDTH)
        }
        Node::Literal(value) => writeln!(out, "{:indent$}{} (Integer)", "", value, indent = indent),
    }
}
