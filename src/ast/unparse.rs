use std::fmt;

use crate::ast::{Node, Operator};

// Writes the expression back out with the fewest parentheses that keep its
// shape: a looser child is grouped, and so is a right child of equal
// precedence since every level folds to the left.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write!(f, "{}", value),
            Node::BinaryOperator {
                operator,
                left,
                right,
            } => {
                write_operand(f, left, *operator, false)?;
                write!(f, "{}", operator.symbol())?;
                write_operand(f, right, *operator, true)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, child: &Node, parent: Operator, is_right: bool) -> fmt::Result {
    let grouped = match child.operator() {
        Some(op) if is_right => op.precedence() <= parent.precedence(),
        Some(op) => op.precedence() < parent.precedence(),
        None => false,
    };
    if grouped {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}
