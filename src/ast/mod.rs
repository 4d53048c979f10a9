/*
*                    rdparse -- arithmetic expression parser.
*
* expression = term { ( "+" | "-" ) term } ;
* term       = factor { ( "*" | "/" ) factor } ;
* factor     = "(" expression ")" | integer ;
* integer    = digit { digit } ;
* digit      = "0" | "1" | ... | "9" ;
*/

// Abstract Syntax Tree definitions.
// Nodes form a strict tree: every child is owned by exactly one parent.

pub mod printer;
mod unparse;

pub use printer::{render, render_into, render_root};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Minus => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Human-readable name used by the tree renderer.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "Add",
            Operator::Minus => "Minus",
            Operator::Multiply => "Multiply",
            Operator::Divide => "Divide",
        }
    }

    /// Binding strength: multiplicative operators bind tighter than additive ones.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Minus => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(i64),
    BinaryOperator {
        operator: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn literal(value: i64) -> Self {
        Node::Literal(value)
    }

    pub fn binary(operator: Operator, left: Node, right: Node) -> Self {
        Node::BinaryOperator {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Node::BinaryOperator { .. })
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Node::Literal(value) => Some(*value),
            Node::BinaryOperator { .. } => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::BinaryOperator { operator, .. } => Some(*operator),
            Node::Literal(_) => None,
        }
    }

    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::BinaryOperator { left, right, .. } => Some((left, right)),
            Node::Literal(_) => None,
        }
    }

    pub fn left(&self) -> Option<&Node> {
        self.children().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&Node> {
        self.children().map(|(_, right)| right)
    }

    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Literal(_) => 1,
            Node::BinaryOperator { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        match self {
            Node::Literal(_) => 1,
            Node::BinaryOperator { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_round_trip() {
        for operator in Operator::ALL {
            assert_eq!(Operator::from_symbol(operator.symbol()), Some(operator));
        }
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn accessors_follow_variant() {
        let tree = Node::binary(Operator::Minus, Node::literal(8), Node::literal(3));
        assert!(tree.is_binary());
        assert_eq!(tree.operator(), Some(Operator::Minus));
        assert_eq!(tree.value(), None);
        assert_eq!(tree.left().and_then(Node::value), Some(8));
        assert_eq!(tree.right().and_then(Node::value), Some(3));

        let leaf = Node::literal(42);
        assert!(leaf.is_literal());
        assert_eq!(leaf.children(), None);
        assert_eq!(leaf.operator(), None);
    }

    #[test]
    fn size_metrics() {
        let tree = Node::binary(
            Operator::Add,
            Node::binary(Operator::Multiply, Node::literal(1), Node::literal(2)),
            Node::literal(3),
        );
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
    }
}
