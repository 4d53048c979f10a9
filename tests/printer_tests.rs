use rdparse::ast::{render, render_root};
use rdparse::{parse, Node, Operator};

#[test]
fn test_render_precedence_tree() {
    let root = parse("2+3*4").root.expect("Expected AST, found None");
    let expected = "\
+ (Add)
    2 (Integer)
    * (Multiply)
        3 (Integer)
        4 (Integer)
";
    assert_eq!(render(&root), expected);
}

#[test]
fn test_render_names_every_operator() {
    let root = parse("(1-2)/3").root.expect("Expected AST, found None");
    let expected = "\
/ (Divide)
    - (Minus)
        1 (Integer)
        2 (Integer)
    3 (Integer)
";
    assert_eq!(render(&root), expected);
}

#[test]
fn test_render_single_literal() {
    assert_eq!(render(&Node::literal(42)), "42 (Integer)\n");
}

#[test]
fn test_render_absent_root_is_empty() {
    let outcome = parse("+");
    assert!(outcome.root.is_none());
    assert_eq!(render_root(outcome.root.as_ref()), "");
}

#[test]
fn test_render_is_idempotent() {
    let root = parse("((1+2)*3-4)/5").root.expect("Expected AST, found None");
    let first = render(&root);
    let second = render(&root);
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), root.node_count());
}

#[test]
fn test_unparse_of_parsed_tree() {
    for source in ["8-3-2", "8-(3-2)", "(2+3)*4", "2+3*4", "1/(2*3)"] {
        let root = parse(source).root.expect("Expected AST, found None");
        assert_eq!(root.to_string(), source);
    }
    let root = parse("((1))+((2*3))").root.expect("Expected AST, found None");
    assert_eq!(root.to_string(), "1+2*3");
    assert_eq!(root.operator(), Some(Operator::Add));
}
