//! Token listing and tree outline rendering.

use synlens::{NodeKind, SyntaxNode, classify, format_tokens, format_tree, parse};

#[test]
fn format_tokens_one_line_each() {
    let text = "x = 'c'; // done";
    let out = format_tokens(text, &classify(text));
    assert_eq!(
        out,
        "Identifier: x\nOperator: =\nChar: 'c'\nComment: // done\n"
    );
}

#[test]
fn format_tokens_keeps_multiline_comment_text() {
    let text = "/* a\nb */";
    let out = format_tokens(text, &classify(text));
    assert_eq!(out, "Comment: /* a\nb */\n");
}

#[test]
fn format_tree_if_statement() {
    let out = format_tree(&parse("if (x) { return 1; }"));
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Program",
            "  If Statement",
            "    Identifier: x",
            "    Block",
            "      Return Statement",
            "        Literal: 1",
        ]
    );
}

#[test]
fn format_tree_omits_empty_text() {
    let tree = SyntaxNode::program().child(
        SyntaxNode::new(NodeKind::VariableDecl)
            .child(SyntaxNode::type_name("int"))
            .child(SyntaxNode::identifier("")),
    );
    assert_eq!(
        format_tree(&tree),
        "Program\n  Variable Declaration\n    Type: int\n    Identifier\n"
    );
}

#[test]
fn format_tree_placeholder() {
    let out = format_tree(&parse("return;"));
    assert_eq!(out, "Program\n  Return Statement\n    Expression\n");
}
