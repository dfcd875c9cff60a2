#![allow(dead_code)]

use synlens::{NodeKind, SyntaxNode, TokenKind, classify};

/// Classify `text` and pair each token kind with its source slice.
pub fn kinds(text: &str) -> Vec<(TokenKind, &str)> {
    classify(text)
        .iter()
        .map(|t| (t.kind, t.text(text)))
        .collect()
}

pub fn ident(name: &str) -> SyntaxNode {
    SyntaxNode::identifier(name)
}

pub fn lit(value: &str) -> SyntaxNode {
    SyntaxNode::literal(value)
}

pub fn ret(value: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(NodeKind::ReturnStatement).child(value)
}

pub fn var_decl(ty: &str, name: &str, init: Option<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::VariableDecl)
        .child(SyntaxNode::type_name(ty))
        .child(ident(name))
        .children(init)
}

/// Walk a tree depth-first, calling `visit` on every node.
pub fn walk(node: &SyntaxNode, visit: &mut impl FnMut(&SyntaxNode)) {
    visit(node);
    for child in &node.children {
        walk(child, visit);
    }
}
