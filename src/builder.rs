use crate::ast::{NodeKind, SyntaxNode};

impl SyntaxNode {
    /// Create a childless node without text.
    #[must_use]
    pub const fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a childless node carrying `text`.
    #[must_use]
    pub fn leaf(kind: NodeKind, text: &str) -> Self {
        Self::new(kind).with_text(text)
    }

    /// Set the node text.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Empty `Program` root.
    #[must_use]
    pub const fn program() -> Self {
        Self::new(NodeKind::Program)
    }

    /// Empty `Expression` placeholder.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::new(NodeKind::Expression)
    }

    #[must_use]
    pub fn identifier(name: &str) -> Self {
        Self::leaf(NodeKind::Identifier, name)
    }

    #[must_use]
    pub fn literal(value: &str) -> Self {
        Self::leaf(NodeKind::Literal, value)
    }

    #[must_use]
    pub fn type_name(name: &str) -> Self {
        Self::leaf(NodeKind::Type, name)
    }

    /// `BinaryExpr` with `op` as its text and `[left, right]` as children.
    #[must_use]
    pub fn binary(op: &str, left: Self, right: Self) -> Self {
        Self::leaf(NodeKind::BinaryExpr, op).child(left).child(right)
    }

    /// `AssignmentExpr` with `[target, value]` as children.
    #[must_use]
    pub fn assignment(target: Self, value: Self) -> Self {
        Self::new(NodeKind::AssignmentExpr).child(target).child(value)
    }

    /// `BlockStatement` holding `statements`.
    #[must_use]
    pub fn block(statements: impl IntoIterator<Item = Self>) -> Self {
        Self::new(NodeKind::BlockStatement).children(statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_tree() {
        let tree = SyntaxNode::program().child(SyntaxNode::binary(
            "+",
            SyntaxNode::literal("1"),
            SyntaxNode::identifier("x"),
        ));
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].text(), "+");
        assert_eq!(tree.children[0].children[1].kind, NodeKind::Identifier);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn placeholder_is_childless_expression() {
        assert!(SyntaxNode::placeholder().is_placeholder());
        assert!(!SyntaxNode::placeholder().child(SyntaxNode::literal("1")).is_placeholder());
        assert!(!SyntaxNode::new(NodeKind::BlockStatement).is_placeholder());
    }
}
