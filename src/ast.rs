use std::fmt;

/// Kind of a syntax-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of every tree.
    Program,
    FunctionDef,
    VariableDecl,
    ParamList,
    Param,
    /// Reserved; the parser never builds it.
    Statement,
    IfStatement,
    WhileStatement,
    ForStatement,
    ReturnStatement,
    /// Expression wrapper. A childless one is the placeholder left behind
    /// by unrecognized input.
    Expression,
    BinaryExpr,
    /// Reserved; the parser never builds it.
    UnaryExpr,
    AssignmentExpr,
    Literal,
    Identifier,
    Type,
    BlockStatement,
}

impl NodeKind {
    /// Human-readable name shown in tree outlines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::FunctionDef => "Function Definition",
            Self::VariableDecl => "Variable Declaration",
            Self::ParamList => "Parameter List",
            Self::Param => "Parameter",
            Self::Statement => "Statement",
            Self::IfStatement => "If Statement",
            Self::WhileStatement => "While Loop",
            Self::ForStatement => "For Loop",
            Self::ReturnStatement => "Return Statement",
            Self::Expression => "Expression",
            Self::BinaryExpr => "Binary Operation",
            Self::UnaryExpr => "Unary Operation",
            Self::AssignmentExpr => "Assignment",
            Self::Literal => "Literal",
            Self::Identifier => "Identifier",
            Self::Type => "Type",
            Self::BlockStatement => "Block",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A syntax-tree node that owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Operator, name, type, or literal text, when the node has one.
    pub text: Option<String>,
    pub children: Vec<Self>,
}

impl SyntaxNode {
    /// True for the empty placeholder produced by unrecognized input.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.kind == NodeKind::Expression && self.children.is_empty()
    }

    /// Node text, or `""` when the node carries none.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(&node.children);
        }
        count
    }
}

// Left-nested operator chains can be arbitrarily deep; unlink children
// onto a heap stack so dropping never recurses.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
