//! Plain-text renderers for token lists and syntax trees.
//!
//! These produce what the token and tree displays show: one line per
//! token, and an indented outline with one line per node.

use std::fmt::Write as _;

use crate::ast::SyntaxNode;
use crate::token::Token;

const INDENT: &str = "  ";

/// Render one `Kind: text` line per token.
#[must_use]
pub fn format_tokens(source: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{}: {}", token.kind, token.text(source));
    }
    out
}

/// Render a tree as an indented outline, two spaces per level.
///
/// Nodes with text print as `Label: text`, others as `Label`.
#[must_use]
pub fn format_tree(root: &SyntaxNode) -> String {
    let mut out = String::new();
    format_node(&mut out, root, 0);
    out
}

fn format_node(out: &mut String, root: &SyntaxNode, depth: usize) {
    let mut stack = vec![(root, depth)];
    while let Some((node, depth)) = stack.pop() {
        out.push_str(&INDENT.repeat(depth));
        out.push_str(node.kind.label());

        let text = node.text();
        if !text.is_empty() {
            out.push_str(": ");
            out.push_str(text);
        }
        out.push('\n');

        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::parser::parse;

    #[test]
    fn token_listing() {
        let text = "int x;";
        let out = format_tokens(text, &classify(text));
        assert_eq!(out, "Keyword: int\nIdentifier: x\n");
    }

    #[test]
    fn tree_outline() {
        let out = format_tree(&parse("int x = 1 + 2;"));
        assert_eq!(
            out,
            "Program\n\
             \x20 Variable Declaration\n\
             \x20   Type: int\n\
             \x20   Identifier: x\n\
             \x20   Binary Operation: +\n\
             \x20     Literal: 1\n\
             \x20     Literal: 2\n"
        );
    }

    #[test]
    fn siblings_keep_source_order() {
        let out = format_tree(&parse("if (a) { b = 1; } else { c = 2; }"));
        assert_eq!(
            out,
            "Program\n\
             \x20 If Statement\n\
             \x20   Identifier: a\n\
             \x20   Block\n\
             \x20     Assignment\n\
             \x20       Identifier: b\n\
             \x20       Literal: 1\n\
             \x20   Block\n\
             \x20     Assignment\n\
             \x20       Identifier: c\n\
             \x20       Literal: 2\n"
        );
    }

    #[test]
    fn empty_program() {
        assert_eq!(format_tree(&parse("")), "Program\n");
        assert_eq!(format_tokens("", &[]), "");
    }
}
