//! Forgiving recursive-descent parser with precedence climbing.
//!
//! The parser never rejects input. Anything it does not recognize is
//! consumed and, in expression position, replaced by an empty
//! `Expression` placeholder; placeholders are dropped from statement
//! lists. Every call returns a `Program` root.

use std::sync::LazyLock;

use tracing::debug;

use crate::ast::{NodeKind, SyntaxNode};
use crate::scanner::Scanner;
use crate::tables::{LanguageTables, StatementForm};

static DEFAULT_TABLES: LazyLock<LanguageTables> = LazyLock::new(LanguageTables::default);

/// Parse `text` into a syntax tree using the default tables.
#[must_use]
pub fn parse(text: &str) -> SyntaxNode {
    Parser::new(text).parse()
}

/// One parse over one text. `parse` consumes the parser, so every parse
/// starts from a fresh cursor at offset 0.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    tables: &'a LanguageTables,
    current: &'a str,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self::with_tables(text, &DEFAULT_TABLES)
    }

    #[must_use]
    pub const fn with_tables(text: &'a str, tables: &'a LanguageTables) -> Self {
        Self {
            scanner: Scanner::new(text),
            tables,
            current: "",
        }
    }

    /// Build the `Program` tree.
    #[must_use]
    pub fn parse(mut self) -> SyntaxNode {
        let mut root = SyntaxNode::program();
        self.advance();

        while !self.current.is_empty() {
            if self.tables.is_type(self.current) {
                let lookahead = self.scanner.next_token();
                self.scanner.rewind(lookahead.len());
                let decl = if lookahead == "(" {
                    self.parse_function_def()
                } else {
                    self.parse_variable_decl()
                };
                root.children.push(decl);
            } else if self.current == ";" || self.tables.is_skipped_control(self.current) {
                self.advance();
            } else {
                let stmt = self.parse_statement();
                if !stmt.is_placeholder() {
                    root.children.push(stmt);
                }
            }
        }

        debug!(
            children = root.children.len(),
            nodes = root.node_count(),
            "parsed source"
        );
        root
    }

    fn advance(&mut self) {
        self.current = self.scanner.next_token();
    }

    fn eat(&mut self, expected: &str) -> bool {
        if self.current == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    // Leaf from the current token, then step past it.
    fn take_leaf(&mut self, kind: NodeKind) -> SyntaxNode {
        let node = SyntaxNode::leaf(kind, self.current);
        self.advance();
        node
    }

    fn parse_statement(&mut self) -> SyntaxNode {
        match self.tables.statement_form(self.current) {
            Some(StatementForm::If) => self.parse_if(),
            Some(StatementForm::While) => self.parse_while(),
            Some(StatementForm::For) => self.parse_for(),
            Some(StatementForm::Return) => self.parse_return(),
            None if self.tables.is_type(self.current) => self.parse_variable_decl(),
            None => {
                let stmt = self.parse_assignment();
                self.eat(";");
                stmt
            }
        }
    }

    fn parse_function_def(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::FunctionDef);

        if self.tables.is_type(self.current) {
            node.children.push(self.take_leaf(NodeKind::Type));
        }
        if !self.tables.is_control(self.current) {
            node.children.push(self.take_leaf(NodeKind::Identifier));
        }

        node.children.push(self.parse_param_list());

        if let Some(body) = self.parse_braced_block() {
            node.children.push(body);
        }
        node
    }

    fn parse_param_list(&mut self) -> SyntaxNode {
        let mut list = SyntaxNode::new(NodeKind::ParamList);

        if self.eat("(") {
            while self.current != ")" && !self.current.is_empty() {
                if self.tables.is_type(self.current) {
                    list.children.push(self.parse_param());
                    self.eat(",");
                } else {
                    self.advance();
                }
            }
            self.advance(); // `)`
        }
        list
    }

    fn parse_param(&mut self) -> SyntaxNode {
        let mut param = SyntaxNode::new(NodeKind::Param);

        if self.tables.is_type(self.current) {
            param.children.push(self.take_leaf(NodeKind::Type));
            if !self.tables.is_control(self.current) {
                param.children.push(self.take_leaf(NodeKind::Identifier));
            }
        }
        param
    }

    fn parse_variable_decl(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::VariableDecl);
        node.children.push(self.take_leaf(NodeKind::Type));
        node.children.push(self.take_leaf(NodeKind::Identifier));

        if self.eat("=") {
            node.children.push(self.parse_expression(0));
        }
        self.eat(";");
        node
    }

    fn parse_braced_block(&mut self) -> Option<SyntaxNode> {
        if !self.eat("{") {
            return None;
        }
        let block = self.parse_block();
        self.eat("}");
        Some(block)
    }

    fn parse_block(&mut self) -> SyntaxNode {
        let mut block = SyntaxNode::new(NodeKind::BlockStatement);

        while self.current != "}" && !self.current.is_empty() {
            if self.eat(";") {
                continue;
            }
            let stmt = self.parse_statement();
            if !stmt.is_placeholder() {
                block.children.push(stmt);
            }
        }
        block
    }

    fn parse_condition(&mut self) -> Option<SyntaxNode> {
        if !self.eat("(") {
            return None;
        }
        let condition = self.parse_expression(0);
        self.eat(")");
        Some(condition)
    }

    fn parse_if(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::IfStatement);
        self.advance(); // `if`

        node.children.extend(self.parse_condition());
        node.children.extend(self.parse_braced_block());

        if self.eat("else") {
            node.children.extend(self.parse_braced_block());
        }
        node
    }

    fn parse_while(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::WhileStatement);
        self.advance(); // `while`

        node.children.extend(self.parse_condition());
        node.children.extend(self.parse_braced_block());
        node
    }

    // Always three slots (init, condition, step), empty or not.
    fn parse_for(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ForStatement);
        self.advance(); // `for`

        if self.eat("(") {
            node.children.push(self.parse_expression(0));
            self.eat(";");
            node.children.push(self.parse_expression(0));
            self.eat(";");
            node.children.push(self.parse_expression(0));
            self.eat(")");
        }

        node.children.extend(self.parse_braced_block());
        node
    }

    fn parse_return(&mut self) -> SyntaxNode {
        let mut node = SyntaxNode::new(NodeKind::ReturnStatement);
        self.advance(); // `return`

        node.children.push(self.parse_expression(0));
        self.eat(";");
        node
    }

    /// Statement-level `=`: `target = value` becomes an `AssignmentExpr`.
    /// Anything else keeps climbing from the parsed primary.
    fn parse_assignment(&mut self) -> SyntaxNode {
        let left = self.parse_primary();

        if self.eat("=") {
            let value = self.parse_expression(0);
            return SyntaxNode::assignment(left, value);
        }
        self.climb(collapse(left), 0)
    }

    fn parse_expression(&mut self, min_precedence: u8) -> SyntaxNode {
        let left = collapse(self.parse_primary());
        self.climb(left, min_precedence)
    }

    fn climb(&mut self, mut left: SyntaxNode, min_precedence: u8) -> SyntaxNode {
        while let Some(precedence) = binary_precedence(self.current) {
            if precedence < min_precedence {
                break;
            }
            let op = self.current;
            self.advance();
            let right = collapse(self.parse_expression(precedence + 1));
            left = SyntaxNode::binary(op, left, right);
        }
        left
    }

    fn parse_primary(&mut self) -> SyntaxNode {
        if self.eat("(") {
            let inner = collapse(self.parse_expression(0));
            self.eat(")");
            return inner;
        }

        if starts_name(self.current) {
            return self.take_leaf(NodeKind::Identifier);
        }
        if matches!(self.current.as_bytes().first(), Some(b'0'..=b'9' | b'"' | b'\'')) {
            return self.take_leaf(NodeKind::Literal);
        }

        self.advance();
        SyntaxNode::placeholder()
    }
}

fn starts_name(token: &str) -> bool {
    token
        .as_bytes()
        .first()
        .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'_')
}

/// Precedence of a binary operator token; `None` ends an expression.
const fn binary_precedence(token: &str) -> Option<u8> {
    match token.as_bytes() {
        b"*" | b"/" | b"%" => Some(3),
        b"+" | b"-" => Some(2),
        b"=" => Some(1),
        _ => None,
    }
}

/// Replace an `Expression` wrapper holding exactly one child with that
/// child.
fn collapse(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind == NodeKind::Expression && node.children.len() == 1 {
        if let Some(only) = node.children.pop() {
            return only;
        }
    }
    node
}
