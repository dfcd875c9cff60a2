//! End-to-end runs over a small program: both pipelines on one snapshot,
//! and the edit-driven session types.

mod common;

use common::{ident, kinds, lit, ret, var_decl};
use synlens::{
    Classifier, Highlighter, LanguageTables, NodeKind, StyleTag, SyntaxNode, TextChange,
    TokenKind, TreeView, highlight_str, parse,
};

const DECLARATIONS: &str = "// greeting\n\
/* multi\n   line */\n\
string message = \"Hello, World!\";\n\
int count = 42;\n\
float pi = 3.14159;\n\
char letter = 'A';\n";

const LOOP: &str = "x = 10;\n\
while (x) {\n\
    x = x - 1;\n\
    if (x) { y = y * 2; } else { return x; }\n\
}\n";

#[test]
fn declarations_classify() {
    assert_eq!(
        kinds(DECLARATIONS),
        vec![
            (TokenKind::Comment, "// greeting"),
            (TokenKind::Comment, "/* multi\n   line */"),
            (TokenKind::Keyword, "string"),
            (TokenKind::Identifier, "message"),
            (TokenKind::Operator, "="),
            (TokenKind::String, "\"Hello, World!\""),
            (TokenKind::Keyword, "int"),
            (TokenKind::Identifier, "count"),
            (TokenKind::Operator, "="),
            (TokenKind::Number, "42"),
            (TokenKind::Keyword, "float"),
            (TokenKind::Identifier, "pi"),
            (TokenKind::Operator, "="),
            (TokenKind::Number, "3.14159"),
            (TokenKind::Keyword, "char"),
            (TokenKind::Identifier, "letter"),
            (TokenKind::Operator, "="),
            (TokenKind::Char, "'A'"),
        ]
    );
}

#[test]
fn declarations_parse() {
    let tree = parse(DECLARATIONS);
    assert_eq!(
        tree.children,
        vec![
            var_decl("string", "message", Some(lit("\"Hello, World!\""))),
            var_decl("int", "count", Some(lit("42"))),
            var_decl("float", "pi", Some(lit("3.14159"))),
            var_decl("char", "letter", Some(lit("'A'"))),
        ]
    );
}

#[test]
fn declarations_highlight() {
    let styles = highlight_str(DECLARATIONS);
    let bang = DECLARATIONS.find('!').expect("has bang");
    assert_eq!(styles[bang], StyleTag::String);
    let newline = DECLARATIONS.find('\n').expect("has newline");
    assert_eq!(styles[newline], StyleTag::Identifier);
}

#[test]
fn loop_parse() {
    let expected = SyntaxNode::program()
        .child(SyntaxNode::assignment(ident("x"), lit("10")))
        .child(
            SyntaxNode::new(NodeKind::WhileStatement)
                .child(ident("x"))
                .child(SyntaxNode::block([
                    SyntaxNode::assignment(ident("x"), SyntaxNode::binary("-", ident("x"), lit("1"))),
                    SyntaxNode::new(NodeKind::IfStatement)
                        .child(ident("x"))
                        .child(SyntaxNode::block([SyntaxNode::assignment(
                            ident("y"),
                            SyntaxNode::binary("*", ident("y"), lit("2")),
                        )]))
                        .child(SyntaxNode::block([ret(ident("x"))])),
                ])),
        );
    assert_eq!(parse(LOOP), expected);
}

#[test]
fn session_follows_edits() {
    let classifier = Classifier::new(&LanguageTables::default()).expect("compiles");
    let mut highlighter = Highlighter::new(classifier);
    let mut view = TreeView::default();

    let mut text = String::from("int a = 1;");
    highlighter.refresh(&text);
    assert_eq!(highlighter.styles().len(), text.len());

    // Hidden: only the highlighter follows.
    text.push_str(" a = a + 2;");
    let change = TextChange::insert(10, 11);
    assert!(highlighter.on_text_changed(&text, change));
    assert!(!view.on_text_changed(&text, change));
    assert!(view.tree().is_none());

    view.show(&text);
    let tree = view.tree().expect("built on show");
    assert_eq!(tree.children.len(), 2);

    text.clear();
    assert!(view.on_text_changed(&text, TextChange::delete(0, 21)));
    assert!(highlighter.on_text_changed(&text, TextChange::delete(0, 21)));
    assert_eq!(view.tree(), Some(&SyntaxNode::program()));
    assert!(highlighter.tokens().is_empty());
}
