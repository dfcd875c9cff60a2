//! Lexical highlighter and forgiving syntax-tree parser for a small
//! C-like language.
//!
//! Two independent pipelines run over the same text snapshot:
//!
//! - **highlighting**: [`classify`] finds string, char, and comment
//!   spans, then keyword, number, operator, and identifier matches
//!   outside them; [`project`] turns the token list into one style tag
//!   per byte.
//! - **tree building**: [`parse`] drives a [`Scanner`] through a
//!   recursive-descent grammar with precedence climbing and always
//!   returns a `Program` root, even for malformed input.
//!
//! # Quick start
//!
//! ```
//! use synlens::{classify, parse, project, style_string, NodeKind, TokenKind};
//!
//! let text = "int x = 1 + 2 * 3;";
//! let tokens = classify(text);
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//!
//! let styles = project(text.len(), &tokens);
//! assert!(style_string(&styles).starts_with("AAA"));
//!
//! let tree = parse(text);
//! assert_eq!(tree.kind, NodeKind::Program);
//! assert_eq!(tree.children[0].kind, NodeKind::VariableDecl);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod classifier;
pub mod formatter;
pub mod highlight;
pub mod parser;
pub mod scanner;
pub mod session;
pub mod spans;
pub mod tables;
pub mod token;

use std::path::{Path, PathBuf};

pub use ast::{NodeKind, SyntaxNode};
pub use classifier::{Classifier, classify};
pub use formatter::{format_tokens, format_tree};
pub use highlight::{StyleTag, project, style_string};
pub use parser::{Parser, parse};
pub use scanner::Scanner;
pub use session::{Highlighter, TextChange, TreeView};
pub use spans::{LiteralSpans, find_spans};
pub use tables::{LanguageTables, StatementForm};
pub use token::{Span, Token, TokenKind};

/// Errors from the fallible edges of the crate. Classification and
/// parsing themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A keyword table produced a pattern the regex engine rejected.
    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// A source file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Classify `text` and project the result in one step.
#[must_use]
pub fn highlight_str(text: &str) -> Vec<StyleTag> {
    project(text.len(), &classify(text))
}

/// Read a source file into memory.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
