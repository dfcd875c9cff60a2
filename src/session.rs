//! Edit-driven recomputation for the highlight and tree displays.
//!
//! Both displays rebuild from the full text on every relevant edit; there
//! is no incremental re-analysis. The highlighter refreshes on every edit.
//! The tree view only rebuilds while it is visible.

use tracing::trace;

use crate::ast::SyntaxNode;
use crate::classifier::Classifier;
use crate::highlight::{StyleTag, project};
use crate::parser::Parser;
use crate::tables::LanguageTables;
use crate::token::Token;

/// One text-changed notification from the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextChange {
    pub position: usize,
    pub inserted: usize,
    pub deleted: usize,
}

impl TextChange {
    #[must_use]
    pub const fn insert(position: usize, inserted: usize) -> Self {
        Self {
            position,
            inserted,
            deleted: 0,
        }
    }

    #[must_use]
    pub const fn delete(position: usize, deleted: usize) -> Self {
        Self {
            position,
            inserted: 0,
            deleted,
        }
    }

    /// True when at least one character was inserted or deleted.
    /// Style-only notifications report neither.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.inserted > 0 || self.deleted > 0
    }
}

/// Current token list and style array for one document.
#[derive(Debug, Clone)]
pub struct Highlighter {
    classifier: Classifier,
    tokens: Vec<Token>,
    styles: Vec<StyleTag>,
}

impl Highlighter {
    #[must_use]
    pub const fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            tokens: Vec::new(),
            styles: Vec::new(),
        }
    }

    /// Reclassify `text` and reproject its styles, replacing both.
    pub fn refresh(&mut self, text: &str) {
        self.tokens = self.classifier.classify(text);
        self.styles = project(text.len(), &self.tokens);
    }

    /// Refresh for an edit notification. Returns whether anything was
    /// recomputed.
    pub fn on_text_changed(&mut self, text: &str, change: TextChange) -> bool {
        if !change.is_edit() {
            return false;
        }
        self.refresh(text);
        true
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn styles(&self) -> &[StyleTag] {
        &self.styles
    }
}

/// Syntax-tree display state: visibility and the last built tree.
#[derive(Debug, Clone, Default)]
pub struct TreeView {
    tables: LanguageTables,
    visible: bool,
    tree: Option<SyntaxNode>,
}

impl TreeView {
    #[must_use]
    pub const fn new(tables: LanguageTables) -> Self {
        Self {
            tables,
            visible: false,
            tree: None,
        }
    }

    /// Make the view visible and rebuild the tree from `text`.
    pub fn show(&mut self, text: &str) {
        self.visible = true;
        self.rebuild(text);
    }

    /// Hide the view. The last tree is kept but no longer updated.
    pub const fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rebuild for an edit notification if the view is visible. Returns
    /// whether the tree was rebuilt.
    pub fn on_text_changed(&mut self, text: &str, change: TextChange) -> bool {
        if !change.is_edit() {
            return false;
        }
        if !self.visible {
            trace!(position = change.position, "tree view hidden, rebuild skipped");
            return false;
        }
        self.rebuild(text);
        true
    }

    /// Tree from the most recent rebuild, if any.
    #[must_use]
    pub const fn tree(&self) -> Option<&SyntaxNode> {
        self.tree.as_ref()
    }

    fn rebuild(&mut self, text: &str) {
        self.tree = Some(Parser::with_tables(text, &self.tables).parse());
    }
}
