//! Fixed word tables shared by the classifier and the parser.

/// Words highlighted as keywords.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "return", "int", "float", "void", "char", "string",
];

/// Words the parser treats as type names.
pub const DEFAULT_TYPE_KEYWORDS: &[&str] =
    &["int", "float", "double", "char", "string", "void", "bool"];

/// Words the parser treats as control keywords.
pub const DEFAULT_CONTROL_KEYWORDS: &[&str] =
    &["if", "else", "while", "for", "return", "break", "continue"];

/// Statement form opened by a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementForm {
    If,
    While,
    For,
    Return,
}

/// Words that open a statement form of their own.
pub const DEFAULT_STATEMENT_KEYWORDS: &[(&str, StatementForm)] = &[
    ("if", StatementForm::If),
    ("while", StatementForm::While),
    ("for", StatementForm::For),
    ("return", StatementForm::Return),
];

/// Keyword configuration owned by a [`crate::Classifier`] or
/// [`crate::Parser`].
///
/// The highlighting list and the parser lists are independent: `double`
/// and `bool` are types to the parser but plain identifiers to the
/// classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTables {
    pub keywords: Vec<String>,
    pub type_keywords: Vec<String>,
    pub control_keywords: Vec<String>,
    pub statement_keywords: Vec<(String, StatementForm)>,
}

impl LanguageTables {
    /// Build tables from explicit word lists. Statement keywords start
    /// out as [`DEFAULT_STATEMENT_KEYWORDS`].
    #[must_use]
    pub fn new(keywords: &[&str], type_keywords: &[&str], control_keywords: &[&str]) -> Self {
        Self {
            keywords: to_owned(keywords),
            type_keywords: to_owned(type_keywords),
            control_keywords: to_owned(control_keywords),
            statement_keywords: DEFAULT_STATEMENT_KEYWORDS
                .iter()
                .map(|(word, form)| ((*word).to_string(), *form))
                .collect(),
        }
    }

    /// Replace the statement keywords.
    #[must_use]
    pub fn with_statements(mut self, statements: &[(&str, StatementForm)]) -> Self {
        self.statement_keywords = statements
            .iter()
            .map(|(word, form)| ((*word).to_string(), *form))
            .collect();
        self
    }

    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k == word)
    }

    #[must_use]
    pub fn is_type(&self, word: &str) -> bool {
        self.type_keywords.iter().any(|k| k == word)
    }

    #[must_use]
    pub fn is_control(&self, word: &str) -> bool {
        self.control_keywords.iter().any(|k| k == word)
    }

    /// Statement form `word` opens, if any.
    #[must_use]
    pub fn statement_form(&self, word: &str) -> Option<StatementForm> {
        self.statement_keywords
            .iter()
            .find(|(k, _)| k == word)
            .map(|(_, form)| *form)
    }

    /// Control keyword that the top-level loop skips instead of parsing
    /// (`else`, `break`, `continue` with the default tables).
    #[must_use]
    pub fn is_skipped_control(&self, word: &str) -> bool {
        self.is_control(word) && self.statement_form(word).is_none()
    }
}

impl Default for LanguageTables {
    fn default() -> Self {
        Self::new(
            DEFAULT_KEYWORDS,
            DEFAULT_TYPE_KEYWORDS,
            DEFAULT_CONTROL_KEYWORDS,
        )
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}
