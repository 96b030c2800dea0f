/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Bare word that is not reserved.
    Identifier,
    /// Double-quoted literal, quotes stripped.
    String,
    /// `=`
    Assign,
    /// `;`
    Terminator,
    Create,
    Delete,
    SetStatus,
    Show,
}

impl TokenKind {
    /// The four reserved-word kinds.
    pub const KEYWORDS: [Self; 4] = [Self::Create, Self::Delete, Self::SetStatus, Self::Show];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Assign => "ASSIGN",
            Self::Terminator => "TERMINATOR",
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
            Self::SetStatus => "SET_STATUS",
            Self::Show => "SHOW",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token together with its lexeme and source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}
