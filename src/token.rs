use std::fmt;

/// Token kinds produced by the lexer.
///
/// One variant per keyword; everything else is a literal, an
/// identifier, or a comma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Single- or double-quoted string, quotes stripped.
    String,
    /// Digits only.
    Int,
    /// Digits, a dot, digits.
    Float,
    /// Non-keyword word, original casing preserved.
    Ident,
    /// `,`
    Comma,
    Put,
    In,
    Get,
    Delete,
    Register,
    User,
    With,
    And,
    Is,
    Update,
    Set,
    True,
    False,
    None,
    Active,
    List,
}

/// Keyword table: lower-case spelling and the kind it lexes to.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("put", TokenKind::Put),
    ("in", TokenKind::In),
    ("get", TokenKind::Get),
    ("delete", TokenKind::Delete),
    ("register", TokenKind::Register),
    ("user", TokenKind::User),
    ("with", TokenKind::With),
    ("and", TokenKind::And),
    ("is", TokenKind::Is),
    ("update", TokenKind::Update),
    ("set", TokenKind::Set),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("none", TokenKind::None),
    ("active", TokenKind::Active),
    ("list", TokenKind::List),
];

impl TokenKind {
    /// Look up a keyword by its lower-case spelling.
    #[must_use]
    pub fn keyword(lower: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(text, _)| *text == lower)
            .map(|(_, kind)| *kind)
    }

    /// Whether this kind is one of the keyword variants.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        !matches!(
            self,
            Self::String | Self::Int | Self::Float | Self::Ident | Self::Comma
        )
    }

    /// Canonical upper-case name, as used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Ident => "IDENT",
            Self::Comma => "COMMA",
            Self::Put => "PUT",
            Self::In => "IN",
            Self::Get => "GET",
            Self::Delete => "DELETE",
            Self::Register => "REGISTER",
            Self::User => "USER",
            Self::With => "WITH",
            Self::And => "AND",
            Self::Is => "IS",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::None => "NONE",
            Self::Active => "ACTIVE",
            Self::List => "LIST",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token with its kind, literal text, and the zero-based
/// character offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}
