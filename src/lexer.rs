use std::fmt;

use tracing::trace;

use crate::token::{Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Quoted string with no matching closing quote.
    UnterminatedString,
    /// Character that cannot start any token.
    IllegalCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => write!(f, "unterminated string"),
            Self::IllegalCharacter(ch) => write!(f, "illegal character '{ch}'"),
        }
    }
}

/// Error produced during lexing.
///
/// `position` is the zero-based character offset of the offending
/// character, or of the opening quote for an unterminated string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at position {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: usize,
}

/// Tokenize a command string into a sequence of tokens.
///
/// # Errors
///
/// Returns `LexError` on an unterminated quoted string or a character
/// that cannot start a token. No tokens are returned on failure.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(input).tokenize()?;
    trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

const fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

struct Lexer {
    input: Vec<char>,
    pos: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                c if c.is_whitespace() => self.pos += 1,
                '"' | '\'' => tokens.push(self.read_string(ch)?),
                c if c.is_ascii_digit() => tokens.push(self.read_number()),
                c if is_word_start(c) => tokens.push(self.read_word()),
                ',' => {
                    tokens.push(Token::new(TokenKind::Comma, ",", self.pos));
                    self.pos += 1;
                }
                other => {
                    return Err(LexError {
                        kind: LexErrorKind::IllegalCharacter(other),
                        position: self.pos,
                    });
                }
            }
        }

        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    fn slice(&self, start: usize) -> String {
        self.input[start..self.pos].iter().collect()
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    fn read_string(&mut self, quote: char) -> Result<Token, LexError> {
        let start = self.pos;
        self.pos += 1; // opening quote
        let content_start = self.pos;

        self.skip_while(|c| c != quote);
        if self.peek().is_none() {
            return Err(LexError {
                kind: LexErrorKind::UnterminatedString,
                position: start,
            });
        }

        let text = self.slice(content_start);
        self.pos += 1; // closing quote
        Ok(Token::new(TokenKind::String, text, start))
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        self.skip_while(|c| c.is_ascii_digit());

        // `1bad` is one word, not INT followed by IDENT
        if self.peek().is_some_and(is_word_start) {
            self.skip_while(is_word_char);
            return Token::new(TokenKind::Ident, self.slice(start), start);
        }

        let kind = if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.pos += 1;
            self.skip_while(|c| c.is_ascii_digit());
            TokenKind::Float
        } else {
            TokenKind::Int
        };

        Token::new(kind, self.slice(start), start)
    }

    fn read_word(&mut self) -> Token {
        let start = self.pos;
        self.skip_while(is_word_char);

        let word = self.slice(start);
        let lower = word.to_ascii_lowercase();
        TokenKind::keyword(&lower).map_or_else(
            || Token::new(TokenKind::Ident, word, start),
            |kind| Token::new(kind, lower, start),
        )
    }
}
