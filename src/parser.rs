use std::fmt;

use tracing::debug;

use crate::ast::{Statement, UserUpdate, Value};
use crate::token::{Token, TokenKind};
use crate::validate::{self, Permissions};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No tokens at all.
    EmptyInput,
    /// Input ended while `expected` was still to come.
    MissingToken { expected: &'static str },
    /// Key does not match the key-name shape.
    InvalidKey(String),
    /// Permission outside the vocabulary.
    InvalidPermission(String),
    /// A fixed word was required, something else was written.
    ExpectedLiteral {
        expected: &'static str,
        found: String,
    },
    /// `set active` followed by something other than `true`/`false`.
    ExpectedBoolean(String),
    /// `set` followed by a field that cannot be updated.
    UnknownUpdateField(String),
    /// Leading token does not start any statement.
    UnknownStatement(TokenKind),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::MissingToken { expected } => write!(f, "missing {expected}"),
            Self::InvalidKey(key) => write!(f, "invalid key name: '{key}'"),
            Self::InvalidPermission(perm) => write!(f, "invalid permission: '{perm}'"),
            Self::ExpectedLiteral { expected, found } => {
                write!(f, "expected '{expected}', got '{found}'")
            }
            Self::ExpectedBoolean(found) => {
                write!(f, "expected 'true' or 'false', got '{found}'")
            }
            Self::UnknownUpdateField(field) => {
                write!(f, "invalid field for update: '{field}'")
            }
            Self::UnknownStatement(kind) => write!(f, "unknown statement: {kind}"),
        }
    }
}

/// Error produced during parsing.
///
/// `position` is the character offset of the offending token, or
/// `None` when the input ended early.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}{}", .position.map(|p| format!(" at position {p}")).unwrap_or_default())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Option<usize>,
}

impl ParseError {
    const fn at(kind: ParseErrorKind, token: &Token) -> Self {
        Self {
            kind,
            position: Some(token.position),
        }
    }

    const fn eof(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Vocabulary permission lists are checked against.
    pub permissions: Permissions,
    /// Check the connective words of `register user` (`user`, `with`,
    /// `and`, `is`, `[not] active`) instead of skipping them by
    /// position.
    pub strict_connectives: bool,
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    #[must_use]
    pub const fn strict_connectives(mut self, strict: bool) -> Self {
        self.strict_connectives = strict;
        self
    }
}

/// Parse a token stream into a single `Statement` using default
/// options.
///
/// # Errors
///
/// Returns `ParseError` on the first malformed or invalid element.
pub fn parse(tokens: &[Token]) -> Result<Statement, ParseError> {
    parse_with(tokens, &ParseOptions::default())
}

/// Parse a token stream into a single `Statement`.
///
/// Tokens after the end of the statement are ignored.
///
/// # Errors
///
/// Returns `ParseError` on the first malformed or invalid element.
pub fn parse_with(tokens: &[Token], options: &ParseOptions) -> Result<Statement, ParseError> {
    let result = Parser::new(tokens, options).parse();
    match &result {
        Ok(statement) => debug!(statement = statement.kind(), "parsed statement"),
        Err(err) => debug!(error = %err, "parse failed"),
    }
    result
}

/// Convert a value token to a scalar according to its kind.
///
/// Integers too large for `i64` become floats; anything that is not
/// a number or boolean keeps its literal text.
#[must_use]
pub fn token_value(token: &Token) -> Value {
    let text = token.text.as_str();
    match token.kind {
        TokenKind::Int => text
            .parse::<i64>()
            .map_or_else(|_| float_value(text), Value::Int),
        TokenKind::Float => float_value(text),
        TokenKind::True => Value::Bool(true),
        TokenKind::False => Value::Bool(false),
        _ => Value::String(text.to_string()),
    }
}

fn float_value(text: &str) -> Value {
    text.parse::<f64>()
        .map_or_else(|_| Value::String(text.to_string()), Value::Float)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token], options: &'a ParseOptions) -> Self {
        Self {
            tokens,
            pos: 0,
            options,
        }
    }

    fn parse(mut self) -> Result<Statement, ParseError> {
        let first = self
            .next()
            .ok_or_else(|| ParseError::eof(ParseErrorKind::EmptyInput))?;

        match first.kind {
            TokenKind::Put => self.parse_put(),
            TokenKind::Get => self.parse_get(),
            TokenKind::Delete => self.parse_delete(),
            TokenKind::Register => self.parse_register(),
            TokenKind::Update => self.parse_update(),
            TokenKind::List => self.parse_list(),
            kind => Err(ParseError::at(
                ParseErrorKind::UnknownStatement(kind),
                first,
            )),
        }
    }

    fn parse_put(&mut self) -> Result<Statement, ParseError> {
        let value = token_value(self.expect("value")?);
        self.expect_literal("in")?;
        let key = self.expect_key()?;
        Ok(Statement::Put { key, value })
    }

    fn parse_get(&mut self) -> Result<Statement, ParseError> {
        if self.eat_literal("user") {
            let username = self.expect("username")?.text.clone();
            return Ok(Statement::GetUser { username });
        }
        let key = self.expect_key()?;
        Ok(Statement::Get { key })
    }

    fn parse_delete(&mut self) -> Result<Statement, ParseError> {
        if self.eat_literal("user") {
            let username = self.expect("username")?.text.clone();
            return Ok(Statement::DeleteUser { username });
        }
        let key = self.expect_key()?;
        Ok(Statement::Delete { key })
    }

    fn parse_register(&mut self) -> Result<Statement, ParseError> {
        self.connective("user")?;
        let username = self.expect("username")?.text.clone();
        let password = self.expect("password")?.text.clone();
        self.connective("with")?;
        let permissions = self.expect_permissions()?;
        self.connective("and")?;
        self.connective("is")?;
        let is_active = self.active_flag()?;

        Ok(Statement::RegisterUser {
            username,
            password,
            permissions,
            is_active,
        })
    }

    fn parse_update(&mut self) -> Result<Statement, ParseError> {
        self.expect_literal("user")?;
        let username = self.expect("username")?.text.clone();
        self.expect_literal("set")?;
        let field = self.expect("field to update")?;

        let update = match field.text.as_str() {
            "password" => {
                self.expect_literal("to")?;
                UserUpdate::Password(self.expect("new password")?.text.clone())
            }
            "username" => {
                self.expect_literal("to")?;
                UserUpdate::Username(self.expect("new username")?.text.clone())
            }
            "permissions" => UserUpdate::Permissions(self.expect_permissions()?),
            "active" => {
                let token = self.expect("'true' or 'false'")?;
                match token.text.as_str() {
                    "true" => UserUpdate::Active(true),
                    "false" => UserUpdate::Active(false),
                    other => {
                        return Err(ParseError::at(
                            ParseErrorKind::ExpectedBoolean(other.to_string()),
                            token,
                        ));
                    }
                }
            }
            other => {
                return Err(ParseError::at(
                    ParseErrorKind::UnknownUpdateField(other.to_string()),
                    field,
                ));
            }
        };

        Ok(Statement::UpdateUser { username, update })
    }

    fn parse_list(&mut self) -> Result<Statement, ParseError> {
        self.expect_literal("users")?;
        Ok(Statement::ListUsers)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn expect(&mut self, expected: &'static str) -> Result<&'a Token, ParseError> {
        self.next()
            .ok_or_else(|| ParseError::eof(ParseErrorKind::MissingToken { expected }))
    }

    fn expect_literal(&mut self, expected: &'static str) -> Result<(), ParseError> {
        let token = self.expect(expected)?;
        if token.text == expected {
            Ok(())
        } else {
            Err(ParseError::at(
                ParseErrorKind::ExpectedLiteral {
                    expected,
                    found: token.text.clone(),
                },
                token,
            ))
        }
    }

    /// Consume the next token if its text is exactly `literal`.
    fn eat_literal(&mut self, literal: &str) -> bool {
        let matched = self.peek().is_some_and(|t| t.text == literal);
        if matched {
            self.pos += 1;
        }
        matched
    }

    /// A connective word: checked in strict mode, skipped otherwise.
    fn connective(&mut self, expected: &'static str) -> Result<(), ParseError> {
        if self.options.strict_connectives {
            self.expect_literal(expected)
        } else {
            self.expect(expected).map(|_| ())
        }
    }

    fn active_flag(&mut self) -> Result<bool, ParseError> {
        if !self.options.strict_connectives {
            return Ok(self.expect("active state")?.text == "active");
        }
        if self.eat_literal("not") {
            self.expect_literal("active")?;
            return Ok(false);
        }
        self.expect_literal("active")?;
        Ok(true)
    }

    fn expect_key(&mut self) -> Result<String, ParseError> {
        let token = self.expect("key")?;
        if validate::is_valid_key(&token.text) {
            Ok(token.text.clone())
        } else {
            Err(ParseError::at(
                ParseErrorKind::InvalidKey(token.text.clone()),
                token,
            ))
        }
    }

    fn expect_permissions(&mut self) -> Result<Vec<String>, ParseError> {
        let token = self.expect("permissions list")?;
        validate::split_permissions(&token.text, &self.options.permissions)
            .map_err(|perm| ParseError::at(ParseErrorKind::InvalidPermission(perm), token))
    }
}
