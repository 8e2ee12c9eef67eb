//! Tokenizer and parser for a small key/value command language with a
//! user-management sub-language.
//!
//! Each input line is one command. Parsing yields a typed
//! [`Statement`] for an executor to act on; nothing is executed here.
//!
//! # Quick start
//!
//! ```
//! use kvcmd::{Statement, Value, parse_str};
//!
//! let stmt = parse_str("put 5 in key_name").unwrap();
//! assert_eq!(
//!     stmt,
//!     Statement::Put { key: "key_name".to_string(), value: Value::Int(5) }
//! );
//! ```
//!
//! ## Token stream and options
//!
//! ```
//! use kvcmd::{ParseOptions, Permissions, parse_with, tokenize};
//!
//! let tokens = tokenize(r#"register user "ann" "pw" with "deploy" and is active"#).unwrap();
//! let options = ParseOptions::new()
//!     .permissions(Permissions::new(["deploy"]))
//!     .strict_connectives(true);
//! let stmt = parse_with(&tokens, &options).unwrap();
//! assert_eq!(stmt.kind(), "register_user");
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
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod validate;

pub use ast::{Statement, UserUpdate, Value};
pub use builder::Registration;
pub use formatter::format;
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use parser::{ParseError, ParseErrorKind, ParseOptions, parse, parse_with, token_value};
pub use token::{KEYWORDS, Token, TokenKind};
pub use validate::{Permissions, is_valid_key};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Tokenize and parse a command string in one step.
pub fn parse_str(input: &str) -> Result<Statement, Error> {
    parse_str_with(input, &ParseOptions::default())
}

/// Tokenize and parse a command string with explicit options.
pub fn parse_str_with(input: &str, options: &ParseOptions) -> Result<Statement, Error> {
    let tokens = tokenize(input)?;
    Ok(parse_with(&tokens, options)?)
}
