//! Serializes a `Statement` back into canonical command text.
//!
//! Output re-parses to an equal statement under the default options,
//! as long as no string contains both quote characters (the grammar
//! has no escapes), no key is spelled like a keyword, and no number
//! is negative or NaN (the lexer has no sign).

use std::fmt;

use crate::ast::{Statement, UserUpdate, Value};

/// Format a `Statement` as a single command line.
///
/// Keywords are lower case, strings are double-quoted unless they
/// contain a double quote, and floats always carry a decimal point.
#[must_use]
pub fn format(statement: &Statement) -> String {
    let mut out = String::new();

    match statement {
        Statement::Put { key, value } => {
            out.push_str("put ");
            format_value(&mut out, value);
            out.push_str(" in ");
            out.push_str(key);
        }
        Statement::Get { key } => {
            out.push_str("get ");
            out.push_str(key);
        }
        Statement::Delete { key } => {
            out.push_str("delete ");
            out.push_str(key);
        }
        Statement::RegisterUser {
            username,
            password,
            permissions,
            is_active,
        } => {
            out.push_str("register user ");
            push_quoted(&mut out, username);
            out.push(' ');
            push_quoted(&mut out, password);
            out.push_str(" with ");
            push_quoted(&mut out, &permissions.join(","));
            out.push_str(if *is_active {
                " and is active"
            } else {
                " and is not active"
            });
        }
        Statement::UpdateUser { username, update } => {
            out.push_str("update user ");
            push_quoted(&mut out, username);
            out.push_str(" set ");
            out.push_str(update.field());
            format_update(&mut out, update);
        }
        Statement::GetUser { username } => {
            out.push_str("get user ");
            push_quoted(&mut out, username);
        }
        Statement::DeleteUser { username } => {
            out.push_str("delete user ");
            push_quoted(&mut out, username);
        }
        Statement::ListUsers => out.push_str("list users"),
    }

    out
}

fn format_update(out: &mut String, update: &UserUpdate) {
    match update {
        UserUpdate::Password(value) | UserUpdate::Username(value) => {
            out.push_str(" to ");
            push_quoted(out, value);
        }
        UserUpdate::Permissions(names) => {
            out.push(' ');
            push_quoted(out, &names.join(","));
        }
        UserUpdate::Active(active) => {
            out.push_str(if *active { " true" } else { " false" });
        }
    }
}

fn format_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => push_quoted(out, s),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(n) if n.is_infinite() && n.is_sign_positive() => {
            // smallest digit literal that overflows back to infinity
            out.push('1');
            out.push_str(&"0".repeat(309));
            out.push_str(".0");
        }
        Value::Float(n) => {
            let text = n.to_string();
            out.push_str(&text);
            // `1.0` displays as `1`, which would lex as an integer
            if !text.contains('.') {
                out.push_str(".0");
            }
        }
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
    }
}

fn push_quoted(out: &mut String, s: &str) {
    let quote = if s.contains('"') && !s.contains('\'') {
        '\''
    } else {
        '"'
    };
    out.push(quote);
    out.push_str(s);
    out.push(quote);
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_values() {
        assert_eq!(
            format(&Statement::put("k", "some data")),
            "put \"some data\" in k"
        );
        assert_eq!(format(&Statement::put("k", 5_i64)), "put 5 in k");
        assert_eq!(format(&Statement::put("k", 1.0)), "put 1.0 in k");
        assert_eq!(format(&Statement::put("k", 2.25)), "put 2.25 in k");
        assert_eq!(format(&Statement::put("k", false)), "put false in k");
    }

    #[test]
    fn infinite_float_is_written_as_overflowing_digits() {
        let out = format(&Statement::put("k", f64::INFINITY));
        assert_eq!(out, format!("put 1{}.0 in k", "0".repeat(309)));
    }

    #[test]
    fn quote_selection() {
        assert_eq!(
            format(&Statement::get_user("say \"hi\"")),
            "get user 'say \"hi\"'"
        );
        assert_eq!(format(&Statement::get_user("it's")), "get user \"it's\"");
    }

    #[test]
    fn register() {
        let stmt = Statement::RegisterUser {
            username: "admin".to_string(),
            password: "secret".to_string(),
            permissions: vec!["add".to_string(), "edit".to_string()],
            is_active: false,
        };
        assert_eq!(
            format(&stmt),
            "register user \"admin\" \"secret\" with \"add,edit\" and is not active"
        );
    }

    #[test]
    fn updates() {
        assert_eq!(
            format(&Statement::update_user("x", UserUpdate::password("p w"))),
            "update user \"x\" set password to \"p w\""
        );
        assert_eq!(
            format(&Statement::update_user(
                "x",
                UserUpdate::permissions(["add", "delete"])
            )),
            "update user \"x\" set permissions \"add,delete\""
        );
        assert_eq!(
            format(&Statement::update_user("x", UserUpdate::active(true))),
            "update user \"x\" set active true"
        );
    }

    #[test]
    fn display_matches_format() {
        assert_eq!(Statement::list_users().to_string(), "list users");
        assert_eq!(Statement::delete("k").to_string(), "delete k");
    }
}
