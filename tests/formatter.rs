//! Formatter tests: canonical input survives parse then format.

mod common;

use common::{assert_statement_roundtrip, roundtrip};
use kvcmd::{Registration, Statement, UserUpdate, Value, format, parse_str};

#[test]
fn roundtrip_key_value_statements() {
    roundtrip("put \"some data to insert\" in key_name");
    roundtrip("put 5 in key_name");
    roundtrip("put 3.75 in key_name");
    roundtrip("put true in another_keyname");
    roundtrip("get another_keyname");
    roundtrip("delete key_name");
}

#[test]
fn roundtrip_user_statements() {
    roundtrip("register user \"admin\" \"15123ghgsd\" with \"add,edit,delete\" and is active");
    roundtrip("register user \"user2\" \"pass\" with \"none\" and is not active");
    roundtrip("update user \"an_users_name\" set password to \"new password\"");
    roundtrip("update user \"an_users_name\" set username to \"new_username\"");
    roundtrip("update user \"an_users_name\" set permissions \"add,delete\"");
    roundtrip("update user \"an_users_name\" set active false");
    roundtrip("get user \"admin\"");
    roundtrip("delete user \"admin\"");
    roundtrip("list users");
}

#[test]
fn format_normalises_spelling() {
    let stmt = parse_str("PUT  'x'  IN  key").unwrap();
    assert_eq!(format(&stmt), "put \"x\" in key");

    let stmt = parse_str("register user 'u' 'p' with \" add , edit \" and is not active").unwrap();
    assert_eq!(
        format(&stmt),
        "register user \"u\" \"p\" with \"add,edit\" and is not active"
    );
}

#[test]
fn formatted_statements_reparse() {
    let statements = [
        Statement::put("k", Value::Float(1.0)),
        Statement::put("k", "say \"hi\""),
        Statement::put("k", "true"),
        Registration::new("a b", "p,w").permission("read").build(),
        Statement::update_user("x", UserUpdate::permissions(Vec::<String>::new())),
        Statement::get_user("user"),
    ];
    for stmt in &statements {
        assert_statement_roundtrip(stmt);
    }
}

#[test]
fn string_with_both_quotes_does_not_reparse() {
    let stmt = Statement::put("k", "it's \"quoted\"");
    assert!(parse_str(&format(&stmt)).is_err());
}

#[test]
fn roundtrip_integer_too_large_for_any_float() {
    let stmt = parse_str(&format!("put {} in k", "9".repeat(400))).unwrap();
    assert_eq!(stmt, Statement::put("k", f64::INFINITY));
    assert_statement_roundtrip(&stmt);
}
