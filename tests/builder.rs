//! Builder API tests: constructed statements equal parsed ones.

use kvcmd::{Registration, Statement, UserUpdate, Value, parse_str};

#[test]
fn build_put() {
    assert_eq!(
        Statement::put("key_name", "some data"),
        parse_str("put \"some data\" in key_name").unwrap()
    );
    assert_eq!(
        Statement::put("n", 2.5),
        parse_str("put 2.5 in n").unwrap()
    );
}

#[test]
fn build_registration() {
    let built = Registration::new("admin", "15123ghgsd")
        .permission("add")
        .permission("edit")
        .permission("delete")
        .active(true)
        .build();
    let parsed =
        parse_str(r#"register user "admin" "15123ghgsd" with "add,edit,delete" and is active"#)
            .unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn build_registration_with_none() {
    let built: Statement = Registration::new("user2", "pass")
        .permission("add")
        .permission("none")
        .permission("delete")
        .into();
    let parsed =
        parse_str(r#"register user 'user2' 'pass' with "add,none,delete" and is not active"#)
            .unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn build_updates() {
    assert_eq!(
        Statement::update_user("x", UserUpdate::username("y")),
        parse_str(r#"update user "x" set username to "y""#).unwrap()
    );
    assert_eq!(
        Statement::update_user("x", UserUpdate::active(true)),
        parse_str(r#"update user "x" set active true"#).unwrap()
    );
}

#[test]
fn update_field_names() {
    assert_eq!(UserUpdate::password("p").field(), "password");
    assert_eq!(UserUpdate::username("u").field(), "username");
    assert_eq!(UserUpdate::permissions(["add"]).field(), "permissions");
    assert_eq!(UserUpdate::active(false).field(), "active");
}

#[test]
fn statement_kinds() {
    assert_eq!(Statement::put("k", Value::Bool(true)).kind(), "put");
    assert_eq!(Statement::get("k").kind(), "get");
    assert_eq!(Statement::delete("k").kind(), "delete");
    assert_eq!(Registration::new("u", "p").build().kind(), "register_user");
    assert_eq!(
        Statement::update_user("u", UserUpdate::active(true)).kind(),
        "update_user"
    );
    assert_eq!(Statement::get_user("u").kind(), "get_user");
    assert_eq!(Statement::delete_user("u").kind(), "delete_user");
    assert_eq!(Statement::list_users().kind(), "list_users");
}
