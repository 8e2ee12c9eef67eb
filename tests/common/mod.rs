#![allow(dead_code)]

use kvcmd::{Statement, format, parse_str};

/// Parse `input`, format it, and assert the output equals `input`.
pub fn roundtrip(input: &str) {
    let stmt = parse_str(input).expect("parse failed");
    let output = format(&stmt);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format a statement, parse it back, assert equality.
pub fn assert_statement_roundtrip(original: &Statement) {
    let formatted = format(original);
    let parsed = parse_str(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });
    assert_eq!(
        original, &parsed,
        "statement mismatch\n--- formatted ---\n{formatted}"
    );
}
