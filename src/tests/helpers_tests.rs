// src/tests/helpers_tests.rs

//! tests for `src/readers/helpers.rs`

use crate::common::FPath;
use crate::readers::helpers::{basename, strip_cr, trim_field};

use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case(b"", b""; "empty")]
#[test_case(b"\r", b""; "only CR")]
#[test_case(b"abc\r", b"abc"; "trailing CR")]
#[test_case(b"abc\r\r", b"abc\r"; "one CR only")]
#[test_case(b"a\rbc", b"a\rbc"; "inner CR kept")]
#[test_case(b"abc", b"abc"; "no CR")]
fn test_strip_cr(
    line: &[u8],
    expect: &[u8],
) {
    assert_eq!(strip_cr(line), expect);
}

#[test_case(&["MZA240101.txt"], "MZA240101.txt")]
#[test_case(&["root", "MZA", "2024", "MZA240101.txt"], "MZA240101.txt")]
fn test_basename(
    parts: &[&str],
    expect: &str,
) {
    let path: FPath = parts.join(&std::path::MAIN_SEPARATOR.to_string());
    assert_eq!(basename(&path), expect);
}

#[test]
fn test_trim_field() {
    assert_eq!(trim_field("\u{3000}東京\u{3000} "), "東京");
}
