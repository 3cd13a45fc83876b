// src/tests/common.rs

//! Common data and helpers for tests.

#![allow(dead_code)]

use crate::data::catalog::{MZA_LAYOUT, OZ_LAYOUT};
use crate::data::layout::{ByteSpan, FieldLayout};

/// A space-padded line of `layout.line_length` bytes with each
/// `(offset, bytes)` of `values` placed.
pub fn make_line(
    layout: &FieldLayout,
    values: &[(usize, &[u8])],
) -> Vec<u8> {
    let mut line: Vec<u8> = vec![b' '; layout.line_length];
    for (at, bytes) in values.iter() {
        line[*at..*at + bytes.len()].copy_from_slice(bytes);
    }

    line
}

/// File contents of `lines`, each ended with `"\n"`.
pub fn lines_to_bytes(lines: &[Vec<u8>]) -> Vec<u8> {
    let mut data: Vec<u8> = Vec::new();
    for line in lines.iter() {
        data.extend_from_slice(line);
        data.push(b'\n');
    }

    data
}

/// The span named `name` of `layout`.
pub fn span_named(
    layout: &FieldLayout,
    name: &str,
) -> ByteSpan {
    match layout.spans.iter().find(|span| span.name == name) {
        Some(span) => *span,
        None => panic!("layout {} has no span {:?}", layout.record_type, name),
    }
}

/// An MZA line holding registration number `number` (8 bytes).
pub fn mza_line(number: &str) -> Vec<u8> {
    assert_eq!(number.len(), 8);
    make_line(&MZA_LAYOUT, &[(0, number.as_bytes())])
}

/// An OZ line for venue `05`, year `24`, meeting `1`, day `day`, race `11`,
/// and every odds entry `entry` (5 bytes).
pub fn oz_line(
    day: u8,
    entry: &[u8; 5],
) -> Vec<u8> {
    let mut line: Vec<u8> = make_line(&OZ_LAYOUT, &[(0, b"05241"), (5, &[day]), (6, b"1118")]);
    for at in (10..OZ_LAYOUT.line_length).step_by(5) {
        line[at..at + 5].copy_from_slice(entry);
    }

    line
}
