// src/tests/aggregator_tests.rs

//! tests for `src/readers/aggregator.rs`

#![allow(non_snake_case)]

use crate::common::DecodeError;
use crate::data::catalog::MZA_LAYOUT;
use crate::data::layout::RecordTypeTag;
use crate::data::record::{DecodedRecord, DecodedTable, FieldValue};
use crate::readers::aggregator::aggregate;
use crate::readers::recorddecoder::{RecordDecoder, SummaryRecordDecoder};
use crate::tests::common::{lines_to_bytes, mza_line};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const MZA_DECODER: RecordDecoder = RecordDecoder::new(&MZA_LAYOUT);

fn decode_numbers(numbers: &[&str]) -> DecodedTable {
    let lines: Vec<Vec<u8>> = numbers
        .iter()
        .map(|number| mza_line(number))
        .collect();
    let mut summary = SummaryRecordDecoder::default();

    MZA_DECODER.decode_bytes(&lines_to_bytes(&lines), &mut summary)
}

fn numbers_of(table: &DecodedTable) -> Vec<String> {
    table
        .records
        .iter()
        .map(|record| record.get("血統登録番号").map(|v| v.to_string()).unwrap_or_default())
        .collect()
}

/// rows follow the order of the tables, then the order within each table
#[test]
fn test_aggregate_order() {
    let a: DecodedTable = decode_numbers(&["00000009"]);
    let b: DecodedTable = decode_numbers(&["00000001"]);
    let table: DecodedTable = aggregate(RecordTypeTag::MZA, vec![a, b], Some(2024)).unwrap();
    assert_eq!(numbers_of(&table), vec!["00000009", "00000001"]);
    assert_eq!(table.year, Some(2024));
    assert_eq!(table.record_type, RecordTypeTag::MZA);
}

#[test]
fn test_aggregate_order_multi() {
    let a: DecodedTable = decode_numbers(&["00000003", "00000002"]);
    let b: DecodedTable = decode_numbers(&[]);
    let c: DecodedTable = decode_numbers(&["00000005", "00000004"]);
    let table: DecodedTable = aggregate(RecordTypeTag::MZA, vec![a, b, c], None).unwrap();
    assert_eq!(numbers_of(&table), vec!["00000003", "00000002", "00000005", "00000004"]);
    assert_eq!(table.year, None);
}

#[test]
fn test_aggregate_keeps_first_year() {
    let a = DecodedTable::new(RecordTypeTag::MZA, Some(1999));
    let mut b = DecodedTable::new(RecordTypeTag::MZA, Some(2001));
    b.push(DecodedRecord::new(vec![("血統登録番号", FieldValue::Missing)]));
    let table: DecodedTable = aggregate(RecordTypeTag::MZA, vec![a, b], None).unwrap();
    assert_eq!(table.year, Some(1999));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_aggregate_empty() {
    match aggregate(RecordTypeTag::MZA, Vec::new(), Some(2024)) {
        Err(DecodeError::EmptyAggregation(bucket)) => assert_eq!(bucket, "MZA/2024"),
        result => panic!("expected EmptyAggregation, got {:?}", result),
    }
}

#[test]
fn test_aggregate_empty_no_year() {
    match aggregate(RecordTypeTag::BAC, Vec::new(), None) {
        Err(DecodeError::EmptyAggregation(bucket)) => assert_eq!(bucket, "BAC"),
        result => panic!("expected EmptyAggregation, got {:?}", result),
    }
}

#[test]
fn test_aggregate_zero_records() {
    let a: DecodedTable = decode_numbers(&[]);
    let b: DecodedTable = decode_numbers(&[]);
    match aggregate(RecordTypeTag::MZA, vec![a, b], Some(2024)) {
        Err(DecodeError::EmptyAggregation(bucket)) => assert_eq!(bucket, "MZA/2024"),
        result => panic!("expected EmptyAggregation, got {:?}", result),
    }
}

#[test]
#[should_panic]
fn test_aggregate_mixed_types() {
    let a: DecodedTable = decode_numbers(&["00000001"]);
    let b = DecodedTable::new(RecordTypeTag::BAC, None);
    let _ = aggregate(RecordTypeTag::MZA, vec![a, b], None);
}

#[test]
#[should_panic]
fn test_aggregate_first_table_other_type() {
    let a = DecodedTable::new(RecordTypeTag::BAC, None);
    let b: DecodedTable = decode_numbers(&["00000001"]);
    let _ = aggregate(RecordTypeTag::MZA, vec![a, b], None);
}
