// src/tests/catalog_tests.rs

//! tests for `src/data/catalog.rs`

#![allow(non_snake_case)]

use crate::data::catalog::{layout_of, repeated_groups_divide};
use crate::data::layout::{
    ByteSpan,
    Charset,
    FieldLayout,
    FieldTransform,
    RecordTypeTag,
    TextEncoding,
    RECORD_TYPE_TAGS,
};
use crate::tests::common::span_named;

use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case(RecordTypeTag::BAC, 182)]
#[test_case(RecordTypeTag::CHA, 62)]
#[test_case(RecordTypeTag::CYB, 94)]
#[test_case(RecordTypeTag::CZA, 270)]
#[test_case(RecordTypeTag::JOA, 114)]
#[test_case(RecordTypeTag::KAB, 70)]
#[test_case(RecordTypeTag::KKA, 322)]
#[test_case(RecordTypeTag::KYI, 1022)]
#[test_case(RecordTypeTag::KZA, 270)]
#[test_case(RecordTypeTag::MZA, 14)]
#[test_case(RecordTypeTag::OT, 4910)]
#[test_case(RecordTypeTag::OU, 1854)]
#[test_case(RecordTypeTag::OV, 34286)]
#[test_case(RecordTypeTag::OW, 778)]
#[test_case(RecordTypeTag::OZ, 955)]
#[test_case(RecordTypeTag::SED, 374)]
#[test_case(RecordTypeTag::SKB, 272)]
#[test_case(RecordTypeTag::SRB, 851)]
#[test_case(RecordTypeTag::UKC, 290)]
#[test_case(RecordTypeTag::ZED, 374)]
#[test_case(RecordTypeTag::ZKB, 272)]
fn test_layout_coverage(
    record_type: RecordTypeTag,
    line_length: usize,
) {
    let layout: &FieldLayout = layout_of(record_type);
    assert_eq!(layout.record_type, record_type);
    assert_eq!(layout.line_length, line_length);
    // widths of spans and gaps add up to the line length
    assert_eq!(layout.spans_width() + layout.gaps_width(), layout.line_length);
    for span in layout.spans.iter() {
        assert!(
            span.end <= layout.line_length,
            "{} span {:?} ends at {} beyond {}",
            record_type,
            span.name,
            span.end,
            layout.line_length
        );
    }
    assert_eq!(layout.required_length(), line_length);
    if let Err(err) = layout.validate() {
        panic!("{}", err);
    }
}

#[test]
fn test_repeated_groups_divide_every_tag() {
    for tag in RECORD_TYPE_TAGS.iter() {
        assert!(repeated_groups_divide(layout_of(*tag).spans), "{}", tag);
    }
}

#[test]
fn test_repeated_groups_divide_uneven() {
    assert!(repeated_groups_divide(&[ByteSpan::group("a", 0, 12, 4)]));
    assert!(!repeated_groups_divide(&[ByteSpan::group("a", 0, 12, 5)]));
    assert!(!repeated_groups_divide(&[ByteSpan::group("a", 0, 12, 0)]));
    let wrong_count = ByteSpan {
        name: "a",
        start: 0,
        end: 12,
        transform: FieldTransform::RepeatedGroup { width: 4, count: 4 },
    };
    assert!(!repeated_groups_divide(&[ByteSpan::group("b", 0, 8, 4), wrong_count]));
}

#[test]
fn test_layout_of_every_tag() {
    for tag in RECORD_TYPE_TAGS.iter() {
        assert_eq!(layout_of(*tag).record_type, *tag);
    }
}

#[test]
fn test_srb_gap() {
    let layout: &FieldLayout = layout_of(RecordTypeTag::SRB);
    assert_eq!(layout.gaps(), vec![(8, 9)]);
}

#[test_case(RecordTypeTag::OT, "３連複オッズ", 10, 6, 816)]
#[test_case(RecordTypeTag::OU, "馬単オッズ", 10, 6, 306)]
#[test_case(RecordTypeTag::OV, "３連単オッズ", 10, 7, 4896)]
#[test_case(RecordTypeTag::OW, "ワイドオッズ", 10, 5, 153)]
#[test_case(RecordTypeTag::OZ, "単勝オッズ", 10, 5, 18)]
#[test_case(RecordTypeTag::OZ, "複勝オッズ", 100, 5, 18)]
#[test_case(RecordTypeTag::OZ, "連勝オッズ", 190, 5, 153)]
#[test_case(RecordTypeTag::SKB, "特記コード", 26, 3, 6)]
#[test_case(RecordTypeTag::SKB, "馬具コード", 44, 3, 8)]
#[test_case(RecordTypeTag::ZKB, "馬具コード", 44, 3, 8)]
#[test_case(RecordTypeTag::SRB, "ハロンタイム", 9, 3, 18)]
#[test_case(RecordTypeTag::SRB, "ペースアップ位置", 319, 1, 2)]
fn test_repeated_groups(
    record_type: RecordTypeTag,
    name: &str,
    start: usize,
    width_expect: usize,
    count_expect: usize,
) {
    let span = span_named(layout_of(record_type), name);
    assert_eq!(span.start, start);
    match span.transform {
        FieldTransform::RepeatedGroup { width, count } => {
            assert_eq!(width, width_expect);
            assert_eq!(count, count_expect);
            assert_eq!(count, (span.end - span.start) / width);
            assert_eq!((span.end - span.start) % width, 0);
        }
        transform => panic!("{} {:?} is {:?}", record_type, name, transform),
    }
}

#[test_case(RecordTypeTag::BAC, true)]
#[test_case(RecordTypeTag::CHA, true)]
#[test_case(RecordTypeTag::CYB, true)]
#[test_case(RecordTypeTag::CZA, false)]
#[test_case(RecordTypeTag::JOA, true)]
#[test_case(RecordTypeTag::KAB, true)]
#[test_case(RecordTypeTag::KKA, true)]
#[test_case(RecordTypeTag::KYI, true)]
#[test_case(RecordTypeTag::KZA, false)]
#[test_case(RecordTypeTag::MZA, false)]
#[test_case(RecordTypeTag::OT, true)]
#[test_case(RecordTypeTag::OU, true)]
#[test_case(RecordTypeTag::OV, true)]
#[test_case(RecordTypeTag::OW, true)]
#[test_case(RecordTypeTag::OZ, true)]
#[test_case(RecordTypeTag::SED, true)]
#[test_case(RecordTypeTag::SKB, true)]
#[test_case(RecordTypeTag::SRB, true)]
#[test_case(RecordTypeTag::UKC, false)]
#[test_case(RecordTypeTag::ZED, true)]
#[test_case(RecordTypeTag::ZKB, true)]
fn test_race_key_day_is_hex(
    record_type: RecordTypeTag,
    has_race_key: bool,
) {
    let layout: &FieldLayout = layout_of(record_type);
    let hex_spans: Vec<_> = layout
        .spans
        .iter()
        .filter(|span| span.transform == FieldTransform::HexDigitToDecimal)
        .collect();
    if has_race_key {
        assert_eq!(hex_spans.len(), 1, "{}", record_type);
        assert_eq!(hex_spans[0].name, "日");
        assert_eq!((hex_spans[0].start, hex_spans[0].end), (5, 6));
        assert_eq!(layout.spans[0].name, "場コード");
    } else {
        assert!(hex_spans.is_empty(), "{}", record_type);
    }
}

#[test]
fn test_only_cha_is_fixed() {
    for tag in RECORD_TYPE_TAGS.iter() {
        let encoding: TextEncoding = layout_of(*tag).encoding;
        if *tag == RecordTypeTag::CHA {
            assert_eq!(encoding, TextEncoding::Fixed(Charset::ShiftJis));
        } else {
            assert_eq!(encoding, TextEncoding::Detect, "{}", tag);
        }
    }
}

#[test]
fn test_shared_layouts() {
    assert_eq!(layout_of(RecordTypeTag::SED).spans, layout_of(RecordTypeTag::ZED).spans);
    assert_eq!(layout_of(RecordTypeTag::SKB).spans, layout_of(RecordTypeTag::ZKB).spans);
    assert_ne!(layout_of(RecordTypeTag::SED).record_type, layout_of(RecordTypeTag::ZED).record_type);
}
