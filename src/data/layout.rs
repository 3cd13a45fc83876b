// src/data/layout.rs

//! Building blocks of a fixed-width record layout: [`ByteSpan`],
//! [`FieldTransform`], [`TextEncoding`], [`RecordTypeTag`], and the
//! [`FieldLayout`] that binds them together for one record type.
//!
//! Layouts are plain `const` data. The layouts themselves live in
//! [`catalog`].
//!
//! [`catalog`]: crate::data::catalog

use crate::common::DecodeError;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use ::encoding_rs::{Encoding, EUC_JP, SHIFT_JIS, UTF_8};
use ::phf::phf_map;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ByteSpan
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Byte offset within one line.
pub type LineOffset = usize;

/// Value transform applied to a span after slicing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FieldTransform {
    /// Plain trimmed text.
    None,
    /// A single character where `'a'..='f'` means `10..=15`. Any other
    /// character is kept as text, including decimal digits.
    HexDigitToDecimal,
    /// The span is `count` consecutive sub-fields of `width` bytes.
    RepeatedGroup {
        width: usize,
        count: usize,
    },
}

/// A named half-open byte range `[start, end)` within a fixed-width line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ByteSpan {
    pub name: &'static str,
    pub start: LineOffset,
    pub end: LineOffset,
    pub transform: FieldTransform,
}

impl ByteSpan {
    /// Plain text span.
    pub const fn text(
        name: &'static str,
        start: LineOffset,
        end: LineOffset,
    ) -> ByteSpan {
        ByteSpan {
            name,
            start,
            end,
            transform: FieldTransform::None,
        }
    }

    /// Single-character span holding a decimal-or-hex digit.
    pub const fn hex_digit(
        name: &'static str,
        start: LineOffset,
        end: LineOffset,
    ) -> ByteSpan {
        ByteSpan {
            name,
            start,
            end,
            transform: FieldTransform::HexDigitToDecimal,
        }
    }

    /// Span re-sliced into `(end - start) / width` sub-fields.
    ///
    /// A `width` that does not divide the span evenly is caught by
    /// [`FieldLayout::validate`].
    pub const fn group(
        name: &'static str,
        start: LineOffset,
        end: LineOffset,
        width: usize,
    ) -> ByteSpan {
        let count: usize = if width == 0 || end < start {
            0
        } else {
            (end - start) / width
        };
        ByteSpan {
            name,
            start,
            end,
            transform: FieldTransform::RepeatedGroup { width, count },
        }
    }

    /// Width of the span in bytes.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of output columns this span expands into.
    pub const fn column_count(&self) -> usize {
        match self.transform {
            FieldTransform::RepeatedGroup { count, .. } => count,
            _ => 1,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TextEncoding
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Character sets found in vendor files.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Charset {
    ShiftJis,
    EucJp,
    Utf8,
}

/// Substituted when detection is not confident.
pub const CHARSET_DEFAULT: Charset = Charset::ShiftJis;

impl Charset {
    /// The `encoding_rs` codec for this `Charset`.
    pub fn encoding(&self) -> &'static Encoding {
        match self {
            Charset::ShiftJis => SHIFT_JIS,
            Charset::EucJp => EUC_JP,
            Charset::Utf8 => UTF_8,
        }
    }

    /// Map an `encoding_rs` codec back to a `Charset`, if it is one the
    /// vendor uses.
    pub fn from_encoding(encoding: &'static Encoding) -> Option<Charset> {
        if encoding == SHIFT_JIS {
            Some(Charset::ShiftJis)
        } else if encoding == EUC_JP {
            Some(Charset::EucJp)
        } else if encoding == UTF_8 {
            Some(Charset::Utf8)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        self.encoding().name()
    }
}

impl fmt::Display for Charset {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How the text encoding of a file is chosen. Part of a [`FieldLayout`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TextEncoding {
    /// Always this charset, regardless of file content.
    Fixed(Charset),
    /// Detected from each file's raw bytes.
    Detect,
}

impl fmt::Display for TextEncoding {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            TextEncoding::Fixed(charset) => write!(f, "fixed {}", charset),
            TextEncoding::Detect => write!(f, "detect"),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RecordTypeTag
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The vendor's record type, taken from the letters of a file name,
/// e.g. `BAC` for `BAC240106.txt`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum RecordTypeTag {
    /// 番組データ
    BAC,
    /// 調教本追切データ
    CHA,
    /// 調教分析データ
    CYB,
    /// 調教師データ
    CZA,
    /// 情報データ
    JOA,
    /// 開催データ
    KAB,
    /// 競走馬拡張データ
    KKA,
    /// 競走馬データ
    KYI,
    /// 騎手データ
    KZA,
    /// 抹消馬データ
    MZA,
    /// ３連複オッズ
    OT,
    /// 馬単オッズ
    OU,
    /// ３連単オッズ
    OV,
    /// ワイドオッズ
    OW,
    /// 単複・馬連オッズ
    OZ,
    /// 成績データ
    SED,
    /// 成績拡張データ
    SKB,
    /// 成績レースデータ
    SRB,
    /// 馬基本データ
    UKC,
    /// 成績データ (前日)
    ZED,
    /// 成績拡張データ (前日)
    ZKB,
}

/// Every `RecordTypeTag`, in `Ord` order.
pub const RECORD_TYPE_TAGS: [RecordTypeTag; 21] = [
    RecordTypeTag::BAC,
    RecordTypeTag::CHA,
    RecordTypeTag::CYB,
    RecordTypeTag::CZA,
    RecordTypeTag::JOA,
    RecordTypeTag::KAB,
    RecordTypeTag::KKA,
    RecordTypeTag::KYI,
    RecordTypeTag::KZA,
    RecordTypeTag::MZA,
    RecordTypeTag::OT,
    RecordTypeTag::OU,
    RecordTypeTag::OV,
    RecordTypeTag::OW,
    RecordTypeTag::OZ,
    RecordTypeTag::SED,
    RecordTypeTag::SKB,
    RecordTypeTag::SRB,
    RecordTypeTag::UKC,
    RecordTypeTag::ZED,
    RecordTypeTag::ZKB,
];

/// Upper-case tag text to `RecordTypeTag`.
static MAP_STR_TO_RECORDTYPETAG: phf::Map<&'static str, RecordTypeTag> = phf_map! {
    "BAC" => RecordTypeTag::BAC,
    "CHA" => RecordTypeTag::CHA,
    "CYB" => RecordTypeTag::CYB,
    "CZA" => RecordTypeTag::CZA,
    "JOA" => RecordTypeTag::JOA,
    "KAB" => RecordTypeTag::KAB,
    "KKA" => RecordTypeTag::KKA,
    "KYI" => RecordTypeTag::KYI,
    "KZA" => RecordTypeTag::KZA,
    "MZA" => RecordTypeTag::MZA,
    "OT" => RecordTypeTag::OT,
    "OU" => RecordTypeTag::OU,
    "OV" => RecordTypeTag::OV,
    "OW" => RecordTypeTag::OW,
    "OZ" => RecordTypeTag::OZ,
    "SED" => RecordTypeTag::SED,
    "SKB" => RecordTypeTag::SKB,
    "SRB" => RecordTypeTag::SRB,
    "UKC" => RecordTypeTag::UKC,
    "ZED" => RecordTypeTag::ZED,
    "ZKB" => RecordTypeTag::ZKB,
};

impl RecordTypeTag {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RecordTypeTag::BAC => "BAC",
            RecordTypeTag::CHA => "CHA",
            RecordTypeTag::CYB => "CYB",
            RecordTypeTag::CZA => "CZA",
            RecordTypeTag::JOA => "JOA",
            RecordTypeTag::KAB => "KAB",
            RecordTypeTag::KKA => "KKA",
            RecordTypeTag::KYI => "KYI",
            RecordTypeTag::KZA => "KZA",
            RecordTypeTag::MZA => "MZA",
            RecordTypeTag::OT => "OT",
            RecordTypeTag::OU => "OU",
            RecordTypeTag::OV => "OV",
            RecordTypeTag::OW => "OW",
            RecordTypeTag::OZ => "OZ",
            RecordTypeTag::SED => "SED",
            RecordTypeTag::SKB => "SKB",
            RecordTypeTag::SRB => "SRB",
            RecordTypeTag::UKC => "UKC",
            RecordTypeTag::ZED => "ZED",
            RecordTypeTag::ZKB => "ZKB",
        }
    }

    /// Parse a tag, ignoring ASCII case. Surrounding whitespace is not
    /// accepted.
    pub fn parse(tag: &str) -> Option<RecordTypeTag> {
        MAP_STR_TO_RECORDTYPETAG
            .get(tag.to_ascii_uppercase().as_str())
            .copied()
    }
}

impl fmt::Display for RecordTypeTag {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordTypeTag {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordTypeTag::parse(s).ok_or_else(|| DecodeError::UnsupportedType(String::from(s)))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FieldLayout
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The complete byte layout of one record type.
///
/// `line_length` excludes the line terminator. Spans are listed in
/// ascending `start` order and never overlap; bytes not covered by any
/// span are gaps and are skipped when decoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldLayout {
    pub record_type: RecordTypeTag,
    pub line_length: usize,
    pub encoding: TextEncoding,
    pub spans: &'static [ByteSpan],
}

impl FieldLayout {
    /// Sum of the widths of all declared spans.
    pub const fn spans_width(&self) -> usize {
        let mut width: usize = 0;
        let mut i: usize = 0;
        while i < self.spans.len() {
            width += self.spans[i].len();
            i += 1;
        }
        width
    }

    /// The undeclared byte ranges `[start, end)` between and after spans.
    pub fn gaps(&self) -> Vec<(LineOffset, LineOffset)> {
        let mut gaps: Vec<(LineOffset, LineOffset)> = Vec::new();
        let mut at: LineOffset = 0;
        for span in self.spans.iter() {
            if span.start > at {
                gaps.push((at, span.start));
            }
            at = at.max(span.end);
        }
        if at < self.line_length {
            gaps.push((at, self.line_length));
        }
        gaps
    }

    /// Total gap bytes.
    pub fn gaps_width(&self) -> usize {
        self.gaps()
            .iter()
            .map(|(start, end)| end - start)
            .sum()
    }

    /// Smallest line length that satisfies every span.
    pub fn required_length(&self) -> usize {
        self.spans
            .iter()
            .map(|span| span.end)
            .max()
            .unwrap_or(0)
    }

    /// Number of output columns after repeated groups are expanded.
    pub fn column_count(&self) -> usize {
        self.spans
            .iter()
            .map(|span| span.column_count())
            .sum()
    }

    /// Output column names in declared order. A repeated group `name`
    /// becomes `name_1`, `name_2`, … `name_count`.
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.column_count());
        for span in self.spans.iter() {
            match span.transform {
                FieldTransform::RepeatedGroup { count, .. } => {
                    for n in 1..=count {
                        names.push(format!("{}_{}", span.name, n));
                    }
                }
                _ => names.push(String::from(span.name)),
            }
        }
        names
    }

    /// Check the layout invariants:
    ///
    /// - every span is non-empty and ends within `line_length`
    /// - spans ascend by `start` and do not overlap
    /// - span names are unique
    /// - a repeated group has a non-zero `width` that divides the span
    ///   exactly and `count == (end - start) / width`
    /// - a hex digit span is one byte wide
    /// - declared widths plus gaps equal `line_length`
    pub fn validate(&self) -> Result<(), DecodeError> {
        let invalid = |reason: String| -> Result<(), DecodeError> {
            Err(DecodeError::InvalidLayout {
                record_type: self.record_type,
                reason,
            })
        };
        if self.spans.is_empty() {
            return invalid(String::from("no spans declared"));
        }
        let mut names: HashSet<&'static str> = HashSet::with_capacity(self.spans.len());
        let mut prev_end: LineOffset = 0;
        for span in self.spans.iter() {
            if span.is_empty() {
                return invalid(format!("span {:?} is empty [{}, {})", span.name, span.start, span.end));
            }
            if span.end > self.line_length {
                return invalid(format!(
                    "span {:?} ends at {} beyond line length {}",
                    span.name, span.end, self.line_length
                ));
            }
            if span.start < prev_end {
                return invalid(format!(
                    "span {:?} starts at {} before the previous span ends at {}",
                    span.name, span.start, prev_end
                ));
            }
            if !names.insert(span.name) {
                return invalid(format!("span name {:?} is declared twice", span.name));
            }
            match span.transform {
                FieldTransform::RepeatedGroup { width, count } => {
                    if width == 0 || span.len() % width != 0 {
                        return invalid(format!(
                            "group {:?} width {} does not divide span width {}",
                            span.name,
                            width,
                            span.len()
                        ));
                    }
                    if count != span.len() / width {
                        return invalid(format!(
                            "group {:?} count {} is not {} / {}",
                            span.name,
                            count,
                            span.len(),
                            width
                        ));
                    }
                }
                FieldTransform::HexDigitToDecimal => {
                    if span.len() != 1 {
                        return invalid(format!("hex digit span {:?} is {} bytes", span.name, span.len()));
                    }
                }
                FieldTransform::None => {}
            }
            prev_end = span.end;
        }
        if self.spans_width() + self.gaps_width() != self.line_length {
            return invalid(format!(
                "spans {} + gaps {} != line length {}",
                self.spans_width(),
                self.gaps_width(),
                self.line_length
            ));
        }

        Ok(())
    }
}
