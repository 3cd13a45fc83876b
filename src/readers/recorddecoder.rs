// src/readers/recorddecoder.rs

//! Implements a [`RecordDecoder`], the one decode engine shared by every
//! record type. A [`FieldLayout`] parameterizes it.
//!
//! [`FieldLayout`]: crate::data::layout::FieldLayout

use crate::common::{
    Count,
    DecodeError,
    FPath,
    FileSz,
    LineNumber,
    NLu8,
};
use crate::data::layout::{
    ByteSpan,
    Charset,
    FieldLayout,
    FieldTransform,
    RecordTypeTag,
};
use crate::data::record::{
    DecodedRecord,
    DecodedTable,
    FieldValue,
};
#[allow(unused_imports)]
use crate::debug::printers::{de_err, de_wrn, e_err, e_wrn};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::line_to_String_noraw;
use crate::readers::charset::{
    resolve_charset,
    CharsetResolution,
    ResolvedCharset,
};
use crate::readers::helpers::{
    basename,
    fpath_to_path,
    strip_cr,
    trim_field,
};

use std::fmt;

use ::encoding_rs::Encoding;
use ::memchr::memchr_iter;
use ::more_asserts::debug_assert_le;
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
    def1n,
    def1o,
    def1x,
    def1ñ,
};

/// Line numbers of at most this many truncated lines are kept for
/// `--summary`.
pub const TRUNCATED_LINES_KEEP: usize = 5;

/// Result of decoding one line. An `Err` is always
/// [`DecodeError::RecordTruncated`].
pub type ResultDecodeLine = Result<DecodedRecord, DecodeError>;

/// Result of decoding one file.
pub type ResultDecodeFile = Result<DecodedTable, DecodeError>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SummaryRecordDecoder
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Statistics of decoding one file. For CLI option `--summary`.
// TODO: drop the redundant `recorddecoder_` prefix once nothing else uses
//       the flat field names
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SummaryRecordDecoder {
    pub recorddecoder_record_type: Option<RecordTypeTag>,
    pub recorddecoder_charset: Option<Charset>,
    pub recorddecoder_charset_resolution: CharsetResolution,
    /// Name of the rejected detector guess, if any.
    pub recorddecoder_charset_rejected: Option<&'static str>,
    pub recorddecoder_bytes: FileSz,
    pub recorddecoder_lines: Count,
    pub recorddecoder_records: Count,
    pub recorddecoder_lines_truncated: Count,
    /// The first [`TRUNCATED_LINES_KEEP`] truncated line numbers.
    pub recorddecoder_lines_truncated_first: Vec<LineNumber>,
    /// Lines longer than the layout's line length.
    pub recorddecoder_lines_overlong: Count,
}

impl SummaryRecordDecoder {
    fn truncated(
        &mut self,
        line_number: LineNumber,
    ) {
        self.recorddecoder_lines_truncated += 1;
        if self.recorddecoder_lines_truncated_first.len() < TRUNCATED_LINES_KEEP {
            self.recorddecoder_lines_truncated_first
                .push(line_number);
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RecordDecoder
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Decodes files of one record type into a [`DecodedTable`].
///
/// ## Summary of operation
///
/// 1. The whole file is read into memory. The largest record files are a
///    few megabytes.
/// 2. The charset is resolved once for the file, see [`resolve_charset`].
/// 3. The file is split into lines on `'\n'`; a trailing `'\r'` is removed.
/// 4. Each line is sliced as bytes at each [`ByteSpan`]. Each slice is
///    decoded with the file's charset and trimmed. Slicing bytes before
///    decoding keeps offsets exact for multi-byte charsets.
/// 5. A line shorter than a declared span is counted as truncated and
///    skipped; the rest of the file is still decoded.
///
/// A `RecordDecoder` holds no per-file state and is `Copy`, so one can be
/// handed to each worker thread.
///
/// [`resolve_charset`]: crate::readers::charset::resolve_charset
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct RecordDecoder {
    layout: &'static FieldLayout,
}

impl fmt::Debug for RecordDecoder {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("RecordDecoder")
            .field("record_type", &self.layout.record_type)
            .field("line_length", &self.layout.line_length)
            .field("encoding", &self.layout.encoding)
            .field("spans", &self.layout.spans.len())
            .finish()
    }
}

impl RecordDecoder {
    pub const fn new(layout: &'static FieldLayout) -> RecordDecoder {
        RecordDecoder { layout }
    }

    pub const fn layout(&self) -> &'static FieldLayout {
        self.layout
    }

    pub const fn record_type(&self) -> RecordTypeTag {
        self.layout.record_type
    }

    /// Decode the file at `path`.
    ///
    /// Only an unreadable file is an error. Truncated lines are skipped.
    pub fn decode(
        &self,
        path: &FPath,
    ) -> ResultDecodeFile {
        let (result, _summary) = self.decode_with_summary(path);

        result
    }

    /// Decode the file at `path` and also return the statistics of
    /// decoding.
    pub fn decode_with_summary(
        &self,
        path: &FPath,
    ) -> (ResultDecodeFile, SummaryRecordDecoder) {
        defn!("({:?})", path);
        let mut summary = SummaryRecordDecoder {
            recorddecoder_record_type: Some(self.record_type()),
            ..Default::default()
        };
        let data: Vec<u8> = match std::fs::read(fpath_to_path(path)) {
            Ok(data) => data,
            Err(err) => {
                defx!("read error {}", err);
                return (Err(DecodeError::Io(path.clone(), err)), summary);
            }
        };
        let table: DecodedTable = self.decode_bytes(&data, &mut summary);
        if summary.recorddecoder_charset_resolution == CharsetResolution::Fallback {
            e_wrn!(
                "charset detection for {:?} was not confident (guess {}); decoded as {}",
                path,
                summary
                    .recorddecoder_charset_rejected
                    .unwrap_or("none"),
                table_charset_name(&summary),
            );
        }
        if let Some(message) = truncated_lines_message(path, &summary, self.layout.line_length) {
            e_wrn!("{}", message);
        }
        defx!("({:?}) {} records", path, table.len());

        (Ok(table), summary)
    }

    /// Decode the raw contents of a whole file.
    pub fn decode_bytes(
        &self,
        data: &[u8],
        summary: &mut SummaryRecordDecoder,
    ) -> DecodedTable {
        def1n!("(data len {})", data.len());
        let resolved: ResolvedCharset = resolve_charset(self.layout.encoding, data);
        summary.recorddecoder_record_type = Some(self.record_type());
        summary.recorddecoder_charset = Some(resolved.charset);
        summary.recorddecoder_charset_resolution = resolved.resolution;
        summary.recorddecoder_charset_rejected = resolved
            .rejected_guess
            .map(|encoding| encoding.name());
        summary.recorddecoder_bytes = data.len() as FileSz;
        let encoding: &'static Encoding = resolved.charset.encoding();

        let mut table = DecodedTable::new(self.record_type(), None);
        let mut line_number: LineNumber = 0;
        let mut line_start: usize = 0;
        // a final segment with no '\n' is a line only if it is not empty
        let ends = memchr_iter(NLu8, data).chain(std::iter::once(data.len()));
        for line_end in ends {
            if line_start > data.len() || (line_end == data.len() && line_start == data.len()) {
                break;
            }
            line_number += 1;
            let line: &[u8] = strip_cr(&data[line_start..line_end]);
            line_start = line_end + 1;
            summary.recorddecoder_lines += 1;
            if line.len() > self.layout.line_length {
                summary.recorddecoder_lines_overlong += 1;
            }
            match self.decode_line(line, line_number, encoding) {
                Ok(record) => {
                    table.push(record);
                    summary.recorddecoder_records += 1;
                }
                Err(_err) => {
                    def1o!("skip line {}: {}", line_number, _err);
                    #[cfg(any(debug_assertions, test))]
                    def1o!("line {:?}", line_to_String_noraw(line));
                    summary.truncated(line_number);
                }
            }
        }
        debug_assert_le!(summary.recorddecoder_records, summary.recorddecoder_lines);
        def1x!("return {} records", table.len());

        table
    }

    /// Decode one line (without terminator) into a [`DecodedRecord`].
    ///
    /// Every span is checked before any slicing so a short line never
    /// yields a partial record.
    pub fn decode_line(
        &self,
        line: &[u8],
        line_number: LineNumber,
        encoding: &'static Encoding,
    ) -> ResultDecodeLine {
        if let Some(span) = self
            .layout
            .spans
            .iter()
            .find(|span| span.end > line.len())
        {
            return Err(DecodeError::RecordTruncated {
                line_number,
                field: span.name,
                needed: span.end,
                actual: line.len(),
            });
        }
        let mut fields: Vec<(&'static str, FieldValue)> = Vec::with_capacity(self.layout.spans.len());
        for span in self.layout.spans.iter() {
            fields.push((span.name, decode_span(span, line, encoding)));
        }

        Ok(DecodedRecord::new(fields))
    }
}

/// The warning for a file with skipped truncated lines, e.g.
/// `MZA240101.txt: 1 truncated line skipped, shorter than 14 bytes (lines 2)`.
///
/// `None` when no line was skipped.
pub fn truncated_lines_message(
    path: &FPath,
    summary: &SummaryRecordDecoder,
    line_length: usize,
) -> Option<String> {
    let count: Count = summary.recorddecoder_lines_truncated;
    if count == 0 {
        return None;
    }
    let first: Vec<String> = summary
        .recorddecoder_lines_truncated_first
        .iter()
        .map(|n| n.to_string())
        .collect();
    let more: &str = if (first.len() as Count) < count { ", …" } else { "" };

    Some(format!(
        "{}: {} truncated line{} skipped, shorter than {} bytes (lines {}{})",
        basename(path),
        count,
        if count == 1 { "" } else { "s" },
        line_length,
        first.join(", "),
        more,
    ))
}

fn table_charset_name(summary: &SummaryRecordDecoder) -> &'static str {
    match summary.recorddecoder_charset {
        Some(charset) => charset.name(),
        None => "unknown",
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// span decoding
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Decode `bytes` as text and trim. Malformed sequences become U+FFFD.
pub fn decode_trimmed(
    bytes: &[u8],
    encoding: &'static Encoding,
) -> String {
    let (text, _had_errors) = encoding.decode_without_bom_handling(bytes);

    String::from(trim_field(&text))
}

/// Map a trimmed hex digit field. `'a'..='f'` becomes `10..=15`; anything
/// else, including `'0'..='9'`, stays text.
pub fn hex_digit_to_decimal(value: String) -> FieldValue {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ 'a'..='f'), None) => FieldValue::Integer(10 + (c as i64 - 'a' as i64)),
        _ => FieldValue::Text(value),
    }
}

/// Decode one span of a line already known to be long enough.
///
/// A field is [`FieldValue::Missing`] if and only if its trimmed text is
/// empty. A repeated group is never missing; an all-space sub-entry is
/// the empty string.
pub fn decode_span(
    span: &ByteSpan,
    line: &[u8],
    encoding: &'static Encoding,
) -> FieldValue {
    let bytes: &[u8] = &line[span.start..span.end];
    match span.transform {
        FieldTransform::RepeatedGroup { width, count } => {
            let values: Vec<String> = bytes
                .chunks_exact(width)
                .take(count)
                .map(|sub| decode_trimmed(sub, encoding))
                .collect();
            FieldValue::Sequence(values)
        }
        FieldTransform::HexDigitToDecimal => {
            let value: String = decode_trimmed(bytes, encoding);
            if value.is_empty() {
                return FieldValue::Missing;
            }
            hex_digit_to_decimal(value)
        }
        FieldTransform::None => {
            let value: String = decode_trimmed(bytes, encoding);
            if value.is_empty() {
                return FieldValue::Missing;
            }
            FieldValue::Text(value)
        }
    }
}
