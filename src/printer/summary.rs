// src/printer/summary.rs

//! Print the `--summary` report of decoded files and buckets to stderr.

use crate::printer::printers::{
    print_colored_stderr,
    write_stderr,
    Color,
    ColorChoice,
    COLOR_ERROR,
    COLOR_OK,
    COLOR_WARNING,
};
use crate::readers::bucketprocessor::FileOutcome;
use crate::readers::charset::CharsetResolution;
use crate::readers::recorddecoder::SummaryRecordDecoder;
use crate::readers::summary::{Summary, SummaryBucket};

use ::si_trace_print::defñ;

const INDENT1: &str = "  ";
const INDENT2: &str = "      ";

/// Print `value` in `color`, falling back to plain printing.
fn print_colored_or_plain(
    color: Color,
    color_choice: ColorChoice,
    value: &str,
) {
    if print_colored_stderr(color, Some(color_choice), value.as_bytes()).is_err() {
        write_stderr(value.as_bytes());
    }
}

/// The per-file lines of a `--summary` report, without color.
pub fn summary_file_lines(summary: &Summary) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("{}File: {}", INDENT1, summary.path));
    match summary.readerdata {
        Some(ref s) => lines.extend(summary_recorddecoder_lines(s)),
        None => lines.push(format!("{}not decoded", INDENT2)),
    }
    lines
}

fn summary_recorddecoder_lines(s: &SummaryRecordDecoder) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if let Some(record_type) = s.recorddecoder_record_type {
        lines.push(format!("{}record type   : {}", INDENT2, record_type));
    }
    match s.recorddecoder_charset {
        Some(charset) => lines.push(format!(
            "{}charset       : {} ({})",
            INDENT2, charset, s.recorddecoder_charset_resolution
        )),
        None => lines.push(format!("{}charset       : unresolved", INDENT2)),
    }
    if let Some(rejected) = s.recorddecoder_charset_rejected {
        lines.push(format!("{}charset guess : {} (rejected)", INDENT2, rejected));
    }
    lines.push(format!("{}bytes         : {}", INDENT2, s.recorddecoder_bytes));
    lines.push(format!("{}lines         : {}", INDENT2, s.recorddecoder_lines));
    lines.push(format!("{}records       : {}", INDENT2, s.recorddecoder_records));
    if s.recorddecoder_lines_truncated > 0 {
        let first: Vec<String> = s
            .recorddecoder_lines_truncated_first
            .iter()
            .map(|n| n.to_string())
            .collect();
        lines.push(format!(
            "{}truncated     : {} (lines {}{})",
            INDENT2,
            s.recorddecoder_lines_truncated,
            first.join(", "),
            if (first.len() as u64) < s.recorddecoder_lines_truncated { ", …" } else { "" },
        ));
    } else {
        lines.push(format!("{}truncated     : 0", INDENT2));
    }
    lines.push(format!("{}overlong lines: {}", INDENT2, s.recorddecoder_lines_overlong));
    lines
}

/// Print the `--summary` of one file.
pub fn print_summary_file(
    summary: &Summary,
    color_choice: ColorChoice,
) {
    defñ!("({:?})", summary.path);
    let mut text: String = summary_file_lines(summary).join("\n");
    text.push('\n');
    let warn: bool = summary.lines_truncated() > 0
        || matches!(
            summary.readerdata,
            Some(SummaryRecordDecoder {
                recorddecoder_charset_resolution: CharsetResolution::Fallback,
                ..
            })
        );
    if warn {
        print_colored_or_plain(COLOR_WARNING, color_choice, &text);
    } else {
        write_stderr(text.as_bytes());
    }
    if let Some(ref error) = summary.error {
        print_colored_or_plain(COLOR_ERROR, color_choice, &format!("{}error         : {}\n", INDENT2, error));
    }
}

/// The per-bucket lines of a `--summary` report, without color.
pub fn summary_bucket_lines(summary: &SummaryBucket) -> Vec<String> {
    let tag: String = match summary.bucket_record_type {
        Some(record_type) => record_type.to_string(),
        None => String::from("?"),
    };
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("Bucket: {}/{}", tag, summary.bucket_year));
    lines.push(format!("{}files ok      : {}", INDENT1, summary.bucket_files_ok));
    lines.push(format!("{}files failed  : {}", INDENT1, summary.bucket_files_failed));
    lines.push(format!("{}files timeout : {}", INDENT1, summary.bucket_files_timeout));
    lines.push(format!("{}files skipped : {}", INDENT1, summary.bucket_files_skipped));
    lines.push(format!("{}rows written  : {}", INDENT1, summary.bucket_rows));
    match summary.bucket_output {
        Some(ref path) => lines.push(format!("{}output        : {}", INDENT1, path)),
        None => lines.push(format!("{}output        : none", INDENT1)),
    }
    lines
}

/// Print the `--summary` of one bucket and each of its files.
pub fn print_summary_bucket(
    summary: &SummaryBucket,
    outcomes: &[FileOutcome],
    color_choice: ColorChoice,
) {
    defñ!("({:?}, {})", summary.bucket_record_type, summary.bucket_year);
    let mut text: String = summary_bucket_lines(summary).join("\n");
    text.push('\n');
    if summary.is_ok() {
        print_colored_or_plain(COLOR_OK, color_choice, &text);
    } else {
        write_stderr(text.as_bytes());
    }
    if let Some(ref error) = summary.bucket_error {
        print_colored_or_plain(COLOR_ERROR, color_choice, &format!("{}error         : {}\n", INDENT1, error));
    }
    for outcome in outcomes.iter() {
        print_summary_file(&outcome.summary, color_choice);
    }
}
