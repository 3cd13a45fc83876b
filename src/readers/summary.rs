// src/readers/summary.rs

//! Implements the `Summary` statistics tracking structs for one file and
//! for one bucket.

#![allow(non_snake_case)]

use crate::common::{
    Count,
    FPath,
    Year,
};
use crate::data::layout::RecordTypeTag;
use crate::readers::recorddecoder::SummaryRecordDecoder;

#[allow(unused_imports)]
use ::more_asserts::{debug_assert_ge, debug_assert_le};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Summary
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Accumulated statistics about decoding a single file.
///
/// For CLI option `--summary`.
#[derive(Clone, Debug, Default)]
pub struct Summary {
    /// the `FPath` of the processed file
    pub path: FPath,
    /// `None` when the file never reached a decoder, e.g. it timed out.
    pub readerdata: Option<SummaryRecordDecoder>,
    /// The error that excluded this file from its bucket, if any, as a
    /// `String`.
    ///
    /// Annoyingly, cannot [Clone or Copy `Error`].
    ///
    /// [Clone or Copy `Error`]: https://github.com/rust-lang/rust/issues/24135
    pub error: Option<String>,
}

impl Summary {
    pub fn new(
        path: FPath,
        readerdata: Option<SummaryRecordDecoder>,
        error: Option<String>,
    ) -> Summary {
        if let Some(ref s) = readerdata {
            debug_assert_le!(
                s.recorddecoder_records + s.recorddecoder_lines_truncated,
                s.recorddecoder_lines,
                "more records and truncated lines than lines for {:?}",
                path,
            );
        }
        Summary {
            path,
            readerdata,
            error,
        }
    }

    pub fn records(&self) -> Count {
        match self.readerdata {
            Some(ref s) => s.recorddecoder_records,
            None => 0,
        }
    }

    pub fn lines_truncated(&self) -> Count {
        match self.readerdata {
            Some(ref s) => s.recorddecoder_lines_truncated,
            None => 0,
        }
    }
}

pub type Summaries = Vec<Summary>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SummaryBucket
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Accumulated statistics about one `(record type, year)` bucket.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SummaryBucket {
    pub bucket_record_type: Option<RecordTypeTag>,
    pub bucket_year: Year,
    pub bucket_files_ok: Count,
    pub bucket_files_failed: Count,
    pub bucket_files_timeout: Count,
    /// Entries of the bucket directory that are not record files.
    pub bucket_files_skipped: Count,
    pub bucket_rows: Count,
    /// The written table, if one was written.
    pub bucket_output: Option<FPath>,
    /// The error that left the bucket without output, if any.
    pub bucket_error: Option<String>,
}

impl SummaryBucket {
    pub fn new(
        record_type: RecordTypeTag,
        year: Year,
    ) -> SummaryBucket {
        SummaryBucket {
            bucket_record_type: Some(record_type),
            bucket_year: year,
            ..Default::default()
        }
    }

    /// `true` if the bucket produced its output table.
    pub fn is_ok(&self) -> bool {
        self.bucket_error.is_none() && self.bucket_output.is_some()
    }
}
