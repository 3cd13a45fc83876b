// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

//! Common type aliases, result enums, and the [`DecodeError`] taxonomy.

use std::fmt;
use std::io::Error;

use crate::data::layout::RecordTypeTag;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

// TODO: use `std::path::Path` for `FPath`
/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
/// File size in bytes
pub type FileSz = u64;
/// General purpose counting type
pub type Count = u64;
/// 1-based line number within a file
pub type LineNumber = usize;
/// Four digit issue year of a record file, e.g. `2024`
pub type Year = u16;

/// NewLine as `u8`
#[allow(non_upper_case_globals)]
pub const NLu8: u8 = b'\n';
/// Carriage Return as `u8`
#[allow(non_upper_case_globals)]
pub const CRu8: u8 = b'\r';

/// File name extension of raw record files.
pub const TXT_EXTENSION: &str = "txt";

/// `debug_panic!` panics in debug builds and prints an error in release
/// builds.
#[macro_export]
macro_rules! debug_panic {
    (
        $($args:tt)*
    ) => {
        {
            if cfg!(debug_assertions) {
                panic!($($args)*);
            } else {
                $crate::e_err!($($args)*);
            }
        }
    }
}
pub use debug_panic;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Failures of decoding.
///
/// Only `UnsupportedType` and `EmptyAggregation` make a whole bucket
/// meaningless. `Io` is contained to one file and `RecordTruncated` to one
/// line.
#[derive(Debug)]
pub enum DecodeError {
    /// The record type tag is not one of the statically known types.
    UnsupportedType(String),
    /// A layout in the catalog breaks its own invariants.
    InvalidLayout {
        record_type: RecordTypeTag,
        reason: String,
    },
    /// The file could not be read or written.
    Io(FPath, Error),
    /// A line is too short for a declared span.
    RecordTruncated {
        line_number: LineNumber,
        field: &'static str,
        needed: usize,
        actual: usize,
    },
    /// A bucket yielded zero decodable records.
    EmptyAggregation(String),
}

impl fmt::Display for DecodeError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            DecodeError::UnsupportedType(tag) => {
                write!(f, "unsupported record type {:?}", tag)
            }
            DecodeError::InvalidLayout { record_type, reason } => {
                write!(f, "invalid layout for record type {}: {}", record_type, reason)
            }
            DecodeError::Io(path, err) => write!(f, "{} for file {:?}", err, path),
            DecodeError::RecordTruncated { line_number, field, needed, actual } => {
                write!(
                    f,
                    "line {} truncated; field {:?} needs {} bytes, line has {}",
                    line_number, field, needed, actual,
                )
            }
            DecodeError::EmptyAggregation(bucket) => {
                write!(f, "no decodable records for bucket {}", bucket)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// custom Results enums
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Outcome of processing one file within a bucket.
#[derive(Debug)]
pub enum FileProcessingResult<E> {
    /// The file decoded; its table takes part in the aggregate.
    FileOk,
    /// The file has zero bytes.
    FileErrEmpty,
    /// No result arrived before the per-file timeout elapsed.
    FileErrTimeout,
    /// The worker thread ended without reporting a result.
    FileErrWorkerLost,
    /// Carries the `E` error data. This is how an error is carried between
    /// a decoding thread and the collecting thread.
    FileErrIo(E),
}

pub type FileProcessingResultError = FileProcessingResult<DecodeError>;

impl<E> FileProcessingResult<E> {
    /// Returns `true` if the result is [`FileOk`].
    ///
    /// [`FileOk`]: FileProcessingResult::FileOk
    #[inline(always)]
    pub const fn is_ok(&self) -> bool {
        matches!(*self, FileProcessingResult::FileOk)
    }

    /// Returns `true` if the result is any `FileErr*` variant.
    #[inline(always)]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }
}

impl<E> fmt::Display for FileProcessingResult<E>
where
    E: fmt::Display,
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            FileProcessingResult::FileOk => write!(f, "ok"),
            FileProcessingResult::FileErrEmpty => write!(f, "empty file"),
            FileProcessingResult::FileErrTimeout => write!(f, "timed out"),
            FileProcessingResult::FileErrWorkerLost => write!(f, "worker thread lost"),
            FileProcessingResult::FileErrIo(err) => write!(f, "{}", err),
        }
    }
}
