// src/tests/bucketprocessor_tests.rs

//! tests for `src/readers/bucketprocessor.rs`

#![allow(non_snake_case)]

use crate::common::{DecodeError, FPath, FileProcessingResult};
use crate::data::catalog::MZA_LAYOUT;
use crate::data::layout::RecordTypeTag;
use crate::data::record::DecodedTable;
use crate::debug::helpers::{create_file_bytes_in_tmpdir, create_temp_dir, join_fpath};
use crate::readers::bucketprocessor::{
    decode_file,
    BucketConfig,
    BucketDecoded,
    BucketProcessor,
    FileDecoded,
    FileOutcome,
    TIMEOUT_SECS_DEFAULT,
    WORKERS_DEFAULT,
};
use crate::readers::helpers::path_to_fpath;
use crate::readers::recorddecoder::RecordDecoder;
use crate::tests::common::{lines_to_bytes, mza_line};

use std::thread;
use std::time::Duration;

use ::more_asserts::assert_le;
use ::tempfile::TempDir;
use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const MZA_DECODER: RecordDecoder = RecordDecoder::new(&MZA_LAYOUT);

fn numbers_of(table: &DecodedTable) -> Vec<String> {
    table
        .records
        .iter()
        .map(|record| record.get("血統登録番号").map(|v| v.to_string()).unwrap_or_default())
        .collect()
}

#[test]
fn test_BucketConfig() {
    let config = BucketConfig::default();
    assert_eq!(config.workers, WORKERS_DEFAULT);
    assert_eq!(config.timeout, Some(Duration::from_secs(TIMEOUT_SECS_DEFAULT)));
    let config = BucketConfig::new(3, 0);
    assert_eq!(config.workers, 3);
    assert_eq!(config.timeout, None);
    let config = BucketConfig::new(1, 7);
    assert_eq!(config.timeout, Some(Duration::from_secs(7)));
}

#[test]
fn test_decode_files_none() {
    let processor = BucketProcessor::new(MZA_DECODER, BucketConfig::default());
    assert!(processor.decode_files(&[]).is_empty());
}

/// outcomes are in submission order whatever the worker count
#[test_case(1, 0)]
#[test_case(2, 0)]
#[test_case(4, 30)]
#[test_case(0, 30; "zero workers is one")]
#[test_case(64, 30; "more workers than files")]
fn test_decode_files_order(
    workers: usize,
    timeout_secs: u64,
) {
    let tmpdir = create_temp_dir();
    let mut paths: Vec<FPath> = Vec::new();
    for n in 0..12 {
        let number: String = format!("{:08}", 100 - n);
        let data: Vec<u8> = lines_to_bytes(&[mza_line(&number)]);
        let path = create_file_bytes_in_tmpdir(&data, &format!("MZA24{:04}.txt", n), &tmpdir);
        paths.push(path_to_fpath(&path));
    }
    let processor = BucketProcessor::new(MZA_DECODER, BucketConfig::new(workers, timeout_secs));
    let outcomes: Vec<FileOutcome> = processor.decode_files(&paths);
    assert_eq!(outcomes.len(), paths.len());
    for (n, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.path, paths[n]);
        assert!(outcome.result.is_ok(), "{}", outcome.result);
        let table: &DecodedTable = outcome.table.as_ref().unwrap();
        assert_eq!(numbers_of(table), vec![format!("{:08}", 100 - n)]);
        assert_eq!(outcome.summary.records(), 1);
        assert!(outcome.summary.error.is_none());
    }
}

#[test]
fn test_decode_files_missing_and_empty() {
    let tmpdir = create_temp_dir();
    let empty = create_file_bytes_in_tmpdir(b"", "MZA240101.txt", &tmpdir);
    let paths: Vec<FPath> = vec![
        path_to_fpath(&empty),
        join_fpath(tmpdir.path(), "MZA240102.txt"),
    ];
    let processor = BucketProcessor::new(MZA_DECODER, BucketConfig::new(2, 30));
    let outcomes: Vec<FileOutcome> = processor.decode_files(&paths);
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0].result, FileProcessingResult::FileErrEmpty));
    assert!(outcomes[0].table.is_none());
    assert!(outcomes[0].summary.error.is_some());
    assert!(matches!(outcomes[1].result, FileProcessingResult::FileErrIo(DecodeError::Io(_, _))));
    assert!(outcomes[1].table.is_none());
}

/// a failing file is excluded and the others aggregate in file name order
#[test]
fn test_process_bucket() {
    let tmpdir = create_temp_dir();
    create_file_bytes_in_tmpdir(
        &lines_to_bytes(&[mza_line("00000003"), mza_line("00000004")]),
        "MZA/2024/MZA240102.txt",
        &tmpdir,
    );
    create_file_bytes_in_tmpdir(
        &lines_to_bytes(&[mza_line("00000001"), b"short".to_vec(), mza_line("00000002")]),
        "MZA/2024/MZA240101.txt",
        &tmpdir,
    );
    create_file_bytes_in_tmpdir(b"", "MZA/2024/MZA240103.txt", &tmpdir);
    create_file_bytes_in_tmpdir(b"x", "MZA/2024/notes.csv", &tmpdir);
    let dir: FPath = join_fpath(tmpdir.path(), "MZA/2024");

    let processor = BucketProcessor::new(MZA_DECODER, BucketConfig::new(3, 30));
    assert_eq!(processor.decoder().record_type(), RecordTypeTag::MZA);
    let decoded: BucketDecoded = processor.process_bucket(&dir, 2024);
    let table: DecodedTable = decoded.table.unwrap();
    assert_eq!(numbers_of(&table), vec!["00000001", "00000002", "00000003", "00000004"]);
    assert_eq!(table.year, Some(2024));

    assert_eq!(decoded.outcomes.len(), 3);
    assert!(decoded.outcomes.iter().all(|outcome| outcome.table.is_none()));
    assert_eq!(decoded.outcomes[0].summary.lines_truncated(), 1);
    for outcome in decoded.outcomes.iter() {
        assert_le!(outcome.summary.records(), 2);
    }
    let summary = decoded.summary;
    assert_eq!(summary.bucket_record_type, Some(RecordTypeTag::MZA));
    assert_eq!(summary.bucket_year, 2024);
    assert_eq!(summary.bucket_files_ok, 2);
    assert_eq!(summary.bucket_files_failed, 1);
    assert_eq!(summary.bucket_files_timeout, 0);
    assert_eq!(summary.bucket_files_skipped, 1);
    assert_eq!(summary.bucket_rows, 4);
    assert_eq!(summary.bucket_error, None);
    // nothing written yet
    assert_eq!(summary.bucket_output, None);
}

#[test]
fn test_process_bucket_empty_aggregation() {
    let tmpdir = create_temp_dir();
    create_file_bytes_in_tmpdir(b"", "MZA/1999/MZA990101.txt", &tmpdir);
    create_file_bytes_in_tmpdir(b"short\n", "MZA/1999/MZA990102.txt", &tmpdir);
    let dir: FPath = join_fpath(tmpdir.path(), "MZA/1999");
    let processor = BucketProcessor::new(MZA_DECODER, BucketConfig::new(2, 30));
    let decoded: BucketDecoded = processor.process_bucket(&dir, 1999);
    match decoded.table {
        Err(DecodeError::EmptyAggregation(bucket)) => assert_eq!(bucket, "MZA/1999"),
        result => panic!("expected EmptyAggregation, got {:?}", result),
    }
    assert!(decoded.summary.bucket_error.is_some());
    assert!(!decoded.summary.is_ok());
    assert_eq!(decoded.summary.bucket_files_ok, 1);
    assert_eq!(decoded.summary.bucket_files_failed, 1);
}

#[test]
fn test_process_bucket_not_exist() {
    let tmpdir = create_temp_dir();
    let dir: FPath = join_fpath(tmpdir.path(), "MZA/2024");
    let processor = BucketProcessor::new(MZA_DECODER, BucketConfig::default());
    let decoded: BucketDecoded = processor.process_bucket(&dir, 2024);
    assert!(decoded.outcomes.is_empty());
    match decoded.table {
        Err(DecodeError::EmptyAggregation(bucket)) => assert_eq!(bucket, "MZA/2024"),
        result => panic!("expected EmptyAggregation, got {:?}", result),
    }
}

/// stalls on the second file of the bucket
fn decode_file_stall(
    decoder: &RecordDecoder,
    path: &FPath,
) -> FileDecoded {
    if path.ends_with("MZA240102.txt") {
        thread::sleep(Duration::from_secs(3));
    }
    decode_file(decoder, path)
}

/// dies on the second file of the bucket
fn decode_file_panic(
    decoder: &RecordDecoder,
    path: &FPath,
) -> FileDecoded {
    if path.ends_with("MZA240102.txt") {
        panic!("decoder thread lost on {:?}", path);
    }
    decode_file(decoder, path)
}

fn create_bucket_three(tmpdir: &TempDir) -> FPath {
    for (n, number) in ["00000001", "00000002", "00000003"].iter().enumerate() {
        create_file_bytes_in_tmpdir(
            &lines_to_bytes(&[mza_line(number)]),
            &format!("MZA/2024/MZA24010{}.txt", n + 1),
            tmpdir,
        );
    }

    join_fpath(tmpdir.path(), "MZA/2024")
}

#[test]
fn test_decode_file() {
    let tmpdir = create_temp_dir();
    let empty = create_file_bytes_in_tmpdir(b"", "MZA240101.txt", &tmpdir);
    let (result, table, summary) = decode_file(&MZA_DECODER, &path_to_fpath(&empty));
    assert!(matches!(result, FileProcessingResult::FileErrEmpty));
    assert!(table.is_none());
    assert!(summary.is_none());

    let data: Vec<u8> = lines_to_bytes(&[mza_line("00000007")]);
    let path = create_file_bytes_in_tmpdir(&data, "MZA240102.txt", &tmpdir);
    let (result, table, summary) = decode_file(&MZA_DECODER, &path_to_fpath(&path));
    assert!(matches!(result, FileProcessingResult::FileOk));
    assert_eq!(numbers_of(&table.unwrap()), vec!["00000007"]);
    assert!(summary.is_some());
}

/// a file still pending when the timeout passes is a timeout; the files
/// that finished are kept and aggregated
#[test]
fn test_process_bucket_timeout() {
    let tmpdir = create_temp_dir();
    let dir: FPath = create_bucket_three(&tmpdir);
    let processor =
        BucketProcessor::with_decode_file_fn(MZA_DECODER, BucketConfig::new(2, 1), decode_file_stall);
    let decoded: BucketDecoded = processor.process_bucket(&dir, 2024);

    assert_eq!(decoded.outcomes.len(), 3);
    assert!(matches!(decoded.outcomes[0].result, FileProcessingResult::FileOk));
    assert!(matches!(decoded.outcomes[1].result, FileProcessingResult::FileErrTimeout));
    assert!(decoded.outcomes[1].summary.error.is_some());
    assert!(matches!(decoded.outcomes[2].result, FileProcessingResult::FileOk));
    let summary = &decoded.summary;
    assert_eq!(summary.bucket_files_ok, 2);
    assert_eq!(summary.bucket_files_timeout, 1);
    assert_eq!(summary.bucket_files_failed, 0);
    assert_eq!(summary.bucket_rows, 2);
    let table: DecodedTable = decoded.table.unwrap();
    assert_eq!(numbers_of(&table), vec!["00000001", "00000003"]);
}

/// a worker that dies takes its pending files with it; files decoded before
/// it died are kept
#[test_case(0; "no timeout")]
#[test_case(30; "with timeout")]
fn test_process_bucket_worker_lost(timeout_secs: u64) {
    let tmpdir = create_temp_dir();
    let dir: FPath = create_bucket_three(&tmpdir);
    let processor = BucketProcessor::with_decode_file_fn(
        MZA_DECODER,
        BucketConfig::new(1, timeout_secs),
        decode_file_panic,
    );
    let decoded: BucketDecoded = processor.process_bucket(&dir, 2024);

    assert_eq!(decoded.outcomes.len(), 3);
    assert!(matches!(decoded.outcomes[0].result, FileProcessingResult::FileOk));
    assert!(matches!(decoded.outcomes[1].result, FileProcessingResult::FileErrWorkerLost));
    assert!(matches!(decoded.outcomes[2].result, FileProcessingResult::FileErrWorkerLost));
    let summary = &decoded.summary;
    assert_eq!(summary.bucket_files_ok, 1);
    assert_eq!(summary.bucket_files_failed, 2);
    assert_eq!(summary.bucket_files_timeout, 0);
    assert_eq!(numbers_of(&decoded.table.unwrap()), vec!["00000001"]);
}
