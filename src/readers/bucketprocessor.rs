// src/readers/bucketprocessor.rs

//! Implements a [`BucketProcessor`], which decodes every file of one
//! `(record type, year)` bucket on a bounded pool of worker threads and
//! aggregates the per-file tables.

use crate::common::{
    Count,
    DecodeError,
    FPath,
    FileProcessingResult,
    FileProcessingResultError,
    Year,
};
use crate::data::record::DecodedTable;
#[allow(unused_imports)]
use crate::debug::printers::{de_err, de_wrn, e_err, e_wrn};
use crate::readers::aggregator::aggregate;
use crate::readers::filepreprocessor::{
    process_bucket_path,
    ProcessPathResult,
    ProcessPathResults,
};
use crate::readers::helpers::{
    basename,
    fpath_to_path,
    path_filesz,
};
use crate::readers::recorddecoder::{
    RecordDecoder,
    SummaryRecordDecoder,
};
use crate::readers::summary::{
    Summary,
    SummaryBucket,
};

use std::thread;
use std::time::Duration;

use ::crossbeam_channel::{self, RecvTimeoutError};
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

/// Default count of worker threads per bucket.
pub const WORKERS_DEFAULT: usize = 10;

/// Default seconds to wait for the next file result.
pub const TIMEOUT_SECS_DEFAULT: u64 = 300;

/// Index of a file in submission order.
pub type PathId = usize;

/// Work sent to a decoder thread.
type ChanJob = (PathId, FPath);
type ChanSendJob = crossbeam_channel::Sender<ChanJob>;
type ChanRecvJob = crossbeam_channel::Receiver<ChanJob>;

/// What decoding one file produced.
pub type FileDecoded = (FileProcessingResultError, Option<DecodedTable>, Option<SummaryRecordDecoder>);

/// The work done for one file on a worker thread.
pub type DecodeFileFn = fn(&RecordDecoder, &FPath) -> FileDecoded;

/// Result sent back from a decoder thread.
type ChanDatum = (PathId, FileDecoded);
type ChanSendDatum = crossbeam_channel::Sender<ChanDatum>;
type ChanRecvDatum = crossbeam_channel::Receiver<ChanDatum>;

/// Tunables of a [`BucketProcessor`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BucketConfig {
    /// Worker thread count; `0` is treated as `1`.
    pub workers: usize,
    /// How long to wait for the next file result. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for BucketConfig {
    fn default() -> Self {
        BucketConfig {
            workers: WORKERS_DEFAULT,
            timeout: Some(Duration::from_secs(TIMEOUT_SECS_DEFAULT)),
        }
    }
}

impl BucketConfig {
    /// `timeout_secs` of `0` disables the timeout.
    pub fn new(
        workers: usize,
        timeout_secs: u64,
    ) -> BucketConfig {
        BucketConfig {
            workers,
            timeout: match timeout_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        }
    }
}

/// What became of one submitted file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: FPath,
    pub result: FileProcessingResultError,
    /// The decoded table, present only for [`FileProcessingResult::FileOk`].
    /// Taken by the aggregation in [`BucketProcessor::process_bucket`].
    pub table: Option<DecodedTable>,
    pub summary: Summary,
}

/// Everything [`BucketProcessor::process_bucket`] learned about a bucket.
#[derive(Debug)]
pub struct BucketDecoded {
    /// The aggregated table, or why there is none.
    pub table: Result<DecodedTable, DecodeError>,
    /// One entry per record file, in file name order.
    pub outcomes: Vec<FileOutcome>,
    pub summary: SummaryBucket,
}

/// Decode the files of a bucket in parallel.
///
/// ## Summary of operation
///
/// Each file is one job on a shared job channel. At most
/// [`BucketConfig::workers`] named threads take jobs and send one result
/// per file back on a result channel. The calling thread collects results
/// until every file has reported, the per-file timeout elapses with
/// nothing received, or every worker has gone.
///
/// Results are put back into submission order, so aggregation order never
/// depends on which worker finished first.
///
/// A file that fails is excluded from the aggregate; the other files are
/// unaffected.
#[derive(Clone, Copy, Debug)]
pub struct BucketProcessor {
    decoder: RecordDecoder,
    config: BucketConfig,
    decode_file_fn: DecodeFileFn,
}

/// Decode the file at `path`. A zero-byte file is
/// [`FileProcessingResult::FileErrEmpty`].
pub fn decode_file(
    decoder: &RecordDecoder,
    path: &FPath,
) -> FileDecoded {
    if path_filesz(fpath_to_path(path)) == Some(0) {
        return (FileProcessingResult::FileErrEmpty, None, None);
    }
    let (result, summary) = decoder.decode_with_summary(path);
    match result {
        Ok(table) => (FileProcessingResult::FileOk, Some(table), Some(summary)),
        Err(err) => (FileProcessingResult::FileErrIo(err), None, Some(summary)),
    }
}

/// Decode jobs from `recv_job` until it is empty and disconnected.
fn exec_decoder_thread(
    decoder: RecordDecoder,
    decode_file_fn: DecodeFileFn,
    recv_job: ChanRecvJob,
    send_datum: ChanSendDatum,
) {
    defn!("{:?}", thread::current().name());
    for (pathid, path) in recv_job.iter() {
        defo!("pathid {} {:?}", pathid, path);
        let datum: ChanDatum = (pathid, decode_file_fn(&decoder, &path));
        if send_datum.send(datum).is_err() {
            // the collector gave up, e.g. timed out
            defx!("send failed; collector gone");
            return;
        }
    }
    defx!();
}

impl BucketProcessor {
    pub fn new(
        decoder: RecordDecoder,
        config: BucketConfig,
    ) -> BucketProcessor {
        BucketProcessor::with_decode_file_fn(decoder, config, decode_file)
    }

    /// A processor that runs `decode_file_fn` for each file instead of
    /// [`decode_file`].
    pub fn with_decode_file_fn(
        decoder: RecordDecoder,
        config: BucketConfig,
        decode_file_fn: DecodeFileFn,
    ) -> BucketProcessor {
        BucketProcessor {
            decoder,
            config,
            decode_file_fn,
        }
    }

    pub const fn decoder(&self) -> &RecordDecoder {
        &self.decoder
    }

    /// Decode `paths` on the worker pool. The returned outcomes are in the
    /// order of `paths`.
    pub fn decode_files(
        &self,
        paths: &[FPath],
    ) -> Vec<FileOutcome> {
        defn!("({} paths)", paths.len());
        let count: usize = paths.len();
        if count == 0 {
            defx!("no paths");
            return Vec::new();
        }
        let (send_job, recv_job): (ChanSendJob, ChanRecvJob) = crossbeam_channel::unbounded();
        let (send_datum, recv_datum): (ChanSendDatum, ChanRecvDatum) = crossbeam_channel::unbounded();
        for (pathid, path) in paths.iter().enumerate() {
            // the receiver is held here so this cannot fail
            let _ = send_job.send((pathid, path.clone()));
        }
        drop(send_job);

        let workers: usize = self.config.workers.clamp(1, count);
        let mut joinhandles: Vec<thread::JoinHandle<()>> = Vec::with_capacity(workers);
        for worker in 0..workers {
            let recv_job_ = recv_job.clone();
            let send_datum_ = send_datum.clone();
            let decoder: RecordDecoder = self.decoder;
            let decode_file_fn: DecodeFileFn = self.decode_file_fn;
            let name: String = format!("jrdb-{}-{}", decoder.record_type(), worker);
            match thread::Builder::new()
                .name(name.clone())
                .spawn(move || exec_decoder_thread(decoder, decode_file_fn, recv_job_, send_datum_))
            {
                Ok(joinhandle) => joinhandles.push(joinhandle),
                Err(err) => {
                    e_err!("thread.name({:?}).spawn() failed {:?}", name, err);
                }
            }
        }
        drop(recv_job);
        // only workers hold senders now; when all are gone the channel
        // disconnects
        drop(send_datum);
        defo!("{} workers started", joinhandles.len());

        let mut received: Vec<Option<ChanDatum>> = (0..count).map(|_| None).collect();
        let mut pending: usize = count;
        let mut timed_out: bool = false;
        while pending > 0 {
            let datum: Result<ChanDatum, RecvTimeoutError> = match self.config.timeout {
                Some(timeout) => recv_datum.recv_timeout(timeout),
                None => recv_datum
                    .recv()
                    .map_err(|_| RecvTimeoutError::Disconnected),
            };
            match datum {
                Ok(datum) => {
                    defo!("received pathid {}", datum.0);
                    let pathid: PathId = datum.0;
                    if received[pathid].is_none() {
                        pending -= 1;
                    }
                    received[pathid] = Some(datum);
                }
                Err(RecvTimeoutError::Timeout) => {
                    defo!("timeout with {} pending", pending);
                    timed_out = true;
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    defo!("disconnected with {} pending", pending);
                    break;
                }
            }
        }
        drop(recv_datum);

        if !timed_out {
            for joinhandle in joinhandles.into_iter() {
                let name: Option<String> = joinhandle
                    .thread()
                    .name()
                    .map(String::from);
                if let Err(err) = joinhandle.join() {
                    e_err!("thread {:?} panicked {:?}", name, err);
                }
            }
        }
        // on timeout the stuck workers are left detached

        let mut outcomes: Vec<FileOutcome> = Vec::with_capacity(count);
        for (pathid, datum) in received.into_iter().enumerate() {
            let path: FPath = paths[pathid].clone();
            let outcome: FileOutcome = match datum {
                Some((_, (result, table, readerdata))) => {
                    let error: Option<String> = match result {
                        FileProcessingResult::FileOk => None,
                        ref result => Some(result.to_string()),
                    };
                    FileOutcome {
                        summary: Summary::new(path.clone(), readerdata, error),
                        path,
                        result,
                        table,
                    }
                }
                None => {
                    let result: FileProcessingResultError = if timed_out {
                        FileProcessingResult::FileErrTimeout
                    } else {
                        FileProcessingResult::FileErrWorkerLost
                    };
                    FileOutcome {
                        summary: Summary::new(path.clone(), None, Some(result.to_string())),
                        path,
                        result,
                        table: None,
                    }
                }
            };
            outcomes.push(outcome);
        }
        defx!("{} outcomes", outcomes.len());

        outcomes
    }

    /// Decode and aggregate every record file in `bucket_dir`, the bucket
    /// of `year`.
    ///
    /// Files that fail are printed as errors and excluded. The aggregate is
    /// [`DecodeError::EmptyAggregation`] when no file yields a record.
    pub fn process_bucket(
        &self,
        bucket_dir: &FPath,
        year: Year,
    ) -> BucketDecoded {
        defn!("({:?}, {})", bucket_dir, year);
        let mut summary = SummaryBucket::new(self.decoder.record_type(), year);
        let processed: ProcessPathResults = process_bucket_path(bucket_dir);
        let mut paths: Vec<FPath> = Vec::with_capacity(processed.len());
        for result in processed.into_iter() {
            match result {
                ProcessPathResult::FileValid(path) => paths.push(path),
                ProcessPathResult::FileErrNotExist(path) => {
                    e_err!("bucket directory {:?} does not exist", path);
                }
                ProcessPathResult::FileErrNotAFile(_path)
                | ProcessPathResult::FileErrNotSupported(_path) => {
                    defo!("skip {:?}", _path);
                    summary.bucket_files_skipped += 1;
                }
            }
        }

        let mut outcomes: Vec<FileOutcome> = self.decode_files(&paths);
        let mut tables: Vec<DecodedTable> = Vec::with_capacity(outcomes.len());
        for outcome in outcomes.iter_mut() {
            match outcome.result {
                FileProcessingResult::FileOk => summary.bucket_files_ok += 1,
                FileProcessingResult::FileErrTimeout => summary.bucket_files_timeout += 1,
                _ => summary.bucket_files_failed += 1,
            }
            if outcome.result.is_err() {
                e_err!("{}: {}", basename(&outcome.path), outcome.result);
            }
            if let Some(table) = outcome.table.take() {
                tables.push(table);
            }
        }

        let table: Result<DecodedTable, DecodeError> =
            aggregate(self.decoder.record_type(), tables, Some(year));
        match table {
            Ok(ref table_) => summary.bucket_rows = table_.len() as Count,
            Err(ref err) => summary.bucket_error = Some(err.to_string()),
        }
        defx!("rows {}, error {:?}", summary.bucket_rows, summary.bucket_error);

        BucketDecoded {
            table,
            outcomes,
            summary,
        }
    }
}
