// src/bin/jrdb.rs

//! Driver program _jrdb_.
//!
//! * `jrdb decode` decodes every `(record type, year)` bucket of one type
//!   under an input root and writes one CSV file per bucket.
//! * `jrdb fetch` downloads, unpacks and routes the vendor's archives.
//! * `jrdb route` prints the bucket directory of raw file names.

#![allow(non_camel_case_types)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ::anyhow::{bail, Context};
use ::clap::{Parser, Subcommand, ValueEnum};
use ::const_format::concatcp;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use ::jrdblib::acquire::extractor::LhaExtractor;
use ::jrdblib::acquire::fetcher::{
    Credentials,
    HttpFetcher,
    BASE_URL_DEFAULT,
    ENV_BASE_URL,
    MEMBER_PAGE_DEFAULT,
};
use ::jrdblib::acquire::router::YearTypeRouter;
use ::jrdblib::acquire::{fetch_and_route, Router, SummaryFetch};
use ::jrdblib::common::{FPath, Year};
use ::jrdblib::debug::printers::{e_err, e_wrn};
use ::jrdblib::printer::csvwriter::write_table;
use ::jrdblib::printer::printers::{write_stdout, ColorChoice};
use ::jrdblib::printer::summary::print_summary_bucket;
use ::jrdblib::readers::bucketprocessor::{
    BucketConfig,
    BucketDecoded,
    BucketProcessor,
    TIMEOUT_SECS_DEFAULT,
    WORKERS_DEFAULT,
};
use ::jrdblib::readers::filepreprocessor::{bucket_dir, bucket_years};
use ::jrdblib::readers::helpers::path_to_fpath;
use ::jrdblib::readers::recorddecoder::RecordDecoder;
use ::jrdblib::readers::registry::SchemaRegistry;

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

impl CLI_Color_Choice {
    const fn to_color_choice(self) -> ColorChoice {
        match self {
            CLI_Color_Choice::always => ColorChoice::Always,
            CLI_Color_Choice::auto => ColorChoice::Auto,
            CLI_Color_Choice::never => ColorChoice::Never,
        }
    }
}

/// `--help` _afterword_ message.
const CLI_HELP_AFTER: &str = "\
Raw record files live in bucket directories <ROOT>/<TAG>/<YEAR>/, e.g.
data/KYI/2024/KYI240106.txt. `jrdb fetch` and `jrdb route` lay files out
that way; `jrdb decode` reads them back.

The decoded table of each bucket is written to <OUTPUT_DIR>/<TAG>_<YEAR>.csv.

`jrdb fetch` reads the member credentials from the environment variables
JRDB_USER and JRDB_PASSWORD and needs the program `lha` to unpack archives.";

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "jrdb",
    // write expanded information for the `--version` output
    version = concatcp!(
        "\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    #[clap(subcommand)]
    command: CLI_Command,
}

#[derive(Subcommand, Debug)]
enum CLI_Command {
    /// Decode the raw files of one record type into one CSV file per year.
    #[clap(verbatim_doc_comment)]
    Decode {
        /// Record type tag, e.g. "KYI" or "oz".
        #[clap(verbatim_doc_comment)]
        tag: String,

        /// Root of the bucket directories, holding <TAG>/<YEAR>/.
        #[clap(verbatim_doc_comment)]
        input_root: PathBuf,

        /// Directory the CSV files are written to. Created if missing.
        #[clap(verbatim_doc_comment)]
        output_dir: PathBuf,

        /// Decode only this year. May be passed more than once.
        /// If not passed then every year directory under <INPUT_ROOT>/<TAG>/
        /// is decoded.
        #[clap(
            short = 'y',
            long = "year",
            verbatim_doc_comment,
        )]
        years: Vec<Year>,

        /// Count of worker threads decoding the files of one year.
        #[clap(
            short = 'w',
            long,
            verbatim_doc_comment,
            env = "JRDB_WORKERS",
            default_value_t = WORKERS_DEFAULT,
        )]
        workers: usize,

        /// Seconds to wait for the next decoded file before giving up on
        /// the files still pending. 0 waits forever.
        #[clap(
            long,
            verbatim_doc_comment,
            env = "JRDB_TIMEOUT",
            default_value_t = TIMEOUT_SECS_DEFAULT,
        )]
        timeout: u64,

        /// Print a summary of files and buckets processed to stderr.
        #[clap(
            short,
            long,
            verbatim_doc_comment,
        )]
        summary: bool,

        /// Choose to print to terminal using colors.
        #[clap(
            required = false,
            short = 'c',
            long = "color",
            verbatim_doc_comment,
            value_enum,
            default_value_t = CLI_Color_Choice::auto,
        )]
        color_choice: CLI_Color_Choice,
    },

    /// Download the archives of one record type, unpack them, and move each
    /// raw file into <DOWNLOAD_ROOT>/<TAG>/<YEAR>/.
    #[clap(verbatim_doc_comment)]
    Fetch {
        /// Record type tag, e.g. "KYI".
        #[clap(verbatim_doc_comment)]
        tag: String,

        /// Root of the bucket directories.
        #[clap(verbatim_doc_comment)]
        download_root: PathBuf,

        /// Scratch directory for downloaded and unpacked archives.
        #[clap(
            long,
            verbatim_doc_comment,
            default_value = "tmp",
        )]
        tmp: PathBuf,

        /// Member data URL, holding one directory per record type.
        #[clap(
            long,
            verbatim_doc_comment,
            env = ENV_BASE_URL,
            default_value = BASE_URL_DEFAULT,
        )]
        base_url: String,

        /// Page listing the archives, relative to the record type's URL.
        #[clap(
            long,
            verbatim_doc_comment,
            default_value = MEMBER_PAGE_DEFAULT,
        )]
        member_page: String,
    },

    /// Print the bucket directory of each raw record file name.
    #[clap(verbatim_doc_comment)]
    Route {
        /// Raw record file paths, e.g. "KYI240106.txt".
        #[clap(
            required = true,
            verbatim_doc_comment,
        )]
        files: Vec<PathBuf>,

        /// Root of the bucket directories.
        #[clap(
            long,
            verbatim_doc_comment,
            default_value = ".",
        )]
        root: PathBuf,

        /// Also move each file into its bucket directory.
        #[clap(
            long = "move",
            verbatim_doc_comment,
        )]
        relocate: bool,
    },
}

/// Decode every requested bucket of `tag`. Returns `true` if every bucket
/// produced an output file.
fn run_decode(
    tag: &str,
    input_root: &Path,
    output_dir: &Path,
    years: Vec<Year>,
    config: BucketConfig,
    summary: bool,
    color_choice: ColorChoice,
) -> anyhow::Result<bool> {
    defn!("({:?}, {:?}, {:?}, {:?})", tag, input_root, output_dir, years);
    let registry = SchemaRegistry::new().context("record layout catalog is invalid")?;
    let decoder: RecordDecoder = registry.resolve(tag)?;
    let tag_dir: &str = decoder.record_type().as_str();
    let years: Vec<Year> = if years.is_empty() {
        bucket_years(input_root, tag_dir)
            .with_context(|| format!("cannot list year directories of {:?}", input_root.join(tag_dir)))?
    } else {
        years
    };
    if years.is_empty() {
        bail!("no year directories under {:?}", input_root.join(tag_dir));
    }

    let processor = BucketProcessor::new(decoder, config);
    let mut all_ok: bool = true;
    for year in years.into_iter() {
        let dir: FPath = path_to_fpath(&bucket_dir(input_root, tag_dir, year));
        let mut decoded: BucketDecoded = processor.process_bucket(&dir, year);
        match decoded.table {
            Ok(ref table) => match write_table(table, decoder.layout(), output_dir) {
                Ok((fpath, rows)) => {
                    defo!("wrote {} rows to {:?}", rows, fpath);
                    decoded.summary.bucket_rows = rows;
                    decoded.summary.bucket_output = Some(fpath);
                }
                Err(err) => {
                    e_err!("{}/{}: writing output to {:?} failed: {}", tag_dir, year, output_dir, err);
                    decoded.summary.bucket_error = Some(err.to_string());
                    all_ok = false;
                }
            },
            Err(ref err) => {
                e_err!("{}/{}: {}", tag_dir, year, err);
                all_ok = false;
            }
        }
        if summary {
            print_summary_bucket(&decoded.summary, &decoded.outcomes, color_choice);
        }
    }
    defx!("return {}", all_ok);

    Ok(all_ok)
}

/// Run the acquisition pipeline for `tag`. Returns `true` if every listed
/// archive and every extracted file was handled.
fn run_fetch(
    tag: &str,
    download_root: PathBuf,
    tmp: PathBuf,
    base_url: &str,
    member_page: String,
) -> anyhow::Result<bool> {
    defn!("({:?}, {:?}, {:?}, {:?})", tag, download_root, tmp, base_url);
    let registry = SchemaRegistry::new().context("record layout catalog is invalid")?;
    let record_type = registry.resolve(tag)?.record_type();
    let credentials: Credentials = Credentials::from_env()?;
    let fetcher = HttpFetcher::for_record_type(
        record_type,
        base_url,
        member_page,
        credentials,
        tmp.clone(),
    );
    let extractor = LhaExtractor::new(tmp.clone());
    let router = YearTypeRouter::new(download_root);
    let summary: SummaryFetch = fetch_and_route(&fetcher, &extractor, &router)
        .with_context(|| format!("cannot list archives of {} at {}", record_type, fetcher.page_url()))?;
    if summary.fetch_kept.is_empty() {
        // fails unless empty
        if let Err(_err) = std::fs::remove_dir(&tmp) {
            defo!("keep {:?}: {}", tmp, _err);
        }
    } else {
        e_wrn!(
            "{} archive(s) and their unrouted files kept under {:?}",
            summary.fetch_kept.len(),
            tmp,
        );
        for kept in summary.fetch_kept.iter() {
            e_wrn!("  kept {}", kept);
        }
    }
    eprintln!(
        "archives listed {}, downloaded {}, failed {}; files routed {}, failed {}",
        summary.fetch_archives_listed,
        summary.fetch_archives_downloaded,
        summary.fetch_archives_failed,
        summary.fetch_files_routed,
        summary.fetch_files_failed,
    );
    defx!();

    Ok(summary.fetch_archives_failed == 0 && summary.fetch_files_failed == 0)
}

/// Print (and optionally move) each file's bucket directory.
fn run_route(
    files: &[PathBuf],
    root: PathBuf,
    relocate: bool,
) -> anyhow::Result<bool> {
    defn!("({} files, {:?}, {})", files.len(), root, relocate);
    let router = YearTypeRouter::new(root);
    let mut all_ok: bool = true;
    for file in files.iter() {
        let routed = if relocate {
            router.relocate(file)
        } else {
            router.route(file)
        };
        match routed {
            Ok(path) => {
                let line: String = format!("{}\t{}\n", file.to_string_lossy(), path.to_string_lossy());
                write_stdout(line.as_bytes());
            }
            Err(err) => {
                e_err!("{}", err);
                all_ok = false;
            }
        }
    }
    defx!("return {}", all_ok);

    Ok(all_ok)
}

pub fn main() -> ExitCode {
    defn!();
    let args: CLI_Args = CLI_Args::parse();
    defo!("{:?}", args);

    let result: anyhow::Result<bool> = match args.command {
        CLI_Command::Decode {
            tag,
            input_root,
            output_dir,
            years,
            workers,
            timeout,
            summary,
            color_choice,
        } => run_decode(
            &tag,
            &input_root,
            &output_dir,
            years,
            BucketConfig::new(workers, timeout),
            summary,
            color_choice.to_color_choice(),
        ),
        CLI_Command::Fetch {
            tag,
            download_root,
            tmp,
            base_url,
            member_page,
        } => run_fetch(&tag, download_root, tmp, &base_url, member_page),
        CLI_Command::Route {
            files,
            root,
            relocate,
        } => run_route(&files, root, relocate),
    };

    let exitcode: ExitCode = match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            e_err!("{:#}", err);
            ExitCode::FAILURE
        }
    };
    defx!("{:?}", exitcode);

    exitcode
}
