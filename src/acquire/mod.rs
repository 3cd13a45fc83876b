// src/acquire/mod.rs

//! Acquire raw record files: list the vendor's archives, download them,
//! unpack them, and move each extracted file into its bucket directory.
//!
//! Each step is a trait so the `fetch` pipeline in [`fetch_and_route`] can
//! run against local stand-ins.
//!
//! * [`Fetcher`], implemented by [`HttpFetcher`]
//! * [`Extractor`], implemented by [`LhaExtractor`]
//! * [`Router`], implemented by [`YearTypeRouter`]
//!
//! [`HttpFetcher`]: crate::acquire::fetcher::HttpFetcher
//! [`LhaExtractor`]: crate::acquire::extractor::LhaExtractor
//! [`YearTypeRouter`]: crate::acquire::router::YearTypeRouter

pub mod extractor;
pub mod fetcher;
pub mod router;

use crate::common::{Count, FPath};
#[allow(unused_imports)]
use crate::debug::printers::{de_err, de_wrn, e_err, e_wrn};
use crate::readers::helpers::path_to_fpath;

use std::io::Result;
use std::path::{Path, PathBuf};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// URL of one downloadable archive.
pub type Url = String;

/// Lists and downloads the vendor's archives.
pub trait Fetcher {
    /// URLs of every archive offered.
    fn list_archives(&self) -> Result<Vec<Url>>;
    /// Download `url` to a local file and return its path.
    fn download(&self, url: &Url) -> Result<PathBuf>;
}

/// Unpacks a downloaded archive.
pub trait Extractor {
    /// Extract `archive` and return the paths of the raw record files it held.
    fn unpack(&self, archive: &Path) -> Result<Vec<PathBuf>>;
    /// Remove whatever [`Extractor::unpack`] left behind for `archive`.
    /// Called only once every extracted file has been routed.
    fn discard(&self, archive: &Path) -> Result<()>;
}

/// Decides which bucket directory a raw record file belongs in.
pub trait Router {
    /// The bucket directory of `path`, from its file name alone.
    fn route(&self, path: &Path) -> Result<PathBuf>;
    /// Move `path` into its bucket directory and return the new path.
    fn relocate(&self, path: &Path) -> Result<PathBuf>;
}

/// Counts of one run of [`fetch_and_route`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SummaryFetch {
    pub fetch_archives_listed: Count,
    pub fetch_archives_downloaded: Count,
    pub fetch_archives_failed: Count,
    pub fetch_files_routed: Count,
    pub fetch_files_failed: Count,
    /// Where each routed file now lives, in routing order.
    pub fetch_routed: Vec<FPath>,
    /// Downloaded archives kept because unpacking or routing one of their
    /// files failed. Their extracted files are kept too.
    pub fetch_kept: Vec<FPath>,
}

/// Run the acquisition pipeline: list, download, unpack, route.
///
/// A failure of one archive or one file is printed and that item is
/// skipped. Only a failure to list archives is returned.
///
/// An archive whose files were all routed is deleted along with its
/// extracted leftovers. Any other downloaded archive is kept, with its
/// unrouted files, and listed in [`SummaryFetch::fetch_kept`].
pub fn fetch_and_route(
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
    router: &dyn Router,
) -> Result<SummaryFetch> {
    defn!();
    let mut summary = SummaryFetch::default();
    let urls: Vec<Url> = fetcher.list_archives()?;
    summary.fetch_archives_listed = urls.len() as Count;
    defo!("{} archives listed", urls.len());
    for url in urls.iter() {
        let archive: PathBuf = match fetcher.download(url) {
            Ok(archive) => archive,
            Err(err) => {
                e_err!("download {:?} failed: {}", url, err);
                summary.fetch_archives_failed += 1;
                continue;
            }
        };
        let files: Vec<PathBuf> = match extractor.unpack(&archive) {
            Ok(files) => files,
            Err(err) => {
                e_err!("unpack {:?} failed: {}", archive, err);
                summary.fetch_archives_failed += 1;
                summary.fetch_kept.push(path_to_fpath(&archive));
                continue;
            }
        };
        summary.fetch_archives_downloaded += 1;
        let mut all_routed: bool = true;
        for file in files.iter() {
            match router.relocate(file) {
                Ok(routed) => {
                    defo!("routed {:?} to {:?}", file, routed);
                    summary.fetch_files_routed += 1;
                    summary.fetch_routed.push(path_to_fpath(&routed));
                }
                Err(err) => {
                    e_wrn!("route {:?} failed: {}", file, err);
                    summary.fetch_files_failed += 1;
                    all_routed = false;
                }
            }
        }
        if !all_routed {
            summary.fetch_kept.push(path_to_fpath(&archive));
            continue;
        }
        if let Err(err) = extractor.discard(&archive) {
            e_wrn!("cannot remove what was extracted from {:?}: {}", archive, err);
        }
        if let Err(err) = std::fs::remove_file(&archive) {
            e_wrn!("cannot remove {:?}: {}", archive, err);
        }
    }
    defx!("{:?}", summary);

    Ok(summary)
}
