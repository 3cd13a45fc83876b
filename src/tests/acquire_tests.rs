// src/tests/acquire_tests.rs

//! tests for `src/acquire/mod.rs`

#![allow(non_snake_case)]

use crate::acquire::router::YearTypeRouter;
use crate::acquire::{fetch_and_route, Extractor, Fetcher, SummaryFetch, Url};
use crate::debug::helpers::{create_file_bytes_in_tmpdir, create_temp_dir};
use crate::readers::helpers::path_to_fpath;

use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};

use ::tempfile::TempDir;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Serves archives already in a directory; a URL ending in `missing.lzh`
/// fails to download.
struct DirFetcher<'a> {
    urls: Vec<Url>,
    dir: &'a TempDir,
}

impl Fetcher for DirFetcher<'_> {
    fn list_archives(&self) -> Result<Vec<Url>> {
        if self.urls.is_empty() {
            return Err(Error::new(ErrorKind::NotFound, "no archive links"));
        }
        Ok(self.urls.clone())
    }

    fn download(
        &self,
        url: &Url,
    ) -> Result<PathBuf> {
        if url.ends_with("missing.lzh") {
            return Err(Error::new(ErrorKind::NotFound, "404"));
        }
        let name: &str = url.rsplit('/').next().unwrap_or_default();
        Ok(create_file_bytes_in_tmpdir(b"archive", &format!("dl/{}", name), self.dir))
    }
}

/// "Unpacks" an archive `<stem>.lzh` into `work/<stem>/`, creating the
/// record files listed for that stem.
struct FixedExtractor<'a> {
    contents: Vec<(&'static str, Vec<&'static str>)>,
    dir: &'a TempDir,
}

impl FixedExtractor<'_> {
    fn work_dir(
        &self,
        archive: &Path,
    ) -> PathBuf {
        let stem = archive.file_stem().unwrap().to_string_lossy();
        self.dir.path().join("work").join(stem.as_ref())
    }
}

impl Extractor for FixedExtractor<'_> {
    fn unpack(
        &self,
        archive: &Path,
    ) -> Result<Vec<PathBuf>> {
        assert!(archive.is_file());
        let stem = archive.file_stem().unwrap().to_string_lossy();
        let names: &Vec<&str> = match self.contents.iter().find(|(stem_, _)| *stem_ == stem) {
            Some((_, names)) => names,
            None => return Err(Error::new(ErrorKind::InvalidData, "bad archive")),
        };
        Ok(names
            .iter()
            .map(|name| {
                create_file_bytes_in_tmpdir(b"data", &format!("work/{}/{}", stem, name), self.dir)
            })
            .collect())
    }

    fn discard(
        &self,
        archive: &Path,
    ) -> Result<()> {
        std::fs::remove_dir_all(self.work_dir(archive))
    }
}

#[test]
fn test_fetch_and_route() {
    let tmpdir = create_temp_dir();
    let root: PathBuf = tmpdir.path().join("root");
    let fetcher = DirFetcher {
        urls: vec![
            Url::from("http://h/data/Kyi/KYI240106.lzh"),
            Url::from("http://h/data/Kyi/missing.lzh"),
            Url::from("http://h/data/Kyi/KYI240113.lzh"),
            Url::from("http://h/data/Kyi/broken.lzh"),
        ],
        dir: &tmpdir,
    };
    let extractor = FixedExtractor {
        contents: vec![
            ("KYI240106", vec!["KYI240106.txt"]),
            ("KYI240113", vec!["KYI240113.txt", "readme.txt"]),
        ],
        dir: &tmpdir,
    };
    let router = YearTypeRouter::new(root.clone());
    let summary: SummaryFetch = fetch_and_route(&fetcher, &extractor, &router).unwrap();

    let routed1: PathBuf = root.join("KYI").join("2024").join("KYI240106.txt");
    let routed2: PathBuf = root.join("KYI").join("2024").join("KYI240113.txt");
    let dl: PathBuf = tmpdir.path().join("dl");
    assert_eq!(
        summary,
        SummaryFetch {
            fetch_archives_listed: 4,
            fetch_archives_downloaded: 2,
            fetch_archives_failed: 2,
            fetch_files_routed: 2,
            fetch_files_failed: 1,
            fetch_routed: vec![path_to_fpath(&routed1), path_to_fpath(&routed2)],
            fetch_kept: vec![
                path_to_fpath(&dl.join("KYI240113.lzh")),
                path_to_fpath(&dl.join("broken.lzh")),
            ],
        }
    );
    assert!(routed1.is_file());
    assert!(routed2.is_file());
    // a fully routed archive is removed with what was extracted from it
    assert!(!dl.join("KYI240106.lzh").exists());
    assert!(!tmpdir.path().join("work").join("KYI240106").exists());
    // an archive with an unroutable file is kept, and so is that file
    assert!(dl.join("KYI240113.lzh").is_file());
    assert!(tmpdir.path().join("work").join("KYI240113").join("readme.txt").is_file());
    assert!(dl.join("broken.lzh").is_file());
}

#[test]
fn test_fetch_and_route_list_fails() {
    let tmpdir = create_temp_dir();
    let fetcher = DirFetcher {
        urls: vec![],
        dir: &tmpdir,
    };
    let extractor = FixedExtractor {
        contents: vec![],
        dir: &tmpdir,
    };
    let router = YearTypeRouter::new(tmpdir.path().join("root"));
    let err = fetch_and_route(&fetcher, &extractor, &router).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
