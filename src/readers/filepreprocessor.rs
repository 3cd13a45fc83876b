// src/readers/filepreprocessor.rs

//! Functions to find the raw record files of a bucket and to classify raw
//! file names by record type and issue year.
//!
//! A _bucket_ is the directory `<root>/<TAG>/<YEAR>/`. Its `.txt` files are
//! decoded together into one table.

use crate::common::{
    FPath,
    Year,
    TXT_EXTENSION,
};
use crate::readers::helpers::{
    fpath_to_path,
    path_to_fpath,
};

use std::path::{Path, PathBuf};

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::walkdir::WalkDir;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file names
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

lazy_static! {
    /// Type letters then digits, e.g. `BAC240106` or `sed9912`.
    static ref REGEX_TYPE_DIGITS: Regex = Regex::new(r"([a-zA-Z]+)(\d+)").unwrap();
}

/// Two-digit years at or above this are 19xx.
pub const CENTURY_PIVOT: u16 = 80;

/// The type letters (upper-cased) and issue year of a raw file name, e.g.
/// `"bac990101.txt"` is `("BAC", 1999)` and `"OZ240106.txt"` is
/// `("OZ", 2024)`.
///
/// The first two digits give the year within the century: `80..=99` is
/// 19xx, anything else 20xx. Returns `None` when the name does not hold
/// letters followed by at least two digits.
pub fn filename_to_type_year(name: &str) -> Option<(String, Year)> {
    defn!("({:?})", name);
    let captures = match REGEX_TYPE_DIGITS.captures(name) {
        Some(captures) => captures,
        None => {
            defx!("no match");
            return None;
        }
    };
    let letters: &str = captures.get(1)?.as_str();
    let digits: &str = captures.get(2)?.as_str();
    if digits.len() < 2 {
        defx!("digits {:?} too short", digits);
        return None;
    }
    let yy: u16 = match digits[..2].parse::<u16>() {
        Ok(yy) => yy,
        Err(_err) => {
            defx!("parse {:?} failed {}", &digits[..2], _err);
            return None;
        }
    };
    let year: Year = if yy >= CENTURY_PIVOT { 1900 + yy } else { 2000 + yy };
    defx!("return ({:?}, {})", letters.to_ascii_uppercase(), year);

    Some((letters.to_ascii_uppercase(), year))
}

/// The bucket directory `<root>/<TYPE>/<YEAR>` of a raw file name.
pub fn bucket_dir(
    root: &Path,
    type_letters: &str,
    year: Year,
) -> PathBuf {
    root.join(type_letters).join(year.to_string())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// bucket discovery
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Initial path processing return type.
#[derive(Debug, Eq, PartialEq)]
pub enum ProcessPathResult {
    /// A raw record file
    FileValid(FPath),
    /// A file that is not a `.txt` record file
    FileErrNotSupported(FPath),
    /// Path exists and is not a file
    FileErrNotAFile(FPath),
    /// Path does not exist
    FileErrNotExist(FPath),
}

pub type ProcessPathResults = Vec<ProcessPathResult>;

impl ProcessPathResult {
    pub const fn is_valid(&self) -> bool {
        matches!(self, ProcessPathResult::FileValid(_))
    }
}

/// `true` if `path` has the `.txt` extension, ignoring case.
pub fn is_record_file(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => ext
            .to_string_lossy()
            .eq_ignore_ascii_case(TXT_EXTENSION),
        None => false,
    }
}

/// Classify the entries of the bucket directory `path`, sorted by file
/// name. Subdirectories are not descended into.
pub fn process_bucket_path(path: &FPath) -> ProcessPathResults {
    defn!("({:?})", path);
    let std_path: &Path = fpath_to_path(path);
    if !std_path.exists() {
        defx!("path does not exist");
        return vec![ProcessPathResult::FileErrNotExist(path.clone())];
    }
    if !std_path.is_dir() {
        defx!("path is not a directory");
        return vec![ProcessPathResult::FileErrNotAFile(path.clone())];
    }
    let mut results: ProcessPathResults = ProcessPathResults::new();
    for entry in WalkDir::new(std_path)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_err) => {
                defo!("walkdir error {}", _err);
                continue;
            }
        };
        let fpath: FPath = path_to_fpath(entry.path());
        if !entry.file_type().is_file() {
            defo!("not a file {:?}", fpath);
            results.push(ProcessPathResult::FileErrNotAFile(fpath));
        } else if is_record_file(entry.path()) {
            defo!("valid {:?}", fpath);
            results.push(ProcessPathResult::FileValid(fpath));
        } else {
            defo!("not supported {:?}", fpath);
            results.push(ProcessPathResult::FileErrNotSupported(fpath));
        }
    }
    defx!("{} results", results.len());

    results
}

/// The years with a bucket directory under `<root>/<tag>/`, sorted.
///
/// Directory names that are not a four digit year are ignored. A missing
/// `<root>/<tag>` is an error.
pub fn bucket_years(
    root: &Path,
    tag: &str,
) -> std::io::Result<Vec<Year>> {
    defn!("({:?}, {:?})", root, tag);
    let type_dir: PathBuf = root.join(tag);
    let mut years: Vec<Year> = Vec::new();
    for entry in std::fs::read_dir(&type_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.len() != 4 {
            continue;
        }
        if let Ok(year) = name.parse::<Year>() {
            years.push(year);
        }
    }
    years.sort_unstable();
    defx!("{:?}", years);

    Ok(years)
}
