// src/acquire/extractor.rs

//! Unpack the vendor's LHA (`.lzh`) archives with the external `lha`
//! program.

use crate::acquire::Extractor;
use crate::readers::filepreprocessor::is_record_file;

use std::fs::{create_dir_all, remove_dir_all};
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
use ::walkdir::WalkDir;

/// Program run by default to unpack archives.
pub const LHA_PROGRAM_DEFAULT: &str = "lha";

/// Runs `lha -xw=<dir> <archive>` where `<dir>` is a fresh subdirectory of
/// `work_dir` named after the archive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LhaExtractor {
    program: String,
    work_dir: PathBuf,
}

impl LhaExtractor {
    pub fn new(work_dir: PathBuf) -> LhaExtractor {
        LhaExtractor::with_program(String::from(LHA_PROGRAM_DEFAULT), work_dir)
    }

    pub fn with_program(
        program: String,
        work_dir: PathBuf,
    ) -> LhaExtractor {
        LhaExtractor { program, work_dir }
    }

    /// Directory the files of `archive` are extracted into.
    pub fn extract_dir(
        &self,
        archive: &Path,
    ) -> PathBuf {
        let stem = match archive.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => String::from("archive"),
        };
        self.work_dir.join(stem)
    }
}

/// The record files under `dir`, sorted by path.
pub fn record_files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_record_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    files
}

impl Extractor for LhaExtractor {
    fn unpack(
        &self,
        archive: &Path,
    ) -> Result<Vec<PathBuf>> {
        defn!("({:?})", archive);
        if !archive.is_file() {
            defx!("not a file");
            return Err(Error::new(
                ErrorKind::NotFound,
                format!("archive {:?} is not a file", archive),
            ));
        }
        let dir: PathBuf = self.extract_dir(archive);
        create_dir_all(&dir)?;
        let arg_dir: String = format!("-xw={}", dir.to_string_lossy());
        defo!("Command::new({:?}).args([{:?}, {:?}])", self.program, arg_dir, archive);
        let output: Output = match Command::new(self.program.as_str())
            .arg(arg_dir.as_str())
            .arg(archive)
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                defx!("failed to start {:?}: {}", self.program, err);
                return Err(Error::new(
                    err.kind(),
                    format!("{:?} failed to start: {}", self.program, err),
                ));
            }
        };
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            defx!("{:?} exited {:?}", self.program, output.status);
            return Err(Error::other(format!(
                "{:?} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        let files: Vec<PathBuf> = record_files_in(&dir);
        defx!("{} record files", files.len());

        Ok(files)
    }

    fn discard(
        &self,
        archive: &Path,
    ) -> Result<()> {
        let dir: PathBuf = self.extract_dir(archive);
        defñ!("({:?}) {:?}", archive, dir);
        if !dir.exists() {
            return Ok(());
        }

        remove_dir_all(&dir)
    }
}
