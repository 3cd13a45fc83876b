// src/acquire/router.rs

//! Route raw record files to `<root>/<TYPE>/<YEAR>/` by file name.

use crate::acquire::Router;
use crate::readers::filepreprocessor::{bucket_dir, filename_to_type_year};

use std::fs::{copy, create_dir_all, remove_file, rename};
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Routes by the type letters and two-digit year in a file name, e.g.
/// `KYI240106.txt` goes to `<root>/KYI/2024/`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YearTypeRouter {
    root: PathBuf,
}

impl YearTypeRouter {
    pub fn new(root: PathBuf) -> YearTypeRouter {
        YearTypeRouter { root }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }
}

impl Router for YearTypeRouter {
    fn route(
        &self,
        path: &Path,
    ) -> Result<PathBuf> {
        defn!("({:?})", path);
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => {
                defx!("no file name");
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("path {:?} has no file name", path),
                ));
            }
        };
        let (letters, year) = match filename_to_type_year(&name) {
            Some(type_year) => type_year,
            None => {
                defx!("no type and year in {:?}", name);
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("file name {:?} has no record type letters followed by a year", name),
                ));
            }
        };
        let dir: PathBuf = bucket_dir(&self.root, &letters, year);
        defx!("return {:?}", dir);

        Ok(dir)
    }

    /// Existing bucket directories are reused. A file of the same name in
    /// the bucket is replaced.
    fn relocate(
        &self,
        path: &Path,
    ) -> Result<PathBuf> {
        defn!("({:?})", path);
        let dir: PathBuf = self.route(path)?;
        create_dir_all(&dir)?;
        // `route` already checked there is a file name
        let target: PathBuf = match path.file_name() {
            Some(name) => dir.join(name),
            None => return Err(Error::new(ErrorKind::InvalidInput, "no file name")),
        };
        if let Err(_err) = rename(path, &target) {
            // e.g. crossing filesystems
            defo!("rename failed {}; copy then remove", _err);
            copy(path, &target)?;
            remove_file(path)?;
        }
        defx!("return {:?}", target);

        Ok(target)
    }
}
