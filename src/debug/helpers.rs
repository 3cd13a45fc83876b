// src/debug/helpers.rs

//! Temporary file helpers for testing.

use crate::common::FPath;

use std::fs::create_dir_all;
use std::io::Write; // for `NamedTempFile.write_all`
use std::path::{Path, PathBuf};

use ::lazy_static::lazy_static;
use ::si_trace_print::{defñ, defn, defx};

#[doc(hidden)]
pub use ::tempfile::NamedTempFile;
#[doc(hidden)]
pub use ::tempfile::TempDir;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// temporary file helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// NamedTempFile instances default to this file name prefix.
pub const STR_TEMPFILE_PREFIX: &str = "tmp-jrdb-test-";

lazy_static! {
    pub static ref STRING_TEMPFILE_PREFIX: String = String::from(STR_TEMPFILE_PREFIX);
}

/// Small helper function for copying `NamedTempFile` path to a `FPath`.
pub fn ntf_fpath(ntf: &NamedTempFile) -> FPath {
    FPath::from(ntf.path().to_str().unwrap())
}

/// Testing helper function to write a `[u8]` to a temporary file.
pub fn create_temp_file_bytes(data: &[u8]) -> NamedTempFile {
    let mut ntf = match ::tempfile::Builder::new()
        // use known prefix for easier cleanup
        .prefix::<str>(&STRING_TEMPFILE_PREFIX)
        .suffix(".txt")
        .tempfile()
    {
        Ok(val) => val,
        Err(err) => {
            panic!("tempfile::Builder::new()..tempfile() return Err {}", err);
        }
    };
    match ntf.write_all(data) {
        Ok(_) => {}
        Err(err) => {
            panic!("NamedTempFile::write_all() return Err {}", err);
        }
    }

    ntf
}

/// Create a temporary directory
pub fn create_temp_dir() -> TempDir {
    defñ!();
    ::tempfile::Builder::new()
        .prefix::<str>(&STRING_TEMPFILE_PREFIX)
        .tempdir()
        .unwrap()
}

/// Testing helper function to write a `[u8]` to a file at relative path
/// `name` in `tempdir`. Leading directories of `name` are created.
///
/// Returns the full path of the written file.
pub fn create_file_bytes_in_tmpdir(
    data: &[u8],
    name: &str,
    tempdir: &TempDir,
) -> PathBuf {
    defn!("({:?})", name);
    let path: PathBuf = tempdir.path().join(name);
    if let Some(parent) = path.parent() {
        create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, data).unwrap();
    defx!("{:?}", path);

    path
}

/// Join a [`Path`] and a relative `name` into a `FPath`.
pub fn join_fpath(
    dir: &Path,
    name: &str,
) -> FPath {
    FPath::from(dir.join(name).to_str().unwrap())
}
