// src/readers/helpers.rs

//! Miscellaneous helper functions for _Readers_.

use crate::common::{
    CRu8,
    FPath,
    FileSz,
};

use std::path::Path;

#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

/// Return the basename of an `FPath`.
pub fn basename(path: &FPath) -> FPath {
    let mut riter = path.rsplit(std::path::MAIN_SEPARATOR);

    FPath::from(riter.next().unwrap_or(""))
}

/// Helper function for a slightly annoying set of calls.
pub fn path_to_fpath(path: &Path) -> FPath {
    // `PathBuf` to `String` https://stackoverflow.com/q/37388107/471376
    (*(path.to_string_lossy())).to_string()
}

/// Helper function for completeness.
pub fn fpath_to_path(path: &FPath) -> &Path {
    Path::new(path)
}

/// Return the size of the file.
pub fn path_filesz(path: &Path) -> Option<FileSz> {
    defn!("({:?})", path);
    let metadata = match std::fs::metadata(path) {
        Ok(val) => val,
        Err(_err) => {
            defx!("error {}, return None", _err);
            return None;
        }
    };
    let len: FileSz = metadata.len();
    defx!("return {}", len);

    Some(len)
}

/// Trim leading and trailing Unicode White_Space, which includes the
/// ideographic space U+3000 used to pad full-width text.
#[inline(always)]
pub fn trim_field(value: &str) -> &str {
    value.trim()
}

/// Strip one trailing `'\r'`.
#[inline(always)]
pub fn strip_cr(line: &[u8]) -> &[u8] {
    match line.split_last() {
        Some((&CRu8, rest)) => rest,
        _ => line,
    }
}
