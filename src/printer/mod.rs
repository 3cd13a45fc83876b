// src/printer/mod.rs

//! Writers of decoded tables and of the `--summary` report.

pub mod csvwriter;
pub mod printers;
pub mod summary;
