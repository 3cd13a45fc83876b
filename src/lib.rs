// src/lib.rs

//! _jrdblib_ decodes JRDB fixed-width record files.
//!
//! The vendor publishes each record type (`BAC`, `KYI`, `OZ`, …) as plain
//! text files where every line is one record and every field occupies a
//! fixed byte range. _jrdblib_ holds the byte layouts of every supported
//! record type, decodes files of those types into tables of named fields,
//! and writes the tables out as UTF-8 CSV.
//!
//! * [`data`] holds the layouts ([`FieldLayout`]) and decoded containers.
//! * [`readers`] holds the machinery that reads files: the
//!   [`SchemaRegistry`], the [`RecordDecoder`], and the per-bucket worker pool.
//! * [`printer`] writes decoded tables and `--summary` reports.
//! * [`acquire`] fetches, unpacks and routes raw vendor archives.
//!
//! The binary program _jrdb_ drives these.
//!
//! [`FieldLayout`]: crate::data::layout::FieldLayout
//! [`SchemaRegistry`]: crate::readers::registry::SchemaRegistry
//! [`RecordDecoder`]: crate::readers::recorddecoder::RecordDecoder

pub mod acquire;
pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
