// src/data/mod.rs

//! The `data` module is the record layouts and the containers that hold
//! decoded values. No file I/O happens here.
//!
//! ## Definitions of data
//!
//! A _record type_ is the vendor's name for one kind of file, e.g. `BAC`
//! (番組データ, race programs) or `OZ` (単複・馬連オッズ, odds).
//!
//! A _line_ is the bytes of one record, without the line terminator.
//!
//! A _span_ ([`ByteSpan`]) is a named byte range of a line. A
//! _layout_ ([`FieldLayout`]) is every span of one record type.
//!
//! A _record_ ([`DecodedRecord`]) is the decoded values of one line.
//!
//! [`ByteSpan`]: crate::data::layout::ByteSpan
//! [`FieldLayout`]: crate::data::layout::FieldLayout
//! [`DecodedRecord`]: crate::data::record::DecodedRecord

pub mod catalog;
pub mod layout;
pub mod record;
