// src/readers/mod.rs

//! _Readers_ for the raw record files.
//!
//! ## Overview of readers
//!
//! * A [`SchemaRegistry`] resolves a record type tag to a [`RecordDecoder`].
//! * A [`RecordDecoder`] decodes one file into a [`DecodedTable`], resolving
//!   the file's charset with [`charset`].
//! * A [`BucketProcessor`] decodes all files of one `(record type, year)`
//!   bucket on worker threads and hands the tables to [`aggregate`].
//!
//! The [`filepreprocessor`] finds bucket directories and record files.
//!
//! [`SchemaRegistry`]: crate::readers::registry::SchemaRegistry
//! [`RecordDecoder`]: crate::readers::recorddecoder::RecordDecoder
//! [`DecodedTable`]: crate::data::record::DecodedTable
//! [`BucketProcessor`]: crate::readers::bucketprocessor::BucketProcessor
//! [`aggregate`]: crate::readers::aggregator::aggregate
//! [`charset`]: crate::readers::charset
//! [`filepreprocessor`]: crate::readers::filepreprocessor

pub mod aggregator;
pub mod bucketprocessor;
pub mod charset;
pub mod filepreprocessor;
pub mod helpers;
pub mod recorddecoder;
pub mod registry;
pub mod summary;
