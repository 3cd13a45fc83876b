// src/readers/aggregator.rs

//! Concatenate the per-file [`DecodedTable`]s of one bucket.
//!
//! [`DecodedTable`]: crate::data::record::DecodedTable

use crate::common::{debug_panic, DecodeError, Year};
use crate::data::layout::RecordTypeTag;
use crate::data::record::DecodedTable;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Concatenate `tables` of the bucket of `record_type` in the given
/// order; rows within each table keep their order. No sorting on content
/// happens.
///
/// The result takes `year` if passed, otherwise the first table's year.
///
/// Fails with [`DecodeError::EmptyAggregation`] when `tables` is empty or
/// holds zero records in total. A table of a record type other than
/// `record_type` is a caller bug; it panics in debug builds and is dropped
/// in release builds.
pub fn aggregate(
    record_type: RecordTypeTag,
    tables: Vec<DecodedTable>,
    year: Option<Year>,
) -> Result<DecodedTable, DecodeError> {
    defn!("({}, {} tables, year {:?})", record_type, tables.len(), year);
    let mut aggregate = DecodedTable::new(record_type, year);
    for table in tables {
        if table.record_type != record_type {
            debug_panic!(
                "aggregate: table of record type {} dropped from bucket of record type {}",
                table.record_type,
                record_type
            );
            continue;
        }
        if aggregate.year.is_none() {
            aggregate.year = table.year;
        }
        defo!("append {} records", table.records.len());
        aggregate.records.extend(table.records);
    }
    if aggregate.is_empty() {
        defx!("zero records");
        return Err(DecodeError::EmptyAggregation(bucket_name(record_type, aggregate.year)));
    }
    defx!("return {} records", aggregate.len());

    Ok(aggregate)
}

/// Name of a bucket for messages, e.g. `BAC/2024`.
fn bucket_name(
    record_type: RecordTypeTag,
    year: Option<Year>,
) -> String {
    match year {
        Some(year) => format!("{}/{}", record_type, year),
        None => record_type.to_string(),
    }
}
