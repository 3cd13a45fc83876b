// src/printer/csvwriter.rs

//! Write a [`DecodedTable`] as a UTF-8 CSV file, one file per
//! `(record type, year)`.
//!
//! The header row is the layout's column names. A repeated group `name`
//! of `count` entries becomes the columns `name_1` … `name_count`.
//! [`FieldValue::Missing`] is an empty cell.
//!
//! [`DecodedTable`]: crate::data::record::DecodedTable
//! [`FieldValue::Missing`]: crate::data::record::FieldValue::Missing

use crate::common::{
    Count,
    FPath,
    Year,
};
use crate::data::layout::{FieldLayout, RecordTypeTag};
use crate::data::record::{DecodedTable, FieldValue};
use crate::readers::helpers::path_to_fpath;

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Error, ErrorKind, Result, Write};
use std::path::{Path, PathBuf};

use ::csv::WriterBuilder;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// File name extension of written tables.
pub const CSV_EXTENSION: &str = "csv";

/// Output file name, e.g. `BAC_2024.csv`, or `BAC.csv` without a year.
pub fn output_file_name(
    record_type: RecordTypeTag,
    year: Option<Year>,
) -> String {
    match year {
        Some(year) => format!("{}_{}.{}", record_type, year, CSV_EXTENSION),
        None => format!("{}.{}", record_type, CSV_EXTENSION),
    }
}

fn csv_to_io_error(err: ::csv::Error) -> Error {
    match err.into_kind() {
        ::csv::ErrorKind::Io(err) => err,
        kind => Error::new(ErrorKind::Other, format!("{:?}", kind)),
    }
}

/// Append the cells of `value` to `row`.
fn push_cells(
    row: &mut Vec<String>,
    value: &FieldValue,
) {
    match value {
        FieldValue::Text(text) => row.push(text.clone()),
        FieldValue::Integer(value) => row.push(value.to_string()),
        FieldValue::Sequence(values) => row.extend(values.iter().cloned()),
        FieldValue::Missing => row.push(String::new()),
    }
}

/// Write the header and every record of `table` to `writer`.
///
/// Returns the count of data rows written.
pub fn write_table_to<W: Write>(
    table: &DecodedTable,
    layout: &FieldLayout,
    writer: W,
) -> Result<Count> {
    defn!("({} records of {})", table.len(), table.record_type);
    debug_assert_eq!(table.record_type, layout.record_type, "table and layout record types differ");
    let mut csv_writer = WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);
    let header: Vec<String> = layout.column_names();
    csv_writer
        .write_record(&header)
        .map_err(csv_to_io_error)?;
    let mut rows: Count = 0;
    let mut row: Vec<String> = Vec::with_capacity(header.len());
    for record in table.records.iter() {
        row.clear();
        for (_name, value) in record.fields().iter() {
            push_cells(&mut row, value);
        }
        if row.len() != header.len() {
            defx!("row {} has {} cells, header has {}", rows, row.len(), header.len());
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "record {} of {} has {} cells, expected {}",
                    rows,
                    table.record_type,
                    row.len(),
                    header.len()
                ),
            ));
        }
        csv_writer
            .write_record(&row)
            .map_err(csv_to_io_error)?;
        rows += 1;
    }
    csv_writer.flush()?;
    defx!("wrote {} rows", rows);

    Ok(rows)
}

/// Write `table` to `<output_dir>/<TAG>_<YEAR>.csv`, creating
/// `output_dir` if needed. An existing file is replaced.
///
/// Returns the path written and the count of data rows.
pub fn write_table(
    table: &DecodedTable,
    layout: &FieldLayout,
    output_dir: &Path,
) -> Result<(FPath, Count)> {
    defn!("({:?})", output_dir);
    create_dir_all(output_dir)?;
    let path: PathBuf = output_dir.join(output_file_name(table.record_type, table.year));
    let file: File = File::create(&path)?;
    let rows: Count = write_table_to(table, layout, BufWriter::new(file))?;
    let fpath: FPath = path_to_fpath(&path);
    defx!("({:?}) {} rows", fpath, rows);

    Ok((fpath, rows))
}
