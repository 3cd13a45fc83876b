// src/data/record.rs

//! Decoded containers: [`FieldValue`], [`DecodedRecord`], and
//! [`DecodedTable`].

use crate::common::Year;
use crate::data::layout::RecordTypeTag;

use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FieldValue
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The decoded value of one field.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum FieldValue {
    /// Trimmed text.
    Text(String),
    /// Produced only by a hex digit field holding `'a'..='f'`.
    Integer(i64),
    /// Trimmed sub-entries of a repeated group, in line order.
    Sequence(Vec<String>),
    /// The trimmed text was empty.
    Missing,
}

impl FieldValue {
    #[inline(always)]
    pub const fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            FieldValue::Sequence(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Number of output cells this value occupies.
    pub fn cell_count(&self) -> usize {
        match self {
            FieldValue::Sequence(values) => values.len(),
            _ => 1,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Sequence(values) => write!(f, "{}", values.join(",")),
            FieldValue::Missing => Ok(()),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DecodedRecord
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One decoded line: field name and value pairs in layout order.
///
/// Immutable after the decoder builds it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DecodedRecord {
    fields: Vec<(&'static str, FieldValue)>,
}

impl DecodedRecord {
    pub fn new(fields: Vec<(&'static str, FieldValue)>) -> DecodedRecord {
        DecodedRecord { fields }
    }

    /// Value of field `name`, if declared.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name_, _)| *name_ == name)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> &[(&'static str, FieldValue)] {
        self.fields.as_slice()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Count of fields that are [`FieldValue::Missing`].
    pub fn count_missing(&self) -> usize {
        self.fields
            .iter()
            .filter(|(_, value)| value.is_missing())
            .count()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DecodedTable
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Records of one record type, in line order (or, after aggregation, in
/// file then line order).
///
/// `year` is the bucket year when known. A table decoded from a lone file
/// has no year until the aggregator assigns the bucket's.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedTable {
    pub record_type: RecordTypeTag,
    pub year: Option<Year>,
    pub records: Vec<DecodedRecord>,
}

impl DecodedTable {
    pub fn new(
        record_type: RecordTypeTag,
        year: Option<Year>,
    ) -> DecodedTable {
        DecodedTable {
            record_type,
            year,
            records: Vec::new(),
        }
    }

    pub fn push(
        &mut self,
        record: DecodedRecord,
    ) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
