// src/readers/registry.rs

//! The [`SchemaRegistry`] maps a record type tag to its [`RecordDecoder`].
//!
//! [`RecordDecoder`]: crate::readers::recorddecoder::RecordDecoder

use crate::common::DecodeError;
use crate::data::catalog::layout_of;
use crate::data::layout::{
    FieldLayout,
    RecordTypeTag,
    RECORD_TYPE_TAGS,
};
use crate::readers::recorddecoder::RecordDecoder;

use std::collections::BTreeMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Closed lookup table of every supported record type.
///
/// [`SchemaRegistry::new`] checks every layout once; after that,
/// [`resolve`] is a pure lookup.
///
/// [`resolve`]: SchemaRegistry::resolve
#[derive(Debug)]
pub struct SchemaRegistry {
    layouts: BTreeMap<RecordTypeTag, &'static FieldLayout>,
}

impl SchemaRegistry {
    /// Create the registry and validate every layout in the catalog.
    ///
    /// Fails with [`DecodeError::InvalidLayout`] naming the first layout
    /// that breaks an invariant.
    pub fn new() -> Result<SchemaRegistry, DecodeError> {
        defn!();
        let mut layouts: BTreeMap<RecordTypeTag, &'static FieldLayout> = BTreeMap::new();
        for tag in RECORD_TYPE_TAGS.iter() {
            let layout: &'static FieldLayout = layout_of(*tag);
            debug_assert_eq!(layout.record_type, *tag, "catalog layout for {} is tagged {}", tag, layout.record_type);
            if let Err(err) = layout.validate() {
                defx!("{}", err);
                return Err(err);
            }
            layouts.insert(*tag, layout);
        }
        defx!("{} layouts", layouts.len());

        Ok(SchemaRegistry { layouts })
    }

    /// Decoder for the record type named `tag`, e.g. `"BAC"` or `"oz"`.
    ///
    /// Fails with [`DecodeError::UnsupportedType`] for any other name. No
    /// I/O happens here.
    pub fn resolve(
        &self,
        tag: &str,
    ) -> Result<RecordDecoder, DecodeError> {
        defñ!("({:?})", tag);
        let record_type: RecordTypeTag = tag.parse::<RecordTypeTag>()?;
        match self.layouts.get(&record_type) {
            Some(layout) => Ok(RecordDecoder::new(*layout)),
            None => Err(DecodeError::UnsupportedType(String::from(tag))),
        }
    }

    /// Decoder for an already parsed tag.
    pub fn resolve_tag(
        &self,
        record_type: RecordTypeTag,
    ) -> Option<RecordDecoder> {
        self.layouts
            .get(&record_type)
            .map(|layout| RecordDecoder::new(*layout))
    }

    pub fn layout(
        &self,
        record_type: RecordTypeTag,
    ) -> Option<&'static FieldLayout> {
        self.layouts.get(&record_type).copied()
    }

    /// Supported tags, sorted.
    pub fn tags(&self) -> impl Iterator<Item = &RecordTypeTag> {
        self.layouts.keys()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
