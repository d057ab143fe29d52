/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::inline::Inlines;
use crate::tag::MetaValueTag;
use hashlink::LinkedHashMap;

// Pandoc's MetaValue notably does not support numbers or nulls, so we don't either
// https://pandoc.org/lua-filters.html#type-metavalue
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    MetaMap(LinkedHashMap<String, MetaValue>),
    MetaList(Vec<MetaValue>),
    MetaBool(bool),
    MetaString(String),
    MetaInlines(Inlines),
    MetaBlocks(Blocks),
}

impl Default for MetaValue {
    fn default() -> Self {
        MetaValue::MetaMap(LinkedHashMap::new())
    }
}

/// Document metadata, in source key order.
pub type Meta = LinkedHashMap<String, MetaValue>;

impl MetaValue {
    pub fn tag(&self) -> MetaValueTag {
        match self {
            MetaValue::MetaMap(_) => MetaValueTag::MetaMap,
            MetaValue::MetaList(_) => MetaValueTag::MetaList,
            MetaValue::MetaBool(_) => MetaValueTag::MetaBool,
            MetaValue::MetaString(_) => MetaValueTag::MetaString,
            MetaValue::MetaInlines(_) => MetaValueTag::MetaInlines,
            MetaValue::MetaBlocks(_) => MetaValueTag::MetaBlocks,
        }
    }

    /// Get a value by key if this is a MetaMap
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        match self {
            MetaValue::MetaMap(map) => map.get(key),
            _ => None,
        }
    }
}
