//! Loading of the periodic-table lookup file
//!
//! The lookup file is a single JSON object: an `"order"` array listing the
//! canonical element keys, plus one object per key carrying the element's
//! fields. Records may carry extra fields (atomic mass, discovery data, ...);
//! anything beyond what the tile needs is ignored.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the element table
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read lookup file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse lookup JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("lookup table has no \"order\" array")]
    MissingOrder,

    #[error("ordering lists '{key}' but the table has no record for it")]
    MissingRecord { key: String },

    #[error("invalid record for '{key}': {source}")]
    InvalidRecord {
        key: String,
        source: serde_json::Error,
    },
}

/// One element of the periodic table, as read from the lookup file.
///
/// `key` is the canonical lowercase name from the table's ordering list and
/// is the identity the categorizer matches on; `name` is the display form
/// drawn on the tile.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub key: String,
    pub name: String,
    pub symbol: String,
    pub number: u32,
    pub category: String,
    pub group: Option<u32>,
    pub block: String,
}

/// Fields deserialized straight from a record object; the key is attached
/// separately since it lives in the ordering list, not the record.
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    symbol: String,
    number: u32,
    category: String,
    #[serde(default)]
    group: Option<u32>,
    block: String,
}

/// The full element table in canonical order
#[derive(Debug, Clone)]
pub struct ElementTable {
    order: Vec<String>,
    elements: HashMap<String, ElementRecord>,
}

impl ElementTable {
    /// Load the table from a lookup file on disk
    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse the table from lookup JSON
    pub fn from_str(content: &str) -> Result<Self, DataError> {
        let mut root: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(content)?;

        let order: Vec<String> = match root.remove("order") {
            Some(value) => serde_json::from_value(value)?,
            None => return Err(DataError::MissingOrder),
        };

        let mut elements = HashMap::with_capacity(order.len());
        for key in &order {
            let value = root
                .remove(key)
                .ok_or_else(|| DataError::MissingRecord { key: key.clone() })?;
            let raw: RawRecord = serde_json::from_value(value)
                .map_err(|source| DataError::InvalidRecord {
                    key: key.clone(),
                    source,
                })?;
            elements.insert(
                key.clone(),
                ElementRecord {
                    key: key.clone(),
                    name: raw.name,
                    symbol: raw.symbol,
                    number: raw.number,
                    category: raw.category,
                    group: raw.group,
                    block: raw.block,
                },
            );
        }

        Ok(Self { order, elements })
    }

    /// Number of elements in the table
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up one element by its canonical key
    pub fn get(&self, key: &str) -> Option<&ElementRecord> {
        self.elements.get(key)
    }

    /// Iterate records in canonical order
    pub fn iter_ordered(&self) -> impl Iterator<Item = &ElementRecord> {
        // every order entry was checked against the map during parsing
        self.order.iter().filter_map(|key| self.elements.get(key))
    }
}
