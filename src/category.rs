//! Category assignment for periodic-table elements
//!
//! Every element is mapped to exactly one normalized category string by a
//! fixed chain of rules. The rules run in order and each one unconditionally
//! reassigns the working category, so a later rule wins over an earlier one.
//! The allow-list and atomic-number tables are data-source corrections and
//! are kept as literal data.

use crate::data::{ElementRecord, ElementTable};

/// "post-transition metal" entries that stay metals; the rest of that raw
/// category is folded into "non metal".
const POOR_METAL_NAMES: &[&str] = &["aluminium", "gallium", "indium", "tin", "thallium", "lead"];

/// Metalloids reclassified as non metals.
const NON_METAL_NUMBERS: &[u32] = &[5, 14, 33, 52, 85];

/// Elements forced to poor metal regardless of their raw category.
const POOR_METAL_NUMBERS: &[u32] = &[50, 82, 83, 84, 114, 115, 116];

/// Map one element record to its normalized category.
///
/// Pure: the result depends only on the record's key, number, group, block
/// and raw category string. Spaces in the final category are replaced with
/// underscores so the result is safe as a file base name.
pub fn categorize(elem: &ElementRecord) -> String {
    let mut cat = elem
        .category
        .replace("unknown, probably ", "")
        .replace("unknown, predicted to be ", "");

    // hydrogen gets its own sheet
    if elem.key == "hydrogen" {
        cat = "hydrogen".to_string();
    }

    // p-block metalloids behave as poor metals here
    if cat == "metalloid" && elem.block == "p" {
        cat = "poor metal".to_string();
    }

    if cat.contains("nonmetal") {
        cat = "non metal".to_string();
    }

    if elem.group == Some(12) && cat != "non metal" {
        cat = "poor metal".to_string();
    }

    // data-source correction
    if elem.key == "nihonium" {
        cat = "poor metal".to_string();
    }

    if cat == "post-transition metal" {
        if POOR_METAL_NAMES.contains(&elem.key.as_str()) {
            cat = "poor metal".to_string();
        } else {
            cat = "non metal".to_string();
        }
    }

    if NON_METAL_NUMBERS.contains(&elem.number) {
        cat = "non metal".to_string();
    }

    if POOR_METAL_NUMBERS.contains(&elem.number) {
        cat = "poor metal".to_string();
    }

    cat.replace(' ', "_")
}

/// One normalized category and its member element keys, in the order the
/// members first appeared in the canonical element ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket {
    pub category: String,
    pub members: Vec<String>,
}

/// All category buckets for a table, in order of first encounter
#[derive(Debug, Clone, Default)]
pub struct CategoryBuckets {
    buckets: Vec<CategoryBucket>,
}

impl CategoryBuckets {
    /// Bucket every element of the table by its normalized category
    pub fn from_table(table: &ElementTable) -> Self {
        let mut buckets = Self::default();
        for elem in table.iter_ordered() {
            buckets.insert(categorize(elem), elem.key.clone());
        }
        buckets
    }

    fn insert(&mut self, category: String, key: String) {
        match self.buckets.iter_mut().find(|b| b.category == category) {
            Some(bucket) => bucket.members.push(key),
            None => self.buckets.push(CategoryBucket {
                category,
                members: vec![key],
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Look up one bucket by its normalized category name
    pub fn get(&self, category: &str) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|b| b.category == category)
    }

    /// Iterate buckets in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryBucket> {
        self.buckets.iter()
    }
}
