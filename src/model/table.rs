use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use super::ReservedLabels;

/// One column of a report: a label and the items listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorColumn {
    pub label: String,
    pub items: Vec<String>,
}

/// Ordered mapping from vendor label to the items found for it.
///
/// Labels keep the order in which they were first seen and each list keeps
/// insertion order. The two reserved labels are created up front so they
/// are present even when nothing lands in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorTable {
    labels: ReservedLabels,
    columns: Vec<VendorColumn>,
    index: HashMap<String, usize>,
}

impl VendorTable {
    pub fn new(labels: ReservedLabels) -> Self {
        let mut table = Self {
            labels,
            columns: Vec::new(),
            index: HashMap::new(),
        };
        let unknown = table.labels.unknown.clone();
        let not_recognized = table.labels.not_recognized.clone();
        table.entry(&unknown);
        table.entry(&not_recognized);
        table
    }

    /// Returns the list for `label`, creating an empty one on first use.
    pub fn entry(&mut self, label: &str) -> &mut Vec<String> {
        let idx = match self.index.get(label) {
            Some(&idx) => idx,
            None => {
                self.columns.push(VendorColumn {
                    label: label.to_string(),
                    items: Vec::new(),
                });
                let idx = self.columns.len() - 1;
                self.index.insert(label.to_string(), idx);
                idx
            }
        };
        &mut self.columns[idx].items
    }

    pub fn push(&mut self, label: &str, item: impl Into<String>) {
        self.entry(label).push(item.into());
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.index
            .get(label)
            .map(|&idx| self.columns[idx].items.as_slice())
    }

    pub fn labels(&self) -> &ReservedLabels {
        &self.labels
    }

    /// All columns, reserved ones included, in first-seen order.
    pub fn columns(&self) -> &[VendorColumn] {
        &self.columns
    }

    /// Vendor columns, i.e. everything except the two reserved buckets.
    pub fn vendor_columns(&self) -> impl Iterator<Item = &VendorColumn> {
        self.columns
            .iter()
            .filter(|c| !self.labels.is_reserved(&c.label))
    }

    /// The unknown-vendor and not-recognized columns, in that order.
    pub fn check_columns(&self) -> [&VendorColumn; 2] {
        [
            &self.columns[self.index[&self.labels.unknown]],
            &self.columns[self.index[&self.labels.not_recognized]],
        ]
    }

    pub fn unknown(&self) -> &[String] {
        self.check_columns()[0].items.as_slice()
    }

    pub fn not_recognized(&self) -> &[String] {
        self.check_columns()[1].items.as_slice()
    }

    /// Number of plugins listed under a vendor or the unknown bucket.
    pub fn plugin_count(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| c.label != self.labels.not_recognized)
            .map(|c| c.items.len())
            .sum()
    }

    pub fn total_items(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum()
    }
}

impl Serialize for VendorTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.label, &column.items)?;
        }
        map.end()
    }
}
